//
// (C) Copyright IBM 2026
//
// This code is licensed under the Apache License, Version 2.0. You may
// obtain a copy of this license in the LICENSE.txt file in the root directory
// of this source tree or at http://www.apache.org/licenses/LICENSE-2.0.
//
// Any modifications or derivative works of this code must retain this
// copyright notice, and modified files need to carry a notice indicating
// that they have been altered from the originals.
use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the `env_logger` backend for the `log` records emitted by this
/// crate. The filter is taken from `RUST_LOG` and falls back to `warn`.
/// Only the first call has an effect, and it is a no-op when another logger
/// has already been installed by the application.
pub fn initialize() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .try_init();
    });
}
