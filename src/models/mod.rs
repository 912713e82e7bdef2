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

pub mod endpoint;
pub mod errors;
pub mod options;
pub mod version;

pub use endpoint::{Endpoint, Resource, ResourceMethod};
pub use errors::ProblemDetail;
pub use options::{ModifyVersionOptions, VersionSelector};
pub(crate) use options::CloneVersionRequest;
pub use version::{StatusValue, Version, VersionSummary, Versions};
