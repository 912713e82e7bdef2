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

use async_trait::async_trait;
use http::Extensions;
use log::{debug, warn};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use std::time::Instant;

/// Logs every request sent through a [`Client`](crate::Client): method and
/// URL before sending, status and elapsed time once the response arrives.
///
/// Installed by default; disable with
/// [`ClientBuilder::without_request_logging`](crate::ClientBuilder::without_request_logging).
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware;

#[async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(
        &self,
        request: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let method = request.method().clone();
        let url = request.url().clone();
        debug!("--> {} {}", method, url);

        let started = Instant::now();
        let response = next.run(request, extensions).await;
        let elapsed = started.elapsed();
        match &response {
            Ok(resp) => debug!(
                "<-- {} {} {} ({} ms)",
                resp.status().as_u16(),
                method,
                url,
                elapsed.as_millis()
            ),
            Err(e) => warn!("<-- {} {} failed after {} ms: {}", method, url, elapsed.as_millis(), e),
        }
        response
    }
}
