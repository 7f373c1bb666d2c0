// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The HTTP transport used by the client libraries.
//!
//! The client libraries serialize, sign, and parse requests. Sending the
//! bytes over the network is delegated to an [HttpTransport]. The default
//! transport is based on `reqwest`. Applications may provide their own, for
//! example to route requests through a custom proxy, or to fake the service
//! in tests.

use crate::Result;
use bytes::Bytes;
use std::sync::Arc;
use std::time::Duration;

/// Sends fully formed HTTP requests.
///
/// Implementations return `Ok` for any response received from the service,
/// including responses with error status codes. They return `Err` only when
/// no response was received, e.g. on connection or timeout errors.
///
/// # Example
/// ```
/// # use ctrlplane_gax::http_client::HttpTransport;
/// # use bytes::Bytes;
/// # use std::time::Duration;
/// #[derive(Debug)]
/// struct AlwaysEmpty;
/// #[async_trait::async_trait]
/// impl HttpTransport for AlwaysEmpty {
///     async fn send(
///         &self,
///         _request: http::Request<Bytes>,
///         _timeout: Option<Duration>,
///     ) -> ctrlplane_gax::Result<http::Response<Bytes>> {
///         Ok(http::Response::new(Bytes::from_static(b"{}")))
///     }
/// }
/// ```
#[async_trait::async_trait]
pub trait HttpTransport: std::fmt::Debug + Send + Sync {
    /// Sends `request` and returns the response.
    ///
    /// The `timeout` is the per-attempt timeout configured by the
    /// application, if any.
    async fn send(
        &self,
        request: http::Request<Bytes>,
        timeout: Option<Duration>,
    ) -> Result<http::Response<Bytes>>;
}

/// A shareable [HttpTransport].
pub type SharedTransport = Arc<dyn HttpTransport>;
