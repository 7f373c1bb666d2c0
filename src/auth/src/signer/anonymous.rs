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

//! Anonymous signer.
//!
//! This signer does not provide any authentication information. It is useful
//! for local emulators, and for tests using fake services.

use crate::Result;
use crate::signer::{Signer, SigningProvider, SigningRequest};
use http::HeaderMap;

#[derive(Debug)]
struct AnonymousSigner;

/// A builder for creating anonymous signers.
#[derive(Debug, Default)]
pub struct Builder {}

impl Builder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a [Signer] instance.
    pub fn build(self) -> Signer {
        Signer::from(AnonymousSigner)
    }
}

#[async_trait::async_trait]
impl SigningProvider for AnonymousSigner {
    async fn sign(&self, _request: &SigningRequest<'_>) -> Result<HeaderMap> {
        Ok(HeaderMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[tokio::test]
    async fn create_anonymous_signer() -> TestResult {
        let signer = Builder::new().build();
        let request = http::Request::builder()
            .method(http::Method::POST)
            .uri("http://localhost:8080/")
            .body(Bytes::from_static(b"Action=AttachVpnGateway&Version=2015-10-01"))?;
        let headers = signer
            .sign(&SigningRequest::new(&request, "ec2", "us-east-1"))
            .await?;
        assert!(headers.is_empty(), "{headers:?}");
        Ok(())
    }
}
