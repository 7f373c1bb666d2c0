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

use crate::Result;
use bytes::Bytes;
use http::{HeaderMap, Method, Uri};
use std::sync::Arc;

pub mod anonymous;

/// Authenticates requests to control-plane services.
///
/// A `Signer` wraps any [SigningProvider]. It is cheap to clone, all clones
/// share the same provider.
///
/// # Example
/// ```
/// # use ctrlplane_auth::signer::{Signer, SigningProvider, SigningRequest};
/// # use ctrlplane_auth::errors::SigningError;
/// # use http::HeaderMap;
/// #[derive(Debug)]
/// struct StaticToken(&'static str);
///
/// #[async_trait::async_trait]
/// impl SigningProvider for StaticToken {
///     async fn sign(&self, _request: &SigningRequest<'_>) -> Result<HeaderMap, SigningError> {
///         let mut headers = HeaderMap::new();
///         let value = http::HeaderValue::from_static(self.0);
///         headers.insert(http::header::AUTHORIZATION, value);
///         Ok(headers)
///     }
/// }
///
/// let signer = Signer::from(StaticToken("Bearer test-only"));
/// ```
#[derive(Clone, Debug)]
pub struct Signer {
    inner: Arc<dyn dynamic::SigningProvider>,
}

impl<T> std::convert::From<T> for Signer
where
    T: SigningProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Signer {
    /// Returns the headers that authenticate `request`.
    pub async fn sign(&self, request: &SigningRequest<'_>) -> Result<HeaderMap> {
        self.inner.sign(request).await
    }
}

impl std::default::Default for Signer {
    /// An anonymous signer.
    fn default() -> Self {
        anonymous::Builder::new().build()
    }
}

/// The request presented to a [SigningProvider].
///
/// Contains the fully formed HTTP request, except for the authentication
/// headers, and the service and region the request is addressed to.
#[derive(Clone, Debug)]
pub struct SigningRequest<'a> {
    method: &'a Method,
    uri: &'a Uri,
    headers: &'a HeaderMap,
    body: &'a Bytes,
    service: &'a str,
    region: &'a str,
}

impl<'a> SigningRequest<'a> {
    /// Creates a signing request for an HTTP request.
    pub fn new(request: &'a http::Request<Bytes>, service: &'a str, region: &'a str) -> Self {
        Self {
            method: request.method(),
            uri: request.uri(),
            headers: request.headers(),
            body: request.body(),
            service,
            region,
        }
    }

    /// The HTTP method.
    pub fn method(&self) -> &Method {
        self.method
    }

    /// The target URI.
    pub fn uri(&self) -> &Uri {
        self.uri
    }

    /// The request headers, without any authentication headers.
    pub fn headers(&self) -> &HeaderMap {
        self.headers
    }

    /// The request payload.
    pub fn body(&self) -> &Bytes {
        self.body
    }

    /// The name of the service, e.g. `directconnect`.
    pub fn service(&self) -> &str {
        self.service
    }

    /// The region, e.g. `us-east-1`.
    pub fn region(&self) -> &str {
        self.region
    }
}

/// Produces the authentication headers for a request.
///
/// Applications implement this trait to plug their signing algorithm into
/// the client libraries. Implementations must not modify the request, the
/// client library adds the returned headers before sending it.
///
/// Return a [retryable][crate::errors::SigningError::is_retryable] error if
/// the problem may go away on a future attempt, for example, if the signing
/// keys are being refreshed.
#[async_trait::async_trait]
pub trait SigningProvider: Send + Sync + std::fmt::Debug {
    /// Returns the headers that authenticate `request`.
    async fn sign(&self, request: &SigningRequest<'_>) -> Result<HeaderMap>;
}

pub(crate) mod dynamic {
    use super::{HeaderMap, Result, SigningRequest};

    /// A dyn-compatible, crate-private version of `SigningProvider`.
    #[async_trait::async_trait]
    pub trait SigningProvider: Send + Sync + std::fmt::Debug {
        async fn sign(&self, request: &SigningRequest<'_>) -> Result<HeaderMap>;
    }

    /// The public SigningProvider implements the dyn-compatible SigningProvider.
    #[async_trait::async_trait]
    impl<T> SigningProvider for T
    where
        T: super::SigningProvider + Send + Sync,
    {
        async fn sign(&self, request: &SigningRequest<'_>) -> Result<HeaderMap> {
            T::sign(self, request).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SigningError;
    use http::HeaderValue;

    static_assertions::assert_impl_all!(Signer: Clone, Send, Sync, std::fmt::Debug);

    // Records the service and region of each request and returns fixed
    // headers, or an error.
    #[derive(Debug, Default)]
    struct FakeProvider {
        seen: std::sync::Mutex<Vec<(String, String)>>,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl SigningProvider for FakeProvider {
        async fn sign(&self, request: &SigningRequest<'_>) -> Result<HeaderMap> {
            self.seen
                .lock()
                .unwrap()
                .push((request.service().to_string(), request.region().to_string()));
            if self.fail {
                return Err(SigningError::from_msg(true, "keys are rotating"));
            }
            let mut headers = HeaderMap::new();
            headers.insert("authorization", HeaderValue::from_static("test-only"));
            Ok(headers)
        }
    }

    fn test_request() -> http::Request<Bytes> {
        http::Request::builder()
            .method(Method::POST)
            .uri("https://directconnect.us-west-2.amazonaws.com/")
            .header("x-amz-target", "OvertureService.DescribeLocations")
            .body(Bytes::from_static(b"{}"))
            .unwrap()
    }

    #[test]
    fn signing_request() {
        let request = test_request();
        let signing = SigningRequest::new(&request, "directconnect", "us-west-2");
        assert_eq!(signing.method(), Method::POST);
        assert_eq!(
            signing.uri().to_string(),
            "https://directconnect.us-west-2.amazonaws.com/"
        );
        assert_eq!(
            signing.headers().get("x-amz-target"),
            Some(&HeaderValue::from_static("OvertureService.DescribeLocations"))
        );
        assert_eq!(signing.body().as_ref(), b"{}");
        assert_eq!(signing.service(), "directconnect");
        assert_eq!(signing.region(), "us-west-2");
    }

    #[tokio::test]
    async fn sign_forwards_to_provider() -> anyhow::Result<()> {
        let provider = Arc::new(FakeProvider::default());
        let signer = Signer {
            inner: provider.clone(),
        };

        let request = test_request();
        let headers = signer
            .sign(&SigningRequest::new(&request, "directconnect", "us-west-2"))
            .await?;
        assert_eq!(
            headers.get("authorization"),
            Some(&HeaderValue::from_static("test-only"))
        );
        let seen = provider.seen.lock().unwrap().clone();
        assert_eq!(
            seen,
            vec![("directconnect".to_string(), "us-west-2".to_string())]
        );
        Ok(())
    }

    #[tokio::test]
    async fn sign_error() {
        let signer = Signer::from(FakeProvider {
            fail: true,
            ..FakeProvider::default()
        });

        let request = test_request();
        let got = signer
            .sign(&SigningRequest::new(&request, "ec2", "us-east-1"))
            .await;
        assert!(matches!(&got, Err(e) if e.is_retryable()), "{got:?}");
    }

    #[tokio::test]
    async fn default_is_anonymous() -> anyhow::Result<()> {
        let signer = Signer::default();
        let request = test_request();
        let headers = signer
            .sign(&SigningRequest::new(&request, "ec2", "us-east-1"))
            .await?;
        assert!(headers.is_empty(), "{headers:?}");
        Ok(())
    }
}
