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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint, the region, or the
//! request signer. The Control-plane client libraries for Rust use a generic
//! builder type to provide such functionality. The types in this module
//! implement the client builders.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client with the default configuration.
//!
//! ```
//! # use ctrlplane_gax::client_builder::examples;
//! # use ctrlplane_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder().build().await?;
//! # Result::<()>::Ok(()) });
//! ```
//!
//! ## Example: create a client for a different region
//!
//! ```
//! # use ctrlplane_gax::client_builder::examples;
//! # use ctrlplane_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_region("eu-west-1")
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

use crate::executor::{Executor, SharedExecutor};
use crate::http_client::{HttpTransport, SharedTransport};
use std::sync::Arc;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use ctrlplane_gax::client_builder::examples;
/// use ctrlplane_gax::client_builder::Error as Error;
/// use examples::Client; // Placeholder for examples
/// # tokio_test::block_on(async {
/// let client = match Client::builder().build().await {
///     Ok(c) => c,
///     Err(e) if e.is_endpoint() => {
///         println!("the endpoint is not a valid URL: {e}");
///         return Err(e);
///     }
///     Err(e) => {
///         println!("error during client initialization {e}");
///         return Err(e);
///     }
/// };
/// # Ok::<(), Error>(()) });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// If true, the configured endpoint is not a valid URL.
    pub fn is_endpoint(&self) -> bool {
        matches!(&self.0, ErrorKind::Endpoint(_))
    }

    /// If true, there is no default executor for background requests.
    ///
    /// The default executor spawns tasks on the Tokio runtime that builds
    /// the client. Either build the client within a Tokio runtime, or
    /// provide an executor via [ClientBuilder::with_executor].
    pub fn is_executor(&self) -> bool {
        matches!(&self.0, ErrorKind::Executor(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn endpoint<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Endpoint(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn executor<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Executor(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
    #[error("invalid endpoint")]
    Endpoint(#[source] BoxError),
    #[error("could not initialize the default executor")]
    Executor(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The URL scheme used to reach the service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scheme {
    Http,
    #[default]
    Https,
}

impl Scheme {
    /// The scheme as it appears in URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generic builder for clients.
///
/// In the Control-plane client libraries for Rust a "client" represents a
/// connection to a specific service. Each client library defines one or more
/// client types. All the clients are initialized using a `ClientBuilder`.
///
/// Applications obtain a builder with the correct generic types using the
/// `builder()` method on each client:
/// ```
/// # use ctrlplane_gax::client_builder::examples;
/// # use ctrlplane_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let builder = Client::builder();
/// # Result::<()>::Ok(()) });
/// ```
///
/// As usual, the builder offers several method to configure the client, and a
/// `.build()` method to construct the client:
/// ```
/// # use ctrlplane_gax::client_builder::examples;
/// # use ctrlplane_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder()
///     .with_endpoint("http://localhost:8080")
///     .build().await?;
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, S> {
    config: internal::ClientConfig<S>,
    factory: F,
}

impl<F, S> ClientBuilder<F, S> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Signer = S>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// The endpoint includes the scheme, e.g. `https://vpce-123.example.com`.
    /// When set, the region, scheme, and dual-stack settings do not affect the
    /// endpoint.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Sets the region.
    ///
    /// The region selects the default endpoint and is included in the
    /// information given to the signer. The default is `us-east-1`.
    pub fn with_region<V: Into<String>>(mut self, v: V) -> Self {
        self.config.region = Some(v.into());
        self
    }

    /// Sets the URL scheme for the default endpoint.
    pub fn with_scheme(mut self, v: Scheme) -> Self {
        self.config.scheme = v;
        self
    }

    /// Use the dual-stack (IPv4 and IPv6) default endpoint.
    pub fn with_dual_stack(mut self, v: bool) -> Self {
        self.config.use_dual_stack = v;
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the signer used to authenticate requests.
    pub fn with_signer<T: Into<S>>(mut self, v: T) -> Self {
        self.config.signer = Some(v.into());
        self
    }

    /// Configure the executor used by deferred and callback requests.
    pub fn with_executor<T: Executor + 'static>(mut self, v: T) -> Self {
        self.config.executor = Some(Arc::new(v));
        self
    }

    /// Configure the HTTP transport.
    pub fn with_transport<T: HttpTransport + 'static>(mut self, v: T) -> Self {
        self.config.transport = Some(Arc::new(v));
        self
    }

    /// Sets a prefix for the `User-Agent` header in all requests.
    pub fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.config.user_agent = Some(v.into());
        self
    }
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    use super::*;

    /// The region used when the application does not configure one.
    pub const DEFAULT_REGION: &str = "us-east-1";

    pub trait ClientFactory {
        type Client;
        type Signer;
        fn build(
            self,
            config: internal::ClientConfig<Self::Signer>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, S, C>(factory: F) -> super::ClientBuilder<F, S>
    where
        F: ClientFactory<Client = C, Signer = S>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    ///
    /// A common client configuration for all control-plane services.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<S> {
        pub endpoint: Option<String>,
        pub region: Option<String>,
        pub scheme: Scheme,
        pub use_dual_stack: bool,
        pub signer: Option<S>,
        pub tracing: bool,
        pub executor: Option<SharedExecutor>,
        pub transport: Option<SharedTransport>,
        pub user_agent: Option<String>,
    }

    impl<S> ClientConfig<S> {
        /// The configured region, or the default region.
        pub fn region(&self) -> &str {
            self.region.as_deref().unwrap_or(DEFAULT_REGION)
        }
    }

    impl<S> std::default::Default for ClientConfig<S> {
        fn default() -> Self {
            Self {
                endpoint: None,
                region: None,
                scheme: Scheme::default(),
                use_dual_stack: false,
                signer: None,
                tracing: false,
                executor: None,
                transport: None,
                user_agent: None,
            }
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.
    //!
    //! The examples require relatively complex types to be useful.

    type Config = super::internal::ClientConfig<Signer>;
    use super::Result;

    #[allow(dead_code)]
    pub struct Client(Config);
    impl Client {
        /// Create a builder to initialize new instances of this client.
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: super::internal::ClientConfig<Signer>) -> Result<Self> {
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory, super::Signer>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Signer = super::Signer;
            type Client = super::Client;
            async fn build(
                self,
                config: crate::client_builder::internal::ClientConfig<Self::Signer>,
            ) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Signer {
        pub key_id: String,
    }

    // We use the examples as scaffolding for the tests.
    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::executor::TokioExecutor;
        use crate::http_client::HttpTransport;
        use bytes::Bytes;
        use std::time::Duration;

        #[derive(Debug)]
        struct FakeTransport;
        #[async_trait::async_trait]
        impl HttpTransport for FakeTransport {
            async fn send(
                &self,
                _request: http::Request<Bytes>,
                _timeout: Option<Duration>,
            ) -> crate::Result<http::Response<Bytes>> {
                Ok(http::Response::new(Bytes::new()))
            }
        }

        #[tokio::test]
        async fn build_default() {
            let client = Client::builder().build().await.unwrap();
            let config = client.0;
            assert_eq!(config.endpoint, None);
            assert_eq!(config.region, None);
            assert_eq!(config.region(), "us-east-1");
            assert_eq!(config.scheme, crate::client_builder::Scheme::Https);
            assert!(!config.use_dual_stack);
            assert_eq!(config.signer, None);
            assert!(!config.tracing);
            assert!(config.executor.is_none(), "{config:?}");
            assert!(config.transport.is_none(), "{config:?}");
            assert_eq!(config.user_agent, None);
        }

        #[tokio::test]
        async fn endpoint() {
            let client = Client::builder()
                .with_endpoint("http://example.com")
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert_eq!(config.endpoint.as_deref(), Some("http://example.com"));
        }

        #[tokio::test]
        async fn region_scheme_dual_stack() {
            let client = Client::builder()
                .with_region("ap-northeast-1")
                .with_scheme(crate::client_builder::Scheme::Http)
                .with_dual_stack(true)
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert_eq!(config.region(), "ap-northeast-1");
            assert_eq!(config.scheme, crate::client_builder::Scheme::Http);
            assert!(config.use_dual_stack);
        }

        #[tokio::test]
        async fn tracing() {
            let client = Client::builder().with_tracing().build().await.unwrap();
            let config = client.0;
            assert!(config.tracing);
        }

        #[tokio::test]
        async fn signer() {
            let client = Client::builder()
                .with_signer(Signer {
                    key_id: "test-key".into(),
                })
                .build()
                .await
                .unwrap();
            let config = client.0;
            let signer = config.signer.unwrap();
            assert_eq!(signer.key_id, "test-key");
        }

        #[tokio::test]
        async fn executor_and_transport() {
            let client = Client::builder()
                .with_executor(TokioExecutor::try_current().unwrap())
                .with_transport(FakeTransport)
                .with_user_agent("test-prefix/1.2.3")
                .build()
                .await
                .unwrap();
            let config = client.0;
            assert!(config.executor.is_some(), "{config:?}");
            assert!(config.transport.is_some(), "{config:?}");
            assert_eq!(config.user_agent.as_deref(), Some("test-prefix/1.2.3"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn error_kinds() {
        let e = Error::transport("simulated");
        assert!(e.is_transport(), "{e:?}");
        assert!(!e.is_endpoint(), "{e:?}");
        assert!(e.source().is_some(), "{e:?}");

        let e = Error::endpoint("simulated");
        assert!(e.is_endpoint(), "{e:?}");
        assert!(!e.is_executor(), "{e:?}");

        let e = Error::executor("simulated");
        assert!(e.is_executor(), "{e:?}");
        assert!(!e.is_transport(), "{e:?}");
    }

    #[test]
    fn scheme() {
        assert_eq!(Scheme::default(), Scheme::Https);
        assert_eq!(Scheme::Http.to_string(), "http");
        assert_eq!(Scheme::Https.as_str(), "https");
    }
}
