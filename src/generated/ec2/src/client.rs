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
//
// Code generated by sidekick. DO NOT EDIT.
#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

use std::sync::Arc;

/// Implements a client for the Amazon EC2 VPN gateway APIs.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use ctrlplane_ec2::client::Ec2;
/// let client = Ec2::builder().build().await?;
/// // use `client` to make requests to the EC2 API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `Ec2` use the `with_*` methods in the type returned
/// by [builder()][Ec2::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_region()]: by default this client uses the `us-east-1` region.
/// * [with_endpoint()]: by default this client computes the endpoint from the
///   region (`https://ec2.{region}.amazonaws.com`). Applications using
///   private endpoints may want to override this default.
/// * [with_signer()]: by default this client sends anonymous requests.
///   Applications must provide a signer to call the service.
///
/// [with_region()]: super::builder::ec2::ClientBuilder::with_region
/// [with_endpoint()]: super::builder::ec2::ClientBuilder::with_endpoint
/// [with_signer()]: super::builder::ec2::ClientBuilder::with_signer
///
/// # Pooling and Cloning
///
/// `Ec2` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `Ec2` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Ec2 {
    inner: Arc<dyn super::stub::dynamic::Ec2>,
    executor: gax::executor::SharedExecutor,
}

impl Ec2 {
    /// Returns a builder for [Ec2].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use ctrlplane_ec2::client::Ec2;
    /// let client = Ec2::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::ec2::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::ec2::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    ///
    /// Background requests run on the current Tokio runtime. Outside a
    /// runtime they fail with an executor error.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Ec2 + 'static,
    {
        Self::from_parts(
            Arc::new(stub),
            gax::executor::internal::default_executor(),
        )
    }

    pub(crate) fn from_parts(
        inner: Arc<dyn super::stub::dynamic::Ec2>,
        executor: gax::executor::SharedExecutor,
    ) -> Self {
        Self { inner, executor }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let executor = gaxi::options::executor(&config)?;
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner, executor })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Arc<dyn super::stub::dynamic::Ec2>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Ec2> {
        super::transport::Ec2::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Ec2> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Ec2::new)
    }

    /// Attaches a virtual private gateway to a VPC.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_ec2::client::Ec2;
    /// async fn sample(client: &Ec2) -> ctrlplane_ec2::Result<()> {
    ///     let response = client
    ///         .attach_vpn_gateway()
    ///         .set_vpn_gateway_id("vgw-8db04f81")
    ///         .set_vpc_id("vpc-1a2b3c4d")
    ///         .send()
    ///         .await?;
    ///     println!("response {:?}", response);
    ///     Ok(())
    /// }
    /// ```
    pub fn attach_vpn_gateway(&self) -> super::builder::ec2::AttachVpnGateway {
        super::builder::ec2::AttachVpnGateway::new(self.inner.clone(), self.executor.clone())
    }

    /// Detaches a virtual private gateway from a VPC.
    pub fn detach_vpn_gateway(&self) -> super::builder::ec2::DetachVpnGateway {
        super::builder::ec2::DetachVpnGateway::new(self.inner.clone(), self.executor.clone())
    }
}
