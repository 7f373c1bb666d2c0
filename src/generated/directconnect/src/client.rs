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

/// Implements a client for the AWS Direct Connect API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use ctrlplane_directconnect::client::DirectConnect;
/// let client = DirectConnect::builder().build().await?;
/// // use `client` to make requests to the AWS Direct Connect API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// AWS Direct Connect makes it easy to establish a dedicated network
/// connection from your premises to Amazon Web Services (AWS). Using AWS
/// Direct Connect, you can establish private connectivity between AWS and
/// your data center, office, or colocation environment.
///
/// # Configuration
///
/// To configure `DirectConnect` use the `with_*` methods in the type returned
/// by [builder()][DirectConnect::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_region()]: by default this client uses the `us-east-1` region.
/// * [with_endpoint()]: by default this client computes the endpoint from the
///   region (`https://directconnect.{region}.amazonaws.com`). Applications
///   using private endpoints may want to override this default.
/// * [with_signer()]: by default this client sends anonymous requests.
///   Applications must provide a signer to call the service.
///
/// [with_region()]: super::builder::direct_connect::ClientBuilder::with_region
/// [with_endpoint()]: super::builder::direct_connect::ClientBuilder::with_endpoint
/// [with_signer()]: super::builder::direct_connect::ClientBuilder::with_signer
///
/// # Pooling and Cloning
///
/// `DirectConnect` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `DirectConnect` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct DirectConnect {
    inner: Arc<dyn super::stub::dynamic::DirectConnect>,
    executor: gax::executor::SharedExecutor,
}

impl DirectConnect {
    /// Returns a builder for [DirectConnect].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use ctrlplane_directconnect::client::DirectConnect;
    /// let client = DirectConnect::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::direct_connect::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::direct_connect::client::Factory)
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
        T: super::stub::DirectConnect + 'static,
    {
        Self::from_parts(
            Arc::new(stub),
            gax::executor::internal::default_executor(),
        )
    }

    pub(crate) fn from_parts(
        inner: Arc<dyn super::stub::dynamic::DirectConnect>,
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
    ) -> gax::client_builder::Result<Arc<dyn super::stub::dynamic::DirectConnect>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::DirectConnect> {
        super::transport::DirectConnect::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::DirectConnect> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::DirectConnect::new)
    }

    /// Creates a hosted connection on an interconnect.
    ///
    /// Allocates a VLAN number and a specified amount of bandwidth for use by a
    /// hosted connection on the given interconnect.
    pub fn allocate_connection_on_interconnect(&self) -> super::builder::direct_connect::AllocateConnectionOnInterconnect {
        super::builder::direct_connect::AllocateConnectionOnInterconnect::new(self.inner.clone(), self.executor.clone())
    }

    /// Provisions a private virtual interface to be owned by a different customer.
    ///
    /// The owner of a connection calls this function to provision a private
    /// virtual interface which will be owned by another AWS customer.
    pub fn allocate_private_virtual_interface(&self) -> super::builder::direct_connect::AllocatePrivateVirtualInterface {
        super::builder::direct_connect::AllocatePrivateVirtualInterface::new(self.inner.clone(), self.executor.clone())
    }

    /// Provisions a public virtual interface to be owned by a different customer.
    pub fn allocate_public_virtual_interface(&self) -> super::builder::direct_connect::AllocatePublicVirtualInterface {
        super::builder::direct_connect::AllocatePublicVirtualInterface::new(self.inner.clone(), self.executor.clone())
    }

    /// Confirm the creation of a hosted connection on an interconnect.
    ///
    /// Upon creation, the hosted connection is initially in the `ordering` state,
    /// and will remain in this state until the owner calls this function.
    pub fn confirm_connection(&self) -> super::builder::direct_connect::ConfirmConnection {
        super::builder::direct_connect::ConfirmConnection::new(self.inner.clone(), self.executor.clone())
    }

    /// Accept ownership of a private virtual interface created by another customer.
    pub fn confirm_private_virtual_interface(&self) -> super::builder::direct_connect::ConfirmPrivateVirtualInterface {
        super::builder::direct_connect::ConfirmPrivateVirtualInterface::new(self.inner.clone(), self.executor.clone())
    }

    /// Accept ownership of a public virtual interface created by another customer.
    pub fn confirm_public_virtual_interface(&self) -> super::builder::direct_connect::ConfirmPublicVirtualInterface {
        super::builder::direct_connect::ConfirmPublicVirtualInterface::new(self.inner.clone(), self.executor.clone())
    }

    /// Creates a new connection between the customer network and a specific
    /// AWS Direct Connect location.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_directconnect::client::DirectConnect;
    /// async fn sample(client: &DirectConnect) -> ctrlplane_directconnect::Result<()> {
    ///     let connection = client
    ///         .create_connection()
    ///         .set_location("EqSe2")
    ///         .set_bandwidth("1Gbps")
    ///         .set_connection_name("My Connection to AWS")
    ///         .send()
    ///         .await?;
    ///     println!("connection {:?}", connection.connection_id);
    ///     Ok(())
    /// }
    /// ```
    pub fn create_connection(&self) -> super::builder::direct_connect::CreateConnection {
        super::builder::direct_connect::CreateConnection::new(self.inner.clone(), self.executor.clone())
    }

    /// Creates a new interconnect between an AWS Direct Connect partner's network
    /// and a specific AWS Direct Connect location.
    pub fn create_interconnect(&self) -> super::builder::direct_connect::CreateInterconnect {
        super::builder::direct_connect::CreateInterconnect::new(self.inner.clone(), self.executor.clone())
    }

    /// Creates a new private virtual interface.
    ///
    /// A virtual interface is the VLAN that transports AWS Direct Connect traffic.
    /// A private virtual interface supports sending traffic to a single virtual
    /// private cloud (VPC).
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_directconnect::client::DirectConnect;
    /// # use ctrlplane_directconnect::model::NewPrivateVirtualInterface;
    /// async fn sample(client: &DirectConnect) -> ctrlplane_directconnect::Result<()> {
    ///     let interface = client
    ///         .create_private_virtual_interface()
    ///         .set_connection_id("dxcon-fg5678gh")
    ///         .set_new_private_virtual_interface(
    ///             NewPrivateVirtualInterface::new()
    ///                 .set_virtual_interface_name("PrivateVirtualInterface")
    ///                 .set_vlan(101)
    ///                 .set_asn(65000)
    ///                 .set_virtual_gateway_id("vgw-123er56"),
    ///         )
    ///         .send()
    ///         .await?;
    ///     println!("state {:?}", interface.virtual_interface_state);
    ///     Ok(())
    /// }
    /// ```
    pub fn create_private_virtual_interface(&self) -> super::builder::direct_connect::CreatePrivateVirtualInterface {
        super::builder::direct_connect::CreatePrivateVirtualInterface::new(self.inner.clone(), self.executor.clone())
    }

    /// Creates a new public virtual interface.
    ///
    /// A public virtual interface supports sending traffic to public services of
    /// AWS such as Amazon Simple Storage Service (Amazon S3).
    pub fn create_public_virtual_interface(&self) -> super::builder::direct_connect::CreatePublicVirtualInterface {
        super::builder::direct_connect::CreatePublicVirtualInterface::new(self.inner.clone(), self.executor.clone())
    }

    /// Deletes the connection.
    ///
    /// Deleting a connection only stops the AWS Direct Connect port hour and data
    /// transfer charges.
    pub fn delete_connection(&self) -> super::builder::direct_connect::DeleteConnection {
        super::builder::direct_connect::DeleteConnection::new(self.inner.clone(), self.executor.clone())
    }

    /// Deletes the specified interconnect.
    pub fn delete_interconnect(&self) -> super::builder::direct_connect::DeleteInterconnect {
        super::builder::direct_connect::DeleteInterconnect::new(self.inner.clone(), self.executor.clone())
    }

    /// Deletes a virtual interface.
    pub fn delete_virtual_interface(&self) -> super::builder::direct_connect::DeleteVirtualInterface {
        super::builder::direct_connect::DeleteVirtualInterface::new(self.inner.clone(), self.executor.clone())
    }

    /// Returns the LOA-CFA for a connection.
    pub fn describe_connection_loa(&self) -> super::builder::direct_connect::DescribeConnectionLoa {
        super::builder::direct_connect::DescribeConnectionLoa::new(self.inner.clone(), self.executor.clone())
    }

    /// Displays all connections in this region.
    ///
    /// If a connection ID is provided, the call returns only that particular
    /// connection.
    pub fn describe_connections(&self) -> super::builder::direct_connect::DescribeConnections {
        super::builder::direct_connect::DescribeConnections::new(self.inner.clone(), self.executor.clone())
    }

    /// Return a list of connections that have been provisioned on the given
    /// interconnect.
    pub fn describe_connections_on_interconnect(&self) -> super::builder::direct_connect::DescribeConnectionsOnInterconnect {
        super::builder::direct_connect::DescribeConnectionsOnInterconnect::new(self.inner.clone(), self.executor.clone())
    }

    /// Returns the LOA-CFA for an interconnect.
    pub fn describe_interconnect_loa(&self) -> super::builder::direct_connect::DescribeInterconnectLoa {
        super::builder::direct_connect::DescribeInterconnectLoa::new(self.inner.clone(), self.executor.clone())
    }

    /// Returns a list of interconnects owned by the AWS account.
    ///
    /// If an interconnect ID is provided, it will only return this particular
    /// interconnect.
    pub fn describe_interconnects(&self) -> super::builder::direct_connect::DescribeInterconnects {
        super::builder::direct_connect::DescribeInterconnects::new(self.inner.clone(), self.executor.clone())
    }

    /// Returns the list of AWS Direct Connect locations in the current AWS region.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_directconnect::client::DirectConnect;
    /// async fn sample(client: &DirectConnect) -> ctrlplane_directconnect::Result<()> {
    ///     let response = client.describe_locations().send().await?;
    ///     for location in response.locations {
    ///         println!("{:?} {:?}", location.location_code, location.location_name);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn describe_locations(&self) -> super::builder::direct_connect::DescribeLocations {
        super::builder::direct_connect::DescribeLocations::new(self.inner.clone(), self.executor.clone())
    }

    /// Returns a list of virtual private gateways owned by the AWS account.
    pub fn describe_virtual_gateways(&self) -> super::builder::direct_connect::DescribeVirtualGateways {
        super::builder::direct_connect::DescribeVirtualGateways::new(self.inner.clone(), self.executor.clone())
    }

    /// Displays all virtual interfaces for an AWS account.
    ///
    /// If a connection ID is provided, only virtual interfaces provisioned on the
    /// specified connection are returned. If a virtual interface ID is provided,
    /// only this particular virtual interface is returned.
    pub fn describe_virtual_interfaces(&self) -> super::builder::direct_connect::DescribeVirtualInterfaces {
        super::builder::direct_connect::DescribeVirtualInterfaces::new(self.inner.clone(), self.executor.clone())
    }
}
