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

use crate::Result;

/// Implements a [DirectConnect](super::stub::DirectConnect) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct DirectConnect<T>
where
    T: super::stub::DirectConnect + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> DirectConnect<T>
where
    T: super::stub::DirectConnect + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::DirectConnect for DirectConnect<T>
where
    T: super::stub::DirectConnect + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = "debug", ret)]
    async fn allocate_connection_on_interconnect(
        &self,
        req: crate::model::AllocateConnectionOnInterconnectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Connection>> {
        self.inner.allocate_connection_on_interconnect(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn allocate_private_virtual_interface(
        &self,
        req: crate::model::AllocatePrivateVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::VirtualInterface>> {
        self.inner.allocate_private_virtual_interface(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn allocate_public_virtual_interface(
        &self,
        req: crate::model::AllocatePublicVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::VirtualInterface>> {
        self.inner.allocate_public_virtual_interface(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn confirm_connection(
        &self,
        req: crate::model::ConfirmConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ConfirmConnectionResponse>> {
        self.inner.confirm_connection(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn confirm_private_virtual_interface(
        &self,
        req: crate::model::ConfirmPrivateVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ConfirmPrivateVirtualInterfaceResponse>> {
        self.inner.confirm_private_virtual_interface(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn confirm_public_virtual_interface(
        &self,
        req: crate::model::ConfirmPublicVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ConfirmPublicVirtualInterfaceResponse>> {
        self.inner.confirm_public_virtual_interface(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn create_connection(
        &self,
        req: crate::model::CreateConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Connection>> {
        self.inner.create_connection(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn create_interconnect(
        &self,
        req: crate::model::CreateInterconnectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Interconnect>> {
        self.inner.create_interconnect(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn create_private_virtual_interface(
        &self,
        req: crate::model::CreatePrivateVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::VirtualInterface>> {
        self.inner.create_private_virtual_interface(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn create_public_virtual_interface(
        &self,
        req: crate::model::CreatePublicVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::VirtualInterface>> {
        self.inner.create_public_virtual_interface(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn delete_connection(
        &self,
        req: crate::model::DeleteConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Connection>> {
        self.inner.delete_connection(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn delete_interconnect(
        &self,
        req: crate::model::DeleteInterconnectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteInterconnectResponse>> {
        self.inner.delete_interconnect(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn delete_virtual_interface(
        &self,
        req: crate::model::DeleteVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteVirtualInterfaceResponse>> {
        self.inner.delete_virtual_interface(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn describe_connection_loa(
        &self,
        req: crate::model::DescribeConnectionLoaRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeConnectionLoaResponse>> {
        self.inner.describe_connection_loa(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn describe_connections(
        &self,
        req: crate::model::DescribeConnectionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Connections>> {
        self.inner.describe_connections(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn describe_connections_on_interconnect(
        &self,
        req: crate::model::DescribeConnectionsOnInterconnectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Connections>> {
        self.inner.describe_connections_on_interconnect(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn describe_interconnect_loa(
        &self,
        req: crate::model::DescribeInterconnectLoaRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeInterconnectLoaResponse>> {
        self.inner.describe_interconnect_loa(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn describe_interconnects(
        &self,
        req: crate::model::DescribeInterconnectsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Interconnects>> {
        self.inner.describe_interconnects(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn describe_locations(
        &self,
        req: crate::model::DescribeLocationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Locations>> {
        self.inner.describe_locations(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn describe_virtual_gateways(
        &self,
        req: crate::model::DescribeVirtualGatewaysRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::VirtualGateways>> {
        self.inner.describe_virtual_gateways(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn describe_virtual_interfaces(
        &self,
        req: crate::model::DescribeVirtualInterfacesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::VirtualInterfaces>> {
        self.inner.describe_virtual_interfaces(req, options).await
    }
}
