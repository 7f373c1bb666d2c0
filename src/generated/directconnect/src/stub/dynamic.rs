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

/// A dyn-compatible, crate-private version of [super::DirectConnect].
#[async_trait::async_trait]
pub trait DirectConnect: std::fmt::Debug + Send + Sync {
    async fn allocate_connection_on_interconnect(
        &self,
        req: crate::model::AllocateConnectionOnInterconnectRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Connection>>;

    async fn allocate_private_virtual_interface(
        &self,
        req: crate::model::AllocatePrivateVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::VirtualInterface>>;

    async fn allocate_public_virtual_interface(
        &self,
        req: crate::model::AllocatePublicVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::VirtualInterface>>;

    async fn confirm_connection(
        &self,
        req: crate::model::ConfirmConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ConfirmConnectionResponse>>;

    async fn confirm_private_virtual_interface(
        &self,
        req: crate::model::ConfirmPrivateVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ConfirmPrivateVirtualInterfaceResponse>>;

    async fn confirm_public_virtual_interface(
        &self,
        req: crate::model::ConfirmPublicVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ConfirmPublicVirtualInterfaceResponse>>;

    async fn create_connection(
        &self,
        req: crate::model::CreateConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Connection>>;

    async fn create_interconnect(
        &self,
        req: crate::model::CreateInterconnectRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Interconnect>>;

    async fn create_private_virtual_interface(
        &self,
        req: crate::model::CreatePrivateVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::VirtualInterface>>;

    async fn create_public_virtual_interface(
        &self,
        req: crate::model::CreatePublicVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::VirtualInterface>>;

    async fn delete_connection(
        &self,
        req: crate::model::DeleteConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Connection>>;

    async fn delete_interconnect(
        &self,
        req: crate::model::DeleteInterconnectRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteInterconnectResponse>>;

    async fn delete_virtual_interface(
        &self,
        req: crate::model::DeleteVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteVirtualInterfaceResponse>>;

    async fn describe_connection_loa(
        &self,
        req: crate::model::DescribeConnectionLoaRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeConnectionLoaResponse>>;

    async fn describe_connections(
        &self,
        req: crate::model::DescribeConnectionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Connections>>;

    async fn describe_connections_on_interconnect(
        &self,
        req: crate::model::DescribeConnectionsOnInterconnectRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Connections>>;

    async fn describe_interconnect_loa(
        &self,
        req: crate::model::DescribeInterconnectLoaRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeInterconnectLoaResponse>>;

    async fn describe_interconnects(
        &self,
        req: crate::model::DescribeInterconnectsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Interconnects>>;

    async fn describe_locations(
        &self,
        req: crate::model::DescribeLocationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Locations>>;

    async fn describe_virtual_gateways(
        &self,
        req: crate::model::DescribeVirtualGatewaysRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::VirtualGateways>>;

    async fn describe_virtual_interfaces(
        &self,
        req: crate::model::DescribeVirtualInterfacesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::VirtualInterfaces>>;
}

/// All implementations of [super::DirectConnect] also implement [DirectConnect].
#[async_trait::async_trait]
impl<T: super::DirectConnect> DirectConnect for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn allocate_connection_on_interconnect(
        &self,
        req: crate::model::AllocateConnectionOnInterconnectRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Connection>> {
        T::allocate_connection_on_interconnect(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn allocate_private_virtual_interface(
        &self,
        req: crate::model::AllocatePrivateVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::VirtualInterface>> {
        T::allocate_private_virtual_interface(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn allocate_public_virtual_interface(
        &self,
        req: crate::model::AllocatePublicVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::VirtualInterface>> {
        T::allocate_public_virtual_interface(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn confirm_connection(
        &self,
        req: crate::model::ConfirmConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ConfirmConnectionResponse>> {
        T::confirm_connection(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn confirm_private_virtual_interface(
        &self,
        req: crate::model::ConfirmPrivateVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ConfirmPrivateVirtualInterfaceResponse>> {
        T::confirm_private_virtual_interface(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn confirm_public_virtual_interface(
        &self,
        req: crate::model::ConfirmPublicVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ConfirmPublicVirtualInterfaceResponse>> {
        T::confirm_public_virtual_interface(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_connection(
        &self,
        req: crate::model::CreateConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Connection>> {
        T::create_connection(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_interconnect(
        &self,
        req: crate::model::CreateInterconnectRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Interconnect>> {
        T::create_interconnect(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_private_virtual_interface(
        &self,
        req: crate::model::CreatePrivateVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::VirtualInterface>> {
        T::create_private_virtual_interface(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_public_virtual_interface(
        &self,
        req: crate::model::CreatePublicVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::VirtualInterface>> {
        T::create_public_virtual_interface(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_connection(
        &self,
        req: crate::model::DeleteConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Connection>> {
        T::delete_connection(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_interconnect(
        &self,
        req: crate::model::DeleteInterconnectRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteInterconnectResponse>> {
        T::delete_interconnect(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_virtual_interface(
        &self,
        req: crate::model::DeleteVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeleteVirtualInterfaceResponse>> {
        T::delete_virtual_interface(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_connection_loa(
        &self,
        req: crate::model::DescribeConnectionLoaRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeConnectionLoaResponse>> {
        T::describe_connection_loa(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_connections(
        &self,
        req: crate::model::DescribeConnectionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Connections>> {
        T::describe_connections(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_connections_on_interconnect(
        &self,
        req: crate::model::DescribeConnectionsOnInterconnectRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Connections>> {
        T::describe_connections_on_interconnect(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_interconnect_loa(
        &self,
        req: crate::model::DescribeInterconnectLoaRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DescribeInterconnectLoaResponse>> {
        T::describe_interconnect_loa(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_interconnects(
        &self,
        req: crate::model::DescribeInterconnectsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Interconnects>> {
        T::describe_interconnects(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_locations(
        &self,
        req: crate::model::DescribeLocationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Locations>> {
        T::describe_locations(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_virtual_gateways(
        &self,
        req: crate::model::DescribeVirtualGatewaysRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::VirtualGateways>> {
        T::describe_virtual_gateways(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn describe_virtual_interfaces(
        &self,
        req: crate::model::DescribeVirtualInterfacesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::VirtualInterfaces>> {
        T::describe_virtual_interfaces(self, req, options).await
    }
}
