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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::DirectConnect].
///
/// Application developers may need to implement this trait to mock
/// `client::DirectConnect`.  In other use-cases, application developers only
/// use `client::DirectConnect` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new operations routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait DirectConnect: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::DirectConnect::allocate_connection_on_interconnect].
    fn allocate_connection_on_interconnect(
        &self,
        _req: crate::model::AllocateConnectionOnInterconnectRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::Connection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectConnect::allocate_private_virtual_interface].
    fn allocate_private_virtual_interface(
        &self,
        _req: crate::model::AllocatePrivateVirtualInterfaceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::VirtualInterface>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectConnect::allocate_public_virtual_interface].
    fn allocate_public_virtual_interface(
        &self,
        _req: crate::model::AllocatePublicVirtualInterfaceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::VirtualInterface>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectConnect::confirm_connection].
    fn confirm_connection(
        &self,
        _req: crate::model::ConfirmConnectionRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ConfirmConnectionResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectConnect::confirm_private_virtual_interface].
    fn confirm_private_virtual_interface(
        &self,
        _req: crate::model::ConfirmPrivateVirtualInterfaceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ConfirmPrivateVirtualInterfaceResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectConnect::confirm_public_virtual_interface].
    fn confirm_public_virtual_interface(
        &self,
        _req: crate::model::ConfirmPublicVirtualInterfaceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ConfirmPublicVirtualInterfaceResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectConnect::create_connection].
    fn create_connection(
        &self,
        _req: crate::model::CreateConnectionRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::Connection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectConnect::create_interconnect].
    fn create_interconnect(
        &self,
        _req: crate::model::CreateInterconnectRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::Interconnect>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectConnect::create_private_virtual_interface].
    fn create_private_virtual_interface(
        &self,
        _req: crate::model::CreatePrivateVirtualInterfaceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::VirtualInterface>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectConnect::create_public_virtual_interface].
    fn create_public_virtual_interface(
        &self,
        _req: crate::model::CreatePublicVirtualInterfaceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::VirtualInterface>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectConnect::delete_connection].
    fn delete_connection(
        &self,
        _req: crate::model::DeleteConnectionRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::Connection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectConnect::delete_interconnect].
    fn delete_interconnect(
        &self,
        _req: crate::model::DeleteInterconnectRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeleteInterconnectResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectConnect::delete_virtual_interface].
    fn delete_virtual_interface(
        &self,
        _req: crate::model::DeleteVirtualInterfaceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeleteVirtualInterfaceResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectConnect::describe_connection_loa].
    fn describe_connection_loa(
        &self,
        _req: crate::model::DescribeConnectionLoaRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DescribeConnectionLoaResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectConnect::describe_connections].
    fn describe_connections(
        &self,
        _req: crate::model::DescribeConnectionsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::Connections>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectConnect::describe_connections_on_interconnect].
    fn describe_connections_on_interconnect(
        &self,
        _req: crate::model::DescribeConnectionsOnInterconnectRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::Connections>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectConnect::describe_interconnect_loa].
    fn describe_interconnect_loa(
        &self,
        _req: crate::model::DescribeInterconnectLoaRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DescribeInterconnectLoaResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectConnect::describe_interconnects].
    fn describe_interconnects(
        &self,
        _req: crate::model::DescribeInterconnectsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::Interconnects>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectConnect::describe_locations].
    fn describe_locations(
        &self,
        _req: crate::model::DescribeLocationsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::Locations>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectConnect::describe_virtual_gateways].
    fn describe_virtual_gateways(
        &self,
        _req: crate::model::DescribeVirtualGatewaysRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::VirtualGateways>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::DirectConnect::describe_virtual_interfaces].
    fn describe_virtual_interfaces(
        &self,
        _req: crate::model::DescribeVirtualInterfacesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::VirtualInterfaces>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}
