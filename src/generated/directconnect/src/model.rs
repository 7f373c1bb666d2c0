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

use gax::enumerations::{Enumeration, UnknownValue, hash_string};
use std::borrow::Cow;

/// The request message for [DirectConnect::allocate_connection_on_interconnect][crate::client::DirectConnect::allocate_connection_on_interconnect].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AllocateConnectionOnInterconnectRequest {
    /// The bandwidth of the connection, for example `500Mbps`.
    pub bandwidth: std::option::Option<std::string::String>,

    pub connection_name: std::option::Option<std::string::String>,

    /// The numeric account ID of the customer for whom the connection is provisioned.
    pub owner_account: std::option::Option<std::string::String>,

    pub interconnect_id: std::option::Option<std::string::String>,

    pub vlan: std::option::Option<i32>,
}

impl AllocateConnectionOnInterconnectRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bandwidth][crate::model::AllocateConnectionOnInterconnectRequest::bandwidth].
    pub fn set_bandwidth<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.bandwidth = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bandwidth][crate::model::AllocateConnectionOnInterconnectRequest::bandwidth].
    pub fn set_or_clear_bandwidth<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bandwidth = v.map(|x| x.into());
        self
    }

    /// Sets the value of [connection_name][crate::model::AllocateConnectionOnInterconnectRequest::connection_name].
    pub fn set_connection_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.connection_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [connection_name][crate::model::AllocateConnectionOnInterconnectRequest::connection_name].
    pub fn set_or_clear_connection_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.connection_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [owner_account][crate::model::AllocateConnectionOnInterconnectRequest::owner_account].
    pub fn set_owner_account<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.owner_account = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [owner_account][crate::model::AllocateConnectionOnInterconnectRequest::owner_account].
    pub fn set_or_clear_owner_account<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.owner_account = v.map(|x| x.into());
        self
    }

    /// Sets the value of [interconnect_id][crate::model::AllocateConnectionOnInterconnectRequest::interconnect_id].
    pub fn set_interconnect_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.interconnect_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [interconnect_id][crate::model::AllocateConnectionOnInterconnectRequest::interconnect_id].
    pub fn set_or_clear_interconnect_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.interconnect_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vlan][crate::model::AllocateConnectionOnInterconnectRequest::vlan].
    pub fn set_vlan<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.vlan = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vlan][crate::model::AllocateConnectionOnInterconnectRequest::vlan].
    pub fn set_or_clear_vlan<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.vlan = v.map(|x| x.into());
        self
    }
}

/// The request message for [DirectConnect::allocate_private_virtual_interface][crate::client::DirectConnect::allocate_private_virtual_interface].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AllocatePrivateVirtualInterfaceRequest {
    pub connection_id: std::option::Option<std::string::String>,

    pub owner_account: std::option::Option<std::string::String>,

    pub new_private_virtual_interface_allocation: std::option::Option<crate::model::NewPrivateVirtualInterfaceAllocation>,
}

impl AllocatePrivateVirtualInterfaceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [connection_id][crate::model::AllocatePrivateVirtualInterfaceRequest::connection_id].
    pub fn set_connection_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.connection_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [connection_id][crate::model::AllocatePrivateVirtualInterfaceRequest::connection_id].
    pub fn set_or_clear_connection_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.connection_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [owner_account][crate::model::AllocatePrivateVirtualInterfaceRequest::owner_account].
    pub fn set_owner_account<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.owner_account = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [owner_account][crate::model::AllocatePrivateVirtualInterfaceRequest::owner_account].
    pub fn set_or_clear_owner_account<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.owner_account = v.map(|x| x.into());
        self
    }

    /// Sets the value of [new_private_virtual_interface_allocation][crate::model::AllocatePrivateVirtualInterfaceRequest::new_private_virtual_interface_allocation].
    pub fn set_new_private_virtual_interface_allocation<T: std::convert::Into<crate::model::NewPrivateVirtualInterfaceAllocation>>(mut self, v: T) -> Self {
        self.new_private_virtual_interface_allocation = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [new_private_virtual_interface_allocation][crate::model::AllocatePrivateVirtualInterfaceRequest::new_private_virtual_interface_allocation].
    pub fn set_or_clear_new_private_virtual_interface_allocation<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::NewPrivateVirtualInterfaceAllocation>,
    {
        self.new_private_virtual_interface_allocation = v.map(|x| x.into());
        self
    }
}

/// The request message for [DirectConnect::allocate_public_virtual_interface][crate::client::DirectConnect::allocate_public_virtual_interface].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AllocatePublicVirtualInterfaceRequest {
    pub connection_id: std::option::Option<std::string::String>,

    pub owner_account: std::option::Option<std::string::String>,

    pub new_public_virtual_interface_allocation: std::option::Option<crate::model::NewPublicVirtualInterfaceAllocation>,
}

impl AllocatePublicVirtualInterfaceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [connection_id][crate::model::AllocatePublicVirtualInterfaceRequest::connection_id].
    pub fn set_connection_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.connection_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [connection_id][crate::model::AllocatePublicVirtualInterfaceRequest::connection_id].
    pub fn set_or_clear_connection_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.connection_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [owner_account][crate::model::AllocatePublicVirtualInterfaceRequest::owner_account].
    pub fn set_owner_account<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.owner_account = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [owner_account][crate::model::AllocatePublicVirtualInterfaceRequest::owner_account].
    pub fn set_or_clear_owner_account<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.owner_account = v.map(|x| x.into());
        self
    }

    /// Sets the value of [new_public_virtual_interface_allocation][crate::model::AllocatePublicVirtualInterfaceRequest::new_public_virtual_interface_allocation].
    pub fn set_new_public_virtual_interface_allocation<T: std::convert::Into<crate::model::NewPublicVirtualInterfaceAllocation>>(mut self, v: T) -> Self {
        self.new_public_virtual_interface_allocation = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [new_public_virtual_interface_allocation][crate::model::AllocatePublicVirtualInterfaceRequest::new_public_virtual_interface_allocation].
    pub fn set_or_clear_new_public_virtual_interface_allocation<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::NewPublicVirtualInterfaceAllocation>,
    {
        self.new_public_virtual_interface_allocation = v.map(|x| x.into());
        self
    }
}

/// The request message for [DirectConnect::confirm_connection][crate::client::DirectConnect::confirm_connection].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ConfirmConnectionRequest {
    pub connection_id: std::option::Option<std::string::String>,
}

impl ConfirmConnectionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [connection_id][crate::model::ConfirmConnectionRequest::connection_id].
    pub fn set_connection_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.connection_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [connection_id][crate::model::ConfirmConnectionRequest::connection_id].
    pub fn set_or_clear_connection_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.connection_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [DirectConnect::confirm_private_virtual_interface][crate::client::DirectConnect::confirm_private_virtual_interface].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ConfirmPrivateVirtualInterfaceRequest {
    pub virtual_interface_id: std::option::Option<std::string::String>,

    pub virtual_gateway_id: std::option::Option<std::string::String>,
}

impl ConfirmPrivateVirtualInterfaceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [virtual_interface_id][crate::model::ConfirmPrivateVirtualInterfaceRequest::virtual_interface_id].
    pub fn set_virtual_interface_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.virtual_interface_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [virtual_interface_id][crate::model::ConfirmPrivateVirtualInterfaceRequest::virtual_interface_id].
    pub fn set_or_clear_virtual_interface_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.virtual_interface_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [virtual_gateway_id][crate::model::ConfirmPrivateVirtualInterfaceRequest::virtual_gateway_id].
    pub fn set_virtual_gateway_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.virtual_gateway_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [virtual_gateway_id][crate::model::ConfirmPrivateVirtualInterfaceRequest::virtual_gateway_id].
    pub fn set_or_clear_virtual_gateway_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.virtual_gateway_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [DirectConnect::confirm_public_virtual_interface][crate::client::DirectConnect::confirm_public_virtual_interface].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ConfirmPublicVirtualInterfaceRequest {
    pub virtual_interface_id: std::option::Option<std::string::String>,
}

impl ConfirmPublicVirtualInterfaceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [virtual_interface_id][crate::model::ConfirmPublicVirtualInterfaceRequest::virtual_interface_id].
    pub fn set_virtual_interface_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.virtual_interface_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [virtual_interface_id][crate::model::ConfirmPublicVirtualInterfaceRequest::virtual_interface_id].
    pub fn set_or_clear_virtual_interface_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.virtual_interface_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [DirectConnect::create_connection][crate::client::DirectConnect::create_connection].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateConnectionRequest {
    pub location: std::option::Option<std::string::String>,

    pub bandwidth: std::option::Option<std::string::String>,

    pub connection_name: std::option::Option<std::string::String>,
}

impl CreateConnectionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [location][crate::model::CreateConnectionRequest::location].
    pub fn set_location<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.location = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [location][crate::model::CreateConnectionRequest::location].
    pub fn set_or_clear_location<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bandwidth][crate::model::CreateConnectionRequest::bandwidth].
    pub fn set_bandwidth<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.bandwidth = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bandwidth][crate::model::CreateConnectionRequest::bandwidth].
    pub fn set_or_clear_bandwidth<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bandwidth = v.map(|x| x.into());
        self
    }

    /// Sets the value of [connection_name][crate::model::CreateConnectionRequest::connection_name].
    pub fn set_connection_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.connection_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [connection_name][crate::model::CreateConnectionRequest::connection_name].
    pub fn set_or_clear_connection_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.connection_name = v.map(|x| x.into());
        self
    }
}

/// The request message for [DirectConnect::create_interconnect][crate::client::DirectConnect::create_interconnect].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateInterconnectRequest {
    pub interconnect_name: std::option::Option<std::string::String>,

    pub bandwidth: std::option::Option<std::string::String>,

    pub location: std::option::Option<std::string::String>,
}

impl CreateInterconnectRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [interconnect_name][crate::model::CreateInterconnectRequest::interconnect_name].
    pub fn set_interconnect_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.interconnect_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [interconnect_name][crate::model::CreateInterconnectRequest::interconnect_name].
    pub fn set_or_clear_interconnect_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.interconnect_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bandwidth][crate::model::CreateInterconnectRequest::bandwidth].
    pub fn set_bandwidth<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.bandwidth = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bandwidth][crate::model::CreateInterconnectRequest::bandwidth].
    pub fn set_or_clear_bandwidth<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bandwidth = v.map(|x| x.into());
        self
    }

    /// Sets the value of [location][crate::model::CreateInterconnectRequest::location].
    pub fn set_location<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.location = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [location][crate::model::CreateInterconnectRequest::location].
    pub fn set_or_clear_location<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location = v.map(|x| x.into());
        self
    }
}

/// The request message for [DirectConnect::create_private_virtual_interface][crate::client::DirectConnect::create_private_virtual_interface].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreatePrivateVirtualInterfaceRequest {
    pub connection_id: std::option::Option<std::string::String>,

    pub new_private_virtual_interface: std::option::Option<crate::model::NewPrivateVirtualInterface>,
}

impl CreatePrivateVirtualInterfaceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [connection_id][crate::model::CreatePrivateVirtualInterfaceRequest::connection_id].
    pub fn set_connection_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.connection_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [connection_id][crate::model::CreatePrivateVirtualInterfaceRequest::connection_id].
    pub fn set_or_clear_connection_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.connection_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [new_private_virtual_interface][crate::model::CreatePrivateVirtualInterfaceRequest::new_private_virtual_interface].
    pub fn set_new_private_virtual_interface<T: std::convert::Into<crate::model::NewPrivateVirtualInterface>>(mut self, v: T) -> Self {
        self.new_private_virtual_interface = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [new_private_virtual_interface][crate::model::CreatePrivateVirtualInterfaceRequest::new_private_virtual_interface].
    pub fn set_or_clear_new_private_virtual_interface<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::NewPrivateVirtualInterface>,
    {
        self.new_private_virtual_interface = v.map(|x| x.into());
        self
    }
}

/// The request message for [DirectConnect::create_public_virtual_interface][crate::client::DirectConnect::create_public_virtual_interface].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreatePublicVirtualInterfaceRequest {
    pub connection_id: std::option::Option<std::string::String>,

    pub new_public_virtual_interface: std::option::Option<crate::model::NewPublicVirtualInterface>,
}

impl CreatePublicVirtualInterfaceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [connection_id][crate::model::CreatePublicVirtualInterfaceRequest::connection_id].
    pub fn set_connection_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.connection_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [connection_id][crate::model::CreatePublicVirtualInterfaceRequest::connection_id].
    pub fn set_or_clear_connection_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.connection_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [new_public_virtual_interface][crate::model::CreatePublicVirtualInterfaceRequest::new_public_virtual_interface].
    pub fn set_new_public_virtual_interface<T: std::convert::Into<crate::model::NewPublicVirtualInterface>>(mut self, v: T) -> Self {
        self.new_public_virtual_interface = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [new_public_virtual_interface][crate::model::CreatePublicVirtualInterfaceRequest::new_public_virtual_interface].
    pub fn set_or_clear_new_public_virtual_interface<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::NewPublicVirtualInterface>,
    {
        self.new_public_virtual_interface = v.map(|x| x.into());
        self
    }
}

/// The request message for [DirectConnect::delete_connection][crate::client::DirectConnect::delete_connection].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteConnectionRequest {
    pub connection_id: std::option::Option<std::string::String>,
}

impl DeleteConnectionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [connection_id][crate::model::DeleteConnectionRequest::connection_id].
    pub fn set_connection_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.connection_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [connection_id][crate::model::DeleteConnectionRequest::connection_id].
    pub fn set_or_clear_connection_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.connection_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [DirectConnect::delete_interconnect][crate::client::DirectConnect::delete_interconnect].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteInterconnectRequest {
    pub interconnect_id: std::option::Option<std::string::String>,
}

impl DeleteInterconnectRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [interconnect_id][crate::model::DeleteInterconnectRequest::interconnect_id].
    pub fn set_interconnect_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.interconnect_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [interconnect_id][crate::model::DeleteInterconnectRequest::interconnect_id].
    pub fn set_or_clear_interconnect_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.interconnect_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [DirectConnect::delete_virtual_interface][crate::client::DirectConnect::delete_virtual_interface].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteVirtualInterfaceRequest {
    pub virtual_interface_id: std::option::Option<std::string::String>,
}

impl DeleteVirtualInterfaceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [virtual_interface_id][crate::model::DeleteVirtualInterfaceRequest::virtual_interface_id].
    pub fn set_virtual_interface_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.virtual_interface_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [virtual_interface_id][crate::model::DeleteVirtualInterfaceRequest::virtual_interface_id].
    pub fn set_or_clear_virtual_interface_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.virtual_interface_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [DirectConnect::describe_connection_loa][crate::client::DirectConnect::describe_connection_loa].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DescribeConnectionLoaRequest {
    pub connection_id: std::option::Option<std::string::String>,

    /// The name of the service provider who establishes connectivity on your behalf.
    pub provider_name: std::option::Option<std::string::String>,

    pub loa_content_type: std::option::Option<crate::model::LoaContentType>,
}

impl DescribeConnectionLoaRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [connection_id][crate::model::DescribeConnectionLoaRequest::connection_id].
    pub fn set_connection_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.connection_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [connection_id][crate::model::DescribeConnectionLoaRequest::connection_id].
    pub fn set_or_clear_connection_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.connection_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [provider_name][crate::model::DescribeConnectionLoaRequest::provider_name].
    pub fn set_provider_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.provider_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [provider_name][crate::model::DescribeConnectionLoaRequest::provider_name].
    pub fn set_or_clear_provider_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.provider_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [loa_content_type][crate::model::DescribeConnectionLoaRequest::loa_content_type].
    pub fn set_loa_content_type<T: std::convert::Into<crate::model::LoaContentType>>(mut self, v: T) -> Self {
        self.loa_content_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [loa_content_type][crate::model::DescribeConnectionLoaRequest::loa_content_type].
    pub fn set_or_clear_loa_content_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::LoaContentType>,
    {
        self.loa_content_type = v.map(|x| x.into());
        self
    }
}

/// The request message for [DirectConnect::describe_connections][crate::client::DirectConnect::describe_connections].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DescribeConnectionsRequest {
    pub connection_id: std::option::Option<std::string::String>,
}

impl DescribeConnectionsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [connection_id][crate::model::DescribeConnectionsRequest::connection_id].
    pub fn set_connection_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.connection_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [connection_id][crate::model::DescribeConnectionsRequest::connection_id].
    pub fn set_or_clear_connection_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.connection_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [DirectConnect::describe_connections_on_interconnect][crate::client::DirectConnect::describe_connections_on_interconnect].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DescribeConnectionsOnInterconnectRequest {
    pub interconnect_id: std::option::Option<std::string::String>,
}

impl DescribeConnectionsOnInterconnectRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [interconnect_id][crate::model::DescribeConnectionsOnInterconnectRequest::interconnect_id].
    pub fn set_interconnect_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.interconnect_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [interconnect_id][crate::model::DescribeConnectionsOnInterconnectRequest::interconnect_id].
    pub fn set_or_clear_interconnect_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.interconnect_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [DirectConnect::describe_interconnect_loa][crate::client::DirectConnect::describe_interconnect_loa].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DescribeInterconnectLoaRequest {
    pub interconnect_id: std::option::Option<std::string::String>,

    pub provider_name: std::option::Option<std::string::String>,

    pub loa_content_type: std::option::Option<crate::model::LoaContentType>,
}

impl DescribeInterconnectLoaRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [interconnect_id][crate::model::DescribeInterconnectLoaRequest::interconnect_id].
    pub fn set_interconnect_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.interconnect_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [interconnect_id][crate::model::DescribeInterconnectLoaRequest::interconnect_id].
    pub fn set_or_clear_interconnect_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.interconnect_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [provider_name][crate::model::DescribeInterconnectLoaRequest::provider_name].
    pub fn set_provider_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.provider_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [provider_name][crate::model::DescribeInterconnectLoaRequest::provider_name].
    pub fn set_or_clear_provider_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.provider_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [loa_content_type][crate::model::DescribeInterconnectLoaRequest::loa_content_type].
    pub fn set_loa_content_type<T: std::convert::Into<crate::model::LoaContentType>>(mut self, v: T) -> Self {
        self.loa_content_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [loa_content_type][crate::model::DescribeInterconnectLoaRequest::loa_content_type].
    pub fn set_or_clear_loa_content_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::LoaContentType>,
    {
        self.loa_content_type = v.map(|x| x.into());
        self
    }
}

/// The request message for [DirectConnect::describe_interconnects][crate::client::DirectConnect::describe_interconnects].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DescribeInterconnectsRequest {
    pub interconnect_id: std::option::Option<std::string::String>,
}

impl DescribeInterconnectsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [interconnect_id][crate::model::DescribeInterconnectsRequest::interconnect_id].
    pub fn set_interconnect_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.interconnect_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [interconnect_id][crate::model::DescribeInterconnectsRequest::interconnect_id].
    pub fn set_or_clear_interconnect_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.interconnect_id = v.map(|x| x.into());
        self
    }
}

/// The request message for [DirectConnect::describe_locations][crate::client::DirectConnect::describe_locations].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DescribeLocationsRequest {}

impl DescribeLocationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

/// The request message for [DirectConnect::describe_virtual_gateways][crate::client::DirectConnect::describe_virtual_gateways].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DescribeVirtualGatewaysRequest {}

impl DescribeVirtualGatewaysRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

/// The request message for [DirectConnect::describe_virtual_interfaces][crate::client::DirectConnect::describe_virtual_interfaces].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DescribeVirtualInterfacesRequest {
    pub connection_id: std::option::Option<std::string::String>,

    pub virtual_interface_id: std::option::Option<std::string::String>,
}

impl DescribeVirtualInterfacesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [connection_id][crate::model::DescribeVirtualInterfacesRequest::connection_id].
    pub fn set_connection_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.connection_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [connection_id][crate::model::DescribeVirtualInterfacesRequest::connection_id].
    pub fn set_or_clear_connection_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.connection_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [virtual_interface_id][crate::model::DescribeVirtualInterfacesRequest::virtual_interface_id].
    pub fn set_virtual_interface_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.virtual_interface_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [virtual_interface_id][crate::model::DescribeVirtualInterfacesRequest::virtual_interface_id].
    pub fn set_or_clear_virtual_interface_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.virtual_interface_id = v.map(|x| x.into());
        self
    }
}

/// A connection between a customer network and an AWS Direct Connect location.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Connection {
    /// The AWS account that owns the connection.
    pub owner_account: std::option::Option<std::string::String>,

    /// The ID of the connection, for example `dxcon-fg5678gh`.
    pub connection_id: std::option::Option<std::string::String>,

    /// The name of the connection, for example `My Connection to AWS`.
    pub connection_name: std::option::Option<std::string::String>,

    /// The state of the connection.
    pub connection_state: std::option::Option<crate::model::ConnectionState>,

    /// The AWS region where the connection is located.
    pub region: std::option::Option<std::string::String>,

    /// The location of the connection, for example `EqSe2`.
    pub location: std::option::Option<std::string::String>,

    /// The bandwidth of the connection, for example `1Gbps`.
    pub bandwidth: std::option::Option<std::string::String>,

    /// The VLAN ID, for example `101`.
    pub vlan: std::option::Option<i32>,

    pub partner_name: std::option::Option<std::string::String>,
}

impl Connection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [owner_account][crate::model::Connection::owner_account].
    pub fn set_owner_account<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.owner_account = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [owner_account][crate::model::Connection::owner_account].
    pub fn set_or_clear_owner_account<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.owner_account = v.map(|x| x.into());
        self
    }

    /// Sets the value of [connection_id][crate::model::Connection::connection_id].
    pub fn set_connection_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.connection_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [connection_id][crate::model::Connection::connection_id].
    pub fn set_or_clear_connection_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.connection_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [connection_name][crate::model::Connection::connection_name].
    pub fn set_connection_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.connection_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [connection_name][crate::model::Connection::connection_name].
    pub fn set_or_clear_connection_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.connection_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [connection_state][crate::model::Connection::connection_state].
    pub fn set_connection_state<T: std::convert::Into<crate::model::ConnectionState>>(mut self, v: T) -> Self {
        self.connection_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [connection_state][crate::model::Connection::connection_state].
    pub fn set_or_clear_connection_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ConnectionState>,
    {
        self.connection_state = v.map(|x| x.into());
        self
    }

    /// Sets the value of [region][crate::model::Connection::region].
    pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][crate::model::Connection::region].
    pub fn set_or_clear_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [location][crate::model::Connection::location].
    pub fn set_location<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.location = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [location][crate::model::Connection::location].
    pub fn set_or_clear_location<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bandwidth][crate::model::Connection::bandwidth].
    pub fn set_bandwidth<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.bandwidth = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bandwidth][crate::model::Connection::bandwidth].
    pub fn set_or_clear_bandwidth<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bandwidth = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vlan][crate::model::Connection::vlan].
    pub fn set_vlan<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.vlan = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vlan][crate::model::Connection::vlan].
    pub fn set_or_clear_vlan<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.vlan = v.map(|x| x.into());
        self
    }

    /// Sets the value of [partner_name][crate::model::Connection::partner_name].
    pub fn set_partner_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.partner_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [partner_name][crate::model::Connection::partner_name].
    pub fn set_or_clear_partner_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.partner_name = v.map(|x| x.into());
        self
    }
}

/// A list of connections.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Connections {
    /// The connections.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub connections: std::vec::Vec<crate::model::Connection>,
}

impl Connections {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [connections][crate::model::Connections::connections].
    pub fn set_connections<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Connection>,
    {
        self.connections = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// An interconnect between an AWS Direct Connect partner's network and a specific Direct Connect location.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Interconnect {
    /// The ID of the interconnect, for example `dxcon-abc123`.
    pub interconnect_id: std::option::Option<std::string::String>,

    /// The name of the interconnect.
    pub interconnect_name: std::option::Option<std::string::String>,

    /// The state of the interconnect.
    pub interconnect_state: std::option::Option<crate::model::InterconnectState>,

    pub region: std::option::Option<std::string::String>,

    pub location: std::option::Option<std::string::String>,

    pub bandwidth: std::option::Option<std::string::String>,
}

impl Interconnect {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [interconnect_id][crate::model::Interconnect::interconnect_id].
    pub fn set_interconnect_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.interconnect_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [interconnect_id][crate::model::Interconnect::interconnect_id].
    pub fn set_or_clear_interconnect_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.interconnect_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [interconnect_name][crate::model::Interconnect::interconnect_name].
    pub fn set_interconnect_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.interconnect_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [interconnect_name][crate::model::Interconnect::interconnect_name].
    pub fn set_or_clear_interconnect_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.interconnect_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [interconnect_state][crate::model::Interconnect::interconnect_state].
    pub fn set_interconnect_state<T: std::convert::Into<crate::model::InterconnectState>>(mut self, v: T) -> Self {
        self.interconnect_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [interconnect_state][crate::model::Interconnect::interconnect_state].
    pub fn set_or_clear_interconnect_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::InterconnectState>,
    {
        self.interconnect_state = v.map(|x| x.into());
        self
    }

    /// Sets the value of [region][crate::model::Interconnect::region].
    pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][crate::model::Interconnect::region].
    pub fn set_or_clear_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [location][crate::model::Interconnect::location].
    pub fn set_location<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.location = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [location][crate::model::Interconnect::location].
    pub fn set_or_clear_location<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bandwidth][crate::model::Interconnect::bandwidth].
    pub fn set_bandwidth<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.bandwidth = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bandwidth][crate::model::Interconnect::bandwidth].
    pub fn set_or_clear_bandwidth<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.bandwidth = v.map(|x| x.into());
        self
    }
}

/// A list of interconnects.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Interconnects {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub interconnects: std::vec::Vec<crate::model::Interconnect>,
}

impl Interconnects {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [interconnects][crate::model::Interconnects::interconnects].
    pub fn set_interconnects<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Interconnect>,
    {
        self.interconnects = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A virtual interface on a connection.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct VirtualInterface {
    /// The AWS account that will own the virtual interface.
    pub owner_account: std::option::Option<std::string::String>,

    /// The ID of the virtual interface, for example `dxvif-123dfg56`.
    pub virtual_interface_id: std::option::Option<std::string::String>,

    pub location: std::option::Option<std::string::String>,

    pub connection_id: std::option::Option<std::string::String>,

    /// The type of virtual interface, `private` or `public`.
    pub virtual_interface_type: std::option::Option<std::string::String>,

    /// The name of the virtual interface assigned by the customer.
    pub virtual_interface_name: std::option::Option<std::string::String>,

    pub vlan: std::option::Option<i32>,

    /// The autonomous system number (ASN) for Border Gateway Protocol (BGP) configuration.
    pub asn: std::option::Option<i32>,

    /// The authentication key for BGP configuration.
    pub auth_key: std::option::Option<std::string::String>,

    /// The IP address assigned to the Amazon interface, for example `192.168.1.1/30`.
    pub amazon_address: std::option::Option<std::string::String>,

    /// The IP address assigned to the customer interface, for example `192.168.1.2/30`.
    pub customer_address: std::option::Option<std::string::String>,

    /// The state of the virtual interface.
    pub virtual_interface_state: std::option::Option<crate::model::VirtualInterfaceState>,

    /// Information for generating the customer router configuration.
    pub customer_router_config: std::option::Option<std::string::String>,

    /// The ID of the virtual private gateway, only for private virtual interfaces.
    pub virtual_gateway_id: std::option::Option<std::string::String>,

    /// The routes to be advertised to the AWS network in this region, only for public virtual interfaces.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub route_filter_prefixes: std::vec::Vec<crate::model::RouteFilterPrefix>,
}

impl VirtualInterface {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [owner_account][crate::model::VirtualInterface::owner_account].
    pub fn set_owner_account<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.owner_account = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [owner_account][crate::model::VirtualInterface::owner_account].
    pub fn set_or_clear_owner_account<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.owner_account = v.map(|x| x.into());
        self
    }

    /// Sets the value of [virtual_interface_id][crate::model::VirtualInterface::virtual_interface_id].
    pub fn set_virtual_interface_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.virtual_interface_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [virtual_interface_id][crate::model::VirtualInterface::virtual_interface_id].
    pub fn set_or_clear_virtual_interface_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.virtual_interface_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [location][crate::model::VirtualInterface::location].
    pub fn set_location<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.location = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [location][crate::model::VirtualInterface::location].
    pub fn set_or_clear_location<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [connection_id][crate::model::VirtualInterface::connection_id].
    pub fn set_connection_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.connection_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [connection_id][crate::model::VirtualInterface::connection_id].
    pub fn set_or_clear_connection_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.connection_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [virtual_interface_type][crate::model::VirtualInterface::virtual_interface_type].
    pub fn set_virtual_interface_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.virtual_interface_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [virtual_interface_type][crate::model::VirtualInterface::virtual_interface_type].
    pub fn set_or_clear_virtual_interface_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.virtual_interface_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [virtual_interface_name][crate::model::VirtualInterface::virtual_interface_name].
    pub fn set_virtual_interface_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.virtual_interface_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [virtual_interface_name][crate::model::VirtualInterface::virtual_interface_name].
    pub fn set_or_clear_virtual_interface_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.virtual_interface_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vlan][crate::model::VirtualInterface::vlan].
    pub fn set_vlan<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.vlan = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vlan][crate::model::VirtualInterface::vlan].
    pub fn set_or_clear_vlan<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.vlan = v.map(|x| x.into());
        self
    }

    /// Sets the value of [asn][crate::model::VirtualInterface::asn].
    pub fn set_asn<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.asn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [asn][crate::model::VirtualInterface::asn].
    pub fn set_or_clear_asn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.asn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [auth_key][crate::model::VirtualInterface::auth_key].
    pub fn set_auth_key<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.auth_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [auth_key][crate::model::VirtualInterface::auth_key].
    pub fn set_or_clear_auth_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.auth_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [amazon_address][crate::model::VirtualInterface::amazon_address].
    pub fn set_amazon_address<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.amazon_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [amazon_address][crate::model::VirtualInterface::amazon_address].
    pub fn set_or_clear_amazon_address<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.amazon_address = v.map(|x| x.into());
        self
    }

    /// Sets the value of [customer_address][crate::model::VirtualInterface::customer_address].
    pub fn set_customer_address<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.customer_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [customer_address][crate::model::VirtualInterface::customer_address].
    pub fn set_or_clear_customer_address<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.customer_address = v.map(|x| x.into());
        self
    }

    /// Sets the value of [virtual_interface_state][crate::model::VirtualInterface::virtual_interface_state].
    pub fn set_virtual_interface_state<T: std::convert::Into<crate::model::VirtualInterfaceState>>(mut self, v: T) -> Self {
        self.virtual_interface_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [virtual_interface_state][crate::model::VirtualInterface::virtual_interface_state].
    pub fn set_or_clear_virtual_interface_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::VirtualInterfaceState>,
    {
        self.virtual_interface_state = v.map(|x| x.into());
        self
    }

    /// Sets the value of [customer_router_config][crate::model::VirtualInterface::customer_router_config].
    pub fn set_customer_router_config<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.customer_router_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [customer_router_config][crate::model::VirtualInterface::customer_router_config].
    pub fn set_or_clear_customer_router_config<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.customer_router_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [virtual_gateway_id][crate::model::VirtualInterface::virtual_gateway_id].
    pub fn set_virtual_gateway_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.virtual_gateway_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [virtual_gateway_id][crate::model::VirtualInterface::virtual_gateway_id].
    pub fn set_or_clear_virtual_gateway_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.virtual_gateway_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [route_filter_prefixes][crate::model::VirtualInterface::route_filter_prefixes].
    pub fn set_route_filter_prefixes<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::RouteFilterPrefix>,
    {
        self.route_filter_prefixes = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A list of virtual interfaces.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct VirtualInterfaces {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub virtual_interfaces: std::vec::Vec<crate::model::VirtualInterface>,
}

impl VirtualInterfaces {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [virtual_interfaces][crate::model::VirtualInterfaces::virtual_interfaces].
    pub fn set_virtual_interfaces<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::VirtualInterface>,
    {
        self.virtual_interfaces = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A route filter prefix that the customer can advertise through BGP over a public virtual interface.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RouteFilterPrefix {
    /// The CIDR block for the advertised route, for example `10.10.10.0/24`.
    pub cidr: std::option::Option<std::string::String>,
}

impl RouteFilterPrefix {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [cidr][crate::model::RouteFilterPrefix::cidr].
    pub fn set_cidr<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.cidr = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cidr][crate::model::RouteFilterPrefix::cidr].
    pub fn set_or_clear_cidr<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.cidr = v.map(|x| x.into());
        self
    }
}

/// Information for creating a private virtual interface.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NewPrivateVirtualInterface {
    pub virtual_interface_name: std::option::Option<std::string::String>,

    pub vlan: std::option::Option<i32>,

    pub asn: std::option::Option<i32>,

    pub auth_key: std::option::Option<std::string::String>,

    pub amazon_address: std::option::Option<std::string::String>,

    pub customer_address: std::option::Option<std::string::String>,

    pub virtual_gateway_id: std::option::Option<std::string::String>,
}

impl NewPrivateVirtualInterface {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [virtual_interface_name][crate::model::NewPrivateVirtualInterface::virtual_interface_name].
    pub fn set_virtual_interface_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.virtual_interface_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [virtual_interface_name][crate::model::NewPrivateVirtualInterface::virtual_interface_name].
    pub fn set_or_clear_virtual_interface_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.virtual_interface_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vlan][crate::model::NewPrivateVirtualInterface::vlan].
    pub fn set_vlan<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.vlan = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vlan][crate::model::NewPrivateVirtualInterface::vlan].
    pub fn set_or_clear_vlan<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.vlan = v.map(|x| x.into());
        self
    }

    /// Sets the value of [asn][crate::model::NewPrivateVirtualInterface::asn].
    pub fn set_asn<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.asn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [asn][crate::model::NewPrivateVirtualInterface::asn].
    pub fn set_or_clear_asn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.asn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [auth_key][crate::model::NewPrivateVirtualInterface::auth_key].
    pub fn set_auth_key<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.auth_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [auth_key][crate::model::NewPrivateVirtualInterface::auth_key].
    pub fn set_or_clear_auth_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.auth_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [amazon_address][crate::model::NewPrivateVirtualInterface::amazon_address].
    pub fn set_amazon_address<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.amazon_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [amazon_address][crate::model::NewPrivateVirtualInterface::amazon_address].
    pub fn set_or_clear_amazon_address<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.amazon_address = v.map(|x| x.into());
        self
    }

    /// Sets the value of [customer_address][crate::model::NewPrivateVirtualInterface::customer_address].
    pub fn set_customer_address<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.customer_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [customer_address][crate::model::NewPrivateVirtualInterface::customer_address].
    pub fn set_or_clear_customer_address<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.customer_address = v.map(|x| x.into());
        self
    }

    /// Sets the value of [virtual_gateway_id][crate::model::NewPrivateVirtualInterface::virtual_gateway_id].
    pub fn set_virtual_gateway_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.virtual_gateway_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [virtual_gateway_id][crate::model::NewPrivateVirtualInterface::virtual_gateway_id].
    pub fn set_or_clear_virtual_gateway_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.virtual_gateway_id = v.map(|x| x.into());
        self
    }
}

/// Information for provisioning a private virtual interface on behalf of another account.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NewPrivateVirtualInterfaceAllocation {
    pub virtual_interface_name: std::option::Option<std::string::String>,

    pub vlan: std::option::Option<i32>,

    pub asn: std::option::Option<i32>,

    pub auth_key: std::option::Option<std::string::String>,

    pub amazon_address: std::option::Option<std::string::String>,

    pub customer_address: std::option::Option<std::string::String>,
}

impl NewPrivateVirtualInterfaceAllocation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [virtual_interface_name][crate::model::NewPrivateVirtualInterfaceAllocation::virtual_interface_name].
    pub fn set_virtual_interface_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.virtual_interface_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [virtual_interface_name][crate::model::NewPrivateVirtualInterfaceAllocation::virtual_interface_name].
    pub fn set_or_clear_virtual_interface_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.virtual_interface_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vlan][crate::model::NewPrivateVirtualInterfaceAllocation::vlan].
    pub fn set_vlan<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.vlan = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vlan][crate::model::NewPrivateVirtualInterfaceAllocation::vlan].
    pub fn set_or_clear_vlan<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.vlan = v.map(|x| x.into());
        self
    }

    /// Sets the value of [asn][crate::model::NewPrivateVirtualInterfaceAllocation::asn].
    pub fn set_asn<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.asn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [asn][crate::model::NewPrivateVirtualInterfaceAllocation::asn].
    pub fn set_or_clear_asn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.asn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [auth_key][crate::model::NewPrivateVirtualInterfaceAllocation::auth_key].
    pub fn set_auth_key<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.auth_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [auth_key][crate::model::NewPrivateVirtualInterfaceAllocation::auth_key].
    pub fn set_or_clear_auth_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.auth_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [amazon_address][crate::model::NewPrivateVirtualInterfaceAllocation::amazon_address].
    pub fn set_amazon_address<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.amazon_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [amazon_address][crate::model::NewPrivateVirtualInterfaceAllocation::amazon_address].
    pub fn set_or_clear_amazon_address<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.amazon_address = v.map(|x| x.into());
        self
    }

    /// Sets the value of [customer_address][crate::model::NewPrivateVirtualInterfaceAllocation::customer_address].
    pub fn set_customer_address<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.customer_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [customer_address][crate::model::NewPrivateVirtualInterfaceAllocation::customer_address].
    pub fn set_or_clear_customer_address<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.customer_address = v.map(|x| x.into());
        self
    }
}

/// Information for creating a public virtual interface.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NewPublicVirtualInterface {
    pub virtual_interface_name: std::option::Option<std::string::String>,

    pub vlan: std::option::Option<i32>,

    pub asn: std::option::Option<i32>,

    pub auth_key: std::option::Option<std::string::String>,

    pub amazon_address: std::option::Option<std::string::String>,

    pub customer_address: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub route_filter_prefixes: std::vec::Vec<crate::model::RouteFilterPrefix>,
}

impl NewPublicVirtualInterface {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [virtual_interface_name][crate::model::NewPublicVirtualInterface::virtual_interface_name].
    pub fn set_virtual_interface_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.virtual_interface_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [virtual_interface_name][crate::model::NewPublicVirtualInterface::virtual_interface_name].
    pub fn set_or_clear_virtual_interface_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.virtual_interface_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vlan][crate::model::NewPublicVirtualInterface::vlan].
    pub fn set_vlan<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.vlan = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vlan][crate::model::NewPublicVirtualInterface::vlan].
    pub fn set_or_clear_vlan<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.vlan = v.map(|x| x.into());
        self
    }

    /// Sets the value of [asn][crate::model::NewPublicVirtualInterface::asn].
    pub fn set_asn<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.asn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [asn][crate::model::NewPublicVirtualInterface::asn].
    pub fn set_or_clear_asn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.asn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [auth_key][crate::model::NewPublicVirtualInterface::auth_key].
    pub fn set_auth_key<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.auth_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [auth_key][crate::model::NewPublicVirtualInterface::auth_key].
    pub fn set_or_clear_auth_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.auth_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [amazon_address][crate::model::NewPublicVirtualInterface::amazon_address].
    pub fn set_amazon_address<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.amazon_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [amazon_address][crate::model::NewPublicVirtualInterface::amazon_address].
    pub fn set_or_clear_amazon_address<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.amazon_address = v.map(|x| x.into());
        self
    }

    /// Sets the value of [customer_address][crate::model::NewPublicVirtualInterface::customer_address].
    pub fn set_customer_address<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.customer_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [customer_address][crate::model::NewPublicVirtualInterface::customer_address].
    pub fn set_or_clear_customer_address<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.customer_address = v.map(|x| x.into());
        self
    }

    /// Sets the value of [route_filter_prefixes][crate::model::NewPublicVirtualInterface::route_filter_prefixes].
    pub fn set_route_filter_prefixes<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::RouteFilterPrefix>,
    {
        self.route_filter_prefixes = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Information for provisioning a public virtual interface on behalf of another account.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NewPublicVirtualInterfaceAllocation {
    pub virtual_interface_name: std::option::Option<std::string::String>,

    pub vlan: std::option::Option<i32>,

    pub asn: std::option::Option<i32>,

    pub auth_key: std::option::Option<std::string::String>,

    pub amazon_address: std::option::Option<std::string::String>,

    pub customer_address: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub route_filter_prefixes: std::vec::Vec<crate::model::RouteFilterPrefix>,
}

impl NewPublicVirtualInterfaceAllocation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [virtual_interface_name][crate::model::NewPublicVirtualInterfaceAllocation::virtual_interface_name].
    pub fn set_virtual_interface_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.virtual_interface_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [virtual_interface_name][crate::model::NewPublicVirtualInterfaceAllocation::virtual_interface_name].
    pub fn set_or_clear_virtual_interface_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.virtual_interface_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vlan][crate::model::NewPublicVirtualInterfaceAllocation::vlan].
    pub fn set_vlan<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.vlan = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vlan][crate::model::NewPublicVirtualInterfaceAllocation::vlan].
    pub fn set_or_clear_vlan<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.vlan = v.map(|x| x.into());
        self
    }

    /// Sets the value of [asn][crate::model::NewPublicVirtualInterfaceAllocation::asn].
    pub fn set_asn<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.asn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [asn][crate::model::NewPublicVirtualInterfaceAllocation::asn].
    pub fn set_or_clear_asn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.asn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [auth_key][crate::model::NewPublicVirtualInterfaceAllocation::auth_key].
    pub fn set_auth_key<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.auth_key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [auth_key][crate::model::NewPublicVirtualInterfaceAllocation::auth_key].
    pub fn set_or_clear_auth_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.auth_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [amazon_address][crate::model::NewPublicVirtualInterfaceAllocation::amazon_address].
    pub fn set_amazon_address<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.amazon_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [amazon_address][crate::model::NewPublicVirtualInterfaceAllocation::amazon_address].
    pub fn set_or_clear_amazon_address<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.amazon_address = v.map(|x| x.into());
        self
    }

    /// Sets the value of [customer_address][crate::model::NewPublicVirtualInterfaceAllocation::customer_address].
    pub fn set_customer_address<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.customer_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [customer_address][crate::model::NewPublicVirtualInterfaceAllocation::customer_address].
    pub fn set_or_clear_customer_address<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.customer_address = v.map(|x| x.into());
        self
    }

    /// Sets the value of [route_filter_prefixes][crate::model::NewPublicVirtualInterfaceAllocation::route_filter_prefixes].
    pub fn set_route_filter_prefixes<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::RouteFilterPrefix>,
    {
        self.route_filter_prefixes = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// An AWS Direct Connect location where connections and interconnects can be requested.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Location {
    /// The code used to indicate the location, for example `EqSe2`.
    pub location_code: std::option::Option<std::string::String>,

    /// The name of the location, including the name of the colocation provider.
    pub location_name: std::option::Option<std::string::String>,
}

impl Location {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [location_code][crate::model::Location::location_code].
    pub fn set_location_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.location_code = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [location_code][crate::model::Location::location_code].
    pub fn set_or_clear_location_code<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location_code = v.map(|x| x.into());
        self
    }

    /// Sets the value of [location_name][crate::model::Location::location_name].
    pub fn set_location_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.location_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [location_name][crate::model::Location::location_name].
    pub fn set_or_clear_location_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location_name = v.map(|x| x.into());
        self
    }
}

/// A list of locations.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Locations {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub locations: std::vec::Vec<crate::model::Location>,
}

impl Locations {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [locations][crate::model::Locations::locations].
    pub fn set_locations<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Location>,
    {
        self.locations = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A virtual private gateway for a private virtual interface.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct VirtualGateway {
    pub virtual_gateway_id: std::option::Option<std::string::String>,

    /// The state of the virtual private gateway, for example `available`.
    pub virtual_gateway_state: std::option::Option<std::string::String>,
}

impl VirtualGateway {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [virtual_gateway_id][crate::model::VirtualGateway::virtual_gateway_id].
    pub fn set_virtual_gateway_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.virtual_gateway_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [virtual_gateway_id][crate::model::VirtualGateway::virtual_gateway_id].
    pub fn set_or_clear_virtual_gateway_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.virtual_gateway_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [virtual_gateway_state][crate::model::VirtualGateway::virtual_gateway_state].
    pub fn set_virtual_gateway_state<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.virtual_gateway_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [virtual_gateway_state][crate::model::VirtualGateway::virtual_gateway_state].
    pub fn set_or_clear_virtual_gateway_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.virtual_gateway_state = v.map(|x| x.into());
        self
    }
}

/// A list of virtual private gateways.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct VirtualGateways {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub virtual_gateways: std::vec::Vec<crate::model::VirtualGateway>,
}

impl VirtualGateways {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [virtual_gateways][crate::model::VirtualGateways::virtual_gateways].
    pub fn set_virtual_gateways<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::VirtualGateway>,
    {
        self.virtual_gateways = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A Letter of Authorization - Connecting Facility Assignment (LOA-CFA) for a connection.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Loa {
    /// The binary contents of the LOA-CFA document.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<serde_with::base64::Base64>")]
    pub loa_content: std::option::Option<bytes::Bytes>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub loa_content_type: std::option::Option<crate::model::LoaContentType>,
}

impl Loa {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [loa_content][crate::model::Loa::loa_content].
    pub fn set_loa_content<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.loa_content = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [loa_content][crate::model::Loa::loa_content].
    pub fn set_or_clear_loa_content<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bytes::Bytes>,
    {
        self.loa_content = v.map(|x| x.into());
        self
    }

    /// Sets the value of [loa_content_type][crate::model::Loa::loa_content_type].
    pub fn set_loa_content_type<T: std::convert::Into<crate::model::LoaContentType>>(mut self, v: T) -> Self {
        self.loa_content_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [loa_content_type][crate::model::Loa::loa_content_type].
    pub fn set_or_clear_loa_content_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::LoaContentType>,
    {
        self.loa_content_type = v.map(|x| x.into());
        self
    }
}

/// The response to a [ConfirmConnection][crate::client::DirectConnect::confirm_connection] request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ConfirmConnectionResponse {
    pub connection_state: std::option::Option<crate::model::ConnectionState>,
}

impl ConfirmConnectionResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [connection_state][crate::model::ConfirmConnectionResponse::connection_state].
    pub fn set_connection_state<T: std::convert::Into<crate::model::ConnectionState>>(mut self, v: T) -> Self {
        self.connection_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [connection_state][crate::model::ConfirmConnectionResponse::connection_state].
    pub fn set_or_clear_connection_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ConnectionState>,
    {
        self.connection_state = v.map(|x| x.into());
        self
    }
}

/// The response to a [ConfirmPrivateVirtualInterface][crate::client::DirectConnect::confirm_private_virtual_interface] request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ConfirmPrivateVirtualInterfaceResponse {
    pub virtual_interface_state: std::option::Option<crate::model::VirtualInterfaceState>,
}

impl ConfirmPrivateVirtualInterfaceResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [virtual_interface_state][crate::model::ConfirmPrivateVirtualInterfaceResponse::virtual_interface_state].
    pub fn set_virtual_interface_state<T: std::convert::Into<crate::model::VirtualInterfaceState>>(mut self, v: T) -> Self {
        self.virtual_interface_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [virtual_interface_state][crate::model::ConfirmPrivateVirtualInterfaceResponse::virtual_interface_state].
    pub fn set_or_clear_virtual_interface_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::VirtualInterfaceState>,
    {
        self.virtual_interface_state = v.map(|x| x.into());
        self
    }
}

/// The response to a [ConfirmPublicVirtualInterface][crate::client::DirectConnect::confirm_public_virtual_interface] request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ConfirmPublicVirtualInterfaceResponse {
    pub virtual_interface_state: std::option::Option<crate::model::VirtualInterfaceState>,
}

impl ConfirmPublicVirtualInterfaceResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [virtual_interface_state][crate::model::ConfirmPublicVirtualInterfaceResponse::virtual_interface_state].
    pub fn set_virtual_interface_state<T: std::convert::Into<crate::model::VirtualInterfaceState>>(mut self, v: T) -> Self {
        self.virtual_interface_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [virtual_interface_state][crate::model::ConfirmPublicVirtualInterfaceResponse::virtual_interface_state].
    pub fn set_or_clear_virtual_interface_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::VirtualInterfaceState>,
    {
        self.virtual_interface_state = v.map(|x| x.into());
        self
    }
}

/// The response to a [DeleteInterconnect][crate::client::DirectConnect::delete_interconnect] request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteInterconnectResponse {
    pub interconnect_state: std::option::Option<crate::model::InterconnectState>,
}

impl DeleteInterconnectResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [interconnect_state][crate::model::DeleteInterconnectResponse::interconnect_state].
    pub fn set_interconnect_state<T: std::convert::Into<crate::model::InterconnectState>>(mut self, v: T) -> Self {
        self.interconnect_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [interconnect_state][crate::model::DeleteInterconnectResponse::interconnect_state].
    pub fn set_or_clear_interconnect_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::InterconnectState>,
    {
        self.interconnect_state = v.map(|x| x.into());
        self
    }
}

/// The response to a [DeleteVirtualInterface][crate::client::DirectConnect::delete_virtual_interface] request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteVirtualInterfaceResponse {
    pub virtual_interface_state: std::option::Option<crate::model::VirtualInterfaceState>,
}

impl DeleteVirtualInterfaceResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [virtual_interface_state][crate::model::DeleteVirtualInterfaceResponse::virtual_interface_state].
    pub fn set_virtual_interface_state<T: std::convert::Into<crate::model::VirtualInterfaceState>>(mut self, v: T) -> Self {
        self.virtual_interface_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [virtual_interface_state][crate::model::DeleteVirtualInterfaceResponse::virtual_interface_state].
    pub fn set_or_clear_virtual_interface_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::VirtualInterfaceState>,
    {
        self.virtual_interface_state = v.map(|x| x.into());
        self
    }
}

/// The response to a [DescribeConnectionLoa][crate::client::DirectConnect::describe_connection_loa] request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DescribeConnectionLoaResponse {
    pub loa: std::option::Option<crate::model::Loa>,
}

impl DescribeConnectionLoaResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [loa][crate::model::DescribeConnectionLoaResponse::loa].
    pub fn set_loa<T: std::convert::Into<crate::model::Loa>>(mut self, v: T) -> Self {
        self.loa = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [loa][crate::model::DescribeConnectionLoaResponse::loa].
    pub fn set_or_clear_loa<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Loa>,
    {
        self.loa = v.map(|x| x.into());
        self
    }
}

/// The response to a [DescribeInterconnectLoa][crate::client::DirectConnect::describe_interconnect_loa] request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DescribeInterconnectLoaResponse {
    pub loa: std::option::Option<crate::model::Loa>,
}

impl DescribeInterconnectLoaResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [loa][crate::model::DescribeInterconnectLoaResponse::loa].
    pub fn set_loa<T: std::convert::Into<crate::model::Loa>>(mut self, v: T) -> Self {
        self.loa = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [loa][crate::model::DescribeInterconnectLoaResponse::loa].
    pub fn set_or_clear_loa<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Loa>,
    {
        self.loa = v.map(|x| x.into());
        self
    }
}

/// State of the connection.
///
/// # Working with unknown values
///
/// This enum is defined as `#[non_exhaustive]` because the service may add
/// new values after this library is released. Values received from the
/// service that are unknown to this library are preserved in the
/// [UnknownValue][ConnectionState::UnknownValue] variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConnectionState {
    Ordering,
    Requested,
    Pending,
    Available,
    Down,
    Deleting,
    Deleted,
    Rejected,
    /// If set, the enum was initialized with an unknown value.
    UnknownValue(UnknownValue),
}

impl ConnectionState {
    const ORDERING_HASH: i32 = hash_string("ordering");
    const REQUESTED_HASH: i32 = hash_string("requested");
    const PENDING_HASH: i32 = hash_string("pending");
    const AVAILABLE_HASH: i32 = hash_string("available");
    const DOWN_HASH: i32 = hash_string("down");
    const DELETING_HASH: i32 = hash_string("deleting");
    const DELETED_HASH: i32 = hash_string("deleted");
    const REJECTED_HASH: i32 = hash_string("rejected");

    /// Gets the enum value.
    pub fn value(&self) -> i32 {
        match self {
            Self::Ordering => 1,
            Self::Requested => 2,
            Self::Pending => 3,
            Self::Available => 4,
            Self::Down => 5,
            Self::Deleting => 6,
            Self::Deleted => 7,
            Self::Rejected => 8,
            Self::UnknownValue(u) => u.value(),
        }
    }

    /// Gets the enum value as a string.
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            Self::Ordering => Cow::Borrowed("ordering"),
            Self::Requested => Cow::Borrowed("requested"),
            Self::Pending => Cow::Borrowed("pending"),
            Self::Available => Cow::Borrowed("available"),
            Self::Down => Cow::Borrowed("down"),
            Self::Deleting => Cow::Borrowed("deleting"),
            Self::Deleted => Cow::Borrowed("deleted"),
            Self::Rejected => Cow::Borrowed("rejected"),
            Self::UnknownValue(u) => Cow::Owned(u.name()),
        }
    }
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

impl std::convert::From<i32> for ConnectionState {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Ordering,
            2 => Self::Requested,
            3 => Self::Pending,
            4 => Self::Available,
            5 => Self::Down,
            6 => Self::Deleting,
            7 => Self::Deleted,
            8 => Self::Rejected,
            _ => Self::UnknownValue(UnknownValue::from_value(value)),
        }
    }
}

impl std::convert::From<&str> for ConnectionState {
    fn from(value: &str) -> Self {
        match hash_string(value) {
            Self::ORDERING_HASH if value == "ordering" => Self::Ordering,
            Self::REQUESTED_HASH if value == "requested" => Self::Requested,
            Self::PENDING_HASH if value == "pending" => Self::Pending,
            Self::AVAILABLE_HASH if value == "available" => Self::Available,
            Self::DOWN_HASH if value == "down" => Self::Down,
            Self::DELETING_HASH if value == "deleting" => Self::Deleting,
            Self::DELETED_HASH if value == "deleted" => Self::Deleted,
            Self::REJECTED_HASH if value == "rejected" => Self::Rejected,
            _ => Self::UnknownValue(UnknownValue::from_name(value)),
        }
    }
}

impl Enumeration for ConnectionState {
    fn value(&self) -> i32 {
        self.value()
    }
    fn name(&self) -> Cow<'static, str> {
        self.name()
    }
}

impl serde::ser::Serialize for ConnectionState {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for ConnectionState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(
            gax::enumerations::internal::EnumVisitor::<ConnectionState>::new(
                ".directconnect.ConnectionState",
            ),
        )
    }
}

/// State of the interconnect.
///
/// # Working with unknown values
///
/// This enum is defined as `#[non_exhaustive]` because the service may add
/// new values after this library is released. Values received from the
/// service that are unknown to this library are preserved in the
/// [UnknownValue][InterconnectState::UnknownValue] variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum InterconnectState {
    Requested,
    Pending,
    Available,
    Down,
    Deleting,
    Deleted,
    /// If set, the enum was initialized with an unknown value.
    UnknownValue(UnknownValue),
}

impl InterconnectState {
    const REQUESTED_HASH: i32 = hash_string("requested");
    const PENDING_HASH: i32 = hash_string("pending");
    const AVAILABLE_HASH: i32 = hash_string("available");
    const DOWN_HASH: i32 = hash_string("down");
    const DELETING_HASH: i32 = hash_string("deleting");
    const DELETED_HASH: i32 = hash_string("deleted");

    /// Gets the enum value.
    pub fn value(&self) -> i32 {
        match self {
            Self::Requested => 1,
            Self::Pending => 2,
            Self::Available => 3,
            Self::Down => 4,
            Self::Deleting => 5,
            Self::Deleted => 6,
            Self::UnknownValue(u) => u.value(),
        }
    }

    /// Gets the enum value as a string.
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            Self::Requested => Cow::Borrowed("requested"),
            Self::Pending => Cow::Borrowed("pending"),
            Self::Available => Cow::Borrowed("available"),
            Self::Down => Cow::Borrowed("down"),
            Self::Deleting => Cow::Borrowed("deleting"),
            Self::Deleted => Cow::Borrowed("deleted"),
            Self::UnknownValue(u) => Cow::Owned(u.name()),
        }
    }
}

impl std::fmt::Display for InterconnectState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

impl std::convert::From<i32> for InterconnectState {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Requested,
            2 => Self::Pending,
            3 => Self::Available,
            4 => Self::Down,
            5 => Self::Deleting,
            6 => Self::Deleted,
            _ => Self::UnknownValue(UnknownValue::from_value(value)),
        }
    }
}

impl std::convert::From<&str> for InterconnectState {
    fn from(value: &str) -> Self {
        match hash_string(value) {
            Self::REQUESTED_HASH if value == "requested" => Self::Requested,
            Self::PENDING_HASH if value == "pending" => Self::Pending,
            Self::AVAILABLE_HASH if value == "available" => Self::Available,
            Self::DOWN_HASH if value == "down" => Self::Down,
            Self::DELETING_HASH if value == "deleting" => Self::Deleting,
            Self::DELETED_HASH if value == "deleted" => Self::Deleted,
            _ => Self::UnknownValue(UnknownValue::from_name(value)),
        }
    }
}

impl Enumeration for InterconnectState {
    fn value(&self) -> i32 {
        self.value()
    }
    fn name(&self) -> Cow<'static, str> {
        self.name()
    }
}

impl serde::ser::Serialize for InterconnectState {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for InterconnectState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(
            gax::enumerations::internal::EnumVisitor::<InterconnectState>::new(
                ".directconnect.InterconnectState",
            ),
        )
    }
}

/// State of the virtual interface.
///
/// # Working with unknown values
///
/// This enum is defined as `#[non_exhaustive]` because the service may add
/// new values after this library is released. Values received from the
/// service that are unknown to this library are preserved in the
/// [UnknownValue][VirtualInterfaceState::UnknownValue] variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum VirtualInterfaceState {
    Confirming,
    Verifying,
    Pending,
    Available,
    Down,
    Deleting,
    Deleted,
    Rejected,
    /// If set, the enum was initialized with an unknown value.
    UnknownValue(UnknownValue),
}

impl VirtualInterfaceState {
    const CONFIRMING_HASH: i32 = hash_string("confirming");
    const VERIFYING_HASH: i32 = hash_string("verifying");
    const PENDING_HASH: i32 = hash_string("pending");
    const AVAILABLE_HASH: i32 = hash_string("available");
    const DOWN_HASH: i32 = hash_string("down");
    const DELETING_HASH: i32 = hash_string("deleting");
    const DELETED_HASH: i32 = hash_string("deleted");
    const REJECTED_HASH: i32 = hash_string("rejected");

    /// Gets the enum value.
    pub fn value(&self) -> i32 {
        match self {
            Self::Confirming => 1,
            Self::Verifying => 2,
            Self::Pending => 3,
            Self::Available => 4,
            Self::Down => 5,
            Self::Deleting => 6,
            Self::Deleted => 7,
            Self::Rejected => 8,
            Self::UnknownValue(u) => u.value(),
        }
    }

    /// Gets the enum value as a string.
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            Self::Confirming => Cow::Borrowed("confirming"),
            Self::Verifying => Cow::Borrowed("verifying"),
            Self::Pending => Cow::Borrowed("pending"),
            Self::Available => Cow::Borrowed("available"),
            Self::Down => Cow::Borrowed("down"),
            Self::Deleting => Cow::Borrowed("deleting"),
            Self::Deleted => Cow::Borrowed("deleted"),
            Self::Rejected => Cow::Borrowed("rejected"),
            Self::UnknownValue(u) => Cow::Owned(u.name()),
        }
    }
}

impl std::fmt::Display for VirtualInterfaceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

impl std::convert::From<i32> for VirtualInterfaceState {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Confirming,
            2 => Self::Verifying,
            3 => Self::Pending,
            4 => Self::Available,
            5 => Self::Down,
            6 => Self::Deleting,
            7 => Self::Deleted,
            8 => Self::Rejected,
            _ => Self::UnknownValue(UnknownValue::from_value(value)),
        }
    }
}

impl std::convert::From<&str> for VirtualInterfaceState {
    fn from(value: &str) -> Self {
        match hash_string(value) {
            Self::CONFIRMING_HASH if value == "confirming" => Self::Confirming,
            Self::VERIFYING_HASH if value == "verifying" => Self::Verifying,
            Self::PENDING_HASH if value == "pending" => Self::Pending,
            Self::AVAILABLE_HASH if value == "available" => Self::Available,
            Self::DOWN_HASH if value == "down" => Self::Down,
            Self::DELETING_HASH if value == "deleting" => Self::Deleting,
            Self::DELETED_HASH if value == "deleted" => Self::Deleted,
            Self::REJECTED_HASH if value == "rejected" => Self::Rejected,
            _ => Self::UnknownValue(UnknownValue::from_name(value)),
        }
    }
}

impl Enumeration for VirtualInterfaceState {
    fn value(&self) -> i32 {
        self.value()
    }
    fn name(&self) -> Cow<'static, str> {
        self.name()
    }
}

impl serde::ser::Serialize for VirtualInterfaceState {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for VirtualInterfaceState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(
            gax::enumerations::internal::EnumVisitor::<VirtualInterfaceState>::new(
                ".directconnect.VirtualInterfaceState",
            ),
        )
    }
}

/// The standard media type for the LOA-CFA document.
///
/// # Working with unknown values
///
/// This enum is defined as `#[non_exhaustive]` because the service may add
/// new values after this library is released. Values received from the
/// service that are unknown to this library are preserved in the
/// [UnknownValue][LoaContentType::UnknownValue] variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum LoaContentType {
    ApplicationPdf,
    /// If set, the enum was initialized with an unknown value.
    UnknownValue(UnknownValue),
}

impl LoaContentType {
    const APPLICATION_PDF_HASH: i32 = hash_string("application/pdf");

    /// Gets the enum value.
    pub fn value(&self) -> i32 {
        match self {
            Self::ApplicationPdf => 1,
            Self::UnknownValue(u) => u.value(),
        }
    }

    /// Gets the enum value as a string.
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            Self::ApplicationPdf => Cow::Borrowed("application/pdf"),
            Self::UnknownValue(u) => Cow::Owned(u.name()),
        }
    }
}

impl std::fmt::Display for LoaContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

impl std::convert::From<i32> for LoaContentType {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::ApplicationPdf,
            _ => Self::UnknownValue(UnknownValue::from_value(value)),
        }
    }
}

impl std::convert::From<&str> for LoaContentType {
    fn from(value: &str) -> Self {
        match hash_string(value) {
            Self::APPLICATION_PDF_HASH if value == "application/pdf" => Self::ApplicationPdf,
            _ => Self::UnknownValue(UnknownValue::from_name(value)),
        }
    }
}

impl Enumeration for LoaContentType {
    fn value(&self) -> i32 {
        self.value()
    }
    fn name(&self) -> Cow<'static, str> {
        self.name()
    }
}

impl serde::ser::Serialize for LoaContentType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for LoaContentType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(
            gax::enumerations::internal::EnumVisitor::<LoaContentType>::new(
                ".directconnect.LoaContentType",
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    type Result = anyhow::Result<()>;

    #[test_case(ConnectionState::Ordering, "ordering", 1, 1_234_314_708)]
    #[test_case(ConnectionState::Requested, "requested", 2, 693_933_934)]
    #[test_case(ConnectionState::Pending, "pending", 3, -682_587_753)]
    #[test_case(ConnectionState::Available, "available", 4, -733_902_135)]
    #[test_case(ConnectionState::Down, "down", 5, 3_089_570)]
    #[test_case(ConnectionState::Deleting, "deleting", 6, 819_717_032)]
    #[test_case(ConnectionState::Deleted, "deleted", 7, 1_550_463_001)]
    #[test_case(ConnectionState::Rejected, "rejected", 8, -608_496_514)]
    fn connection_state(input: ConnectionState, name: &str, value: i32, hash: i32) {
        assert_eq!(input.name(), name);
        assert_eq!(input.value(), value);
        assert_eq!(hash_string(name), hash);
        assert_eq!(ConnectionState::from(name), input);
        assert_eq!(ConnectionState::from(value), input);
        assert_eq!(input.to_string(), name);
    }

    #[test_case(InterconnectState::Requested, "requested", 1)]
    #[test_case(InterconnectState::Pending, "pending", 2)]
    #[test_case(InterconnectState::Available, "available", 3)]
    #[test_case(InterconnectState::Down, "down", 4)]
    #[test_case(InterconnectState::Deleting, "deleting", 5)]
    #[test_case(InterconnectState::Deleted, "deleted", 6)]
    fn interconnect_state(input: InterconnectState, name: &str, value: i32) {
        assert_eq!(input.name(), name);
        assert_eq!(input.value(), value);
        assert_eq!(InterconnectState::from(name), input);
        assert_eq!(InterconnectState::from(value), input);
    }

    #[test_case(VirtualInterfaceState::Confirming, "confirming", 1, 842_414_370)]
    #[test_case(VirtualInterfaceState::Verifying, "verifying", 2, -1_695_870_775)]
    #[test_case(VirtualInterfaceState::Pending, "pending", 3, -682_587_753)]
    #[test_case(VirtualInterfaceState::Available, "available", 4, -733_902_135)]
    #[test_case(VirtualInterfaceState::Down, "down", 5, 3_089_570)]
    #[test_case(VirtualInterfaceState::Deleting, "deleting", 6, 819_717_032)]
    #[test_case(VirtualInterfaceState::Deleted, "deleted", 7, 1_550_463_001)]
    #[test_case(VirtualInterfaceState::Rejected, "rejected", 8, -608_496_514)]
    fn virtual_interface_state(input: VirtualInterfaceState, name: &str, value: i32, hash: i32) {
        assert_eq!(input.name(), name);
        assert_eq!(input.value(), value);
        assert_eq!(hash_string(name), hash);
        assert_eq!(VirtualInterfaceState::from(name), input);
        assert_eq!(VirtualInterfaceState::from(value), input);
    }

    #[test]
    fn loa_content_type() {
        let input = LoaContentType::ApplicationPdf;
        assert_eq!(input.name(), "application/pdf");
        assert_eq!(input.value(), 1);
        assert_eq!(LoaContentType::APPLICATION_PDF_HASH, -1_248_334_925);
        assert_eq!(LoaContentType::from("application/pdf"), input);
        assert_eq!(LoaContentType::from(1), input);
    }

    #[test]
    fn unknown_state_preserved() {
        let got = ConnectionState::from("test-only-unknown-state");
        assert!(matches!(got, ConnectionState::UnknownValue(_)), "{got:?}");
        assert_eq!(got.value(), hash_string("test-only-unknown-state"));
        assert_eq!(got.name(), "test-only-unknown-state");

        // Other enumerations share the overflow table.
        let other = VirtualInterfaceState::from(got.value());
        assert_eq!(other.name(), "test-only-unknown-state");
    }

    #[test_case(0; "zero")]
    #[test_case(9; "past the end")]
    #[test_case(-1; "negative")]
    fn unknown_ordinal(value: i32) {
        let got = ConnectionState::from(value);
        assert!(matches!(got, ConnectionState::UnknownValue(_)), "{got:?}");
        assert_eq!(got.value(), value);
    }

    #[test]
    fn empty_requests() -> Result {
        assert_eq!(serde_json::to_value(DescribeLocationsRequest::new())?, json!({}));
        assert_eq!(serde_json::to_value(DescribeVirtualGatewaysRequest::new())?, json!({}));
        assert_eq!(serde_json::to_value(DescribeConnectionsRequest::new())?, json!({}));
        assert_eq!(serde_json::to_value(CreatePublicVirtualInterfaceRequest::new())?, json!({}));
        Ok(())
    }

    #[test]
    fn allocate_connection_request() -> Result {
        let request = AllocateConnectionOnInterconnectRequest::new()
            .set_bandwidth("500Mbps")
            .set_connection_name("500M Connection to AWS")
            .set_owner_account("123456789012")
            .set_interconnect_id("dxcon-fgktov66")
            .set_vlan(101);
        let got = serde_json::to_value(&request)?;
        assert_eq!(
            got,
            json!({
                "bandwidth": "500Mbps",
                "connectionName": "500M Connection to AWS",
                "ownerAccount": "123456789012",
                "interconnectId": "dxcon-fgktov66",
                "vlan": 101,
            })
        );
        Ok(())
    }

    #[test]
    fn nested_request() -> Result {
        let request = CreatePublicVirtualInterfaceRequest::new()
            .set_connection_id("dxcon-fg5678gh")
            .set_new_public_virtual_interface(
                NewPublicVirtualInterface::new()
                    .set_virtual_interface_name("PublicVirtualInterface")
                    .set_vlan(2000)
                    .set_asn(65000)
                    .set_amazon_address("203.0.113.1/30")
                    .set_customer_address("203.0.113.2/30")
                    .set_route_filter_prefixes([
                        RouteFilterPrefix::new().set_cidr("203.0.113.0/30"),
                        RouteFilterPrefix::new().set_cidr("203.0.113.4/30"),
                    ]),
            );
        let got = serde_json::to_value(&request)?;
        assert_eq!(
            got,
            json!({
                "connectionId": "dxcon-fg5678gh",
                "newPublicVirtualInterface": {
                    "virtualInterfaceName": "PublicVirtualInterface",
                    "vlan": 2000,
                    "asn": 65000,
                    "amazonAddress": "203.0.113.1/30",
                    "customerAddress": "203.0.113.2/30",
                    "routeFilterPrefixes": [
                        {"cidr": "203.0.113.0/30"},
                        {"cidr": "203.0.113.4/30"},
                    ],
                },
            })
        );
        Ok(())
    }

    #[test]
    fn set_or_clear() {
        let request = DescribeVirtualInterfacesRequest::new()
            .set_connection_id("dxcon-fg5678gh")
            .set_virtual_interface_id("dxvif-123dfg56");
        let request = request.set_or_clear_connection_id(None::<String>);
        assert_eq!(request.connection_id, None);
        assert_eq!(request.virtual_interface_id.as_deref(), Some("dxvif-123dfg56"));
    }

    #[test]
    fn virtual_interface_response() -> Result {
        let input = json!({
            "ownerAccount": "123456789012",
            "virtualInterfaceId": "dxvif-123dfg56",
            "location": "EqSe2",
            "connectionId": "dxcon-fg5678gh",
            "virtualInterfaceType": "private",
            "virtualInterfaceName": "PrivateVirtualInterface",
            "vlan": 101,
            "asn": 65000,
            "virtualInterfaceState": "pending",
            "virtualGatewayId": "vgw-123er56",
            "routeFilterPrefixes": [],
            "someFutureField": {"nested": true},
        });
        let got = serde_json::from_value::<VirtualInterface>(input)?;
        let want = VirtualInterface::new()
            .set_owner_account("123456789012")
            .set_virtual_interface_id("dxvif-123dfg56")
            .set_location("EqSe2")
            .set_connection_id("dxcon-fg5678gh")
            .set_virtual_interface_type("private")
            .set_virtual_interface_name("PrivateVirtualInterface")
            .set_vlan(101)
            .set_asn(65000)
            .set_virtual_interface_state(VirtualInterfaceState::Pending)
            .set_virtual_gateway_id("vgw-123er56");
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn response_with_unknown_state() -> Result {
        let got = serde_json::from_value::<Connections>(json!({
            "connections": [
                {"connectionId": "dxcon-1", "connectionState": "available"},
                {"connectionId": "dxcon-2", "connectionState": "test-only-migrating"},
            ]
        }))?;
        let states = got
            .connections
            .iter()
            .map(|c| c.connection_state.map(|s| s.name().to_string()))
            .collect::<Vec<_>>();
        assert_eq!(
            states,
            vec![
                Some("available".to_string()),
                Some("test-only-migrating".to_string())
            ]
        );
        Ok(())
    }

    #[test]
    fn loa_content() -> Result {
        let got = serde_json::from_value::<DescribeConnectionLoaResponse>(json!({
            "loa": {
                "loaContent": "JVBERi0xLjQgdGVzdC1vbmx5",
                "loaContentType": "application/pdf",
            }
        }))?;
        let loa = got.loa.unwrap_or_default();
        assert_eq!(
            loa.loa_content,
            Some(bytes::Bytes::from_static(b"%PDF-1.4 test-only"))
        );
        assert_eq!(loa.loa_content_type, Some(LoaContentType::ApplicationPdf));

        let json = serde_json::to_value(&loa)?;
        assert_eq!(
            json,
            json!({"loaContent": "JVBERi0xLjQgdGVzdC1vbmx5", "loaContentType": "application/pdf"})
        );
        assert_eq!(serde_json::to_value(Loa::new())?, json!({}));
        Ok(())
    }
}
