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

/// The request message for [Ec2::attach_vpn_gateway][crate::client::Ec2::attach_vpn_gateway].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct AttachVpnGatewayRequest {
    /// Checks whether you have the required permissions for the action,
    /// without actually making the request.
    pub dry_run: Option<bool>,

    /// The ID of the virtual private gateway.
    pub vpn_gateway_id: Option<String>,

    /// The ID of the VPC.
    pub vpc_id: Option<String>,
}

impl AttachVpnGatewayRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [dry_run][crate::model::AttachVpnGatewayRequest::dry_run].
    pub fn set_dry_run<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.dry_run = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [dry_run][crate::model::AttachVpnGatewayRequest::dry_run].
    pub fn set_or_clear_dry_run<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.dry_run = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vpn_gateway_id][crate::model::AttachVpnGatewayRequest::vpn_gateway_id].
    ///
    /// # Example
    /// ```
    /// # use ctrlplane_ec2::model::AttachVpnGatewayRequest;
    /// let x = AttachVpnGatewayRequest::new().set_vpn_gateway_id("vgw-8db04f81");
    /// ```
    pub fn set_vpn_gateway_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.vpn_gateway_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vpn_gateway_id][crate::model::AttachVpnGatewayRequest::vpn_gateway_id].
    pub fn set_or_clear_vpn_gateway_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vpn_gateway_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vpc_id][crate::model::AttachVpnGatewayRequest::vpc_id].
    pub fn set_vpc_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.vpc_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vpc_id][crate::model::AttachVpnGatewayRequest::vpc_id].
    pub fn set_or_clear_vpc_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vpc_id = v.map(|x| x.into());
        self
    }
}

/// The response message for [Ec2::attach_vpn_gateway][crate::client::Ec2::attach_vpn_gateway].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AttachVpnGatewayResponse {
    /// The ID of the request.
    pub request_id: Option<String>,

    /// Information about the attachment.
    pub attachment: Option<crate::model::VpcAttachment>,
}

impl AttachVpnGatewayResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::AttachVpnGatewayResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [attachment][crate::model::AttachVpnGatewayResponse::attachment].
    ///
    /// # Example
    /// ```
    /// # use ctrlplane_ec2::model::{AttachVpnGatewayResponse, AttachmentStatus, VpcAttachment};
    /// let x = AttachVpnGatewayResponse::new().set_attachment(
    ///     VpcAttachment::new()
    ///         .set_vpc_id("vpc-1a2b3c4d")
    ///         .set_state(AttachmentStatus::Attaching),
    /// );
    /// ```
    pub fn set_attachment<T: std::convert::Into<crate::model::VpcAttachment>>(
        mut self,
        v: T,
    ) -> Self {
        self.attachment = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [attachment][crate::model::AttachVpnGatewayResponse::attachment].
    pub fn set_or_clear_attachment<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::VpcAttachment>,
    {
        self.attachment = v.map(|x| x.into());
        self
    }
}

/// Describes an attachment between a virtual private gateway and a VPC.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct VpcAttachment {
    /// The ID of the VPC.
    pub vpc_id: Option<String>,

    /// The current state of the attachment.
    pub state: Option<crate::model::AttachmentStatus>,
}

impl VpcAttachment {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [vpc_id][crate::model::VpcAttachment::vpc_id].
    pub fn set_vpc_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.vpc_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [state][crate::model::VpcAttachment::state].
    pub fn set_state<T: std::convert::Into<crate::model::AttachmentStatus>>(mut self, v: T) -> Self {
        self.state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [state][crate::model::VpcAttachment::state].
    pub fn set_or_clear_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::AttachmentStatus>,
    {
        self.state = v.map(|x| x.into());
        self
    }
}

/// The request message for [Ec2::detach_vpn_gateway][crate::client::Ec2::detach_vpn_gateway].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DetachVpnGatewayRequest {
    /// Checks whether you have the required permissions for the action,
    /// without actually making the request.
    pub dry_run: Option<bool>,

    /// The ID of the virtual private gateway.
    pub vpn_gateway_id: Option<String>,

    /// The ID of the VPC.
    pub vpc_id: Option<String>,
}

impl DetachVpnGatewayRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [dry_run][crate::model::DetachVpnGatewayRequest::dry_run].
    pub fn set_dry_run<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.dry_run = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [dry_run][crate::model::DetachVpnGatewayRequest::dry_run].
    pub fn set_or_clear_dry_run<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.dry_run = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vpn_gateway_id][crate::model::DetachVpnGatewayRequest::vpn_gateway_id].
    pub fn set_vpn_gateway_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.vpn_gateway_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vpn_gateway_id][crate::model::DetachVpnGatewayRequest::vpn_gateway_id].
    pub fn set_or_clear_vpn_gateway_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vpn_gateway_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vpc_id][crate::model::DetachVpnGatewayRequest::vpc_id].
    pub fn set_vpc_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.vpc_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vpc_id][crate::model::DetachVpnGatewayRequest::vpc_id].
    pub fn set_or_clear_vpc_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.vpc_id = v.map(|x| x.into());
        self
    }
}

/// The response message for [Ec2::detach_vpn_gateway][crate::client::Ec2::detach_vpn_gateway].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DetachVpnGatewayResponse {
    /// The ID of the request.
    pub request_id: Option<String>,

    /// Is `true` if the request succeeds, and an error otherwise.
    pub r#return: Option<bool>,
}

impl DetachVpnGatewayResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::DetachVpnGatewayResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets the value of [r#return][crate::model::DetachVpnGatewayResponse::return].
    pub fn set_return<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.r#return = std::option::Option::Some(v.into());
        self
    }
}

/// The states of an attachment between a virtual private gateway and a VPC.
///
/// # Working with unknown values
///
/// This enum is defined as `#[non_exhaustive]` because the service may add
/// new values after this library is released. Values received from the
/// service that are unknown to this library are preserved in the
/// [UnknownValue][AttachmentStatus::UnknownValue] variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AttachmentStatus {
    Attaching,
    Attached,
    Detaching,
    Detached,
    /// If set, the enum was initialized with an unknown value.
    UnknownValue(UnknownValue),
}

impl AttachmentStatus {
    const ATTACHING_HASH: i32 = hash_string("attaching");
    const ATTACHED_HASH: i32 = hash_string("attached");
    const DETACHING_HASH: i32 = hash_string("detaching");
    const DETACHED_HASH: i32 = hash_string("detached");

    /// Gets the enum value.
    pub fn value(&self) -> i32 {
        match self {
            Self::Attaching => 1,
            Self::Attached => 2,
            Self::Detaching => 3,
            Self::Detached => 4,
            Self::UnknownValue(u) => u.value(),
        }
    }

    /// Gets the enum value as a string.
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            Self::Attaching => Cow::Borrowed("attaching"),
            Self::Attached => Cow::Borrowed("attached"),
            Self::Detaching => Cow::Borrowed("detaching"),
            Self::Detached => Cow::Borrowed("detached"),
            Self::UnknownValue(u) => Cow::Owned(u.name()),
        }
    }
}

impl std::fmt::Display for AttachmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

impl std::convert::From<i32> for AttachmentStatus {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Attaching,
            2 => Self::Attached,
            3 => Self::Detaching,
            4 => Self::Detached,
            _ => Self::UnknownValue(UnknownValue::from_value(value)),
        }
    }
}

impl std::convert::From<&str> for AttachmentStatus {
    fn from(value: &str) -> Self {
        match hash_string(value) {
            Self::ATTACHING_HASH if value == "attaching" => Self::Attaching,
            Self::ATTACHED_HASH if value == "attached" => Self::Attached,
            Self::DETACHING_HASH if value == "detaching" => Self::Detaching,
            Self::DETACHED_HASH if value == "detached" => Self::Detached,
            _ => Self::UnknownValue(UnknownValue::from_name(value)),
        }
    }
}

impl Enumeration for AttachmentStatus {
    fn value(&self) -> i32 {
        self.value()
    }
    fn name(&self) -> Cow<'static, str> {
        self.name()
    }
}

impl serde::ser::Serialize for AttachmentStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for AttachmentStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // XML element values are always text.
        deserializer.deserialize_str(
            gax::enumerations::internal::EnumVisitor::<AttachmentStatus>::new(
                ".ec2.AttachmentStatus",
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(AttachmentStatus::Attaching, "attaching", 1, -478_984_323)]
    #[test_case(AttachmentStatus::Attached, "attached", 2, 538_738_084)]
    #[test_case(AttachmentStatus::Detaching, "detaching", 3, -1_978_731_665)]
    #[test_case(AttachmentStatus::Detached, "detached", 4, 1_044_548_466)]
    fn attachment_status(input: AttachmentStatus, name: &str, value: i32, hash: i32) {
        assert_eq!(input.name(), name);
        assert_eq!(input.value(), value);
        assert_eq!(hash_string(name), hash);
        assert_eq!(AttachmentStatus::from(name), input);
        assert_eq!(AttachmentStatus::from(value), input);
        assert_eq!(input.to_string(), name);
    }

    #[test]
    fn attachment_status_unknown() {
        let got = AttachmentStatus::from("test-only-busy");
        assert!(matches!(got, AttachmentStatus::UnknownValue(_)), "{got:?}");
        assert_eq!(got.name(), "test-only-busy");
        assert_eq!(AttachmentStatus::from(got.value()).name(), "test-only-busy");
    }

    #[test]
    fn request_setters() {
        let request = AttachVpnGatewayRequest::new()
            .set_dry_run(true)
            .set_vpn_gateway_id("vgw-8db04f81")
            .set_vpc_id("vpc-1a2b3c4d");
        assert_eq!(request.dry_run, Some(true));
        assert_eq!(request.vpn_gateway_id.as_deref(), Some("vgw-8db04f81"));
        assert_eq!(request.vpc_id.as_deref(), Some("vpc-1a2b3c4d"));

        let request = request
            .set_or_clear_dry_run(None::<bool>)
            .set_or_clear_vpc_id(None::<String>);
        assert_eq!(request.dry_run, None);
        assert_eq!(request.vpc_id, None);
        assert_eq!(request.vpn_gateway_id.as_deref(), Some("vgw-8db04f81"));
    }

    #[test]
    fn attach_response_xml() -> anyhow::Result<()> {
        let body = bytes::Bytes::from_static(
            br#"<?xml version="1.0" encoding="UTF-8"?>
<AttachVpnGatewayResponse xmlns="http://ec2.amazonaws.com/doc/2015-10-01/">
  <requestId>7a62c49f-347e-4fc4-9331-6e8eEXAMPLE</requestId>
  <attachment>
    <vpcId>vpc-1a2b3c4d</vpcId>
    <state>attaching</state>
  </attachment>
</AttachVpnGatewayResponse>"#,
        );
        let got = gaxi::query::from_xml_body::<AttachVpnGatewayResponse>(&body)?;
        let want = AttachVpnGatewayResponse::new()
            .set_request_id("7a62c49f-347e-4fc4-9331-6e8eEXAMPLE")
            .set_attachment(
                VpcAttachment::new()
                    .set_vpc_id("vpc-1a2b3c4d")
                    .set_state(AttachmentStatus::Attaching),
            );
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn attach_response_unknown_state() -> anyhow::Result<()> {
        let body = bytes::Bytes::from_static(
            b"<AttachVpnGatewayResponse><attachment><state>test-only-paused</state></attachment></AttachVpnGatewayResponse>",
        );
        let got = gaxi::query::from_xml_body::<AttachVpnGatewayResponse>(&body)?;
        let state = got.attachment.and_then(|a| a.state);
        assert_eq!(state.map(|s| s.name().to_string()).as_deref(), Some("test-only-paused"));
        Ok(())
    }

    #[test]
    fn detach_response_xml() -> anyhow::Result<()> {
        let body = bytes::Bytes::from_static(
            br#"<DetachVpnGatewayResponse xmlns="http://ec2.amazonaws.com/doc/2015-10-01/">
  <requestId>7a62c49f-347e-4fc4-9331-6e8eEXAMPLE</requestId>
  <return>true</return>
</DetachVpnGatewayResponse>"#,
        );
        let got = gaxi::query::from_xml_body::<DetachVpnGatewayResponse>(&body)?;
        let want = DetachVpnGatewayResponse::new()
            .set_request_id("7a62c49f-347e-4fc4-9331-6e8eEXAMPLE")
            .set_return(true);
        assert_eq!(got, want);
        Ok(())
    }
}
