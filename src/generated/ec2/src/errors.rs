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

use gax::enumerations::{Enumeration, UnknownValue, hash_string};
use std::borrow::Cow;

/// The error codes returned by the EC2 VPN gateway operations.
///
/// # Example
/// ```
/// # use ctrlplane_ec2::errors::Ec2Error;
/// # use ctrlplane_ec2::model::AttachVpnGatewayResponse;
/// fn handle(outcome: ctrlplane_ec2::Result<AttachVpnGatewayResponse>) {
///     match outcome {
///         Ok(r) => println!("attached: {r:?}"),
///         Err(e) if Ec2Error::from_error(&e) == Some(Ec2Error::DryRunOperation) => {
///             println!("the request would have succeeded");
///         }
///         Err(e) => println!("error: {e}"),
///     }
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Ec2Error {
    /// The request would have succeeded, but the `DryRun` parameter was set.
    DryRunOperation,
    /// The virtual private gateway does not exist.
    InvalidVpnGatewayIdNotFound,
    /// The VPC does not exist.
    InvalidVpcIdNotFound,
    /// An error code not known to this library.
    UnknownValue(UnknownValue),
}

impl Ec2Error {
    const DRY_RUN_OPERATION_HASH: i32 = hash_string("DryRunOperation");
    const INVALID_VPN_GATEWAY_ID_NOT_FOUND_HASH: i32 = hash_string("InvalidVpnGatewayID.NotFound");
    const INVALID_VPC_ID_NOT_FOUND_HASH: i32 = hash_string("InvalidVpcID.NotFound");

    /// Returns the typed error code of a service error.
    ///
    /// Returns `None` if `error` was not reported by the service, for
    /// example, I/O errors.
    pub fn from_error(error: &gax::error::Error) -> Option<Self> {
        error.service_error().map(|e| Self::from(e.code()))
    }

    /// Gets the enum value.
    pub fn value(&self) -> i32 {
        match self {
            Self::DryRunOperation => 1,
            Self::InvalidVpnGatewayIdNotFound => 2,
            Self::InvalidVpcIdNotFound => 3,
            Self::UnknownValue(u) => u.value(),
        }
    }

    /// Gets the error code as sent by the service.
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            Self::DryRunOperation => Cow::Borrowed("DryRunOperation"),
            Self::InvalidVpnGatewayIdNotFound => Cow::Borrowed("InvalidVpnGatewayID.NotFound"),
            Self::InvalidVpcIdNotFound => Cow::Borrowed("InvalidVpcID.NotFound"),
            Self::UnknownValue(u) => Cow::Owned(u.name()),
        }
    }
}

impl std::fmt::Display for Ec2Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

impl std::convert::From<i32> for Ec2Error {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::DryRunOperation,
            2 => Self::InvalidVpnGatewayIdNotFound,
            3 => Self::InvalidVpcIdNotFound,
            _ => Self::UnknownValue(UnknownValue::from_value(value)),
        }
    }
}

impl std::convert::From<&str> for Ec2Error {
    fn from(value: &str) -> Self {
        match hash_string(value) {
            Self::DRY_RUN_OPERATION_HASH if value == "DryRunOperation" => Self::DryRunOperation,
            Self::INVALID_VPN_GATEWAY_ID_NOT_FOUND_HASH if value == "InvalidVpnGatewayID.NotFound" => {
                Self::InvalidVpnGatewayIdNotFound
            }
            Self::INVALID_VPC_ID_NOT_FOUND_HASH if value == "InvalidVpcID.NotFound" => {
                Self::InvalidVpcIdNotFound
            }
            _ => Self::UnknownValue(UnknownValue::from_name(value)),
        }
    }
}

impl Enumeration for Ec2Error {
    fn value(&self) -> i32 {
        self.value()
    }
    fn name(&self) -> Cow<'static, str> {
        self.name()
    }
}
