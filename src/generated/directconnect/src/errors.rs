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

/// The error codes returned by AWS Direct Connect.
///
/// # Example
/// ```
/// # use ctrlplane_directconnect::errors::DirectConnectError;
/// # use ctrlplane_directconnect::model::Connection;
/// fn should_retry(outcome: &ctrlplane_directconnect::Result<Connection>) -> bool {
///     match outcome {
///         Ok(_) => false,
///         Err(e) => DirectConnectError::from_error(e) == Some(DirectConnectError::DirectConnectServerException),
///     }
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DirectConnectError {
    /// The API was called with invalid parameters.
    DirectConnectClientException,
    /// A server-side error occurred during the API call.
    DirectConnectServerException,
    /// An error code not known to this library.
    UnknownValue(UnknownValue),
}

impl DirectConnectError {
    const DIRECT_CONNECT_CLIENT_EXCEPTION_HASH: i32 = hash_string("DirectConnectClientException");
    const DIRECT_CONNECT_SERVER_EXCEPTION_HASH: i32 = hash_string("DirectConnectServerException");

    /// Returns the typed error code of a service error.
    ///
    /// Returns `None` if `error` was not reported by the service.
    pub fn from_error(error: &gax::error::Error) -> Option<Self> {
        error.service_error().map(|e| Self::from(e.code()))
    }

    /// Gets the enum value.
    pub fn value(&self) -> i32 {
        match self {
            Self::DirectConnectClientException => 1,
            Self::DirectConnectServerException => 2,
            Self::UnknownValue(u) => u.value(),
        }
    }

    /// Gets the error code as sent by the service.
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            Self::DirectConnectClientException => Cow::Borrowed("DirectConnectClientException"),
            Self::DirectConnectServerException => Cow::Borrowed("DirectConnectServerException"),
            Self::UnknownValue(u) => Cow::Owned(u.name()),
        }
    }
}

impl std::fmt::Display for DirectConnectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

impl std::convert::From<i32> for DirectConnectError {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::DirectConnectClientException,
            2 => Self::DirectConnectServerException,
            _ => Self::UnknownValue(UnknownValue::from_value(value)),
        }
    }
}

impl std::convert::From<&str> for DirectConnectError {
    fn from(value: &str) -> Self {
        match hash_string(value) {
            Self::DIRECT_CONNECT_CLIENT_EXCEPTION_HASH
                if value == "DirectConnectClientException" =>
            {
                Self::DirectConnectClientException
            }
            Self::DIRECT_CONNECT_SERVER_EXCEPTION_HASH
                if value == "DirectConnectServerException" =>
            {
                Self::DirectConnectServerException
            }
            _ => Self::UnknownValue(UnknownValue::from_name(value)),
        }
    }
}

impl Enumeration for DirectConnectError {
    fn value(&self) -> i32 {
        self.value()
    }
    fn name(&self) -> Cow<'static, str> {
        self.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::{Error, ServiceError};
    use test_case::test_case;

    #[test_case("DirectConnectClientException", DirectConnectError::DirectConnectClientException)]
    #[test_case("DirectConnectServerException", DirectConnectError::DirectConnectServerException)]
    fn known(code: &str, want: DirectConnectError) {
        let error = Error::service(ServiceError::default().set_code(code));
        assert_eq!(DirectConnectError::from_error(&error), Some(want));
        assert_eq!(want.name(), code);
        assert_eq!(want.to_string(), code);
        assert_eq!(DirectConnectError::from(want.value()), want);
    }

    #[test]
    fn unknown() {
        let error = Error::service(ServiceError::default().set_code("ThrottlingException"));
        let got = DirectConnectError::from_error(&error);
        assert!(matches!(got, Some(DirectConnectError::UnknownValue(_))), "{got:?}");
        assert_eq!(got.map(|e| e.name().to_string()).as_deref(), Some("ThrottlingException"));
    }

    #[test]
    fn not_a_service_error() {
        let error = Error::io("connection reset");
        assert_eq!(DirectConnectError::from_error(&error), None);
    }
}
