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

/// The error payload reported by a service.
///
/// Services report failures with a short code naming the exception type, a
/// human-readable message, and the id of the request. The code is stable and
/// suitable for programmatic checks. Each client library includes an
/// `errors` module to convert the code into a typed enumeration.
///
/// # Example
/// ```
/// # use ctrlplane_gax::error::ServiceError;
/// let error = ServiceError::default()
///     .set_code("DirectConnectClientException")
///     .set_message("Connection dxcon-abc123 does not exist")
///     .set_request_id("1b2c3d4e");
/// assert_eq!(error.code(), "DirectConnectClientException");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ServiceError {
    code: String,
    message: String,
    request_id: Option<String>,
}

impl ServiceError {
    /// The error code, e.g. `InvalidVpcID.NotFound`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// A developer-facing error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The id assigned by the service to the failed request.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Sets the value of [code][ServiceError::code].
    pub fn set_code<T: Into<String>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value of [message][ServiceError::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value of [request_id][ServiceError::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][ServiceError::request_id].
    pub fn set_or_clear_request_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.request_id = v.map(Into::into);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let error = ServiceError::default();
        assert_eq!(error.code(), "");
        assert_eq!(error.message(), "");
        assert_eq!(error.request_id(), None);
    }

    #[test]
    fn setters() {
        let error = ServiceError::default()
            .set_code("InvalidVpcID.NotFound")
            .set_message("The vpc ID 'vpc-123' does not exist")
            .set_request_id("req-456");
        assert_eq!(error.code(), "InvalidVpcID.NotFound");
        assert_eq!(error.message(), "The vpc ID 'vpc-123' does not exist");
        assert_eq!(error.request_id(), Some("req-456"));

        let error = error.set_or_clear_request_id(None::<String>);
        assert_eq!(error.request_id(), None);
        let error = error.set_or_clear_request_id(Some("req-789"));
        assert_eq!(error.request_id(), Some("req-789"));
    }
}
