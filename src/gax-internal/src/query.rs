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

//! The query protocol.
//!
//! Requests are `POST /` with a form-encoded body:
//! `Action={operation}&{name}={value}&...&Version={api version}`.
//! Responses and errors are XML documents.

use bytes::Bytes;
use gax::Result;
use gax::error::{Error, ServiceError};
use http::HeaderMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

// Everything except the RFC 3986 unreserved characters is escaped.
const ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Builds the body of a query protocol request.
///
/// # Example
/// ```
/// # use ctrlplane_gax_internal::query::QueryPayload;
/// let vpc_id = Some("vpc-1a2b3c4d".to_string());
/// let dry_run: Option<bool> = None;
/// let body = QueryPayload::new("AttachVpnGateway")
///     .add("DryRun", &dry_run)
///     .add("VpcId", &vpc_id)
///     .finish("2015-10-01");
/// assert_eq!(body, "Action=AttachVpnGateway&VpcId=vpc-1a2b3c4d&Version=2015-10-01");
/// ```
#[derive(Clone, Debug)]
pub struct QueryPayload {
    buffer: String,
}

impl QueryPayload {
    pub fn new(action: &str) -> Self {
        Self {
            buffer: format!("Action={action}&"),
        }
    }

    /// Appends `name={value}&` if `value` is set.
    pub fn add<T: QueryValue>(mut self, name: &str, value: &Option<T>) -> Self {
        if let Some(v) = value {
            self.buffer.push_str(name);
            self.buffer.push('=');
            self.buffer.push_str(&v.to_query_value());
            self.buffer.push('&');
        }
        self
    }

    /// Completes the payload with the API version.
    pub fn finish(mut self, version: &str) -> String {
        self.buffer.push_str("Version=");
        self.buffer.push_str(version);
        self.buffer
    }
}

/// Formats a request field in the query protocol.
pub trait QueryValue {
    fn to_query_value(&self) -> String;
}

impl QueryValue for String {
    fn to_query_value(&self) -> String {
        self.as_str().to_query_value()
    }
}

impl QueryValue for &str {
    fn to_query_value(&self) -> String {
        utf8_percent_encode(self, ENCODE_SET).to_string()
    }
}

/// Booleans are sent as `1` and `0`.
impl QueryValue for bool {
    fn to_query_value(&self) -> String {
        let value = if *self { "1" } else { "0" };
        value.to_string()
    }
}

impl QueryValue for i32 {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for i64 {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

/// Parses a successful XML response.
///
/// The name of the root element is ignored. An empty body yields the
/// default value.
pub fn from_xml_body<O: serde::de::DeserializeOwned + Default>(body: &Bytes) -> Result<O> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(O::default());
    }
    let text = std::str::from_utf8(body).map_err(Error::deser)?;
    quick_xml::de::from_str::<O>(text).map_err(Error::deser)
}

// Matches both error formats:
//   <Response><Errors><Error><Code/><Message/></Error></Errors><RequestID/></Response>
//   <ErrorResponse><Error><Type/><Code/><Message/></Error><RequestId/></ErrorResponse>
#[derive(Debug, Default, serde::Deserialize)]
struct XmlErrorBody {
    #[serde(rename = "Errors")]
    errors: Option<XmlErrors>,
    #[serde(rename = "Error")]
    error: Option<XmlError>,
    #[serde(rename = "RequestID", alias = "RequestId")]
    request_id: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
struct XmlErrors {
    #[serde(rename = "Error", default)]
    error: Vec<XmlError>,
}

#[derive(Debug, Default, serde::Deserialize)]
struct XmlError {
    #[serde(rename = "Code")]
    code: Option<String>,
    #[serde(rename = "Message")]
    message: Option<String>,
}

/// Converts an XML error response into an [Error].
///
/// Only the first error in the response is reported. Responses without an
/// error code become HTTP errors with the raw payload.
pub fn to_service_error(status_code: u16, headers: HeaderMap, body: Bytes) -> Error {
    let parsed = std::str::from_utf8(&body)
        .ok()
        .and_then(|text| quick_xml::de::from_str::<XmlErrorBody>(text).ok())
        .unwrap_or_default();
    let XmlErrorBody {
        errors,
        error,
        request_id,
    } = parsed;
    let first = errors
        .and_then(|e| e.error.into_iter().next())
        .or(error)
        .filter(|e| e.code.as_deref().is_some_and(|c| !c.is_empty()));
    let Some(XmlError {
        code: Some(code),
        message,
    }) = first
    else {
        return Error::http(status_code, headers, body);
    };
    let error = ServiceError::default()
        .set_code(code)
        .set_message(message.unwrap_or_default())
        .set_or_clear_request_id(request_id);
    Error::service_with_http_metadata(error, Some(status_code), Some(headers))
}
