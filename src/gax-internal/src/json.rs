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

//! The JSON protocol.
//!
//! Requests are `POST /` with the operation named in the `X-Amz-Target`
//! header, and the request fields in a JSON object. Responses are JSON
//! objects. Errors are JSON objects with a `__type` field.

use bytes::Bytes;
use gax::Result;
use gax::error::{Error, ServiceError};
use http::HeaderMap;

pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";
pub const TARGET_HEADER: &str = "x-amz-target";
pub(crate) const REQUEST_ID_HEADER: &str = "x-amzn-requestid";
pub(crate) const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

/// Formats the `X-Amz-Target` header value.
pub fn target(prefix: &str, operation: &str) -> String {
    format!("{prefix}.{operation}")
}

/// Serializes a request.
///
/// Unset fields are skipped by the generated types, a request without any
/// fields serializes to `{}`.
pub fn to_body<I: serde::ser::Serialize>(request: &I) -> Result<Bytes> {
    let body = serde_json::to_vec(request).map_err(Error::ser)?;
    Ok(Bytes::from(body))
}

/// Parses a successful response.
///
/// Some operations return an empty body, treat it as an empty object.
pub fn from_body<O: serde::de::DeserializeOwned + Default>(body: &Bytes) -> Result<O> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(O::default());
    }
    serde_json::from_slice::<O>(body).map_err(Error::deser)
}

#[derive(Debug, Default, serde::Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type")]
    kind: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

/// Converts an error response into an [Error].
///
/// Returns a service error when the response identifies the error type,
/// either in the payload or in the `X-Amzn-ErrorType` header. Otherwise
/// returns an HTTP error with the raw payload.
pub fn to_service_error(status_code: u16, headers: HeaderMap, body: Bytes) -> Error {
    let parsed = serde_json::from_slice::<ErrorBody>(&body).unwrap_or_default();
    let code = parsed
        .kind
        .as_deref()
        .or_else(|| header_str(&headers, ERROR_TYPE_HEADER))
        .map(error_code);
    let Some(code) = code.filter(|c| !c.is_empty()) else {
        return Error::http(status_code, headers, body);
    };
    let error = ServiceError::default()
        .set_code(code)
        .set_message(parsed.message.unwrap_or_default())
        .set_or_clear_request_id(header_str(&headers, REQUEST_ID_HEADER));
    Error::service_with_http_metadata(error, Some(status_code), Some(headers))
}

// The error type may include a namespace prefix, and some services append
// extra information after a colon.
fn error_code(kind: &str) -> &str {
    let kind = kind.rsplit_once('#').map(|(_, k)| k).unwrap_or(kind);
    kind.split_once(':').map(|(k, _)| k).unwrap_or(kind)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use test_case::test_case;

    #[derive(Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Thing {
        #[serde(skip_serializing_if = "Option::is_none")]
        connection_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        vlan: Option<i32>,
    }

    #[test]
    fn target_value() {
        assert_eq!(
            target("OvertureService", "DescribeLocations"),
            "OvertureService.DescribeLocations"
        );
    }

    #[test]
    fn request_body() -> anyhow::Result<()> {
        let got = to_body(&Thing::default())?;
        assert_eq!(got.as_ref(), b"{}");

        let got = to_body(&Thing {
            connection_id: Some("dxcon-abc".into()),
            vlan: Some(101),
        })?;
        let got = serde_json::from_slice::<serde_json::Value>(&got)?;
        assert_eq!(
            got,
            serde_json::json!({"connectionId": "dxcon-abc", "vlan": 101})
        );
        Ok(())
    }

    #[test_case(""; "empty")]
    #[test_case("  \n"; "whitespace")]
    #[test_case("{}"; "empty object")]
    fn response_empty(body: &'static str) -> anyhow::Result<()> {
        let got = from_body::<Thing>(&Bytes::from_static(body.as_bytes()))?;
        assert_eq!(got, Thing::default());
        Ok(())
    }

    #[test]
    fn response_body() -> anyhow::Result<()> {
        let body = Bytes::from_static(br#"{"connectionId": "dxcon-abc", "unknownField": 42}"#);
        let got = from_body::<Thing>(&body)?;
        assert_eq!(got.connection_id.as_deref(), Some("dxcon-abc"));
        Ok(())
    }

    #[test]
    fn response_bad_body() {
        let got = from_body::<Thing>(&Bytes::from_static(b"not json"));
        assert!(matches!(&got, Err(e) if e.is_deserialization()), "{got:?}");
    }

    #[test_case(r#"{"__type": "DirectConnectClientException", "message": "bad vlan"}"#; "plain")]
    #[test_case(r#"{"__type": "com.amazonaws.directconnect#DirectConnectClientException", "message": "bad vlan"}"#; "namespace")]
    #[test_case(r#"{"__type": "DirectConnectClientException", "Message": "bad vlan"}"#; "capitalized message")]
    fn service_error(body: &'static str) {
        let mut headers = HeaderMap::new();
        headers.insert("x-amzn-requestid", HeaderValue::from_static("req-123"));
        let error = to_service_error(400, headers.clone(), Bytes::from_static(body.as_bytes()));
        let details = error.service_error();
        assert_eq!(details.map(ServiceError::code), Some("DirectConnectClientException"));
        assert_eq!(details.map(ServiceError::message), Some("bad vlan"));
        assert_eq!(details.and_then(ServiceError::request_id), Some("req-123"));
        assert_eq!(error.http_status_code(), Some(400));
        assert_eq!(error.http_headers(), Some(&headers));
    }

    #[test]
    fn service_error_from_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-amzn-errortype",
            HeaderValue::from_static("DirectConnectServerException:http://internal.example.com/"),
        );
        let error = to_service_error(500, headers, Bytes::from_static(b""));
        let details = error.service_error();
        assert_eq!(details.map(ServiceError::code), Some("DirectConnectServerException"));
        assert_eq!(details.map(ServiceError::message), Some(""));
        assert_eq!(details.and_then(ServiceError::request_id), None);
    }

    #[test_case(""; "empty")]
    #[test_case("<html>bad gateway</html>"; "not json")]
    #[test_case(r#"{"message": "no type"}"#; "missing type")]
    #[test_case(r#"{"__type": ""}"#; "empty type")]
    fn http_error(body: &'static str) {
        let payload = Bytes::from_static(body.as_bytes());
        let error = to_service_error(502, HeaderMap::new(), payload.clone());
        assert!(error.service_error().is_none(), "{error:?}");
        assert!(error.is_transport(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(502));
        assert_eq!(error.http_payload(), Some(&payload));
    }
}
