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

use crate::options::InstrumentationClientInfo;
use tracing::{Span, field};

// Semantic Convention Keys
// See https://opentelemetry.io/docs/specs/semconv/http/http-spans/

/// Span Kind for OpenTelemetry interop.
///
/// Always "Client" for a span representing an outbound HTTP request.
pub(crate) const KEY_OTEL_KIND: &str = "otel.kind";
pub(crate) const KEY_RPC_SYSTEM: &str = "rpc.system";
/// The operation name, e.g. `CreateConnection`.
pub(crate) const KEY_RPC_METHOD: &str = "rpc.method";
pub(crate) const KEY_HTTP_REQUEST_METHOD: &str = "http.request.method";
pub(crate) const KEY_URL_FULL: &str = "url.full";
pub(crate) const KEY_HTTP_RESPONSE_STATUS_CODE: &str = "http.response.status_code";
/// A low-cardinality classification of the error.
///
/// For HTTP status codes >= 400, this is the status code as a string.
/// For errors without a response, use a short identifier like CONNECTION_ERROR.
pub(crate) const KEY_ERROR_TYPE: &str = "error.type";

// Client library attributes
/// The short service name, e.g., directconnect, ec2.
pub(crate) const KEY_CLIENT_SERVICE: &str = "ctrlplane.client.service";
pub(crate) const KEY_CLIENT_VERSION: &str = "ctrlplane.client.version";
pub(crate) const KEY_CLIENT_ARTIFACT: &str = "ctrlplane.client.artifact";

pub(crate) const CONNECTION_ERROR: &str = "CONNECTION_ERROR";

/// Creates a new tracing span for a request.
///
/// Populates the span with the attributes available before the request is
/// sent. The response attributes are recorded via [record_status] and
/// [record_error].
pub(crate) fn create_request_span(
    request: &http::Request<bytes::Bytes>,
    info: &InstrumentationClientInfo,
    operation: &str,
) -> Span {
    tracing::info_span!(
        "http_request",
        { KEY_OTEL_KIND } = "Client",
        { KEY_RPC_SYSTEM } = "http",
        { KEY_RPC_METHOD } = operation,
        { KEY_HTTP_REQUEST_METHOD } = request.method().as_str(),
        { KEY_URL_FULL } = field::display(request.uri()),
        { KEY_CLIENT_SERVICE } = info.service_name,
        { KEY_CLIENT_VERSION } = info.client_version,
        { KEY_CLIENT_ARTIFACT } = info.client_artifact,
        // Fields to be recorded later
        { KEY_HTTP_RESPONSE_STATUS_CODE } = field::Empty,
        { KEY_ERROR_TYPE } = field::Empty,
    )
}

/// Records the status code of a response.
pub(crate) fn record_status(span: &Span, status: http::StatusCode) {
    span.record(KEY_HTTP_RESPONSE_STATUS_CODE, status.as_u16() as i64);
    if !status.is_success() {
        span.record(KEY_ERROR_TYPE, field::display(status.as_u16()));
    }
}

/// Records a request that did not produce a response.
pub(crate) fn record_error(span: &Span, error: &gax::error::Error) {
    let error_type = if error.is_authentication() {
        "AUTHENTICATION_ERROR"
    } else {
        CONNECTION_ERROR
    };
    span.record(KEY_ERROR_TYPE, error_type);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
        }
    }

    const INFO: InstrumentationClientInfo = InstrumentationClientInfo {
        service_name: "directconnect",
        client_version: "1.2.3",
        client_artifact: "ctrlplane-directconnect",
    };

    fn test_request() -> http::Request<bytes::Bytes> {
        http::Request::builder()
            .method(http::Method::POST)
            .uri("http://localhost:8080/")
            .body(bytes::Bytes::from_static(b"{}"))
            .unwrap()
    }

    fn with_capture<F: FnOnce()>(f: F) -> String {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        capture.contents()
    }

    #[test]
    fn span_attributes() {
        let output = with_capture(|| {
            let span = create_request_span(&test_request(), &INFO, "DescribeLocations");
            record_status(&span, http::StatusCode::OK);
            let _enter = span.enter();
            tracing::info!("inside");
        });
        for want in [
            "http_request",
            "rpc.method=\"DescribeLocations\"",
            "http.request.method=\"POST\"",
            "url.full=http://localhost:8080/",
            "ctrlplane.client.service=\"directconnect\"",
            "ctrlplane.client.version=\"1.2.3\"",
            "http.response.status_code=200",
        ] {
            assert!(output.contains(want), "missing {want} in {output}");
        }
        assert!(!output.contains("error.type"), "{output}");
    }

    #[test]
    fn span_error_status() {
        let output = with_capture(|| {
            let span = create_request_span(&test_request(), &INFO, "CreateConnection");
            record_status(&span, http::StatusCode::SERVICE_UNAVAILABLE);
            let _enter = span.enter();
            tracing::info!("inside");
        });
        assert!(output.contains("http.response.status_code=503"), "{output}");
        assert!(output.contains("error.type=503"), "{output}");
    }

    #[test]
    fn span_transport_error() {
        let output = with_capture(|| {
            let span = create_request_span(&test_request(), &INFO, "CreateConnection");
            record_error(&span, &gax::error::Error::io("connection refused"));
            let _enter = span.enter();
            tracing::info!("inside");
        });
        assert!(output.contains("error.type=\"CONNECTION_ERROR\""), "{output}");
    }
}
