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

use super::{ServiceError, SigningError};
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. For example, the
/// service may return an error, the transport may be unable to create the
/// necessary connection to make a request, the signer may fail to produce
/// the authentication headers, or the library may be unable to format the
/// request.
///
/// Most applications will just return the error or log it, without any further
/// action. However, some applications may need to interrogate the error
/// details. This type offers a series of predicates to determine the error
/// kind. The type also offers accessors to query the most common error details.
/// Applications can query the error [source][std::error::Error::source] for
/// deeper information.
///
/// # Example
/// ```
/// use ctrlplane_gax::error::Error;
/// match example_function() {
///     Err(e) if e.service_error().is_some() => {
///         println!("service error {e}, debug using {:?}", e.service_error().unwrap());
///     },
///     Err(e) if e.is_transport() => { println!("could not reach the service {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # use ctrlplane_gax::error::ServiceError;
///     # Err(Error::service(ServiceError::default().set_code("NotFound").set_message("NOT FOUND")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use ctrlplane_gax::error::{Error, ServiceError};
    /// let details = ServiceError::default().set_code("ThrottlingException").set_message("slow down");
    /// let error = Error::service(details.clone());
    /// assert_eq!(error.service_error(), Some(&details));
    /// ```
    pub fn service(error: ServiceError) -> Self {
        Self::service_with_http_metadata(error, None, None)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates a service error including the HTTP status code and headers of
    /// the response that carried it.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn service_with_http_metadata(
        error: ServiceError,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    ) -> Self {
        let details = ServiceDetails {
            status_code,
            headers,
            error,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// The error details reported by the service, if any.
    ///
    /// Services report errors with a code (e.g. `DirectConnectClientException`),
    /// a human-readable message, and usually a request id. The request id is
    /// the most useful piece of information when contacting support.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.error),
            _ => None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use ctrlplane_gax::error::Error;
    /// let error = Error::ser("simulated problem");
    /// assert!(error.is_serialization());
    /// assert!(error.source().is_some());
    /// ```
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. This error is never transient: the serialization is
    /// deterministic, and will fail on future attempts with the same input
    /// data.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use ctrlplane_gax::error::Error;
    /// let error = Error::deser("simulated problem");
    /// assert!(error.is_deserialization());
    /// assert!(error.source().is_some());
    /// ```
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// The request reached the service and the service returned a successful
    /// status code, but the body was malformed. Note that any side effects of
    /// the request in the service have already happened.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn authentication(source: SigningError) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// The signer could not produce the authentication headers.
    ///
    /// The request was never sent. Use the [source][std::error::Error::source]
    /// to find out if the problem may go away on a future attempt.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// The request could not be mapped to a wire action.
    ///
    /// Typically the configured endpoint does not form a valid URL.
    pub fn is_binding(&self) -> bool {
        matches!(&self.kind, ErrorKind::Binding)
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn executor<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Executor,
            source: Some(source.into()),
        }
    }

    /// A deferred or callback request was dropped by the executor before it
    /// produced an outcome.
    pub fn is_executor(&self) -> bool {
        matches!(&self.kind, ErrorKind::Executor)
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        let kind = ErrorKind::Transport(Box::new(details));
        Self { kind, source: None }
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn is_io(&self) -> bool {
        matches!(
        &self.kind,
        ErrorKind::Transport(d) if matches!(**d, TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        }))
    }

    /// Not part of the public API, subject to change without notice.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn transport<T: Into<BoxError>>(headers: HeaderMap, source: T) -> Self {
        let details = TransportDetails {
            headers: Some(headers),
            status_code: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// The request failed in the transport layer.
    ///
    /// Either the request could not be sent, or the response had an error
    /// status code and no service error payload.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport { .. })
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// # Example
    /// ```
    /// use ctrlplane_gax::error::Error;
    /// let e = search_for_thing("the thing");
    /// if let Some(code) = e.http_status_code() {
    ///     if code == 404 {
    ///         println!("cannot find the thing, more details in {e}");
    ///     }
    /// }
    ///
    /// fn search_for_thing(name: &str) -> Error {
    ///     # Error::http(400, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND"))
    /// }
    /// ```
    ///
    /// Sometimes the error is generated before it reaches the service. For
    /// example, a proxy or a load balancer may generate errors without the
    /// detailed payload. In such cases the client library returns the status
    /// code, headers, and http payload.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().status_code,
            ErrorKind::Service(d) => d.as_ref().status_code,
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&http::HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().headers.as_ref(),
            ErrorKind::Service(d) => d.as_ref().headers.as_ref(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    ///
    /// Only set for HTTP errors without a parseable service error payload.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot find a matching binding to send the request {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers {e}")
            }
            (ErrorKind::Executor, Some(e)) => {
                write!(f, "the executor dropped the request before completion {e}")
            }
            (ErrorKind::Transport(details), _) => details.display(self.source(), f),
            (ErrorKind::Service(d), _) => {
                write!(
                    f,
                    "the service reports an error with code {} described as: {}",
                    d.error.code(),
                    d.error.message()
                )
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    Deserialization,
    Authentication,
    Executor,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
}

#[derive(Debug)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, &self) {
            (
                _,
                TransportDetails {
                    status_code: Some(code),
                    payload: Some(p),
                    ..
                },
            ) => {
                if let Ok(message) = std::str::from_utf8(p.as_ref()) {
                    write!(f, "the HTTP transport reports a [{code}] error: {message}")
                } else {
                    write!(f, "the HTTP transport reports a [{code}] error: {p:?}")
                }
            }
            (Some(source), _) => {
                write!(f, "the transport reports an error: {source}")
            }
            (None, _) => unreachable!("no Error constructor allows this"),
        }
    }
}

#[derive(Debug)]
struct ServiceDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    error: ServiceError,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[derive(Debug, thiserror::Error)]
    #[error("test-only {0}")]
    struct TestError(&'static str);

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            "content-type",
            http::HeaderValue::from_static("application/x-amz-json-1.1"),
        );
        headers
    }

    #[test]
    fn service() {
        let details = ServiceError::default()
            .set_code("DirectConnectClientException")
            .set_message("the connection does not exist");
        let error = Error::service(details.clone());
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.service_error(), Some(&details));
        assert!(error.to_string().contains("the connection does not exist"), "{error}");
        assert!(error.to_string().contains("DirectConnectClientException"), "{error}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
    }

    #[test]
    fn service_with_http_metadata() {
        let details = ServiceError::default()
            .set_code("DirectConnectServerException")
            .set_message("try again later")
            .set_request_id("req-123");
        let error =
            Error::service_with_http_metadata(details.clone(), Some(500), Some(headers()));
        assert_eq!(error.service_error(), Some(&details));
        assert_eq!(error.http_status_code(), Some(500));
        assert_eq!(error.http_headers(), Some(&headers()));
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
    }

    #[test]
    fn serialization() {
        let error = Error::ser(TestError("ser"));
        assert!(error.is_serialization(), "{error:?}");
        assert!(!error.is_deserialization(), "{error:?}");
        let got = error.source().and_then(|e| e.downcast_ref::<TestError>());
        assert!(matches!(got, Some(TestError("ser"))), "{error:?}");
        assert!(error.to_string().contains("test-only ser"), "{error}");
        assert!(error.service_error().is_none(), "{error:?}");
    }

    #[test]
    fn deserialization() {
        let error = Error::deser(TestError("deser"));
        assert!(error.is_deserialization(), "{error:?}");
        assert!(!error.is_serialization(), "{error:?}");
        assert!(error.to_string().contains("test-only deser"), "{error}");
    }

    #[test]
    fn authentication() {
        let error = Error::authentication(SigningError::from_msg(true, "no keys"));
        assert!(error.is_authentication(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<SigningError>());
        assert!(got.map(|e| e.is_retryable()).unwrap_or(false), "{error:?}");
        assert!(error.to_string().contains("no keys"), "{error}");
    }

    #[test]
    fn binding() {
        let error = Error::binding(TestError("bad endpoint"));
        assert!(error.is_binding(), "{error:?}");
        assert!(error.to_string().contains("bad endpoint"), "{error}");
    }

    #[test]
    fn executor() {
        let error = Error::executor(TestError("dropped"));
        assert!(error.is_executor(), "{error:?}");
        assert!(error.to_string().contains("dropped"), "{error}");
    }

    #[test]
    fn http() {
        let payload = bytes::Bytes::from_static(b"service unavailable");
        let error = Error::http(503, headers(), payload.clone());
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(503));
        assert_eq!(error.http_headers(), Some(&headers()));
        assert_eq!(error.http_payload(), Some(&payload));
        assert!(error.to_string().contains("[503]"), "{error}");
        assert!(error.to_string().contains("service unavailable"), "{error}");
    }

    #[test]
    fn http_binary_payload() {
        let payload = bytes::Bytes::from_static(&[0xff, 0xfe, 0x00]);
        let error = Error::http(400, HeaderMap::new(), payload);
        assert!(error.to_string().contains("[400]"), "{error}");
    }

    #[test]
    fn io() {
        let error = Error::io(TestError("connection reset"));
        assert!(error.is_transport(), "{error:?}");
        assert!(error.is_io(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.to_string().contains("connection reset"), "{error}");
    }

    #[test]
    fn transport() {
        let error = Error::transport(headers(), TestError("truncated"));
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert_eq!(error.http_headers(), Some(&headers()));
        assert!(error.to_string().contains("truncated"), "{error}");
    }
}
