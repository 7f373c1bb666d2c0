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

use crate::observability::{create_request_span, record_error, record_status};
use crate::options::{ClientConfig, InstrumentationClientInfo};
use auth::signer::{Signer, SigningRequest};
use bytes::Bytes;
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::error::Error;
use gax::http_client::{HttpTransport, SharedTransport};
use gax::options::RequestOptions;
use gax::response::{Parts, Response};
use http::{HeaderMap, HeaderValue, Method, header};
use std::sync::Arc;
use std::time::Duration;
use tracing::Instrument;

/// The default [HttpTransport], based on `reqwest`.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> gax::client_builder::Result<Self> {
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        Ok(Self { inner })
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        request: http::Request<Bytes>,
        timeout: Option<Duration>,
    ) -> Result<http::Response<Bytes>> {
        let mut request = reqwest::Request::try_from(request).map_err(Error::io)?;
        *request.timeout_mut() = timeout;
        let response = self.inner.execute(request).await.map_err(Error::io)?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|e| Error::transport(headers.clone(), e))?;
        let mut response = http::Response::new(body);
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}

/// Sends requests for a control-plane client.
///
/// All operations are `POST {endpoint}/`. The client serializes the
/// request, signs it, sends it via the configured transport, and parses the
/// response or the error.
#[derive(Clone, Debug)]
pub struct HttpClient {
    transport: SharedTransport,
    signer: Signer,
    endpoint: String,
    region: String,
    info: &'static InstrumentationClientInfo,
    user_agent: Option<String>,
}

impl HttpClient {
    pub async fn new(
        config: ClientConfig,
        info: &'static InstrumentationClientInfo,
    ) -> gax::client_builder::Result<Self> {
        let endpoint = crate::host::endpoint(&config, info.service_name)?;
        let region = config.region().to_string();
        let transport: SharedTransport = match config.transport {
            Some(t) => t,
            None => Arc::new(ReqwestTransport::new()?),
        };
        Ok(Self {
            transport,
            signer: config.signer.unwrap_or_default(),
            endpoint,
            region,
            info,
            user_agent: config.user_agent,
        })
    }

    /// The endpoint, without the trailing `/`.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends a JSON protocol request.
    pub async fn execute_json<I, O>(
        &self,
        target_prefix: &str,
        operation: &'static str,
        request: &I,
        options: RequestOptions,
    ) -> Result<Response<O>>
    where
        I: serde::ser::Serialize,
        O: serde::de::DeserializeOwned + Default,
    {
        let body = crate::json::to_body(request)?;
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(crate::json::CONTENT_TYPE),
        );
        let target = crate::json::target(target_prefix, operation);
        headers.insert(
            crate::json::TARGET_HEADER,
            HeaderValue::from_str(&target).map_err(Error::ser)?,
        );
        let (parts, body) = self.send(operation, headers, body, &options).await?;
        if !parts.status.is_success() {
            return Err(crate::json::to_service_error(
                parts.status.as_u16(),
                parts.headers,
                body,
            ));
        }
        let response = crate::json::from_body::<O>(&body)?;
        Ok(Response::from_parts(to_parts(parts), response))
    }

    /// Sends a query protocol request.
    ///
    /// The `payload` is the complete form-encoded body, see
    /// [QueryPayload][crate::query::QueryPayload].
    #[cfg(feature = "_internal-query-protocol")]
    pub async fn execute_query<O>(
        &self,
        operation: &'static str,
        payload: String,
        options: RequestOptions,
    ) -> Result<Response<O>>
    where
        O: serde::de::DeserializeOwned + Default,
    {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(crate::query::CONTENT_TYPE),
        );
        let (parts, body) = self
            .send(operation, headers, Bytes::from(payload), &options)
            .await?;
        if !parts.status.is_success() {
            return Err(crate::query::to_service_error(
                parts.status.as_u16(),
                parts.headers,
                body,
            ));
        }
        let response = crate::query::from_xml_body::<O>(&body)?;
        Ok(Response::from_parts(to_parts(parts), response))
    }

    async fn send(
        &self,
        operation: &'static str,
        mut headers: HeaderMap,
        body: Bytes,
        options: &RequestOptions,
    ) -> Result<(http::response::Parts, Bytes)> {
        let user_agent = crate::api_header::user_agent(
            self.info,
            options.user_agent().as_deref().or(self.user_agent.as_deref()),
        );
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_str(&user_agent).map_err(Error::ser)?,
        );
        let mut request = http::Request::builder()
            .method(Method::POST)
            .uri(format!("{}/", self.endpoint))
            .body(body)
            .map_err(Error::binding)?;
        *request.headers_mut() = headers;

        let auth_headers = self
            .signer
            .sign(&SigningRequest::new(
                &request,
                self.info.service_name,
                &self.region,
            ))
            .await
            .map_err(Error::authentication)?;
        request.headers_mut().extend(auth_headers);

        let span = create_request_span(&request, self.info, operation);
        let pending = self
            .transport
            .send(request, *options.attempt_timeout())
            .instrument(span.clone());
        match pending.await {
            Ok(response) => {
                record_status(&span, response.status());
                tracing::debug!(parent: &span, status = response.status().as_u16(), "response received");
                Ok(response.into_parts())
            }
            Err(e) => {
                record_error(&span, &e);
                tracing::debug!(parent: &span, error = %e, "request failed");
                Err(e)
            }
        }
    }
}

fn to_parts(parts: http::response::Parts) -> Parts {
    Parts::new()
        .set_headers(parts.headers)
        .set_status(parts.status.as_u16())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use test_case::test_case;

    static INFO: InstrumentationClientInfo = InstrumentationClientInfo {
        service_name: "testservice",
        client_version: "1.2.3",
        client_artifact: "ctrlplane-testservice",
    };

    // Records the requests and returns a canned response.
    #[derive(Debug)]
    struct FakeTransport {
        requests: Mutex<Vec<http::Request<Bytes>>>,
        status: u16,
        body: &'static str,
    }

    impl FakeTransport {
        fn new(status: u16, body: &'static str) -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
                status,
                body,
            })
        }
    }

    #[async_trait::async_trait]
    impl HttpTransport for FakeTransport {
        async fn send(
            &self,
            request: http::Request<Bytes>,
            _timeout: Option<Duration>,
        ) -> Result<http::Response<Bytes>> {
            self.requests.lock().unwrap().push(request);
            let mut response = http::Response::new(Bytes::from_static(self.body.as_bytes()));
            *response.status_mut() = http::StatusCode::from_u16(self.status).unwrap();
            Ok(response)
        }
    }

    #[derive(Debug)]
    struct FailingTransport;

    #[async_trait::async_trait]
    impl HttpTransport for FailingTransport {
        async fn send(
            &self,
            _request: http::Request<Bytes>,
            _timeout: Option<Duration>,
        ) -> Result<http::Response<Bytes>> {
            Err(Error::io("connection refused"))
        }
    }

    #[derive(Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Thing {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    }

    async fn client(transport: SharedTransport) -> anyhow::Result<HttpClient> {
        let mut config = ClientConfig::default();
        config.endpoint = Some("http://localhost:1234".to_string());
        config.region = Some("us-west-2".to_string());
        config.transport = Some(transport);
        Ok(HttpClient::new(config, &INFO).await?)
    }

    #[tokio::test]
    async fn json_success() -> anyhow::Result<()> {
        let transport = FakeTransport::new(200, r#"{"name": "response"}"#);
        let client = client(transport.clone()).await?;
        let request = Thing {
            name: Some("request".into()),
        };
        let response = client
            .execute_json::<Thing, Thing>("TestService", "GetThing", &request, RequestOptions::default())
            .await?;
        assert_eq!(response.status(), Some(200));
        assert_eq!(response.body().name.as_deref(), Some("response"));

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let sent = &requests[0];
        assert_eq!(sent.method(), Method::POST);
        assert_eq!(sent.uri().to_string(), "http://localhost:1234/");
        assert_eq!(
            sent.headers().get("content-type"),
            Some(&HeaderValue::from_static("application/x-amz-json-1.1"))
        );
        assert_eq!(
            sent.headers().get("x-amz-target"),
            Some(&HeaderValue::from_static("TestService.GetThing"))
        );
        assert_eq!(sent.body().as_ref(), br#"{"name":"request"}"#);
        let user_agent = sent
            .headers()
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(
            user_agent.contains("ctrlplane-testservice/1.2.3"),
            "{user_agent}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn json_empty_request_and_response() -> anyhow::Result<()> {
        let transport = FakeTransport::new(200, "");
        let client = client(transport.clone()).await?;
        let response = client
            .execute_json::<Thing, Thing>(
                "TestService",
                "ListThings",
                &Thing::default(),
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(response.into_body(), Thing::default());
        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests[0].body().as_ref(), b"{}");
        Ok(())
    }

    #[test_case(400, r#"{"__type": "TestException", "message": "bad"}"#, true; "service error")]
    #[test_case(503, "unavailable", false; "http error")]
    #[tokio::test]
    async fn json_error(status: u16, body: &'static str, is_service: bool) -> anyhow::Result<()> {
        let client = client(FakeTransport::new(status, body)).await?;
        let got = client
            .execute_json::<Thing, Thing>("TestService", "GetThing", &Thing::default(), RequestOptions::default())
            .await;
        let err = got.err().ok_or_else(|| anyhow::anyhow!("expected an error"))?;
        assert_eq!(err.http_status_code(), Some(status));
        assert_eq!(err.service_error().is_some(), is_service, "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn query_success() -> anyhow::Result<()> {
        let transport = FakeTransport::new(
            200,
            "<GetThingResponse><name>response</name></GetThingResponse>",
        );
        let client = client(transport.clone()).await?;
        let payload = crate::query::QueryPayload::new("GetThing")
            .add("Name", &Some("a b".to_string()))
            .finish("2020-01-01");
        let response = client
            .execute_query::<Thing>("GetThing", payload, RequestOptions::default())
            .await?;
        assert_eq!(response.body().name.as_deref(), Some("response"));

        let requests = transport.requests.lock().unwrap();
        let sent = &requests[0];
        assert_eq!(
            sent.headers().get("content-type"),
            Some(&HeaderValue::from_static(
                "application/x-www-form-urlencoded; charset=utf-8"
            ))
        );
        assert!(sent.headers().get("x-amz-target").is_none(), "{sent:?}");
        assert_eq!(
            sent.body().as_ref(),
            b"Action=GetThing&Name=a%20b&Version=2020-01-01"
        );
        Ok(())
    }

    #[tokio::test]
    async fn query_error() -> anyhow::Result<()> {
        let body = "<Response><Errors><Error><Code>Bad.Thing</Code><Message>bad</Message></Error></Errors><RequestID>r-1</RequestID></Response>";
        let client = client(FakeTransport::new(400, body)).await?;
        let got = client
            .execute_query::<Thing>("GetThing", "Action=GetThing&Version=1".into(), RequestOptions::default())
            .await;
        let err = got.err().ok_or_else(|| anyhow::anyhow!("expected an error"))?;
        let details = err.service_error();
        assert_eq!(details.map(|d| d.code()), Some("Bad.Thing"));
        assert_eq!(details.and_then(|d| d.request_id()), Some("r-1"));
        Ok(())
    }

    #[tokio::test]
    async fn transport_error() -> anyhow::Result<()> {
        let client = client(Arc::new(FailingTransport)).await?;
        let got = client
            .execute_json::<Thing, Thing>("TestService", "GetThing", &Thing::default(), RequestOptions::default())
            .await;
        assert!(matches!(&got, Err(e) if e.is_io()), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    async fn user_agent_prefix() -> anyhow::Result<()> {
        let transport = FakeTransport::new(200, "{}");
        let mut config = ClientConfig::default();
        config.endpoint = Some("http://localhost:1234".to_string());
        config.transport = Some(transport.clone());
        config.user_agent = Some("client-prefix/1.0".to_string());
        let client = HttpClient::new(config, &INFO).await?;

        let _ = client
            .execute_json::<Thing, Thing>("TestService", "GetThing", &Thing::default(), RequestOptions::default())
            .await?;
        let mut options = RequestOptions::default();
        options.set_user_agent("request-prefix/2.0");
        let _ = client
            .execute_json::<Thing, Thing>("TestService", "GetThing", &Thing::default(), options)
            .await?;

        let requests = transport.requests.lock().unwrap();
        let agents = requests
            .iter()
            .map(|r| {
                r.headers()
                    .get("user-agent")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string()
            })
            .collect::<Vec<_>>();
        assert!(agents[0].starts_with("client-prefix/1.0 ctrlplane-rust/"), "{agents:?}");
        assert!(agents[1].starts_with("request-prefix/2.0 ctrlplane-rust/"), "{agents:?}");
        Ok(())
    }

    #[tokio::test]
    async fn default_endpoint() -> anyhow::Result<()> {
        let mut config = ClientConfig::default();
        config.region = Some("eu-central-1".to_string());
        config.transport = Some(FakeTransport::new(200, "{}"));
        let client = HttpClient::new(config, &INFO).await?;
        assert_eq!(
            client.endpoint(),
            "https://testservice.eu-central-1.amazonaws.com"
        );
        Ok(())
    }

    #[tokio::test]
    async fn bad_endpoint() {
        let mut config = ClientConfig::default();
        config.endpoint = Some("http://bad host".to_string());
        let got = HttpClient::new(config, &INFO).await;
        assert!(matches!(&got, Err(e) if e.is_endpoint()), "{got:?}");
    }
}
