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

//! Defines helpers functions to run HttpClient integration tests.
//!
//! The server implements a fake `echo` service speaking both protocols on
//! `POST /`. JSON protocol requests are recognized by the `X-Amz-Target`
//! header, everything else is treated as a query protocol request.

use auth::signer::Signer;
use axum::{
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use gaxi::options::InstrumentationClientInfo;
use serde_json::json;
use tokio::task::JoinHandle;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// The JSON protocol target prefix for the echo service.
pub const TARGET_PREFIX: &str = "EchoService";

/// The API version for query protocol requests.
pub const API_VERSION: &str = "2025-01-01";

/// The request id returned in all responses.
pub const REQUEST_ID: &str = "echo-request-id";

pub static INFO: InstrumentationClientInfo = InstrumentationClientInfo {
    service_name: "echo",
    client_version: "0.0.0",
    client_artifact: "echo-server",
};

pub async fn start() -> Result<(String, JoinHandle<()>)> {
    let app = axum::Router::new().route("/", axum::routing::post(dispatch));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let server = tokio::spawn(async {
        axum::serve(listener, app).await.unwrap();
    });

    Ok((format!("http://{}:{}", addr.ip(), addr.port()), server))
}

pub fn builder(
    endpoint: impl Into<String>,
) -> gax::client_builder::ClientBuilder<Factory, Signer> {
    gax::client_builder::internal::new_builder(Factory(endpoint.into()))
}

pub struct Factory(String);
impl gax::client_builder::internal::ClientFactory for Factory {
    type Client = gaxi::http::HttpClient;
    type Signer = Signer;
    async fn build(
        self,
        mut config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self::Client> {
        config.endpoint = config.endpoint.or(Some(self.0));
        Self::Client::new(config, &INFO).await
    }
}

async fn dispatch(headers: HeaderMap, body: Bytes) -> Response {
    let target = headers
        .get("x-amz-target")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let response = match target {
        Some(t) => json_dispatch(&t, headers, body).await,
        None => query_dispatch(headers, body).await,
    };
    match response {
        Err(e) => internal_error(e),
        Ok(r) => r,
    }
}

async fn json_dispatch(target: &str, headers: HeaderMap, body: Bytes) -> Result<Response> {
    let operation = target
        .strip_prefix(TARGET_PREFIX)
        .and_then(|s| s.strip_prefix('.'))
        .unwrap_or(target);
    let mut response_headers = HeaderMap::new();
    response_headers.insert("x-amzn-requestid", HeaderValue::from_static(REQUEST_ID));
    let response = match operation {
        "Echo" => {
            let object = json!({
                "headers": headers_to_json(headers)?,
                "body": String::from_utf8(body.to_vec())?,
            });
            (StatusCode::OK, response_headers, object.to_string()).into_response()
        }
        "Delay" => {
            let request = serde_json::from_slice::<serde_json::Value>(&body)?;
            let delay = request.get("delayMs").and_then(|v| v.as_u64()).unwrap_or(0);
            tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
            (StatusCode::OK, response_headers, "{}".to_string()).into_response()
        }
        "Empty" => (StatusCode::OK, response_headers, String::new()).into_response(),
        "Error" => {
            let error = json!({
                "__type": "com.example.echo#EchoClientException",
                "message": "this path always returns an error",
            });
            (StatusCode::BAD_REQUEST, response_headers, error.to_string()).into_response()
        }
        "Unavailable" => (StatusCode::SERVICE_UNAVAILABLE, "try again later").into_response(),
        _ => {
            let error = json!({
                "__type": "UnknownOperationException",
                "message": format!("unknown operation {target}"),
            });
            (StatusCode::BAD_REQUEST, response_headers, error.to_string()).into_response()
        }
    };
    Ok(response)
}

async fn query_dispatch(headers: HeaderMap, body: Bytes) -> Result<Response> {
    let payload = String::from_utf8(body.to_vec())?;
    let action = payload
        .split('&')
        .find_map(|p| p.strip_prefix("Action="))
        .unwrap_or_default();
    let response = match action {
        "Echo" => {
            let user_agent = headers
                .get("user-agent")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            let content_type = headers
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            let xml = format!(
                concat!(
                    r#"<?xml version="1.0" encoding="UTF-8"?>"#,
                    "<EchoResponse><requestId>{}</requestId><payload>{}</payload>",
                    "<userAgent>{}</userAgent><contentType>{}</contentType></EchoResponse>"
                ),
                REQUEST_ID,
                xml_escape(&payload),
                xml_escape(user_agent),
                xml_escape(content_type),
            );
            (StatusCode::OK, xml).into_response()
        }
        "Error" => {
            let xml = format!(
                concat!(
                    "<Response><Errors><Error><Code>InvalidEcho.NotFound</Code>",
                    "<Message>this path always returns an error</Message></Error></Errors>",
                    "<RequestID>{}</RequestID></Response>"
                ),
                REQUEST_ID
            );
            (StatusCode::BAD_REQUEST, xml).into_response()
        }
        "Unavailable" => (StatusCode::SERVICE_UNAVAILABLE, "try again later").into_response(),
        _ => (StatusCode::BAD_REQUEST, format!("unknown action {action}")).into_response(),
    };
    Ok(response)
}

fn headers_to_json(headers: HeaderMap) -> Result<serde_json::Value> {
    let to_dyn = |e| -> Box<dyn std::error::Error + 'static> { Box::new(e) };
    let headers = headers
        .iter()
        .map(|(k, v)| {
            v.to_str()
                .map(|s| (k.to_string(), serde_json::Value::String(s.to_string())))
                .map_err(to_dyn)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(serde_json::Value::Object(headers.into_iter().collect()))
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn internal_error(e: Box<dyn std::error::Error>) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{e}")).into_response()
}
