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

#[cfg(all(test, feature = "_internal-http-client"))]
mod tests {
    use auth::errors::SigningError;
    use auth::signer::{SigningProvider, SigningRequest};
    use gax::options::*;
    use http::HeaderMap;
    use serde_json::{Value, json};
    use std::time::Duration;

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    #[derive(Debug)]
    struct TestSigner;

    #[async_trait::async_trait]
    impl SigningProvider for TestSigner {
        async fn sign(
            &self,
            request: &SigningRequest<'_>,
        ) -> std::result::Result<HeaderMap, SigningError> {
            let value = format!("test-only {}/{}", request.service(), request.region());
            let mut headers = HeaderMap::new();
            headers.insert(
                http::header::AUTHORIZATION,
                http::HeaderValue::from_str(&value).map_err(|e| SigningError::new(false, e))?,
            );
            Ok(headers)
        }
    }

    #[derive(Debug)]
    struct BrokenSigner;

    #[async_trait::async_trait]
    impl SigningProvider for BrokenSigner {
        async fn sign(
            &self,
            _request: &SigningRequest<'_>,
        ) -> std::result::Result<HeaderMap, SigningError> {
            Err(SigningError::from_msg(false, "test-only broken signer"))
        }
    }

    fn get_header_value(response: &Value, name: &str) -> Option<String> {
        response
            .as_object()
            .and_then(|o| o.get("headers"))
            .and_then(|h| h.get(name))
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn echo() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint).build().await?;

        let request = json!({"connectionId": "dxcon-fg5678gh", "vlan": 101});
        let response = client
            .execute_json::<Value, Value>(
                echo_server::TARGET_PREFIX,
                "Echo",
                &request,
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(response.status(), Some(200));
        assert_eq!(
            response
                .headers()
                .get("x-amzn-requestid")
                .and_then(|v| v.to_str().ok()),
            Some(echo_server::REQUEST_ID)
        );

        let body = response.into_body();
        let sent = body
            .get("body")
            .and_then(|v| v.as_str())
            .map(serde_json::from_str::<Value>)
            .transpose()?;
        assert_eq!(sent, Some(request));
        assert_eq!(
            get_header_value(&body, "content-type").as_deref(),
            Some("application/x-amz-json-1.1")
        );
        assert_eq!(
            get_header_value(&body, "x-amz-target").as_deref(),
            Some("EchoService.Echo")
        );
        // The default signer is anonymous.
        assert_eq!(get_header_value(&body, "authorization"), None);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn echo_empty_request() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint).build().await?;

        let response = client
            .execute_json::<Value, Value>(
                echo_server::TARGET_PREFIX,
                "Echo",
                &json!({}),
                RequestOptions::default(),
            )
            .await?
            .into_body();
        assert_eq!(response.get("body"), Some(&json!("{}")));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn empty_response() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint).build().await?;

        let response = client
            .execute_json::<Value, Value>(
                echo_server::TARGET_PREFIX,
                "Empty",
                &json!({}),
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(response.into_body(), Value::Null);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn signer_headers() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint)
            .with_signer(TestSigner)
            .with_region("ap-southeast-2")
            .build()
            .await?;

        let response = client
            .execute_json::<Value, Value>(
                echo_server::TARGET_PREFIX,
                "Echo",
                &json!({}),
                RequestOptions::default(),
            )
            .await?
            .into_body();
        assert_eq!(
            get_header_value(&response, "authorization").as_deref(),
            Some("test-only echo/ap-southeast-2")
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn signer_error() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint)
            .with_signer(BrokenSigner)
            .build()
            .await?;

        let response = client
            .execute_json::<Value, Value>(
                echo_server::TARGET_PREFIX,
                "Echo",
                &json!({}),
                RequestOptions::default(),
            )
            .await;
        assert!(
            matches!(&response, Err(e) if e.is_authentication()),
            "{response:?}"
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn user_agent() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint).build().await?;

        let prefix = "test-prefix/1.2.3";
        let options = {
            let mut o = RequestOptions::default();
            o.set_user_agent(prefix);
            o
        };
        let response = client
            .execute_json::<Value, Value>(echo_server::TARGET_PREFIX, "Echo", &json!({}), options)
            .await?
            .into_body();
        let got = get_header_value(&response, "user-agent").unwrap_or_default();
        assert!(got.starts_with("test-prefix/1.2.3 ctrlplane-rust/"), "{got}");
        assert!(got.ends_with(" echo-server/0.0.0"), "{got}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn service_error() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint).build().await?;

        let response = client
            .execute_json::<Value, Value>(
                echo_server::TARGET_PREFIX,
                "Error",
                &json!({}),
                RequestOptions::default(),
            )
            .await;
        let err = match response {
            Ok(v) => panic!("expected an error got={v:?}"),
            Err(e) => e,
        };
        assert_eq!(err.http_status_code(), Some(400));
        let headers = err.http_headers().cloned().unwrap_or_default();
        assert!(!headers.is_empty(), "empty headers in {err:?}");
        let details = err.service_error().cloned().unwrap_or_default();
        assert_eq!(details.code(), "EchoClientException");
        assert_eq!(details.message(), "this path always returns an error");
        assert_eq!(details.request_id(), Some(echo_server::REQUEST_ID));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn http_error() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint).build().await?;

        let response = client
            .execute_json::<Value, Value>(
                echo_server::TARGET_PREFIX,
                "Unavailable",
                &json!({}),
                RequestOptions::default(),
            )
            .await;
        let err = match response {
            Ok(v) => panic!("expected an error got={v:?}"),
            Err(e) => e,
        };
        assert!(err.service_error().is_none(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(503));
        assert_eq!(
            err.http_payload().map(|p| p.as_ref()),
            Some(b"try again later".as_slice())
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn attempt_timeout() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint).build().await?;

        let options = {
            let mut o = RequestOptions::default();
            o.set_attempt_timeout(Duration::from_millis(50));
            o
        };
        let response = client
            .execute_json::<Value, Value>(
                echo_server::TARGET_PREFIX,
                "Delay",
                &json!({"delayMs": 5000}),
                options,
            )
            .await;
        assert!(matches!(&response, Err(e) if e.is_io()), "{response:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn connection_refused() -> Result<()> {
        // Reserve a port, then close it.
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        let endpoint = format!("http://{}", listener.local_addr()?);
        drop(listener);

        let client = echo_server::builder(endpoint).build().await?;
        let response = client
            .execute_json::<Value, Value>(
                echo_server::TARGET_PREFIX,
                "Echo",
                &json!({}),
                RequestOptions::default(),
            )
            .await;
        assert!(matches!(&response, Err(e) if e.is_io()), "{response:?}");
        Ok(())
    }
}
