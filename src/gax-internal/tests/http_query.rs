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

#[cfg(all(test, feature = "_internal-query-protocol"))]
mod tests {
    use ctrlplane_gax_internal::query::QueryPayload;
    use gax::options::*;

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct EchoResponse {
        request_id: Option<String>,
        payload: Option<String>,
        user_agent: Option<String>,
        content_type: Option<String>,
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn echo() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint).build().await?;

        let payload = QueryPayload::new("Echo")
            .add("DryRun", &Some(true))
            .add("Name", &Some("a&b c".to_string()))
            .add::<String>("Missing", &None)
            .finish(echo_server::API_VERSION);
        let response = client
            .execute_query::<EchoResponse>("Echo", payload, RequestOptions::default())
            .await?;
        assert_eq!(response.status(), Some(200));

        let body = response.into_body();
        assert_eq!(body.request_id.as_deref(), Some(echo_server::REQUEST_ID));
        assert_eq!(
            body.payload.as_deref(),
            Some("Action=Echo&DryRun=1&Name=a%26b%20c&Version=2025-01-01")
        );
        assert_eq!(
            body.content_type.as_deref(),
            Some("application/x-www-form-urlencoded; charset=utf-8")
        );
        let user_agent = body.user_agent.unwrap_or_default();
        assert!(user_agent.starts_with("ctrlplane-rust/"), "{user_agent}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn echo_empty() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint).build().await?;

        let payload = QueryPayload::new("Echo").finish(echo_server::API_VERSION);
        let body = client
            .execute_query::<EchoResponse>("Echo", payload, RequestOptions::default())
            .await?
            .into_body();
        assert_eq!(
            body.payload.as_deref(),
            Some("Action=Echo&Version=2025-01-01")
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn service_error() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint).build().await?;

        let payload = QueryPayload::new("Error").finish(echo_server::API_VERSION);
        let response = client
            .execute_query::<EchoResponse>("Error", payload, RequestOptions::default())
            .await;
        let err = match response {
            Ok(v) => panic!("expected an error got={v:?}"),
            Err(e) => e,
        };
        assert_eq!(err.http_status_code(), Some(400));
        let details = err.service_error().cloned().unwrap_or_default();
        assert_eq!(details.code(), "InvalidEcho.NotFound");
        assert_eq!(details.request_id(), Some(echo_server::REQUEST_ID));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn http_error() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint).build().await?;

        let payload = QueryPayload::new("Unavailable").finish(echo_server::API_VERSION);
        let response = client
            .execute_query::<EchoResponse>("Unavailable", payload, RequestOptions::default())
            .await;
        assert!(
            matches!(&response, Err(e) if e.http_status_code() == Some(503) && e.service_error().is_none()),
            "{response:?}"
        );
        Ok(())
    }
}
