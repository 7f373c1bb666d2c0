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
    use ctrlplane_gax_internal::http::HttpClient;
    use ctrlplane_gax_internal::options::{ClientConfig, InstrumentationClientInfo};
    use ctrlplane_gax_internal::query::QueryPayload;
    use gax::options::*;
    use httptest::{Expectation, Server, all_of, matchers::*, responders::*};
    use serde_json::{Value, json};

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    static INFO: InstrumentationClientInfo = InstrumentationClientInfo {
        service_name: "test",
        client_version: "1.0.0",
        client_artifact: "test-artifact",
    };

    async fn client(server: &Server) -> Result<HttpClient> {
        let mut config = ClientConfig::default();
        config.endpoint = Some(format!("http://{}", server.addr()));
        Ok(HttpClient::new(config, &INFO).await?)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn json_request() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/"),
                request::headers(contains(("x-amz-target", "TestService.CreateThing"))),
                request::headers(contains((
                    "content-type",
                    "application/x-amz-json-1.1"
                ))),
                request::body(json_decoded(eq(json!({"thingName": "my-thing"})))),
            ])
            .respond_with(
                status_code(200).body(json!({"thingId": "thing-123"}).to_string()),
            ),
        );

        let client = client(&server).await?;
        let response = client
            .execute_json::<Value, Value>(
                "TestService",
                "CreateThing",
                &json!({"thingName": "my-thing"}),
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(response.into_body(), json!({"thingId": "thing-123"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn query_request() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/"),
                request::headers(contains((
                    "content-type",
                    "application/x-www-form-urlencoded; charset=utf-8"
                ))),
                request::body(url_decoded(contains(("Action", "DeleteThing")))),
                request::body(url_decoded(contains(("ThingId", "thing-123")))),
                request::body(url_decoded(contains(("Version", "2020-02-02")))),
            ])
            .respond_with(status_code(200).body(
                "<DeleteThingResponse><requestId>r-1</requestId></DeleteThingResponse>",
            )),
        );

        #[derive(Debug, Default, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct DeleteThingResponse {
            request_id: Option<String>,
        }

        let client = client(&server).await?;
        let payload = QueryPayload::new("DeleteThing")
            .add("ThingId", &Some("thing-123".to_string()))
            .finish("2020-02-02");
        let response = client
            .execute_query::<DeleteThingResponse>("DeleteThing", payload, RequestOptions::default())
            .await?;
        assert_eq!(response.into_body().request_id.as_deref(), Some("r-1"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn malformed_success_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/"))
                .respond_with(status_code(200).body("this is not json")),
        );

        let client = client(&server).await?;
        let response = client
            .execute_json::<Value, Value>(
                "TestService",
                "GetThing",
                &json!({}),
                RequestOptions::default(),
            )
            .await;
        assert!(
            matches!(&response, Err(e) if e.is_deserialization()),
            "{response:?}"
        );
        Ok(())
    }
}
