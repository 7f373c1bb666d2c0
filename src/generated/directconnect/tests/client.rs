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

#[cfg(test)]
mod tests {
    use ctrlplane_directconnect::client::DirectConnect;
    use ctrlplane_directconnect::errors::DirectConnectError;
    use ctrlplane_directconnect::model::*;
    use httptest::{Expectation, Server, all_of, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    async fn client(server: &Server) -> Result<DirectConnect> {
        let client = DirectConnect::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn create_connection() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/"),
                request::headers(contains(("content-type", "application/x-amz-json-1.1"))),
                request::headers(contains(("x-amz-target", "OvertureService.CreateConnection"))),
                request::body(json_decoded(eq(json!({
                    "location": "EqSe2",
                    "bandwidth": "1Gbps",
                    "connectionName": "My Connection to AWS",
                })))),
            ])
            .respond_with(
                status_code(200)
                    .insert_header("x-amzn-requestid", "req-create")
                    .body(
                        json!({
                            "ownerAccount": "123456789012",
                            "connectionId": "dxcon-fg5678gh",
                            "connectionName": "My Connection to AWS",
                            "connectionState": "requested",
                            "region": "us-west-2",
                            "location": "EqSe2",
                            "bandwidth": "1Gbps",
                        })
                        .to_string(),
                    ),
            ),
        );

        let client = client(&server).await?;
        let response = client
            .create_connection()
            .set_location("EqSe2")
            .set_bandwidth("1Gbps")
            .set_connection_name("My Connection to AWS")
            .send()
            .await?;
        let want = Connection::new()
            .set_owner_account("123456789012")
            .set_connection_id("dxcon-fg5678gh")
            .set_connection_name("My Connection to AWS")
            .set_connection_state(ConnectionState::Requested)
            .set_region("us-west-2")
            .set_location("EqSe2")
            .set_bandwidth("1Gbps");
        assert_eq!(response, want);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn describe_locations_empty_request() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/"),
                request::headers(contains(("x-amz-target", "OvertureService.DescribeLocations"))),
                request::body(json_decoded(eq(json!({})))),
            ])
            .respond_with(
                status_code(200).body(
                    json!({
                        "locations": [
                            {"locationCode": "EqSe2", "locationName": "Equinix SE2"},
                            {"locationCode": "EqDC2", "locationName": "Equinix DC1 - DC6 & DC10"},
                        ]
                    })
                    .to_string(),
                ),
            ),
        );

        let client = client(&server).await?;
        let response = client.describe_locations().send().await?;
        let codes = response
            .locations
            .iter()
            .filter_map(|l| l.location_code.as_deref())
            .collect::<Vec<_>>();
        assert_eq!(codes, vec!["EqSe2", "EqDC2"]);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn create_private_virtual_interface() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/"),
                request::headers(contains((
                    "x-amz-target",
                    "OvertureService.CreatePrivateVirtualInterface"
                ))),
                request::body(json_decoded(eq(json!({
                    "connectionId": "dxcon-fg5678gh",
                    "newPrivateVirtualInterface": {
                        "virtualInterfaceName": "PrivateVirtualInterface",
                        "vlan": 101,
                        "asn": 65000,
                        "virtualGatewayId": "vgw-123er56",
                    },
                })))),
            ])
            .respond_with(
                status_code(200).body(
                    json!({
                        "virtualInterfaceId": "dxvif-123dfg56",
                        "virtualInterfaceState": "pending",
                        "vlan": 101,
                    })
                    .to_string(),
                ),
            ),
        );

        let client = client(&server).await?;
        let response = client
            .create_private_virtual_interface()
            .set_connection_id("dxcon-fg5678gh")
            .set_new_private_virtual_interface(
                NewPrivateVirtualInterface::new()
                    .set_virtual_interface_name("PrivateVirtualInterface")
                    .set_vlan(101)
                    .set_asn(65000)
                    .set_virtual_gateway_id("vgw-123er56"),
            )
            .send()
            .await?;
        assert_eq!(response.virtual_interface_id.as_deref(), Some("dxvif-123dfg56"));
        assert_eq!(
            response.virtual_interface_state,
            Some(VirtualInterfaceState::Pending)
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn confirm_connection_empty_response() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/"),
                request::headers(contains(("x-amz-target", "OvertureService.ConfirmConnection"))),
            ])
            .respond_with(status_code(200)),
        );

        let client = client(&server).await?;
        let response = client
            .confirm_connection()
            .set_connection_id("dxcon-fg5678gh")
            .send()
            .await?;
        assert_eq!(response, ConfirmConnectionResponse::default());
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn describe_connection_loa() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/"),
                request::body(json_decoded(eq(json!({
                    "connectionId": "dxcon-fg5678gh",
                    "loaContentType": "application/pdf",
                })))),
            ])
            .respond_with(
                status_code(200).body(
                    json!({
                        "loa": {
                            "loaContent": "JVBERi0xLjQgdGVzdC1vbmx5",
                            "loaContentType": "application/pdf",
                        }
                    })
                    .to_string(),
                ),
            ),
        );

        let client = client(&server).await?;
        let response = client
            .describe_connection_loa()
            .set_connection_id("dxcon-fg5678gh")
            .set_loa_content_type(LoaContentType::ApplicationPdf)
            .send()
            .await?;
        let loa = response.loa.unwrap_or_default();
        assert_eq!(
            loa.loa_content.as_deref(),
            Some(b"%PDF-1.4 test-only".as_slice())
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn client_exception() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/")).respond_with(
                status_code(400)
                    .insert_header("x-amzn-requestid", "req-bad-vlan")
                    .body(
                        json!({
                            "__type": "DirectConnectClientException",
                            "message": "VLAN 5000 is out of range",
                        })
                        .to_string(),
                    ),
            ),
        );

        let client = client(&server).await?;
        let response = client
            .allocate_connection_on_interconnect()
            .set_interconnect_id("dxcon-fgktov66")
            .set_vlan(5000)
            .send()
            .await;
        let err = response.err().ok_or_else(|| anyhow::anyhow!("expected an error"))?;
        assert_eq!(
            DirectConnectError::from_error(&err),
            Some(DirectConnectError::DirectConnectClientException)
        );
        let details = err.service_error();
        assert_eq!(details.map(|e| e.message()), Some("VLAN 5000 is out of range"));
        assert_eq!(details.and_then(|e| e.request_id()), Some("req-bad-vlan"));
        assert_eq!(err.http_status_code(), Some(400));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn http_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/"))
                .respond_with(status_code(502).body("bad gateway")),
        );

        let client = client(&server).await?;
        let response = client.describe_virtual_gateways().send().await;
        let err = response.err().ok_or_else(|| anyhow::anyhow!("expected an error"))?;
        assert_eq!(DirectConnectError::from_error(&err), None);
        assert_eq!(err.http_status_code(), Some(502));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_interconnect_deferred() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/"),
                request::headers(contains(("x-amz-target", "OvertureService.DeleteInterconnect"))),
            ])
            .respond_with(
                status_code(200).body(json!({"interconnectState": "deleting"}).to_string()),
            ),
        );

        let client = client(&server).await?;
        let deferred = client
            .delete_interconnect()
            .set_interconnect_id("dxcon-abc123")
            .send_deferred();
        let response = deferred.await?;
        assert_eq!(response.interconnect_state, Some(InterconnectState::Deleting));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_virtual_interface_with_handler() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/"),
                request::headers(contains((
                    "x-amz-target",
                    "OvertureService.DeleteVirtualInterface"
                ))),
            ])
            .respond_with(
                status_code(200).body(json!({"virtualInterfaceState": "deleting"}).to_string()),
            ),
        );

        let client = client(&server).await?;
        let context = std::sync::Arc::new(
            gax::executor::AsyncCallerContext::new().set_uuid("test-only-context"),
        );
        let (tx, rx) = tokio::sync::oneshot::channel();
        client
            .delete_virtual_interface()
            .set_virtual_interface_id("dxvif-123dfg56")
            .send_with_handler(
                move |_client, request, outcome, context| {
                    let summary = (
                        request.virtual_interface_id.clone(),
                        outcome.map(|r| r.virtual_interface_state),
                        context.map(|c| c.uuid().to_string()),
                    );
                    let _ = tx.send(summary);
                },
                Some(context),
            );
        let (id, outcome, uuid) = rx.await?;
        assert_eq!(id.as_deref(), Some("dxvif-123dfg56"));
        assert!(
            matches!(outcome, Ok(Some(VirtualInterfaceState::Deleting))),
            "{outcome:?}"
        );
        assert_eq!(uuid.as_deref(), Some("test-only-context"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn handler_receives_errors() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/")).respond_with(
                status_code(500).body(
                    json!({"__type": "DirectConnectServerException", "message": "internal"})
                        .to_string(),
                ),
            ),
        );

        let client = client(&server).await?;
        let (tx, rx) = tokio::sync::oneshot::channel();
        client.describe_interconnects().send_with_handler(
            move |_client, _request, outcome, context| {
                let code = outcome.err().as_ref().and_then(DirectConnectError::from_error);
                let _ = tx.send((code, context.is_none()));
            },
            None,
        );
        let (code, no_context) = rx.await?;
        assert_eq!(code, Some(DirectConnectError::DirectConnectServerException));
        assert!(no_context);
        Ok(())
    }
}
