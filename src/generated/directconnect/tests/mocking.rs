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

//! Verify it is possible to mock the client.

#[cfg(test)]
mod mocking {
    use ctrlplane_directconnect::client::DirectConnect;
    use ctrlplane_directconnect::errors::DirectConnectError;
    use ctrlplane_directconnect::model::*;
    use ctrlplane_directconnect::stub;
    use gax::Result as GaxResult;
    use gax::error::{Error, ServiceError};
    use gax::options::RequestOptions;
    use gax::response::Response as GaxResponse;

    mockall::mock! {
        #[derive(Debug)]
        DirectConnect {}
        impl stub::DirectConnect for DirectConnect {
            async fn create_connection(&self, req: CreateConnectionRequest, _options: RequestOptions) -> GaxResult<GaxResponse<Connection>>;
            async fn describe_connections(&self, req: DescribeConnectionsRequest, _options: RequestOptions) -> GaxResult<GaxResponse<Connections>>;
            async fn confirm_connection(&self, req: ConfirmConnectionRequest, _options: RequestOptions) -> GaxResult<GaxResponse<ConfirmConnectionResponse>>;
            async fn describe_locations(&self, req: DescribeLocationsRequest, _options: RequestOptions) -> GaxResult<GaxResponse<Locations>>;
        }
    }

    /// The function under test.
    ///
    /// Returns the ID of the connection named `name`, creating it if needed.
    async fn ensure_connection(client: &DirectConnect, name: &str, location: &str) -> GaxResult<String> {
        let existing = client.describe_connections().send().await?;
        if let Some(id) = existing
            .connections
            .into_iter()
            .find(|c| c.connection_name.as_deref() == Some(name))
            .and_then(|c| c.connection_id)
        {
            return Ok(id);
        }
        let created = client
            .create_connection()
            .set_connection_name(name)
            .set_location(location)
            .set_bandwidth("1Gbps")
            .send()
            .await?;
        Ok(created.connection_id.unwrap_or_default())
    }

    #[tokio::test]
    async fn ensure_existing() -> anyhow::Result<()> {
        let mut mock = MockDirectConnect::new();
        mock.expect_describe_connections()
            .withf(|r, _| r.connection_id.is_none())
            .times(1)
            .returning(|_, _| {
                Ok(GaxResponse::from(Connections::new().set_connections([
                    Connection::new()
                        .set_connection_id("dxcon-1")
                        .set_connection_name("other"),
                    Connection::new()
                        .set_connection_id("dxcon-2")
                        .set_connection_name("primary"),
                ])))
            });
        mock.expect_create_connection().never();

        let client = DirectConnect::from_stub(mock);
        let got = ensure_connection(&client, "primary", "EqSe2").await?;
        assert_eq!(got, "dxcon-2");
        Ok(())
    }

    #[tokio::test]
    async fn ensure_creates() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockDirectConnect::new();
        mock.expect_describe_connections()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(GaxResponse::from(Connections::new())));
        mock.expect_create_connection()
            .withf(|r, _| {
                r.connection_name.as_deref() == Some("primary")
                    && r.location.as_deref() == Some("EqSe2")
                    && r.bandwidth.as_deref() == Some("1Gbps")
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(GaxResponse::from(
                    Connection::new()
                        .set_connection_id("dxcon-new")
                        .set_connection_state(ConnectionState::Requested),
                ))
            });

        let client = DirectConnect::from_stub(mock);
        let got = ensure_connection(&client, "primary", "EqSe2").await?;
        assert_eq!(got, "dxcon-new");
        Ok(())
    }

    #[tokio::test]
    async fn ensure_error() {
        let mut mock = MockDirectConnect::new();
        mock.expect_describe_connections()
            .times(1)
            .returning(|_, _| Err(server_error()));

        let client = DirectConnect::from_stub(mock);
        let got = ensure_connection(&client, "primary", "EqSe2").await;
        let code = got.as_ref().err().and_then(DirectConnectError::from_error);
        assert_eq!(code, Some(DirectConnectError::DirectConnectServerException), "{got:?}");
    }

    #[tokio::test]
    async fn confirm_with_handler() -> anyhow::Result<()> {
        let mut mock = MockDirectConnect::new();
        mock.expect_confirm_connection()
            .withf(|r, _| r.connection_id.as_deref() == Some("dxcon-1"))
            .times(1)
            .returning(|_, _| {
                Ok(GaxResponse::from(
                    ConfirmConnectionResponse::new().set_connection_state(ConnectionState::Pending),
                ))
            });

        let client = DirectConnect::from_stub(mock);
        let (tx, rx) = tokio::sync::oneshot::channel();
        client
            .confirm_connection()
            .set_connection_id("dxcon-1")
            .send_with_handler(
                move |_client, request, outcome, _context| {
                    let _ = tx.send((request.connection_id.clone(), outcome.map(|r| r.connection_state)));
                },
                None,
            );
        let (id, state) = rx.await?;
        assert_eq!(id.as_deref(), Some("dxcon-1"));
        assert!(matches!(state, Ok(Some(ConnectionState::Pending))), "{state:?}");
        Ok(())
    }

    #[tokio::test]
    async fn handler_can_reuse_client() -> anyhow::Result<()> {
        let mut mock = MockDirectConnect::new();
        mock.expect_describe_locations()
            .times(2)
            .returning(|_, _| {
                Ok(GaxResponse::from(
                    Locations::new().set_locations([Location::new().set_location_code("EqSe2")]),
                ))
            });

        let client = DirectConnect::from_stub(mock);
        let (tx, rx) = tokio::sync::oneshot::channel();
        client.describe_locations().send_with_handler(
            move |client, _request, outcome, _context| {
                let first = outcome.map(|r| r.locations.len());
                let deferred = client.describe_locations().send_deferred();
                let _ = tx.send((first, deferred));
            },
            None,
        );
        let (first, deferred) = rx.await?;
        assert!(matches!(first, Ok(1)), "{first:?}");
        let second = deferred.await?;
        assert_eq!(second.locations.len(), 1);
        Ok(())
    }

    #[test]
    fn deferred_outside_runtime() {
        let mut mock = MockDirectConnect::new();
        mock.expect_describe_locations().never();

        let client = DirectConnect::from_stub(mock);
        let got = tokio_test::block_on(client.describe_locations().send_deferred());
        assert!(matches!(&got, Err(e) if e.is_executor()), "{got:?}");
    }

    fn server_error() -> Error {
        Error::service(
            ServiceError::default()
                .set_code("DirectConnectServerException")
                .set_message("internal error"),
        )
    }
}
