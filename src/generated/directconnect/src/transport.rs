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
//
// Code generated by sidekick. DO NOT EDIT.

use crate::Result;

/// Implements [DirectConnect](super::stub::DirectConnect) using a [gaxi::http::HttpClient].
#[derive(Clone)]
pub struct DirectConnect {
    inner: gaxi::http::HttpClient,
}

impl std::fmt::Debug for DirectConnect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("DirectConnect")
            .field("inner", &self.inner)
            .finish()
    }
}

impl DirectConnect {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner =
            gaxi::http::HttpClient::new(config, &crate::info::INSTRUMENTATION_CLIENT_INFO).await?;
        Ok(Self { inner })
    }
}

impl super::stub::DirectConnect for DirectConnect {
    async fn allocate_connection_on_interconnect(
        &self,
        req: crate::model::AllocateConnectionOnInterconnectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Connection>> {
        self.inner
            .execute_json(crate::info::TARGET_PREFIX, "AllocateConnectionOnInterconnect", &req, options)
            .await
    }

    async fn allocate_private_virtual_interface(
        &self,
        req: crate::model::AllocatePrivateVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::VirtualInterface>> {
        self.inner
            .execute_json(crate::info::TARGET_PREFIX, "AllocatePrivateVirtualInterface", &req, options)
            .await
    }

    async fn allocate_public_virtual_interface(
        &self,
        req: crate::model::AllocatePublicVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::VirtualInterface>> {
        self.inner
            .execute_json(crate::info::TARGET_PREFIX, "AllocatePublicVirtualInterface", &req, options)
            .await
    }

    async fn confirm_connection(
        &self,
        req: crate::model::ConfirmConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ConfirmConnectionResponse>> {
        self.inner
            .execute_json(crate::info::TARGET_PREFIX, "ConfirmConnection", &req, options)
            .await
    }

    async fn confirm_private_virtual_interface(
        &self,
        req: crate::model::ConfirmPrivateVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ConfirmPrivateVirtualInterfaceResponse>> {
        self.inner
            .execute_json(crate::info::TARGET_PREFIX, "ConfirmPrivateVirtualInterface", &req, options)
            .await
    }

    async fn confirm_public_virtual_interface(
        &self,
        req: crate::model::ConfirmPublicVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ConfirmPublicVirtualInterfaceResponse>> {
        self.inner
            .execute_json(crate::info::TARGET_PREFIX, "ConfirmPublicVirtualInterface", &req, options)
            .await
    }

    async fn create_connection(
        &self,
        req: crate::model::CreateConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Connection>> {
        self.inner
            .execute_json(crate::info::TARGET_PREFIX, "CreateConnection", &req, options)
            .await
    }

    async fn create_interconnect(
        &self,
        req: crate::model::CreateInterconnectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Interconnect>> {
        self.inner
            .execute_json(crate::info::TARGET_PREFIX, "CreateInterconnect", &req, options)
            .await
    }

    async fn create_private_virtual_interface(
        &self,
        req: crate::model::CreatePrivateVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::VirtualInterface>> {
        self.inner
            .execute_json(crate::info::TARGET_PREFIX, "CreatePrivateVirtualInterface", &req, options)
            .await
    }

    async fn create_public_virtual_interface(
        &self,
        req: crate::model::CreatePublicVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::VirtualInterface>> {
        self.inner
            .execute_json(crate::info::TARGET_PREFIX, "CreatePublicVirtualInterface", &req, options)
            .await
    }

    async fn delete_connection(
        &self,
        req: crate::model::DeleteConnectionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Connection>> {
        self.inner
            .execute_json(crate::info::TARGET_PREFIX, "DeleteConnection", &req, options)
            .await
    }

    async fn delete_interconnect(
        &self,
        req: crate::model::DeleteInterconnectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteInterconnectResponse>> {
        self.inner
            .execute_json(crate::info::TARGET_PREFIX, "DeleteInterconnect", &req, options)
            .await
    }

    async fn delete_virtual_interface(
        &self,
        req: crate::model::DeleteVirtualInterfaceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeleteVirtualInterfaceResponse>> {
        self.inner
            .execute_json(crate::info::TARGET_PREFIX, "DeleteVirtualInterface", &req, options)
            .await
    }

    async fn describe_connection_loa(
        &self,
        req: crate::model::DescribeConnectionLoaRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeConnectionLoaResponse>> {
        self.inner
            .execute_json(crate::info::TARGET_PREFIX, "DescribeConnectionLoa", &req, options)
            .await
    }

    async fn describe_connections(
        &self,
        req: crate::model::DescribeConnectionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Connections>> {
        self.inner
            .execute_json(crate::info::TARGET_PREFIX, "DescribeConnections", &req, options)
            .await
    }

    async fn describe_connections_on_interconnect(
        &self,
        req: crate::model::DescribeConnectionsOnInterconnectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Connections>> {
        self.inner
            .execute_json(crate::info::TARGET_PREFIX, "DescribeConnectionsOnInterconnect", &req, options)
            .await
    }

    async fn describe_interconnect_loa(
        &self,
        req: crate::model::DescribeInterconnectLoaRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DescribeInterconnectLoaResponse>> {
        self.inner
            .execute_json(crate::info::TARGET_PREFIX, "DescribeInterconnectLoa", &req, options)
            .await
    }

    async fn describe_interconnects(
        &self,
        req: crate::model::DescribeInterconnectsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Interconnects>> {
        self.inner
            .execute_json(crate::info::TARGET_PREFIX, "DescribeInterconnects", &req, options)
            .await
    }

    async fn describe_locations(
        &self,
        req: crate::model::DescribeLocationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Locations>> {
        self.inner
            .execute_json(crate::info::TARGET_PREFIX, "DescribeLocations", &req, options)
            .await
    }

    async fn describe_virtual_gateways(
        &self,
        req: crate::model::DescribeVirtualGatewaysRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::VirtualGateways>> {
        self.inner
            .execute_json(crate::info::TARGET_PREFIX, "DescribeVirtualGateways", &req, options)
            .await
    }

    async fn describe_virtual_interfaces(
        &self,
        req: crate::model::DescribeVirtualInterfacesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::VirtualInterfaces>> {
        self.inner
            .execute_json(crate::info::TARGET_PREFIX, "DescribeVirtualInterfaces", &req, options)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn debug() -> anyhow::Result<()> {
        let mut config = gaxi::options::ClientConfig::default();
        config.endpoint = Some("http://127.0.0.1:1".to_string());
        let transport = DirectConnect::new(config).await?;
        let got = format!("{transport:?}");
        assert!(got.contains("DirectConnect"), "{got}");
        assert!(got.contains("inner"), "{got}");
        Ok(())
    }
}
