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
use gaxi::query::QueryPayload;

/// Implements [Ec2](super::stub::Ec2) using a [gaxi::http::HttpClient].
#[derive(Clone)]
pub struct Ec2 {
    inner: gaxi::http::HttpClient,
}

impl std::fmt::Debug for Ec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Ec2").field("inner", &self.inner).finish()
    }
}

impl Ec2 {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner =
            gaxi::http::HttpClient::new(config, &crate::info::INSTRUMENTATION_CLIENT_INFO).await?;
        Ok(Self { inner })
    }
}

impl super::stub::Ec2 for Ec2 {
    async fn attach_vpn_gateway(
        &self,
        req: crate::model::AttachVpnGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AttachVpnGatewayResponse>> {
        let payload = attach_vpn_gateway_payload(&req);
        self.inner
            .execute_query("AttachVpnGateway", payload, options)
            .await
    }

    async fn detach_vpn_gateway(
        &self,
        req: crate::model::DetachVpnGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DetachVpnGatewayResponse>> {
        let payload = detach_vpn_gateway_payload(&req);
        self.inner
            .execute_query("DetachVpnGateway", payload, options)
            .await
    }
}

fn attach_vpn_gateway_payload(req: &crate::model::AttachVpnGatewayRequest) -> String {
    QueryPayload::new("AttachVpnGateway")
        .add("DryRun", &req.dry_run)
        .add("VpnGatewayId", &req.vpn_gateway_id)
        .add("VpcId", &req.vpc_id)
        .finish(crate::info::API_VERSION)
}

fn detach_vpn_gateway_payload(req: &crate::model::DetachVpnGatewayRequest) -> String {
    QueryPayload::new("DetachVpnGateway")
        .add("DryRun", &req.dry_run)
        .add("VpnGatewayId", &req.vpn_gateway_id)
        .add("VpcId", &req.vpc_id)
        .finish(crate::info::API_VERSION)
}
