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

/// A dyn-compatible, crate-private version of [super::Ec2].
#[async_trait::async_trait]
pub trait Ec2: std::fmt::Debug + Send + Sync {
    async fn attach_vpn_gateway(
        &self,
        req: crate::model::AttachVpnGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AttachVpnGatewayResponse>>;

    async fn detach_vpn_gateway(
        &self,
        req: crate::model::DetachVpnGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DetachVpnGatewayResponse>>;
}

/// All implementations of [super::Ec2] also implement [Ec2].
#[async_trait::async_trait]
impl<T: super::Ec2> Ec2 for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn attach_vpn_gateway(
        &self,
        req: crate::model::AttachVpnGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AttachVpnGatewayResponse>> {
        T::attach_vpn_gateway(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn detach_vpn_gateway(
        &self,
        req: crate::model::DetachVpnGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DetachVpnGatewayResponse>> {
        T::detach_vpn_gateway(self, req, options).await
    }
}
