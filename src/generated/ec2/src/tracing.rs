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

/// Implements a [Ec2](super::stub::Ec2) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct Ec2<T>
where
    T: super::stub::Ec2 + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> Ec2<T>
where
    T: super::stub::Ec2 + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::Ec2 for Ec2<T>
where
    T: super::stub::Ec2 + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = "debug", ret)]
    async fn attach_vpn_gateway(
        &self,
        req: crate::model::AttachVpnGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AttachVpnGatewayResponse>> {
        self.inner.attach_vpn_gateway(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn detach_vpn_gateway(
        &self,
        req: crate::model::DetachVpnGatewayRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DetachVpnGatewayResponse>> {
        self.inner.detach_vpn_gateway(req, options).await
    }
}
