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

pub mod ec2 {
    use crate::Result;
    use gax::executor::{AsyncCallerContext, Deferred, SharedExecutor};
    use std::sync::Arc;

    /// A builder for [Ec2][crate::client::Ec2].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use ctrlplane_ec2::*;
    /// # use builder::ec2::ClientBuilder;
    /// # use client::Ec2;
    /// let builder : ClientBuilder = Ec2::builder();
    /// let client = builder
    ///     .with_region("eu-west-1")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Signer>;

    pub(crate) mod client {
        use super::super::super::client::Ec2;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Ec2;
            type Signer = gaxi::options::Signer;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::Ec2] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn super::super::stub::dynamic::Ec2>,
        executor: SharedExecutor,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::Ec2>,
            executor: SharedExecutor,
        ) -> Self {
            Self {
                stub,
                executor,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }

        fn client(&self) -> crate::client::Ec2 {
            crate::client::Ec2::from_parts(self.stub.clone(), self.executor.clone())
        }
    }

    /// The request builder for [Ec2::attach_vpn_gateway][crate::client::Ec2::attach_vpn_gateway] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_ec2::builder::ec2::AttachVpnGateway;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> AttachVpnGateway {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct AttachVpnGateway(RequestBuilder<crate::model::AttachVpnGatewayRequest>);

    impl AttachVpnGateway {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::Ec2>,
            executor: SharedExecutor,
        ) -> Self {
            Self(RequestBuilder::new(stub, executor))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AttachVpnGatewayRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AttachVpnGatewayResponse> {
            (*self.0.stub)
                .attach_vpn_gateway(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request in the background.
        ///
        /// The request runs on the client's executor. The returned value
        /// resolves to the outcome of the request.
        pub fn send_deferred(self) -> Deferred<crate::model::AttachVpnGatewayResponse> {
            let executor = self.0.executor.clone();
            gax::executor::internal::defer(&executor, self.send())
        }

        /// Sends the request in the background and calls `handler` with the
        /// outcome.
        pub fn send_with_handler<H>(self, handler: H, context: Option<Arc<AsyncCallerContext>>)
        where
            H: FnOnce(
                    &crate::client::Ec2,
                    &crate::model::AttachVpnGatewayRequest,
                    Result<crate::model::AttachVpnGatewayResponse>,
                    Option<Arc<AsyncCallerContext>>,
                ) + Send
                + 'static,
        {
            let executor = self.0.executor.clone();
            let client = self.0.client();
            let request = self.0.request.clone();
            gax::executor::internal::submit(&executor, self.send(), move |outcome| {
                handler(&client, &request, outcome, context)
            });
        }

        /// Sets the value of [dry_run][crate::model::AttachVpnGatewayRequest::dry_run].
        pub fn set_dry_run<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.dry_run = Some(v.into());
            self
        }

        /// Sets or clears the value of [dry_run][crate::model::AttachVpnGatewayRequest::dry_run].
        pub fn set_or_clear_dry_run<T: Into<bool>>(mut self, v: Option<T>) -> Self {
            self.0.request.dry_run = v.map(|x| x.into());
            self
        }

        /// Sets the value of [vpn_gateway_id][crate::model::AttachVpnGatewayRequest::vpn_gateway_id].
        pub fn set_vpn_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.vpn_gateway_id = Some(v.into());
            self
        }

        /// Sets the value of [vpc_id][crate::model::AttachVpnGatewayRequest::vpc_id].
        pub fn set_vpc_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.vpc_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for AttachVpnGateway {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Ec2::detach_vpn_gateway][crate::client::Ec2::detach_vpn_gateway] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_ec2::builder::ec2::DetachVpnGateway;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DetachVpnGateway {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DetachVpnGateway(RequestBuilder<crate::model::DetachVpnGatewayRequest>);

    impl DetachVpnGateway {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::Ec2>,
            executor: SharedExecutor,
        ) -> Self {
            Self(RequestBuilder::new(stub, executor))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DetachVpnGatewayRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DetachVpnGatewayResponse> {
            (*self.0.stub)
                .detach_vpn_gateway(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request in the background.
        pub fn send_deferred(self) -> Deferred<crate::model::DetachVpnGatewayResponse> {
            let executor = self.0.executor.clone();
            gax::executor::internal::defer(&executor, self.send())
        }

        /// Sends the request in the background and calls `handler` with the
        /// outcome.
        pub fn send_with_handler<H>(self, handler: H, context: Option<Arc<AsyncCallerContext>>)
        where
            H: FnOnce(
                    &crate::client::Ec2,
                    &crate::model::DetachVpnGatewayRequest,
                    Result<crate::model::DetachVpnGatewayResponse>,
                    Option<Arc<AsyncCallerContext>>,
                ) + Send
                + 'static,
        {
            let executor = self.0.executor.clone();
            let client = self.0.client();
            let request = self.0.request.clone();
            gax::executor::internal::submit(&executor, self.send(), move |outcome| {
                handler(&client, &request, outcome, context)
            });
        }

        /// Sets the value of [dry_run][crate::model::DetachVpnGatewayRequest::dry_run].
        pub fn set_dry_run<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.dry_run = Some(v.into());
            self
        }

        /// Sets or clears the value of [dry_run][crate::model::DetachVpnGatewayRequest::dry_run].
        pub fn set_or_clear_dry_run<T: Into<bool>>(mut self, v: Option<T>) -> Self {
            self.0.request.dry_run = v.map(|x| x.into());
            self
        }

        /// Sets the value of [vpn_gateway_id][crate::model::DetachVpnGatewayRequest::vpn_gateway_id].
        pub fn set_vpn_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.vpn_gateway_id = Some(v.into());
            self
        }

        /// Sets the value of [vpc_id][crate::model::DetachVpnGatewayRequest::vpc_id].
        pub fn set_vpc_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.vpc_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DetachVpnGateway {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
