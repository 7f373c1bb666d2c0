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

pub mod direct_connect {
    use crate::Result;
    use gax::executor::{AsyncCallerContext, Deferred, SharedExecutor};
    use std::sync::Arc;

    /// A builder for [DirectConnect][crate::client::DirectConnect].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use ctrlplane_directconnect::*;
    /// # use builder::direct_connect::ClientBuilder;
    /// # use client::DirectConnect;
    /// let builder : ClientBuilder = DirectConnect::builder();
    /// let client = builder
    ///     .with_region("us-west-2")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Signer>;

    pub(crate) mod client {
        use super::super::super::client::DirectConnect;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = DirectConnect;
            type Signer = gaxi::options::Signer;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::DirectConnect] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn super::super::stub::dynamic::DirectConnect>,
        executor: SharedExecutor,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::DirectConnect>,
            executor: SharedExecutor,
        ) -> Self {
            Self {
                stub,
                executor,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }

        fn client(&self) -> crate::client::DirectConnect {
            crate::client::DirectConnect::from_parts(self.stub.clone(), self.executor.clone())
        }
    }

    /// The request builder for [DirectConnect::allocate_connection_on_interconnect][crate::client::DirectConnect::allocate_connection_on_interconnect] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_directconnect::builder::direct_connect::AllocateConnectionOnInterconnect;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> AllocateConnectionOnInterconnect {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct AllocateConnectionOnInterconnect(RequestBuilder<crate::model::AllocateConnectionOnInterconnectRequest>);

    impl AllocateConnectionOnInterconnect {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::DirectConnect>,
            executor: SharedExecutor,
        ) -> Self {
            Self(RequestBuilder::new(stub, executor))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AllocateConnectionOnInterconnectRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Connection> {
            (*self.0.stub)
                .allocate_connection_on_interconnect(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request in the background.
        ///
        /// The request runs on the client's executor. The returned value
        /// resolves to the outcome of the request.
        pub fn send_deferred(self) -> Deferred<crate::model::Connection> {
            let executor = self.0.executor.clone();
            gax::executor::internal::defer(&executor, self.send())
        }

        /// Sends the request in the background and calls `handler` with the
        /// outcome.
        pub fn send_with_handler<H>(self, handler: H, context: Option<Arc<AsyncCallerContext>>)
        where
            H: FnOnce(
                    &crate::client::DirectConnect,
                    &crate::model::AllocateConnectionOnInterconnectRequest,
                    Result<crate::model::Connection>,
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

        /// Sets the value of [bandwidth][crate::model::AllocateConnectionOnInterconnectRequest::bandwidth].
        pub fn set_bandwidth<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.bandwidth = Some(v.into());
            self
        }

        /// Sets or clears the value of [bandwidth][crate::model::AllocateConnectionOnInterconnectRequest::bandwidth].
        pub fn set_or_clear_bandwidth<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.bandwidth = v.map(|x| x.into());
            self
        }

        /// Sets the value of [connection_name][crate::model::AllocateConnectionOnInterconnectRequest::connection_name].
        pub fn set_connection_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.connection_name = Some(v.into());
            self
        }

        /// Sets or clears the value of [connection_name][crate::model::AllocateConnectionOnInterconnectRequest::connection_name].
        pub fn set_or_clear_connection_name<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.connection_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [owner_account][crate::model::AllocateConnectionOnInterconnectRequest::owner_account].
        pub fn set_owner_account<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.owner_account = Some(v.into());
            self
        }

        /// Sets or clears the value of [owner_account][crate::model::AllocateConnectionOnInterconnectRequest::owner_account].
        pub fn set_or_clear_owner_account<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.owner_account = v.map(|x| x.into());
            self
        }

        /// Sets the value of [interconnect_id][crate::model::AllocateConnectionOnInterconnectRequest::interconnect_id].
        pub fn set_interconnect_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.interconnect_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [interconnect_id][crate::model::AllocateConnectionOnInterconnectRequest::interconnect_id].
        pub fn set_or_clear_interconnect_id<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.interconnect_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [vlan][crate::model::AllocateConnectionOnInterconnectRequest::vlan].
        pub fn set_vlan<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.vlan = Some(v.into());
            self
        }

        /// Sets or clears the value of [vlan][crate::model::AllocateConnectionOnInterconnectRequest::vlan].
        pub fn set_or_clear_vlan<T: Into<i32>>(mut self, v: Option<T>) -> Self {
            self.0.request.vlan = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for AllocateConnectionOnInterconnect {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectConnect::allocate_private_virtual_interface][crate::client::DirectConnect::allocate_private_virtual_interface] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_directconnect::builder::direct_connect::AllocatePrivateVirtualInterface;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> AllocatePrivateVirtualInterface {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct AllocatePrivateVirtualInterface(RequestBuilder<crate::model::AllocatePrivateVirtualInterfaceRequest>);

    impl AllocatePrivateVirtualInterface {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::DirectConnect>,
            executor: SharedExecutor,
        ) -> Self {
            Self(RequestBuilder::new(stub, executor))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AllocatePrivateVirtualInterfaceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::VirtualInterface> {
            (*self.0.stub)
                .allocate_private_virtual_interface(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request in the background.
        pub fn send_deferred(self) -> Deferred<crate::model::VirtualInterface> {
            let executor = self.0.executor.clone();
            gax::executor::internal::defer(&executor, self.send())
        }

        /// Sends the request in the background and calls `handler` with the
        /// outcome.
        pub fn send_with_handler<H>(self, handler: H, context: Option<Arc<AsyncCallerContext>>)
        where
            H: FnOnce(
                    &crate::client::DirectConnect,
                    &crate::model::AllocatePrivateVirtualInterfaceRequest,
                    Result<crate::model::VirtualInterface>,
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

        /// Sets the value of [connection_id][crate::model::AllocatePrivateVirtualInterfaceRequest::connection_id].
        pub fn set_connection_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.connection_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [connection_id][crate::model::AllocatePrivateVirtualInterfaceRequest::connection_id].
        pub fn set_or_clear_connection_id<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.connection_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [owner_account][crate::model::AllocatePrivateVirtualInterfaceRequest::owner_account].
        pub fn set_owner_account<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.owner_account = Some(v.into());
            self
        }

        /// Sets or clears the value of [owner_account][crate::model::AllocatePrivateVirtualInterfaceRequest::owner_account].
        pub fn set_or_clear_owner_account<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.owner_account = v.map(|x| x.into());
            self
        }

        /// Sets the value of [new_private_virtual_interface_allocation][crate::model::AllocatePrivateVirtualInterfaceRequest::new_private_virtual_interface_allocation].
        pub fn set_new_private_virtual_interface_allocation<T: Into<crate::model::NewPrivateVirtualInterfaceAllocation>>(mut self, v: T) -> Self {
            self.0.request.new_private_virtual_interface_allocation = Some(v.into());
            self
        }

        /// Sets or clears the value of [new_private_virtual_interface_allocation][crate::model::AllocatePrivateVirtualInterfaceRequest::new_private_virtual_interface_allocation].
        pub fn set_or_clear_new_private_virtual_interface_allocation<T: Into<crate::model::NewPrivateVirtualInterfaceAllocation>>(mut self, v: Option<T>) -> Self {
            self.0.request.new_private_virtual_interface_allocation = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for AllocatePrivateVirtualInterface {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectConnect::allocate_public_virtual_interface][crate::client::DirectConnect::allocate_public_virtual_interface] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_directconnect::builder::direct_connect::AllocatePublicVirtualInterface;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> AllocatePublicVirtualInterface {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct AllocatePublicVirtualInterface(RequestBuilder<crate::model::AllocatePublicVirtualInterfaceRequest>);

    impl AllocatePublicVirtualInterface {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::DirectConnect>,
            executor: SharedExecutor,
        ) -> Self {
            Self(RequestBuilder::new(stub, executor))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AllocatePublicVirtualInterfaceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::VirtualInterface> {
            (*self.0.stub)
                .allocate_public_virtual_interface(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request in the background.
        pub fn send_deferred(self) -> Deferred<crate::model::VirtualInterface> {
            let executor = self.0.executor.clone();
            gax::executor::internal::defer(&executor, self.send())
        }

        /// Sends the request in the background and calls `handler` with the
        /// outcome.
        pub fn send_with_handler<H>(self, handler: H, context: Option<Arc<AsyncCallerContext>>)
        where
            H: FnOnce(
                    &crate::client::DirectConnect,
                    &crate::model::AllocatePublicVirtualInterfaceRequest,
                    Result<crate::model::VirtualInterface>,
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

        /// Sets the value of [connection_id][crate::model::AllocatePublicVirtualInterfaceRequest::connection_id].
        pub fn set_connection_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.connection_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [connection_id][crate::model::AllocatePublicVirtualInterfaceRequest::connection_id].
        pub fn set_or_clear_connection_id<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.connection_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [owner_account][crate::model::AllocatePublicVirtualInterfaceRequest::owner_account].
        pub fn set_owner_account<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.owner_account = Some(v.into());
            self
        }

        /// Sets or clears the value of [owner_account][crate::model::AllocatePublicVirtualInterfaceRequest::owner_account].
        pub fn set_or_clear_owner_account<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.owner_account = v.map(|x| x.into());
            self
        }

        /// Sets the value of [new_public_virtual_interface_allocation][crate::model::AllocatePublicVirtualInterfaceRequest::new_public_virtual_interface_allocation].
        pub fn set_new_public_virtual_interface_allocation<T: Into<crate::model::NewPublicVirtualInterfaceAllocation>>(mut self, v: T) -> Self {
            self.0.request.new_public_virtual_interface_allocation = Some(v.into());
            self
        }

        /// Sets or clears the value of [new_public_virtual_interface_allocation][crate::model::AllocatePublicVirtualInterfaceRequest::new_public_virtual_interface_allocation].
        pub fn set_or_clear_new_public_virtual_interface_allocation<T: Into<crate::model::NewPublicVirtualInterfaceAllocation>>(mut self, v: Option<T>) -> Self {
            self.0.request.new_public_virtual_interface_allocation = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for AllocatePublicVirtualInterface {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectConnect::confirm_connection][crate::client::DirectConnect::confirm_connection] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_directconnect::builder::direct_connect::ConfirmConnection;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ConfirmConnection {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ConfirmConnection(RequestBuilder<crate::model::ConfirmConnectionRequest>);

    impl ConfirmConnection {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::DirectConnect>,
            executor: SharedExecutor,
        ) -> Self {
            Self(RequestBuilder::new(stub, executor))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ConfirmConnectionRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ConfirmConnectionResponse> {
            (*self.0.stub)
                .confirm_connection(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request in the background.
        pub fn send_deferred(self) -> Deferred<crate::model::ConfirmConnectionResponse> {
            let executor = self.0.executor.clone();
            gax::executor::internal::defer(&executor, self.send())
        }

        /// Sends the request in the background and calls `handler` with the
        /// outcome.
        pub fn send_with_handler<H>(self, handler: H, context: Option<Arc<AsyncCallerContext>>)
        where
            H: FnOnce(
                    &crate::client::DirectConnect,
                    &crate::model::ConfirmConnectionRequest,
                    Result<crate::model::ConfirmConnectionResponse>,
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

        /// Sets the value of [connection_id][crate::model::ConfirmConnectionRequest::connection_id].
        pub fn set_connection_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.connection_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [connection_id][crate::model::ConfirmConnectionRequest::connection_id].
        pub fn set_or_clear_connection_id<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.connection_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ConfirmConnection {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectConnect::confirm_private_virtual_interface][crate::client::DirectConnect::confirm_private_virtual_interface] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_directconnect::builder::direct_connect::ConfirmPrivateVirtualInterface;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ConfirmPrivateVirtualInterface {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ConfirmPrivateVirtualInterface(RequestBuilder<crate::model::ConfirmPrivateVirtualInterfaceRequest>);

    impl ConfirmPrivateVirtualInterface {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::DirectConnect>,
            executor: SharedExecutor,
        ) -> Self {
            Self(RequestBuilder::new(stub, executor))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ConfirmPrivateVirtualInterfaceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ConfirmPrivateVirtualInterfaceResponse> {
            (*self.0.stub)
                .confirm_private_virtual_interface(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request in the background.
        pub fn send_deferred(self) -> Deferred<crate::model::ConfirmPrivateVirtualInterfaceResponse> {
            let executor = self.0.executor.clone();
            gax::executor::internal::defer(&executor, self.send())
        }

        /// Sends the request in the background and calls `handler` with the
        /// outcome.
        pub fn send_with_handler<H>(self, handler: H, context: Option<Arc<AsyncCallerContext>>)
        where
            H: FnOnce(
                    &crate::client::DirectConnect,
                    &crate::model::ConfirmPrivateVirtualInterfaceRequest,
                    Result<crate::model::ConfirmPrivateVirtualInterfaceResponse>,
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

        /// Sets the value of [virtual_interface_id][crate::model::ConfirmPrivateVirtualInterfaceRequest::virtual_interface_id].
        pub fn set_virtual_interface_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.virtual_interface_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [virtual_interface_id][crate::model::ConfirmPrivateVirtualInterfaceRequest::virtual_interface_id].
        pub fn set_or_clear_virtual_interface_id<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.virtual_interface_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [virtual_gateway_id][crate::model::ConfirmPrivateVirtualInterfaceRequest::virtual_gateway_id].
        pub fn set_virtual_gateway_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.virtual_gateway_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [virtual_gateway_id][crate::model::ConfirmPrivateVirtualInterfaceRequest::virtual_gateway_id].
        pub fn set_or_clear_virtual_gateway_id<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.virtual_gateway_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ConfirmPrivateVirtualInterface {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectConnect::confirm_public_virtual_interface][crate::client::DirectConnect::confirm_public_virtual_interface] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_directconnect::builder::direct_connect::ConfirmPublicVirtualInterface;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ConfirmPublicVirtualInterface {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ConfirmPublicVirtualInterface(RequestBuilder<crate::model::ConfirmPublicVirtualInterfaceRequest>);

    impl ConfirmPublicVirtualInterface {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::DirectConnect>,
            executor: SharedExecutor,
        ) -> Self {
            Self(RequestBuilder::new(stub, executor))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ConfirmPublicVirtualInterfaceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ConfirmPublicVirtualInterfaceResponse> {
            (*self.0.stub)
                .confirm_public_virtual_interface(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request in the background.
        pub fn send_deferred(self) -> Deferred<crate::model::ConfirmPublicVirtualInterfaceResponse> {
            let executor = self.0.executor.clone();
            gax::executor::internal::defer(&executor, self.send())
        }

        /// Sends the request in the background and calls `handler` with the
        /// outcome.
        pub fn send_with_handler<H>(self, handler: H, context: Option<Arc<AsyncCallerContext>>)
        where
            H: FnOnce(
                    &crate::client::DirectConnect,
                    &crate::model::ConfirmPublicVirtualInterfaceRequest,
                    Result<crate::model::ConfirmPublicVirtualInterfaceResponse>,
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

        /// Sets the value of [virtual_interface_id][crate::model::ConfirmPublicVirtualInterfaceRequest::virtual_interface_id].
        pub fn set_virtual_interface_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.virtual_interface_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [virtual_interface_id][crate::model::ConfirmPublicVirtualInterfaceRequest::virtual_interface_id].
        pub fn set_or_clear_virtual_interface_id<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.virtual_interface_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ConfirmPublicVirtualInterface {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectConnect::create_connection][crate::client::DirectConnect::create_connection] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_directconnect::builder::direct_connect::CreateConnection;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateConnection {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateConnection(RequestBuilder<crate::model::CreateConnectionRequest>);

    impl CreateConnection {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::DirectConnect>,
            executor: SharedExecutor,
        ) -> Self {
            Self(RequestBuilder::new(stub, executor))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateConnectionRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Connection> {
            (*self.0.stub)
                .create_connection(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request in the background.
        pub fn send_deferred(self) -> Deferred<crate::model::Connection> {
            let executor = self.0.executor.clone();
            gax::executor::internal::defer(&executor, self.send())
        }

        /// Sends the request in the background and calls `handler` with the
        /// outcome.
        pub fn send_with_handler<H>(self, handler: H, context: Option<Arc<AsyncCallerContext>>)
        where
            H: FnOnce(
                    &crate::client::DirectConnect,
                    &crate::model::CreateConnectionRequest,
                    Result<crate::model::Connection>,
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

        /// Sets the value of [location][crate::model::CreateConnectionRequest::location].
        pub fn set_location<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.location = Some(v.into());
            self
        }

        /// Sets or clears the value of [location][crate::model::CreateConnectionRequest::location].
        pub fn set_or_clear_location<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.location = v.map(|x| x.into());
            self
        }

        /// Sets the value of [bandwidth][crate::model::CreateConnectionRequest::bandwidth].
        pub fn set_bandwidth<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.bandwidth = Some(v.into());
            self
        }

        /// Sets or clears the value of [bandwidth][crate::model::CreateConnectionRequest::bandwidth].
        pub fn set_or_clear_bandwidth<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.bandwidth = v.map(|x| x.into());
            self
        }

        /// Sets the value of [connection_name][crate::model::CreateConnectionRequest::connection_name].
        pub fn set_connection_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.connection_name = Some(v.into());
            self
        }

        /// Sets or clears the value of [connection_name][crate::model::CreateConnectionRequest::connection_name].
        pub fn set_or_clear_connection_name<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.connection_name = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateConnection {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectConnect::create_interconnect][crate::client::DirectConnect::create_interconnect] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_directconnect::builder::direct_connect::CreateInterconnect;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateInterconnect {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateInterconnect(RequestBuilder<crate::model::CreateInterconnectRequest>);

    impl CreateInterconnect {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::DirectConnect>,
            executor: SharedExecutor,
        ) -> Self {
            Self(RequestBuilder::new(stub, executor))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateInterconnectRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Interconnect> {
            (*self.0.stub)
                .create_interconnect(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request in the background.
        pub fn send_deferred(self) -> Deferred<crate::model::Interconnect> {
            let executor = self.0.executor.clone();
            gax::executor::internal::defer(&executor, self.send())
        }

        /// Sends the request in the background and calls `handler` with the
        /// outcome.
        pub fn send_with_handler<H>(self, handler: H, context: Option<Arc<AsyncCallerContext>>)
        where
            H: FnOnce(
                    &crate::client::DirectConnect,
                    &crate::model::CreateInterconnectRequest,
                    Result<crate::model::Interconnect>,
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

        /// Sets the value of [interconnect_name][crate::model::CreateInterconnectRequest::interconnect_name].
        pub fn set_interconnect_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.interconnect_name = Some(v.into());
            self
        }

        /// Sets or clears the value of [interconnect_name][crate::model::CreateInterconnectRequest::interconnect_name].
        pub fn set_or_clear_interconnect_name<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.interconnect_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [bandwidth][crate::model::CreateInterconnectRequest::bandwidth].
        pub fn set_bandwidth<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.bandwidth = Some(v.into());
            self
        }

        /// Sets or clears the value of [bandwidth][crate::model::CreateInterconnectRequest::bandwidth].
        pub fn set_or_clear_bandwidth<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.bandwidth = v.map(|x| x.into());
            self
        }

        /// Sets the value of [location][crate::model::CreateInterconnectRequest::location].
        pub fn set_location<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.location = Some(v.into());
            self
        }

        /// Sets or clears the value of [location][crate::model::CreateInterconnectRequest::location].
        pub fn set_or_clear_location<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.location = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateInterconnect {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectConnect::create_private_virtual_interface][crate::client::DirectConnect::create_private_virtual_interface] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_directconnect::builder::direct_connect::CreatePrivateVirtualInterface;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreatePrivateVirtualInterface {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreatePrivateVirtualInterface(RequestBuilder<crate::model::CreatePrivateVirtualInterfaceRequest>);

    impl CreatePrivateVirtualInterface {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::DirectConnect>,
            executor: SharedExecutor,
        ) -> Self {
            Self(RequestBuilder::new(stub, executor))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreatePrivateVirtualInterfaceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::VirtualInterface> {
            (*self.0.stub)
                .create_private_virtual_interface(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request in the background.
        pub fn send_deferred(self) -> Deferred<crate::model::VirtualInterface> {
            let executor = self.0.executor.clone();
            gax::executor::internal::defer(&executor, self.send())
        }

        /// Sends the request in the background and calls `handler` with the
        /// outcome.
        pub fn send_with_handler<H>(self, handler: H, context: Option<Arc<AsyncCallerContext>>)
        where
            H: FnOnce(
                    &crate::client::DirectConnect,
                    &crate::model::CreatePrivateVirtualInterfaceRequest,
                    Result<crate::model::VirtualInterface>,
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

        /// Sets the value of [connection_id][crate::model::CreatePrivateVirtualInterfaceRequest::connection_id].
        pub fn set_connection_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.connection_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [connection_id][crate::model::CreatePrivateVirtualInterfaceRequest::connection_id].
        pub fn set_or_clear_connection_id<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.connection_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [new_private_virtual_interface][crate::model::CreatePrivateVirtualInterfaceRequest::new_private_virtual_interface].
        pub fn set_new_private_virtual_interface<T: Into<crate::model::NewPrivateVirtualInterface>>(mut self, v: T) -> Self {
            self.0.request.new_private_virtual_interface = Some(v.into());
            self
        }

        /// Sets or clears the value of [new_private_virtual_interface][crate::model::CreatePrivateVirtualInterfaceRequest::new_private_virtual_interface].
        pub fn set_or_clear_new_private_virtual_interface<T: Into<crate::model::NewPrivateVirtualInterface>>(mut self, v: Option<T>) -> Self {
            self.0.request.new_private_virtual_interface = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreatePrivateVirtualInterface {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectConnect::create_public_virtual_interface][crate::client::DirectConnect::create_public_virtual_interface] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_directconnect::builder::direct_connect::CreatePublicVirtualInterface;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreatePublicVirtualInterface {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreatePublicVirtualInterface(RequestBuilder<crate::model::CreatePublicVirtualInterfaceRequest>);

    impl CreatePublicVirtualInterface {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::DirectConnect>,
            executor: SharedExecutor,
        ) -> Self {
            Self(RequestBuilder::new(stub, executor))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreatePublicVirtualInterfaceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::VirtualInterface> {
            (*self.0.stub)
                .create_public_virtual_interface(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request in the background.
        pub fn send_deferred(self) -> Deferred<crate::model::VirtualInterface> {
            let executor = self.0.executor.clone();
            gax::executor::internal::defer(&executor, self.send())
        }

        /// Sends the request in the background and calls `handler` with the
        /// outcome.
        pub fn send_with_handler<H>(self, handler: H, context: Option<Arc<AsyncCallerContext>>)
        where
            H: FnOnce(
                    &crate::client::DirectConnect,
                    &crate::model::CreatePublicVirtualInterfaceRequest,
                    Result<crate::model::VirtualInterface>,
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

        /// Sets the value of [connection_id][crate::model::CreatePublicVirtualInterfaceRequest::connection_id].
        pub fn set_connection_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.connection_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [connection_id][crate::model::CreatePublicVirtualInterfaceRequest::connection_id].
        pub fn set_or_clear_connection_id<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.connection_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [new_public_virtual_interface][crate::model::CreatePublicVirtualInterfaceRequest::new_public_virtual_interface].
        pub fn set_new_public_virtual_interface<T: Into<crate::model::NewPublicVirtualInterface>>(mut self, v: T) -> Self {
            self.0.request.new_public_virtual_interface = Some(v.into());
            self
        }

        /// Sets or clears the value of [new_public_virtual_interface][crate::model::CreatePublicVirtualInterfaceRequest::new_public_virtual_interface].
        pub fn set_or_clear_new_public_virtual_interface<T: Into<crate::model::NewPublicVirtualInterface>>(mut self, v: Option<T>) -> Self {
            self.0.request.new_public_virtual_interface = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreatePublicVirtualInterface {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectConnect::delete_connection][crate::client::DirectConnect::delete_connection] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_directconnect::builder::direct_connect::DeleteConnection;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteConnection {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteConnection(RequestBuilder<crate::model::DeleteConnectionRequest>);

    impl DeleteConnection {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::DirectConnect>,
            executor: SharedExecutor,
        ) -> Self {
            Self(RequestBuilder::new(stub, executor))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteConnectionRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Connection> {
            (*self.0.stub)
                .delete_connection(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request in the background.
        pub fn send_deferred(self) -> Deferred<crate::model::Connection> {
            let executor = self.0.executor.clone();
            gax::executor::internal::defer(&executor, self.send())
        }

        /// Sends the request in the background and calls `handler` with the
        /// outcome.
        pub fn send_with_handler<H>(self, handler: H, context: Option<Arc<AsyncCallerContext>>)
        where
            H: FnOnce(
                    &crate::client::DirectConnect,
                    &crate::model::DeleteConnectionRequest,
                    Result<crate::model::Connection>,
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

        /// Sets the value of [connection_id][crate::model::DeleteConnectionRequest::connection_id].
        pub fn set_connection_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.connection_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [connection_id][crate::model::DeleteConnectionRequest::connection_id].
        pub fn set_or_clear_connection_id<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.connection_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteConnection {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectConnect::delete_interconnect][crate::client::DirectConnect::delete_interconnect] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_directconnect::builder::direct_connect::DeleteInterconnect;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteInterconnect {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteInterconnect(RequestBuilder<crate::model::DeleteInterconnectRequest>);

    impl DeleteInterconnect {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::DirectConnect>,
            executor: SharedExecutor,
        ) -> Self {
            Self(RequestBuilder::new(stub, executor))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteInterconnectRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DeleteInterconnectResponse> {
            (*self.0.stub)
                .delete_interconnect(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request in the background.
        pub fn send_deferred(self) -> Deferred<crate::model::DeleteInterconnectResponse> {
            let executor = self.0.executor.clone();
            gax::executor::internal::defer(&executor, self.send())
        }

        /// Sends the request in the background and calls `handler` with the
        /// outcome.
        pub fn send_with_handler<H>(self, handler: H, context: Option<Arc<AsyncCallerContext>>)
        where
            H: FnOnce(
                    &crate::client::DirectConnect,
                    &crate::model::DeleteInterconnectRequest,
                    Result<crate::model::DeleteInterconnectResponse>,
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

        /// Sets the value of [interconnect_id][crate::model::DeleteInterconnectRequest::interconnect_id].
        pub fn set_interconnect_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.interconnect_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [interconnect_id][crate::model::DeleteInterconnectRequest::interconnect_id].
        pub fn set_or_clear_interconnect_id<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.interconnect_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteInterconnect {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectConnect::delete_virtual_interface][crate::client::DirectConnect::delete_virtual_interface] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_directconnect::builder::direct_connect::DeleteVirtualInterface;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteVirtualInterface {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteVirtualInterface(RequestBuilder<crate::model::DeleteVirtualInterfaceRequest>);

    impl DeleteVirtualInterface {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::DirectConnect>,
            executor: SharedExecutor,
        ) -> Self {
            Self(RequestBuilder::new(stub, executor))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteVirtualInterfaceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DeleteVirtualInterfaceResponse> {
            (*self.0.stub)
                .delete_virtual_interface(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request in the background.
        pub fn send_deferred(self) -> Deferred<crate::model::DeleteVirtualInterfaceResponse> {
            let executor = self.0.executor.clone();
            gax::executor::internal::defer(&executor, self.send())
        }

        /// Sends the request in the background and calls `handler` with the
        /// outcome.
        pub fn send_with_handler<H>(self, handler: H, context: Option<Arc<AsyncCallerContext>>)
        where
            H: FnOnce(
                    &crate::client::DirectConnect,
                    &crate::model::DeleteVirtualInterfaceRequest,
                    Result<crate::model::DeleteVirtualInterfaceResponse>,
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

        /// Sets the value of [virtual_interface_id][crate::model::DeleteVirtualInterfaceRequest::virtual_interface_id].
        pub fn set_virtual_interface_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.virtual_interface_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [virtual_interface_id][crate::model::DeleteVirtualInterfaceRequest::virtual_interface_id].
        pub fn set_or_clear_virtual_interface_id<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.virtual_interface_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteVirtualInterface {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectConnect::describe_connection_loa][crate::client::DirectConnect::describe_connection_loa] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_directconnect::builder::direct_connect::DescribeConnectionLoa;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeConnectionLoa {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeConnectionLoa(RequestBuilder<crate::model::DescribeConnectionLoaRequest>);

    impl DescribeConnectionLoa {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::DirectConnect>,
            executor: SharedExecutor,
        ) -> Self {
            Self(RequestBuilder::new(stub, executor))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeConnectionLoaRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DescribeConnectionLoaResponse> {
            (*self.0.stub)
                .describe_connection_loa(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request in the background.
        pub fn send_deferred(self) -> Deferred<crate::model::DescribeConnectionLoaResponse> {
            let executor = self.0.executor.clone();
            gax::executor::internal::defer(&executor, self.send())
        }

        /// Sends the request in the background and calls `handler` with the
        /// outcome.
        pub fn send_with_handler<H>(self, handler: H, context: Option<Arc<AsyncCallerContext>>)
        where
            H: FnOnce(
                    &crate::client::DirectConnect,
                    &crate::model::DescribeConnectionLoaRequest,
                    Result<crate::model::DescribeConnectionLoaResponse>,
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

        /// Sets the value of [connection_id][crate::model::DescribeConnectionLoaRequest::connection_id].
        pub fn set_connection_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.connection_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [connection_id][crate::model::DescribeConnectionLoaRequest::connection_id].
        pub fn set_or_clear_connection_id<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.connection_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [provider_name][crate::model::DescribeConnectionLoaRequest::provider_name].
        pub fn set_provider_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.provider_name = Some(v.into());
            self
        }

        /// Sets or clears the value of [provider_name][crate::model::DescribeConnectionLoaRequest::provider_name].
        pub fn set_or_clear_provider_name<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.provider_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [loa_content_type][crate::model::DescribeConnectionLoaRequest::loa_content_type].
        pub fn set_loa_content_type<T: Into<crate::model::LoaContentType>>(mut self, v: T) -> Self {
            self.0.request.loa_content_type = Some(v.into());
            self
        }

        /// Sets or clears the value of [loa_content_type][crate::model::DescribeConnectionLoaRequest::loa_content_type].
        pub fn set_or_clear_loa_content_type<T: Into<crate::model::LoaContentType>>(mut self, v: Option<T>) -> Self {
            self.0.request.loa_content_type = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeConnectionLoa {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectConnect::describe_connections][crate::client::DirectConnect::describe_connections] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_directconnect::builder::direct_connect::DescribeConnections;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeConnections {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeConnections(RequestBuilder<crate::model::DescribeConnectionsRequest>);

    impl DescribeConnections {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::DirectConnect>,
            executor: SharedExecutor,
        ) -> Self {
            Self(RequestBuilder::new(stub, executor))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeConnectionsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Connections> {
            (*self.0.stub)
                .describe_connections(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request in the background.
        pub fn send_deferred(self) -> Deferred<crate::model::Connections> {
            let executor = self.0.executor.clone();
            gax::executor::internal::defer(&executor, self.send())
        }

        /// Sends the request in the background and calls `handler` with the
        /// outcome.
        pub fn send_with_handler<H>(self, handler: H, context: Option<Arc<AsyncCallerContext>>)
        where
            H: FnOnce(
                    &crate::client::DirectConnect,
                    &crate::model::DescribeConnectionsRequest,
                    Result<crate::model::Connections>,
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

        /// Sets the value of [connection_id][crate::model::DescribeConnectionsRequest::connection_id].
        pub fn set_connection_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.connection_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [connection_id][crate::model::DescribeConnectionsRequest::connection_id].
        pub fn set_or_clear_connection_id<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.connection_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeConnections {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectConnect::describe_connections_on_interconnect][crate::client::DirectConnect::describe_connections_on_interconnect] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_directconnect::builder::direct_connect::DescribeConnectionsOnInterconnect;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeConnectionsOnInterconnect {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeConnectionsOnInterconnect(RequestBuilder<crate::model::DescribeConnectionsOnInterconnectRequest>);

    impl DescribeConnectionsOnInterconnect {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::DirectConnect>,
            executor: SharedExecutor,
        ) -> Self {
            Self(RequestBuilder::new(stub, executor))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeConnectionsOnInterconnectRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Connections> {
            (*self.0.stub)
                .describe_connections_on_interconnect(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request in the background.
        pub fn send_deferred(self) -> Deferred<crate::model::Connections> {
            let executor = self.0.executor.clone();
            gax::executor::internal::defer(&executor, self.send())
        }

        /// Sends the request in the background and calls `handler` with the
        /// outcome.
        pub fn send_with_handler<H>(self, handler: H, context: Option<Arc<AsyncCallerContext>>)
        where
            H: FnOnce(
                    &crate::client::DirectConnect,
                    &crate::model::DescribeConnectionsOnInterconnectRequest,
                    Result<crate::model::Connections>,
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

        /// Sets the value of [interconnect_id][crate::model::DescribeConnectionsOnInterconnectRequest::interconnect_id].
        pub fn set_interconnect_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.interconnect_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [interconnect_id][crate::model::DescribeConnectionsOnInterconnectRequest::interconnect_id].
        pub fn set_or_clear_interconnect_id<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.interconnect_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeConnectionsOnInterconnect {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectConnect::describe_interconnect_loa][crate::client::DirectConnect::describe_interconnect_loa] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_directconnect::builder::direct_connect::DescribeInterconnectLoa;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeInterconnectLoa {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeInterconnectLoa(RequestBuilder<crate::model::DescribeInterconnectLoaRequest>);

    impl DescribeInterconnectLoa {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::DirectConnect>,
            executor: SharedExecutor,
        ) -> Self {
            Self(RequestBuilder::new(stub, executor))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeInterconnectLoaRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DescribeInterconnectLoaResponse> {
            (*self.0.stub)
                .describe_interconnect_loa(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request in the background.
        pub fn send_deferred(self) -> Deferred<crate::model::DescribeInterconnectLoaResponse> {
            let executor = self.0.executor.clone();
            gax::executor::internal::defer(&executor, self.send())
        }

        /// Sends the request in the background and calls `handler` with the
        /// outcome.
        pub fn send_with_handler<H>(self, handler: H, context: Option<Arc<AsyncCallerContext>>)
        where
            H: FnOnce(
                    &crate::client::DirectConnect,
                    &crate::model::DescribeInterconnectLoaRequest,
                    Result<crate::model::DescribeInterconnectLoaResponse>,
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

        /// Sets the value of [interconnect_id][crate::model::DescribeInterconnectLoaRequest::interconnect_id].
        pub fn set_interconnect_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.interconnect_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [interconnect_id][crate::model::DescribeInterconnectLoaRequest::interconnect_id].
        pub fn set_or_clear_interconnect_id<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.interconnect_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [provider_name][crate::model::DescribeInterconnectLoaRequest::provider_name].
        pub fn set_provider_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.provider_name = Some(v.into());
            self
        }

        /// Sets or clears the value of [provider_name][crate::model::DescribeInterconnectLoaRequest::provider_name].
        pub fn set_or_clear_provider_name<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.provider_name = v.map(|x| x.into());
            self
        }

        /// Sets the value of [loa_content_type][crate::model::DescribeInterconnectLoaRequest::loa_content_type].
        pub fn set_loa_content_type<T: Into<crate::model::LoaContentType>>(mut self, v: T) -> Self {
            self.0.request.loa_content_type = Some(v.into());
            self
        }

        /// Sets or clears the value of [loa_content_type][crate::model::DescribeInterconnectLoaRequest::loa_content_type].
        pub fn set_or_clear_loa_content_type<T: Into<crate::model::LoaContentType>>(mut self, v: Option<T>) -> Self {
            self.0.request.loa_content_type = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeInterconnectLoa {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectConnect::describe_interconnects][crate::client::DirectConnect::describe_interconnects] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_directconnect::builder::direct_connect::DescribeInterconnects;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeInterconnects {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeInterconnects(RequestBuilder<crate::model::DescribeInterconnectsRequest>);

    impl DescribeInterconnects {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::DirectConnect>,
            executor: SharedExecutor,
        ) -> Self {
            Self(RequestBuilder::new(stub, executor))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeInterconnectsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Interconnects> {
            (*self.0.stub)
                .describe_interconnects(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request in the background.
        pub fn send_deferred(self) -> Deferred<crate::model::Interconnects> {
            let executor = self.0.executor.clone();
            gax::executor::internal::defer(&executor, self.send())
        }

        /// Sends the request in the background and calls `handler` with the
        /// outcome.
        pub fn send_with_handler<H>(self, handler: H, context: Option<Arc<AsyncCallerContext>>)
        where
            H: FnOnce(
                    &crate::client::DirectConnect,
                    &crate::model::DescribeInterconnectsRequest,
                    Result<crate::model::Interconnects>,
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

        /// Sets the value of [interconnect_id][crate::model::DescribeInterconnectsRequest::interconnect_id].
        pub fn set_interconnect_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.interconnect_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [interconnect_id][crate::model::DescribeInterconnectsRequest::interconnect_id].
        pub fn set_or_clear_interconnect_id<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.interconnect_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeInterconnects {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectConnect::describe_locations][crate::client::DirectConnect::describe_locations] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_directconnect::builder::direct_connect::DescribeLocations;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeLocations {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeLocations(RequestBuilder<crate::model::DescribeLocationsRequest>);

    impl DescribeLocations {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::DirectConnect>,
            executor: SharedExecutor,
        ) -> Self {
            Self(RequestBuilder::new(stub, executor))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeLocationsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Locations> {
            (*self.0.stub)
                .describe_locations(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request in the background.
        pub fn send_deferred(self) -> Deferred<crate::model::Locations> {
            let executor = self.0.executor.clone();
            gax::executor::internal::defer(&executor, self.send())
        }

        /// Sends the request in the background and calls `handler` with the
        /// outcome.
        pub fn send_with_handler<H>(self, handler: H, context: Option<Arc<AsyncCallerContext>>)
        where
            H: FnOnce(
                    &crate::client::DirectConnect,
                    &crate::model::DescribeLocationsRequest,
                    Result<crate::model::Locations>,
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
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeLocations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectConnect::describe_virtual_gateways][crate::client::DirectConnect::describe_virtual_gateways] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_directconnect::builder::direct_connect::DescribeVirtualGateways;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeVirtualGateways {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeVirtualGateways(RequestBuilder<crate::model::DescribeVirtualGatewaysRequest>);

    impl DescribeVirtualGateways {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::DirectConnect>,
            executor: SharedExecutor,
        ) -> Self {
            Self(RequestBuilder::new(stub, executor))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeVirtualGatewaysRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::VirtualGateways> {
            (*self.0.stub)
                .describe_virtual_gateways(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request in the background.
        pub fn send_deferred(self) -> Deferred<crate::model::VirtualGateways> {
            let executor = self.0.executor.clone();
            gax::executor::internal::defer(&executor, self.send())
        }

        /// Sends the request in the background and calls `handler` with the
        /// outcome.
        pub fn send_with_handler<H>(self, handler: H, context: Option<Arc<AsyncCallerContext>>)
        where
            H: FnOnce(
                    &crate::client::DirectConnect,
                    &crate::model::DescribeVirtualGatewaysRequest,
                    Result<crate::model::VirtualGateways>,
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
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeVirtualGateways {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DirectConnect::describe_virtual_interfaces][crate::client::DirectConnect::describe_virtual_interfaces] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ctrlplane_directconnect::builder::direct_connect::DescribeVirtualInterfaces;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DescribeVirtualInterfaces {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DescribeVirtualInterfaces(RequestBuilder<crate::model::DescribeVirtualInterfacesRequest>);

    impl DescribeVirtualInterfaces {
        pub(crate) fn new(
            stub: Arc<dyn super::super::stub::dynamic::DirectConnect>,
            executor: SharedExecutor,
        ) -> Self {
            Self(RequestBuilder::new(stub, executor))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DescribeVirtualInterfacesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::VirtualInterfaces> {
            (*self.0.stub)
                .describe_virtual_interfaces(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request in the background.
        pub fn send_deferred(self) -> Deferred<crate::model::VirtualInterfaces> {
            let executor = self.0.executor.clone();
            gax::executor::internal::defer(&executor, self.send())
        }

        /// Sends the request in the background and calls `handler` with the
        /// outcome.
        pub fn send_with_handler<H>(self, handler: H, context: Option<Arc<AsyncCallerContext>>)
        where
            H: FnOnce(
                    &crate::client::DirectConnect,
                    &crate::model::DescribeVirtualInterfacesRequest,
                    Result<crate::model::VirtualInterfaces>,
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

        /// Sets the value of [connection_id][crate::model::DescribeVirtualInterfacesRequest::connection_id].
        pub fn set_connection_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.connection_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [connection_id][crate::model::DescribeVirtualInterfacesRequest::connection_id].
        pub fn set_or_clear_connection_id<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.connection_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [virtual_interface_id][crate::model::DescribeVirtualInterfacesRequest::virtual_interface_id].
        pub fn set_virtual_interface_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.virtual_interface_id = Some(v.into());
            self
        }

        /// Sets or clears the value of [virtual_interface_id][crate::model::DescribeVirtualInterfacesRequest::virtual_interface_id].
        pub fn set_or_clear_virtual_interface_id<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.virtual_interface_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DescribeVirtualInterfaces {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
