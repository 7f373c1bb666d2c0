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

//! Per request options.
//!
//! While the client library defaults are intended to work for most
//! applications, it is sometimes necessary to change the behavior of some
//! calls made via a client. The request builder returned by each client
//! method implements the [RequestOptionsBuilder] trait where applications
//! can override some defaults.

use std::time::Duration;

/// A set of options configuring a single request.
///
/// Application only use this class directly in mocks, where they may want to
/// verify their application has configured all the right request parameters
/// and options.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    idempotent: Option<bool>,
    user_agent: Option<String>,
    attempt_timeout: Option<Duration>,
}

impl RequestOptions {
    /// Gets the idempotency.
    pub fn idempotent(&self) -> Option<bool> {
        self.idempotent
    }

    /// Treat the request as idempotent.
    ///
    /// The client libraries never retry, but applications that implement
    /// their own retry loops may consult this value.
    pub fn set_idempotency(&mut self, value: bool) {
        self.idempotent = Some(value);
    }

    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix.
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the per-attempt timeout.
    ///
    /// The transport receives this value as a hint. The default transport
    /// enforces it.
    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<Duration> {
        &self.attempt_timeout
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The client libraries for control-plane services provide a builder for
/// each operation. These builders can be used to set the request parameters,
/// e.g., the connection id, and to set some request options, e.g., the
/// user agent. These builders all implement this trait.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// If `v` is `true`, treat the request as idempotent.
    fn with_idempotency(self, v: bool) -> Self;

    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the per-attempt timeout.
    fn with_attempt_timeout<V: Into<Duration>>(self, v: V) -> Self;
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_idempotency(mut self, v: bool) -> Self {
        self.request_options().set_idempotency(v);
        self
    }

    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;

    #[derive(Debug, Default)]
    struct TestBuilder {
        request_options: RequestOptions,
    }
    impl RequestBuilder for TestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.request_options
        }
    }

    #[test]
    fn request_options() {
        let mut opts = RequestOptions::default();

        assert_eq!(opts.idempotent(), None);
        opts.set_idempotency(true);
        assert_eq!(opts.idempotent(), Some(true));
        opts.set_idempotency(false);
        assert_eq!(opts.idempotent(), Some(false));

        opts.set_user_agent("test-only");
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));

        let d = Duration::from_secs(123);
        opts.set_attempt_timeout(d);
        assert_eq!(opts.attempt_timeout(), &Some(d));
    }

    #[test]
    fn request_options_builder() {
        let builder = TestBuilder::default();
        assert_eq!(builder.request_options, RequestOptions::default());

        let builder = TestBuilder::default().with_idempotency(true);
        assert_eq!(builder.request_options.idempotent(), Some(true));

        let builder = TestBuilder::default().with_user_agent("test-only");
        assert_eq!(
            builder.request_options.user_agent().as_deref(),
            Some("test-only")
        );

        let d = Duration::from_secs(123);
        let builder = TestBuilder::default().with_attempt_timeout(d);
        assert_eq!(builder.request_options.attempt_timeout(), &Some(d));
    }
}
