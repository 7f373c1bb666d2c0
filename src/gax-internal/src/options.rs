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

pub use auth::signer::Signer;
use gax::executor::{SharedExecutor, TokioExecutor};
use std::sync::Arc;

// The client configuration for [crate::http::HttpClient].
pub type ClientConfig = gax::client_builder::internal::ClientConfig<Signer>;

pub(crate) const LOGGING_VAR: &str = "CTRLPLANE_RUST_LOGGING";

/// Information about the client library used for instrumentation.
#[derive(Copy, Clone, Debug)]
pub struct InstrumentationClientInfo {
    /// The short service name, e.g., "directconnect", "ec2".
    ///
    /// Also used to compute the default endpoint, and given to the signer.
    pub service_name: &'static str,
    /// The version of the client library.
    pub client_version: &'static str,
    /// The name of the client library artifact (e.g., crate name).
    pub client_artifact: &'static str,
}

// Returns true if the environment or client configuration enables tracing.
pub fn tracing_enabled(config: &ClientConfig) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}

/// Returns the configured executor, or one bound to the current runtime.
pub fn executor(config: &ClientConfig) -> gax::client_builder::Result<SharedExecutor> {
    if let Some(e) = &config.executor {
        return Ok(e.clone());
    }
    let executor =
        TokioExecutor::try_current().map_err(gax::client_builder::Error::executor)?;
    Ok(Arc::new(executor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use test_case::test_case;

    fn config_with_tracing(enabled: bool) -> ClientConfig {
        let mut config = ClientConfig::default();
        config.tracing = enabled;
        config
    }

    // These tests must run serially because they manipulate the environment.
    #[test_case(None, false, false; "unset")]
    #[test_case(None, true, true; "unset with config")]
    #[test_case(Some("true"), false, true; "env only")]
    #[test_case(Some("true"), true, true; "env and config")]
    #[test_case(Some("TRUE"), false, false; "env is case sensitive")]
    #[test_case(Some("1"), false, false; "env is not a number")]
    #[serial_test::serial]
    fn config_tracing(env: Option<&str>, configured: bool, want: bool) {
        let _e = match env {
            None => ScopedEnv::remove(LOGGING_VAR),
            Some(v) => ScopedEnv::set(LOGGING_VAR, v),
        };
        let config = config_with_tracing(configured);
        assert_eq!(tracing_enabled(&config), want, "{env:?} {configured}");
    }

    #[test]
    fn executor_outside_runtime() {
        let got = executor(&ClientConfig::default());
        assert!(matches!(&got, Err(e) if e.is_executor()), "{got:?}");
    }

    #[tokio::test]
    async fn executor_default() {
        let got = executor(&ClientConfig::default());
        assert!(got.is_ok(), "{got:?}");
    }

    #[test]
    fn executor_configured() -> anyhow::Result<()> {
        let runtime = tokio::runtime::Builder::new_current_thread().build()?;
        let mut config = ClientConfig::default();
        config.executor = Some(Arc::new(TokioExecutor::new(runtime.handle().clone())));
        // No runtime is entered here, the configured executor is used.
        let got = executor(&config);
        assert!(got.is_ok(), "{got:?}");
        Ok(())
    }
}
