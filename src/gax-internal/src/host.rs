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

use crate::options::ClientConfig;
use gax::client_builder::Error as BuilderError;
use http::Uri;
use std::str::FromStr;

/// Calculate the endpoint based on the client configuration.
///
/// An endpoint override wins. Overrides without a scheme use the configured
/// scheme. Without an override, the endpoint is computed from the service
/// name, the region, and the dual-stack setting.
///
/// The result never ends with `/`, the dispatcher appends the request path.
pub fn endpoint(config: &ClientConfig, service: &str) -> gax::client_builder::Result<String> {
    let endpoint = match config.endpoint.as_deref() {
        Some(e) if e.contains("://") => e.to_string(),
        Some(e) => format!("{}://{e}", config.scheme),
        None => format!(
            "{}://{}",
            config.scheme,
            for_region(service, config.region(), config.use_dual_stack)
        ),
    };
    let endpoint = endpoint.trim_end_matches('/').to_string();
    let origin = Uri::from_str(&endpoint).map_err(BuilderError::endpoint)?;
    if origin.authority().is_none() {
        return Err(BuilderError::endpoint(format!(
            "missing authority in endpoint {endpoint}"
        )));
    }
    Ok(endpoint)
}

/// The default host for `service` in `region`.
pub fn for_region(service: &str, region: &str, use_dual_stack: bool) -> String {
    let dual_stack = if use_dual_stack { ".dualstack" } else { "" };
    let suffix = if region.starts_with("cn-") {
        "amazonaws.com.cn"
    } else {
        "amazonaws.com"
    };
    format!("{service}{dual_stack}.{region}.{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::client_builder::Scheme;
    use test_case::test_case;

    fn config(endpoint: Option<&str>, region: Option<&str>) -> ClientConfig {
        let mut config = ClientConfig::default();
        config.endpoint = endpoint.map(str::to_string);
        config.region = region.map(str::to_string);
        config
    }

    #[test_case("us-east-1", false, "ec2.us-east-1.amazonaws.com"; "default")]
    #[test_case("eu-west-1", true, "ec2.dualstack.eu-west-1.amazonaws.com"; "dual stack")]
    #[test_case("cn-north-1", false, "ec2.cn-north-1.amazonaws.com.cn"; "china")]
    #[test_case("cn-northwest-1", true, "ec2.dualstack.cn-northwest-1.amazonaws.com.cn"; "china dual stack")]
    fn host_for_region(region: &str, dual_stack: bool, want: &str) {
        assert_eq!(for_region("ec2", region, dual_stack), want);
    }

    #[test_case(None, None, "https://directconnect.us-east-1.amazonaws.com"; "default")]
    #[test_case(None, Some("ap-south-1"), "https://directconnect.ap-south-1.amazonaws.com"; "region")]
    #[test_case(Some("http://localhost:8080"), None, "http://localhost:8080"; "override")]
    #[test_case(Some("http://localhost:8080/"), None, "http://localhost:8080"; "override with slash")]
    #[test_case(Some("vpce-123.example.com"), Some("us-west-2"), "https://vpce-123.example.com"; "override without scheme")]
    fn endpoint_from_config(
        endpoint: Option<&str>,
        region: Option<&str>,
        want: &str,
    ) -> anyhow::Result<()> {
        let got = super::endpoint(&config(endpoint, region), "directconnect")?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn endpoint_scheme_and_dual_stack() -> anyhow::Result<()> {
        let mut config = config(None, Some("us-west-2"));
        config.scheme = Scheme::Http;
        config.use_dual_stack = true;
        let got = endpoint(&config, "ec2")?;
        assert_eq!(got, "http://ec2.dualstack.us-west-2.amazonaws.com");

        config.endpoint = Some("localhost:5678".to_string());
        let got = endpoint(&config, "ec2")?;
        assert_eq!(got, "http://localhost:5678");
        Ok(())
    }

    #[test_case("http://bad host"; "space")]
    #[test_case("http://[::1"; "unterminated ipv6")]
    fn endpoint_error(bad: &str) {
        let got = endpoint(&config(Some(bad), None), "ec2");
        assert!(matches!(&got, Err(e) if e.is_endpoint()), "{got:?}");
    }
}
