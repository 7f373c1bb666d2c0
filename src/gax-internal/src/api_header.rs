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

//! Telemetry header helpers.

use crate::options::InstrumentationClientInfo;

pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Format the `User-Agent` header value for a client library.
///
/// The value identifies the shared implementation and the client library:
/// `ctrlplane-rust/{gax version} {artifact}/{version}`. The optional `prefix`
/// is configured by the application and placed first.
pub fn user_agent(info: &InstrumentationClientInfo, prefix: Option<&str>) -> String {
    let value = format!(
        "ctrlplane-rust/{PKG_VERSION} {}/{}",
        info.client_artifact, info.client_version
    );
    match prefix {
        None => value,
        Some(p) => format!("{p} {value}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const INFO: InstrumentationClientInfo = InstrumentationClientInfo {
        service_name: "directconnect",
        client_version: "1.2.3",
        client_artifact: "ctrlplane-directconnect",
    };

    fn breakdown(formatted: &str) -> HashMap<String, String> {
        formatted
            .split(" ")
            .filter_map(|v| v.find('/').map(|i| v.split_at(i)))
            .map(|(k, v)| (k, &v[1..]))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn format() {
        let value = user_agent(&INFO, None);
        let fields = breakdown(&value);
        assert_eq!(fields.len(), 2, "{fields:?}");

        let got = fields.get("ctrlplane-directconnect").map(String::as_str);
        assert_eq!(got, Some("1.2.3"));

        let got = fields.get("ctrlplane-rust").map(String::as_str);
        assert_eq!(got, Some(PKG_VERSION));
    }

    #[test]
    fn format_with_prefix() {
        let value = user_agent(&INFO, Some("my-app/4.5.6"));
        assert!(value.starts_with("my-app/4.5.6 ctrlplane-rust/"), "{value}");
        let fields = breakdown(&value);
        assert_eq!(fields.get("my-app").map(String::as_str), Some("4.5.6"));
        assert_eq!(fields.len(), 3, "{fields:?}");
    }
}
