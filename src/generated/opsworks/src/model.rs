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

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

use gax::enumerations::{Enumeration, UnknownValue, hash_string};
use std::borrow::Cow;

/// The instance's virtualization type.
///
/// # Working with unknown values
///
/// This enum is defined as `#[non_exhaustive]` because the service may add
/// new values after this library is released. Values received from the
/// service that are unknown to this library are preserved in the
/// [UnknownValue][VirtualizationType::UnknownValue] variant, and convert
/// back to their original name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum VirtualizationType {
    Paravirtual,
    Hvm,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [VirtualizationType::value] or
    /// [VirtualizationType::name].
    UnknownValue(UnknownValue),
}

impl VirtualizationType {
    const PARAVIRTUAL_HASH: i32 = hash_string("paravirtual");
    const HVM_HASH: i32 = hash_string("hvm");

    /// Gets the enum value.
    ///
    /// Unknown values return the hash code of their name.
    pub fn value(&self) -> i32 {
        match self {
            Self::Paravirtual => 1,
            Self::Hvm => 2,
            Self::UnknownValue(u) => u.value(),
        }
    }

    /// Gets the enum value as a string.
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            Self::Paravirtual => Cow::Borrowed("paravirtual"),
            Self::Hvm => Cow::Borrowed("hvm"),
            Self::UnknownValue(u) => Cow::Owned(u.name()),
        }
    }
}

impl std::fmt::Display for VirtualizationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

impl std::convert::From<i32> for VirtualizationType {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Paravirtual,
            2 => Self::Hvm,
            _ => Self::UnknownValue(UnknownValue::from_value(value)),
        }
    }
}

impl std::convert::From<&str> for VirtualizationType {
    fn from(value: &str) -> Self {
        match hash_string(value) {
            Self::PARAVIRTUAL_HASH if value == "paravirtual" => Self::Paravirtual,
            Self::HVM_HASH if value == "hvm" => Self::Hvm,
            _ => Self::UnknownValue(UnknownValue::from_name(value)),
        }
    }
}

impl Enumeration for VirtualizationType {
    fn value(&self) -> i32 {
        self.value()
    }
    fn name(&self) -> Cow<'static, str> {
        self.name()
    }
}

impl serde::ser::Serialize for VirtualizationType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for VirtualizationType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(
            gax::enumerations::internal::EnumVisitor::<VirtualizationType>::new(
                ".opsworks.VirtualizationType",
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(VirtualizationType::Paravirtual, "paravirtual", 1)]
    #[test_case(VirtualizationType::Hvm, "hvm", 2)]
    fn known(input: VirtualizationType, name: &str, value: i32) {
        assert_eq!(input.name(), name);
        assert_eq!(input.value(), value);
        assert_eq!(input.to_string(), name);
        assert_eq!(VirtualizationType::from(name), input);
        assert_eq!(VirtualizationType::from(value), input);
    }

    #[test]
    fn known_hashes() {
        assert_eq!(VirtualizationType::HVM_HASH, 103_711);
        assert_eq!(VirtualizationType::PARAVIRTUAL_HASH, 846_634_795);
    }

    #[test]
    fn unknown_name() {
        let got = VirtualizationType::from("test-only-nitro");
        assert!(matches!(got, VirtualizationType::UnknownValue(_)), "{got:?}");
        assert_eq!(got.value(), hash_string("test-only-nitro"));
        assert_eq!(got.name(), "test-only-nitro");

        // The overflow table preserves the name across conversions.
        let copy = VirtualizationType::from(got.value());
        assert_eq!(copy, got);
        assert_eq!(copy.name(), "test-only-nitro");
    }

    #[test]
    fn unknown_name_with_ordinal_hash() {
        // The hash of "\u{1}" is 1, the ordinal of `Paravirtual`.
        let got = VirtualizationType::from("\u{1}");
        assert!(matches!(got, VirtualizationType::UnknownValue(_)), "{got:?}");
        assert_eq!(got.value(), 1);
        assert_eq!(got.name(), "\u{1}");

        let copy = VirtualizationType::from(got.value());
        assert_eq!(copy, VirtualizationType::Paravirtual);
        assert_eq!(copy.name(), "paravirtual");
    }

    #[test]
    fn unknown_value() {
        let got = VirtualizationType::from(hash_string("test-only-never-seen"));
        assert!(matches!(got, VirtualizationType::UnknownValue(_)), "{got:?}");
        assert_eq!(got.name(), "");
    }

    #[test]
    fn name_is_case_sensitive() {
        let got = VirtualizationType::from("HVM");
        assert!(matches!(got, VirtualizationType::UnknownValue(_)), "{got:?}");
        assert_eq!(got.name(), "HVM");
    }

    #[test]
    fn serde() -> anyhow::Result<()> {
        let got = serde_json::to_value(VirtualizationType::Hvm)?;
        assert_eq!(got, serde_json::json!("hvm"));
        let got = serde_json::from_value::<VirtualizationType>(serde_json::json!("paravirtual"))?;
        assert_eq!(got, VirtualizationType::Paravirtual);

        let got = serde_json::from_value::<VirtualizationType>(serde_json::json!("test-only-serde"))?;
        assert_eq!(got.name(), "test-only-serde");
        assert_eq!(serde_json::to_value(got)?, serde_json::json!("test-only-serde"));
        Ok(())
    }
}
