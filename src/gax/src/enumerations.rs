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

//! Implements common code for enumerations.
//!
//! Enumerations in control-plane services are open: the service may return
//! values added after the client library was released. The client libraries
//! preserve such values. Each generated enumeration has an `UnknownValue`
//! variant holding the hash code of the unrecognized name, and the name
//! itself is kept in a process-wide [OverflowContainer].
//!
//! # Example
//! ```
//! # use ctrlplane_gax::enumerations::{UnknownValue, hash_string};
//! let unknown = UnknownValue::from_name("brand-new-state");
//! assert_eq!(unknown.value(), hash_string("brand-new-state"));
//! assert_eq!(unknown.name(), "brand-new-state");
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Computes the hash code for an enumeration name.
///
/// This is the `h = c + 31 * h` polynomial over the UTF-8 bytes of `name`,
/// using wrapping 32-bit arithmetic. It is a `const fn`, the generated code
/// computes the hash of all known names at compile time.
///
/// # Example
/// ```
/// # use ctrlplane_gax::enumerations::hash_string;
/// const HVM_HASH: i32 = hash_string("hvm");
/// assert_eq!(HVM_HASH, 103_711);
/// ```
pub const fn hash_string(name: &str) -> i32 {
    let bytes = name.as_bytes();
    let mut hash: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        hash = (bytes[i] as u32).wrapping_add(hash.wrapping_mul(31));
        i += 1;
    }
    hash as i32
}

/// Preserves enumeration names unknown to the client library.
///
/// Entries are keyed by [hash_string] and live for the lifetime of the
/// process. There is no eviction.
#[derive(Debug, Default)]
pub struct OverflowContainer {
    names: RwLock<HashMap<i32, String>>,
}

impl OverflowContainer {
    /// Records `name` under `hash_code`.
    ///
    /// The first name stored for a hash code is kept. A later name with the
    /// same hash code does not replace it, and both resolve to the first
    /// name.
    pub fn store_overflow(&self, hash_code: i32, name: &str) {
        let mut names = self.names.write().unwrap_or_else(PoisonError::into_inner);
        names
            .entry(hash_code)
            .or_insert_with(|| name.to_string());
    }

    /// Returns the name previously stored under `hash_code`, if any.
    pub fn retrieve_overflow(&self, hash_code: i32) -> Option<String> {
        let names = self.names.read().unwrap_or_else(PoisonError::into_inner);
        names.get(&hash_code).cloned()
    }

    /// The number of names in the container.
    pub fn len(&self) -> usize {
        self.names
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if the container has no names.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

lazy_static::lazy_static! {
    static ref OVERFLOW: OverflowContainer = OverflowContainer::default();
}

/// The process-wide container used by all generated enumerations.
pub fn overflow_container() -> &'static OverflowContainer {
    &OVERFLOW
}

/// An enumeration value not known to the client library.
///
/// The value is the hash code of the name received from the service. The
/// name is available as long as the value was created via
/// [from_name][UnknownValue::from_name] in the same process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnknownValue(i32);

impl UnknownValue {
    /// Creates an unknown value from its name, storing the name in the
    /// [overflow_container].
    ///
    /// The value is the hash code of `name`. If that hash code equals the
    /// ordinal of a known enumerator, converting the value back with
    /// `From<i32>` yields the known enumerator, not `name`.
    pub fn from_name(name: &str) -> Self {
        let hash_code = hash_string(name);
        overflow_container().store_overflow(hash_code, name);
        Self(hash_code)
    }

    /// Creates an unknown value from its numeric representation.
    pub fn from_value(value: i32) -> Self {
        Self(value)
    }

    /// The numeric representation of this value.
    pub fn value(&self) -> i32 {
        self.0
    }

    /// The name of this value, or the empty string if it was never stored.
    pub fn name(&self) -> String {
        overflow_container()
            .retrieve_overflow(self.0)
            .unwrap_or_default()
    }
}

/// Implemented by all generated enumerations.
pub trait Enumeration: From<i32> + for<'a> From<&'a str> {
    /// The numeric representation of the value.
    ///
    /// Known values use their ordinal, starting at `1`. Unknown values use the
    /// hash code of their name.
    fn value(&self) -> i32;

    /// The wire name of the value.
    fn name(&self) -> Cow<'static, str>;
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    //! Serialization helpers for the generated enumerations.
    use std::marker::PhantomData;

    /// Deserializes enumerations from their name, or their numeric value.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct EnumVisitor<'lf, T> {
        name: &'lf str,
        _unused: PhantomData<T>,
    }

    impl<'lf, T> EnumVisitor<'lf, T> {
        pub fn new(name: &'lf str) -> Self {
            Self {
                name,
                _unused: Default::default(),
            }
        }
    }

    impl<T> serde::de::Visitor<'_> for EnumVisitor<'_, T>
    where
        T: From<i32> + for<'a> From<&'a str>,
    {
        type Value = T;
        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(T::from(value))
        }
        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            if value > (i32::MAX as u64) {
                return Err(E::custom(format!(
                    "out of range enum value {value} for {}",
                    self.name,
                )));
            }
            Ok(T::from(value as i32))
        }
        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            if value < (i32::MIN as i64) || value > (i32::MAX as i64) {
                return Err(E::custom(format!(
                    "out of range enum value {value} for {}",
                    self.name,
                )));
            }
            Ok(T::from(value as i32))
        }
        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str(&format!(
                "a {} enum value in string or integer format",
                self.name
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::internal::EnumVisitor;
    use super::*;
    use serde::Deserializer;
    use test_case::test_case;

    // Values computed with the `h = c + 31 * h` recurrence, using 32-bit
    // unsigned arithmetic.
    #[test_case("", 0)]
    #[test_case("a", 97)]
    #[test_case("hvm", 103_711)]
    #[test_case("paravirtual", 846_634_795)]
    #[test_case("available", -733_902_135)]
    fn hash(input: &str, want: i32) {
        assert_eq!(hash_string(input), want, "{input}");
    }

    #[test]
    fn hash_is_const() {
        const H: i32 = hash_string("hvm");
        assert_eq!(H, hash_string("hvm"));
    }

    #[test]
    fn container() {
        let container = OverflowContainer::default();
        assert!(container.is_empty());
        assert_eq!(container.retrieve_overflow(42), None);

        container.store_overflow(42, "forty-two");
        assert_eq!(container.retrieve_overflow(42).as_deref(), Some("forty-two"));
        assert_eq!(container.len(), 1);

        // The first name stored for a hash code wins.
        container.store_overflow(42, "other");
        assert_eq!(container.retrieve_overflow(42).as_deref(), Some("forty-two"));
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn container_concurrent() {
        let container = OverflowContainer::default();
        std::thread::scope(|s| {
            for i in 0..8 {
                let container = &container;
                s.spawn(move || {
                    for j in 0..100 {
                        let name = format!("name-{i}-{j}");
                        container.store_overflow(hash_string(&name), &name);
                        assert_eq!(
                            container.retrieve_overflow(hash_string(&name)),
                            Some(name)
                        );
                    }
                });
            }
        });
        assert_eq!(container.len(), 800);
    }

    #[test]
    fn unknown_from_name() {
        let unknown = UnknownValue::from_name("test-only-unknown-from-name");
        assert_eq!(unknown.value(), hash_string("test-only-unknown-from-name"));
        assert_eq!(unknown.name(), "test-only-unknown-from-name");

        let copy = UnknownValue::from_value(unknown.value());
        assert_eq!(copy, unknown);
        assert_eq!(copy.name(), "test-only-unknown-from-name");
    }

    #[test]
    fn unknown_from_name_collision() {
        // "Aa" and "BB" have the same hash, and so do names ending in them.
        let first = UnknownValue::from_name("test-only-collision-Aa");
        let second = UnknownValue::from_name("test-only-collision-BB");
        assert_eq!(first, second);
        assert_eq!(first.name(), "test-only-collision-Aa");
        assert_eq!(second.name(), "test-only-collision-Aa");
    }

    #[test]
    fn unknown_from_value_never_stored() {
        let unknown = UnknownValue::from_value(hash_string("test-only-never-stored"));
        assert_eq!(unknown.name(), "");
    }

    #[derive(Debug, PartialEq)]
    enum Color {
        Red,
        Unknown(UnknownValue),
    }
    impl From<i32> for Color {
        fn from(value: i32) -> Self {
            match value {
                1 => Self::Red,
                v => Self::Unknown(UnknownValue::from_value(v)),
            }
        }
    }
    impl From<&str> for Color {
        fn from(value: &str) -> Self {
            match value {
                "red" => Self::Red,
                v => Self::Unknown(UnknownValue::from_name(v)),
            }
        }
    }

    #[test]
    fn visitor() -> anyhow::Result<()> {
        let json = serde_json::json!("red");
        let got = json.deserialize_any(EnumVisitor::<Color>::new("Color"))?;
        assert_eq!(got, Color::Red);

        let json = serde_json::json!(1);
        let got = json.deserialize_any(EnumVisitor::<Color>::new("Color"))?;
        assert_eq!(got, Color::Red);

        let json = serde_json::json!(-5);
        let got = json.deserialize_any(EnumVisitor::<Color>::new("Color"))?;
        assert_eq!(got, Color::Unknown(UnknownValue::from_value(-5)));

        let json = serde_json::json!("test-only-magenta");
        let got = json.deserialize_any(EnumVisitor::<Color>::new("Color"))?;
        assert_eq!(got, Color::Unknown(UnknownValue::from_name("test-only-magenta")));
        Ok(())
    }

    #[test_case(serde_json::json!(i64::MAX))]
    #[test_case(serde_json::json!(i64::MIN))]
    #[test_case(serde_json::json!(u64::MAX))]
    #[test_case(serde_json::json!([1, 2]))]
    fn visitor_error(input: serde_json::Value) {
        let got = input.deserialize_any(EnumVisitor::<Color>::new("Color"));
        assert!(got.is_err(), "{got:?}");
    }
}
