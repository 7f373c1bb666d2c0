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

//! Control-plane API helpers.
//!
//! This crate contains a number of types and functions used in the
//! implementation of the Control-plane Client Libraries for Rust.
//!
//! <div class="warning">
//! All the types, traits, and functions in modules marked as
//! <code>internal</code> are <b>not</b> intended for general use. They
//! will remain unstable for the foreseeable future, even if used in stable
//! client libraries.
//! </div>

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping service operations.
/// Each operation produces exactly one of a parsed result or an error.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub mod client_builder;
pub mod enumerations;
pub mod error;
pub mod executor;
pub mod options;
pub mod response;

/// The transport seam used by all clients.
#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod http_client;
