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

//! Control-plane Client Libraries for Rust - Authentication Components
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases.
//!
//! The client libraries do not implement any request signing algorithm.
//! Instead they consume an implementation of [signer::SigningProvider],
//! wrapped in a [signer::Signer]. The client libraries call the signer once
//! per request, with the fully formed request, and add the headers it returns
//! before sending the request.
//!
//! Applications that do not configure a signer send unauthenticated requests,
//! see [signer::anonymous].

pub mod errors;

/// Types and functions to sign requests.
pub mod signer;

/// A `Result` alias where the `Err` case is
/// `ctrlplane_auth::errors::SigningError`.
pub(crate) type Result<T> = std::result::Result<T, crate::errors::SigningError>;
