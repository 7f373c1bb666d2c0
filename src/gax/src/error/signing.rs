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

use std::error::Error;
use std::fmt::{Debug, Display, Formatter, Result};
use std::sync::Arc;

/// Represents an error creating the authentication headers for a request.
///
/// Signers may need to fetch or refresh credentials before they can sign a
/// request. Such operations can fail. The error includes a flag indicating
/// if a future attempt may succeed.
#[derive(Clone, Debug)]
pub struct SigningError {
    is_retryable: bool,
    source: SigningErrorImpl,
}

#[derive(Clone, Debug)]
enum SigningErrorImpl {
    SimpleMessage(String),
    Source(Arc<dyn Error + Send + Sync>),
}

impl SigningError {
    /// Creates a new `SigningError` from a source error.
    pub fn new<T: Error + Send + Sync + 'static>(is_retryable: bool, source: T) -> Self {
        SigningError {
            is_retryable,
            source: SigningErrorImpl::Source(Arc::new(source)),
        }
    }

    /// Creates a new `SigningError` from a message.
    pub fn from_msg<T: Into<String>>(is_retryable: bool, message: T) -> Self {
        SigningError {
            is_retryable,
            source: SigningErrorImpl::SimpleMessage(message.into()),
        }
    }

    /// Returns true if the error may go away on a future attempt.
    pub fn is_retryable(&self) -> bool {
        self.is_retryable
    }
}

impl Display for SigningErrorImpl {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self {
            SigningErrorImpl::SimpleMessage(message) => write!(f, "{message}"),
            SigningErrorImpl::Source(source) => write!(f, "{source}"),
        }
    }
}

impl Error for SigningError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            SigningErrorImpl::SimpleMessage(_) => None,
            SigningErrorImpl::Source(source) => Some(source.as_ref()),
        }
    }
}

const RETRYABLE_MSG: &str = "but future attempts may succeed";
const NON_RETRYABLE_MSG: &str = "and future attempts will not succeed";

impl Display for SigningError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let msg = if self.is_retryable {
            RETRYABLE_MSG
        } else {
            NON_RETRYABLE_MSG
        };
        write!(f, "cannot sign the request, {msg}, source: {}", self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[derive(Debug, thiserror::Error)]
    #[error("test-only missing key")]
    struct MissingKey;

    #[test_case(true)]
    #[test_case(false)]
    fn new(retryable: bool) {
        let got = SigningError::new(retryable, MissingKey);
        assert_eq!(got.is_retryable(), retryable, "{got}");
        assert!(got.source().is_some(), "{got}");
        assert!(got.to_string().contains("test-only missing key"), "{got}");
    }

    #[test_case(true, RETRYABLE_MSG)]
    #[test_case(false, NON_RETRYABLE_MSG)]
    fn from_msg(retryable: bool, want: &str) {
        let got = SigningError::from_msg(retryable, "test-only");
        assert_eq!(got.is_retryable(), retryable, "{got}");
        assert!(got.source().is_none(), "{got}");
        assert!(got.to_string().contains("test-only"), "{got}");
        assert!(got.to_string().contains(want), "{got}");
    }
}
