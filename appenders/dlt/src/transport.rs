// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The transport capability between the appender and a DLT daemon binding.

use std::fmt;

use crate::DltLogLevel;
use crate::DltStatus;

/// A context identifier, at most 4 characters.
///
/// The daemon stores identifiers in fixed-width slots; longer inputs are
/// truncated to their first 4 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContextId {
    id: String,
}

impl ContextId {
    /// Create an identifier from the given string, truncating to 4 characters.
    pub fn new(id: &str) -> Self {
        let id = match id.char_indices().nth(4) {
            Some((end, _)) => &id[..end],
            None => id,
        };
        ContextId { id: id.to_string() }
    }

    /// The identifier string.
    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// A named logging channel registered with the daemon.
///
/// A context is registered once, reused for all messages tagged with it, and
/// deregistered when the owning appender is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DltContext {
    id: ContextId,
    description: String,
}

impl DltContext {
    pub(crate) fn new(id: &str, description: &str) -> Self {
        DltContext {
            id: ContextId::new(id),
            description: description.to_string(),
        }
    }

    /// The context identifier.
    pub fn id(&self) -> &ContextId {
        &self.id
    }

    /// The human-readable context description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// The narrow interface the appender consumes from a DLT daemon binding.
///
/// The daemon's own concerns (message queuing, IPC, on-disk and network
/// transport) live behind this trait. Bind a real daemon by implementing it,
/// for example over `libdlt`; tests use
/// [`MockTransport`](crate::testing::MockTransport).
pub trait DltTransport: fmt::Debug + Send + Sync + 'static {
    /// Register a logging context with the daemon.
    fn register_context(&self, ctx: &DltContext) -> DltStatus;

    /// Deregister a previously registered context.
    fn unregister_context(&self, ctx: &DltContext) -> DltStatus;

    /// Send one formatted message for the given context at the given level.
    fn log_string(&self, ctx: &DltContext, level: DltLogLevel, message: &str) -> DltStatus;

    /// Flush buffered logs at application exit.
    ///
    /// This is a process-wide signal; implementations must make it idempotent
    /// because every appender drop invokes it.
    fn shutdown(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_identifiers_pass_unchanged() {
        assert_eq!(ContextId::new("app").as_str(), "app");
        assert_eq!(ContextId::new("abcd").as_str(), "abcd");
    }

    #[test]
    fn long_identifiers_are_truncated_to_four_characters() {
        assert_eq!(ContextId::new("abcdef").as_str(), "abcd");
        // truncation counts characters, not bytes
        assert_eq!(ContextId::new("äöüßx").as_str(), "äöüß");
    }
}
