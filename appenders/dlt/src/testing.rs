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

//! A recording transport for tests.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use crate::DltContext;
use crate::DltLogLevel;
use crate::DltStatus;
use crate::DltTransport;

/// A call observed by a [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportCall {
    /// A context registration, with the identifier and description received.
    Register {
        /// The (already truncated) context identifier.
        id: String,
        /// The context description.
        description: String,
    },
    /// A context deregistration.
    Unregister {
        /// The context identifier.
        id: String,
    },
    /// One logged message.
    Log {
        /// The context identifier.
        id: String,
        /// The native level the message was logged at.
        level: DltLogLevel,
        /// The message text, exactly as received.
        message: String,
    },
    /// The process-wide flush-buffered-logs signal.
    Flush,
}

/// An in-memory [`DltTransport`] that records every call.
///
/// Cloning shares the underlying state, so a test can keep a handle while the
/// appender owns another. Registration and logging outcomes are scriptable.
///
/// # Examples
///
/// ```
/// use logward_append_dlt::Dlt;
/// use logward_append_dlt::testing::MockTransport;
///
/// let transport = MockTransport::new();
/// let append = Dlt::new("CTX1", "example context", transport.clone()).unwrap();
/// drop(append);
/// assert_eq!(transport.flush_signals(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    register_status: Mutex<DltStatus>,
    log_status: Mutex<DltStatus>,
    calls: Mutex<Vec<TransportCall>>,
    flushed: AtomicBool,
    flush_signals: AtomicUsize,
}

impl Default for Inner {
    fn default() -> Self {
        Inner {
            register_status: Mutex::new(DltStatus::Ok),
            log_status: Mutex::new(DltStatus::Ok),
            calls: Mutex::new(Vec::new()),
            flushed: AtomicBool::new(false),
            flush_signals: AtomicUsize::new(0),
        }
    }
}

impl MockTransport {
    /// Create a transport that accepts every call.
    pub fn new() -> Self {
        MockTransport::default()
    }

    /// Make subsequent registrations return the given status.
    pub fn set_register_status(&self, status: DltStatus) {
        *self.inner.register_status.lock().unwrap() = status;
    }

    /// Make subsequent log calls return the given status.
    pub fn set_log_status(&self, status: DltStatus) {
        *self.inner.log_status.lock().unwrap() = status;
    }

    /// All calls observed so far, in order.
    pub fn calls(&self) -> Vec<TransportCall> {
        self.inner.calls.lock().unwrap().clone()
    }

    /// The logged messages observed so far, as `(level, message)` pairs.
    pub fn logged(&self) -> Vec<(DltLogLevel, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                TransportCall::Log { level, message, .. } => Some((level, message)),
                _ => None,
            })
            .collect()
    }

    /// How many times the flush-buffered-logs signal fired.
    ///
    /// The signal is idempotent: repeated shutdowns count once.
    pub fn flush_signals(&self) -> usize {
        self.inner.flush_signals.load(Ordering::SeqCst)
    }

    fn record(&self, call: TransportCall) {
        self.inner.calls.lock().unwrap().push(call);
    }
}

impl DltTransport for MockTransport {
    fn register_context(&self, ctx: &DltContext) -> DltStatus {
        self.record(TransportCall::Register {
            id: ctx.id().as_str().to_string(),
            description: ctx.description().to_string(),
        });
        *self.inner.register_status.lock().unwrap()
    }

    fn unregister_context(&self, ctx: &DltContext) -> DltStatus {
        self.record(TransportCall::Unregister {
            id: ctx.id().as_str().to_string(),
        });
        DltStatus::Ok
    }

    fn log_string(&self, ctx: &DltContext, level: DltLogLevel, message: &str) -> DltStatus {
        self.record(TransportCall::Log {
            id: ctx.id().as_str().to_string(),
            level,
            message: message.to_string(),
        });
        *self.inner.log_status.lock().unwrap()
    }

    fn shutdown(&self) {
        if !self.inner.flushed.swap(true, Ordering::SeqCst) {
            self.inner.flush_signals.fetch_add(1, Ordering::SeqCst);
            self.record(TransportCall::Flush);
        }
    }
}
