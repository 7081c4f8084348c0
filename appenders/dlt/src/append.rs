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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use logward_core::Append;
use logward_core::Diagnostic;
use logward_core::Error;
use logward_core::Layout;
use logward_core::record::Record;

use crate::DltContext;
use crate::DltLogLevel;
use crate::DltTransport;

/// How emission failures are surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryMode {
    /// Absorb every emission failure; undeliverable records are only counted.
    ///
    /// The daemon owns delivery guarantees in this mode, and a logging call
    /// never fails on the caller regardless of daemon health.
    #[default]
    BestEffort,
    /// Surface emission failures as errors (routed to the logger's trap).
    Strict,
}

/// A shared counter of records the appender could not deliver.
#[derive(Debug, Clone, Default)]
pub struct DroppedRecords(Arc<AtomicU64>);

impl DroppedRecords {
    /// The number of records dropped so far.
    pub fn count(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// An appender that forwards log records to a DLT daemon.
///
/// The appender registers a named context with the daemon at construction and
/// deregisters it on drop; every record in between becomes exactly one
/// logging call on the transport. Buffering, batching, and retries are the
/// daemon's business, not this appender's.
///
/// # Examples
///
/// ```
/// use logward_append_dlt::Dlt;
/// use logward_append_dlt::testing::MockTransport;
///
/// let append = Dlt::new("ENGN", "engine control unit", MockTransport::new()).unwrap();
///
/// logward_core::builder().dispatch(|d| d.append(append)).apply();
/// ```
#[derive(Debug)]
pub struct Dlt {
    transport: Arc<dyn DltTransport>,
    context: DltContext,
    layout: Option<Box<dyn Layout>>,
    delivery: DeliveryMode,
    guard: Option<Mutex<()>>,
    dropped: DroppedRecords,
}

impl Dlt {
    /// Create a new [`Dlt`] appender, registering a context with the daemon.
    ///
    /// Identifiers longer than 4 characters are truncated; the daemon's
    /// identifier slots are fixed-width.
    ///
    /// # Errors
    ///
    /// Fail if the daemon refuses the registration. The error message is the
    /// daemon's name for the returned status code, and the appender cannot be
    /// used: registration is not retried.
    pub fn new(
        ctx_id: &str,
        description: &str,
        transport: impl DltTransport,
    ) -> Result<Self, Error> {
        Self::with_shared_transport(ctx_id, description, Arc::new(transport))
    }

    /// Create a new [`Dlt`] appender on an already shared transport.
    ///
    /// Use this when several appenders talk to the same daemon binding, each
    /// with its own context.
    pub fn with_shared_transport(
        ctx_id: &str,
        description: &str,
        transport: Arc<dyn DltTransport>,
    ) -> Result<Self, Error> {
        let context = DltContext::new(ctx_id, description);

        let status = transport.register_context(&context);
        if !status.is_success() {
            return Err(Error::new(status.description()));
        }

        Ok(Self {
            transport,
            context,
            layout: None,
            delivery: DeliveryMode::default(),
            guard: None,
            dropped: DroppedRecords::default(),
        })
    }

    /// Set the layout of the [`Dlt`] appender.
    ///
    /// Default to `None`; only the record payload is forwarded.
    pub fn with_layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    /// Set the delivery mode of the [`Dlt`] appender.
    ///
    /// Default to [`DeliveryMode::BestEffort`].
    pub fn with_delivery_mode(mut self, delivery: DeliveryMode) -> Self {
        self.delivery = delivery;
        self
    }

    /// Serialize formatting and emission under an internal mutex.
    ///
    /// Without this, concurrent dispatch calls reach the transport
    /// concurrently and the caller owns any serialization policy.
    pub fn synchronized(mut self) -> Self {
        self.guard = Some(Mutex::new(()));
        self
    }

    /// The context registered with the daemon.
    pub fn context(&self) -> &DltContext {
        &self.context
    }

    /// A handle to the dropped-records counter.
    ///
    /// The counter advances in both delivery modes whenever a record cannot
    /// be delivered.
    pub fn dropped_records(&self) -> DroppedRecords {
        self.dropped.clone()
    }

    fn try_append(&self, record: &Record, diags: &[Box<dyn Diagnostic>]) -> Result<(), Error> {
        let _guard = self
            .guard
            .as_ref()
            .map(|m| m.lock().unwrap_or_else(PoisonError::into_inner));

        let rendered;
        let message = match &self.layout {
            Some(layout) => {
                let bytes = layout.format(record, diags)?;
                rendered = String::from_utf8_lossy(&bytes).into_owned();
                rendered.as_str()
            }
            None => record.payload(),
        };

        let level = DltLogLevel::from(record.level());
        let status = self.transport.log_string(&self.context, level, message);
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::new("failed to forward record to the DLT daemon")
                .with_context("context", self.context.id())
                .with_context("status", status))
        }
    }
}

impl Append for Dlt {
    fn append(&self, record: &Record, diags: &[Box<dyn Diagnostic>]) -> Result<(), Error> {
        match self.try_append(record, diags) {
            Ok(()) => Ok(()),
            Err(err) => {
                self.dropped.0.fetch_add(1, Ordering::Relaxed);
                match self.delivery {
                    DeliveryMode::BestEffort => Ok(()),
                    DeliveryMode::Strict => Err(err),
                }
            }
        }
    }

    // flush is inherited as a no-op: the daemon owns its buffering and flush
    // policy, and this appender exposes no flush semantics of its own.
}

impl Drop for Dlt {
    fn drop(&mut self) {
        let _ = self.transport.unregister_context(&self.context);
        self.transport.shutdown();
    }
}
