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

//! Appender for forwarding log records to a Diagnostic Log and Trace (DLT)
//! daemon, as used by automotive systems (COVESA DLT).
//!
//! The appender binds one named logging context to the daemon for its whole
//! lifetime: the context is registered at construction, every record becomes
//! one call to the daemon's string-logging primitive, and the context is
//! deregistered on drop. The daemon itself stays behind the [`DltTransport`]
//! trait, so any binding (such as one over `libdlt`) can be plugged in and
//! tests run against [`testing::MockTransport`].
//!
//! # Examples
//!
//! ```
//! use logward_append_dlt::dlt_logger_mt;
//! use logward_append_dlt::testing::MockTransport;
//!
//! let logger = dlt_logger_mt("vehicle", "ENGN", "engine control", MockTransport::new()).unwrap();
//!
//! let record = logward_core::record::Record::builder()
//!     .payload("ignition on")
//!     .build();
//! logger.log(&record);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

use logward_core::Error;
use logward_core::Logger;
use logward_core::builder;

mod append;
mod level;
mod status;
pub mod testing;
mod transport;

pub use append::DeliveryMode;
pub use append::Dlt;
pub use append::DroppedRecords;
pub use level::DltLogLevel;
pub use status::DltStatus;
pub use transport::ContextId;
pub use transport::DltContext;
pub use transport::DltTransport;

/// Create a named logger with a single DLT appender safe for concurrent use.
///
/// Registers `ctx_id` (truncated to 4 characters) with `description` on the
/// given transport; emission is serialized under an internal mutex.
///
/// # Errors
///
/// Fail if the daemon refuses the context registration.
pub fn dlt_logger_mt(
    name: impl Into<String>,
    ctx_id: &str,
    description: &str,
    transport: impl DltTransport,
) -> Result<Logger, Error> {
    let append = Dlt::new(ctx_id, description, transport)?.synchronized();
    Ok(builder().name(name).dispatch(|d| d.append(append)).build())
}

/// Create a named logger with a single DLT appender without internal locking.
///
/// Like [`dlt_logger_mt`], but emission is unguarded: the caller owns the
/// serialization policy. Use this for single-threaded dispatch.
///
/// # Errors
///
/// Fail if the daemon refuses the context registration.
pub fn dlt_logger_st(
    name: impl Into<String>,
    ctx_id: &str,
    description: &str,
    transport: impl DltTransport,
) -> Result<Logger, Error> {
    let append = Dlt::new(ctx_id, description, transport)?;
    Ok(builder().name(name).dispatch(|d| d.append(append)).build())
}
