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

use std::sync::OnceLock;

use crate::Append;
use crate::Diagnostic;
use crate::Error;
use crate::Filter;
use crate::Trap;
use crate::filter::FilterResult;
use crate::record::Metadata;
use crate::record::Record;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Set the process-wide default logger.
///
/// Return the logger back if a default logger has already been set.
pub fn set_default_logger(logger: Logger) -> Result<(), Logger> {
    DEFAULT_LOGGER.set(logger)?;

    #[cfg(feature = "bridge-log")]
    crate::bridge::install_log_bridge();

    Ok(())
}

/// Get the process-wide default logger, if one has been set.
pub fn default_logger() -> Option<&'static Logger> {
    DEFAULT_LOGGER.get()
}

/// A logger that forwards log records to one or more dispatches.
#[derive(Debug)]
pub struct Logger {
    name: Option<String>,
    dispatches: Vec<Dispatch>,
    trap: Box<dyn Trap>,
}

impl Logger {
    pub(super) fn new(
        name: Option<String>,
        dispatches: Vec<Dispatch>,
        trap: Box<dyn Trap>,
    ) -> Self {
        Self {
            name,
            dispatches,
            trap,
        }
    }

    /// The name of this logger, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether a record with the given metadata would be dispatched anywhere.
    pub fn enabled(&self, metadata: &Metadata) -> bool {
        self.dispatches
            .iter()
            .any(|dispatch| dispatch.enabled(metadata))
    }

    /// Dispatch a log record.
    ///
    /// Errors raised by filters or appenders are routed to the logger's trap;
    /// this call never fails at the call site.
    pub fn log(&self, record: &Record) {
        for dispatch in &self.dispatches {
            if let Err(err) = dispatch.log(record) {
                self.trap.trap(&err);
            }
        }
    }

    /// Flush all appenders.
    pub fn flush(&self) {
        for dispatch in &self.dispatches {
            if let Err(err) = dispatch.flush() {
                self.trap.trap(&err);
            }
        }
    }
}

/// A grouped set of filters, diagnostics, and appenders.
///
/// `filters` decide whether a log record reaches the appenders; `diagnostics`
/// enrich the record with contextual key-values; `appends` write the record
/// to a destination.
#[derive(Debug)]
pub(super) struct Dispatch {
    filters: Vec<Box<dyn Filter>>,
    diagnostics: Vec<Box<dyn Diagnostic>>,
    appends: Vec<Box<dyn Append>>,
}

impl Dispatch {
    pub(super) fn new(
        filters: Vec<Box<dyn Filter>>,
        diagnostics: Vec<Box<dyn Diagnostic>>,
        appends: Vec<Box<dyn Append>>,
    ) -> Self {
        debug_assert!(
            !appends.is_empty(),
            "A Dispatch must have at least one appender"
        );

        Self {
            filters,
            diagnostics,
            appends,
        }
    }

    fn enabled(&self, metadata: &Metadata) -> bool {
        for filter in &self.filters {
            match filter.enabled(metadata, &self.diagnostics) {
                FilterResult::Reject => return false,
                FilterResult::Accept => return true,
                FilterResult::Neutral => {}
            }
        }

        true
    }

    fn log(&self, record: &Record) -> Result<(), Error> {
        for filter in &self.filters {
            match filter.matches(record, &self.diagnostics) {
                FilterResult::Reject => return Ok(()),
                FilterResult::Accept => break,
                FilterResult::Neutral => {}
            }
        }

        for append in &self.appends {
            append.append(record, &self.diagnostics)?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        for append in &self.appends {
            append.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::builder;
    use crate::record::Level;
    use crate::record::LevelFilter;

    #[derive(Debug, Default, Clone)]
    struct Counting {
        appended: Arc<AtomicUsize>,
        flushed: Arc<AtomicUsize>,
    }

    impl Append for Counting {
        fn append(&self, _: &Record, _: &[Box<dyn Diagnostic>]) -> Result<(), Error> {
            self.appended.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn flush(&self) -> Result<(), Error> {
            self.flushed.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[derive(Debug)]
    struct FailingAppend;

    impl Append for FailingAppend {
        fn append(&self, _: &Record, _: &[Box<dyn Diagnostic>]) -> Result<(), Error> {
            Err(Error::new("append failed"))
        }
    }

    #[derive(Debug, Default, Clone)]
    struct CollectingTrap {
        errors: Arc<Mutex<Vec<String>>>,
    }

    impl Trap for CollectingTrap {
        fn trap(&self, err: &Error) {
            self.errors.lock().unwrap().push(err.to_string());
        }
    }

    #[test]
    fn level_filter_gates_dispatch() {
        let append = Counting::default();
        let logger = builder()
            .dispatch(|d| {
                d.filter(LevelFilter::MoreSevereEqual(Level::Info))
                    .append(append.clone())
            })
            .build();

        let info = Record::builder().level(Level::Info).payload("in").build();
        let debug = Record::builder().level(Level::Debug).payload("out").build();
        logger.log(&info);
        logger.log(&debug);

        assert_eq!(append.appended.load(Ordering::SeqCst), 1);
        assert!(logger.enabled(&Metadata::builder().level(Level::Crit).build()));
        assert!(!logger.enabled(&Metadata::builder().level(Level::Trace).build()));
    }

    #[test]
    fn flush_reaches_every_appender() {
        let append = Counting::default();
        let logger = builder()
            .dispatch(|d| d.append(append.clone()))
            .dispatch(|d| d.append(append.clone()))
            .build();

        logger.flush();
        assert_eq!(append.flushed.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn append_errors_go_to_the_trap() {
        let trap = CollectingTrap::default();
        let logger = builder()
            .trap(trap.clone())
            .dispatch(|d| d.append(FailingAppend))
            .build();

        let record = Record::builder().payload("boom").build();
        logger.log(&record);

        let errors = trap.errors.lock().unwrap();
        assert_eq!(errors.as_slice(), ["append failed"]);
    }

    #[test]
    fn logger_carries_its_name() {
        let logger = builder()
            .name("telemetry")
            .dispatch(|d| d.append(Counting::default()))
            .build();
        assert_eq!(logger.name(), Some("telemetry"));
    }
}
