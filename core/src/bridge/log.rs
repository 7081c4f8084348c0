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

use crate::Diagnostic;
use crate::Filter;
use crate::filter::FilterResult;
use crate::kv::Key;
use crate::kv::Value;
use crate::logger::default_logger;
use crate::record::Level;
use crate::record::LevelFilter;
use crate::record::Metadata;
use crate::record::RecordBuilder;

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warn,
            log::Level::Info => Self::Info,
            log::Level::Debug => Self::Debug,
            log::Level::Trace => Self::Trace,
        }
    }
}

impl From<log::LevelFilter> for LevelFilter {
    fn from(filter: log::LevelFilter) -> Self {
        match filter {
            log::LevelFilter::Off => Self::Off,
            log::LevelFilter::Error => Self::MoreSevereEqual(Level::Error),
            log::LevelFilter::Warn => Self::MoreSevereEqual(Level::Warn),
            log::LevelFilter::Info => Self::MoreSevereEqual(Level::Info),
            log::LevelFilter::Debug => Self::MoreSevereEqual(Level::Debug),
            log::LevelFilter::Trace => Self::MoreSevereEqual(Level::Trace),
        }
    }
}

impl Filter for log::LevelFilter {
    fn enabled(&self, metadata: &Metadata, diags: &[Box<dyn Diagnostic>]) -> FilterResult {
        LevelFilter::from(*self).enabled(metadata, diags)
    }
}

/// Install the default logger as the `log` crate's global logger.
///
/// If another `log` implementation has been installed already, the bridge is
/// skipped and records logged through the facade keep going to the existing
/// implementation.
pub(crate) fn install_log_bridge() {
    static BRIDGE: LogBridge = LogBridge;

    if log::set_logger(&BRIDGE).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
}

#[derive(Debug)]
struct LogBridge;

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        let Some(logger) = default_logger() else {
            return false;
        };

        let metadata = Metadata::builder()
            .target(metadata.target())
            .level(metadata.level().into())
            .build();
        logger.enabled(&metadata)
    }

    fn log(&self, record: &log::Record) {
        let Some(logger) = default_logger() else {
            return;
        };

        // basic fields
        let mut builder = RecordBuilder::default()
            .level(record.level().into())
            .target(record.target())
            .line(record.line());

        builder = match record.args().as_str() {
            Some(payload) => builder.payload(payload),
            None => builder.payload(record.args().to_string()),
        };

        // optional static fields
        builder = if let Some(module_path) = record.module_path_static() {
            builder.module_path_static(module_path)
        } else {
            builder.module_path(record.module_path())
        };
        builder = if let Some(file) = record.file_static() {
            builder.file_static(file)
        } else {
            builder.file(record.file())
        };

        // key-values
        let mut kvs = Vec::new();

        struct KeyValueVisitor<'a, 'b> {
            kvs: &'b mut Vec<(log::kv::Key<'a>, log::kv::Value<'a>)>,
        }

        impl<'a> log::kv::VisitSource<'a> for KeyValueVisitor<'a, '_> {
            fn visit_pair(
                &mut self,
                key: log::kv::Key<'a>,
                value: log::kv::Value<'a>,
            ) -> Result<(), log::kv::Error> {
                self.kvs.push((key, value));
                Ok(())
            }
        }

        let mut visitor = KeyValueVisitor { kvs: &mut kvs };
        // SAFETY: the collecting visitor never fails
        record.key_values().visit(&mut visitor).unwrap();

        let mut new_kvs = Vec::with_capacity(kvs.len());
        for (k, v) in kvs.iter() {
            new_kvs.push((Key::from(k.as_str()), Value::from_sval2(v)));
        }
        builder = builder.key_values(new_kvs.as_slice());

        logger.log(&builder.build());
    }

    fn flush(&self) {
        if let Some(logger) = default_logger() {
            logger.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_levels_convert() {
        assert_eq!(Level::from(log::Level::Error), Level::Error);
        assert_eq!(Level::from(log::Level::Trace), Level::Trace);
        assert_eq!(
            LevelFilter::from(log::LevelFilter::Warn),
            LevelFilter::MoreSevereEqual(Level::Warn)
        );
        assert_eq!(LevelFilter::from(log::LevelFilter::Off), LevelFilter::Off);
    }
}
