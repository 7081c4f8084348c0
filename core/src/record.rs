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

//! Log record, metadata, and severity levels.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

use crate::Error;
use crate::kv;
use crate::kv::KeyValues;
use crate::str::Str;

/// The payload of a log message.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    // the observed time
    now: SystemTime,

    // the metadata
    metadata: Metadata<'a>,
    module_path: Option<Str<'a>>,
    file: Option<Str<'a>>,
    line: Option<u32>,

    // the payload
    payload: Str<'a>,

    // structural logging
    kvs: KeyValues<'a>,
}

impl<'a> Record<'a> {
    /// The observed time.
    pub fn time(&self) -> SystemTime {
        self.now
    }

    /// Metadata about the log directive.
    pub fn metadata(&self) -> &Metadata<'a> {
        &self.metadata
    }

    /// The verbosity level of the message.
    pub fn level(&self) -> Level {
        self.metadata.level()
    }

    /// The name of the target of the directive.
    pub fn target(&self) -> &'a str {
        self.metadata.target()
    }

    /// The module path of the message.
    pub fn module_path(&self) -> Option<&str> {
        self.module_path.as_ref().map(|s| s.get())
    }

    /// The source file containing the message.
    pub fn file(&self) -> Option<&str> {
        self.file.as_ref().map(|s| s.get())
    }

    // obtain filename only from record's full file path
    // reason: the module is already logged + full file path is noisy for some layouts
    pub fn filename(&self) -> Cow<'_, str> {
        self.file()
            .map(std::path::Path::new)
            .and_then(std::path::Path::file_name)
            .map(std::ffi::OsStr::to_string_lossy)
            .unwrap_or_default()
    }

    /// The line containing the message.
    pub fn line(&self) -> Option<u32> {
        self.line
    }

    /// The message body.
    pub fn payload(&self) -> &str {
        self.payload.get()
    }

    /// The message body, if it is a `'static` str.
    pub fn payload_static(&self) -> Option<&'static str> {
        self.payload.get_static()
    }

    /// The key-values.
    pub fn key_values(&self) -> &KeyValues<'a> {
        &self.kvs
    }

    /// Convert to an owned record.
    pub fn to_owned(&self) -> RecordOwned {
        RecordOwned {
            now: self.now,
            metadata: MetadataOwned {
                level: self.metadata.level,
                target: Str::new_shared(self.metadata.target),
            },
            module_path: self.module_path.as_ref().map(Str::to_static),
            file: self.file.as_ref().map(Str::to_static),
            line: self.line,
            payload: self.payload.to_static(),
            kvs: self.kvs.to_vec(),
        }
    }

    /// Create a builder initialized with the current record's values.
    pub fn to_builder(&self) -> RecordBuilder<'a> {
        RecordBuilder {
            record: self.clone(),
        }
    }

    /// Returns a new builder.
    pub fn builder() -> RecordBuilder<'a> {
        RecordBuilder::default()
    }
}

/// Builder for [`Record`].
#[derive(Debug)]
pub struct RecordBuilder<'a> {
    record: Record<'a>,
}

impl Default for RecordBuilder<'_> {
    fn default() -> Self {
        RecordBuilder {
            record: Record {
                now: SystemTime::now(),
                metadata: MetadataBuilder::default().build(),
                module_path: None,
                file: None,
                line: None,
                payload: Default::default(),
                kvs: Default::default(),
            },
        }
    }
}

impl<'a> RecordBuilder<'a> {
    /// Set [`payload`](Record::payload).
    pub fn payload(mut self, payload: impl Into<Cow<'static, str>>) -> Self {
        self.record.payload = match payload.into() {
            Cow::Borrowed(s) => Str::new(s),
            Cow::Owned(s) => Str::new_shared(s),
        };
        self
    }

    /// Set [`payload`](Record::payload) to a value borrowed for the record's lifetime.
    pub fn payload_ref(mut self, payload: &'a str) -> Self {
        self.record.payload = Str::new_ref(payload);
        self
    }

    /// Set [`metadata`](Record::metadata).
    pub fn metadata(mut self, metadata: Metadata<'a>) -> Self {
        self.record.metadata = metadata;
        self
    }

    /// Set [`Metadata::level`].
    pub fn level(mut self, level: Level) -> Self {
        self.record.metadata.level = level;
        self
    }

    /// Set [`Metadata::target`].
    pub fn target(mut self, target: &'a str) -> Self {
        self.record.metadata.target = target;
        self
    }

    /// Set [`module_path`](Record::module_path).
    pub fn module_path(mut self, path: Option<&'a str>) -> Self {
        self.record.module_path = path.map(Str::new_ref);
        self
    }

    /// Set [`module_path`](Record::module_path) to a `'static` string.
    pub fn module_path_static(mut self, path: &'static str) -> Self {
        self.record.module_path = Some(Str::new(path));
        self
    }

    /// Set [`file`](Record::file).
    pub fn file(mut self, file: Option<&'a str>) -> Self {
        self.record.file = file.map(Str::new_ref);
        self
    }

    /// Set [`file`](Record::file) to a `'static` string.
    pub fn file_static(mut self, file: &'static str) -> Self {
        self.record.file = Some(Str::new(file));
        self
    }

    /// Set [`line`](Record::line).
    pub fn line(mut self, line: Option<u32>) -> Self {
        self.record.line = line;
        self
    }

    /// Set [`key_values`](Record::key_values).
    pub fn key_values(mut self, kvs: impl Into<KeyValues<'a>>) -> Self {
        self.record.kvs = kvs.into();
        self
    }

    /// Invoke the builder and return a `Record`.
    pub fn build(self) -> Record<'a> {
        self.record
    }
}

/// Metadata about a log message.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Metadata<'a> {
    level: Level,
    target: &'a str,
}

impl<'a> Metadata<'a> {
    /// Get the level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Get the target.
    pub fn target(&self) -> &'a str {
        self.target
    }

    /// Returns a new builder.
    pub fn builder() -> MetadataBuilder<'a> {
        MetadataBuilder::default()
    }
}

/// Builder for [`Metadata`].
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct MetadataBuilder<'a> {
    metadata: Metadata<'a>,
}

impl Default for MetadataBuilder<'_> {
    fn default() -> Self {
        MetadataBuilder {
            metadata: Metadata {
                level: Level::Info,
                target: Default::default(),
            },
        }
    }
}

impl<'a> MetadataBuilder<'a> {
    /// Setter for [`level`](Metadata::level).
    pub fn level(mut self, level: Level) -> Self {
        self.metadata.level = level;
        self
    }

    /// Setter for [`target`](Metadata::target).
    pub fn target(mut self, target: &'a str) -> Self {
        self.metadata.target = target;
        self
    }

    /// Invoke the builder and return a `Metadata`.
    pub fn build(self) -> Metadata<'a> {
        self.metadata
    }
}

/// Owned version of a log record.
#[derive(Clone, Debug)]
pub struct RecordOwned {
    now: SystemTime,
    metadata: MetadataOwned,
    module_path: Option<Str<'static>>,
    file: Option<Str<'static>>,
    line: Option<u32>,
    payload: Str<'static>,
    kvs: Vec<(kv::KeyOwned, kv::ValueOwned)>,
}

/// Owned version of metadata about a log message.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
struct MetadataOwned {
    level: Level,
    target: Str<'static>,
}

impl RecordOwned {
    /// Create a `Record` referencing the data in this `RecordOwned`.
    pub fn as_record(&self) -> Record<'_> {
        Record {
            now: self.now,
            metadata: Metadata {
                level: self.metadata.level,
                target: self.metadata.target.get(),
            },
            module_path: self.module_path.as_ref().map(Str::by_ref),
            file: self.file.as_ref().map(Str::by_ref),
            line: self.line,
            payload: self.payload.by_ref(),
            kvs: KeyValues::from(self.kvs.as_slice()),
        }
    }
}

/// An enum representing the available verbosity levels of the logger.
///
/// Levels are ordered most severe first: `Crit < Error < ... < Trace`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Designates critical errors.
    Crit,
    /// Designates very serious errors.
    Error,
    /// Designates hazardous situations.
    Warn,
    /// Designates useful information.
    Info,
    /// Designates lower priority information.
    Debug,
    /// Designates very low priority, often extremely verbose, information.
    Trace,
}

impl Level {
    /// All levels, most severe first.
    pub const ALL: [Level; 6] = [
        Level::Crit,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    /// Return the string representation of the `Level`.
    ///
    /// This returns the same string as the `fmt::Display` implementation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Crit => "CRIT",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Level, Self::Err> {
        for (name, level) in [
            ("crit", Level::Crit),
            ("error", Level::Error),
            ("warn", Level::Warn),
            ("info", Level::Info),
            ("debug", Level::Debug),
            ("trace", Level::Trace),
        ] {
            if s.eq_ignore_ascii_case(name) {
                return Ok(level);
            }
        }

        Err(Error::new(format!("malformed level: {s:?}")))
    }
}

/// An enum representing the available verbosity level filters of the logger.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum LevelFilter {
    /// Disables all levels.
    Off,
    /// Enables if the target level is equal to the filter level.
    Equal(Level),
    /// Enables if the target level is not equal to the filter level.
    NotEqual(Level),
    /// Enables if the target level is more severe than the filter level.
    MoreSevere(Level),
    /// Enables if the target level is more severe than or equal to the filter
    /// level.
    MoreSevereEqual(Level),
    /// Enables if the target level is more verbose than the filter level.
    MoreVerbose(Level),
    /// Enables if the target level is more verbose than or equal to the filter
    /// level.
    MoreVerboseEqual(Level),
    /// Enables all levels.
    All,
}

impl LevelFilter {
    /// Checks the given level if satisfies the filter condition.
    ///
    /// # Examples
    ///
    /// ```
    /// use logward_core::record::Level;
    /// use logward_core::record::LevelFilter;
    ///
    /// let level_filter = LevelFilter::MoreSevere(Level::Info);
    ///
    /// assert_eq!(level_filter.test(Level::Trace), false);
    /// assert_eq!(level_filter.test(Level::Info), false);
    /// assert_eq!(level_filter.test(Level::Warn), true);
    /// assert_eq!(level_filter.test(Level::Error), true);
    /// ```
    pub fn test(&self, level: Level) -> bool {
        match self {
            LevelFilter::Off => false,
            LevelFilter::Equal(l) => level == *l,
            LevelFilter::NotEqual(l) => level != *l,
            LevelFilter::MoreSevere(l) => level < *l,
            LevelFilter::MoreSevereEqual(l) => level <= *l,
            LevelFilter::MoreVerbose(l) => level > *l,
            LevelFilter::MoreVerboseEqual(l) => level >= *l,
            LevelFilter::All => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_most_severe_first() {
        assert!(Level::Crit < Level::Error);
        assert!(Level::Error < Level::Warn);
        assert!(Level::Warn < Level::Info);
        assert!(Level::Info < Level::Debug);
        assert!(Level::Debug < Level::Trace);
    }

    #[test]
    fn level_filter_off_rejects_everything() {
        for level in Level::ALL {
            assert!(!LevelFilter::Off.test(level));
        }
    }

    #[test]
    fn level_filter_comparisons() {
        let filter = LevelFilter::MoreSevereEqual(Level::Warn);
        assert!(filter.test(Level::Crit));
        assert!(filter.test(Level::Error));
        assert!(filter.test(Level::Warn));
        assert!(!filter.test(Level::Info));
        assert!(!filter.test(Level::Trace));
    }

    #[test]
    fn level_from_str_is_case_insensitive() {
        assert_eq!("CRIT".parse::<Level>().unwrap(), Level::Crit);
        assert_eq!("warn".parse::<Level>().unwrap(), Level::Warn);
        assert!("fatal".parse::<Level>().is_err());
    }

    #[test]
    fn owned_record_preserves_fields() {
        let record = Record::builder()
            .payload("ignition on")
            .level(Level::Info)
            .target("engine")
            .file_static("engine.rs")
            .line(Some(42))
            .build();

        let owned = record.to_owned();
        let record = owned.as_record();
        assert_eq!(record.payload(), "ignition on");
        assert_eq!(record.level(), Level::Info);
        assert_eq!(record.target(), "engine");
        assert_eq!(record.filename(), "engine.rs");
        assert_eq!(record.line(), Some(42));
    }
}
