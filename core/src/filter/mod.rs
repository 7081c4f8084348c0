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

//! Filters for log records.

use std::fmt;

use crate::Diagnostic;
use crate::record::LevelFilter;
use crate::record::Metadata;
use crate::record::Record;

/// The result of a filter check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterResult {
    /// The record will be processed without further filtering.
    Accept,
    /// The record should not be processed.
    Reject,
    /// No decision could be made, further filtering should occur.
    Neutral,
}

/// Represents a filter that can be applied to log records.
pub trait Filter: fmt::Debug + Send + Sync + 'static {
    /// Whether records with the given metadata may pass this filter.
    fn enabled(&self, metadata: &Metadata, diags: &[Box<dyn Diagnostic>]) -> FilterResult;

    /// Whether the given record passes this filter.
    ///
    /// Default to checking the record's metadata.
    fn matches(&self, record: &Record, diags: &[Box<dyn Diagnostic>]) -> FilterResult {
        self.enabled(record.metadata(), diags)
    }
}

impl<T: Filter> From<T> for Box<dyn Filter> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

impl Filter for LevelFilter {
    fn enabled(&self, metadata: &Metadata, _: &[Box<dyn Diagnostic>]) -> FilterResult {
        if self.test(metadata.level()) {
            FilterResult::Neutral
        } else {
            FilterResult::Reject
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Level;

    #[test]
    fn level_filter_rejects_more_verbose_records() {
        let filter = LevelFilter::MoreSevereEqual(Level::Info);

        let metadata = Metadata::builder().level(Level::Debug).build();
        assert_eq!(filter.enabled(&metadata, &[]), FilterResult::Reject);

        let metadata = Metadata::builder().level(Level::Error).build();
        assert_eq!(filter.enabled(&metadata, &[]), FilterResult::Neutral);
    }
}
