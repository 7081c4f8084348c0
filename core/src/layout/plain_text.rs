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

use std::fmt::Write;

use jiff::Timestamp;

use crate::Diagnostic;
use crate::Error;
use crate::Layout;
use crate::kv::Key;
use crate::kv::Value;
use crate::kv::Visitor;
use crate::record::Record;

/// A layout that formats log record as plain text.
///
/// Output format:
///
/// ```text
/// 2024-06-19T15:22:45.123456789Z ERROR simple: simple.rs:24 Hello error!
/// 2024-06-19T15:22:45.123572000Z  WARN simple: simple.rs:25 Hello warn!
/// 2024-06-19T15:22:45.123576000Z  INFO simple: simple.rs:26 Hello info!
/// ```
///
/// # Examples
///
/// ```
/// use logward_core::layout::PlainTextLayout;
///
/// let text_layout = PlainTextLayout::default();
/// ```
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct PlainTextLayout {}

struct KvWriter {
    text: String,
}

impl Visitor for KvWriter {
    fn visit(&mut self, key: Key, value: Value) -> Result<(), Error> {
        // SAFETY: write to a string always succeeds
        write!(&mut self.text, " {key}={value}", key = key.as_str()).unwrap();
        Ok(())
    }
}

impl Layout for PlainTextLayout {
    fn format(&self, record: &Record, diags: &[Box<dyn Diagnostic>]) -> Result<Vec<u8>, Error> {
        let mut text = String::new();

        match Timestamp::try_from(record.time()) {
            Ok(ts) => write!(&mut text, "{ts}").unwrap(),
            Err(_) => write!(&mut text, "{:?}", record.time()).unwrap(),
        }

        let level = record.level();
        let target = record.target();
        let file = record.filename();
        let line = record.line().unwrap_or_default();
        let message = record.payload();
        write!(&mut text, " {level:>5} {target}: {file}:{line} {message}").unwrap();

        let mut visitor = KvWriter { text };
        record.key_values().visit(&mut visitor)?;
        for d in diags {
            d.visit(&mut visitor)?;
        }

        Ok(visitor.text.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Level;

    #[test]
    fn format_contains_all_fields() {
        let kvs = [(Key::from("speed"), Value::from(88))];
        let record = Record::builder()
            .payload("engine started")
            .level(Level::Warn)
            .target("engine")
            .file_static("src/engine.rs")
            .line(Some(7))
            .key_values(kvs.as_slice())
            .build();

        let bytes = PlainTextLayout::default().format(&record, &[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.contains(" WARN engine: engine.rs:7 engine started"));
        assert!(text.ends_with(" speed=88"));
    }
}
