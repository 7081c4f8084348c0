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

use logward_core::record::Level;

/// Native log levels of the DLT daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DltLogLevel {
    /// Use the context's configured default level.
    Default,
    /// Logging is turned off.
    Off,
    /// Fatal system errors.
    Fatal,
    /// Errors with impact on correct functionality.
    Error,
    /// Warnings, correct behavior could not be ensured.
    Warn,
    /// High-level information.
    Info,
    /// Detailed debug information.
    Debug,
    /// Highly detailed, verbose information.
    Verbose,
}

impl DltLogLevel {
    /// The daemon's raw value for this level.
    pub const fn as_raw(self) -> i8 {
        match self {
            DltLogLevel::Default => -1,
            DltLogLevel::Off => 0,
            DltLogLevel::Fatal => 1,
            DltLogLevel::Error => 2,
            DltLogLevel::Warn => 3,
            DltLogLevel::Info => 4,
            DltLogLevel::Debug => 5,
            DltLogLevel::Verbose => 6,
        }
    }
}

// The fixed severity mapping table. Every framework level has exactly one
// native counterpart; the filter-only "off" state never reaches an appender.
impl From<Level> for DltLogLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Crit => DltLogLevel::Fatal,
            Level::Error => DltLogLevel::Error,
            Level::Warn => DltLogLevel::Warn,
            Level::Info => DltLogLevel::Info,
            Level::Debug => DltLogLevel::Debug,
            Level::Trace => DltLogLevel::Verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_level_has_a_fixed_native_counterpart() {
        let expected = [
            (Level::Crit, DltLogLevel::Fatal),
            (Level::Error, DltLogLevel::Error),
            (Level::Warn, DltLogLevel::Warn),
            (Level::Info, DltLogLevel::Info),
            (Level::Debug, DltLogLevel::Debug),
            (Level::Trace, DltLogLevel::Verbose),
        ];
        for (level, native) in expected {
            assert_eq!(DltLogLevel::from(level), native);
        }
    }

    #[test]
    fn raw_values_match_the_daemon_constants() {
        assert_eq!(DltLogLevel::Default.as_raw(), -1);
        assert_eq!(DltLogLevel::Off.as_raw(), 0);
        assert_eq!(DltLogLevel::Fatal.as_raw(), 1);
        assert_eq!(DltLogLevel::Verbose.as_raw(), 6);
    }
}
