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

use std::fmt;

/// Return codes of the DLT daemon library.
///
/// This is a closed enumeration: the daemon reports raw codes in `-8..=1`,
/// where [`DltStatus::Ok`] and [`DltStatus::True`] denote success and every
/// other code a distinct failure reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DltStatus {
    /// The daemon rejected a write because of its file size limit.
    FileSizeError,
    /// Logging is disabled in the daemon.
    LoggingDisabled,
    /// The per-application user buffer is full.
    UserBufferFull,
    /// A parameter was out of range or malformed.
    WrongParameter,
    /// The daemon-side buffer is full.
    BufferFull,
    /// The pipe to the daemon is full.
    PipeFull,
    /// The pipe to the daemon is broken.
    PipeError,
    /// Unspecified failure.
    Error,
    /// Success.
    Ok,
    /// Success, with a truthy result.
    True,
}

impl DltStatus {
    /// All status codes, ordered by raw value.
    pub const ALL: [DltStatus; 10] = [
        DltStatus::FileSizeError,
        DltStatus::LoggingDisabled,
        DltStatus::UserBufferFull,
        DltStatus::WrongParameter,
        DltStatus::BufferFull,
        DltStatus::PipeFull,
        DltStatus::PipeError,
        DltStatus::Error,
        DltStatus::Ok,
        DltStatus::True,
    ];

    /// The daemon's raw return code.
    pub const fn as_raw(self) -> i8 {
        match self {
            DltStatus::FileSizeError => -8,
            DltStatus::LoggingDisabled => -7,
            DltStatus::UserBufferFull => -6,
            DltStatus::WrongParameter => -5,
            DltStatus::BufferFull => -4,
            DltStatus::PipeFull => -3,
            DltStatus::PipeError => -2,
            DltStatus::Error => -1,
            DltStatus::Ok => 0,
            DltStatus::True => 1,
        }
    }

    /// Look up a status from the daemon's raw return code.
    pub const fn from_raw(raw: i8) -> Option<DltStatus> {
        match raw {
            -8 => Some(DltStatus::FileSizeError),
            -7 => Some(DltStatus::LoggingDisabled),
            -6 => Some(DltStatus::UserBufferFull),
            -5 => Some(DltStatus::WrongParameter),
            -4 => Some(DltStatus::BufferFull),
            -3 => Some(DltStatus::PipeFull),
            -2 => Some(DltStatus::PipeError),
            -1 => Some(DltStatus::Error),
            0 => Some(DltStatus::Ok),
            1 => Some(DltStatus::True),
            _ => None,
        }
    }

    /// Whether this status denotes success.
    ///
    /// Only [`DltStatus::Ok`] and [`DltStatus::True`] are successes; every
    /// other code fails the operation that returned it.
    pub const fn is_success(self) -> bool {
        matches!(self, DltStatus::Ok | DltStatus::True)
    }

    /// The daemon's name for this status code.
    pub const fn description(self) -> &'static str {
        match self {
            DltStatus::FileSizeError => "DLT_RETURN_FILESZERR",
            DltStatus::LoggingDisabled => "DLT_RETURN_LOGGING_DISABLED",
            DltStatus::UserBufferFull => "DLT_RETURN_USER_BUFFER_FULL",
            DltStatus::WrongParameter => "DLT_RETURN_WRONG_PARAMETER",
            DltStatus::BufferFull => "DLT_RETURN_BUFFER_FULL",
            DltStatus::PipeFull => "DLT_RETURN_PIPE_FULL",
            DltStatus::PipeError => "DLT_RETURN_PIPE_ERROR",
            DltStatus::Error => "DLT_RETURN_ERROR",
            DltStatus::Ok => "DLT_RETURN_OK",
            DltStatus::True => "DLT_RETURN_TRUE",
        }
    }
}

impl fmt::Display for DltStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_codes_round_trip() {
        for status in DltStatus::ALL {
            assert_eq!(DltStatus::from_raw(status.as_raw()), Some(status));
        }
        assert_eq!(DltStatus::from_raw(2), None);
        assert_eq!(DltStatus::from_raw(-9), None);
    }

    #[test]
    fn only_ok_and_true_are_successes() {
        for status in DltStatus::ALL {
            let success = matches!(status, DltStatus::Ok | DltStatus::True);
            assert_eq!(status.is_success(), success, "{status}");
        }
    }

    #[test]
    fn descriptions_follow_the_daemon_naming() {
        assert_eq!(DltStatus::FileSizeError.description(), "DLT_RETURN_FILESZERR");
        assert_eq!(DltStatus::PipeFull.description(), "DLT_RETURN_PIPE_FULL");
        assert_eq!(DltStatus::True.description(), "DLT_RETURN_TRUE");
    }
}
