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

//! Traps for errors that occur while logging.
//!
//! Logging calls must never fail at the call site, so errors raised by
//! appenders and filters during dispatch are routed to a [`Trap`].

use std::fmt;

use crate::Error;

mod default;

pub use self::default::DefaultTrap;

/// A sink for errors that occur during log dispatch.
pub trait Trap: fmt::Debug + Send + Sync + 'static {
    /// Handle an error raised while dispatching a record.
    fn trap(&self, err: &Error);
}

impl<T: Trap> From<T> for Box<dyn Trap> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}
