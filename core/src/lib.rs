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

//! Logward is a logging framework for Rust applications, providing log
//! dispatching over composable filters, layouts, and appenders.
//!
//! # Overview
//!
//! Logward lets you set up one or more dispatches, each with its own filters
//! and appenders. It integrates with the `log` crate facade out of the box,
//! and appender crates (such as the DLT daemon appender) plug into the
//! [`Append`] trait defined here.
//!
//! # Examples
//!
//! Simple setup with the default stdout appender:
//!
//! ```
//! logward_core::builder()
//!     .dispatch(|d| d.append(logward_core::append::Stdout::default()))
//!     .apply();
//!
//! log::info!("This is an info message.");
//! ```
//!
//! Advanced setup with filters and multiple appenders:
//!
//! ```
//! use logward_core::append;
//! use logward_core::record::Level;
//! use logward_core::record::LevelFilter;
//!
//! logward_core::builder()
//!     .dispatch(|d| {
//!         d.filter(LevelFilter::MoreSevereEqual(Level::Error))
//!             .append(append::Stderr::default())
//!     })
//!     .dispatch(|d| {
//!         d.filter(LevelFilter::MoreSevereEqual(Level::Info))
//!             .append(append::Stdout::default())
//!     })
//!     .apply();
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
mod bridge;
pub mod diagnostic;
mod error;
pub mod filter;
pub mod kv;
pub mod layout;
mod logger;
pub mod record;
mod str;
pub mod trap;

pub use append::Append;
pub use diagnostic::Diagnostic;
pub use error::Error;
pub use filter::Filter;
pub use layout::Layout;
pub use logger::DispatchBuilder;
pub use logger::Logger;
pub use logger::LoggerBuilder;
pub use logger::builder;
pub use logger::default_logger;
pub use logger::set_default_logger;
pub use trap::Trap;
