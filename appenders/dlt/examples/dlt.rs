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

use logward_append_dlt::Dlt;
use logward_append_dlt::DltContext;
use logward_append_dlt::DltLogLevel;
use logward_append_dlt::DltStatus;
use logward_append_dlt::DltTransport;

/// A stand-in for a real daemon binding (for example one over `libdlt`).
///
/// It prints what a binding would send to the daemon, so the example runs
/// without a DLT daemon on the machine.
#[derive(Debug)]
struct PrintingDaemon;

impl DltTransport for PrintingDaemon {
    fn register_context(&self, ctx: &DltContext) -> DltStatus {
        eprintln!("[daemon] register {} ({})", ctx.id(), ctx.description());
        DltStatus::Ok
    }

    fn unregister_context(&self, ctx: &DltContext) -> DltStatus {
        eprintln!("[daemon] unregister {}", ctx.id());
        DltStatus::Ok
    }

    fn log_string(&self, ctx: &DltContext, level: DltLogLevel, message: &str) -> DltStatus {
        eprintln!("[daemon] {} level={level:?} {message}", ctx.id());
        DltStatus::Ok
    }

    fn shutdown(&self) {
        eprintln!("[daemon] flush buffered logs");
    }
}

fn main() {
    let append = Dlt::new("EXMP", "logward dlt example", PrintingDaemon)
        .unwrap()
        .synchronized();

    logward_core::builder()
        .dispatch(|d| d.filter(log::LevelFilter::Trace).append(append))
        .apply();

    log::error!("Hello dlt error!");
    log::warn!("Hello dlt warn!");
    log::info!("Hello dlt info!");
    log::debug!("Hello dlt debug!");
    log::trace!("Hello dlt trace!");
}
