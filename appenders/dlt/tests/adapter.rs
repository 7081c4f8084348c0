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

use logward_append_dlt::DeliveryMode;
use logward_append_dlt::Dlt;
use logward_append_dlt::DltLogLevel;
use logward_append_dlt::DltStatus;
use logward_append_dlt::dlt_logger_mt;
use logward_append_dlt::dlt_logger_st;
use logward_append_dlt::testing::MockTransport;
use logward_append_dlt::testing::TransportCall;
use logward_core::Append;
use logward_core::Diagnostic;
use logward_core::Error;
use logward_core::Layout;
use logward_core::record::Level;
use logward_core::record::Record;

fn record(level: Level, payload: &'static str) -> Record<'static> {
    Record::builder().level(level).payload(payload).build()
}

#[test]
fn registration_truncates_long_identifiers() {
    let transport = MockTransport::new();
    let append = Dlt::new("abcdef", "Engine", transport.clone()).unwrap();

    assert_eq!(append.context().id().as_str(), "abcd");
    assert_eq!(
        transport.calls(),
        vec![TransportCall::Register {
            id: "abcd".to_string(),
            description: "Engine".to_string(),
        }]
    );
}

#[test]
fn registration_succeeds_on_both_success_codes() {
    for status in [DltStatus::Ok, DltStatus::True] {
        let transport = MockTransport::new();
        transport.set_register_status(status);
        assert!(Dlt::new("CTX", "context", transport).is_ok());
    }
}

#[test]
fn registration_failure_message_matches_the_status_table() {
    for status in DltStatus::ALL {
        if status.is_success() {
            continue;
        }

        let transport = MockTransport::new();
        transport.set_register_status(status);
        let err = Dlt::new("CTX", "context", transport).unwrap_err();
        assert_eq!(err.to_string(), status.description());
    }
}

#[test]
fn every_severity_maps_to_its_native_level() {
    let transport = MockTransport::new();
    let append = Dlt::new("MAP", "severity mapping", transport.clone()).unwrap();

    for level in Level::ALL {
        append.append(&record(level, "message"), &[]).unwrap();
    }

    let levels = transport
        .logged()
        .into_iter()
        .map(|(level, _)| level)
        .collect::<Vec<_>>();
    assert_eq!(
        levels,
        vec![
            DltLogLevel::Fatal,
            DltLogLevel::Error,
            DltLogLevel::Warn,
            DltLogLevel::Info,
            DltLogLevel::Debug,
            DltLogLevel::Verbose,
        ]
    );
}

#[test]
fn payload_is_forwarded_verbatim() {
    let transport = MockTransport::new();
    let append = Dlt::new("RAW", "raw payloads", transport.clone()).unwrap();

    append.append(&record(Level::Info, "ignition ⚙ on"), &[]).unwrap();

    assert_eq!(
        transport.logged(),
        vec![(DltLogLevel::Info, "ignition ⚙ on".to_string())]
    );
}

#[derive(Debug)]
struct TrailingNewline;

impl Layout for TrailingNewline {
    fn format(&self, record: &Record, _: &[Box<dyn Diagnostic>]) -> Result<Vec<u8>, Error> {
        let mut bytes = record.payload().as_bytes().to_vec();
        bytes.push(b'\n');
        Ok(bytes)
    }
}

#[test]
fn layout_output_is_forwarded_byte_for_byte() {
    let transport = MockTransport::new();
    let append = Dlt::new("LAYT", "layout pass-through", transport.clone())
        .unwrap()
        .with_layout(TrailingNewline);

    append.append(&record(Level::Warn, "low oil"), &[]).unwrap();

    assert_eq!(
        transport.logged(),
        vec![(DltLogLevel::Warn, "low oil\n".to_string())]
    );
}

#[test]
fn drop_deregisters_and_flushes_once() {
    let transport = MockTransport::new();
    let append = Dlt::new("DROP", "teardown", transport.clone()).unwrap();

    append.append(&record(Level::Info, "one"), &[]).unwrap();
    append.append(&record(Level::Info, "two"), &[]).unwrap();
    drop(append);

    let calls = transport.calls();
    let unregisters = calls
        .iter()
        .filter(|call| matches!(call, TransportCall::Unregister { .. }))
        .count();
    let flushes = calls
        .iter()
        .filter(|call| matches!(call, TransportCall::Flush))
        .count();
    assert_eq!(unregisters, 1);
    assert_eq!(flushes, 1);
    // the flush signal follows deregistration
    assert_eq!(
        calls.last(),
        Some(&TransportCall::Flush),
    );
}

#[test]
fn drop_without_records_still_deregisters_and_flushes() {
    let transport = MockTransport::new();
    let append = Dlt::new("IDLE", "no records", transport.clone()).unwrap();
    drop(append);

    assert_eq!(
        transport.calls(),
        vec![
            TransportCall::Register {
                id: "IDLE".to_string(),
                description: "no records".to_string(),
            },
            TransportCall::Unregister {
                id: "IDLE".to_string(),
            },
            TransportCall::Flush,
        ]
    );
}

#[test]
fn flush_produces_no_transport_call() {
    let transport = MockTransport::new();
    let append = Dlt::new("FLSH", "flush is a no-op", transport.clone()).unwrap();

    let before = transport.calls();
    append.flush().unwrap();
    assert_eq!(transport.calls(), before);
}

#[test]
fn best_effort_absorbs_emission_failures() {
    let transport = MockTransport::new();
    let append = Dlt::new("DROP", "best effort", transport.clone()).unwrap();
    let dropped = append.dropped_records();

    transport.set_log_status(DltStatus::PipeError);
    append.append(&record(Level::Error, "lost"), &[]).unwrap();
    append.append(&record(Level::Error, "also lost"), &[]).unwrap();

    assert_eq!(dropped.count(), 2);

    transport.set_log_status(DltStatus::Ok);
    append.append(&record(Level::Error, "delivered"), &[]).unwrap();
    assert_eq!(dropped.count(), 2);
}

#[test]
fn strict_mode_surfaces_emission_failures() {
    let transport = MockTransport::new();
    let append = Dlt::new("STRT", "strict", transport.clone())
        .unwrap()
        .with_delivery_mode(DeliveryMode::Strict);
    let dropped = append.dropped_records();

    transport.set_log_status(DltStatus::BufferFull);
    let err = append.append(&record(Level::Info, "rejected"), &[]).unwrap_err();
    assert!(err.to_string().contains("DLT_RETURN_BUFFER_FULL"));
    assert_eq!(dropped.count(), 1);
}

#[test]
fn shared_transport_flushes_once_across_appenders() {
    let transport = MockTransport::new();
    let first = Dlt::new("CTX1", "first context", transport.clone()).unwrap();
    let second = Dlt::new("CTX2", "second context", transport.clone()).unwrap();

    drop(first);
    drop(second);

    let unregisters = transport
        .calls()
        .iter()
        .filter(|call| matches!(call, TransportCall::Unregister { .. }))
        .count();
    assert_eq!(unregisters, 2);
    assert_eq!(transport.flush_signals(), 1);
}

#[test]
fn factory_logger_reaches_the_daemon() {
    let transport = MockTransport::new();
    let logger = dlt_logger_mt("vehicle", "ENGN", "engine control", transport.clone()).unwrap();

    assert_eq!(logger.name(), Some("vehicle"));
    logger.log(&record(Level::Crit, "engine fire"));

    assert_eq!(
        transport.logged(),
        vec![(DltLogLevel::Fatal, "engine fire".to_string())]
    );
}

#[test]
fn factory_propagates_registration_failures() {
    let transport = MockTransport::new();
    transport.set_register_status(DltStatus::PipeFull);

    let err = dlt_logger_st("vehicle", "ENGN", "engine control", transport).unwrap_err();
    assert_eq!(err.to_string(), "DLT_RETURN_PIPE_FULL");
}
