//! Integration tests for invocation tracing

use seqkit_debug::{
    HumanFormatter, JsonFormatter, ObservabilityConfig, TraceEvent, TraceFormatter, Tracer,
    TracerConfig,
};
use seqkit_runtime::{Outcome, Session};

fn traced_session() -> Session {
    Session::with_config(&ObservabilityConfig::development())
}

#[test]
fn currency_defaults_are_traced() {
    let mut session = traced_session();
    session.eval("strip-currency-and-parse $5 10 $ $abc").unwrap();

    let buffer = session.tracer().buffer();
    let defaults: Vec<usize> = buffer
        .by_event_type("sentinel-default")
        .iter()
        .filter_map(|r| match &r.event {
            TraceEvent::SentinelDefault { index, .. } => Some(*index),
            _ => None,
        })
        .collect();
    assert_eq!(defaults, vec![2, 3]);
}

#[test]
fn non_parsing_operations_never_default() {
    let mut session = traced_session();
    session.eval("count-short abc xyz").unwrap();
    session.eval("triple-all 0").unwrap();
    assert!(
        session
            .tracer()
            .buffer()
            .by_event_type("sentinel-default")
            .is_empty()
    );
}

#[test]
fn human_trace_listing() {
    let mut session = traced_session();
    session.eval("parse-ints-or-zero 5 abc").unwrap();

    let Outcome::Message(text) = session.eval("traces 3").unwrap() else {
        panic!("expected trace listing");
    };
    assert_eq!(
        text,
        "#0001 >> parse-ints-or-zero (2 inputs)\n\
         #0001    DEFAULT parse-ints-or-zero[1] \"abc\" -> 0\n\
         #0001 << parse-ints-or-zero = [5 0]"
    );
}

#[test]
fn json_trace_listing() {
    let mut session = traced_session();
    session.eval("format json").unwrap();
    session.eval("bookend 1 2 3").unwrap();

    let Outcome::Message(text) = session.eval("traces").unwrap() else {
        panic!("expected trace listing");
    };
    assert!(text.starts_with('['));
    assert!(text.contains("\"type\":\"invoke-start\",\"op\":\"bookend\",\"input_len\":3"));
    assert!(text.contains("\"output\":[1,3]"));
}

#[test]
fn buffer_size_bounds_history() {
    let config = ObservabilityConfig::development().with_buffer_size(4);
    let mut session = Session::with_config(&config);
    for _ in 0..5 {
        session.eval("triple-all 1").unwrap();
    }

    let stats = session.tracer().stats();
    assert_eq!(stats.record_count, 4);
    assert_eq!(stats.oldest_invocation, Some(4));
    assert_eq!(stats.newest_invocation, Some(5));
}

#[test]
fn formatters_agree_on_records() {
    let mut tracer = Tracer::new(TracerConfig::new().enabled());
    tracer.begin_invocation();
    tracer.invoke_failed(seqkit_stdlib::Operation::Bookend, "bad \"input\"");

    let record = tracer.buffer().last().unwrap();
    let human = HumanFormatter::new().with_ids().format(record);
    let json = JsonFormatter::new().format(record);

    assert!(human.starts_with("[000000] #0001 !! bookend FAILED"));
    assert!(json.contains("\"message\":\"bad \\\"input\\\"\""));
}
