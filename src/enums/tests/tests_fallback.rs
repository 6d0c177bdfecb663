#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

use crate::enums::*;

type Fields = Vec<(String, String)>;

/// Subscriber that keeps every event with its level and fields.
#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<(Level, Fields)>>>,
}

struct FieldCollector(Fields);

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
}

impl Subscriber for Recorder {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut fields = FieldCollector(Vec::new());
        event.record(&mut fields);
        self.events
            .lock()
            .unwrap()
            .push((*event.metadata().level(), fields.0));
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

fn field<'a>(fields: &'a Fields, name: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

#[test]
fn test_fallback_logs_a_warning_with_context() {
    let recorder = Recorder::default();
    let kind = tracing::subscriber::with_default(recorder.clone(), || {
        ModelingKind::from_name_or_first("BOGUS")
    });

    assert_eq!(kind, ModelingKind::Template);

    let events = recorder.events.lock().unwrap();
    assert_eq!(events.len(), 1);
    let (level, fields) = &events[0];
    assert_eq!(*level, Level::WARN);
    assert_eq!(field(fields, "enumeration"), Some("ModelingKind"));
    assert_eq!(field(fields, "rejected"), Some("BOGUS"));
    assert_eq!(field(fields, "fallback"), Some("TEMPLATE"));
}

#[test]
fn test_known_name_logs_nothing() {
    let recorder = Recorder::default();
    let kind = tracing::subscriber::with_default(recorder.clone(), || {
        AssetKind::from_name_or_first("INSTANCE")
    });

    assert_eq!(kind, AssetKind::Instance);
    assert!(recorder.events.lock().unwrap().is_empty());
}
