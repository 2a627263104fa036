//! In-memory event capture for tests.
//!
//! Installs a `tracing` layer that records every event's fields into a
//! shared buffer, so tests can assert on the canonical `op`/`event`
//! pairs without parsing formatted output.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// One captured event with its fields flattened to strings.
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    /// Value of the `component` field, if present.
    pub component: Option<String>,
    /// Value of the `op` field, if present.
    pub op: Option<String>,
    /// Value of the `event` field, if present.
    pub event: Option<String>,
    /// All fields, including the three above.
    pub fields: HashMap<String, String>,
}

struct FieldVisitor {
    fields: HashMap<String, String>,
}

impl FieldVisitor {
    fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }
}

/// Layer that pushes events into a [`TestCapture`] buffer.
pub struct TestCaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCaptureLayer {
    /// Create a layer and its paired capture handle.
    pub fn new() -> (Self, TestCapture) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let layer = Self {
            events: Arc::clone(&events),
        };
        let capture = TestCapture { events };
        (layer, capture)
    }
}

impl<S: Subscriber + for<'a> LookupSpan<'a>> Layer<S> for TestCaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::new();
        event.record(&mut visitor);

        let captured = CapturedEvent {
            component: visitor.fields.get("component").cloned(),
            op: visitor.fields.get("op").cloned(),
            event: visitor.fields.get("event").cloned(),
            fields: visitor.fields,
        };

        if let Ok(mut events) = self.events.lock() {
            events.push(captured);
        }
    }
}

/// Handle for inspecting captured events.
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl Clone for TestCapture {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
        }
    }
}

impl TestCapture {
    /// Snapshot of all events captured so far.
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Panic unless an event with the given `op` and `event` fields was
    /// captured.
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        let found = events
            .iter()
            .any(|e| e.op.as_deref() == Some(op) && e.event.as_deref() == Some(event));
        assert!(
            found,
            "expected event op={op:?} event={event:?}, captured: {events:#?}"
        );
    }

    /// Clear the buffer.
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    /// Count events matching a predicate.
    pub fn count_events(&self, pred: impl Fn(&CapturedEvent) -> bool) -> usize {
        self.events().iter().filter(|e| pred(e)).count()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber and return the
/// shared capture handle.
///
/// The subscriber can only be installed once per process, so every
/// caller gets the same handle. Tests sharing the process should
/// filter by `op` rather than relying on `clear()`.
///
/// # Example
///
/// ```
/// use confdiff_core::logging_facility::init_test_capture;
/// use confdiff_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("compare_snapshots");
/// capture.assert_event_exists("compare_snapshots", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            use tracing_subscriber::layer::SubscriberExt;
            use tracing_subscriber::util::SubscriberInitExt;

            let (layer, capture) = TestCaptureLayer::new();
            tracing_subscriber::registry().with(layer).init();
            capture
        })
        .clone()
}
