//! In-memory event capture for logging assertions in tests.
//!
//! The correlation fields every check run emits (`op`, `event`, `run_id`,
//! `substyle`, `paragraph`, `err_code`) are lifted into typed fields of
//! [`CapturedEvent`]; everything else stays in the string map.

use crate::core_types::schema::{
    FIELD_ERR_CODE, FIELD_EVENT, FIELD_OP, FIELD_PARAGRAPH, FIELD_RUN_ID, FIELD_SUBSTYLE,
};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One recorded tracing event
#[derive(Clone, Debug, PartialEq)]
pub struct CapturedEvent {
    pub level: Level,
    pub op: Option<String>,
    pub event: Option<String>,
    pub run_id: Option<String>,
    pub substyle: Option<String>,
    /// 1-based paragraph number
    pub paragraph: Option<u32>,
    pub err_code: Option<String>,
    /// Remaining fields, including `message` and `component`
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    fn from_fields(level: Level, mut fields: BTreeMap<String, String>) -> Self {
        let paragraph = fields
            .remove(FIELD_PARAGRAPH)
            .and_then(|p| p.parse::<u32>().ok());
        Self {
            level,
            op: fields.remove(FIELD_OP),
            event: fields.remove(FIELD_EVENT),
            run_id: fields.remove(FIELD_RUN_ID),
            substyle: fields.remove(FIELD_SUBSTYLE),
            paragraph,
            err_code: fields.remove(FIELD_ERR_CODE),
            fields,
        }
    }

    /// True if this is the `event` boundary of operation `op`
    pub fn is_op_event(&self, op: &str, event: &str) -> bool {
        self.op.as_deref() == Some(op) && self.event.as_deref() == Some(event)
    }
}

#[derive(Default)]
struct FieldCollector(BTreeMap<String, String>);

impl FieldCollector {
    fn put(&mut self, field: &Field, value: String) {
        self.0.insert(field.name().to_string(), value);
    }
}

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.put(field, format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.to_string());
    }
}

struct CaptureLayer {
    sink: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut collector = FieldCollector::default();
        event.record(&mut collector);
        let captured = CapturedEvent::from_fields(*event.metadata().level(), collector.0);

        if let Ok(mut sink) = self.sink.lock() {
            sink.push(captured);
        }
    }
}

/// Shared view of every event captured since the layer was installed
#[derive(Clone)]
pub struct TestCapture {
    sink: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Snapshot of all captured events
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.sink
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Events tagged with the given check run id
    pub fn for_run(&self, run_id: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.run_id.as_deref() == Some(run_id))
            .collect()
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }
}

static CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber (first call only)
/// and return a handle to its buffer.
///
/// The buffer is shared by every test in the process, so filter on a run
/// id or an operation name no other test uses.
///
/// ```
/// use stylecheck_core::log_op_start;
/// use stylecheck_core::logging_facility::init_test_capture;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_capture_example", run_id = "doc-run");
/// let events = capture.for_run("doc-run");
/// assert_eq!(events.len(), 1);
/// assert!(events[0].is_op_event("doc_capture_example", "start"));
/// ```
pub fn init_test_capture() -> TestCapture {
    CAPTURE
        .get_or_init(|| {
            let sink = Arc::new(Mutex::new(Vec::new()));
            let layer = CaptureLayer { sink: sink.clone() };
            tracing_subscriber::registry().with(layer).init();
            TestCapture { sink }
        })
        .clone()
}
