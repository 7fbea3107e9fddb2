//! Log capture for asserting on tracing output in tests.
//!
//! Capture is scoped to the calling thread via
//! [`tracing::subscriber::with_default`], so parallel tests do not see
//! each other's events.

use std::fmt::Write as _;
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;

/// A captured log entry.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Events captured during a [`capture_logs`] call.
#[derive(Debug, Default)]
pub struct CapturedLogs {
    entries: Vec<LogEntry>,
}

impl CapturedLogs {
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn contains_message(&self, message: &str) -> bool {
        self.entries.iter().any(|e| e.message.contains(message))
    }

    #[must_use]
    pub fn at_level(&self, level: Level) -> Vec<&LogEntry> {
        self.entries.iter().filter(|e| e.level == level).collect()
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.level == Level::WARN || e.level == Level::ERROR)
    }

    /// Render entries for an assertion message.
    #[must_use]
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return String::from("no logs captured");
        }
        let mut out = String::new();
        for entry in &self.entries {
            let _ = write!(out, "[{}] {}: {}", entry.level, entry.target, entry.message);
            for (key, value) in &entry.fields {
                let _ = write!(out, " {key}={value}");
            }
            out.push('\n');
        }
        out
    }
}

struct CaptureLayer {
    sink: Arc<Mutex<Vec<LogEntry>>>,
}

struct FieldVisitor<'a> {
    message: &'a mut String,
    fields: &'a mut Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            *self.message = value.to_string();
        } else {
            self.fields.push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let rendered = format!("{value:?}");
        if field.name() == "message" {
            *self.message = rendered;
        } else {
            self.fields.push((field.name().to_string(), rendered));
        }
    }
}

impl<S: tracing::Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut message = String::new();
        let mut fields = Vec::new();
        event.record(&mut FieldVisitor {
            message: &mut message,
            fields: &mut fields,
        });

        if let Ok(mut sink) = self.sink.lock() {
            sink.push(LogEntry {
                level: *metadata.level(),
                target: metadata.target().to_string(),
                message,
                fields,
            });
        }
    }
}

/// Run `f` with every event at `TRACE` and above captured.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, CapturedLogs) {
    let sink = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(CaptureLayer {
        sink: Arc::clone(&sink),
    });

    let result = tracing::subscriber::with_default(subscriber, f);
    let entries = sink.lock().map(|e| e.clone()).unwrap_or_default();
    (result, CapturedLogs { entries })
}
