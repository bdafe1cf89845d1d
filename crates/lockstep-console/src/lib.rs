//! Colored console output for Lockstep evaluations.
//!
//! Provides a `tracing` layer that renders evaluation lifecycle events.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (evaluation start/end)
//! - **WARN**: Failed and slow evaluations
//! - **DEBUG**: Progress updates
//! - **TRACE**: Individual elements

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_DIRECTIVE: &str = "lockstep_eval=info";

/// Initializes console output for evaluations.
///
/// Safe to call multiple times - only the first call has effect. If another
/// global subscriber is already installed, this is a no-op.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(LockstepConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(
        stdout,
        "{} {}",
        "lockstep".bright_cyan().bold(),
        format!("v{} - single-pass aggregation", VERSION).bright_white()
    );
    let _ = stdout.flush();
}

/// A tracing layer that formats evaluation events with colors.
pub struct LockstepConsoleLayer;

impl<S: Subscriber> Layer<S> for LockstepConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        if !metadata.target().starts_with("lockstep") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    name: Option<String>,
    error: Option<String>,
    error_kind: Option<String>,
    arity: Option<u64>,
    elements: Option<u64>,
    satisfied: Option<u64>,
    index: Option<u64>,
    duration_ms: Option<u64>,
    threshold_ms: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "name" => self.name = Some(s),
            "error" => self.error = Some(s),
            "error_kind" => self.error_kind = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "arity" => self.arity = Some(value),
            "elements" => self.elements = Some(value),
            "satisfied" => self.satisfied = Some(value),
            "index" => self.index = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "threshold_ms" => self.threshold_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if let Ok(value) = u64::try_from(value) {
            self.record_u64(field, value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "name" => self.name = Some(value.to_string()),
            "error" => self.error = Some(value.to_string()),
            "error_kind" => self.error_kind = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "evaluation_start" => format_start(v),
        "evaluation_end" => format_end(v),
        "evaluation_progress" => format_progress(v),
        "evaluation_failed" => format_failed(v),
        "slow_evaluation" => format_slow(v),
        "element" => format_element(v, level),
        _ => String::new(),
    }
}

fn name_of(v: &EventVisitor) -> &str {
    v.name.as_deref().unwrap_or("unnamed")
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_start(v: &EventVisitor) -> String {
    format!(
        "{} {} │ {} requests",
        "▶".bright_green().bold(),
        name_of(v).white().bold(),
        count(v.arity).bright_yellow()
    )
}

fn format_end(v: &EventVisitor) -> String {
    format!(
        "{} {} │ {} elements │ {}",
        "■".bright_cyan().bold(),
        name_of(v).white().bold(),
        count(v.elements).bright_yellow(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow()
    )
}

fn format_progress(v: &EventVisitor) -> String {
    format!(
        "{} {} │ {:>12} elements │ {} satisfied",
        "⚡".bright_cyan(),
        name_of(v).white(),
        count(v.elements).white(),
        count(v.satisfied).bright_magenta()
    )
}

fn format_failed(v: &EventVisitor) -> String {
    format!(
        "{} {} failed │ {} │ {}",
        "✗".bright_red().bold(),
        name_of(v).white().bold(),
        v.error_kind.as_deref().unwrap_or("unknown").bright_red(),
        v.error.as_deref().unwrap_or("")
    )
}

fn format_slow(v: &EventVisitor) -> String {
    format!(
        "{} {} slow │ {} over {} │ {} elements",
        "⚠".yellow().bold(),
        name_of(v).white().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).bright_red(),
        format_duration_ms(v.threshold_ms.unwrap_or(0)).yellow(),
        count(v.elements)
    )
}

fn format_element(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }
    format!(
        "  {} element {}",
        "·".bright_black(),
        count(v.index).bright_black()
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_unknown_event_renders_nothing() {
        let v = EventVisitor {
            event: Some("something_else".to_string()),
            ..Default::default()
        };
        assert!(format_event(&v, Level::INFO).is_empty());
    }

    #[test]
    fn test_end_event_groups_thousands() {
        let v = EventVisitor {
            event: Some("evaluation_end".to_string()),
            name: Some("orders".to_string()),
            elements: Some(1_234_567),
            duration_ms: Some(42),
            ..Default::default()
        };
        let out = format_event(&v, Level::DEBUG);
        assert!(out.contains("orders"));
        assert!(out.contains("1,234,567"));
        assert!(out.contains("42ms"));
    }

    #[test]
    fn test_element_events_only_at_trace() {
        let v = EventVisitor {
            event: Some("element".to_string()),
            index: Some(3),
            ..Default::default()
        };
        assert!(format_event(&v, Level::DEBUG).is_empty());
        assert!(!format_event(&v, Level::TRACE).is_empty());
    }

    #[test]
    fn test_failed_event_uses_unnamed_fallback() {
        let v = EventVisitor {
            event: Some("evaluation_failed".to_string()),
            error_kind: Some("overflow".to_string()),
            error: Some("Arithmetic overflow in sum".to_string()),
            ..Default::default()
        };
        let out = format_event(&v, Level::WARN);
        assert!(out.contains("unnamed"));
        assert!(out.contains("Arithmetic overflow in sum"));
    }

    struct VisitLayer(Arc<Mutex<Vec<Option<u64>>>>);

    impl<S: Subscriber> Layer<S> for VisitLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = EventVisitor::default();
            event.record(&mut visitor);
            self.0.lock().unwrap().push(visitor.elements);
        }
    }

    #[test]
    fn test_negative_counts_are_skipped() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(VisitLayer(Arc::clone(&seen)));

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(event = "slow_evaluation", elements = -5i64);
            tracing::warn!(event = "slow_evaluation", elements = 12i64);
        });

        assert_eq!(*seen.lock().unwrap(), vec![None, Some(12)]);
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        assert!(INIT.get().is_some());
    }
}
