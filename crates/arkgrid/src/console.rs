//! Colorful console output for solver events.
//!
//! Provides a custom `tracing` layer that formats solver events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Solve start and end
//! - **DEBUG**: Partition start and end with search counters
//! - **TRACE**: Incumbent improvements
//!
//! Warnings and errors are always shown.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. The
/// default filter shows INFO and above; `RUST_LOG` overrides it.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);

        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ArkGridConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats solver events with colors.
pub struct ArkGridConsoleLayer;

impl<S: Subscriber> Layer<S> for ArkGridConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("arkgrid") {
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
    category: Option<String>,
    score: Option<String>,
    total_score: Option<String>,
    destiny_bonus: Option<String>,
    error: Option<String>,
    core_count: Option<u64>,
    unit_count: Option<u64>,
    cores: Option<u64>,
    units: Option<u64>,
    candidates: Option<u64>,
    nodes: Option<u64>,
    pruned: Option<u64>,
    conflicts: Option<u64>,
    duration_ms: Option<u64>,
    exhaustive: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        self.record_text(field, s);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_text(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "core_count" => self.core_count = Some(value),
            "unit_count" => self.unit_count = Some(value),
            "cores" => self.cores = Some(value),
            "units" => self.units = Some(value),
            "candidates" => self.candidates = Some(value),
            "nodes" => self.nodes = Some(value),
            "pruned" => self.pruned = Some(value),
            "conflicts" => self.conflicts = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "exhaustive" {
            self.exhaustive = Some(value);
        }
    }
}

impl EventVisitor {
    fn record_text(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "category" => self.category = Some(value),
            "score" => self.score = Some(value),
            "total_score" => self.total_score = Some(value),
            "destiny_bonus" => self.destiny_bonus = Some(value),
            "error" => self.error = Some(value),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "partition_start" => format_partition_start(v),
        "partition_end" => format_partition_end(v),
        "incumbent" => format_incumbent(v),
        event if level <= Level::WARN => format_problem(event, v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    let secs = EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64());
    format!("{:>7.3}s", secs).bright_black().to_string()
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Solving │ {} cores │ {} astrogems",
        format_elapsed(),
        "▶".bright_green().bold(),
        count(v.core_count).bright_yellow(),
        count(v.unit_count).bright_yellow(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let total = v.total_score.as_deref().unwrap_or("N/A");
    let bonus = v.destiny_bonus.as_deref().unwrap_or("0");
    let status = if v.exhaustive.unwrap_or(true) {
        "OPTIMAL".bright_green().bold().to_string()
    } else {
        "NODE LIMIT".bright_yellow().bold().to_string()
    };

    format!(
        "{} {} Solving complete │ score {} │ destiny {} │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        total.bright_green().bold(),
        bonus.bright_magenta(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        status,
    )
}

fn format_partition_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} │ {} cores │ {} units │ {} candidates",
        format_elapsed(),
        "▶".bright_blue(),
        v.category.as_deref().unwrap_or("?").white().bold(),
        count(v.cores),
        count(v.units),
        count(v.candidates).bright_yellow(),
    )
}

fn format_partition_end(v: &EventVisitor) -> String {
    format!(
        "{} {} {} │ score {} │ {} nodes │ {} pruned │ {} conflicts │ {}",
        format_elapsed(),
        "◀".bright_blue(),
        v.category.as_deref().unwrap_or("?").white().bold(),
        v.score.as_deref().unwrap_or("N/A").bright_green(),
        count(v.nodes).bright_magenta(),
        count(v.pruned),
        count(v.conflicts),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_incumbent(v: &EventVisitor) -> String {
    format!(
        "{}   {} new best {} after {} nodes",
        format_elapsed(),
        "↑".bright_green(),
        v.score.as_deref().unwrap_or("N/A").bright_green(),
        count(v.nodes),
    )
}

fn format_problem(event: &str, v: &EventVisitor, level: Level) -> String {
    let marker = if level == Level::ERROR {
        "✗".bright_red().bold().to_string()
    } else {
        "!".bright_yellow().bold().to_string()
    };
    let mut output = format!("{} {} {}", format_elapsed(), marker, event.replace('_', " "));
    if let Some(error) = &v.error {
        output.push_str(&format!(" │ {}", error.bright_red()));
    }
    output
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1_000 {
        format!("{}ms", ms)
    } else {
        format!("{:.2}s", ms as f64 / 1_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration_ms(12), "12ms");
        assert_eq!(format_duration_ms(1_500), "1.50s");
    }

    #[test]
    fn test_unknown_info_event_is_silent() {
        let v = EventVisitor {
            event: Some("dispatch".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&v, Level::DEBUG).is_empty());
    }

    #[test]
    fn test_warning_is_shown() {
        let v = EventVisitor {
            event: Some("node_limit_reached".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&v, Level::WARN).contains("node limit reached"));
    }

    #[test]
    fn test_init_twice() {
        init();
        init();
    }
}
