//! Colorful console output for benchmark events.
//!
//! Provides a custom `tracing` layer that formats Extrema events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (dataset loaded, sweep start/end, comparison)
//! - **WARN**: Rows excluded while loading
//! - **DEBUG**: One line per measured size

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SWEEP_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crates whose events are rendered.
const TARGETS: [&str; 3] = ["extrema_benchmark", "extrema_data", "extrema_cli"];

/// Initializes the console output at the default `info` level.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initializes the console output at the given level.
///
/// Targets named in `RUST_LOG` keep the level given there; the other
/// Extrema crates log at `level`.
pub fn init_with_level(level: Level) {
    INIT.get_or_init(|| {
        print_banner();

        let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let _ = tracing_subscriber::registry()
            .with(console_filter(level, env.as_deref()))
            .with(ExtremaConsoleLayer)
            .try_init();
    });
}

fn console_filter(level: Level, env: Option<&str>) -> EnvFilter {
    let env = env.unwrap_or_default();
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(env);
    for target in TARGETS {
        if env.contains(target) {
            continue;
        }
        if let Ok(directive) = format!("{}={}", target, level).parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

// Marks the start of a sweep for elapsed time tracking.
fn mark_sweep_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SWEEP_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since sweep start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SWEEP_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 _____      _
| ____|_  _| |_ _ __ ___ _ __ ___   __ _
|  _| \ \/ / __| '__/ _ \ '_ ` _ \ / _` |
| |___ >  <| |_| | |  __/ | | | | | (_| |
|_____/_/\_\\__|_|  \___|_| |_| |_|\__,_|
"#;

    let version_line = format!(
        "          v{} - Iterative vs Recursive Min/Max\n",
        VERSION
    );

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{}", banner.bright_cyan());
    let _ = writeln!(stderr, "{}", version_line.bright_white().bold());
    let _ = stderr.flush();
}

/// A tracing layer that formats benchmark events with colors.
///
/// Output goes to stderr so reports printed on stdout stay machine-readable.
pub struct ExtremaConsoleLayer;

impl<S: Subscriber> Layer<S> for ExtremaConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        if !TARGETS.iter().any(|t| target.starts_with(t)) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    name: Option<String>,
    format: Option<String>,
    path: Option<String>,
    column: Option<String>,
    minimum: Option<String>,
    maximum: Option<String>,
    message: Option<String>,
    n: Option<u64>,
    sizes: Option<u64>,
    max_size: Option<u64>,
    repeat_count: Option<u64>,
    points: Option<u64>,
    rows: Option<u64>,
    skipped: Option<u64>,
    count: Option<u64>,
    duration_ms: Option<u64>,
    iterative_ns: Option<u64>,
    recursive_ns: Option<u64>,
    recursive_measured: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "name" => self.name = Some(s),
            "minimum" => self.minimum = Some(s),
            "maximum" => self.maximum = Some(s),
            "message" => self.message = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "n" => self.n = Some(value),
            "sizes" => self.sizes = Some(value),
            "max_size" => self.max_size = Some(value),
            "repeat_count" => self.repeat_count = Some(value),
            "points" => self.points = Some(value),
            "rows" => self.rows = Some(value),
            "skipped" => self.skipped = Some(value),
            "count" => self.count = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "iterative_ns" => self.iterative_ns = Some(value),
            "recursive_ns" => self.recursive_ns = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if let Ok(value) = u64::try_from(value) {
            self.record_u64(field, value);
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "recursive_measured" {
            self.recursive_measured = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let value = value.to_string();
        match field.name() {
            "event" => self.event = Some(value),
            "name" => self.name = Some(value),
            "format" => self.format = Some(value),
            "path" => self.path = Some(value),
            "column" => self.column = Some(value),
            "message" => self.message = Some(value),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "dataset_loaded" => format_dataset_loaded(v),
        "rows_skipped" | "category_column_missing" => format_warning(v),
        "samples_generated" => format_samples_generated(v, level),
        "sweep_start" => format_sweep_start(v),
        "size_measured" => format_size_measured(v, level),
        "sweep_end" => format_sweep_end(v),
        "sweep_cancelled" => format_sweep_cancelled(v),
        "compare_end" => format_compare_end(v),
        "report_written" => format_report_written(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_dataset_loaded(v: &EventVisitor) -> String {
    format!(
        "{} {} Dataset loaded │ {} rows │ {} skipped",
        format_elapsed(),
        "●".bright_green(),
        format_count(v.rows).bright_yellow(),
        format_count(v.skipped).yellow()
    )
}

fn format_warning(v: &EventVisitor) -> String {
    let mut output = format!("{} {}", format_elapsed(), "!".bright_red().bold());
    if let Some(ref message) = v.message {
        output.push_str(&format!(" {}", message.yellow()));
    }
    if let Some(skipped) = v.skipped {
        output.push_str(&format!(
            " │ {} rows",
            skipped.to_formatted_string(&Locale::en).bright_yellow()
        ));
    }
    if let Some(ref column) = v.column {
        output.push_str(&format!(" │ column {}", column.bright_yellow()));
    }
    output
}

fn format_samples_generated(v: &EventVisitor, level: Level) -> String {
    if level != Level::DEBUG {
        return String::new();
    }
    format!(
        "{} {} Generated {} samples",
        format_elapsed(),
        "●".bright_black(),
        format_count(v.count).white()
    )
}

fn format_sweep_start(v: &EventVisitor) -> String {
    mark_sweep_start();
    let name = v.name.as_deref().unwrap_or("Benchmark");

    format!(
        "{} {} {} │ {} sizes │ up to n = {} │ {} runs each",
        format_elapsed(),
        "▶".bright_green().bold(),
        name.white().bold(),
        format_count(v.sizes).bright_yellow(),
        format_count(v.max_size).bright_yellow(),
        format_count(v.repeat_count).bright_yellow()
    )
}

fn format_size_measured(v: &EventVisitor, level: Level) -> String {
    if level != Level::DEBUG {
        return String::new();
    }

    let iterative = v.iterative_ns.map(format_nanos).unwrap_or_default();
    let recursive = v
        .recursive_ns
        .map(format_nanos)
        .unwrap_or_else(|| "—".to_string());

    format!(
        "{} {} n = {:>10} │ iterative {:>10} │ recursive {:>10}",
        format_elapsed(),
        "⚡".bright_cyan(),
        format_count(v.n).white(),
        iterative.bright_magenta(),
        recursive.bright_blue()
    )
}

fn format_sweep_end(v: &EventVisitor) -> String {
    let name = v.name.as_deref().unwrap_or("Benchmark");
    let duration = v.duration_ms.unwrap_or(0);

    format!(
        "{} {} {} complete │ {} points │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        name.white().bold(),
        format_count(v.points).bright_yellow(),
        format_duration_ms(duration).yellow()
    )
}

fn format_sweep_cancelled(v: &EventVisitor) -> String {
    format!(
        "{} {} Sweep cancelled before n = {}",
        format_elapsed(),
        "✗".bright_red().bold(),
        format_count(v.n)
    )
}

fn format_compare_end(v: &EventVisitor) -> String {
    let minimum = v.minimum.as_deref().unwrap_or("N/A");
    let maximum = v.maximum.as_deref().unwrap_or("N/A");
    let iterative = v.iterative_ns.map(format_nanos).unwrap_or_default();

    let mut output = format!(
        "{} {} n = {} │ min {} │ max {} │ iterative {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_count(v.n).white(),
        minimum.bright_green(),
        maximum.bright_green(),
        iterative.bright_magenta()
    );
    if v.recursive_measured == Some(false) {
        output.push_str(&format!(" │ {}", "recursive skipped".bright_black()));
    }
    output
}

fn format_report_written(v: &EventVisitor) -> String {
    format!(
        "{} {} {} report → {}",
        format_elapsed(),
        "✓".bright_green(),
        v.format.as_deref().unwrap_or("").white(),
        v.path.as_deref().unwrap_or("").bright_black()
    )
}

fn format_nanos(ns: u64) -> String {
    if ns < 1_000 {
        format!("{}ns", ns)
    } else if ns < 1_000_000 {
        format!("{:.2}µs", ns as f64 / 1_000.0)
    } else if ns < 1_000_000_000 {
        format!("{:.2}ms", ns as f64 / 1_000_000.0)
    } else {
        format!("{:.2}s", ns as f64 / 1_000_000_000.0)
    }
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

    fn debug_enabled(filter: EnvFilter, target_is_data: bool) -> bool {
        let subscriber = tracing_subscriber::registry().with(filter);
        tracing::subscriber::with_default(subscriber, || {
            if target_is_data {
                tracing::enabled!(target: "extrema_data", Level::DEBUG)
            } else {
                tracing::enabled!(target: "extrema_benchmark", Level::DEBUG)
            }
        })
    }

    #[test]
    fn test_rust_log_target_keeps_its_level() {
        let filter = console_filter(Level::INFO, Some("extrema_benchmark=debug"));
        assert!(debug_enabled(filter, false));

        let filter = console_filter(Level::INFO, Some("extrema_benchmark=debug"));
        assert!(!debug_enabled(filter, true));
    }

    #[test]
    fn test_level_applies_without_rust_log() {
        assert!(!debug_enabled(console_filter(Level::INFO, None), false));
        assert!(debug_enabled(console_filter(Level::DEBUG, None), false));
        assert!(debug_enabled(console_filter(Level::DEBUG, Some("")), true));
    }

    #[test]
    fn test_format_nanos() {
        assert_eq!(format_nanos(999), "999ns");
        assert_eq!(format_nanos(1_500), "1.50µs");
        assert_eq!(format_nanos(2_250_000), "2.25ms");
        assert_eq!(format_nanos(3_000_000_000), "3.00s");
    }

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1_500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_size_measured_only_at_debug() {
        let visitor = EventVisitor {
            event: Some("size_measured".to_string()),
            n: Some(1_000),
            iterative_ns: Some(1_200),
            ..EventVisitor::default()
        };

        assert!(format_event(&visitor, Level::INFO).is_empty());
        let line = format_event(&visitor, Level::DEBUG);
        assert!(line.contains("1,000"));
        assert!(line.contains("1.20µs"));
        assert!(line.contains("—"));
    }

    #[test]
    fn test_compare_end_marks_skipped_recursion() {
        let visitor = EventVisitor {
            event: Some("compare_end".to_string()),
            n: Some(10_000),
            minimum: Some("0.8".to_string()),
            maximum: Some("360".to_string()),
            iterative_ns: Some(42),
            recursive_measured: Some(false),
            ..EventVisitor::default()
        };

        let line = format_event(&visitor, Level::INFO);
        assert!(line.contains("10,000"));
        assert!(line.contains("360"));
        assert!(line.contains("recursive skipped"));
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let visitor = EventVisitor {
            event: Some("something_else".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor, Level::INFO).is_empty());
    }
}
