//! Colorful console output for scheduler runs.
//!
//! Provides a custom `tracing` layer that formats search events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Search start and end, dead ends when `verbose` is set
//! - **DEBUG**: Rising-chief pre-pass and variable order
//! - **TRACE**: Individual assign, undo and free-block steps

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_DIRECTIVE: &str = "rotaforge_solver=info";

/// Initializes the scheduler console output.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` overrides the default `rotaforge_solver=info` filter.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SchedulerConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
 ____       _        _____
|  _ \ ___ | |_ __ _|  ___|__  _ __ __ _  ___
| |_) / _ \| __/ _` | |_ / _ \| '__/ _` |/ _ \
|  _ < (_) | || (_| |  _| (_) | | | (_| |  __/
|_| \_\___/ \__\__,_|_|  \___/|_|  \__, |\___|
                                   |___/
"#;

    let version_line = format!(
        "              v{} - Residency Rotation Scheduler\n",
        env!("CARGO_PKG_VERSION")
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats scheduler events with colors.
pub struct SchedulerConsoleLayer;

impl<S: Subscriber> Layer<S> for SchedulerConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();

        // Only handle rotaforge_solver events
        if !target.starts_with("rotaforge_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    resident: Option<String>,
    resident_count: Option<u64>,
    service_count: Option<u64>,
    block_count: Option<u64>,
    pair_count: Option<u64>,
    weeks_per_year: Option<u64>,
    seed: Option<u64>,
    randomize: Option<bool>,
    feasible: Option<bool>,
    nodes: Option<u64>,
    backtracks: Option<u64>,
    free_blocks: Option<u64>,
    dead_ends: Option<u64>,
    duration_ms: Option<u64>,
    block: Option<u64>,
    remaining_residents: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "resident" => self.resident = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "resident_count" => self.resident_count = Some(value),
            "service_count" => self.service_count = Some(value),
            "block_count" => self.block_count = Some(value),
            "pair_count" => self.pair_count = Some(value),
            "weeks_per_year" => self.weeks_per_year = Some(value),
            "seed" => self.seed = Some(value),
            "nodes" => self.nodes = Some(value),
            "backtracks" => self.backtracks = Some(value),
            "free_blocks" => self.free_blocks = Some(value),
            "dead_ends" => self.dead_ends = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "block" => self.block = Some(value),
            "remaining_residents" => self.remaining_residents = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "randomize" => self.randomize = Some(value),
            "feasible" => self.feasible = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "resident" => self.resident = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "search_start" => format_search_start(v),
        "search_end" => format_search_end(v),
        "dead_end" => format_dead_end(v),
        _ => String::new(),
    }
}

fn format_search_start(v: &EventVisitor) -> String {
    let residents = v.resident_count.unwrap_or(0);
    let services = v.service_count.unwrap_or(0);
    let blocks = v.block_count.unwrap_or(0);
    let pairs = v.pair_count.unwrap_or(0);
    let weeks = v.weeks_per_year.unwrap_or(0);
    // Each pair takes one of the services or a free block.
    let scale = calculate_problem_scale(pairs as usize, services as usize + 1);

    let tiebreak = if v.randomize.unwrap_or(false) {
        format!("seed {}", v.seed.unwrap_or(0))
    } else {
        "index order".to_string()
    };

    format!(
        "{} {} {} {} residents │ {} services │ {} blocks ({} weeks) │ scale {} │ {}",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Search]".bright_cyan(),
        residents.to_formatted_string(&Locale::en).bright_yellow(),
        services.to_formatted_string(&Locale::en).bright_yellow(),
        blocks.to_formatted_string(&Locale::en).bright_yellow(),
        weeks.to_formatted_string(&Locale::en),
        scale.bright_magenta(),
        tiebreak.white()
    )
}

fn format_search_end(v: &EventVisitor) -> String {
    let feasible = v.feasible.unwrap_or(false);
    let duration_ms = v.duration_ms.unwrap_or(0);

    let mut output = format!(
        "{} {} {} Search ended in {}",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Search]".bright_cyan(),
        format_duration_ms(duration_ms).yellow()
    );

    output.push_str("\n\n");
    output.push_str(&"╔══════════════════════════════════════════════════════════╗".bright_cyan().to_string());
    output.push('\n');

    let status_text = if feasible {
        "SCHEDULE FOUND"
    } else {
        "NO VALID SCHEDULE"
    };
    let status_colored = if feasible {
        format!("  {}  ", status_text).bright_green().bold().to_string()
    } else {
        format!("  {}  ", status_text).bright_red().bold().to_string()
    };
    let status_padding = 56 - status_text.len() - 4;
    let left_pad = status_padding / 2;
    let right_pad = status_padding - left_pad;
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        status_colored,
        " ".repeat(right_pad),
        "║".bright_cyan()
    ));
    output.push('\n');

    output.push_str(&"╠══════════════════════════════════════════════════════════╣".bright_cyan().to_string());
    output.push('\n');

    let rows = [
        ("Nodes:", v.nodes.unwrap_or(0)),
        ("Backtracks:", v.backtracks.unwrap_or(0)),
        ("Free blocks:", v.free_blocks.unwrap_or(0)),
        ("Dead ends:", v.dead_ends.unwrap_or(0)),
    ];
    for (label, value) in rows {
        output.push_str(&format!(
            "{}  {:<18}{:>36}  {}",
            "║".bright_cyan(),
            label,
            value.to_formatted_string(&Locale::en),
            "║".bright_cyan()
        ));
        output.push('\n');
    }

    output.push_str(&"╚══════════════════════════════════════════════════════════╝".bright_cyan().to_string());
    output.push('\n');

    output
}

fn format_dead_end(v: &EventVisitor) -> String {
    format!(
        "    {} Block {:>3} | {} | {} residents left",
        "x".bright_red(),
        v.block.unwrap_or(0).to_string().white(),
        v.resident.as_deref().unwrap_or("?"),
        v.remaining_residents.unwrap_or(0).to_string().yellow()
    )
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
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

// value_count ^ pair_count, in scientific notation
fn calculate_problem_scale(pair_count: usize, value_count: usize) -> String {
    if pair_count == 0 || value_count == 0 {
        return "0".to_string();
    }

    let log_scale = (pair_count as f64) * (value_count as f64).log10();
    let exponent = log_scale.floor() as i32;
    let mantissa = 10f64.powf(log_scale - exponent as f64);

    format!("{:.3} x 10^{}", mantissa, exponent)
}
