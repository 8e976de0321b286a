//! Colored console output for assignment runs.
//!
//! Provides a `tracing` layer that formats engine events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve/phase start and end)
//! - **WARN**: Fallback placements
//! - **DEBUG**: Local search progress and skipped must-pair constraints
//! - **TRACE**: Individual placements and moves

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "groupforge_solver=info,groupforge_scoring=info";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the GroupForge banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();
        install();
    });
}

/// Like [`init`] but without the banner.
pub fn init_quiet() {
    INIT.get_or_init(install);
}

fn install() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(GroupConsoleLayer)
        .try_init();
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since solve start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
  ____                       _____
 / ___|_ __ ___  _   _ _ __ |  ___|__  _ __ __ _  ___
| |  _| '__/ _ \| | | | '_ \| |_ / _ \| '__/ _` |/ _ \
| |_| | | | (_) | |_| | |_) |  _| (_) | | | (_| |  __/
 \____|_|  \___/ \__,_| .__/|_|  \___/|_|  \__, |\___|
                      |_|                  |___/
"#;

    let version_line = format!("                   v{} - Group Assignment Engine\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats engine events with colors.
pub struct GroupConsoleLayer;

impl<S: Subscriber> Layer<S> for GroupConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        if !target.starts_with("groupforge_solver") && !target.starts_with("groupforge_scoring") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let level = *metadata.level();
        let output = format_event(&visitor, level);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    phase: Option<String>,
    phase_index: Option<u64>,
    steps: Option<u64>,
    speed: Option<u64>,
    score: Option<String>,
    step: Option<u64>,
    entity: Option<u64>,
    group: Option<u64>,
    accepted: Option<bool>,
    duration_ms: Option<u64>,
    entity_count: Option<u64>,
    group_count: Option<u64>,
    group_size: Option<u64>,
    constraint_count: Option<u64>,
    feasible: Option<bool>,
    warnings: Option<u64>,
    moves_evaluated: Option<u64>,
    person: Option<String>,
    constraint: Option<String>,
    reason: Option<String>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "phase" => self.phase = Some(s),
            "score" => self.score = Some(s),
            "person" => self.person = Some(s),
            "constraint" => self.constraint = Some(s),
            "reason" => self.reason = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "phase_index" => self.phase_index = Some(value),
            "steps" => self.steps = Some(value),
            "speed" => self.speed = Some(value),
            "step" => self.step = Some(value),
            "entity" => self.entity = Some(value),
            "group" => self.group = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "entity_count" => self.entity_count = Some(value),
            "group_count" => self.group_count = Some(value),
            "group_size" => self.group_size = Some(value),
            "constraint_count" => self.constraint_count = Some(value),
            "warnings" => self.warnings = Some(value),
            "moves_evaluated" => self.moves_evaluated = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            // Greedy steps report their incremental gain as the score
            "score" => self.score = Some(value.to_string()),
            _ => self.record_u64(field, value.max(0) as u64),
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "accepted" => self.accepted = Some(value),
            "feasible" => self.feasible = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "phase" => self.phase = Some(value.to_string()),
            "score" => self.score = Some(value.to_string()),
            "person" => self.person = Some(value.to_string()),
            "constraint" => self.constraint = Some(value.to_string()),
            "reason" => self.reason = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "phase_start" => format_phase_start(v),
        "phase_end" => format_phase_end(v),
        "progress" => format_progress(v),
        "step" => format_step(v, level),
        "fallback" => format_fallback(v),
        "must_pair_skipped" => format_must_pair_skipped(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let people = v.entity_count.unwrap_or(0);
    let groups = v.group_count.unwrap_or(0);
    let size = v.group_size.unwrap_or(0);
    let constraints = v.constraint_count.unwrap_or(0);

    let mut output = format!(
        "{} {} Grouping │ {} people │ {} groups of {} │ {} pairs",
        format_elapsed(),
        "▶".bright_green().bold(),
        people.to_formatted_string(&Locale::en).bright_yellow(),
        groups.to_formatted_string(&Locale::en).bright_yellow(),
        size.to_formatted_string(&Locale::en).bright_yellow(),
        pair_count(people).to_formatted_string(&Locale::en).bright_magenta()
    );

    if constraints > 0 {
        output.push_str(&format!(
            " │ {} constraints",
            constraints.to_formatted_string(&Locale::en).bright_yellow()
        ));
    }

    output
}

fn format_solve_end(v: &EventVisitor) -> String {
    let score = v.score.as_deref().unwrap_or("N/A");
    let is_feasible = v
        .feasible
        .unwrap_or_else(|| !score.contains('-') || score.starts_with("0hard"));
    let warnings = v.warnings.unwrap_or(0);

    let status = if is_feasible {
        "FEASIBLE".bright_green().bold().to_string()
    } else {
        "INFEASIBLE".bright_red().bold().to_string()
    };

    let mut output = format!(
        "{} {} Grouping complete │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_score(score),
        status
    );
    if warnings > 0 {
        output.push_str(&format!(
            " │ {} warnings",
            warnings.to_formatted_string(&Locale::en).yellow()
        ));
    }
    if let Some(moves) = v.moves_evaluated.filter(|m| *m > 0) {
        output.push_str(&format!(
            " │ {} moves",
            moves.to_formatted_string(&Locale::en).bright_magenta()
        ));
    }

    output.push_str("\n\n");
    output.push_str(
        &"╔══════════════════════════════════════════════════════════╗"
            .bright_cyan()
            .to_string(),
    );
    output.push('\n');

    let status_text = if is_feasible {
        "ALL CONSTRAINTS HONORED"
    } else {
        "INFEASIBLE (constraints or capacity violated)"
    };
    let inner_width: usize = 58;
    let total_pad = inner_width.saturating_sub(status_text.len());
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    let status_colored = if is_feasible {
        status_text.bright_green().bold().to_string()
    } else {
        status_text.bright_red().bold().to_string()
    };
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        status_colored,
        " ".repeat(right_pad),
        "║".bright_cyan()
    ));
    output.push('\n');

    output.push_str(
        &"╠══════════════════════════════════════════════════════════╣"
            .bright_cyan()
            .to_string(),
    );
    output.push('\n');

    output.push_str(&format!(
        "{}  {:<18}{:>36}  {}",
        "║".bright_cyan(),
        "Final Score:",
        score,
        "║".bright_cyan()
    ));
    output.push('\n');

    output.push_str(
        &"╚══════════════════════════════════════════════════════════╝"
            .bright_cyan()
            .to_string(),
    );
    output.push('\n');

    output
}

fn format_phase_start(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");

    format!(
        "{} {} {} ({}) started",
        format_elapsed(),
        "▶".bright_blue(),
        phase.white().bold(),
        v.phase_index.unwrap_or(0).to_string().yellow()
    )
}

fn format_phase_end(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");
    let steps = v.steps.unwrap_or(0);
    let score = v.score.as_deref().unwrap_or("N/A");
    let duration = v.duration_ms.unwrap_or(0);

    format!(
        "{} {} {} ended │ {} │ {} steps │ {}",
        format_elapsed(),
        "◀".bright_blue(),
        phase.white().bold(),
        format_duration_ms(duration).yellow(),
        steps.to_formatted_string(&Locale::en).white(),
        format_score(score)
    )
}

fn format_progress(v: &EventVisitor) -> String {
    let steps = v.steps.unwrap_or(0);
    let speed = v.speed.unwrap_or(0);
    let score = v.score.as_deref().unwrap_or("N/A");

    format!(
        "{} {} {:>10} steps │ {:>12}/s │ {}",
        format_elapsed(),
        "⚡".bright_cyan(),
        steps.to_formatted_string(&Locale::en).white(),
        speed
            .to_formatted_string(&Locale::en)
            .bright_magenta()
            .bold(),
        format_score(score)
    )
}

fn format_step(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let step = v.step.unwrap_or(0);
    let score = v.score.as_deref().unwrap_or("N/A");
    let accepted = v.accepted.unwrap_or(false);

    let icon = if accepted {
        "✓".bright_green().to_string()
    } else {
        "✗".bright_red().to_string()
    };

    let mut output = format!(
        "{} {} Step {:>10}",
        format_elapsed(),
        icon,
        step.to_formatted_string(&Locale::en).bright_black(),
    );
    if let (Some(entity), Some(group)) = (v.entity, v.group) {
        output.push_str(&format!(
            " │ Person {:>6} → Group {:>4}",
            entity.to_formatted_string(&Locale::en).bright_black(),
            group.to_formatted_string(&Locale::en).bright_black()
        ));
    }
    output.push_str(&format!(" │ {}", format_score(score).bright_black()));
    output
}

fn format_fallback(v: &EventVisitor) -> String {
    format!(
        "{} {} Fallback │ {} placed in group {} ignoring capacity and constraints",
        format_elapsed(),
        "⚠".yellow().bold(),
        v.person.as_deref().unwrap_or("?").bright_yellow(),
        v.group.unwrap_or(0).to_string().bright_yellow()
    )
}

fn format_must_pair_skipped(v: &EventVisitor) -> String {
    format!(
        "{} {} Must-pair {} skipped │ {}",
        format_elapsed(),
        "·".bright_black(),
        v.constraint.as_deref().unwrap_or("?").white(),
        v.reason.as_deref().unwrap_or("unknown").bright_black()
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

fn format_score(score: &str) -> String {
    if let Some((hard, soft)) = score.split_once('/') {
        let hard = hard.trim_end_matches("hard");
        let soft = soft.trim_end_matches("soft");

        let hard_num: i64 = hard.parse().unwrap_or(0);
        let soft_num: i64 = soft.parse().unwrap_or(0);

        let hard_str = if hard_num < 0 {
            format!("{}hard", hard).bright_red().to_string()
        } else {
            format!("{}hard", hard).bright_green().to_string()
        };

        let soft_str = if soft_num < 0 {
            format!("{}soft", soft).yellow().to_string()
        } else if soft_num > 0 {
            format!("{}soft", soft).bright_green().to_string()
        } else {
            format!("{}soft", soft).white().to_string()
        };

        return format!("{}/{}", hard_str, soft_str);
    }

    if let Ok(n) = score.parse::<i64>() {
        if n < 0 {
            return score.bright_red().to_string();
        } else if n > 0 {
            return score.bright_green().to_string();
        }
    }

    score.white().to_string()
}

// Unordered pairs among `people`, the number of ratings a full survey needs.
fn pair_count(people: u64) -> u64 {
    people * people.saturating_sub(1) / 2
}
