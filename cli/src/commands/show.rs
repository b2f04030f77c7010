use std::time::{Duration, Instant};

use anyhow::anyhow;
use colored::*;
use tracing::{info, warn};

use solid_common::config::Config;
use solid_common::output::Sink;
use solid_core::lesson::{self, Lesson, Principle};

use crate::mprint;
use crate::terminal::{colors, print};

/// Plays one lesson and returns how many violations surfaced.
pub fn show(principle: Principle, cfg: &Config, sink: &dyn Sink) -> anyhow::Result<usize> {
    let lesson: Box<dyn Lesson> =
        lesson::find(principle).ok_or_else(|| anyhow!("no lesson teaches {principle}"))?;

    let start_time: Instant = Instant::now();
    let failures: usize = play(lesson.as_ref(), cfg, sink)?;
    print_summary("Lesson Complete", 1, failures, start_time.elapsed(), cfg);
    Ok(failures)
}

/// Plays every lesson and returns how many violations surfaced.
pub fn tour(cfg: &Config, sink: &dyn Sink) -> anyhow::Result<usize> {
    let lessons: Vec<Box<dyn Lesson>> = lesson::catalog();

    let start_time: Instant = Instant::now();
    let mut failures: usize = 0;
    for (idx, lesson) in lessons.iter().enumerate() {
        failures += play(lesson.as_ref(), cfg, sink)?;
        if idx + 1 != lessons.len() {
            mprint!();
        }
    }
    print_summary("Tour Complete", lessons.len(), failures, start_time.elapsed(), cfg);
    Ok(failures)
}

/// Plays the halves selected by `cfg`. A failing `before` is the lesson and
/// only counts; a failing `after` is a real error.
fn play(lesson: &dyn Lesson, cfg: &Config, sink: &dyn Sink) -> anyhow::Result<usize> {
    let principle: Principle = lesson.principle();
    let mut failures: usize = 0;

    print::header(&principle.to_string(), cfg.quiet);
    if cfg.quiet == 0 {
        print::aligned_line("Domain", principle.domain());
        print::aligned_line("Rule", principle.summary());
    }

    if cfg.contrast.shows_before() {
        print::phase("before", colors::BEFORE, cfg.quiet);
        if let Err(err) = lesson.before(sink) {
            failures += 1;
            warn!("{} violation surfaced: {}", principle.acronym(), err);
        }
    }

    if cfg.contrast.shows_after() {
        print::phase("after", colors::AFTER, cfg.quiet);
        lesson
            .after(sink)
            .map_err(|err| anyhow!("{} compliant version failed: {err}", principle.acronym()))?;
    }

    Ok(failures)
}

fn print_summary(title: &str, lessons: usize, failures: usize, total_time: Duration, cfg: &Config) {
    let played: ColoredString = plural(lessons, "lesson").bold().green();
    let failed: ColoredString = plural(failures, "violation").bold().red();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString =
        format!("{title}: {played} played, {failed} surfaced in {total_time}")
            .color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        1 => {
            mprint!();
            info!("{}", output)
        }
        _ => {}
    }
}

fn plural(count: usize, noun: &str) -> String {
    match count {
        1 => format!("{count} {noun}"),
        _ => format!("{count} {noun}s"),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
