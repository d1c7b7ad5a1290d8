use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use ipsae_batch::engine::progress::{Progress, ProgressCallback};
use std::time::Duration;

const SPINNER_TICK: Duration = Duration::from_millis(80);
const SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";
const BAR_TEMPLATE: &str = "{msg:<24} [{bar:40.cyan/blue}] {pos}/{len} pairs ({elapsed})";

/// Draws the batch phases on stderr: a spinner while discovering and writing, a bar with the
/// current structure name while scoring.
#[derive(Clone)]
pub struct CliProgressHandler {
    bar: ProgressBar,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    /// Tracks state without drawing; used with `--quiet`.
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target);
        bar.finish_and_clear();
        Self { bar }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let bar = self.bar.clone();
        Box::new(move |event: Progress| apply(&bar, event))
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn apply(bar: &ProgressBar, event: Progress) {
    match event {
        Progress::PhaseStart { name } => {
            bar.reset();
            bar.set_length(0);
            bar.set_style(style(SPINNER_TEMPLATE));
            bar.set_message(name);
            bar.enable_steady_tick(SPINNER_TICK);
        }
        Progress::PhaseFinish => {
            bar.disable_steady_tick();
            bar.finish_with_message("✓ Done");
        }
        Progress::TaskStart { total_steps } => {
            bar.disable_steady_tick();
            bar.reset();
            bar.set_length(total_steps);
            bar.set_style(style(BAR_TEMPLATE).progress_chars("##-"));
        }
        Progress::TaskIncrement => bar.inc(1),
        Progress::TaskFinish => {
            if let Some(total) = bar.length() {
                bar.set_position(total);
            }
            bar.finish();
        }
        Progress::StatusUpdate { text } => bar.set_message(text),
        Progress::Message(msg) if bar.is_finished() => bar.set_message(msg),
        Progress::Message(msg) => bar.println(format!("  {}", msg)),
    }
}

fn style(template: &str) -> ProgressStyle {
    ProgressStyle::with_template(template).unwrap_or_else(|_| ProgressStyle::default_bar())
}
