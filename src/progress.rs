//! Progress bar styles for file transfers.

use indicatif::{HumanBytes, ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use std::fmt::Write;

const PROGRESS_CHARS: &str = "━━╾─";

fn smoothed_bytes_per_sec(s: &ProgressState, w: &mut dyn Write) {
    let _ = match (s.pos(), s.elapsed().as_millis()) {
        (pos, elapsed_ms) if elapsed_ms > 0 => write!(
            w,
            "{}/s",
            HumanBytes((pos as f64 * 1000_f64 / elapsed_ms as f64) as u64)
        ),
        _ => write!(w, "-"),
    };
}

/// Style for a transfer whose total size is known.
pub fn bytes_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{prefix:30!} [{elapsed_precise}] [{bar:30!.bright.yellow/dim.white}] {bytes:>9}/{total_bytes:9} @ {smoothed_bytes_per_sec:10}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars(PROGRESS_CHARS)
    .with_key("smoothed_bytes_per_sec", smoothed_bytes_per_sec)
}

/// Style for a transfer without `content-length`: a running byte count.
pub fn unknown_length_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{prefix:30!} [{elapsed_precise}] {spinner:.dim} {bytes:>9} @ {smoothed_bytes_per_sec:10}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_spinner())
    .with_key("smoothed_bytes_per_sec", smoothed_bytes_per_sec)
}

/// A byte counter for one file, drawn on stderr.
///
/// The bar starts without a length; [`set_total`] switches it to the
/// bounded style once the size is known.
pub fn file_progress(file_name: &str) -> ProgressBar {
    let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr_with_hz(10));
    bar.set_style(unknown_length_style());
    bar.set_prefix(file_name.to_string());
    bar
}

/// Switch `bar` to the bounded style for a transfer of `total` bytes.
pub fn set_total(bar: &ProgressBar, total: u64) {
    bar.set_length(total);
    bar.set_style(bytes_style());
}
