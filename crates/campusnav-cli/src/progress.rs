use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for the slideshow, one step per photo
pub fn create_slide_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{msg}\n[{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░ ");
    pb.set_style(style);
    pb
}

/// A bar that draws nothing, for JSON output
pub fn hidden_bar() -> ProgressBar {
    ProgressBar::hidden()
}

/// Finish a progress bar with success message
pub fn finish_success(pb: &ProgressBar, message: &str) {
    pb.finish_with_message(format!("✓ {}", message));
}

/// Finish a progress bar with a cancellation message
pub fn finish_stopped(pb: &ProgressBar, message: &str) {
    pb.abandon_with_message(format!("■ {}", message));
}
