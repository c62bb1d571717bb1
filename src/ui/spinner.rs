use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// The "typing..." indicator shown before each bot reply.
///
/// Three dots pulse left to right next to a message such as
/// `Ada is typing...`. The chat session keeps one alive for the profile's
/// `typing_delay_ms` and skips it entirely in quiet mode or with `--fast`,
/// so replies printed to a pipe never contain spinner frames.
///
/// Clears itself from the line when stopped or dropped.
pub struct Spinner {
    progress_bar: ProgressBar,
}

impl Spinner {
    /// Creates and starts a new spinner with the given message.
    #[allow(clippy::unwrap_used)]
    pub fn new(message: &str) -> Self {
        let progress_bar = ProgressBar::new_spinner();
        // unwrap is safe: template string is a compile-time constant
        progress_bar.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&["·  ", "·· ", "···", " ··", "  ·", "   "])
                .template("{spinner} {msg}")
                .unwrap(),
        );
        progress_bar.set_message(message.to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(120));

        Self { progress_bar }
    }

    /// Stops the spinner and clears it from the terminal.
    pub fn stop(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}
