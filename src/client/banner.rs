use std::time::{Duration, Instant};

/// How long an error stays on screen.
pub const DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Transient error message that hides itself after [`DISMISS_AFTER`].
#[derive(Debug, Clone)]
pub struct ErrorBanner {
    message: Option<(String, Instant)>,
    dismiss_after: Duration,
}

impl Default for ErrorBanner {
    fn default() -> Self {
        Self::new(DISMISS_AFTER)
    }
}

impl ErrorBanner {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            message: None,
            dismiss_after,
        }
    }

    pub fn show(&mut self, message: impl Into<String>) {
        self.show_at(message, Instant::now());
    }

    pub fn show_at(&mut self, message: impl Into<String>, now: Instant) {
        self.message = Some((message.into(), now));
    }

    pub fn visible_message(&self) -> Option<&str> {
        self.visible_message_at(Instant::now())
    }

    pub fn visible_message_at(&self, now: Instant) -> Option<&str> {
        match &self.message {
            Some((message, shown_at))
                if now.saturating_duration_since(*shown_at) < self.dismiss_after =>
            {
                Some(message)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_hides_after_delay() {
        let mut banner = ErrorBanner::default();
        let shown = Instant::now();
        banner.show_at("Please fill all required fields!", shown);

        assert_eq!(
            banner.visible_message_at(shown + Duration::from_secs(4)),
            Some("Please fill all required fields!")
        );
        assert_eq!(banner.visible_message_at(shown + DISMISS_AFTER), None);
    }

    #[test]
    fn test_new_message_restarts_timer() {
        let mut banner = ErrorBanner::default();
        let first = Instant::now();
        banner.show_at("first", first);
        banner.show_at("second", first + Duration::from_secs(4));

        assert_eq!(
            banner.visible_message_at(first + Duration::from_secs(6)),
            Some("second")
        );
    }
}
