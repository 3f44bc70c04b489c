//! Screen-reader announcements.
//!
//! Messages are built by [`Announcement`] constructors and delivered through an
//! [`Announcer`], which models the live region: scheduling a message clears the
//! live text right away and publishes the new text once a fixed delay has
//! elapsed. Some screen readers ignore a clear immediately followed by the same
//! text, so the gap is required.
//!
//! Scheduling is last-write-wins. If a second message is scheduled before the
//! first one is due, the first is dropped and only the most recent text is
//! guaranteed to be published.

use std::fmt;
use std::time::{Duration, Instant};

/// A single message for the live region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement(String);

impl Announcement {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn opened(available: usize, noun: &str) -> Self {
        Self(format!(
            "Dropdown opened. {} {} available.",
            available,
            plural(noun, available)
        ))
    }

    pub fn found(matches: usize, noun: &str) -> Self {
        if matches == 0 {
            Self(format!("No {} found.", plural(noun, 0)))
        } else {
            Self(format!("{} {} found.", matches, plural(noun, matches)))
        }
    }

    pub fn selected(label: &str, total: usize, noun: &str) -> Self {
        Self(format!(
            "{} selected. {} {} selected.",
            label,
            total,
            plural(noun, total)
        ))
    }

    pub fn already_selected(label: &str) -> Self {
        Self(format!("{} is already selected.", label))
    }

    pub fn removed(label: &str, total: usize, noun: &str) -> Self {
        Self(format!(
            "{} removed. {} {} selected.",
            label,
            total,
            plural(noun, total)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn plural(noun: &str, count: usize) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}

#[derive(Debug, Clone)]
struct Pending {
    message: Announcement,
    due: Instant,
}

/// Deferred writer for the live region text.
#[derive(Debug, Clone)]
pub struct Announcer {
    delay: Duration,
    live_text: String,
    pending: Option<Pending>,
}

impl Announcer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            live_text: String::new(),
            pending: None,
        }
    }

    /// Schedule `message` relative to the current time.
    pub fn schedule(&mut self, message: Announcement) {
        self.schedule_at(message, Instant::now());
    }

    /// Schedule `message` relative to `now` (useful for testing).
    ///
    /// Clears the live text immediately and replaces any pending message.
    pub fn schedule_at(&mut self, message: Announcement, now: Instant) {
        if let Some(superseded) = self.pending.take() {
            tracing::trace!(message = %superseded.message, "Pending announcement superseded");
        }
        self.live_text.clear();
        self.pending = Some(Pending {
            message,
            due: now + self.delay,
        });
    }

    /// Publish the pending message if its delay has elapsed.
    /// Call this once per frame in the event loop.
    pub fn poll(&mut self) -> Option<&str> {
        self.poll_at(Instant::now())
    }

    /// Poll with an explicit clock (useful for testing).
    pub fn poll_at(&mut self, now: Instant) -> Option<&str> {
        let is_due = self.pending.as_ref().is_some_and(|p| now >= p.due);
        if !is_due {
            return None;
        }
        let pending = self.pending.take()?;
        self.live_text = pending.message.0;
        tracing::debug!(text = %self.live_text, "Announcement published");
        Some(self.live_text.as_str())
    }

    /// Text currently exposed to assistive technology.
    pub fn live_text(&self) -> &str {
        &self.live_text
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(100);

    #[test]
    fn test_messages() {
        assert_eq!(
            Announcement::opened(9, "destination").as_str(),
            "Dropdown opened. 9 destinations available."
        );
        assert_eq!(
            Announcement::found(1, "destination").as_str(),
            "1 destination found."
        );
        assert_eq!(
            Announcement::found(0, "destination").as_str(),
            "No destinations found."
        );
        assert_eq!(
            Announcement::selected("Austria", 1, "destination").as_str(),
            "Austria selected. 1 destination selected."
        );
        assert_eq!(
            Announcement::already_selected("Austria").as_str(),
            "Austria is already selected."
        );
        assert_eq!(
            Announcement::removed("Canada", 0, "destination").as_str(),
            "Canada removed. 0 destinations selected."
        );
    }

    #[test]
    fn test_schedule_clears_immediately() {
        let start = Instant::now();
        let mut announcer = Announcer::new(DELAY);
        announcer.schedule_at(Announcement::new("first"), start);
        announcer.poll_at(start + DELAY);
        assert_eq!(announcer.live_text(), "first");

        announcer.schedule_at(Announcement::new("second"), start + DELAY);
        assert_eq!(announcer.live_text(), "");
        assert!(announcer.has_pending());
    }

    #[test]
    fn test_not_published_before_delay() {
        let start = Instant::now();
        let mut announcer = Announcer::new(DELAY);
        announcer.schedule_at(Announcement::new("hello"), start);
        assert_eq!(announcer.poll_at(start + Duration::from_millis(99)), None);
        assert_eq!(announcer.live_text(), "");
        assert_eq!(announcer.poll_at(start + DELAY), Some("hello"));
        assert!(!announcer.has_pending());
    }

    #[test]
    fn test_last_write_wins() {
        let start = Instant::now();
        let mut announcer = Announcer::new(DELAY);
        announcer.schedule_at(Announcement::new("first"), start);
        announcer.schedule_at(Announcement::new("second"), start + Duration::from_millis(50));

        // The first message's due time has passed but it was superseded.
        assert_eq!(announcer.poll_at(start + DELAY), None);
        assert_eq!(
            announcer.poll_at(start + Duration::from_millis(150)),
            Some("second")
        );
        assert_eq!(announcer.poll_at(start + Duration::from_secs(1)), None);
        assert_eq!(announcer.live_text(), "second");
    }

    #[test]
    fn test_zero_delay_publishes_on_next_poll() {
        let start = Instant::now();
        let mut announcer = Announcer::new(Duration::ZERO);
        announcer.schedule_at(Announcement::new("now"), start);
        assert_eq!(announcer.poll_at(start), Some("now"));
    }
}
