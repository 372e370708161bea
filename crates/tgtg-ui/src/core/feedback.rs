//! Feedback line rendered under a form after each submission attempt.

use std::time::Duration;

/// Delay after which auto-hiding feedback lines are removed.
pub const AUTO_HIDE_DELAY: Duration = Duration::from_secs(5);

/// Outcome category of a feedback line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    /// Server accepted the submission.
    Success,
    /// Server rejected it, input was missing, or the request failed.
    Error,
    /// Request is in flight.
    Info,
}

impl FeedbackKind {
    /// Bracketed glyph prefixing the line.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
            Self::Info => "ℹ",
        }
    }

    /// CSS class applied to the glyph.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "warning",
        }
    }

    /// Terminal-style label preceding the message.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Success => "SYSTEM_RESPONSE",
            Self::Error => "SYSTEM_ERROR",
            Self::Info => "SYSTEM_INFO",
        }
    }
}

/// A single rendered outcome line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackLine {
    /// Outcome category.
    pub kind: FeedbackKind,
    /// Message shown after the label.
    pub message: String,
    /// Removal delay, when the line hides itself.
    pub auto_hide: Option<Duration>,
}

impl FeedbackLine {
    /// Success line that stays until replaced.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(FeedbackKind::Success, message)
    }

    /// Error line that stays until replaced.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(FeedbackKind::Error, message)
    }

    /// Informational line that stays until replaced.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(FeedbackKind::Info, message)
    }

    fn new(kind: FeedbackKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            auto_hide: None,
        }
    }

    /// Attach a removal delay.
    #[must_use]
    pub fn hiding_after(mut self, delay: Duration) -> Self {
        self.auto_hide = Some(delay);
        self
    }

    /// Timer delay in milliseconds, when the line hides itself.
    ///
    /// Delays beyond `u32::MAX` ms saturate.
    #[must_use]
    pub fn hide_after_millis(&self) -> Option<u32> {
        self.auto_hide
            .map(|delay| u32::try_from(delay.as_millis()).unwrap_or(u32::MAX))
    }

    /// Bracketed glyph, e.g. `[✓]`.
    #[must_use]
    pub fn marker(&self) -> String {
        format!("[{}]", self.kind.icon())
    }

    /// Label with its trailing colon, e.g. `SYSTEM_RESPONSE:`.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{}:", self.kind.label())
    }
}

/// Auto-hide timer for the line currently shown under a form.
///
/// `T` is the timer handle; dropping it must cancel the timer.
#[derive(Debug)]
pub struct FeedbackSlot<T> {
    timer: Option<T>,
}

impl<T> Default for FeedbackSlot<T> {
    fn default() -> Self {
        Self { timer: None }
    }
}

impl<T> FeedbackSlot<T> {
    /// Drop the pending timer and arm a new one if `line` hides itself.
    ///
    /// `arm` is called with [`FeedbackLine::hide_after_millis`].
    pub fn show(&mut self, line: &FeedbackLine, arm: impl FnOnce(u32) -> T) {
        self.timer = None;
        self.timer = line.hide_after_millis().map(arm);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct TimerHandle {
        millis: u32,
        cancelled: Rc<Cell<u32>>,
    }

    impl Drop for TimerHandle {
        fn drop(&mut self) {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }

    #[test]
    fn success_and_error_lines_use_distinct_glyphs() {
        let ok = FeedbackLine::success("OK");
        let err = FeedbackLine::error("X");
        assert_eq!(ok.marker(), "[✓]");
        assert_eq!(ok.heading(), "SYSTEM_RESPONSE:");
        assert_eq!(err.marker(), "[✗]");
        assert_eq!(err.heading(), "SYSTEM_ERROR:");
        assert_eq!(ok.kind.css_class(), "success");
        assert_eq!(err.kind.css_class(), "error");
        assert_eq!(FeedbackKind::Info.css_class(), "warning");
    }

    #[test]
    fn auto_hide_timer_fires_at_five_seconds() {
        let line = FeedbackLine::success("Unsubscribed").hiding_after(AUTO_HIDE_DELAY);
        let millis = line.hide_after_millis();
        assert_eq!(millis, Some(5_000));
        assert!(millis.is_some_and(|ms| ms > 4_900));
    }

    #[test]
    fn lines_without_delay_arm_no_timer() {
        let mut slot = FeedbackSlot::<TimerHandle>::default();
        slot.show(&FeedbackLine::error("Network error. Please try again."), |_| {
            panic!("persistent lines must not arm a timer");
        });
        assert!(slot.timer.is_none());
    }

    #[test]
    fn oversized_delay_saturates() {
        let line = FeedbackLine::info("slow").hiding_after(Duration::from_secs(u64::MAX / 1_000));
        assert_eq!(line.hide_after_millis(), Some(u32::MAX));
    }

    #[test]
    fn newer_line_cancels_pending_hide() {
        let cancelled = Rc::new(Cell::new(0));
        let mut armed = Vec::new();
        let mut slot = FeedbackSlot::default();

        let first = FeedbackLine::success("Unsubscribed").hiding_after(AUTO_HIDE_DELAY);
        slot.show(&first, |millis| {
            armed.push(millis);
            TimerHandle {
                millis,
                cancelled: Rc::clone(&cancelled),
            }
        });
        assert!(slot.timer.is_some());
        assert_eq!(cancelled.get(), 0);

        slot.show(&FeedbackLine::info("Processing removal request..."), |millis| TimerHandle {
            millis,
            cancelled: Rc::clone(&cancelled),
        });
        assert_eq!(armed, vec![5_000]);
        assert_eq!(cancelled.get(), 1, "replacing the line must drop the old timer");
        assert!(slot.timer.is_none());
    }

    #[test]
    fn rearming_keeps_only_the_latest_timer() {
        let cancelled = Rc::new(Cell::new(0));
        let mut slot = FeedbackSlot::default();
        for _ in 0..2 {
            let line = FeedbackLine::success("Unsubscribed").hiding_after(AUTO_HIDE_DELAY);
            slot.show(&line, |millis| TimerHandle {
                millis,
                cancelled: Rc::clone(&cancelled),
            });
        }
        assert_eq!(cancelled.get(), 1);
        assert_eq!(slot.timer.as_ref().map(|timer| timer.millis), Some(5_000));
    }
}
