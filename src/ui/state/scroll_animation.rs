// SPDX-License-Identifier: MPL-2.0
//! Smooth scroll interpolation.
//!
//! Iced scrollables jump instantly, so navigation clicks run a short ease-out
//! animation over the absolute offset instead. A ~60 Hz tick subscription
//! exists only while an animation is in flight; `sample` takes the current
//! instant explicitly so the curve is testable without a real clock.

use std::time::{Duration, Instant};

/// Duration of a navigation scroll.
pub const SCROLL_DURATION: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started_at: Instant,
}

/// One sampled animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub offset: f32,
    pub finished: bool,
}

impl ScrollAnimation {
    #[must_use]
    pub fn start(from: f32, to: f32, now: Instant) -> Self {
        Self {
            from,
            to,
            started_at: now,
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// The offset for the given instant, with an ease-out cubic curve.
    #[must_use]
    pub fn sample(&self, now: Instant) -> Frame {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= SCROLL_DURATION {
            return Frame {
                offset: self.to,
                finished: true,
            };
        }

        let t = elapsed.as_secs_f32() / SCROLL_DURATION.as_secs_f32();
        let eased = 1.0 - (1.0 - t).powi(3);
        Frame {
            offset: self.from + (self.to - self.from) * eased,
            finished: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin() {
        let now = Instant::now();
        let anim = ScrollAnimation::start(100.0, 500.0, now);
        let frame = anim.sample(now);
        assert_eq!(frame.offset, 100.0);
        assert!(!frame.finished);
    }

    #[test]
    fn finishes_exactly_at_target() {
        let now = Instant::now();
        let anim = ScrollAnimation::start(100.0, 500.0, now);
        let frame = anim.sample(now + SCROLL_DURATION);
        assert_eq!(frame.offset, 500.0);
        assert!(frame.finished);

        let later = anim.sample(now + SCROLL_DURATION * 3);
        assert_eq!(later.offset, 500.0);
        assert!(later.finished);
    }

    #[test]
    fn progress_is_monotone() {
        let now = Instant::now();
        let anim = ScrollAnimation::start(0.0, 1000.0, now);
        let mut previous = -1.0;
        for ms in (0..=400).step_by(40) {
            let frame = anim.sample(now + Duration::from_millis(ms));
            assert!(frame.offset >= previous);
            previous = frame.offset;
        }
    }

    #[test]
    fn ease_out_front_loads_the_motion() {
        let now = Instant::now();
        let anim = ScrollAnimation::start(0.0, 1000.0, now);
        let halfway = anim.sample(now + SCROLL_DURATION / 2);
        // An ease-out curve covers well over half the distance by half time.
        assert!(halfway.offset > 600.0);
    }

    #[test]
    fn scrolling_up_works_too() {
        let now = Instant::now();
        let anim = ScrollAnimation::start(800.0, 0.0, now);
        let frame = anim.sample(now + SCROLL_DURATION / 2);
        assert!(frame.offset < 800.0);
        assert!(frame.offset > 0.0);
    }
}
