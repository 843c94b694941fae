// SPDX-License-Identifier: MPL-2.0
//! Named defaults and valid ranges for user-tunable settings.

/// Default interval between rotating-headline ticks, in milliseconds.
pub const DEFAULT_ROTATION_INTERVAL_MS: u64 = 2_500;

/// Minimum rotation interval. Anything faster is unreadable.
pub const MIN_ROTATION_INTERVAL_MS: u64 = 500;

/// Maximum rotation interval.
pub const MAX_ROTATION_INTERVAL_MS: u64 = 30_000;

/// Default typewriter speed, in characters per second.
pub const DEFAULT_TYPING_CHARS_PER_SECOND: f32 = 40.0;

/// Minimum typewriter speed.
pub const MIN_TYPING_CHARS_PER_SECOND: f32 = 1.0;

/// Maximum typewriter speed. 240 cps is one character per 60 Hz frame.
pub const MAX_TYPING_CHARS_PER_SECOND: f32 = 240.0;

/// Default endpoint of the email relay (EmailJS-compatible REST API).
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_defaults_are_within_range() {
        assert!(DEFAULT_ROTATION_INTERVAL_MS >= MIN_ROTATION_INTERVAL_MS);
        assert!(DEFAULT_ROTATION_INTERVAL_MS <= MAX_ROTATION_INTERVAL_MS);
    }

    #[test]
    fn typing_defaults_are_within_range() {
        assert!(DEFAULT_TYPING_CHARS_PER_SECOND >= MIN_TYPING_CHARS_PER_SECOND);
        assert!(DEFAULT_TYPING_CHARS_PER_SECOND <= MAX_TYPING_CHARS_PER_SECOND);
    }
}
