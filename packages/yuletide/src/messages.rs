//! Everything the page says to the visitor.
//!
//! Message selection is kept separate from the randomness that drives it:
//! [`choose`] takes any [`IndexSource`], so tests can pin the pick while the
//! app draws from a seeded [`RandomIndex`].

use rand::{rngs::SmallRng, Rng, SeedableRng};
use yuletide_geolocation::Error;

/// Shown after the visitor agreed to share their location.
pub const SUCCESS: &[&str] = &[
    "Ho Ho Ho! Thank you for sharing your location! 🎅",
    "Christmas magic is on its way! Your surprise is being planned! 🎄",
    "Your location has been received! Get ready for a festive surprise! 🎁",
];

/// Appended when the visitor said no.
pub const SYMPATHY: &[&str] = &[
    "That's okay! The Christmas spirit is in our hearts, not our locations! 🎄",
    "No worries! The magic of Christmas is everywhere! ✨",
    "That's perfectly fine! Wishing you a wonderful Christmas anyway! 🎅",
];

/// Appended when the position could not be read for any other reason.
pub const FALLBACK: &str =
    "Even without your location, I wish you the merriest Christmas filled with joy and warmth! ❤️";

pub const UNSUPPORTED: &str =
    "Sorry, geolocation is not supported by your browser. But still, Merry Christmas! 🎄";

pub const CHECKING: &str = "Checking for location access... Please allow if prompted.";

pub const DENIED_PREFIX: &str = "You chose not to share your location. ";
pub const UNAVAILABLE_PREFIX: &str = "Location information is unavailable. ";
pub const TIMEOUT_PREFIX: &str = "The request to get your location timed out. ";
pub const UNKNOWN_PREFIX: &str = "An unknown error occurred. ";

/// A source of indices into a list of `len` items.
pub trait IndexSource {
    fn next_index(&mut self, len: usize) -> usize;
}

impl<F: FnMut(usize) -> usize> IndexSource for F {
    fn next_index(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// Uniformly random indices from a small, non-cryptographic generator.
#[derive(Debug, Clone)]
pub struct RandomIndex(SmallRng);

impl RandomIndex {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    /// Seed from the wall clock. Good enough for picking a greeting.
    pub fn from_clock() -> Self {
        Self::seeded(chrono::Utc::now().timestamp_micros().unsigned_abs())
    }
}

impl IndexSource for RandomIndex {
    fn next_index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Pick one entry of `choices`. Out-of-range indices wrap around.
pub fn choose<'a>(choices: &[&'a str], source: &mut dyn IndexSource) -> Option<&'a str> {
    if choices.is_empty() {
        return None;
    }

    let index = source.next_index(choices.len()) % choices.len();
    choices.get(index).copied()
}

/// The reason-specific opening of a failure message.
///
/// A missing capability has no prefix, its message is [`UNSUPPORTED`] as is.
pub fn failure_prefix(error: &Error) -> &'static str {
    match error {
        Error::Unsupported => "",
        Error::PermissionDenied => DENIED_PREFIX,
        Error::PositionUnavailable => UNAVAILABLE_PREFIX,
        Error::Timeout => TIMEOUT_PREFIX,
        Error::Unknown(_) => UNKNOWN_PREFIX,
    }
}

/// The full status text for a position request that did not succeed.
///
/// A refusal gets one of the sympathetic messages, everything else gets the
/// fixed fallback.
pub fn failure_message(error: &Error, source: &mut dyn IndexSource) -> String {
    if *error == Error::Unsupported {
        return UNSUPPORTED.to_string();
    }

    let suffix = match error {
        Error::PermissionDenied => choose(SYMPATHY, source).unwrap_or(FALLBACK),
        _ => FALLBACK,
    };

    format!("{}{}", failure_prefix(error), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(index: usize) -> impl FnMut(usize) -> usize {
        move |_| index
    }

    #[test]
    fn choose_uses_the_given_index() {
        assert_eq!(choose(SUCCESS, &mut fixed(1)), Some(SUCCESS[1]));
        assert_eq!(choose(SUCCESS, &mut fixed(5)), Some(SUCCESS[2]));
        assert_eq!(choose(&[], &mut fixed(0)), None);
    }

    #[test]
    fn random_index_stays_in_bounds() {
        let mut source = RandomIndex::seeded(7);
        for _ in 0..100 {
            assert!(source.next_index(3) < 3);
        }
    }

    #[test]
    fn every_failure_has_its_prefix() {
        let errors = [
            Error::PermissionDenied,
            Error::PositionUnavailable,
            Error::Timeout,
            Error::Unknown(0),
            Error::Unknown(17),
        ];

        for error in errors {
            let message = failure_message(&error, &mut fixed(0));
            assert!(message.starts_with(failure_prefix(&error)), "{message}");
            assert!(message.len() > failure_prefix(&error).len());
        }
    }

    #[test]
    fn missing_capability_is_not_prefixed() {
        let message = failure_message(&Error::Unsupported, &mut fixed(0));
        assert_eq!(failure_prefix(&Error::Unsupported), "");
        assert!(message.starts_with(failure_prefix(&Error::Unsupported)));
        assert_eq!(message, UNSUPPORTED);
    }

    #[test]
    fn refusal_is_met_with_sympathy() {
        let message = failure_message(&Error::PermissionDenied, &mut fixed(2));
        assert_eq!(message, format!("{DENIED_PREFIX}{}", SYMPATHY[2]));
    }

    #[test]
    fn other_failures_fall_back() {
        let message = failure_message(&Error::Timeout, &mut fixed(2));
        assert_eq!(message, format!("{TIMEOUT_PREFIX}{FALLBACK}"));
    }
}
