//! The hero headline cycle: type a phrase, hold it, delete it, move on.

use std::time::Duration;

pub const TYPE_INTERVAL: Duration = Duration::from_millis(150);
pub const DELETE_INTERVAL: Duration = Duration::from_millis(50);
pub const HOLD_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    index: usize,
    shown: usize,
    phase: Phase,
    elapsed: Duration,
}

impl Typewriter {
    pub fn new<S: Into<String>>(phrases: impl IntoIterator<Item = S>) -> Self {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        Self {
            phrases,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            elapsed: Duration::ZERO,
        }
    }

    /// The currently visible prefix of the active phrase
    pub fn visible(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.index) else {
            return "";
        };
        match phrase.char_indices().nth(self.shown) {
            Some((byte, _)) => &phrase[..byte],
            None => phrase,
        }
    }

    /// Advance by a frame's worth of wall time
    pub fn advance(&mut self, dt: Duration) {
        if self.phrases.is_empty() {
            return;
        }
        self.elapsed += dt;
        loop {
            let interval = match self.phase {
                Phase::Typing => TYPE_INTERVAL,
                Phase::Holding => HOLD_DELAY,
                Phase::Deleting => DELETE_INTERVAL,
            };
            if self.elapsed < interval {
                break;
            }
            self.elapsed -= interval;
            self.step();
        }
    }

    fn step(&mut self) {
        let len = self.phrases[self.index].chars().count();
        match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown == len {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
            }
            Phase::Deleting => {
                if self.shown > 0 {
                    self.shown -= 1;
                }
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_one_character_per_interval() {
        let mut tw = Typewriter::new(["abc"]);
        assert_eq!(tw.visible(), "");
        tw.advance(TYPE_INTERVAL);
        assert_eq!(tw.visible(), "a");
        tw.advance(TYPE_INTERVAL);
        assert_eq!(tw.visible(), "ab");
        tw.advance(TYPE_INTERVAL);
        assert_eq!(tw.visible(), "abc");
    }

    #[test]
    fn test_holds_before_deleting() {
        let mut tw = Typewriter::new(["ab"]);
        tw.advance(TYPE_INTERVAL * 2);
        assert_eq!(tw.visible(), "ab");

        // Still holding just before the delay elapses
        tw.advance(HOLD_DELAY - Duration::from_millis(1));
        assert_eq!(tw.visible(), "ab");

        tw.advance(Duration::from_millis(1) + DELETE_INTERVAL);
        assert_eq!(tw.visible(), "a");
    }

    #[test]
    fn test_cycles_to_the_next_phrase() {
        let mut tw = Typewriter::new(["ab", "xy"]);
        tw.advance(TYPE_INTERVAL * 2);
        tw.advance(HOLD_DELAY);
        tw.advance(DELETE_INTERVAL * 2);
        assert_eq!(tw.visible(), "");
        tw.advance(TYPE_INTERVAL);
        assert_eq!(tw.visible(), "x");
    }

    #[test]
    fn test_single_phrase_wraps_onto_itself() {
        let mut tw = Typewriter::new(["hi"]);
        tw.advance(TYPE_INTERVAL * 2 + HOLD_DELAY + DELETE_INTERVAL * 2 + TYPE_INTERVAL);
        assert_eq!(tw.visible(), "h");
    }

    #[test]
    fn test_empty_phrase_list_is_inert() {
        let mut tw = Typewriter::new(Vec::<String>::new());
        tw.advance(Duration::from_secs(10));
        assert_eq!(tw.visible(), "");
    }
}
