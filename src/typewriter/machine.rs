use std::time::Duration;

use super::{TypewriterConfig, TypewriterError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausingAfterTyped,
    Deleting,
}

/// Time-free typewriter state machine.
///
/// Every call to [`Typewriter::tick`] performs exactly one transition and
/// returns how long to wait before the next one. The caller owns the clock.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    type_interval: Duration,
    delete_interval: Duration,
    pause: Duration,
    loop_forever: bool,
    phrase_index: usize,
    visible_len: usize,
    phase: Phase,
    halted: bool,
}

impl Typewriter {
    pub fn new(config: &TypewriterConfig) -> Result<Self, TypewriterError> {
        config.validate()?;
        Ok(Self {
            phrases: config.phrases.clone(),
            type_interval: config.type_interval(),
            delete_interval: config.delete_interval(),
            pause: config.pause(),
            loop_forever: config.loop_forever,
            phrase_index: 0,
            visible_len: 0,
            phase: Phase::Typing,
            halted: false,
        })
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn visible_len(&self) -> usize {
        self.visible_len
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once a non-looping animator has deleted its last phrase.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    /// The leading `visible_len` characters of the current phrase.
    pub fn text(&self) -> &str {
        let phrase = self.current_phrase();
        match phrase.char_indices().nth(self.visible_len) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    /// Delay before the first tick.
    pub fn initial_delay(&self) -> Duration {
        self.type_interval
    }

    pub fn tick(&mut self) -> Option<Duration> {
        if self.halted {
            return None;
        }

        match self.phase {
            Phase::Typing => {
                let len = self.current_phrase().chars().count();
                if self.visible_len < len {
                    self.visible_len += 1;
                }
                if self.visible_len >= len {
                    self.phase = Phase::PausingAfterTyped;
                    Some(self.pause)
                } else {
                    Some(self.type_interval)
                }
            }
            Phase::PausingAfterTyped => {
                self.phase = Phase::Deleting;
                Some(self.delete_interval)
            }
            Phase::Deleting => {
                self.visible_len = self.visible_len.saturating_sub(1);
                if self.visible_len > 0 {
                    return Some(self.delete_interval);
                }

                let is_last = self.phrase_index + 1 == self.phrases.len();
                if self.loop_forever || !is_last {
                    self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                    Some(self.type_interval)
                } else {
                    self.halted = true;
                    None
                }
            }
        }
    }
}
