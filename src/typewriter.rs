//! Rotating text animator
//!
//! Types out a list of phrases one character at a time, pauses, deletes them
//! again and moves on to the next phrase. The pure state machine lives in
//! [`machine`]; [`handle`] drives it on a tokio timer and publishes the
//! visible text through a `watch` channel.

pub mod handle;
pub mod machine;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use handle::TypewriterHandle;
pub use machine::{Phase, Typewriter};

/// Settle delay after a phrase has been fully typed.
pub const DEFAULT_PAUSE_MS: u64 = 1000;
pub const DEFAULT_TYPE_INTERVAL_MS: u64 = 75;
pub const DEFAULT_DELETE_INTERVAL_MS: u64 = 50;

/// Glyph drawn after the animated text.
pub const CURSOR: &str = "|";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypewriterError {
    #[error("invalid typewriter config: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    #[serde(default = "default_type_interval_ms")]
    pub type_interval_ms: u64,
    #[serde(default = "default_delete_interval_ms")]
    pub delete_interval_ms: u64,
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
    #[serde(default = "default_loop_forever")]
    pub loop_forever: bool,
}

fn default_type_interval_ms() -> u64 {
    DEFAULT_TYPE_INTERVAL_MS
}

fn default_delete_interval_ms() -> u64 {
    DEFAULT_DELETE_INTERVAL_MS
}

fn default_pause_ms() -> u64 {
    DEFAULT_PAUSE_MS
}

fn default_loop_forever() -> bool {
    true
}

impl TypewriterConfig {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            type_interval_ms: DEFAULT_TYPE_INTERVAL_MS,
            delete_interval_ms: DEFAULT_DELETE_INTERVAL_MS,
            pause_ms: DEFAULT_PAUSE_MS,
            loop_forever: true,
        }
    }

    pub fn type_interval_ms(mut self, ms: u64) -> Self {
        self.type_interval_ms = ms;
        self
    }

    pub fn delete_interval_ms(mut self, ms: u64) -> Self {
        self.delete_interval_ms = ms;
        self
    }

    pub fn pause_ms(mut self, ms: u64) -> Self {
        self.pause_ms = ms;
        self
    }

    pub fn loop_forever(mut self, loop_forever: bool) -> Self {
        self.loop_forever = loop_forever;
        self
    }

    pub fn type_interval(&self) -> Duration {
        Duration::from_millis(self.type_interval_ms)
    }

    pub fn delete_interval(&self) -> Duration {
        Duration::from_millis(self.delete_interval_ms)
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    pub fn validate(&self) -> Result<(), TypewriterError> {
        if self.phrases.is_empty() {
            return Err(TypewriterError::InvalidConfig(
                "phrases must not be empty".to_string(),
            ));
        }
        if self.type_interval_ms == 0 {
            return Err(TypewriterError::InvalidConfig(
                "type interval must be positive".to_string(),
            ));
        }
        if self.delete_interval_ms == 0 {
            return Err(TypewriterError::InvalidConfig(
                "delete interval must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}
