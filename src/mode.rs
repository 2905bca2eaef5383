use serde::{Deserialize, Serialize};

/// Selects which keymap is active.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Browse,
    Menu,
    Compose,
}
