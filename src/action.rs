use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::{mode::Mode, model::contact_form::SubmitOutcome, section::Section};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Refresh,
    Error(String),
    Help,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
    JumpTo(Section),
    NextSection,
    PrevSection,
    ToggleTheme,
    ToggleMenu,
    MenuUp,
    MenuDown,
    MenuSelect,
    NextCategory,
    PrevCategory,
    NextFilter,
    PrevFilter,
    FocusContact,
    FocusNextField,
    FocusPrevField,
    SubmitContact,
    ContactSubmitted(SubmitOutcome),
    CancelCompose,
    EnterMode(Mode),
    SystemMessage(String),
    Key(KeyEvent),
    Paste(String),
}
