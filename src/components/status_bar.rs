use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use ratatui::prelude::*;

use super::Component;
use crate::{
    action::Action,
    config::Config,
    mode::Mode,
    model::status_bar::{Message, StatusBar as StatusBarModel},
    theme::ThemeStore,
    tui::Frame,
    widgets,
};

/// How long a notice stays before it is cleared.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

const HELP: &str = "j/k scroll · Tab next section · 1-6 jump · l/h skills · f filter · c write · t theme · m menu · q quit";

pub struct StatusBar {
    config: Config,
    theme: ThemeStore,
    model: StatusBarModel,
    mode: Mode,
    shown_at: Option<Instant>,
}

impl StatusBar {
    pub fn new(theme: ThemeStore) -> Self {
        Self {
            config: Config::default(),
            theme,
            model: StatusBarModel::default(),
            mode: Mode::default(),
            shown_at: None,
        }
    }

    pub fn model(&self) -> &StatusBarModel {
        &self.model
    }

    fn hint(&self) -> &'static str {
        match self.mode {
            Mode::Browse => " ?:help q:quit ",
            Mode::Menu => " j/k:move Enter:go Esc:close ",
            Mode::Compose => " Tab:field Ctrl-s:send Esc:leave ",
        }
    }

    fn show(&mut self, message: Message, now: Instant) {
        self.model.update(message);
        self.shown_at = Some(now);
    }

    pub fn expire(&mut self, now: Instant) {
        if let Some(shown_at) = self.shown_at {
            if now.saturating_duration_since(shown_at) >= NOTICE_TTL {
                self.model.update(Message::Cleared);
                self.shown_at = None;
            }
        }
    }
}

impl Component for StatusBar {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let now = Instant::now();
        match action {
            Action::Tick => self.expire(now),
            Action::EnterMode(mode) => self.mode = mode,
            Action::SystemMessage(message) => self.show(
                Message::Notified {
                    label: "Info".to_string(),
                    message,
                },
                now,
            ),
            Action::Error(message) => self.show(
                Message::Failed {
                    label: "Error".to_string(),
                    message,
                },
                now,
            ),
            Action::Help => self.show(
                Message::Notified {
                    label: "Keys".to_string(),
                    message: HELP.to_string(),
                },
                now,
            ),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let [_, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let palette = self.config.styles.palette(self.theme.theme());
        f.render_widget(
            widgets::StatusBar::new(self.model.notice(), self.hint(), &palette),
            status_area,
        );
        Ok(())
    }
}
