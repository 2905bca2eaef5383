use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::prelude::Rect;
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::{
    action::Action,
    components::{page::Page, status_bar::StatusBar, Component},
    config::Config,
    mode::Mode,
    theme::ThemeStore,
    tui,
};

pub struct App {
    pub config: Config,
    pub theme: ThemeStore,
    pub tick_rate: f64,
    pub frame_rate: f64,
    pub components: Vec<Box<dyn Component>>,
    pub should_quit: bool,
    pub should_suspend: bool,
    pub mode: Mode,
    pub pending_keys: Vec<KeyEvent>,
}

impl App {
    pub fn new(config: Config, theme: ThemeStore, tick_rate: f64, frame_rate: f64) -> Self {
        let page = Page::new(theme.clone());
        let status_bar = StatusBar::new(theme.clone());
        Self {
            config,
            theme,
            tick_rate,
            frame_rate,
            components: vec![Box::new(page), Box::new(status_bar)],
            should_quit: false,
            should_suspend: false,
            mode: Mode::default(),
            pending_keys: Vec::new(),
        }
    }

    /// Resolves a key press against the keymap of the current mode.
    ///
    /// Keys that start a longer binding are held until the sequence completes
    /// or the next tick. Unbound keys are forwarded as `Action::Key`.
    pub fn map_key(&mut self, key: KeyEvent) -> Option<Action> {
        self.pending_keys.push(key);
        if let Some(action) = self.config.keybindings.action_for(self.mode, &self.pending_keys) {
            let action = action.clone();
            self.pending_keys.clear();
            return Some(action);
        }
        if self.config.keybindings.is_prefix(self.mode, &self.pending_keys) {
            return None;
        }
        self.pending_keys.clear();
        if let Some(action) = self.config.keybindings.action_for(self.mode, &[key]) {
            return Some(action.clone());
        }
        if self.config.keybindings.is_prefix(self.mode, &[key]) {
            self.pending_keys.push(key);
            return None;
        }
        Some(Action::Key(key))
    }

    /// Applies app-level effects of an action before components see it.
    pub fn apply(&mut self, action: &Action, action_tx: &UnboundedSender<Action>) -> Result<()> {
        match action {
            Action::Tick => self.pending_keys.clear(),
            Action::Quit => self.should_quit = true,
            Action::Suspend => self.should_suspend = true,
            Action::Resume => self.should_suspend = false,
            Action::EnterMode(mode) => {
                log::debug!("Entering {mode:?} mode");
                self.mode = *mode;
                self.pending_keys.clear();
            }
            Action::ToggleTheme => {
                let theme = self.theme.toggle();
                match self.theme.save() {
                    Ok(()) => {
                        action_tx.send(Action::SystemMessage(format!("Theme switched to {theme}")))?
                    }
                    Err(e) => {
                        log::error!("Failed to save theme: {e}");
                        action_tx.send(Action::Error(format!("Failed to save theme: {e}")))?
                    }
                }
            }
            Action::Error(message) => log::error!("{message}"),
            _ => {}
        }
        Ok(())
    }

    fn draw(&mut self, tui: &mut tui::Tui, action_tx: &UnboundedSender<Action>) -> Result<()> {
        tui.draw(|f| {
            let area = f.area();
            for component in self.components.iter_mut() {
                if let Err(e) = component.draw(f, area) {
                    let _ = action_tx.send(Action::Error(format!("Failed to draw: {e:?}")));
                }
            }
        })?;
        Ok(())
    }

    fn new_tui(&self) -> Result<tui::Tui> {
        Ok(tui::Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate)
            .mouse(true)
            .paste(true))
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();

        let mut tui = self.new_tui()?;
        tui.enter()?;

        for component in self.components.iter_mut() {
            component.register_action_handler(action_tx.clone())?;
        }

        for component in self.components.iter_mut() {
            component.register_config_handler(self.config.clone())?;
        }

        for component in self.components.iter_mut() {
            component.init(tui.size()?)?;
        }

        loop {
            if let Some(e) = tui.next().await {
                match e {
                    tui::Event::Quit | tui::Event::Closed => action_tx.send(Action::Quit)?,
                    tui::Event::Tick => action_tx.send(Action::Tick)?,
                    tui::Event::Render => action_tx.send(Action::Render)?,
                    tui::Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
                    tui::Event::Paste(ref text) => action_tx.send(Action::Paste(text.clone()))?,
                    tui::Event::Key(key) => {
                        if let Some(action) = self.map_key(key) {
                            if !matches!(action, Action::Key(_)) {
                                log::info!("Got action: {action:?}");
                            }
                            action_tx.send(action)?;
                        }
                    }
                    _ => {}
                }
                for component in self.components.iter_mut() {
                    if let Some(action) = component.handle_events(Some(e.clone()))? {
                        action_tx.send(action)?;
                    }
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                if !matches!(
                    action,
                    Action::Tick | Action::Render | Action::Key(_) | Action::Paste(_)
                ) {
                    log::debug!("{action:?}");
                }
                self.apply(&action, &action_tx)?;
                match action {
                    Action::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, w, h))?;
                        self.draw(&mut tui, &action_tx)?;
                    }
                    Action::Render => self.draw(&mut tui, &action_tx)?,
                    _ => {}
                }
                for component in self.components.iter_mut() {
                    if let Some(action) = component.update(action.clone())? {
                        action_tx.send(action)?
                    };
                }
            }
            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                tui = self.new_tui()?;
                tui.enter()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{section::Section, theme::Theme};

    fn app() -> App {
        let config = Config::defaults().expect("embedded config");
        App::new(config, ThemeStore::default(), 4.0, 30.0)
    }

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty())
    }

    #[test]
    fn test_single_key_binding() {
        let mut app = app();
        assert_eq!(app.map_key(key('q')), Some(Action::Quit));
        assert_eq!(app.map_key(key('3')), Some(Action::JumpTo(Section::Skills)));
    }

    #[test]
    fn test_multi_key_binding() {
        let mut app = app();
        assert_eq!(app.map_key(key('g')), None);
        assert_eq!(app.map_key(key('g')), Some(Action::ScrollToTop));
        assert!(app.pending_keys.is_empty());
    }

    #[test]
    fn test_broken_sequence_falls_back_to_single_key() {
        let mut app = app();
        assert_eq!(app.map_key(key('g')), None);
        assert_eq!(app.map_key(key('j')), Some(Action::ScrollDown));
    }

    #[test]
    fn test_unbound_key_is_forwarded() {
        let mut app = app();
        app.mode = Mode::Compose;
        assert_eq!(app.map_key(key('q')), Some(Action::Key(key('q'))));
        assert_eq!(
            app.map_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            Some(Action::SubmitContact)
        );
    }

    #[test]
    fn test_tick_clears_pending_keys() {
        let mut app = app();
        let (tx, _rx) = mpsc::unbounded_channel();
        assert_eq!(app.map_key(key('g')), None);
        app.apply(&Action::Tick, &tx).expect("apply");
        assert_eq!(app.map_key(key('g')), None);
    }

    #[test]
    fn test_enter_mode_switches_keymap() {
        let mut app = app();
        let (tx, _rx) = mpsc::unbounded_channel();
        app.apply(&Action::EnterMode(Mode::Menu), &tx).expect("apply");
        assert_eq!(app.mode, Mode::Menu);
        assert_eq!(app.map_key(key('j')), Some(Action::MenuDown));
    }

    #[test]
    fn test_toggle_theme_reports_switch() {
        let mut app = app();
        let (tx, mut rx) = mpsc::unbounded_channel();
        app.apply(&Action::ToggleTheme, &tx).expect("apply");
        assert_eq!(app.theme.theme(), Theme::Light);
        assert_eq!(
            rx.try_recv().ok(),
            Some(Action::SystemMessage("Theme switched to light".to_string()))
        );
    }

    #[test]
    fn test_quit_and_suspend_flags() {
        let mut app = app();
        let (tx, _rx) = mpsc::unbounded_channel();
        app.apply(&Action::Suspend, &tx).expect("apply");
        assert!(app.should_suspend);
        app.apply(&Action::Resume, &tx).expect("apply");
        assert!(!app.should_suspend);
        app.apply(&Action::Quit, &tx).expect("apply");
        assert!(app.should_quit);
    }
}
