use std::{
    collections::BTreeMap,
    time::{Duration, Instant},
};

use chrono::{Datelike, Local};
use color_eyre::eyre::Result;
use crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc::UnboundedSender;

use super::{contact_input::ContactInput, Component};
use crate::{
    action::Action,
    config::{Config, Palette},
    content::Portfolio,
    mode::Mode,
    model::{
        contact_form::{self, ContactForm, SubmitOutcome, FAILURE_MESSAGE},
        navigation::{self, Navigation, SectionSpan},
        projects::{self, ProjectFilters},
        reveal::Reveal,
        skills::{self, SkillTabs},
    },
    outbox,
    section::Section,
    theme::ThemeStore,
    tui::Frame,
    typewriter::TypewriterHandle,
    visibility::{Viewport, VisibilitySignal},
    widgets::{
        reveal_lines, AboutSection, ContactSection, ExperienceSection, FooterSection,
        HeroSection, Menu, Navbar, ProjectsSection, SectionLines, SkillsSection,
    },
};

pub const MAX_COLUMN_WIDTH: u16 = 100;
pub const SKILL_BAR_DURATION: Duration = Duration::from_millis(1500);
pub const SKILL_BAR_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Default)]
struct SectionState {
    visibility: VisibilitySignal,
    reveal: Reveal,
}

/// The scrolling portfolio page with its navbar, menu and compose overlay.
pub struct Page<'a> {
    command_tx: Option<UnboundedSender<Action>>,
    config: Config,
    portfolio: Portfolio,
    theme: ThemeStore,
    typewriter: Option<TypewriterHandle>,
    mode: Mode,
    navigation: Navigation,
    skills: SkillTabs,
    skill_bars: Reveal,
    projects: ProjectFilters,
    form: ContactForm,
    input: ContactInput<'a>,
    sections: BTreeMap<Section, SectionState>,
    spans: Vec<SectionSpan>,
}

impl Page<'_> {
    pub fn new(theme: ThemeStore) -> Self {
        Self {
            command_tx: None,
            config: Config::default(),
            portfolio: Portfolio::default(),
            theme,
            typewriter: None,
            mode: Mode::default(),
            navigation: Navigation::default(),
            skills: SkillTabs::default(),
            skill_bars: Reveal::new(SKILL_BAR_DURATION, Duration::ZERO),
            projects: ProjectFilters::default(),
            form: ContactForm::default(),
            input: ContactInput::default(),
            sections: Section::all()
                .into_iter()
                .map(|s| (s, SectionState::default()))
                .collect(),
            spans: vec![],
        }
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    pub fn active_section(&self) -> Option<Section> {
        self.navigation.active_section(&self.spans)
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.sections
            .get(&section)
            .is_some_and(|s| s.visibility.is_visible())
    }

    fn typed_text(&self) -> String {
        self.typewriter
            .as_ref()
            .map(TypewriterHandle::current_text)
            .unwrap_or_default()
    }

    fn section_lines(
        &self,
        section: Section,
        width: usize,
        palette: &Palette,
        now: Instant,
    ) -> Vec<Line<'static>> {
        let portfolio = &self.portfolio;
        match section {
            Section::Hero => {
                let typed = self.typed_text();
                HeroSection::new(&portfolio.owner, &portfolio.hero, &typed, palette).lines(width)
            }
            Section::About => AboutSection::new(&portfolio.about, palette).lines(width),
            Section::Skills => SkillsSection::new(
                &portfolio.skills,
                self.skills.active(),
                self.skill_bars.progress(0, now),
                palette,
            )
            .lines(width),
            Section::Projects => ProjectsSection::new(
                &portfolio.projects,
                self.projects.active(),
                self.projects.apply(&portfolio.projects.items),
                palette,
            )
            .lines(width),
            Section::Experience => {
                ExperienceSection::new(&portfolio.experience, palette).lines(width)
            }
            Section::Contact => ContactSection::new(
                &portfolio.contact,
                &self.form,
                self.mode == Mode::Compose,
                palette,
            )
            .lines(width),
            Section::Footer => FooterSection::new(
                &portfolio.owner,
                &portfolio.footer,
                Local::now().year(),
                palette,
            )
            .lines(width),
        }
    }

    /// Lays the sections out for `width`, updates scroll bounds and visibility,
    /// and returns the whole page with entrance animations applied.
    fn layout(
        &mut self,
        width: usize,
        height: usize,
        palette: &Palette,
        now: Instant,
    ) -> Vec<Line<'static>> {
        let raw: Vec<(Section, Vec<Line<'static>>)> = Section::all()
            .into_iter()
            .map(|s| (s, self.section_lines(s, width, palette, now)))
            .collect();

        let mut start = 0;
        self.spans = raw
            .iter()
            .map(|(section, lines)| {
                let span = SectionSpan {
                    section: *section,
                    start,
                    len: lines.len(),
                };
                start += lines.len();
                span
            })
            .collect();
        self.navigation
            .update(navigation::Message::Measured { page_height: start });
        self.navigation.update(navigation::Message::Resized {
            viewport_height: height,
        });

        let viewport = Viewport::new(self.navigation.offset(), height);
        for span in &self.spans {
            let Some(state) = self.sections.get_mut(&span.section) else {
                continue;
            };
            if state
                .visibility
                .observe(viewport.is_in_view(span.start, span.len))
            {
                log::debug!("{} scrolled into view", span.section);
                state.reveal.start(now);
                if span.section == Section::Skills {
                    self.skill_bars.start(now + SKILL_BAR_DELAY);
                }
            }
        }

        raw.into_iter()
            .flat_map(|(section, lines)| match self.sections.get(&section) {
                Some(state) => reveal_lines(lines, &state.reveal, now),
                None => lines,
            })
            .collect()
    }

    fn jump_to(&mut self, section: Section) {
        if let Some(span) = self.spans.iter().find(|s| s.section == section) {
            self.navigation
                .update(navigation::Message::ScrollRequested { row: span.start });
        }
    }

    fn submit(&mut self) {
        let was_submitting = self.form.is_submitting();
        self.form.update(contact_form::Message::SubmitRequested);
        self.input.sync(&self.form);
        if was_submitting {
            return;
        }
        if let (Some(submission), Some(tx)) = (self.form.submission(), &self.command_tx) {
            log::info!("Sending contact message");
            outbox::spawn_delivery(submission, tx.clone());
        }
    }

    fn column(area: Rect) -> Rect {
        let width = area.width.min(MAX_COLUMN_WIDTH).saturating_sub(4);
        Rect {
            x: area.x + (area.width - width) / 2,
            width,
            ..area
        }
    }

    fn render_at(&mut self, f: &mut Frame<'_>, area: Rect, now: Instant) {
        let palette = self.config.styles.palette(self.theme.theme());
        let [navbar_area, body_area, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        f.render_widget(Block::default().style(palette.style("background")), body_area);
        let column = Self::column(body_area);
        let lines = self.layout(column.width as usize, column.height as usize, &palette, now);
        let visible: Vec<Line> = lines
            .into_iter()
            .skip(self.navigation.offset())
            .take(column.height as usize)
            .collect();
        f.render_widget(Paragraph::new(visible), column);

        f.render_widget(
            Navbar::new(
                &self.portfolio.owner,
                self.active_section(),
                self.navigation.is_scrolled(),
                self.theme.theme(),
                &palette,
            ),
            navbar_area,
        );

        if self.navigation.is_menu_open() {
            let (width, height) = Menu::size();
            let menu_area = Rect {
                x: body_area.right().saturating_sub(width + 1),
                y: body_area.y,
                width: width.min(body_area.width),
                height: height.min(body_area.height),
            };
            f.render_widget(Menu::new(self.navigation.menu_section(), &palette), menu_area);
        }

        if self.mode == Mode::Compose {
            self.input.draw(&self.form, &palette, f, body_area);
        }
    }
}

impl Component for Page<'_> {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.command_tx = Some(tx);
        Ok(())
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.portfolio = config.portfolio();
        self.skills = SkillTabs::new(self.portfolio.skills.categories.len());
        self.projects = ProjectFilters::new(self.portfolio.projects.filters.clone());
        self.config = config;
        Ok(())
    }

    fn init(&mut self, _area: Size) -> Result<()> {
        self.typewriter = Some(TypewriterHandle::spawn(self.config.typewriter())?);
        Ok(())
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let now = Instant::now();
        match action {
            Action::Render => self.navigation.update(navigation::Message::Stepped),
            Action::ScrollUp => self.navigation.update(navigation::Message::ScrolledBy(-1)),
            Action::ScrollDown => self.navigation.update(navigation::Message::ScrolledBy(1)),
            Action::PageUp => self.navigation.update(navigation::Message::PagedUp),
            Action::PageDown => self.navigation.update(navigation::Message::PagedDown),
            Action::ScrollToTop => self.navigation.update(navigation::Message::ScrolledToTop),
            Action::ScrollToBottom => {
                self.navigation.update(navigation::Message::ScrolledToBottom)
            }
            Action::JumpTo(section) => self.jump_to(section),
            Action::NextSection | Action::PrevSection => {
                let current = self.active_section().unwrap_or(Section::Hero);
                let target = if action == Action::NextSection {
                    current.next()
                } else {
                    current.prev()
                };
                self.jump_to(target);
            }
            Action::ToggleMenu => {
                self.navigation.update(navigation::Message::MenuToggled);
                let mode = if self.navigation.is_menu_open() {
                    Mode::Menu
                } else {
                    Mode::Browse
                };
                return Ok(Some(Action::EnterMode(mode)));
            }
            Action::MenuUp => self.navigation.update(navigation::Message::MenuMoved(-1)),
            Action::MenuDown => self.navigation.update(navigation::Message::MenuMoved(1)),
            Action::MenuSelect => {
                let section = self.navigation.menu_section();
                self.navigation.update(navigation::Message::MenuClosed);
                self.jump_to(section);
                return Ok(Some(Action::EnterMode(Mode::Browse)));
            }
            Action::NextCategory | Action::PrevCategory => {
                let message = if action == Action::NextCategory {
                    skills::Message::Next
                } else {
                    skills::Message::Prev
                };
                if self.skills.update(message) {
                    self.skill_bars.restart(now + SKILL_BAR_DELAY);
                }
            }
            Action::NextFilter => {
                self.projects.update(projects::Message::Next);
            }
            Action::PrevFilter => {
                self.projects.update(projects::Message::Prev);
            }
            Action::FocusContact => {
                self.jump_to(Section::Contact);
                self.input.sync(&self.form);
                return Ok(Some(Action::EnterMode(Mode::Compose)));
            }
            Action::FocusNextField => {
                self.form.update(contact_form::Message::FocusedNext);
                self.input.sync(&self.form);
            }
            Action::FocusPrevField => {
                self.form.update(contact_form::Message::FocusedPrev);
                self.input.sync(&self.form);
            }
            Action::SubmitContact => self.submit(),
            Action::ContactSubmitted(outcome) => {
                self.form.update(contact_form::Message::Submitted(outcome));
                self.input.sync(&self.form);
                return Ok(Some(match outcome {
                    SubmitOutcome::Success => Action::SystemMessage("Message sent".to_string()),
                    SubmitOutcome::Failure => Action::Error(FAILURE_MESSAGE.to_string()),
                }));
            }
            Action::CancelCompose => return Ok(Some(Action::EnterMode(Mode::Browse))),
            Action::EnterMode(mode) => {
                self.mode = mode;
                if mode != Mode::Menu {
                    self.navigation.update(navigation::Message::MenuClosed);
                }
            }
            Action::Key(key) if self.mode == Mode::Compose => {
                if let Some(value) = self.input.process_key_input(key) {
                    self.form.update(contact_form::Message::FieldChanged {
                        field: self.input.field(),
                        value,
                    });
                }
            }
            Action::Paste(text) if self.mode == Mode::Compose => {
                if let Some(value) = self.input.paste(&text) {
                    self.form.update(contact_form::Message::FieldChanged {
                        field: self.input.field(),
                        value,
                    });
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        self.render_at(f, area, Instant::now());
        Ok(())
    }
}
