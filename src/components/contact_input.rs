use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};
use tui_textarea::{CursorMove, TextArea};

use crate::{
    config::Palette,
    model::contact_form::{ContactForm, Field},
    tui::Frame,
};

/// Editor overlay for one contact form field at a time.
///
/// The form stays the source of truth. The textarea is reloaded from it
/// whenever the focused field changes and reports its content after each key.
#[derive(Debug)]
pub struct ContactInput<'a> {
    textarea: TextArea<'a>,
    field: Field,
}

impl Default for ContactInput<'_> {
    fn default() -> Self {
        let mut input = Self {
            textarea: TextArea::default(),
            field: Field::Name,
        };
        input.load(Field::Name, "");
        input
    }
}

impl ContactInput<'_> {
    pub fn field(&self) -> Field {
        self.field
    }

    pub fn content(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Replaces the editor content with `value` and puts the cursor at its end.
    pub fn load(&mut self, field: Field, value: &str) {
        self.textarea = TextArea::new(value.split('\n').map(str::to_string).collect());
        self.textarea.set_placeholder_text(field.placeholder());
        self.textarea.move_cursor(CursorMove::Bottom);
        self.textarea.move_cursor(CursorMove::End);
        self.field = field;
    }

    /// Reloads when the form moved focus or was reset underneath the editor.
    pub fn sync(&mut self, form: &ContactForm) {
        let value = form.value(form.focused());
        if self.field != form.focused() || self.content() != value {
            self.load(form.focused(), value);
        }
    }

    /// Feeds a key to the editor and returns the new content when it changed.
    pub fn process_key_input(&mut self, key: KeyEvent) -> Option<String> {
        if key.code == KeyCode::Enter && !self.field.is_multiline() {
            return None;
        }
        self.textarea.input(key).then(|| self.content())
    }

    /// Inserts pasted text at the cursor. Line breaks become spaces in
    /// single-line fields.
    pub fn paste(&mut self, text: &str) -> Option<String> {
        let inserted = if self.field.is_multiline() {
            self.textarea.insert_str(text)
        } else {
            let flat: String = text
                .lines()
                .map(str::trim_end)
                .collect::<Vec<_>>()
                .join(" ");
            self.textarea.insert_str(flat)
        };
        inserted.then(|| self.content())
    }

    pub fn draw(&mut self, form: &ContactForm, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
        let height = if self.field.is_multiline() { 8 } else { 3 };
        let input_area = Rect {
            x: area.x + 1,
            y: area.bottom().saturating_sub(height + 1).max(area.y),
            width: area.width.saturating_sub(2),
            height: height.min(area.height),
        };
        f.render_widget(Clear, input_area);

        let title = match form.error(self.field) {
            Some(error) => Line::from(vec![
                Span::raw(format!(" {} ", self.field.label())),
                Span::styled(format!("{error} "), palette.style("error")),
            ]),
            None => Line::raw(format!(" {} ", self.field.label())),
        };
        let status = if form.is_submitting() {
            " Sending... "
        } else {
            " Tab: next field · Ctrl-s: send · Esc: close "
        };
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.style("accent"))
                .title(title)
                .title_bottom(Line::raw(status).right_aligned()),
        );
        self.textarea.set_style(palette.style("background"));
        self.textarea.set_cursor_line_style(Style::default());
        f.render_widget(&self.textarea, input_area);
    }
}
