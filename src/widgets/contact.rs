use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;

use super::{blank, bulleted, chips, heading, wrapped, SectionLines};
use crate::{
    config::Palette,
    content::Contact,
    model::contact_form::{ContactForm, Field, SubmitStatus},
};

/// Contact details and a read-only view of the message form.
#[derive(Clone, Debug)]
pub struct ContactSection<'a> {
    pub contact: &'a Contact,
    pub form: &'a ContactForm,
    /// The form is being edited, so the focused field is marked.
    pub composing: bool,
    pub palette: &'a Palette,
}

impl<'a> ContactSection<'a> {
    pub fn new(
        contact: &'a Contact,
        form: &'a ContactForm,
        composing: bool,
        palette: &'a Palette,
    ) -> Self {
        Self {
            contact,
            form,
            composing,
            palette,
        }
    }

    fn field_lines(&self, field: Field, width: usize) -> Vec<Line<'static>> {
        let palette = self.palette;
        let focused = self.composing && self.form.focused() == field;
        let marker = if focused { "▶ " } else { "  " };
        let mut lines = vec![Line::from(vec![
            Span::styled(marker, palette.style("accent")),
            Span::styled(field.label(), palette.style("heading")),
        ])];

        let value = self.form.value(field);
        if value.is_empty() {
            lines.extend(wrapped(field.placeholder(), palette.style("muted"), width, 4));
        } else {
            for paragraph in value.lines() {
                lines.extend(wrapped(paragraph, palette.style("text"), width, 4));
            }
        }
        if let Some(error) = self.form.error(field) {
            lines.extend(wrapped(error, palette.style("error"), width, 4));
        }
        lines
    }

    fn notice_lines(&self, icon: &str, style: &str, width: usize) -> Vec<Line<'static>> {
        let Some(notice) = self.form.status().notice() else {
            return vec![];
        };
        let mut lines = bulleted(
            icon,
            self.palette.style(style),
            notice,
            self.palette.style(style),
            width,
            0,
        );
        lines.push(blank());
        lines
    }

    fn button(&self) -> Line<'static> {
        let palette = self.palette;
        if self.form.is_submitting() {
            return Line::styled("[ Sending... ]", palette.style("muted"));
        }
        let hint = if self.composing {
            "  Ctrl-s to send · Esc to leave"
        } else {
            "  press c to write"
        };
        Line::from(vec![
            Span::styled("[ Send Message ]", palette.style("accent")),
            Span::styled(hint, palette.style("muted")),
        ])
    }
}

impl SectionLines for ContactSection<'_> {
    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let (contact, palette) = (self.contact, self.palette);
        let mut lines = heading(&contact.heading, &contact.subheading, palette, width);

        lines.extend(wrapped(&contact.intro, palette.style("text"), width, 0));
        lines.push(blank());
        for info in &contact.info {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", info.label), palette.style("muted")),
                Span::styled(info.value.clone(), palette.style("link")),
            ]));
        }
        let socials: Vec<_> = contact
            .socials
            .iter()
            .map(|s| (s.label.clone(), palette.style("link")))
            .collect();
        if !socials.is_empty() {
            lines.push(blank());
            lines.extend(chips(&socials, width, " · "));
        }
        lines.push(blank());

        lines.push(Line::styled("Send Me a Message", palette.style("accent")));
        lines.push(blank());
        match self.form.status() {
            SubmitStatus::Sent => lines.extend(self.notice_lines("✓", "success", width)),
            SubmitStatus::Failed => lines.extend(self.notice_lines("!", "error", width)),
            SubmitStatus::Idle | SubmitStatus::Submitting => {}
        }
        for field in Field::iter() {
            lines.extend(self.field_lines(field, width));
            lines.push(blank());
        }
        lines.push(self.button());
        lines.push(blank());
        lines
    }
}

impl Widget for ContactSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines(area.width as usize)).render(area, buf);
    }
}
