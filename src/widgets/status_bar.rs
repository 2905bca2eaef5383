use ratatui::{prelude::*, widgets::*};

use crate::{config::Palette, model::status_bar::Notice};

#[derive(Clone, Debug)]
pub struct StatusBar<'a> {
    pub notice: Option<&'a Notice>,
    pub hint: &'a str,
    pub palette: &'a Palette,
}

impl<'a> StatusBar<'a> {
    pub fn new(
        notice: Option<&'a Notice>,
        hint: &'a str,
        palette: &'a Palette,
    ) -> Self {
        Self {
            notice,
            hint,
            palette,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.palette.style("status"));

        let left = match self.notice {
            Some(notice) if notice.is_error => {
                Span::styled(notice.text.clone(), self.palette.style("error"))
            }
            Some(notice) => Span::raw(notice.text.clone()),
            None => Span::raw(""),
        };
        let [left_area, right_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(self.hint.chars().count() as u16),
        ])
        .areas(area);
        Paragraph::new(Line::from(left)).render(left_area, buf);
        Paragraph::new(self.hint).render(right_area, buf);
    }
}
