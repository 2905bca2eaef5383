use ratatui::{prelude::*, widgets::*};

use super::{blank, chips, heading, wrapped, SectionLines};
use crate::{
    config::Palette,
    content::{Skill, Skills},
};

const FILLED: &str = "█";
const EMPTY: &str = "░";

/// Category tabs and proficiency bars of the active category.
#[derive(Clone, Debug)]
pub struct SkillsSection<'a> {
    pub skills: &'a Skills,
    pub active: usize,
    /// How far the bars have grown towards their level, `0.0..=1.0`.
    pub fill: f64,
    pub palette: &'a Palette,
}

impl<'a> SkillsSection<'a> {
    pub fn new(skills: &'a Skills, active: usize, fill: f64, palette: &'a Palette) -> Self {
        Self {
            skills,
            active,
            fill,
            palette,
        }
    }

    fn bar(&self, skill: &Skill, width: usize) -> Line<'static> {
        let level = f64::from(skill.level()) / 100.0;
        let filled = ((level * self.fill.clamp(0.0, 1.0)) * width as f64).round() as usize;
        let filled = filled.min(width);
        Line::from(vec![
            Span::styled(FILLED.repeat(filled), Style::default().fg(skill.color())),
            Span::styled(EMPTY.repeat(width - filled), self.palette.style("bar_empty")),
        ])
    }
}

impl SectionLines for SkillsSection<'_> {
    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let (skills, palette) = (self.skills, self.palette);
        let mut lines = heading(&skills.heading, &skills.subheading, palette, width);

        let tabs: Vec<_> = skills
            .categories
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let style = if i == self.active {
                    palette.style("tab_active")
                } else {
                    palette.style("tab")
                };
                (format!(" {} {} ", c.icon, c.title), style)
            })
            .collect();
        lines.extend(chips(&tabs, width, "│"));
        lines.push(blank());

        if let Some(category) = skills.categories.get(self.active) {
            for skill in &category.skills {
                let percent = format!("{}%", skill.level());
                let name_width = width.saturating_sub(percent.len());
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:<name_width$}", skill.name),
                        palette.style("text"),
                    ),
                    Span::styled(percent, palette.style("muted")),
                ]));
                lines.push(self.bar(skill, width));
            }
            lines.push(blank());
        }

        for highlight in &skills.highlights {
            lines.push(Line::from(vec![
                Span::raw(format!("{} ", highlight.icon)),
                Span::styled(highlight.title.clone(), palette.style("heading")),
            ]));
            lines.extend(wrapped(&highlight.description, palette.style("muted"), width, 3));
        }
        lines.push(blank());
        lines
    }
}

impl Widget for SkillsSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines(area.width as usize)).render(area, buf);
    }
}
