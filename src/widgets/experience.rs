use ratatui::{prelude::*, widgets::*};

use super::{blank, bulleted, chips, heading, wrapped, SectionLines};
use crate::{
    config::Palette,
    content::{Education, Experience, Job},
};

/// Work timeline, education, certifications and traits.
#[derive(Clone, Debug)]
pub struct ExperienceSection<'a> {
    pub experience: &'a Experience,
    pub palette: &'a Palette,
}

impl<'a> ExperienceSection<'a> {
    pub fn new(experience: &'a Experience, palette: &'a Palette) -> Self {
        Self {
            experience,
            palette,
        }
    }

    fn subheading(&self, title: &str) -> Vec<Line<'static>> {
        vec![Line::styled(title.to_string(), self.palette.style("accent")), blank()]
    }

    fn job_lines(&self, job: &Job, width: usize) -> Vec<Line<'static>> {
        let palette = self.palette;
        let marker = if job.current { "◉" } else { "○" };
        let mut title = vec![
            Span::styled(format!("{marker} "), palette.style("accent_alt")),
            Span::styled(job.title.clone(), palette.style("heading")),
        ];
        if job.current {
            title.push(Span::raw(" "));
            title.push(Span::styled("[Current]", palette.style("success")));
        }

        let mut lines = vec![
            Line::from(title),
            Line::from(vec![
                Span::raw("│ "),
                Span::styled(format!("{} · {}", job.company, job.location), palette.style("text")),
            ]),
            Line::from(vec![
                Span::raw("│ "),
                Span::styled(format!("{} · {}", job.period, job.kind), palette.style("muted")),
            ]),
        ];
        lines.extend(with_rail(wrapped(&job.description, palette.style("text"), width, 2)));
        for achievement in &job.achievements {
            lines.extend(with_rail(bulleted(
                "▸",
                palette.style("accent"),
                achievement,
                palette.style("text"),
                width,
                2,
            )));
        }
        let technologies: Vec<_> = job
            .technologies
            .iter()
            .map(|t| (t.clone(), palette.style("muted")))
            .collect();
        lines.extend(
            chips(&technologies, width.saturating_sub(2), " · ")
                .into_iter()
                .map(|mut line| {
                    line.spans.insert(0, Span::raw("│ "));
                    line
                }),
        );
        lines.push(Line::raw("│"));
        lines
    }

    fn education_lines(&self, education: &Education, width: usize) -> Vec<Line<'static>> {
        let palette = self.palette;
        let mut lines = vec![
            Line::styled(education.degree.clone(), palette.style("heading")),
            Line::styled(
                format!("{} · {}", education.institution, education.location),
                palette.style("text"),
            ),
            Line::styled(education.period.clone(), palette.style("muted")),
        ];
        lines.extend(wrapped(&education.description, palette.style("text"), width, 0));
        for achievement in &education.achievements {
            lines.extend(bulleted(
                "▸",
                palette.style("accent"),
                achievement,
                palette.style("text"),
                width,
                0,
            ));
        }
        lines.push(blank());
        lines
    }
}

/// Replaces the leading indent of each line with the timeline rail.
fn with_rail(mut lines: Vec<Line<'static>>) -> Vec<Line<'static>> {
    for line in &mut lines {
        if let Some(first) = line.spans.first_mut() {
            let rest: String = first.content.chars().skip(2).collect();
            *first = Span::raw(format!("│ {rest}"));
        }
    }
    lines
}

impl SectionLines for ExperienceSection<'_> {
    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let (experience, palette) = (self.experience, self.palette);
        let mut lines = heading(&experience.heading, &experience.subheading, palette, width);

        if !experience.jobs.is_empty() {
            lines.extend(self.subheading("Professional Experience"));
            for job in &experience.jobs {
                lines.extend(self.job_lines(job, width));
            }
            lines.push(blank());
        }

        if !experience.education.is_empty() {
            lines.extend(self.subheading("Education"));
            for education in &experience.education {
                lines.extend(self.education_lines(education, width));
            }
        }

        if !experience.certifications.is_empty() {
            lines.extend(self.subheading("Certifications"));
            for certification in &experience.certifications {
                lines.extend(bulleted(
                    "✓",
                    palette.style("success"),
                    certification,
                    palette.style("text"),
                    width,
                    0,
                ));
            }
            lines.push(blank());
        }

        for item in &experience.traits {
            lines.push(Line::from(vec![
                Span::raw(format!("{} ", item.icon)),
                Span::styled(item.title.clone(), palette.style("heading")),
            ]));
            lines.extend(wrapped(&item.description, palette.style("muted"), width, 3));
        }
        lines.push(blank());
        lines
    }
}

impl Widget for ExperienceSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines(area.width as usize)).render(area, buf);
    }
}
