use ratatui::{prelude::*, widgets::*};

use super::{blank, heading, wrapped, SectionLines};
use crate::{config::Palette, content::About};

#[derive(Clone, Debug)]
pub struct AboutSection<'a> {
    pub about: &'a About,
    pub palette: &'a Palette,
}

impl<'a> AboutSection<'a> {
    pub fn new(about: &'a About, palette: &'a Palette) -> Self {
        Self { about, palette }
    }
}

impl SectionLines for AboutSection<'_> {
    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let (about, palette) = (self.about, self.palette);
        let mut lines = heading(&about.heading, &about.subheading, palette, width);

        lines.push(Line::styled(about.title.clone(), palette.style("accent")));
        lines.push(blank());
        for paragraph in &about.paragraphs {
            lines.extend(wrapped(paragraph, palette.style("text"), width, 0));
            lines.push(blank());
        }

        for feature in &about.features {
            lines.push(Line::from(vec![
                Span::raw(format!("{} ", feature.icon)),
                Span::styled(feature.title.clone(), palette.style("heading")),
            ]));
            lines.extend(wrapped(&feature.description, palette.style("muted"), width, 3));
        }
        if !about.stats.is_empty() {
            lines.push(blank());
        }

        let number_width = about
            .stats
            .iter()
            .map(|s| s.number.chars().count())
            .max()
            .unwrap_or(0);
        for stat in &about.stats {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>number_width$}", stat.number),
                    palette.style("accent_alt"),
                ),
                Span::raw("  "),
                Span::styled(stat.label.clone(), palette.style("muted")),
            ]));
        }
        lines.push(blank());
        lines
    }
}

impl Widget for AboutSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines(area.width as usize)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        content::{Feature, Stat},
        widgets::line_text,
    };

    #[test]
    fn test_lines() {
        let about = About {
            heading: "About Me".to_string(),
            subheading: "Chemistry meets AI.".to_string(),
            title: "Crafting Digital Excellence".to_string(),
            paragraphs: vec!["I simulate molecules for a living.".to_string()],
            features: vec![Feature {
                icon: "🎯".to_string(),
                title: "Clean Code".to_string(),
                description: "Maintainable and scalable.".to_string(),
            }],
            stats: vec![
                Stat {
                    number: "3+".to_string(),
                    label: "Years Experience".to_string(),
                },
                Stat {
                    number: "50+".to_string(),
                    label: "Projects Completed".to_string(),
                },
            ],
        };
        let palette = Palette::default();
        let texts: Vec<String> = AboutSection::new(&about, &palette)
            .lines(20)
            .iter()
            .map(line_text)
            .collect();

        assert_eq!(
            texts,
            vec![
                "",
                "About Me",
                "━━━━━━",
                "Chemistry meets AI.",
                "",
                "Crafting Digital Excellence",
                "",
                "I simulate molecules",
                "for a living.",
                "",
                "🎯 Clean Code",
                "   Maintainable and",
                "   scalable.",
                "",
                " 3+  Years Experience",
                "50+  Projects Completed",
                "",
            ]
        );
    }
}
