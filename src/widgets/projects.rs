use ratatui::{prelude::*, widgets::*};

use super::{blank, chips, heading, wrapped, SectionLines};
use crate::{
    config::Palette,
    content::{Project, Projects},
};

#[derive(Clone, Debug)]
pub struct ProjectsSection<'a> {
    pub projects: &'a Projects,
    pub active_filter: usize,
    /// Already filtered, in display order.
    pub visible: Vec<&'a Project>,
    pub palette: &'a Palette,
}

impl<'a> ProjectsSection<'a> {
    pub fn new(
        projects: &'a Projects,
        active_filter: usize,
        visible: Vec<&'a Project>,
        palette: &'a Palette,
    ) -> Self {
        Self {
            projects,
            active_filter,
            visible,
            palette,
        }
    }

    fn project_lines(&self, project: &Project, width: usize) -> Vec<Line<'static>> {
        let palette = self.palette;
        let mut title = vec![Span::styled(project.title.clone(), palette.style("heading"))];
        if project.featured {
            title.push(Span::raw(" "));
            title.push(Span::styled("★ Featured", palette.style("accent_alt")));
        }

        let mut lines = vec![Line::from(title)];
        lines.extend(wrapped(&project.description, palette.style("text"), width, 2));

        let technologies: Vec<_> = project
            .technologies
            .iter()
            .map(|t| (t.clone(), palette.style("muted")))
            .collect();
        lines.extend(
            chips(&technologies, width.saturating_sub(2), " · ")
                .into_iter()
                .map(|mut line| {
                    line.spans.insert(0, Span::raw("  "));
                    line
                }),
        );

        let links: Vec<Span<'static>> = [("Live Demo", &project.live_url), ("Source", &project.github_url)]
            .into_iter()
            .filter_map(|(label, url)| {
                url.as_ref()
                    .map(|url| Span::styled(format!("{label}: {url}"), palette.style("link")))
            })
            .flat_map(|span| [Span::raw("  "), span])
            .collect();
        if !links.is_empty() {
            lines.push(Line::from(links));
        }
        lines.push(blank());
        lines
    }
}

impl SectionLines for ProjectsSection<'_> {
    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let (projects, palette) = (self.projects, self.palette);
        let mut lines = heading(&projects.heading, &projects.subheading, palette, width);

        let filters: Vec<_> = projects
            .filters
            .iter()
            .enumerate()
            .map(|(i, f)| {
                let style = if i == self.active_filter {
                    palette.style("tab_active")
                } else {
                    palette.style("tab")
                };
                (format!(" {} {} ", f.icon, f.label), style)
            })
            .collect();
        lines.extend(chips(&filters, width, " "));
        lines.push(blank());

        if self.visible.is_empty() {
            lines.push(Line::styled("No projects in this category.", palette.style("muted")));
            lines.push(blank());
        }
        for project in &self.visible {
            lines.extend(self.project_lines(project, width));
        }
        lines
    }
}

impl Widget for ProjectsSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines(area.width as usize)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::widgets::line_text;

    fn project() -> Project {
        Project {
            title: "Task Manager".to_string(),
            description: "Collaborative boards.".to_string(),
            category: "fullstack".to_string(),
            technologies: vec!["Vue.js".to_string(), "Express".to_string()],
            live_url: Some("https://example.com".to_string()),
            github_url: None,
            featured: true,
        }
    }

    #[test]
    fn test_project_lines() {
        let projects = Projects::default();
        let palette = Palette::default();
        let project = project();
        let section = ProjectsSection::new(&projects, 0, vec![&project], &palette);
        let texts: Vec<String> = section
            .project_lines(&project, 40)
            .iter()
            .map(line_text)
            .collect();

        assert_eq!(
            texts,
            vec![
                "Task Manager ★ Featured",
                "  Collaborative boards.",
                "  Vue.js · Express",
                "  Live Demo: https://example.com",
                "",
            ]
        );
    }

    #[test]
    fn test_empty_filter_result() {
        let projects = Projects::default();
        let palette = Palette::default();
        let texts: Vec<String> = ProjectsSection::new(&projects, 0, vec![], &palette)
            .lines(40)
            .iter()
            .map(line_text)
            .collect();
        assert!(texts.contains(&"No projects in this category.".to_string()));
    }
}
