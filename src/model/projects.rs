use crate::content::{Project, ProjectFilter};

/// Filter key that matches every project.
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Next,
    Prev,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilters {
    filters: Vec<ProjectFilter>,
    active: usize,
}

impl ProjectFilters {
    pub fn new(filters: Vec<ProjectFilter>) -> Self {
        Self { filters, active: 0 }
    }

    pub fn filters(&self) -> &[ProjectFilter] {
        &self.filters
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_key(&self) -> &str {
        self.filters
            .get(self.active)
            .map(|f| f.key.as_str())
            .unwrap_or(ALL)
    }

    /// Projects matching the active filter, in their original order.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        let key = self.active_key();
        projects
            .iter()
            .filter(|p| key == ALL || p.category == key)
            .collect()
    }

    /// Returns whether the active filter changed.
    pub fn update(&mut self, message: Message) -> bool {
        let len = self.filters.len();
        if len < 2 {
            return false;
        }
        self.active = match message {
            Message::Next => (self.active + 1) % len,
            Message::Prev => (self.active + len - 1) % len,
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn filter(key: &str) -> ProjectFilter {
        ProjectFilter {
            key: key.to_string(),
            label: key.to_string(),
            icon: String::new(),
        }
    }

    fn project(title: &str, category: &str) -> Project {
        Project {
            title: title.to_string(),
            category: category.to_string(),
            ..Default::default()
        }
    }

    fn titles(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_filters_by_category() {
        let projects = vec![
            project("Shop", "fullstack"),
            project("Weather", "frontend"),
            project("Api", "backend"),
            project("Tasks", "fullstack"),
        ];
        let mut filters =
            ProjectFilters::new(vec![filter("all"), filter("fullstack"), filter("backend")]);

        assert_eq!(titles(&filters.apply(&projects)).len(), 4);
        filters.update(Message::Next);
        assert_eq!(titles(&filters.apply(&projects)), vec!["Shop", "Tasks"]);
        filters.update(Message::Next);
        assert_eq!(titles(&filters.apply(&projects)), vec!["Api"]);
        filters.update(Message::Next);
        assert_eq!(filters.active_key(), "all");
        filters.update(Message::Prev);
        assert_eq!(filters.active_key(), "backend");
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let projects = vec![project("Shop", "fullstack")];
        let mut filters = ProjectFilters::new(vec![filter("all"), filter("mobile")]);
        filters.update(Message::Next);
        assert!(filters.apply(&projects).is_empty());
    }

    #[test]
    fn test_without_filters_shows_everything() {
        let projects = vec![project("Shop", "fullstack")];
        let mut filters = ProjectFilters::default();
        assert!(!filters.update(Message::Next));
        assert_eq!(filters.active_key(), ALL);
        assert_eq!(filters.apply(&projects).len(), 1);
    }
}
