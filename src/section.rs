use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// A block of the portfolio page, in page order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
    Footer,
}

impl Section {
    pub fn all() -> Vec<Section> {
        Section::iter().collect()
    }

    /// Sections reachable from the navigation bar.
    pub fn navigable() -> Vec<Section> {
        Section::iter().filter(|s| s.nav_label().is_some()).collect()
    }

    pub fn nav_label(&self) -> Option<&'static str> {
        match self {
            Section::Hero => Some("Home"),
            Section::About => Some("About"),
            Section::Skills => Some("Skills"),
            Section::Projects => Some("Projects"),
            Section::Experience => Some("Experience"),
            Section::Contact => Some("Contact"),
            Section::Footer => None,
        }
    }

    pub fn index(&self) -> usize {
        Section::iter().position(|s| s == *self).unwrap_or_default()
    }

    pub fn next(&self) -> Section {
        let navigable = Section::navigable();
        let pos = navigable.iter().position(|s| s == self).unwrap_or_default();
        navigable[(pos + 1) % navigable.len()]
    }

    pub fn prev(&self) -> Section {
        let navigable = Section::navigable();
        let pos = navigable.iter().position(|s| s == self).unwrap_or_default();
        navigable[(pos + navigable.len() - 1) % navigable.len()]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_navigable_excludes_footer() {
        assert_eq!(
            Section::navigable(),
            vec![
                Section::Hero,
                Section::About,
                Section::Skills,
                Section::Projects,
                Section::Experience,
                Section::Contact,
            ]
        );
    }

    #[test]
    fn test_next_wraps_to_first() {
        assert_eq!(Section::Contact.next(), Section::Hero);
        assert_eq!(Section::Hero.next(), Section::About);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        assert_eq!(Section::Hero.prev(), Section::Contact);
        assert_eq!(Section::Skills.prev(), Section::About);
    }

    #[test]
    fn test_index_follows_page_order() {
        assert_eq!(Section::Hero.index(), 0);
        assert_eq!(Section::Footer.index(), 6);
    }
}
