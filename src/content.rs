//! Portfolio content
//!
//! Everything shown on the page comes from here. The defaults ship inside
//! `.config/config.json5`; a user config can replace the whole `portfolio`
//! table.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub owner: String,
    #[serde(default)]
    pub hero: Hero,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub projects: Projects,
    #[serde(default)]
    pub experience: Experience,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub footer: Footer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub greeting: String,
    pub tagline: String,
    #[serde(default)]
    pub actions: Vec<Link>,
    #[serde(default)]
    pub socials: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub heading: String,
    pub subheading: String,
    pub title: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent.
    pub level: u8,
    /// `#rrggbb`
    pub color: String,
}

impl Skill {
    pub fn level(&self) -> u8 {
        self.level.min(100)
    }

    pub fn color(&self) -> Color {
        parse_hex_color(&self.color).unwrap_or(Color::Cyan)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub key: String,
    pub title: String,
    pub icon: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub heading: String,
    pub subheading: String,
    #[serde(default)]
    pub categories: Vec<SkillCategory>,
    #[serde(default)]
    pub highlights: Vec<Feature>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFilter {
    pub key: String,
    pub label: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projects {
    pub heading: String,
    pub subheading: String,
    #[serde(default)]
    pub filters: Vec<ProjectFilter>,
    #[serde(default)]
    pub items: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub kind: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub heading: String,
    pub subheading: String,
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub traits: Vec<Feature>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub label: String,
    pub value: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub subheading: String,
    pub intro: String,
    #[serde(default)]
    pub info: Vec<ContactInfo>,
    #[serde(default)]
    pub socials: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub tagline: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Parses `#rgb` / `#rrggbb`.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    let expand = |c: char| c.to_digit(16).map(|d| (d * 17) as u8);
    match hex.len() {
        3 => {
            let mut it = hex.chars();
            Some(Color::Rgb(
                expand(it.next()?)?,
                expand(it.next()?)?,
                expand(it.next()?)?,
            ))
        }
        6 => Some(Color::Rgb(
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("#61DAFB", Some(Color::Rgb(0x61, 0xDA, 0xFB)))]
    #[case("#fff", Some(Color::Rgb(255, 255, 255)))]
    #[case("61DAFB", None)]
    #[case("#12345", None)]
    #[case("#zzzzzz", None)]
    fn test_parse_hex_color(#[case] input: &str, #[case] expected: Option<Color>) {
        assert_eq!(parse_hex_color(input), expected);
    }

    #[test]
    fn test_skill_level_is_clamped() {
        let skill = Skill {
            name: "Overconfidence".to_string(),
            level: 180,
            color: "#000000".to_string(),
        };
        assert_eq!(skill.level(), 100);
    }

    #[test]
    fn test_skill_color_falls_back() {
        let skill = Skill {
            name: "Mystery".to_string(),
            level: 50,
            color: "teal-ish".to_string(),
        };
        assert_eq!(skill.color(), Color::Cyan);
    }

    #[test]
    fn test_project_optional_fields_default() {
        let project: Project = json5::from_str(
            r#"{ title: "T", description: "D", category: "frontend" }"#,
        )
        .expect("valid json5");
        assert_eq!(project.technologies, Vec::<String>::new());
        assert_eq!(project.live_url, None);
        assert!(!project.featured);
    }
}
