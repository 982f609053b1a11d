use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// The three skill lists shown in the skills section, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    AiMl,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Technical,
        SkillCategory::AiMl,
        SkillCategory::Tools,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical Skills",
            SkillCategory::AiMl => "AI & Machine Learning",
            SkillCategory::Tools => "Tools & Platforms",
        }
    }
}

/// End of a dated entry. Dates are display strings, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EndDate {
    Present,
    On(String),
}

impl From<String> for EndDate {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case("present") {
            EndDate::Present
        } else {
            EndDate::On(value)
        }
    }
}

impl From<&str> for EndDate {
    fn from(value: &str) -> Self {
        EndDate::from(value.to_string())
    }
}

impl From<EndDate> for String {
    fn from(value: EndDate) -> Self {
        value.to_string()
    }
}

impl fmt::Display for EndDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndDate::Present => f.write_str("Present"),
            EndDate::On(date) => f.write_str(date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub demo_url: Option<String>,
    #[serde(default, alias = "github_url", deserialize_with = "empty_as_none")]
    pub repo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: EndDate,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub start_date: String,
    pub end_date: EndDate,
    pub description: String,
}

/// Treats `""` and whitespace-only strings as an absent optional field.
pub fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_end_date_present_sentinel_is_case_insensitive() {
        assert_eq!(EndDate::from("present"), EndDate::Present);
        assert_eq!(EndDate::from(" Present "), EndDate::Present);
        assert_eq!(EndDate::from("Dec 2021"), EndDate::On("Dec 2021".to_string()));
    }

    #[test]
    fn test_end_date_displays_verbatim() {
        assert_eq!(EndDate::Present.to_string(), "Present");
        assert_eq!(EndDate::from("2017").to_string(), "2017");
    }

    #[test]
    fn test_project_empty_optionals_deserialize_as_none() {
        let project: Project = serde_json::from_value(json!({
            "title": "Demo",
            "category": "Tools",
            "description": "A thing",
            "image": "",
            "demo_url": "  ",
            "github_url": "https://github.com/x/y"
        }))
        .unwrap();

        assert!(project.technologies.is_empty());
        assert_eq!(project.image, None);
        assert_eq!(project.demo_url, None);
        assert_eq!(project.repo_url.as_deref(), Some("https://github.com/x/y"));
    }

    #[test]
    fn test_project_missing_optionals_deserialize_as_none() {
        let project: Project = serde_json::from_value(json!({
            "title": "Demo",
            "category": "Tools",
            "description": "A thing"
        }))
        .unwrap();

        assert_eq!(project.image, None);
        assert_eq!(project.repo_url, None);
    }

    #[test]
    fn test_experience_end_date_serializes_as_string() {
        let entry = ExperienceEntry {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            start_date: "Jan 2022".to_string(),
            end_date: EndDate::Present,
            description: String::new(),
            technologies: vec![],
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["end_date"], "Present");
    }

    #[test]
    fn test_skill_category_headings_in_display_order() {
        let headings: Vec<_> = SkillCategory::ALL.iter().map(|c| c.heading()).collect();
        assert_eq!(
            headings,
            vec!["Technical Skills", "AI & Machine Learning", "Tools & Platforms"]
        );
    }
}
