use serde::Serialize;

use crate::models::content::{EducationEntry, ExperienceEntry, Project, SkillCategory};

/// In-memory holder of all portfolio content.
///
/// Every operation is total. Collections are append-only and keep insertion
/// order; there is no delete and no dedup. Accessors hand out shared borrows,
/// so callers cannot mutate stored content through them.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    bio: String,
    about: String,
    technical_skills: Vec<String>,
    ai_ml_skills: Vec<String>,
    tools_platforms: Vec<String>,
    projects: Vec<Project>,
    experience: Vec<ExperienceEntry>,
    education: Vec<EducationEntry>,
}

/// Owned copy of the store, returned by the content API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentSnapshot {
    pub bio: String,
    pub about: String,
    pub technical_skills: Vec<String>,
    pub ai_ml_skills: Vec<String>,
    pub tools_platforms: Vec<String>,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
}

impl ContentStore {
    pub fn new(bio: impl Into<String>, about: impl Into<String>) -> Self {
        Self {
            bio: bio.into(),
            about: about.into(),
            ..Self::default()
        }
    }

    pub fn with_skills(mut self, category: SkillCategory, skills: &[&str]) -> Self {
        let list = self.skills_mut(category);
        list.extend(skills.iter().map(|s| s.to_string()));
        self
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    pub fn about(&self) -> &str {
        &self.about
    }

    pub fn technical_skills(&self) -> &[String] {
        &self.technical_skills
    }

    pub fn ai_ml_skills(&self) -> &[String] {
        &self.ai_ml_skills
    }

    pub fn tools_platforms(&self) -> &[String] {
        &self.tools_platforms
    }

    pub fn skills(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Technical => self.technical_skills(),
            SkillCategory::AiMl => self.ai_ml_skills(),
            SkillCategory::Tools => self.tools_platforms(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn experience(&self) -> &[ExperienceEntry] {
        &self.experience
    }

    pub fn education(&self) -> &[EducationEntry] {
        &self.education
    }

    pub fn update_bio(&mut self, bio: impl Into<String>) {
        self.bio = bio.into();
    }

    pub fn update_about(&mut self, about: impl Into<String>) {
        self.about = about.into();
    }

    pub fn add_project(&mut self, project: Project) {
        self.projects.push(project);
    }

    pub fn add_experience(&mut self, entry: ExperienceEntry) {
        self.experience.push(entry);
    }

    pub fn add_education(&mut self, entry: EducationEntry) {
        self.education.push(entry);
    }

    pub fn snapshot(&self) -> ContentSnapshot {
        ContentSnapshot {
            bio: self.bio.clone(),
            about: self.about.clone(),
            technical_skills: self.technical_skills.clone(),
            ai_ml_skills: self.ai_ml_skills.clone(),
            tools_platforms: self.tools_platforms.clone(),
            projects: self.projects.clone(),
            experience: self.experience.clone(),
            education: self.education.clone(),
        }
    }

    fn skills_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Technical => &mut self.technical_skills,
            SkillCategory::AiMl => &mut self.ai_ml_skills,
            SkillCategory::Tools => &mut self.tools_platforms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::EndDate;

    fn make_project(title: &str) -> Project {
        Project {
            title: title.to_string(),
            category: "Testing".to_string(),
            description: format!("{title} description"),
            technologies: vec!["Rust".to_string()],
            image: None,
            demo_url: None,
            repo_url: None,
        }
    }

    #[test]
    fn test_add_project_appends_at_end() {
        let mut store = ContentStore::seeded();
        let before = store.projects().to_vec();

        let project = make_project("New Thing");
        store.add_project(project.clone());

        let after = store.projects();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.last(), Some(&project));
        assert_eq!(&after[..before.len()], before.as_slice());
    }

    #[test]
    fn test_add_project_allows_duplicates() {
        let mut store = ContentStore::default();
        store.add_project(make_project("Same"));
        store.add_project(make_project("Same"));
        assert_eq!(store.projects().len(), 2);
    }

    #[test]
    fn test_update_bio_replaces_verbatim() {
        let mut store = ContentStore::seeded();
        store.update_bio("  New bio\nwith lines  ");
        assert_eq!(store.bio(), "  New bio\nwith lines  ");

        store.update_bio("");
        assert_eq!(store.bio(), "");
    }

    #[test]
    fn test_update_about_replaces_verbatim() {
        let mut store = ContentStore::new("bio", "old");
        store.update_about("new");
        assert_eq!(store.about(), "new");
        assert_eq!(store.bio(), "bio");
    }

    #[test]
    fn test_add_experience_and_education_keep_order() {
        let mut store = ContentStore::default();
        for company in ["First", "Second"] {
            store.add_experience(ExperienceEntry {
                title: "Engineer".to_string(),
                company: company.to_string(),
                start_date: "2020".to_string(),
                end_date: EndDate::Present,
                description: String::new(),
                technologies: vec![],
            });
        }
        store.add_education(EducationEntry {
            degree: "BSc".to_string(),
            institution: "Uni".to_string(),
            start_date: "2011".to_string(),
            end_date: EndDate::from("2015"),
            description: String::new(),
        });

        let companies: Vec<_> = store.experience().iter().map(|e| e.company.as_str()).collect();
        assert_eq!(companies, vec!["First", "Second"]);
        assert_eq!(store.education().len(), 1);
    }

    #[test]
    fn test_skills_keep_insertion_order_without_dedup() {
        let store = ContentStore::default().with_skills(SkillCategory::Tools, &["b", "a", "b"]);
        assert_eq!(store.skills(SkillCategory::Tools), ["b", "a", "b"]);
        assert_eq!(store.tools_platforms(), ["b", "a", "b"]);
        assert!(store.technical_skills().is_empty());
    }

    #[test]
    fn test_snapshot_is_detached_from_store() {
        let mut store = ContentStore::seeded();
        let snapshot = store.snapshot();
        store.update_bio("changed");
        store.add_project(make_project("Later"));

        assert_ne!(snapshot.bio, "changed");
        assert_eq!(snapshot.projects.len() + 1, store.projects().len());
    }

    #[test]
    fn test_seeded_store_has_owner_content() {
        let store = ContentStore::seeded();
        assert!(!store.bio().trim().is_empty());
        assert!(!store.about().trim().is_empty());
        assert_eq!(store.technical_skills().len(), 15);
        assert_eq!(store.ai_ml_skills().len(), 14);
        assert_eq!(store.tools_platforms().len(), 14);
        assert_eq!(store.projects().len(), 6);
        assert_eq!(store.experience().len(), 3);
        assert_eq!(store.education().len(), 2);
    }
}
