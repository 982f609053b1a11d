/// The anchored regions of the page, in render order.
/// The hero is not listed: it has no anchor and "Home" links to `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Skills,
    Projects,
    Experience,
    Education,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Education,
        Section::Contact,
    ];

    /// Anchor identifier. Stable; links depend on it.
    pub fn id(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Contact => "contact",
        }
    }

    /// Short label for the navigation bar.
    pub fn nav_label(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }

    /// Heading shown at the top of the section.
    pub fn heading(&self) -> &'static str {
        match self {
            Section::About => "About Me",
            Section::Skills => "Skills & Expertise",
            Section::Projects => "Featured Projects",
            Section::Experience => "Work Experience",
            Section::Education => "Education",
            Section::Contact => "Get In Touch",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}
