use serde::Serialize;

/// The site owner's identity, taken from configuration and shown in the
/// hero, contact and footer areas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnerProfile {
    pub name: String,
    pub title: String,
    pub email: String,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub profile_image: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Twitter,
    Email,
}

impl SocialKind {
    pub fn label(&self) -> &'static str {
        match self {
            SocialKind::GitHub => "GitHub",
            SocialKind::LinkedIn => "LinkedIn",
            SocialKind::Twitter => "Twitter",
            SocialKind::Email => "Email",
        }
    }

    /// Stable CSS hook, also used to locate the control in tests.
    pub fn slug(&self) -> &'static str {
        match self {
            SocialKind::GitHub => "github",
            SocialKind::LinkedIn => "linkedin",
            SocialKind::Twitter => "twitter",
            SocialKind::Email => "email",
        }
    }

    /// Font Awesome classes for the footer icon.
    pub fn icon_class(&self) -> &'static str {
        match self {
            SocialKind::GitHub => "fab fa-github",
            SocialKind::LinkedIn => "fab fa-linkedin",
            SocialKind::Twitter => "fab fa-twitter",
            SocialKind::Email => "fas fa-envelope",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
}

impl OwnerProfile {
    /// Configured social links in footer order. Unset entries are skipped.
    pub fn social_links(&self) -> Vec<SocialLink> {
        let mailto = (!self.email.trim().is_empty()).then(|| format!("mailto:{}", self.email));

        [
            (SocialKind::GitHub, self.github.clone()),
            (SocialKind::LinkedIn, self.linkedin.clone()),
            (SocialKind::Twitter, self.twitter.clone()),
            (SocialKind::Email, mailto),
        ]
        .into_iter()
        .filter_map(|(kind, href)| href.map(|href| SocialLink { kind, href }))
        .collect()
    }
}
