use serde::Deserialize;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill out all required fields";
pub const SENT_MESSAGE: &str = "Message sent successfully! I will get back to you soon.";

/// The four contact fields as submitted. Missing form keys deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Positive,
    Negative,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Positive => "notification notification-positive",
            NotificationKind::Negative => "notification notification-negative",
        }
    }
}

/// A transient message shown above the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: &'static str,
}

/// Result of one submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// A required field was empty. The form keeps what the user typed.
    Rejected { form: ContactForm },
    /// All required fields present. The form resets to empty.
    Accepted { message: ContactForm },
}

impl ContactForm {
    /// Names of required fields that are empty after trimming.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn submit(self) -> Submission {
        if self.missing_fields().is_empty() {
            Submission::Accepted { message: self }
        } else {
            Submission::Rejected { form: self }
        }
    }
}

impl Submission {
    pub fn notification(&self) -> Notification {
        match self {
            Submission::Rejected { .. } => Notification {
                kind: NotificationKind::Negative,
                message: MISSING_FIELDS_MESSAGE,
            },
            Submission::Accepted { .. } => Notification {
                kind: NotificationKind::Positive,
                message: SENT_MESSAGE,
            },
        }
    }

    /// Field values the re-rendered form should show.
    pub fn form_after(&self) -> ContactForm {
        match self {
            Submission::Rejected { form } => form.clone(),
            Submission::Accepted { .. } => ContactForm::default(),
        }
    }
}
