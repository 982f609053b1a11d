use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::models::profile::OwnerProfile;

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub app_version: String,
    pub app_env: String,
    /// Mounts the content mutation routes when true.
    pub debug: bool,
    pub owner: OwnerProfile,
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app_name: "AI Engineer Portfolio".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            app_env: "development".to_string(),
            debug: false,
            owner: OwnerProfile {
                name: "John Doe".to_string(),
                title: "AI Engineer & Machine Learning Specialist".to_string(),
                email: "contact@example.com".to_string(),
                github: Some("https://github.com/yourusername".to_string()),
                linkedin: Some("https://linkedin.com/in/yourusername".to_string()),
                twitter: None,
                profile_image: "profile.jpg".to_string(),
            },
            host: "0.0.0.0".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, falling back to defaults.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        let var = |key: &str, default: String| lookup(key).unwrap_or(default);
        // Set-but-empty clears an optional field.
        let optional = |key: &str, default: Option<String>| match lookup(key) {
            Some(v) if v.trim().is_empty() => None,
            Some(v) => Some(v),
            None => default,
        };

        let debug = match lookup("DEBUG") {
            Some(v) => parse_bool(&v).with_context(|| format!("DEBUG must be a boolean, got '{v}'"))?,
            None => defaults.debug,
        };

        let port = match lookup("PORT") {
            Some(v) => v
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => defaults.port,
        };

        let owner = OwnerProfile {
            name: var("OWNER_NAME", defaults.owner.name),
            title: var("OWNER_TITLE", defaults.owner.title),
            email: var("OWNER_EMAIL", defaults.owner.email),
            github: optional("OWNER_GITHUB", defaults.owner.github),
            linkedin: optional("OWNER_LINKEDIN", defaults.owner.linkedin),
            twitter: optional("OWNER_TWITTER", defaults.owner.twitter),
            profile_image: var("OWNER_PROFILE_IMAGE", defaults.owner.profile_image),
        };

        Ok(Config {
            app_name: var("APP_NAME", defaults.app_name),
            app_version: var("APP_VERSION", defaults.app_version),
            app_env: var("APP_ENV", defaults.app_env),
            debug,
            owner,
            host: var("HOST", defaults.host),
            port,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            rust_log: var("RUST_LOG", defaults.rust_log),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
