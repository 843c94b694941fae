// SPDX-License-Identifier: MPL-2.0
//! Portfolio content as data.
//!
//! Everything the page displays (identity, rotating roles, skills, projects,
//! experience) is deserialized from a TOML document. A default document is
//! embedded in the binary; a custom one can be supplied with `--profile`.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "profile.toml"]
struct Asset;

const PROFILE_FILE: &str = "profile.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub identity: Identity,
    pub hero: Hero,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Position>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Identity {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    /// Labels cycled by the rotating headline, in display order.
    pub roles: Vec<String>,
    /// Paragraph revealed by the typewriter.
    pub intro: String,
    /// Portrait image path, relative to the asset root.
    pub portrait: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Icon path, relative to the asset root.
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub domain: Option<String>,
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Position {
    pub company: String,
    pub role: String,
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl Profile {
    /// Checks the invariants the UI relies on.
    ///
    /// The rotating headline requires at least one non-empty role; an empty
    /// identity would render a blank hero.
    pub fn validate(&self) -> Result<()> {
        if self.identity.name.trim().is_empty() {
            return Err(Error::Profile("identity.name must not be empty".into()));
        }
        if self.hero.roles.is_empty() {
            return Err(Error::Profile("hero.roles must not be empty".into()));
        }
        if self.hero.roles.iter().any(|role| role.trim().is_empty()) {
            return Err(Error::Profile("hero.roles entries must not be empty".into()));
        }
        Ok(())
    }
}

/// Loads the profile embedded in the binary.
pub fn load_embedded() -> Result<Profile> {
    let content = Asset::get(PROFILE_FILE)
        .ok_or_else(|| Error::Profile(format!("embedded {PROFILE_FILE} is missing")))?;
    parse(&String::from_utf8_lossy(content.data.as_ref()))
}

/// Loads a profile from a user-supplied path.
pub fn load_from_path(path: &Path) -> Result<Profile> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

fn parse(content: &str) -> Result<Profile> {
    let profile: Profile =
        toml::from_str(content).map_err(|e| Error::Profile(e.to_string()))?;
    profile.validate()?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_profile(roles: &[&str]) -> String {
        let roles_toml = roles
            .iter()
            .map(|r| format!("\"{r}\""))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            r#"
[identity]
name = "Jo"

[hero]
roles = [{roles_toml}]
intro = "Hi there."
"#
        )
    }

    #[test]
    fn embedded_profile_parses_and_validates() {
        let profile = load_embedded().expect("embedded profile must be valid");
        assert!(!profile.identity.name.is_empty());
        assert!(!profile.hero.roles.is_empty());
        assert!(!profile.skills.is_empty());
        assert!(!profile.projects.is_empty());
        assert!(!profile.experience.is_empty());
    }

    #[test]
    fn empty_roles_are_rejected() {
        let err = parse(&minimal_profile(&[])).unwrap_err();
        assert!(matches!(err, Error::Profile(_)));
    }

    #[test]
    fn blank_role_entries_are_rejected() {
        let err = parse(&minimal_profile(&["Backend Developer", "  "])).unwrap_err();
        assert!(matches!(err, Error::Profile(_)));
    }

    #[test]
    fn optional_sections_default_to_empty() {
        let profile = parse(&minimal_profile(&["Backend Developer"])).expect("valid");
        assert!(profile.skills.is_empty());
        assert!(profile.projects.is_empty());
        assert!(profile.experience.is_empty());
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let err = load_from_path(Path::new("/nonexistent/profile.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
