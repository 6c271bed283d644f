use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

/// Directory name used both under the home directory and inside a project
/// checkout.
const APP_DIR_NAME: &str = ".agentchat";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not determine the user's home directory")]
    NoHomeDir,
}

/// Resolves the on-disk locations the application reads from.
///
/// Skill directories are resolved here and handed to consumers as explicit
/// paths; nothing below this layer reaches into ambient configuration.
#[derive(Clone, Debug)]
pub struct Settings {
    app_home: PathBuf,
}

impl Settings {
    pub fn new() -> Result<Self, SettingsError> {
        let home = dirs::home_dir().ok_or(SettingsError::NoHomeDir)?;
        Ok(Self {
            app_home: home.join(APP_DIR_NAME),
        })
    }

    /// Build settings rooted at an explicit app home. Used by tests and by
    /// embedders that relocate the configuration tree.
    pub fn with_app_home(app_home: PathBuf) -> Self {
        Self { app_home }
    }

    pub fn app_home(&self) -> &Path {
        &self.app_home
    }

    /// User-scope skills directory for the given agent identifier.
    pub fn user_skills_dir(&self, agent: &str) -> PathBuf {
        self.app_home.join("agents").join(agent).join("skills")
    }

    /// Project-scope skills directory under `cwd`, if one exists.
    pub fn project_skills_dir(cwd: &Path) -> Option<PathBuf> {
        let dir = cwd.join(APP_DIR_NAME).join("skills");
        dir.is_dir().then_some(dir)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.app_home.join("log")
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn user_skills_dir_is_per_agent() {
        let settings = Settings::with_app_home(PathBuf::from("/tmp/apphome"));
        assert_eq!(
            settings.user_skills_dir("test-agent"),
            PathBuf::from("/tmp/apphome/agents/test-agent/skills"),
        );
    }

    #[test]
    fn project_skills_dir_requires_existing_directory() {
        assert_eq!(
            Settings::project_skills_dir(Path::new("/definitely/not/a/real/cwd")),
            None,
        );
    }
}
