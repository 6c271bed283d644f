use std::fmt;
use std::path::PathBuf;

/// Shown in place of a description when the skill's frontmatter omits one.
pub const DESCRIPTION_PLACEHOLDER: &str = "No description provided";

/// Where a skill definition came from. Project-scope skills shadow
/// user-scope skills of the same name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillScope {
    User,
    Project,
}

impl SkillScope {
    /// Short bracketed label used by list rows in the UI.
    pub fn label(self) -> &'static str {
        match self {
            SkillScope::User => "[User]",
            SkillScope::Project => "[Project]",
        }
    }
}

impl fmt::Display for SkillScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillScope::User => write!(f, "user"),
            SkillScope::Project => write!(f, "project"),
        }
    }
}

/// Metadata for a single loaded skill. Constructed fresh on every catalog
/// load and immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillMetadata {
    pub name: String,
    pub description: String,
    pub scope: SkillScope,
    /// Path to the skill's `SKILL.md` file.
    pub path: PathBuf,
}

/// A skill entry that was skipped during loading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillError {
    pub path: PathBuf,
    pub message: String,
}

/// Result of a catalog load. Loading is best-effort: `skills` holds every
/// entry that parsed, `errors` records the ones that did not.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillLoadOutcome {
    pub skills: Vec<SkillMetadata>,
    pub errors: Vec<SkillError>,
}
