//! Skill catalog for the chat TUI.
//!
//! Skills are reusable instruction bundles stored as `SKILL.md` files, one
//! directory per skill, scoped to either the user's home configuration or
//! the current project. The loader assembles a combined, deterministically
//! ordered catalog and never fails: bad entries are skipped and reported
//! through [`SkillLoadOutcome::errors`].

mod loader;
mod model;

pub use loader::load_catalog;
pub use model::DESCRIPTION_PLACEHOLDER;
pub use model::SkillError;
pub use model::SkillLoadOutcome;
pub use model::SkillMetadata;
pub use model::SkillScope;
