use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::model::DESCRIPTION_PLACEHOLDER;
use crate::model::SkillError;
use crate::model::SkillLoadOutcome;
use crate::model::SkillMetadata;
use crate::model::SkillScope;

const SKILL_FILE_NAME: &str = "SKILL.md";

#[derive(Debug, Error)]
enum SkillParseError {
    #[error("missing SKILL.md")]
    MissingSkillFile,
    #[error("failed to read SKILL.md: {0}")]
    Read(#[from] std::io::Error),
    #[error("SKILL.md must start with YAML frontmatter")]
    MissingFrontmatter,
    #[error("invalid frontmatter: {0}")]
    InvalidFrontmatter(#[from] serde_yaml::Error),
    #[error("frontmatter is missing a non-empty `name`")]
    MissingName,
}

#[derive(Deserialize)]
struct SkillFrontmatter {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: Option<String>,
}

/// Assemble the combined skill catalog from the user-scope directory and an
/// optional project-scope directory.
///
/// The catalog is rebuilt from disk on every call. A missing directory is an
/// empty contribution, not an error. Entries that fail to parse are skipped
/// and reported via [`SkillLoadOutcome::errors`].
///
/// Ordering is deterministic: alphabetical by name (case-insensitive) within
/// each scope, user-scope section first. A project-scope skill shadows a
/// user-scope skill with the same normalized name, so each name surfaces at
/// most once.
pub fn load_catalog(user_dir: &Path, project_dir: Option<&Path>) -> SkillLoadOutcome {
    let mut outcome = SkillLoadOutcome::default();

    let mut user_skills = load_scope(user_dir, SkillScope::User, &mut outcome.errors);
    let mut project_skills = match project_dir {
        Some(dir) => load_scope(dir, SkillScope::Project, &mut outcome.errors),
        None => Vec::new(),
    };

    sort_by_name(&mut user_skills);
    sort_by_name(&mut project_skills);

    let shadowed: HashSet<String> = project_skills
        .iter()
        .map(|skill| normalize_name(&skill.name))
        .collect();
    user_skills.retain(|skill| !shadowed.contains(&normalize_name(&skill.name)));

    outcome.skills = user_skills;
    outcome.skills.append(&mut project_skills);
    outcome
}

fn load_scope(dir: &Path, scope: SkillScope, errors: &mut Vec<SkillError>) -> Vec<SkillMetadata> {
    let mut skills = Vec::new();
    let Ok(entries) = fs::read_dir(dir) else {
        return skills;
    };

    for entry in entries.flatten() {
        let entry_path = entry.path();
        if !entry_path.is_dir() {
            continue;
        }
        match parse_skill(&entry_path, scope) {
            Ok(skill) => skills.push(skill),
            Err(err) => errors.push(SkillError {
                path: entry_path.join(SKILL_FILE_NAME),
                message: err.to_string(),
            }),
        }
    }

    skills
}

fn parse_skill(skill_dir: &Path, scope: SkillScope) -> Result<SkillMetadata, SkillParseError> {
    let path: PathBuf = skill_dir.join(SKILL_FILE_NAME);
    if !path.is_file() {
        return Err(SkillParseError::MissingSkillFile);
    }

    let body = fs::read_to_string(&path)?;
    let frontmatter =
        extract_frontmatter(&body).ok_or(SkillParseError::MissingFrontmatter)?;
    let parsed: SkillFrontmatter = serde_yaml::from_str(&frontmatter)?;

    let name = parsed.name.trim().to_string();
    if name.is_empty() {
        return Err(SkillParseError::MissingName);
    }

    let description = parsed
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| DESCRIPTION_PLACEHOLDER.to_string());

    Ok(SkillMetadata {
        name,
        description,
        scope,
        path,
    })
}

fn extract_frontmatter(body: &str) -> Option<String> {
    let mut lines = body.lines();
    if lines.next()?.trim_end() != "---" {
        return None;
    }
    let mut frontmatter = String::new();
    for line in lines {
        if line.trim() == "---" {
            return Some(frontmatter);
        }
        frontmatter.push_str(line);
        frontmatter.push('\n');
    }
    None
}

fn sort_by_name(skills: &mut [SkillMetadata]) {
    skills.sort_by(|a, b| normalize_name(&a.name).cmp(&normalize_name(&b.name)));
}

fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}
