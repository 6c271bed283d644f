use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use strum_macros::EnumString;
use strum_macros::IntoStaticStr;

/// Commands recognized when a composer line starts with `/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub(crate) enum SlashCommand {
    /// Open the skills selection view.
    Skills,
    /// Ask the agent to apply a named skill.
    UseSkill,
    /// List the available commands.
    Help,
    /// Leave the application.
    Quit,
}

impl SlashCommand {
    pub fn command(self) -> &'static str {
        self.into()
    }

    pub fn description(self) -> &'static str {
        match self {
            SlashCommand::Skills => "browse and select a skill",
            SlashCommand::UseSkill => "apply a skill by name",
            SlashCommand::Help => "list available commands",
            SlashCommand::Quit => "exit agentchat",
        }
    }
}

/// Parse a submitted line into a slash command plus its argument tail.
/// Returns `None` for plain chat text and for unrecognized commands.
pub(crate) fn slash_command_from_line(line: &str) -> Option<(SlashCommand, &str)> {
    let trimmed = line.trim();
    let command_portion = trimmed.strip_prefix('/')?;
    let name = command_portion.split_whitespace().next()?;
    let canonical = name.to_ascii_lowercase();
    let command = SlashCommand::from_str(&canonical).ok()?;
    let args = command_portion[name.len()..].trim();
    Some((command, args))
}

/// One line per command, for `/help` output.
pub(crate) fn help_lines() -> Vec<String> {
    SlashCommand::iter()
        .map(|cmd| format!("/{} - {}", cmd.command(), cmd.description()))
        .collect()
}
