use crossterm::event::KeyEvent;
use crossterm::event::MouseEvent;

/// Events processed by the app's single event loop, in arrival order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Paste(String),
    RequestRedraw,

    /// Composer -> app: the `/skills` trigger command was submitted.
    ShowSkillsModal { agent: String },
    /// Skills view -> app: a skill was chosen. The app inserts a
    /// `/use-skill <name>` command into the composer.
    SkillsSelected { name: String, description: String },
    /// Skills view -> app: dismissed without a choice. No payload.
    SkillsCancelled,

    /// Composer -> app: a chat message was submitted.
    SubmitUserMessage(String),
    /// Background task -> app: the agent's reply to the last message.
    AgentReply(String),
    /// Background task -> app: a generated thread title.
    ThreadTitle(String),
    /// Composer -> app: list the available slash commands.
    ShowHelp,

    Exit,
}
