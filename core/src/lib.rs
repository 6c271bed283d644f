//! Shared plumbing for the chat TUI: settings resolution, the model client
//! seam, and the conversation title generator.

pub mod model;
pub mod settings;
pub mod title;

pub use model::ModelClient;
pub use model::ModelError;
pub use settings::Settings;
pub use settings::SettingsError;
pub use title::TitleGenerator;
