use std::path::PathBuf;
use std::sync::Arc;

use agentchat_core::ModelClient;
use agentchat_core::Settings;
use agentchat_core::TitleGenerator;
use crossterm::event::KeyEvent;
use crossterm::event::MouseEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::prelude::Widget;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use tracing::warn;

use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::bottom_pane::BottomPane;
use crate::bottom_pane::ConditionalUpdate;
use crate::bottom_pane::SkillsSelectionView;
use crate::colors;
use crate::composer::ChatComposer;
use crate::slash_command::help_lines;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ChatRole {
    User,
    Agent,
    System,
}

#[derive(Clone, Debug)]
struct ChatCell {
    role: ChatRole,
    text: String,
}

/// Hosts the transcript, the composer, and the bottom pane. All events are
/// applied here, one at a time, in arrival order.
pub(crate) struct ChatWidget {
    app_event_tx: AppEventSender,
    settings: Settings,
    agent: String,
    cwd: PathBuf,
    model: Option<Arc<dyn ModelClient>>,
    thread_title: Option<String>,
    cells: Vec<ChatCell>,
    composer: ChatComposer,
    bottom_pane: BottomPane,
    title_requested: bool,
}

impl ChatWidget {
    pub fn new(
        settings: Settings,
        agent: String,
        cwd: PathBuf,
        model: Option<Arc<dyn ModelClient>>,
        app_event_tx: AppEventSender,
    ) -> Self {
        let composer = ChatComposer::new(agent.clone(), app_event_tx.clone());
        Self {
            app_event_tx,
            settings,
            agent,
            cwd,
            model,
            thread_title: None,
            cells: Vec::new(),
            composer,
            bottom_pane: BottomPane::new(),
            title_requested: false,
        }
    }

    /// Apply one event. Returns `true` when the screen needs repainting.
    /// `AppEvent::Exit` is the app loop's concern and is ignored here.
    pub fn handle_app_event(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::Key(key_event) => self.handle_key_event(key_event),
            AppEvent::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            AppEvent::Paste(pasted) => self.handle_paste(&pasted),
            AppEvent::RequestRedraw => true,
            AppEvent::ShowSkillsModal { agent } => {
                self.show_skills_modal(&agent);
                true
            }
            AppEvent::SkillsSelected { name, .. } => {
                self.composer.set_text(format!("/use-skill {name}"));
                true
            }
            // The view resolves itself; closing the pane is already done.
            AppEvent::SkillsCancelled => true,
            AppEvent::SubmitUserMessage(text) => {
                self.submit_user_message(text);
                true
            }
            AppEvent::AgentReply(text) => {
                self.push_cell(ChatRole::Agent, text);
                true
            }
            AppEvent::ThreadTitle(title) => {
                self.thread_title = Some(title);
                true
            }
            AppEvent::ShowHelp => {
                self.push_cell(ChatRole::System, help_lines().join("\n"));
                true
            }
            AppEvent::Exit => false,
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if self.bottom_pane.has_active_view() {
            return matches!(
                self.bottom_pane.handle_key_event(key_event),
                ConditionalUpdate::NeedsRedraw
            );
        }
        self.composer.handle_key_event(key_event)
    }

    pub fn handle_mouse_event(&mut self, mouse_event: MouseEvent) -> bool {
        matches!(
            self.bottom_pane.handle_mouse_event(mouse_event),
            ConditionalUpdate::NeedsRedraw
        )
    }

    pub fn handle_paste(&mut self, pasted: &str) -> bool {
        if self.bottom_pane.has_active_view() {
            return false;
        }
        self.composer.handle_paste(pasted)
    }

    /// Resolve skill directories and mount the selection view. Paths are
    /// resolved here and passed explicitly; the view never touches settings.
    fn show_skills_modal(&mut self, agent: &str) {
        let user_skills_dir = self.settings.user_skills_dir(agent);
        let project_skills_dir = Settings::project_skills_dir(&self.cwd);
        let view = SkillsSelectionView::new(
            agent,
            &user_skills_dir,
            project_skills_dir.as_deref(),
            self.app_event_tx.clone(),
        );
        self.bottom_pane.show_view(Box::new(view));
    }

    fn submit_user_message(&mut self, text: String) {
        self.push_cell(ChatRole::User, text.clone());

        let Some(model) = self.model.as_ref() else {
            self.push_cell(
                ChatRole::System,
                "No model is configured; the message was recorded.".to_string(),
            );
            return;
        };

        if !self.title_requested {
            self.title_requested = true;
            let generator = TitleGenerator::new(Arc::clone(model));
            let tx = self.app_event_tx.clone();
            let message = text.clone();
            tokio::spawn(async move {
                if let Some(title) = generator.generate_title(&message).await {
                    tx.send(AppEvent::ThreadTitle(title));
                }
            });
        }

        let model = Arc::clone(model);
        let tx = self.app_event_tx.clone();
        tokio::spawn(async move {
            match model.complete(&text).await {
                Ok(reply) => tx.send(AppEvent::AgentReply(reply)),
                Err(err) => warn!("agent reply failed: {err}"),
            }
        });
    }

    fn push_cell(&mut self, role: ChatRole, text: String) {
        self.cells.push(ChatCell { role, text });
    }

    fn transcript_lines(&self) -> Vec<Line<'_>> {
        let mut lines = Vec::new();
        for cell in &self.cells {
            let (label, style) = match cell.role {
                ChatRole::User => ("You", Style::default().fg(colors::text_bright())),
                ChatRole::Agent => ("Agent", Style::default().fg(colors::primary())),
                ChatRole::System => ("•", Style::default().fg(colors::text_dim())),
            };
            for (i, text_line) in cell.text.lines().enumerate() {
                if i == 0 {
                    lines.push(Line::from(vec![
                        Span::styled(format!("{label} "), style.add_modifier(Modifier::BOLD)),
                        Span::styled(text_line.to_string(), style),
                    ]));
                } else {
                    lines.push(Line::from(Span::styled(text_line.to_string(), style)));
                }
            }
        }
        lines
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let bottom_height = if self.bottom_pane.has_active_view() {
            self.bottom_pane.desired_height(area.width)
        } else {
            self.composer.desired_height()
        };

        let [header, transcript, bottom] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(bottom_height),
        ])
        .areas(area);

        let title = self.thread_title.as_deref().unwrap_or("new thread");
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("agentchat · {title}"),
                Style::default()
                    .fg(colors::text_bright())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  (agent: {})", self.agent),
                Style::default().fg(colors::text_dim()),
            ),
        ]))
        .render(header, buf);

        let lines = self.transcript_lines();
        let visible = transcript.height as usize;
        let skip = lines.len().saturating_sub(visible);
        Paragraph::new(lines.into_iter().skip(skip).collect::<Vec<_>>())
            .render(transcript, buf);

        if self.bottom_pane.has_active_view() {
            self.bottom_pane.render(bottom, buf);
        } else {
            self.composer.render(bottom, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use tempfile::TempDir;
    use tokio::sync::mpsc::UnboundedReceiver;
    use tokio::sync::mpsc::unbounded_channel;

    fn widget() -> (ChatWidget, UnboundedReceiver<AppEvent>, TempDir) {
        let app_home = TempDir::new().unwrap();
        let (tx, rx) = unbounded_channel();
        let widget = ChatWidget::new(
            Settings::with_app_home(app_home.path().to_path_buf()),
            "test-agent".to_string(),
            app_home.path().to_path_buf(),
            None,
            AppEventSender::new(tx),
        );
        (widget, rx, app_home)
    }

    fn write_skill(root: &Path, name: &str) {
        let dir = root.join(name);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("SKILL.md"),
            format!("---\nname: {name}\ndescription: d\n---\n"),
        )
        .unwrap();
    }

    #[test]
    fn skill_selection_inserts_follow_up_command() {
        let (mut widget, _rx, _home) = widget();

        widget.handle_app_event(AppEvent::SkillsSelected {
            name: "review".to_string(),
            description: "d".to_string(),
        });

        assert_eq!(widget.composer.text(), "/use-skill review");
    }

    #[test]
    fn show_skills_modal_mounts_the_pane_view() {
        let (mut widget, _rx, _home) = widget();

        widget.handle_app_event(AppEvent::ShowSkillsModal {
            agent: "test-agent".to_string(),
        });

        assert!(widget.bottom_pane.has_active_view());
    }

    #[test]
    fn cancelling_the_modal_returns_input_to_the_composer() {
        let (mut widget, mut rx, home) = widget();
        write_skill(
            &home
                .path()
                .join("agents")
                .join("test-agent")
                .join("skills"),
            "review",
        );

        widget.handle_app_event(AppEvent::ShowSkillsModal {
            agent: "test-agent".to_string(),
        });
        widget.handle_key_event(KeyEvent::new(
            crossterm::event::KeyCode::Esc,
            crossterm::event::KeyModifiers::NONE,
        ));

        assert!(!widget.bottom_pane.has_active_view());
        assert_eq!(rx.try_recv().ok(), Some(AppEvent::SkillsCancelled));

        widget.handle_key_event(KeyEvent::new(
            crossterm::event::KeyCode::Char('h'),
            crossterm::event::KeyModifiers::NONE,
        ));
        assert_eq!(widget.composer.text(), "h");
    }

    #[test]
    fn selecting_a_skill_through_the_modal_emits_selected() {
        let (mut widget, mut rx, home) = widget();
        write_skill(
            &home
                .path()
                .join("agents")
                .join("test-agent")
                .join("skills"),
            "review",
        );

        widget.handle_app_event(AppEvent::ShowSkillsModal {
            agent: "test-agent".to_string(),
        });
        widget.handle_key_event(KeyEvent::new(
            crossterm::event::KeyCode::Enter,
            crossterm::event::KeyModifiers::NONE,
        ));

        assert_eq!(
            rx.try_recv().ok(),
            Some(AppEvent::SkillsSelected {
                name: "review".to_string(),
                description: "d".to_string(),
            }),
        );
        assert!(!widget.bottom_pane.has_active_view());
    }

    #[test]
    fn submitting_without_a_model_records_a_system_note() {
        let (mut widget, _rx, _home) = widget();

        widget.handle_app_event(AppEvent::SubmitUserMessage("hello".to_string()));

        assert_eq!(widget.cells.len(), 2);
        assert_eq!(widget.cells[0].role, ChatRole::User);
        assert_eq!(widget.cells[1].role, ChatRole::System);
    }

    #[test]
    fn thread_title_event_updates_the_header() {
        let (mut widget, _rx, _home) = widget();

        widget.handle_app_event(AppEvent::ThreadTitle("Hello World".to_string()));

        assert_eq!(widget.thread_title.as_deref(), Some("Hello World"));
    }
}
