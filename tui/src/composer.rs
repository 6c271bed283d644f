use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::Widget;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::colors;
use crate::slash_command::SlashCommand;
use crate::slash_command::slash_command_from_line;

/// Single-line chat input. Recognizes slash commands on submit; everything
/// else is sent to the agent as a chat message.
pub(crate) struct ChatComposer {
    text: String,
    agent: String,
    app_event_tx: AppEventSender,
}

impl ChatComposer {
    pub fn new(agent: String, app_event_tx: AppEventSender) -> Self {
        Self {
            text: String::new(),
            agent,
            app_event_tx,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the buffer contents, e.g. with a `/use-skill <name>` command
    /// after a skill was chosen. The user can edit before submitting.
    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Enter, _) => {
                self.submit();
                true
            }
            (KeyCode::Backspace, _) => self.text.pop().is_some(),
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                let had_text = !self.text.is_empty();
                self.text.clear();
                had_text
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.text.push(c);
                true
            }
            _ => false,
        }
    }

    pub fn handle_paste(&mut self, pasted: &str) -> bool {
        if pasted.is_empty() {
            return false;
        }
        self.text.push_str(pasted);
        true
    }

    /// Route the buffered line. The buffer is cleared on every submission,
    /// including the `/skills` trigger, before the resulting event is
    /// handled.
    fn submit(&mut self) {
        let line = std::mem::take(&mut self.text);
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return;
        }

        match slash_command_from_line(trimmed) {
            Some((SlashCommand::Skills, "")) => {
                self.app_event_tx.send(AppEvent::ShowSkillsModal {
                    agent: self.agent.clone(),
                });
            }
            Some((SlashCommand::Help, _)) => {
                self.app_event_tx.send(AppEvent::ShowHelp);
            }
            Some((SlashCommand::Quit, _)) => {
                self.app_event_tx.send(AppEvent::Exit);
            }
            // `/use-skill <name>`, `/skills` with stray arguments, and
            // unknown commands all go to the agent verbatim.
            _ => {
                self.app_event_tx
                    .send(AppEvent::SubmitUserMessage(trimmed.to_string()));
            }
        }
    }

    pub fn desired_height(&self) -> u16 {
        1
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled("› ", Style::default().fg(colors::primary())),
            Span::styled(&self.text, Style::default().fg(colors::text_bright())),
            Span::styled("█", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
