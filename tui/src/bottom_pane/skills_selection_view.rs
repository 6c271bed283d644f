use std::cell::RefCell;
use std::path::Path;

use agentchat_skills::SkillMetadata;
use agentchat_skills::load_catalog;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;
use ratatui::buffer::Buffer;
use ratatui::layout::Alignment;
use ratatui::layout::Rect;
use ratatui::prelude::Widget;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use tracing::warn;

use super::bottom_pane_view::{BottomPaneView, ConditionalUpdate};
use super::settings_panel::{PanelFrameStyle, render_panel};
use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::colors;
use crate::components::SelectionState;
use crate::text_formatting::truncate_to_display_width_with_suffix;
use crate::ui_interaction::{
    SelectableListMouseResult, contains_point, redraw_if, route_selectable_list_mouse,
};

/// Rows shown at once before the list starts scrolling.
const MAX_VISIBLE_ROWS: usize = 8;
/// The shipped layout is a vertical list; [`SelectionState`] keeps the row
/// width as a parameter so a grid stays a rendering-only change.
const ITEMS_PER_ROW: usize = 1;

/// Transient skills browser mounted in the bottom pane.
///
/// Loads the combined user/project catalog once at construction, owns the
/// selection state while mounted, and resolves to exactly one
/// `SkillsSelected` or `SkillsCancelled` event.
pub(crate) struct SkillsSelectionView {
    agent: String,
    skills: Vec<SkillMetadata>,
    state: SelectionState,
    hovered_idx: Option<usize>,
    app_event_tx: AppEventSender,
    is_complete: bool,
    /// Cached row rects from the last render for mouse hit testing, keyed by
    /// absolute item index.
    item_rects: RefCell<Vec<(usize, Rect)>>,
}

impl SkillsSelectionView {
    pub fn new(
        agent: &str,
        user_skills_dir: &Path,
        project_skills_dir: Option<&Path>,
        app_event_tx: AppEventSender,
    ) -> Self {
        let outcome = load_catalog(user_skills_dir, project_skills_dir);
        for err in &outcome.errors {
            warn!("invalid skill {}: {}", err.path.display(), err.message);
        }

        let mut state = SelectionState::new();
        state.load(outcome.skills.len());

        Self {
            agent: agent.to_string(),
            skills: outcome.skills,
            state,
            hovered_idx: None,
            app_event_tx,
            is_complete: false,
            item_rects: RefCell::new(Vec::new()),
        }
    }

    fn visible_rows(&self) -> usize {
        MAX_VISIBLE_ROWS.min(self.skills.len())
    }

    fn confirm_selection(&mut self) {
        if self.is_complete {
            return;
        }
        let Some(idx) = self.state.selected_idx else {
            return;
        };
        let Some(skill) = self.skills.get(idx) else {
            return;
        };
        self.app_event_tx.send(AppEvent::SkillsSelected {
            name: skill.name.clone(),
            description: skill.description.clone(),
        });
        self.is_complete = true;
    }

    fn cancel(&mut self) {
        if self.is_complete {
            return;
        }
        self.app_event_tx.send(AppEvent::SkillsCancelled);
        self.is_complete = true;
    }

    fn set_hovered_idx(&mut self, hovered: Option<usize>) -> bool {
        if self.hovered_idx == hovered {
            return false;
        }
        self.hovered_idx = hovered;
        true
    }

    fn hit_test(&self, x: u16, y: u16) -> Option<usize> {
        self.item_rects
            .borrow()
            .iter()
            .find(|(_, rect)| contains_point(*rect, x, y))
            .map(|(idx, _)| *idx)
    }

    fn handle_key_event_direct(&mut self, key_event: KeyEvent) -> bool {
        let len = self.skills.len();
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Esc, _) | (KeyCode::Char('q'), KeyModifiers::NONE) => {
                self.cancel();
                true
            }
            (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
                self.state.move_up_wrap(len, ITEMS_PER_ROW);
                self.state.ensure_visible(len, self.visible_rows());
                self.hovered_idx = None;
                true
            }
            (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
                self.state.move_down_wrap(len, ITEMS_PER_ROW);
                self.state.ensure_visible(len, self.visible_rows());
                self.hovered_idx = None;
                true
            }
            (KeyCode::Left, _) => {
                self.state.move_left_wrap(len, ITEMS_PER_ROW);
                self.state.ensure_visible(len, self.visible_rows());
                self.hovered_idx = None;
                true
            }
            (KeyCode::Right, _) => {
                self.state.move_right_wrap(len, ITEMS_PER_ROW);
                self.state.ensure_visible(len, self.visible_rows());
                self.hovered_idx = None;
                true
            }
            (KeyCode::Enter, _) => {
                self.confirm_selection();
                true
            }
            _ => false,
        }
    }

    fn handle_mouse_event_direct(&mut self, mouse_event: MouseEvent) -> bool {
        let len = self.skills.len();
        let mut selected = self.state.selected_idx.unwrap_or(0);
        let result = route_selectable_list_mouse(mouse_event, &mut selected, len, |x, y| {
            self.hit_test(x, y)
        });

        let mut handled = false;
        if len > 0 && self.state.selected_idx != Some(selected) {
            self.state.select(selected, len);
            self.state.ensure_visible(len, self.visible_rows());
            handled = true;
        }

        if matches!(result, SelectableListMouseResult::Activated) {
            self.confirm_selection();
            handled = true;
        }

        if matches!(mouse_event.kind, MouseEventKind::Moved) {
            handled |= self.set_hovered_idx(self.hit_test(mouse_event.column, mouse_event.row));
        }

        handled || result.handled()
    }

    fn render_skill_rows(&self, area: Rect, buf: &mut Buffer) {
        let mut item_rects = self.item_rects.borrow_mut();
        item_rects.clear();

        let len = self.skills.len();
        let window = self.visible_rows();
        let start = self.state.scroll_top.min(len.saturating_sub(window));
        let mut lines = Vec::new();

        for (row, (idx, skill)) in self
            .skills
            .iter()
            .enumerate()
            .skip(start)
            .take(window.min(area.height as usize))
            .enumerate()
        {
            let is_selected = self.state.selected_idx == Some(idx);
            let is_hovered = self.hovered_idx == Some(idx);
            let prefix = if is_selected { "▶ " } else { "  " };

            let name_style = if is_selected || is_hovered {
                Style::default()
                    .bg(colors::selection())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            let scope_style = match skill.scope {
                agentchat_skills::SkillScope::User => Style::default().fg(colors::primary()),
                agentchat_skills::SkillScope::Project => Style::default().fg(colors::success()),
            };

            item_rects.push((
                idx,
                Rect {
                    x: area.x,
                    y: area.y + row as u16,
                    width: area.width,
                    height: 1,
                },
            ));

            let head_width = 2 + skill.name.len() + 1 + skill.scope.label().len() + 1;
            let desc_width = (area.width as usize).saturating_sub(head_width);
            let description =
                truncate_to_display_width_with_suffix(&skill.description, desc_width, "…");

            lines.push(Line::from(vec![
                Span::styled(prefix, name_style),
                Span::styled(skill.name.clone(), name_style),
                Span::raw(" "),
                Span::styled(skill.scope.label(), scope_style),
                Span::raw(" "),
                Span::styled(description, Style::default().fg(colors::text_dim())),
            ]));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .render(area, buf);
    }

    fn render_body(&self, area: Rect, buf: &mut Buffer) {
        let mut y = area.y;
        let agent_line = Line::from(Span::styled(
            format!("Agent: {}", self.agent),
            Style::default().fg(colors::text_dim()),
        ));
        Paragraph::new(vec![agent_line]).render(Rect { height: 1, ..area }, buf);
        y += 2;

        let body = Rect {
            x: area.x,
            y,
            width: area.width,
            height: area.height.saturating_sub(y - area.y).saturating_sub(1),
        };

        if self.skills.is_empty() {
            self.item_rects.borrow_mut().clear();
            Paragraph::new(Line::from(Span::styled(
                "No skills available",
                Style::default()
                    .fg(colors::text_dim())
                    .add_modifier(Modifier::ITALIC),
            )))
            .alignment(Alignment::Center)
            .render(body, buf);
        } else {
            self.render_skill_rows(body, buf);
        }

        let footer = Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(1),
            width: area.width,
            height: 1,
        };
        Paragraph::new(Line::from(Span::styled(
            "↑↓ Navigate | Enter Select | Esc Cancel | Click to select",
            Style::default().fg(colors::text_dim()),
        )))
        .alignment(Alignment::Center)
        .render(footer, buf);
    }
}

impl BottomPaneView for SkillsSelectionView {
    fn handle_key_event(&mut self, key_event: KeyEvent) -> ConditionalUpdate {
        redraw_if(self.handle_key_event_direct(key_event))
    }

    fn handle_mouse_event(&mut self, mouse_event: MouseEvent) -> ConditionalUpdate {
        redraw_if(self.handle_mouse_event_direct(mouse_event))
    }

    fn is_complete(&self) -> bool {
        self.is_complete
    }

    fn desired_height(&self, _width: u16) -> u16 {
        // Borders + agent line + spacer + rows (or empty-state line) + footer.
        let rows = self.visible_rows().max(1);
        (rows + 5) as u16
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        render_panel(
            area,
            buf,
            "Available Skills",
            PanelFrameStyle::bottom_pane(),
            |content_area, buf| self.render_body(content_area, buf),
        );
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crossterm::event::KeyModifiers;
    use crossterm::event::MouseButton;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use tokio::sync::mpsc::UnboundedReceiver;
    use tokio::sync::mpsc::unbounded_channel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn write_skill(root: &Path, name: &str, description: &str) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("SKILL.md"),
            format!("---\nname: {name}\ndescription: {description}\n---\n"),
        )
        .unwrap();
    }

    fn view_with_skills(
        skills: &[(&str, &str)],
    ) -> (SkillsSelectionView, UnboundedReceiver<AppEvent>, TempDir) {
        let user = TempDir::new().unwrap();
        for (name, description) in skills {
            write_skill(user.path(), name, description);
        }
        let (tx, rx) = unbounded_channel();
        let view = SkillsSelectionView::new(
            "test-agent",
            user.path(),
            None,
            AppEventSender::new(tx),
        );
        (view, rx, user)
    }

    fn empty_view() -> (SkillsSelectionView, UnboundedReceiver<AppEvent>) {
        let (tx, rx) = unbounded_channel();
        let view = SkillsSelectionView::new(
            "test-agent",
            &PathBuf::from("/no/such/skills/dir"),
            None,
            AppEventSender::new(tx),
        );
        (view, rx)
    }

    #[test]
    fn select_emits_selected_event_with_skill_name() {
        let (mut view, mut rx, _guard) = view_with_skills(&[("x", "d")]);

        view.handle_key_event(key(KeyCode::Enter));

        assert_eq!(
            rx.try_recv().ok(),
            Some(AppEvent::SkillsSelected {
                name: "x".to_string(),
                description: "d".to_string(),
            }),
        );
        assert!(view.is_complete());
    }

    #[test]
    fn resolution_happens_at_most_once() {
        let (mut view, mut rx, _guard) = view_with_skills(&[("x", "d")]);

        view.handle_key_event(key(KeyCode::Enter));
        view.handle_key_event(key(KeyCode::Enter));
        view.handle_key_event(key(KeyCode::Esc));

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn empty_catalog_is_inert_except_cancel() {
        let (mut view, mut rx) = empty_view();

        view.handle_key_event(key(KeyCode::Enter));
        view.handle_key_event(key(KeyCode::Down));
        view.handle_key_event(key(KeyCode::Up));
        view.handle_key_event(key(KeyCode::Left));
        view.handle_key_event(key(KeyCode::Right));

        assert_eq!(view.state.selected_idx, None);
        assert!(rx.try_recv().is_err());
        assert!(!view.is_complete());

        view.handle_key_event(key(KeyCode::Esc));
        assert_eq!(rx.try_recv().ok(), Some(AppEvent::SkillsCancelled));
        assert!(view.is_complete());
    }

    #[test]
    fn cancel_on_fresh_view_emits_exactly_one_cancelled() {
        let (mut view, mut rx, _guard) = view_with_skills(&[("x", "d")]);

        view.handle_key_event(key(KeyCode::Esc));
        view.handle_key_event(key(KeyCode::Esc));

        assert_eq!(rx.try_recv().ok(), Some(AppEvent::SkillsCancelled));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn navigation_moves_the_highlight_with_wrap() {
        let (mut view, _rx, _guard) = view_with_skills(&[("a", "1"), ("b", "2"), ("c", "3")]);

        assert_eq!(view.state.selected_idx, Some(0));
        view.handle_key_event(key(KeyCode::Down));
        assert_eq!(view.state.selected_idx, Some(1));
        view.handle_key_event(key(KeyCode::Up));
        view.handle_key_event(key(KeyCode::Up));
        assert_eq!(view.state.selected_idx, Some(2));
        view.handle_key_event(key(KeyCode::Right));
        assert_eq!(view.state.selected_idx, Some(0));
        view.handle_key_event(key(KeyCode::Left));
        assert_eq!(view.state.selected_idx, Some(2));
    }

    #[test]
    fn click_on_rendered_row_selects_and_confirms() {
        let (mut view, mut rx, _guard) = view_with_skills(&[("a", "1"), ("b", "2")]);

        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);

        let (idx, rect) = view.item_rects.borrow()[1];
        assert_eq!(idx, 1);
        view.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x + 1,
            row: rect.y,
            modifiers: KeyModifiers::NONE,
        });

        assert_eq!(
            rx.try_recv().ok(),
            Some(AppEvent::SkillsSelected {
                name: "b".to_string(),
                description: "2".to_string(),
            }),
        );
    }

    #[test]
    fn render_marks_exactly_one_row_current() {
        let (mut view, _rx, _guard) = view_with_skills(&[("a", "1"), ("b", "2"), ("c", "3")]);
        view.handle_key_event(key(KeyCode::Down));

        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);

        let mut marker_rows = 0;
        for y in 0..area.height {
            let mut row = String::new();
            for x in 0..area.width {
                row.push_str(buf[(x, y)].symbol());
            }
            if row.contains('▶') {
                marker_rows += 1;
                assert!(row.contains('b'));
            }
        }
        assert_eq!(marker_rows, 1);
    }
}
