mod bottom_pane_view;
mod settings_panel;
mod skills_selection_view;

use crossterm::event::KeyEvent;
use crossterm::event::MouseEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

pub(crate) use bottom_pane_view::BottomPaneView;
pub(crate) use bottom_pane_view::ConditionalUpdate;
pub(crate) use skills_selection_view::SkillsSelectionView;

/// Hosts at most one transient view (e.g. the skills selection view) above
/// the composer. While a view is mounted it captures keyboard and mouse
/// input; once the view reports completion it is dropped.
pub(crate) struct BottomPane {
    active_view: Option<Box<dyn BottomPaneView>>,
}

impl BottomPane {
    pub fn new() -> Self {
        Self { active_view: None }
    }

    pub fn show_view(&mut self, view: Box<dyn BottomPaneView>) {
        self.active_view = Some(view);
    }

    pub fn has_active_view(&self) -> bool {
        self.active_view.is_some()
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> ConditionalUpdate {
        let Some(view) = self.active_view.as_mut() else {
            return ConditionalUpdate::NoRedraw;
        };
        let update = view.handle_key_event(key_event);
        self.prune_completed();
        update
    }

    pub fn handle_mouse_event(&mut self, mouse_event: MouseEvent) -> ConditionalUpdate {
        let Some(view) = self.active_view.as_mut() else {
            return ConditionalUpdate::NoRedraw;
        };
        let update = view.handle_mouse_event(mouse_event);
        self.prune_completed();
        update
    }

    pub fn desired_height(&self, width: u16) -> u16 {
        self.active_view
            .as_ref()
            .map(|view| view.desired_height(width))
            .unwrap_or(0)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if let Some(view) = self.active_view.as_ref() {
            view.render(area, buf);
        }
    }

    /// A resolved view is dropped immediately so a stale view can never
    /// emit another event or swallow further input.
    fn prune_completed(&mut self) {
        if self
            .active_view
            .as_ref()
            .is_some_and(|view| view.is_complete())
        {
            self.active_view = None;
        }
    }
}
