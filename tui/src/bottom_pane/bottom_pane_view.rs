use crossterm::event::KeyEvent;
use crossterm::event::MouseEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Whether handling an event changed anything worth repainting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ConditionalUpdate {
    NeedsRedraw,
    NoRedraw,
}

/// A transient view hosted by [`super::BottomPane`].
///
/// The pane calls these methods directly; views carry no framework wiring.
/// A view signals resolution by returning `true` from `is_complete`, after
/// which the pane discards it.
pub(crate) trait BottomPaneView {
    fn handle_key_event(&mut self, key_event: KeyEvent) -> ConditionalUpdate;

    fn handle_mouse_event(&mut self, mouse_event: MouseEvent) -> ConditionalUpdate {
        let _ = mouse_event;
        ConditionalUpdate::NoRedraw
    }

    fn is_complete(&self) -> bool;

    fn desired_height(&self, width: u16) -> u16;

    fn render(&self, area: Rect, buf: &mut Buffer);
}
