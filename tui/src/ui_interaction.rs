use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;
use ratatui::layout::Rect;

use crate::bottom_pane::ConditionalUpdate;

pub(crate) fn contains_point(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x
        && x < area.x.saturating_add(area.width)
        && y >= area.y
        && y < area.y.saturating_add(area.height)
}

pub(crate) fn redraw_if(changed: bool) -> ConditionalUpdate {
    if changed {
        ConditionalUpdate::NeedsRedraw
    } else {
        ConditionalUpdate::NoRedraw
    }
}

/// High-level outcome for mouse interaction on selectable vertical lists.
///
/// Views implement mouse support with minimal boilerplate:
/// 1) provide the `selected` index and item count,
/// 2) provide a row hit-test closure,
/// 3) react to `Activated` for click-to-confirm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SelectableListMouseResult {
    Ignored,
    SelectionChanged,
    Activated,
}

impl SelectableListMouseResult {
    pub const fn handled(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Route common mouse interactions for selectable lists.
///
/// Behavior:
/// - left-click on a row: select it and mark activated
/// - wheel: move selection up/down with wrap
/// - move: ignored here; hover feedback stays with the view
pub(crate) fn route_selectable_list_mouse(
    mouse_event: MouseEvent,
    selected: &mut usize,
    item_count: usize,
    row_at_position: impl Fn(u16, u16) -> Option<usize>,
) -> SelectableListMouseResult {
    if item_count == 0 {
        *selected = 0;
        return SelectableListMouseResult::Ignored;
    }
    *selected = (*selected).min(item_count - 1);

    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match row_at_position(mouse_event.column, mouse_event.row)
                .filter(|idx| *idx < item_count)
            {
                Some(idx) => {
                    *selected = idx;
                    SelectableListMouseResult::Activated
                }
                None => SelectableListMouseResult::Ignored,
            }
        }
        MouseEventKind::ScrollUp => {
            *selected = wrap_prev(*selected, item_count);
            SelectableListMouseResult::SelectionChanged
        }
        MouseEventKind::ScrollDown => {
            *selected = wrap_next(*selected, item_count);
            SelectableListMouseResult::SelectionChanged
        }
        _ => SelectableListMouseResult::Ignored,
    }
}

fn wrap_prev(idx: usize, count: usize) -> usize {
    if idx == 0 { count - 1 } else { idx - 1 }
}

fn wrap_next(idx: usize, count: usize) -> usize {
    if idx + 1 >= count { 0 } else { idx + 1 }
}
