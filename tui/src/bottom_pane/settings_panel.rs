use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Widget;

use crate::colors;

/// Frame styling for bottom-pane panels.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PanelFrameStyle {
    border_style: Style,
}

impl PanelFrameStyle {
    pub fn bottom_pane() -> Self {
        Self {
            border_style: Style::default().fg(colors::primary()),
        }
    }
}

/// Render a titled, bordered panel and hand the inner area to `body`.
pub(crate) fn render_panel(
    area: Rect,
    buf: &mut Buffer,
    title: &str,
    style: PanelFrameStyle,
    body: impl FnOnce(Rect, &mut Buffer),
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style.border_style)
        .title(format!(" {title} "));
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.width == 0 || inner.height == 0 {
        return;
    }
    body(inner, buf);
}
