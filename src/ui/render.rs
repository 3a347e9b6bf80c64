use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{CanvasLayout, BRUSH_LABEL, RESET_LABEL};
use crate::ui::render_loop::ViewSink;
use crate::ui::theme::{paint, BUTTON_TEXT, EMPTY_CELL, GLOBAL_BORDER, HEADER_TEXT};
use crate::ui::view::ViewTree;
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Clear, Widget};
use ratatui::{Frame, Terminal};

/// Draws a committed tree into a frame and returns the layout it used.
pub fn draw(frame: &mut Frame<'_>, tree: &ViewTree) -> CanvasLayout {
    let layout = CanvasLayout::compute(frame.area(), tree.dimensions, tree.picker.swatches.len());

    frame.render_widget(
        Header::new(tree.heading, tree.dimensions).widget(),
        layout.header,
    );
    frame.render_widget(Clear, layout.board);
    frame.render_widget(
        CanvasWidget {
            tree,
            layout: &layout,
        },
        frame.area(),
    );
    frame.render_widget(Footer::new().widget(layout.footer), layout.footer);

    layout
}

/// Board cells plus the toolbar line.
pub struct CanvasWidget<'a> {
    tree: &'a ViewTree,
    layout: &'a CanvasLayout,
}

impl Widget for CanvasWidget<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        for row in &self.tree.rows {
            for cell in &row.cells {
                let Some(rect) = self.layout.cell_rect(cell.row, cell.col) else {
                    continue;
                };
                let bg = cell.color.map_or(EMPTY_CELL, paint);
                fill(buf, rect, Style::default().bg(bg));
            }
        }

        for (swatch, rect) in self.tree.picker.swatches.iter().zip(&self.layout.swatches) {
            fill(buf, *rect, Style::default().bg(paint(swatch.color)));
        }

        let brush = self.layout.brush;
        if brush.width > 0 {
            let label_style = Style::default().fg(HEADER_TEXT);
            buf.set_string(brush.x, brush.y, BRUSH_LABEL, label_style);
            let swatch = Rect {
                x: brush.x + BRUSH_LABEL.len() as u16,
                width: brush.width - BRUSH_LABEL.len() as u16,
                ..brush
            };
            fill(buf, swatch, Style::default().bg(paint(self.tree.brush)));
        }

        let reset = self.layout.reset;
        if reset.width > 0 {
            let style = Style::default()
                .fg(BUTTON_TEXT)
                .bg(GLOBAL_BORDER)
                .add_modifier(Modifier::BOLD);
            buf.set_string(reset.x, reset.y, RESET_LABEL, style);
        }
    }
}

fn fill(buf: &mut Buffer, rect: Rect, style: Style) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(" ").set_style(style);
            }
        }
    }
}

/// Terminal-backed mount point for view trees.
///
/// Keeps the last committed tree so the screen can be redrawn after a resize
/// without going through the render loop.
pub struct TerminalSink<B: Backend> {
    terminal: Terminal<B>,
    last: Option<ViewTree>,
    layout: Option<CanvasLayout>,
}

impl<B: Backend> TerminalSink<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            last: None,
            layout: None,
        }
    }

    pub fn layout(&self) -> Option<&CanvasLayout> {
        self.layout.as_ref()
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn redraw(&mut self) -> Result<(), B::Error> {
        let Some(tree) = self.last.take() else {
            return Ok(());
        };
        let result = self.draw(&tree);
        self.last = Some(tree);
        result
    }

    fn draw(&mut self, tree: &ViewTree) -> Result<(), B::Error> {
        let mut layout = None;
        self.terminal.draw(|frame| layout = Some(draw(frame, tree)))?;
        self.layout = layout;
        Ok(())
    }
}

impl<B: Backend> ViewSink for TerminalSink<B> {
    type Error = B::Error;

    fn commit(&mut self, tree: &ViewTree) -> Result<(), Self::Error> {
        self.draw(tree)?;
        self.last = Some(tree.clone());
        Ok(())
    }
}
