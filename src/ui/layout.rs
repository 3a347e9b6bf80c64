use ratatui::layout::Rect;

use crate::state::Dimensions;

/// Terminal columns per board cell; two columns make a roughly square pixel.
pub const CELL_WIDTH: u16 = 2;
pub const SWATCH_WIDTH: u16 = 4;
pub const BRUSH_LABEL: &str = "Brush ";
pub const RESET_LABEL: &str = "[ Reset ]";

/// What sits under a terminal coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Cell { row: usize, col: usize },
    Swatch(usize),
    Reset,
}

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Screen placement of every interactive element.
///
/// The body holds the board at the top and a one-line toolbar at the bottom
/// (swatches, brush indicator, reset button) with a blank line between. Parts
/// of the board or toolbar that do not fit are clipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasLayout {
    pub header: Rect,
    pub footer: Rect,
    pub board: Rect,
    /// Rows and columns of the board that are on screen.
    pub visible: Dimensions,
    /// One rect per palette entry that fits, in palette order.
    pub swatches: Vec<Rect>,
    pub brush: Rect,
    pub reset: Rect,
}

impl CanvasLayout {
    pub fn compute(area: Rect, dimensions: Dimensions, palette_len: usize) -> Self {
        let (header, body, footer) = layout_regions(area);
        let inner_x = body.x.saturating_add(1);
        let inner_width = body.width.saturating_sub(2);
        let right = inner_x.saturating_add(inner_width);

        let visible_rows = dimensions
            .rows
            .min(body.height.saturating_sub(2) as usize);
        let visible_cols = dimensions.cols.min((inner_width / CELL_WIDTH) as usize);
        let board = Rect {
            x: inner_x,
            y: body.y,
            width: visible_cols as u16 * CELL_WIDTH,
            height: visible_rows as u16,
        };

        let mut swatches = Vec::new();
        let mut brush = Rect::default();
        let mut reset = Rect::default();

        if body.height >= 1 {
            let y = body.y + body.height - 1;
            let mut cursor = inner_x;
            let mut place = |width: u16, gap: u16| -> Option<Rect> {
                let end = cursor.checked_add(width)?;
                if end > right {
                    return None;
                }
                let rect = Rect {
                    x: cursor,
                    y,
                    width,
                    height: 1,
                };
                cursor = end.saturating_add(gap);
                Some(rect)
            };

            for _ in 0..palette_len {
                match place(SWATCH_WIDTH, 1) {
                    Some(rect) => swatches.push(rect),
                    None => break,
                }
            }
            if swatches.len() == palette_len {
                if let Some(rect) = place(BRUSH_LABEL.len() as u16 + SWATCH_WIDTH, 2) {
                    brush = rect;
                    reset = place(RESET_LABEL.len() as u16, 0).unwrap_or_default();
                }
            }
        }

        Self {
            header,
            footer,
            board,
            visible: Dimensions::new(visible_rows, visible_cols),
            swatches,
            brush,
            reset,
        }
    }

    /// Map a terminal coordinate to the element under it.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        if contains(self.board, column, row) {
            return Some(HitTarget::Cell {
                row: (row - self.board.y) as usize,
                col: ((column - self.board.x) / CELL_WIDTH) as usize,
            });
        }
        if let Some(index) = self
            .swatches
            .iter()
            .position(|rect| contains(*rect, column, row))
        {
            return Some(HitTarget::Swatch(index));
        }
        if contains(self.reset, column, row) {
            return Some(HitTarget::Reset);
        }
        None
    }

    /// Screen rect of a board cell, if it is visible.
    pub fn cell_rect(&self, row: usize, col: usize) -> Option<Rect> {
        if !self.visible.contains(row, col) {
            return None;
        }
        Some(Rect {
            x: self.board.x + col as u16 * CELL_WIDTH,
            y: self.board.y + row as u16,
            width: CELL_WIDTH,
            height: 1,
        })
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}
