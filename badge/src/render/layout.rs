//! Grid placement for trophy cards.
//!
//! Cards fill rows left to right: `row = i / columns`, `col = i % columns`.
//! The strip above row 0 (`origin.y` pixels tall) is the header band; the
//! canvas mirrors the left margin on the right and at the bottom.

use serde::Serialize;

use crate::core::config::RenderConfig;

/// Horizontal padding subtracted from the card width for the progress track.
pub const INNER_MARGIN: u32 = 24;

/// Top-left corner of the first card.
pub const DEFAULT_ORIGIN: Point = Point { x: 40, y: 110 };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardGeometry {
    pub card_width: u32,
    pub card_height: u32,
    pub col_gap: u32,
    pub row_gap: u32,
}

impl CardGeometry {
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            card_width: config.card_width,
            card_height: config.card_height,
            col_gap: config.col_gap,
            row_gap: config.row_gap,
        }
    }

}

/// Pixel size of the whole image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

/// Card positions by trophy index, plus the canvas that contains them.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutGrid {
    positions: Vec<Point>,
    canvas: Canvas,
    geometry: CardGeometry,
}

impl LayoutGrid {
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    pub fn position(&self, index: usize) -> Option<Point> {
        self.positions.get(index).copied()
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn geometry(&self) -> CardGeometry {
        self.geometry
    }
}

/// Top-left corner of card `index`. A `columns` of 0 is treated as 1.
/// Coordinates saturate at `u32::MAX`; [`checked_canvas_bounds`] tells whether
/// a grid fits at all.
pub fn position(index: usize, columns: u32, geometry: CardGeometry, origin: Point) -> Point {
    let columns = columns.max(1) as usize;
    let row = u32::try_from(index / columns).unwrap_or(u32::MAX);
    let col = u32::try_from(index % columns).unwrap_or(u32::MAX);
    let pitch_x = geometry.card_width.saturating_add(geometry.col_gap);
    let pitch_y = geometry.card_height.saturating_add(geometry.row_gap);
    Point {
        x: origin.x.saturating_add(col.saturating_mul(pitch_x)),
        y: origin.y.saturating_add(row.saturating_mul(pitch_y)),
    }
}

pub fn layout(count: usize, columns: u32, geometry: CardGeometry, origin: Point) -> LayoutGrid {
    let positions = (0..count)
        .map(|index| position(index, columns, geometry, origin))
        .collect();
    LayoutGrid {
        positions,
        canvas: canvas_bounds(count, columns, geometry, origin),
        geometry,
    }
}

/// Smallest canvas holding `count` cards below the header band, with the left
/// margin repeated on the right and bottom. Saturates when the grid does not
/// fit in `u32`.
pub fn canvas_bounds(count: usize, columns: u32, geometry: CardGeometry, origin: Point) -> Canvas {
    checked_canvas_bounds(count, columns, geometry, origin).unwrap_or(Canvas {
        width: u32::MAX,
        height: u32::MAX,
    })
}

/// Like [`canvas_bounds`], but `None` when any coordinate overflows `u32`.
pub fn checked_canvas_bounds(
    count: usize,
    columns: u32,
    geometry: CardGeometry,
    origin: Point,
) -> Option<Canvas> {
    if count == 0 {
        return Some(Canvas {
            width: origin.x.checked_mul(2)?,
            height: origin.y,
        });
    }

    let columns = columns.max(1) as usize;
    let used_cols = u32::try_from(count.min(columns)).ok()?;
    let rows = u32::try_from(count.div_ceil(columns)).ok()?;

    let content_w = span(used_cols, geometry.card_width, geometry.col_gap)?;
    let content_h = span(rows, geometry.card_height, geometry.row_gap)?;

    Some(Canvas {
        width: origin.x.checked_add(content_w)?.checked_add(origin.x)?,
        height: origin.y.checked_add(content_h)?.checked_add(origin.x)?,
    })
}

// `n` cards of `size` separated by `gap`.
fn span(n: u32, size: u32, gap: u32) -> Option<u32> {
    n.checked_mul(size)?.checked_add((n - 1).checked_mul(gap)?)
}

/// Fill fraction for a progress bar: `min(1, raw / scale)`, never negative.
/// Non-finite inputs and non-positive scales yield 0.
pub fn progress_ratio(raw_metric: f64, scale: f64) -> f64 {
    if !raw_metric.is_finite() || !scale.is_finite() || scale <= 0.0 {
        return 0.0;
    }
    (raw_metric / scale).clamp(0.0, 1.0)
}

pub fn bar_width(ratio: f64, card_width: u32) -> f64 {
    let track = card_width.saturating_sub(INNER_MARGIN) as f64;
    ratio.clamp(0.0, 1.0) * track
}
