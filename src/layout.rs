//! Icon geometry.
//!
//! Every position on the canvas is derived here from a handful of named
//! constants, so the drawing layers never do their own arithmetic. Sizes that
//! the layout halves or divides use integer division first and are converted
//! to `f32` only when they become pixel coordinates.

/// Side of the square canvas in pixels.
pub const CANVAS_SIZE: u32 = 1024;

/// Distance from the top of the canvas to the QR section.
pub const QR_MARGIN: u32 = 150;
/// Side of the QR section.
pub const QR_SIZE: u32 = 300;
/// Cells per side of the QR grid.
pub const QR_GRID: u32 = 9;

/// Vertical gap between the QR section and the anvil body.
pub const ANVIL_GAP: u32 = 80;
/// Width of the whole anvil, body plus horn.
pub const ANVIL_WIDTH: u32 = 450;
/// Share of [`ANVIL_WIDTH`] taken by the body.
pub const BODY_RATIO: f32 = 0.7;
pub const BODY_HEIGHT: u32 = 100;
pub const BODY_RADIUS: f32 = 20.0;

/// Horn vertex heights as fractions of the body height.
pub const HORN_TOP: f32 = 0.2;
pub const HORN_TIP: f32 = 0.5;
pub const HORN_BOTTOM: f32 = 0.8;

pub const LEG_WIDTH: u32 = 50;
pub const LEG_HEIGHT: u32 = 80;
/// Offset of the left leg from the anvil's left edge.
pub const LEFT_LEG_INSET: u32 = 60;
/// Offset of the right leg back from the body's right edge.
pub const RIGHT_LEG_INSET: u32 = 110;

/// Vertical gap between the bottom of the legs and the label.
pub const LABEL_GAP: u32 = 60;
/// Label font size in pixels.
pub const FONT_SIZE: f32 = 72.0;
/// Distance left of the canvas center used when the label cannot be measured.
pub const APPROX_LABEL_OFFSET: u32 = 120;

/// Grid offsets of the finder patterns: top-left, top-right, bottom-left.
///
/// A real QR code has no finder pattern in the bottom-right corner.
pub const FINDER_OFFSETS: [(u32, u32); 3] = [(0, 0), (6, 0), (0, 6)];

/// Decorative data modules as (column, row) grid coordinates.
///
/// The half-cell offsets place them between the finder patterns.
pub const DATA_MODULES: [(f32, f32); 7] = [
    (3.5, 3.5),
    (4.5, 3.5),
    (5.5, 3.5),
    (3.5, 4.5),
    (5.5, 4.5),
    (3.5, 5.5),
    (4.5, 5.5),
];

// ============================================================================
// Primitives
// ============================================================================

/// An axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle from its left, top, right and bottom edges.
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// QR section
// ============================================================================

/// The three nested squares of one finder pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinderPattern {
    /// Filled 3x3-cell square.
    pub outer: Rect,
    /// Background-colored inset, half a cell in from the outer edge.
    pub inset: Rect,
    /// Filled 1x1-cell center.
    pub center: Rect,
}

/// Position and cell size of the decorative QR grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QrLayout {
    pub x: u32,
    pub y: u32,
    /// Side of one grid cell, `QR_SIZE / QR_GRID` rounded down.
    pub cell: u32,
}

impl QrLayout {
    fn new(canvas_size: u32) -> Self {
        Self {
            x: canvas_size.saturating_sub(QR_SIZE) / 2,
            y: QR_MARGIN,
            cell: QR_SIZE / QR_GRID,
        }
    }

    /// Returns the square spanning `span` cells from grid position (col, row).
    pub fn cell_rect(&self, col: f32, row: f32, span: f32) -> Rect {
        let cell = self.cell as f32;
        Rect::from_ltrb(
            self.x as f32 + col * cell,
            self.y as f32 + row * cell,
            self.x as f32 + (col + span) * cell,
            self.y as f32 + (row + span) * cell,
        )
    }

    /// Returns the finder pattern anchored at grid offset (gx, gy).
    pub fn finder(&self, gx: u32, gy: u32) -> FinderPattern {
        let (gx, gy) = (gx as f32, gy as f32);
        FinderPattern {
            outer: self.cell_rect(gx, gy, 3.0),
            inset: self.cell_rect(gx + 0.5, gy + 0.5, 2.0),
            center: self.cell_rect(gx + 1.0, gy + 1.0, 1.0),
        }
    }

    /// Finder patterns at every offset in [`FINDER_OFFSETS`].
    pub fn finders(&self) -> impl Iterator<Item = FinderPattern> + '_ {
        FINDER_OFFSETS.iter().map(|&(gx, gy)| self.finder(gx, gy))
    }

    /// Unit cells for every entry in [`DATA_MODULES`].
    pub fn data_modules(&self) -> impl Iterator<Item = Rect> + '_ {
        DATA_MODULES
            .iter()
            .map(|&(col, row)| self.cell_rect(col, row, 1.0))
    }

    /// Bottom edge of the QR section.
    pub fn bottom(&self) -> u32 {
        self.y + QR_SIZE
    }
}

// ============================================================================
// Anvil
// ============================================================================

/// Body, horn and legs of the anvil silhouette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnvilLayout {
    /// Left edge of the whole anvil.
    pub x: u32,
    /// Top edge of the body.
    pub y: u32,
    pub body: Rect,
    pub body_radius: f32,
    /// Horn triangle: top base vertex, tip, bottom base vertex.
    pub horn: [Point; 3],
    pub left_leg: Rect,
    pub right_leg: Rect,
}

impl AnvilLayout {
    fn new(canvas_size: u32, top: u32) -> Self {
        let x = canvas_size.saturating_sub(ANVIL_WIDTH) / 2;
        let left = x as f32;
        let top_f = top as f32;
        let height = BODY_HEIGHT as f32;

        let body_right = left + ANVIL_WIDTH as f32 * BODY_RATIO;
        let body = Rect::from_ltrb(left, top_f, body_right, top_f + height);

        let horn = [
            Point::new(body_right, top_f + height * HORN_TOP),
            Point::new(left + ANVIL_WIDTH as f32, top_f + height * HORN_TIP),
            Point::new(body_right, top_f + height * HORN_BOTTOM),
        ];

        let leg_y = body.bottom();
        let leg = |leg_x: f32| Rect::new(leg_x, leg_y, LEG_WIDTH as f32, LEG_HEIGHT as f32);

        Self {
            x,
            y: top,
            body,
            body_radius: BODY_RADIUS,
            horn,
            left_leg: leg(left + LEFT_LEG_INSET as f32),
            right_leg: leg(body_right - RIGHT_LEG_INSET as f32),
        }
    }

    /// Bottom edge of the legs, the lowest point of the anvil.
    pub fn bottom(&self) -> f32 {
        self.left_leg.bottom().max(self.right_leg.bottom())
    }
}

// ============================================================================
// IconLayout
// ============================================================================

/// Complete geometry of the icon for a square canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconLayout {
    /// Side of the square canvas.
    pub size: u32,
    pub qr: QrLayout,
    pub anvil: AnvilLayout,
    /// Top of the label line.
    pub label_y: f32,
}

impl IconLayout {
    /// Lays the icon out on a canvas of the given side.
    pub fn new(size: u32) -> Self {
        let qr = QrLayout::new(size);
        let anvil = AnvilLayout::new(size, qr.bottom() + ANVIL_GAP);
        let label_y = anvil.bottom() + LABEL_GAP as f32;
        Self {
            size,
            qr,
            anvil,
            label_y,
        }
    }

    /// The fixed 1024x1024 layout.
    pub fn standard() -> Self {
        Self::new(CANVAS_SIZE)
    }

    /// Left edge that centers a label of the given measured width.
    pub fn centered_x(&self, text_width: f32) -> f32 {
        ((self.size as f32 - text_width) / 2.0).floor()
    }

    /// Left edge used when the label width is unknown.
    pub fn approximate_label_x(&self) -> f32 {
        (self.size / 2) as f32 - APPROX_LABEL_OFFSET as f32
    }
}

impl Default for IconLayout {
    fn default() -> Self {
        Self::standard()
    }
}
