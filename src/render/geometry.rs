//! Fixed page canvas and margins, in PDF units (1/72 inch).

/// Page width (US Letter).
pub const PAGE_WIDTH: f32 = 612.0;

/// Page height (US Letter).
pub const PAGE_HEIGHT: f32 = 792.0;

/// Left margin; no line starts left of it.
pub const LEFT_MARGIN: f32 = 72.0;

/// Right margin used for right-aligned text.
pub const RIGHT_MARGIN: f32 = 72.0;

/// Baseline of the first top-flowing line.
pub const TOP_BASELINE: f32 = 750.0;

/// Baseline of the bottom-most anchored line.
pub const BOTTOM_BASELINE: f32 = 72.0;
