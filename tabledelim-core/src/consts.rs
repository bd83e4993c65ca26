/// Inset applied to the far edge of every band except the last one.
///
/// Two neighbouring bands would otherwise both claim the coordinate where the
/// next delimiter starts, so the earlier band stops one unit short of it.
pub const BAND_INSET: f32 = 1.0;

/// Vertical distance within which elements are treated as the same text line
/// when a region's text is extracted.
///
/// Measured between the `top` of an element and the `top` of the first
/// element of the line currently being built. The value matches the usual
/// y-tolerance of PDF word extractors (3 points).
pub const LINE_Y_TOLERANCE: f32 = 3.0;

/// Maximum thickness of a path object that is still classified as a line.
///
/// Path objects whose width or height is below this value (in points) are
/// snapshotted as `line` elements, everything else becomes a `rect`.
pub const LINE_THICKNESS: f32 = 2.0;

/// Environment variable holding the path of the pdfium dynamic library.
pub const PDFIUM_LIB_PATH_ENV_NAME: &str = "PDFIUM_DYNAMIC_LIB_PATH";
