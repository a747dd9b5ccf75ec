use crate::ui::geometry::Size;

/// Rendering context of one grid cell. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridContext {
    /// Size of the cell.
    pub viewport: Size,
    pub row: usize,
    pub column: usize,
}
