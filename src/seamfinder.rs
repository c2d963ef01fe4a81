use crate::errors::Result;
use crate::seams::Seam;

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for more than one
/// way of finding seams.
pub trait SeamFinder {
    /// Once a SeamFinder has an image (or whatever it needs to make a
    /// rational decision), request a horizontal seam: one row index
    /// per column.
    fn find_horizontal_seam(&self) -> Result<Seam>;

    /// Request a vertical seam: one column index per row.
    fn find_vertical_seam(&self) -> Result<Seam>;
}
