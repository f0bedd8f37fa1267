use error_chain::bail;

use crate::errors::*;
use crate::units::{Height, Width};

/// Smallest side length that still leaves one lattice cell surrounded by walls.
pub const MIN_SIDE: usize = 3;

/// Validated maze dimensions.
///
/// Both sides are odd and at least `MIN_SIDE`. Even values are bumped up by one so the outer
/// boundary is always a wall row/column.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MazeDimensions {
    width: Width,
    height: Height,
}

impl MazeDimensions {
    pub fn new(width: usize, height: usize) -> Result<MazeDimensions> {
        if width < MIN_SIDE {
            bail!(ErrorKind::InvalidDimension("width", width));
        }
        if height < MIN_SIDE {
            bail!(ErrorKind::InvalidDimension("height", height));
        }

        Ok(MazeDimensions {
            width: Width(round_up_to_odd(width)),
            height: Height(round_up_to_odd(height)),
        })
    }

    /// Parse user supplied text, e.g. command line arguments.
    pub fn parse(width: &str, height: &str) -> Result<MazeDimensions> {
        let w = parse_side("width", width)?;
        let h = parse_side("height", height)?;
        MazeDimensions::new(w, h)
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.width.0 * self.height.0
    }
}

fn round_up_to_odd(side: usize) -> usize {
    if side % 2 == 0 {
        side + 1
    } else {
        side
    }
}

fn parse_side(axis: &'static str, text: &str) -> Result<usize> {
    text.trim()
        .parse::<usize>()
        .map_err(|_| ErrorKind::NonNumericDimension(axis, text.to_owned()).into())
}
