//! Vessel placement and damage tracking.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::PlacementError;
use crate::config::{BOARD_SIZE, MAX_VESSEL_LENGTH, MIN_VESSEL_LENGTH};
use crate::coord::Coordinate;

pub(crate) type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends right from the anchor.
    Horizontal,
    /// Extends down from the anchor.
    Vertical,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Handle to a vessel in its board's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VesselId(pub(crate) usize);

impl VesselId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A placed vessel. Placement is fixed; only the hit count changes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    length: usize,
    orientation: Orientation,
    anchor: Coordinate,
    hit_count: usize,
    mask: BB,
}

impl Vessel {
    /// Build a vessel whose footprint starts at `anchor`.
    ///
    /// Fails with `InvalidLength` outside 2..=5 and `OutOfBounds` when the
    /// footprint runs off the grid.
    pub fn new(
        length: usize,
        orientation: Orientation,
        anchor: Coordinate,
    ) -> Result<Self, PlacementError> {
        if !(MIN_VESSEL_LENGTH..=MAX_VESSEL_LENGTH).contains(&length) {
            return Err(PlacementError::InvalidLength { length });
        }
        let n = BOARD_SIZE as usize;
        let end = match orientation {
            Orientation::Horizontal => anchor.col() + length,
            Orientation::Vertical => anchor.row() + length,
        };
        if end > n {
            return Err(PlacementError::OutOfBounds);
        }
        let mask = BB::from_cells(footprint(length, orientation, anchor))?;
        Ok(Vessel {
            length,
            orientation,
            anchor,
            hit_count: 0,
            mask,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Top (vertical) or left-most (horizontal) cell.
    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    pub fn is_sunk(&self) -> bool {
        self.hit_count >= self.length
    }

    /// Occupancy mask of the vessel.
    pub fn mask(&self) -> BB {
        self.mask
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        self.mask.contains(at)
    }

    /// Cells covered by the vessel, starting at the anchor.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        footprint(self.length, self.orientation, self.anchor)
            .filter_map(|(r, c)| Coordinate::new(r, c))
    }

    /// Record one hit. The board guarantees each cell is hit at most once.
    pub(crate) fn register_hit(&mut self) {
        self.hit_count += 1;
    }
}

fn footprint(
    length: usize,
    orientation: Orientation,
    anchor: Coordinate,
) -> impl Iterator<Item = (usize, usize)> {
    (0..length).map(move |i| match orientation {
        Orientation::Horizontal => (anchor.row(), anchor.col() + i),
        Orientation::Vertical => (anchor.row() + i, anchor.col()),
    })
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ length: {}, anchor: {}, orientation: {:?}, hits: {} }}",
            self.length, self.anchor, self.orientation, self.hit_count,
        )
    }
}
