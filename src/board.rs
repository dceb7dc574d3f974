//! Board state: vessel arena, occupancy index and shot history.

use alloc::vec::Vec;
use core::fmt;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::common::{CellView, PlacementError, ShotResult, ViewMode};
use crate::config::{BOARD_SIZE, FLEET, FLEET_SIZE};
use crate::coord::Coordinate;
use crate::ship::{Orientation, Vessel, VesselId, BB};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// One player's grid. Owns every vessel placed on it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    vessels: Vec<Vessel>,
    occupancy: [[Option<VesselId>; GRID_SIZE]; GRID_SIZE],
    ship_map: BB,
    shots: BB,
}

impl Board {
    /// Create an empty board (no vessels, no shots).
    pub fn new() -> Self {
        Board {
            vessels: Vec::with_capacity(FLEET_SIZE),
            occupancy: [[None; GRID_SIZE]; GRID_SIZE],
            ship_map: BB::new(),
            shots: BB::new(),
        }
    }

    /// Validate a placement without touching the board.
    fn check_placement(
        &self,
        length: usize,
        orientation: Orientation,
        anchor: Coordinate,
    ) -> Result<Vessel, PlacementError> {
        let vessel = Vessel::new(length, orientation, anchor)?;
        if !(self.ship_map & vessel.mask()).is_empty() {
            return Err(PlacementError::Occupied);
        }
        Ok(vessel)
    }

    /// Whether a vessel of `length` fits at `anchor` with `orientation`.
    /// Fleet capacity is not considered.
    pub fn can_place(&self, length: usize, orientation: Orientation, anchor: Coordinate) -> bool {
        self.check_placement(length, orientation, anchor).is_ok()
    }

    /// Place a single vessel and return its id.
    pub fn place(
        &mut self,
        length: usize,
        orientation: Orientation,
        anchor: Coordinate,
    ) -> Result<VesselId, PlacementError> {
        if self.vessels.len() >= FLEET_SIZE {
            return Err(PlacementError::FleetFull);
        }
        let vessel = self.check_placement(length, orientation, anchor)?;
        let id = VesselId(self.vessels.len());
        for cell in vessel.cells() {
            self.occupancy[cell.row()][cell.col()] = Some(id);
        }
        self.ship_map |= vessel.mask();
        self.vessels.push(vessel);
        debug!("placed {:?} as vessel #{}", vessel, id.index());
        Ok(id)
    }

    /// Place the whole fleet at random, largest vessels first.
    ///
    /// Cells are visited in a shuffled order; each candidate cell gets a coin
    /// flip for its first orientation and falls back to the other one. If a
    /// length fits nowhere the vessels placed so far stay on the board.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(), PlacementError> {
        if !self.vessels.is_empty() {
            return Err(PlacementError::AlreadyPopulated);
        }
        let mut cells: Vec<Coordinate> = Coordinate::all().collect();
        cells.shuffle(rng);

        'fleet: for &length in FLEET.iter() {
            for &cell in cells.iter() {
                let first = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                for orientation in [first, first.flipped()] {
                    if self.can_place(length, orientation, cell) {
                        self.place(length, orientation, cell)?;
                        continue 'fleet;
                    }
                }
            }
            return Err(PlacementError::PlacementExhausted { length });
        }
        Ok(())
    }

    /// Fire at a cell. Repeated shots are reported as `AlreadyShot` and leave
    /// the board unchanged.
    pub fn fire(&mut self, at: Coordinate) -> ShotResult {
        if self.shots.contains(at) {
            return ShotResult::AlreadyShot;
        }
        self.shots.insert(at);
        let result = match self.occupancy[at.row()][at.col()] {
            None => ShotResult::Miss,
            Some(id) => {
                let vessel = &mut self.vessels[id.index()];
                vessel.register_hit();
                if vessel.is_sunk() {
                    ShotResult::HitAndSunk(vessel.length())
                } else {
                    ShotResult::Hit
                }
            }
        };
        debug!("shot at {} -> {:?}", at, result);
        result
    }

    pub fn already_fired(&self, at: Coordinate) -> bool {
        self.shots.contains(at)
    }

    /// Returns `true` when every placed vessel is sunk. An empty board is
    /// vacuously all sunk.
    pub fn all_sunk(&self) -> bool {
        self.vessels.iter().all(Vessel::is_sunk)
    }

    /// Number of vessels placed so far.
    pub fn vessel_count(&self) -> usize {
        self.vessels.len()
    }

    pub fn fleet_complete(&self) -> bool {
        self.vessels.len() == FLEET_SIZE
    }

    /// Vessels still afloat.
    pub fn remaining_vessels(&self) -> usize {
        self.vessels.iter().filter(|v| !v.is_sunk()).count()
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn vessel(&self, id: VesselId) -> Option<&Vessel> {
        self.vessels.get(id.index())
    }

    /// The vessel covering `at`, if any.
    pub fn vessel_at(&self, at: Coordinate) -> Option<&Vessel> {
        self.occupancy[at.row()][at.col()].and_then(|id| self.vessel(id))
    }

    pub fn shots_fired(&self) -> usize {
        self.shots.count_ones()
    }

    /// Every cell fired upon, in row-major order.
    pub fn fired_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.shots
            .iter_set_bits()
            .filter_map(|(r, c)| Coordinate::new(r, c))
    }

    /// Occupancy mask of all vessels.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    /// What `at` shows in the given view.
    pub fn cell_view(&self, at: Coordinate, mode: ViewMode) -> CellView {
        let fired = self.shots.contains(at);
        let vessel = self.vessel_at(at);
        match (mode, fired, vessel) {
            (ViewMode::Ships, _, Some(v)) => CellView::ShipOfLength(v.length()),
            (ViewMode::Ships, _, None) => CellView::Empty,
            (ViewMode::Shots, false, _) => CellView::Empty,
            (ViewMode::Combined, false, Some(v)) => CellView::ShipOfLength(v.length()),
            (ViewMode::Combined, false, None) => CellView::Empty,
            (_, true, None) => CellView::Miss,
            (ViewMode::Combined, true, Some(_)) => CellView::HitUnsunk,
            (_, true, Some(v)) if v.is_sunk() => CellView::HitAndRevealedLength(v.length()),
            (_, true, Some(_)) => CellView::HitUnsunk,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  shots: {:?},\n  vessels: {:?}\n}}",
            self.ship_map, self.shots, self.vessels
        )
    }
}
