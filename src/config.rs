//! Fixed game parameters.

pub const BOARD_SIZE: u8 = 10;
pub const MIN_VESSEL_LENGTH: usize = 2;
pub const MAX_VESSEL_LENGTH: usize = 5;

/// Number of vessels in a complete fleet.
pub const FLEET_SIZE: usize = 10;

/// Fleet lengths, largest first. Random placement follows this order since
/// long vessels are the hardest to fit on a crowded board.
pub const FLEET: [usize; FLEET_SIZE] = [5, 4, 4, 3, 3, 3, 2, 2, 2, 2];

/// Total number of vessel segments in a complete fleet.
pub const TOTAL_FLEET_CELLS: usize = 5 + 4 + 4 + 3 + 3 + 3 + 2 + 2 + 2 + 2;

/// Column labels, indexed by column.
pub const COLUMN_LABELS: [char; BOARD_SIZE as usize] =
    ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];
