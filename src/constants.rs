pub const BOARD_SIZE: u8 = 28;
pub const HALF_BOARD: u8 = 14;

/// Health both players start a match with. The engine reports live totals in
/// every snapshot; this is only the well-known initial value used by tests
/// and the offline harness.
pub const STARTING_HEALTH: f32 = 40.0;

/// Neighbor offsets for cardinal movement. Mobile units step orthogonally,
/// so path queries and the offline harness only ever use these four.
pub const NEIGHBORS_4: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// The four sign combinations applied to a reactive `(i, j)` offset pair.
pub const OFFSET_SIGNS: [(i8, i8); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];
