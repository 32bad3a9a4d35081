pub const PLAYERS: usize = 4;
/// Two copies of each of the 24 faces.
pub const DECK_SIZE: usize = 48;
pub const HAND_SIZE: usize = DECK_SIZE / PLAYERS;
/// Cards in a complete trick.
pub const TRICK_SIZE: usize = PLAYERS;
/// Players on the RE side in every variant this engine tracks teams for.
pub const RE_PLAYERS: usize = 2;
