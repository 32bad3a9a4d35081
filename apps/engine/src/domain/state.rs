use crate::domain::rules::PLAYERS;
use crate::errors::domain::DomainError;

pub type PlayerId = u8; // 0..=3

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// Clockwise direction is positive (+1).
/// Counter-clockwise direction is negative (-1).
#[inline]
pub fn seat_offset(seat: PlayerId, delta: i8) -> PlayerId {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as PlayerId
}

/// Returns the next player clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_player(p: PlayerId) -> PlayerId {
    seat_offset(p, 1)
}

/// Returns the seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: PlayerId, n: u8) -> PlayerId {
    seat_offset(start, (n % PLAYERS as u8) as i8)
}

/// Clockwise distance from `from` to `to`.
#[inline]
pub fn seat_distance(from: PlayerId, to: PlayerId) -> u8 {
    ((to as i16 - from as i16).rem_euclid(PLAYERS as i16)) as u8
}

pub fn require_seat(player: PlayerId) -> Result<PlayerId, DomainError> {
    if (player as usize) < PLAYERS {
        Ok(player)
    } else {
        Err(DomainError::invalid_seat(player))
    }
}
