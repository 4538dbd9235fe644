//! Turn derivation from move counts.

use crate::types::{MoveCount, Seat};

/// Returns the seat expected to move next.
///
/// Whoever has made fewer moves goes next; when the counts are equal the
/// starting seat moves.
pub fn whose_turn(counts: MoveCount, starting: Seat) -> Seat {
    let other = starting.other();
    if counts.get(starting) > counts.get(other) {
        other
    } else {
        starting
    }
}
