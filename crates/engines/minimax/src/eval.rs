use ttt_core::{Mark, Outcome};

/// Terminal utility of a position, always from O's perspective:
/// +1 when O has a line, -1 when X has one, 0 for a tie.
///
/// Returns `None` while the game is still in progress.
pub fn utility(outcome: Outcome) -> Option<i32> {
    match outcome {
        Outcome::Win(Mark::O) => Some(1),
        Outcome::Win(Mark::X) => Some(-1),
        Outcome::Tie => Some(0),
        Outcome::InProgress => None,
    }
}
