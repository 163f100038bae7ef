//! Random playouts used to estimate the value of a move

use log::{error, trace};
use rand::{seq::IteratorRandom, Rng};

use crate::{board::*, rules::*, HEIGHT, WIDTH};

/// The score of a playout that ends on its very first move
pub const MAX_ROLLOUT_SCORE: i32 = (WIDTH * HEIGHT) as i32;

/// The outcome of a single playout
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct RolloutResult {
    /// The column played first, i.e. the candidate move being evaluated
    pub anchor: usize,
    pub score: i32,
}

/// Plays uniformly random legal moves on `board`, starting with `to_move`,
/// until somebody connects four or the board is full
///
/// # Scoring
/// The score starts at `WIDTH * HEIGHT` and loses a point for every move that
/// doesn't end the game, so quick wins are worth more than slow ones. A win
/// for the opponent of `to_move` negates the score. A full board with no
/// winner keeps whatever is left.
///
/// Returns `None` if there was no legal move to begin with.
pub fn rollout<R>(mut board: Board, to_move: Cell, rng: &mut R) -> Option<RolloutResult>
where
    R: Rng + ?Sized,
{
    let mut player = to_move;
    let mut score = MAX_ROLLOUT_SCORE;
    let mut anchor = None;

    while let Some(column) = legal_columns(&board).choose(rng) {
        if let Err(err) = apply_move(&mut board, column, player) {
            // legal_columns was just consulted, so this is a bug rather than bad input
            error!("abandoning rollout after illegal move: {}", err);
            return None;
        }
        anchor.get_or_insert(column);

        let winner = check_win(&board);
        if !winner.is_empty() {
            if winner == to_move.opponent() {
                score = -score;
            }
            break;
        }

        score -= 1;
        player = player.opponent();
    }

    let anchor = anchor?;
    trace!("rollout from column {} scored {}", anchor + 1, score);
    Some(RolloutResult { anchor, score })
}
