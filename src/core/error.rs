//! Errors reported by the game controller.

use thiserror::Error;

use crate::cards::CardId;

/// Why a game action was refused.
///
/// Refused actions never change state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The final round has been played.
    #[error("the game is over")]
    GameOver,

    /// A turn was submitted without exactly the required number of cards.
    #[error("selected {selected} of {required} cards")]
    SelectionIncomplete { selected: usize, required: usize },

    /// A card was selected that is not in the current hand.
    #[error("{0} is not in the current hand")]
    CardNotInHand(CardId),

    /// An identifier did not match any catalog entry.
    #[error("no card with id {0:?}")]
    UnknownCard(String),

    /// The previous turn's commentary has not arrived yet.
    #[error("waiting for the counselor to finish")]
    CommentaryPending,
}
