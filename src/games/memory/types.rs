//! Core domain types for the memory challenge.

use serde::{Deserialize, Serialize};

/// Identifier of one grid cell, in `0..grid_size²`.
pub type CellId = usize;

/// Identity of one play-through. Starts at 1 and only grows.
pub type GameId = u64;

/// Current phase of a game session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum GameStatus {
    /// Waiting for the player to start.
    New,
    /// Challenge cells are shown; the player memorizes them.
    Challenge,
    /// The player picks cells against the countdown.
    Playing,
    /// Every challenge cell was picked.
    Won,
    /// Too many wrong picks, or the countdown ran out.
    Lost,
}

impl GameStatus {
    /// Returns true for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }

    /// Prompt shown to the player in this phase.
    pub fn message(self) -> &'static str {
        match self {
            GameStatus::New => "You will have a few seconds to memorize the blue random cells.",
            GameStatus::Challenge => "Remember these blue cells now",
            GameStatus::Playing => "Which cells were blue?",
            GameStatus::Won => "Victory!",
            GameStatus::Lost => "Game Over",
        }
    }
}

/// Visual classification of a single cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CellStatus {
    /// Plain cell.
    Normal,
    /// Unpicked challenge cell, visible while memorizing or after a loss.
    Highlight,
    /// Picked and part of the challenge.
    Correct,
    /// Picked but not part of the challenge.
    Wrong,
}

impl CellStatus {
    /// Classifies a cell from the game phase and its membership flags.
    ///
    /// Nothing is revealed before the game starts. Picks are always shown
    /// as correct or wrong once it has, and unpicked challenge cells are
    /// highlighted only while memorizing and after a loss.
    pub fn classify(status: GameStatus, is_challenge: bool, is_picked: bool) -> Self {
        if status == GameStatus::New {
            return CellStatus::Normal;
        }
        match (is_picked, is_challenge) {
            (true, true) => CellStatus::Correct,
            (true, false) => CellStatus::Wrong,
            (false, true) if matches!(status, GameStatus::Challenge | GameStatus::Lost) => {
                CellStatus::Highlight
            }
            _ => CellStatus::Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_new_game_reveals_nothing() {
        for picked in [false, true] {
            for challenge in [false, true] {
                assert_eq!(
                    CellStatus::classify(GameStatus::New, challenge, picked),
                    CellStatus::Normal
                );
            }
        }
    }

    #[test]
    fn test_picks_are_judged_in_every_started_phase() {
        for status in GameStatus::iter().filter(|s| *s != GameStatus::New) {
            assert_eq!(CellStatus::classify(status, true, true), CellStatus::Correct);
            assert_eq!(CellStatus::classify(status, false, true), CellStatus::Wrong);
            assert_eq!(CellStatus::classify(status, false, false), CellStatus::Normal);
        }
    }

    #[test]
    fn test_highlight_only_while_memorizing_or_lost() {
        assert_eq!(
            CellStatus::classify(GameStatus::Challenge, true, false),
            CellStatus::Highlight
        );
        assert_eq!(
            CellStatus::classify(GameStatus::Lost, true, false),
            CellStatus::Highlight
        );
        assert_eq!(
            CellStatus::classify(GameStatus::Playing, true, false),
            CellStatus::Normal
        );
        assert_eq!(
            CellStatus::classify(GameStatus::Won, true, false),
            CellStatus::Normal
        );
    }

    #[test]
    fn test_status_display_matches_phase_names() {
        assert_eq!(GameStatus::Challenge.to_string(), "CHALLENGE");
        assert!(GameStatus::Lost.is_terminal());
        assert!(!GameStatus::Playing.is_terminal());
        assert_eq!(GameStatus::Won.message(), "Victory!");
    }
}
