use std::fmt;
use std::ops::Add;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{TournamentError, TournamentResult};

pub type PlayerId = i64;

/// Tournament score kept in half points so draws stay exact
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Score(u32);

impl Score {
    pub const ZERO: Score = Score(0);
    pub const DRAW: Score = Score(1);
    pub const WIN: Score = Score(2);

    pub fn from_half_points(half_points: u32) -> Self {
        Score(half_points)
    }

    /// Saturates at `u32::MAX` half points.
    pub fn from_points(points: u32) -> Self {
        Score(points.saturating_mul(2))
    }

    pub fn half_points(&self) -> u32 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.0) / 2.0
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, rhs: Score) -> Score {
        Score(self.0 + rhs.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 2;
        if self.0 % 2 == 0 {
            write!(f, "{whole}")
        } else {
            write!(f, "{whole}.5")
        }
    }
}

/// One row of the standings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub score: Score,
    pub played: u32,
}

impl PlayerRecord {
    pub fn new(id: PlayerId, name: impl Into<String>, score: Score, played: u32) -> Self {
        Self {
            id,
            name: name.into(),
            score,
            played,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedPlayer {
    pub id: PlayerId,
    pub name: String,
}

impl From<&PlayerRecord> for PairedPlayer {
    fn from(record: &PlayerRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
        }
    }
}

/// Two players meeting in the next round, or a bye when `second` is empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub first: PairedPlayer,
    pub second: Option<PairedPlayer>,
}

impl Pairing {
    pub fn game(first: PairedPlayer, second: PairedPlayer) -> Self {
        Self {
            first,
            second: Some(second),
        }
    }

    pub fn bye(player: PairedPlayer) -> Self {
        Self {
            first: player,
            second: None,
        }
    }

    pub fn is_bye(&self) -> bool {
        self.second.is_none()
    }
}

/// Outcome of one reported game or bye.
///
/// Built through [`MatchResult::from_report`], which rejects reports that can
/// never be applied to the standings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    Decisive { winner: PlayerId, loser: PlayerId },
    Draw { first: PlayerId, second: PlayerId },
    Bye { player: PlayerId },
}

impl MatchResult {
    pub fn from_report(
        winner: PlayerId,
        loser: Option<PlayerId>,
        is_draw: bool,
    ) -> TournamentResult<Self> {
        match (loser, is_draw) {
            (Some(loser), _) if loser == winner => Err(TournamentError::InvalidState(format!(
                "player {winner} cannot be reported against themselves"
            ))),
            (Some(loser), false) => Ok(MatchResult::Decisive { winner, loser }),
            (Some(second), true) => Ok(MatchResult::Draw {
                first: winner,
                second,
            }),
            (None, false) => Ok(MatchResult::Bye { player: winner }),
            (None, true) => Err(TournamentError::InvalidState(format!(
                "a bye for player {winner} cannot be a draw"
            ))),
        }
    }

    pub fn participants(&self) -> Vec<PlayerId> {
        match *self {
            MatchResult::Decisive { winner, loser } => vec![winner, loser],
            MatchResult::Draw { first, second } => vec![first, second],
            MatchResult::Bye { player } => vec![player],
        }
    }

    /// Score credited to each participant. Every participant also gains one
    /// played game.
    pub fn credits(&self) -> Vec<(PlayerId, Score)> {
        match *self {
            MatchResult::Decisive { winner, loser } => {
                vec![(winner, Score::WIN), (loser, Score::ZERO)]
            }
            MatchResult::Draw { first, second } => {
                vec![(first, Score::DRAW), (second, Score::DRAW)]
            }
            MatchResult::Bye { player } => vec![(player, Score::WIN)],
        }
    }

    /// Row for the match history. Byes are never recorded as matches.
    pub fn history_entry(&self) -> Option<NewMatch> {
        match *self {
            MatchResult::Decisive { winner, loser } => Some(NewMatch {
                first_player_id: winner,
                second_player_id: loser,
                winner_id: Some(winner),
            }),
            MatchResult::Draw { first, second } => Some(NewMatch {
                first_player_id: first,
                second_player_id: second,
                winner_id: None,
            }),
            MatchResult::Bye { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewMatch {
    pub first_player_id: PlayerId,
    pub second_player_id: PlayerId,
    pub winner_id: Option<PlayerId>,
}

/// Persisted match history row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: i64,
    pub first_player_id: PlayerId,
    pub second_player_id: PlayerId,
    pub winner_id: Option<PlayerId>, // None for a draw
    pub played_at: Option<NaiveDateTime>,
}
