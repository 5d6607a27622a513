use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use strum_macros::EnumString;

/// Club name used when rendering a match without an explicit club.
pub const DEFAULT_CLUB: &str = "Metz";

pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Player {
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub kind: String,
}
impl Player {
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// A scoring event. The scorer is shared with the roster rather than copied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Goal {
    pub player: Arc<Player>,
    pub minute: u16,
}
impl Goal {
    pub fn half(&self, half_time: u16) -> Half {
        Half::of(self.minute, half_time)
    }
}

/// Where a match was played. `home` and `away` are recognised regardless of case; any other tag
/// is kept verbatim.
#[derive(
    Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, strum_macros::Display, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Location {
    Home,
    Away,
    #[strum(default)]
    Other(String),
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Half {
    First,
    Second,
}
impl Half {
    /// The `half_time` minute itself belongs to the first half; stoppage time beyond it does not.
    pub fn of(minute: u16, half_time: u16) -> Self {
        if minute <= half_time {
            Half::First
        } else {
            Half::Second
        }
    }
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, strum_macros::Display)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}
impl Outcome {
    pub fn points(&self) -> u32 {
        match self {
            Outcome::Win => 3,
            Outcome::Draw => 1,
            Outcome::Loss => 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    pub date_time: NaiveDateTime,
    pub opponent: String,
    pub location: Location,
    pub own_score: u8,
    pub opponent_score: u8,
    pub championship: String,
    pub event: String,
    pub goals: Vec<Goal>,
}
impl Match {
    pub fn outcome(&self) -> Outcome {
        match self.own_score.cmp(&self.opponent_score) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::Loss,
        }
    }

    pub fn points(&self) -> u32 {
        self.outcome().points()
    }

    pub fn won(&self) -> bool {
        self.outcome() == Outcome::Win
    }

    pub fn draw(&self) -> bool {
        self.outcome() == Outcome::Draw
    }

    pub fn lost(&self) -> bool {
        self.outcome() == Outcome::Loss
    }

    pub fn unbeaten(&self) -> bool {
        self.points() > 0
    }

    /// Own score less opponent score; negative for a loss.
    pub fn margin(&self) -> i16 {
        self.own_score as i16 - self.opponent_score as i16
    }

    pub fn display(&self) -> MatchDisplay<'_> {
        self.display_as(DEFAULT_CLUB)
    }

    pub fn display_as<'a>(&'a self, club: &'a str) -> MatchDisplay<'a> {
        MatchDisplay { game: self, club }
    }
}

/// One-line summary of a match, with the home side always on the left.
pub struct MatchDisplay<'a> {
    game: &'a Match,
    club: &'a str,
}

impl Display for MatchDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let game = self.game;
        write!(
            f,
            "{} - {}/{}: ",
            game.date_time.format(DATE_TIME_FORMAT),
            game.championship,
            game.event
        )?;
        match game.location {
            Location::Home => write!(
                f,
                "{} {} - {} {}",
                self.club, game.own_score, game.opponent_score, game.opponent
            ),
            Location::Away | Location::Other(_) => write!(
                f,
                "{} {} - {} {}",
                game.opponent, game.opponent_score, game.own_score, self.club
            ),
        }
    }
}
