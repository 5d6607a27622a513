//! Testing helpers.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::domain::{Goal, Location, Match, Player};
use crate::roster::RosterIndex;
use crate::season::Season;

pub const CHAMPIONSHIP: &str = "Ligue 1";

pub fn player(first_name: &str, last_name: &str, dob: &str) -> Player {
    Player {
        first_name: first_name.into(),
        last_name: last_name.into(),
        dob: dob.parse::<NaiveDate>().unwrap(),
        kind: "FW".into(),
    }
}

pub fn kickoff(day: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 8, 1)
        .unwrap()
        .and_hms_opt(20, 0, 0)
        .unwrap()
        + Duration::days(day)
}

/// A home match against Lyon on day 0.
pub fn fixture(own_score: u8, opponent_score: u8) -> Match {
    Match {
        date_time: kickoff(0),
        opponent: "Lyon".into(),
        location: Location::Home,
        own_score,
        opponent_score,
        championship: CHAMPIONSHIP.into(),
        event: "Matchday 1".into(),
        goals: vec![],
    }
}

pub fn game(day: i64, opponent: &str, own_score: u8, opponent_score: u8) -> Match {
    Match {
        date_time: kickoff(day),
        opponent: opponent.into(),
        event: format!("Matchday {}", day + 1),
        ..fixture(own_score, opponent_score)
    }
}

pub fn with_goals(mut game: Match, goals: &[(&Arc<Player>, u16)]) -> Match {
    game.goals = goals
        .iter()
        .map(|&(player, minute)| Goal {
            player: player.clone(),
            minute,
        })
        .collect();
    game
}

/// One match per day, with `W`, `D` and `L` encoding a 1-0 win, a 0-0 draw and a 0-1 loss.
pub fn results(pattern: &str) -> Vec<Match> {
    pattern
        .chars()
        .enumerate()
        .map(|(day, result)| {
            let (own_score, opponent_score) = match result {
                'W' => (1, 0),
                'D' => (0, 0),
                'L' => (0, 1),
                _ => panic!("unsupported result {result}"),
            };
            game(day as i64, "Lyon", own_score, opponent_score)
        })
        .collect()
}

pub fn season(matches: Vec<Match>) -> Season {
    Season::new(RosterIndex::default(), matches)
}
