//! Parsing of raw comma-delimited records into typed values.
//!
//! Roster records take the form `first_name,last_name,dob,type`, with `dob` as an ISO-8601 date.
//! Match records take the form `date_time,opponent,location,own_score,opponent_score,championship,event[,goals]`,
//! where `date_time` is `yyyy-MM-dd HH:mm` and the optional `goals` field is a `:`-separated list of
//! `scorer_last_name@minute` pairs.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::{Location, Player, DATE_TIME_FORMAT};
use crate::error::{Malformation, MalformedRecord};

const FIELD_DELIMITER: char = ',';
const GOAL_DELIMITER: char = ':';
const MINUTE_DELIMITER: char = '@';

const PLAYER_FIELDS: usize = 4;
const MATCH_FIELDS: usize = 7;

/// A goal whose scorer has not yet been resolved against the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawGoal {
    pub scorer: String,
    pub minute: u16,
}

/// A parsed match record prior to linking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchShell {
    pub date_time: NaiveDateTime,
    pub opponent: String,
    pub location: Location,
    pub own_score: u8,
    pub opponent_score: u8,
    pub championship: String,
    pub event: String,
    pub goals: Vec<RawGoal>,
}

pub fn parse_player(line: &str) -> Result<Player, MalformedRecord> {
    let fields: Vec<_> = line.split(FIELD_DELIMITER).collect();
    if fields.len() != PLAYER_FIELDS {
        return Err(MalformedRecord::new(
            line,
            Malformation::FieldCount {
                expected: "4",
                actual: fields.len(),
            },
        ));
    }
    let dob = NaiveDate::from_str(fields[2]).map_err(|_| {
        MalformedRecord::new(
            line,
            Malformation::Date {
                value: fields[2].into(),
            },
        )
    })?;
    Ok(Player {
        first_name: fields[0].into(),
        last_name: fields[1].into(),
        dob,
        kind: fields[3].into(),
    })
}

pub fn parse_match(line: &str) -> Result<MatchShell, MalformedRecord> {
    let fields: Vec<_> = line.split(FIELD_DELIMITER).collect();
    if fields.len() != MATCH_FIELDS && fields.len() != MATCH_FIELDS + 1 {
        return Err(MalformedRecord::new(
            line,
            Malformation::FieldCount {
                expected: "7 or 8",
                actual: fields.len(),
            },
        ));
    }
    let malformed = |reason| MalformedRecord::new(line, reason);

    let date_time = NaiveDateTime::parse_from_str(fields[0], DATE_TIME_FORMAT).map_err(|_| {
        malformed(Malformation::DateTime {
            value: fields[0].into(),
        })
    })?;
    let location = Location::from_str(fields[2]).unwrap_or_else(|_| Location::Other(fields[2].into()));
    let own_score = parse_number("own score", fields[3]).map_err(malformed)?;
    let opponent_score = parse_number("opponent score", fields[4]).map_err(malformed)?;
    let goals = match fields.get(MATCH_FIELDS) {
        Some(goals) if !goals.is_empty() => parse_goals(goals).map_err(malformed)?,
        _ => vec![],
    };

    Ok(MatchShell {
        date_time,
        opponent: fields[1].into(),
        location,
        own_score,
        opponent_score,
        championship: fields[5].into(),
        event: fields[6].into(),
        goals,
    })
}

fn parse_goals(field: &str) -> Result<Vec<RawGoal>, Malformation> {
    field
        .split(GOAL_DELIMITER)
        .map(|goal| {
            let (scorer, minute) = goal
                .split_once(MINUTE_DELIMITER)
                .filter(|(scorer, _)| !scorer.is_empty())
                .ok_or_else(|| Malformation::Goal {
                    value: goal.into(),
                })?;
            Ok(RawGoal {
                scorer: scorer.into(),
                minute: parse_number("minute", minute)?,
            })
        })
        .collect()
}

fn parse_number<N: FromStr>(field: &'static str, value: &str) -> Result<N, Malformation> {
    value.parse().map_err(|_| Malformation::Number {
        field,
        value: value.into(),
    })
}
