//! Goal scorer queries.
//!
//! Ranking is split into stages so that each tie-break is explicit: [group_by_scorer] tallies
//! goals per player in order of each player's first goal, [rank] orders the tallies by descending
//! goal count (stably, so earlier first goals win ties), and [top] truncates.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::analytics::first_max_by_key;
use crate::domain::{Goal, Half, Match, Player};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorerTally {
    pub player: Arc<Player>,
    pub goals: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfTally {
    pub half: Half,
    pub goals: usize,
}

pub fn goals(matches: &[Match]) -> impl Iterator<Item = &Goal> {
    matches.iter().flat_map(|game| game.goals.iter())
}

pub fn total_goals(matches: &[Match]) -> usize {
    goals(matches).count()
}

/// Scorer of the first goal recorded in the first match; `None` if that match was goalless.
pub fn first_scorer(matches: &[Match]) -> Option<&Arc<Player>> {
    matches
        .first()
        .and_then(|game| game.goals.first())
        .map(|goal| &goal.player)
}

/// Scorer of the last goal recorded in the last match; `None` if that match was goalless.
pub fn last_scorer(matches: &[Match]) -> Option<&Arc<Player>> {
    matches
        .last()
        .and_then(|game| game.goals.last())
        .map(|goal| &goal.player)
}

pub fn group_by_scorer(matches: &[Match]) -> Vec<ScorerTally> {
    let mut index_of: FxHashMap<&Player, usize> = FxHashMap::default();
    let mut tallies: Vec<ScorerTally> = vec![];
    for goal in goals(matches) {
        let index = *index_of.entry(goal.player.as_ref()).or_insert_with(|| {
            tallies.push(ScorerTally {
                player: goal.player.clone(),
                goals: 0,
            });
            tallies.len() - 1
        });
        tallies[index].goals += 1;
    }
    tallies
}

pub fn rank(mut tallies: Vec<ScorerTally>) -> Vec<ScorerTally> {
    tallies.sort_by(|a, b| b.goals.cmp(&a.goals));
    tallies
}

pub fn top(mut ranked: Vec<ScorerTally>, n: usize) -> Vec<ScorerTally> {
    ranked.truncate(n);
    ranked
}

pub fn top_strikers(matches: &[Match], n: usize) -> Vec<ScorerTally> {
    top(rank(group_by_scorer(matches)), n)
}

pub fn best_striker(matches: &[Match]) -> Option<ScorerTally> {
    first_max_by_key(group_by_scorer(matches), |tally| tally.goals)
}

/// The half in which more goals were scored. A tie goes to the first half.
pub fn most_goals_in_half(matches: &[Match], half_time: u16) -> Option<HalfTally> {
    let (mut first, mut second) = (0, 0);
    for goal in goals(matches) {
        match goal.half(half_time) {
            Half::First => first += 1,
            Half::Second => second += 1,
        }
    }
    let tallies = [
        HalfTally {
            half: Half::First,
            goals: first,
        },
        HalfTally {
            half: Half::Second,
            goals: second,
        },
    ];
    first_max_by_key(tallies.into_iter().filter(|tally| tally.goals > 0), |tally| {
        tally.goals
    })
}

/// The scorer with the latest date of birth. Among equally young scorers, the one whose goal
/// came first in the season wins.
pub fn youngest_scorer(matches: &[Match]) -> Option<&Arc<Player>> {
    first_max_by_key(goals(matches), |goal| goal.player.dob).map(|goal| &goal.player)
}
