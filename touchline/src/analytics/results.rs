//! Result, points and location queries.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use rustc_hash::FxHashSet;

use crate::analytics::first_max_by_key;
use crate::domain::{Location, Match, Outcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationPoints {
    pub location: Location,
    pub points: u32,
}

/// One row of the evolution table: running totals after the match labelled `event`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionStep<'a> {
    pub event: &'a str,
    pub points: u32,
    pub goals: usize,
}

/// The match with the widest winning margin. Candidates are first ordered by descending own
/// score, so of two equal margins, the higher-scoring match wins.
pub fn best_win(matches: &[Match]) -> Option<&Match> {
    let mut candidates: Vec<_> = matches.iter().collect();
    candidates.sort_by_key(|game| Reverse(game.own_score));
    first_max_by_key(candidates, |game| game.margin())
}

/// The match with the widest losing margin. Candidates are first ordered by descending opponent
/// score, so of two equal margins, the one conceding more wins.
pub fn worst_loss(matches: &[Match]) -> Option<&Match> {
    let mut candidates: Vec<_> = matches.iter().collect();
    candidates.sort_by_key(|game| Reverse(game.opponent_score));
    first_max_by_key(candidates, |game| -game.margin())
}

pub fn total_points(matches: &[Match]) -> u32 {
    matches.iter().map(Match::points).sum()
}

/// Distinct opponents of matches ending in `outcome`, in order of first meeting.
pub fn opponents(matches: &[Match], outcome: Outcome) -> Vec<&str> {
    let mut seen = FxHashSet::default();
    matches
        .iter()
        .filter(|game| game.outcome() == outcome)
        .map(|game| game.opponent.as_str())
        .filter(|&opponent| seen.insert(opponent))
        .collect()
}

/// Mean of the club's own score per match; `0.0` when no matches were played.
pub fn average_goals(matches: &[Match]) -> f64 {
    if matches.is_empty() {
        return 0.0;
    }
    let total: u32 = matches.iter().map(|game| game.own_score as u32).sum();
    total as f64 / matches.len() as f64
}

/// The location tag that yielded the most points. Only tags with at least one match take part.
/// A tie goes to home, then away, then the other tags in lexical order.
pub fn best_location(matches: &[Match]) -> Option<LocationPoints> {
    let mut totals: BTreeMap<&Location, u32> = BTreeMap::new();
    for game in matches {
        *totals.entry(&game.location).or_default() += game.points();
    }
    first_max_by_key(totals, |&(_, points)| points).map(|(location, points)| LocationPoints {
        location: location.clone(),
        points,
    })
}

/// Running totals of points and goals scored, one step per match in season order.
pub fn evolution(matches: &[Match]) -> Vec<EvolutionStep<'_>> {
    matches
        .iter()
        .scan((0, 0), |(points, goals), game| {
            *points += game.points();
            *goals += game.goals.len();
            Some(EvolutionStep {
                event: &game.event,
                points: *points,
                goals: *goals,
            })
        })
        .collect()
}
