//! Assembly of the season: parsing, linking and chronological ordering.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::analytics::scorers;
use crate::domain::{Goal, Match};
use crate::error::{LoadError, RecordKind};
use crate::linker;
use crate::parse::{parse_match, parse_player};
use crate::roster::RosterIndex;

/// The frozen model: every linked match in kickoff order, alongside the roster its goals refer to.
#[derive(Debug, Clone, Default)]
pub struct Season {
    roster: Arc<RosterIndex>,
    matches: Vec<Match>,
}
impl Season {
    /// Orders `matches` by kickoff. The sort is stable, so matches sharing a kickoff keep their
    /// input order.
    pub fn new(roster: impl Into<Arc<RosterIndex>>, mut matches: Vec<Match>) -> Self {
        matches.sort_by_key(|game| game.date_time);
        Self {
            roster: roster.into(),
            matches,
        }
    }

    /// Builds a season from raw roster and match lines. Blank lines are skipped. The first
    /// malformed record or unresolvable scorer aborts the load, identifying the offending line.
    pub fn load<P, M>(player_lines: P, match_lines: M) -> Result<Self, LoadError>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        M: IntoIterator,
        M::Item: AsRef<str>,
    {
        let mut players = vec![];
        for (line, record) in numbered(player_lines) {
            let player = parse_player(&record).map_err(|source| LoadError::Malformed {
                kind: RecordKind::Players,
                line,
                source,
            })?;
            debug!("parsed player {player} on line {line}");
            players.push(player);
        }
        let roster = RosterIndex::from(players);

        let mut matches = vec![];
        for (line, record) in numbered(match_lines) {
            let shell = parse_match(&record).map_err(|source| LoadError::Malformed {
                kind: RecordKind::Matches,
                line,
                source,
            })?;
            let game = linker::link(shell, &roster)
                .map_err(|source| LoadError::UnknownPlayer { line, source })?;
            debug!("linked match on line {line}: {}", game.display());
            matches.push(game);
        }

        info!(
            "loaded {} players and {} matches",
            roster.len(),
            matches.len()
        );
        Ok(Self::new(roster, matches))
    }

    pub fn roster(&self) -> &RosterIndex {
        &self.roster
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// All goals, in season order.
    pub fn goals(&self) -> impl Iterator<Item = &Goal> {
        scorers::goals(&self.matches)
    }

    /// The subset of matches played in the named championship, sharing this season's roster.
    pub fn championship(&self, name: &str) -> Season {
        Season {
            roster: self.roster.clone(),
            matches: self
                .matches
                .iter()
                .filter(|game| game.championship == name)
                .cloned()
                .collect(),
        }
    }

    /// Distinct championship names, in order of first appearance.
    pub fn championships(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        self.matches
            .iter()
            .map(|game| game.championship.as_str())
            .filter(|&name| seen.insert(name))
            .collect()
    }
}

/// Pairs each non-blank record with its 1-based line number. A trailing carriage return is
/// dropped; any other whitespace belongs to the record.
fn numbered<I>(lines: I) -> impl Iterator<Item = (usize, String)>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| (index + 1, line.as_ref().trim_end_matches('\r').to_string()))
        .filter(|(_, line)| !line.trim().is_empty())
}
