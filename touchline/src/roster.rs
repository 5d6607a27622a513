//! Resolution of goal scorers against the roster.

use std::collections::hash_map::Entry;
use std::ops::Index;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::domain::Player;
use crate::error::UnknownPlayer;

/// Resolves a scorer identifier (a last name) to a roster member.
pub trait ResolvePlayer {
    fn resolve(&self, last_name: &str) -> Result<Arc<Player>, UnknownPlayer>;
}

impl<F> ResolvePlayer for F
where
    F: Fn(&str) -> Result<Arc<Player>, UnknownPlayer>,
{
    fn resolve(&self, last_name: &str) -> Result<Arc<Player>, UnknownPlayer> {
        self(last_name)
    }
}

/// The roster in input order, with a last-name mapping precomputed at construction.
///
/// Last names are matched exactly (case-sensitive). Where several players share a last name,
/// the first one in input order wins.
#[derive(Debug, Clone, Default)]
pub struct RosterIndex {
    by_last_name: FxHashMap<String, usize>,
    players: Vec<Arc<Player>>,
}
impl RosterIndex {
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn index_of(&self, last_name: &str) -> Option<usize> {
        self.by_last_name.get(last_name).copied()
    }

    pub fn get(&self, last_name: &str) -> Option<&Arc<Player>> {
        self.index_of(last_name).map(|index| &self.players[index])
    }
}

impl ResolvePlayer for RosterIndex {
    fn resolve(&self, last_name: &str) -> Result<Arc<Player>, UnknownPlayer> {
        self.get(last_name)
            .cloned()
            .ok_or_else(|| UnknownPlayer(last_name.into()))
    }
}

impl Index<usize> for RosterIndex {
    type Output = Arc<Player>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.players[index]
    }
}

impl From<Vec<Player>> for RosterIndex {
    fn from(players: Vec<Player>) -> Self {
        let mut by_last_name =
            FxHashMap::with_capacity_and_hasher(players.len(), Default::default());
        for (index, player) in players.iter().enumerate() {
            match by_last_name.entry(player.last_name.clone()) {
                Entry::Vacant(entry) => {
                    entry.insert(index);
                }
                Entry::Occupied(entry) => {
                    warn!(
                        "duplicate last name '{}' at roster index {index}, resolving to index {}",
                        player.last_name,
                        entry.get()
                    );
                }
            }
        }
        let players = players.into_iter().map(Arc::new).collect();
        Self {
            by_last_name,
            players,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::player;

    fn roster() -> RosterIndex {
        RosterIndex::from(vec![
            player("Jean", "Dupont", "1990-01-01"),
            player("Paul", "Martin", "1995-06-15"),
            player("Luc", "Dupont", "2001-03-30"),
        ])
    }

    #[test]
    fn resolve_known() {
        let roster = roster();
        assert_eq!(3, roster.len());
        assert!(!roster.is_empty());
        assert_eq!("Paul Martin", roster.resolve("Martin").unwrap().name());
    }

    #[test]
    fn resolve_unknown() {
        assert_eq!(
            UnknownPlayer("NoSuchName".into()),
            roster().resolve("NoSuchName").unwrap_err()
        );
    }

    #[test]
    fn resolve_is_case_sensitive() {
        assert!(roster().resolve("martin").is_err());
    }

    #[test]
    fn duplicate_last_name_resolves_to_first() {
        let roster = roster();
        assert_eq!(Some(0), roster.index_of("Dupont"));
        assert_eq!("Jean Dupont", roster.resolve("Dupont").unwrap().name());
        assert_eq!("Luc Dupont", roster[2].name());
    }

    #[test]
    fn repeated_resolution_shares_roster_entry() {
        let roster = roster();
        let first = roster.resolve("Martin").unwrap();
        let second = roster.resolve("Martin").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &roster[1]));
    }

    #[test]
    fn empty_roster() {
        let roster = RosterIndex::default();
        assert!(roster.is_empty());
        assert!(roster.resolve("Dupont").is_err());
    }
}
