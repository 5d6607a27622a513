//! Linking of parsed match shells to roster players.

use crate::domain::{Goal, Match};
use crate::error::UnknownPlayer;
use crate::parse::MatchShell;
use crate::roster::ResolvePlayer;

/// Resolves every scorer in `shell`, yielding a fully linked [Match]. Goals keep their input
/// order. The first unresolvable scorer fails the whole match; no partially linked match is
/// ever produced.
pub fn link(shell: MatchShell, resolver: &impl ResolvePlayer) -> Result<Match, UnknownPlayer> {
    let goals = shell
        .goals
        .into_iter()
        .map(|raw| {
            Ok(Goal {
                player: resolver.resolve(&raw.scorer)?,
                minute: raw.minute,
            })
        })
        .collect::<Result<Vec<_>, UnknownPlayer>>()?;

    Ok(Match {
        date_time: shell.date_time,
        opponent: shell.opponent,
        location: shell.location,
        own_score: shell.own_score,
        opponent_score: shell.opponent_score,
        championship: shell.championship,
        event: shell.event,
        goals,
    })
}
