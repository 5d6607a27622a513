//! The full set of season statistics, gathered in one pass over the analytics.

use crate::analytics::results::{self, EvolutionStep, LocationPoints};
use crate::analytics::scorers::{self, HalfTally, ScorerTally};
use crate::analytics::streak::{self, UnbeatenRun};
use crate::config::Config;
use crate::domain::{Match, Outcome, Player};
use crate::season::Season;

#[derive(Debug)]
pub struct ChampionshipReport<'a> {
    pub name: &'a str,
    pub points: u32,
    pub lost_against: Vec<&'a str>,
    pub drawn_against: Vec<&'a str>,
    pub won_against: Vec<&'a str>,
    pub unbeaten: Option<UnbeatenRun<'a>>,
    pub evolution: Vec<EvolutionStep<'a>>,
}
impl<'a> ChampionshipReport<'a> {
    pub fn compute(name: &'a str, matches: &'a [Match]) -> Self {
        Self {
            name,
            points: results::total_points(matches),
            lost_against: results::opponents(matches, Outcome::Loss),
            drawn_against: results::opponents(matches, Outcome::Draw),
            won_against: results::opponents(matches, Outcome::Win),
            unbeaten: streak::longest_unbeaten(matches),
            evolution: results::evolution(matches),
        }
    }
}

#[derive(Debug)]
pub struct SeasonReport<'a> {
    pub club: &'a str,
    pub first_scorer: Option<&'a Player>,
    pub last_scorer: Option<&'a Player>,
    pub total_goals: usize,
    pub best_striker: Option<ScorerTally>,
    pub top_strikers: Vec<ScorerTally>,
    pub best_win: Option<&'a Match>,
    pub worst_loss: Option<&'a Match>,
    pub championship: ChampionshipReport<'a>,
    pub unbeaten: Option<UnbeatenRun<'a>>,
    pub average_goals: f64,
    pub most_goals_in_half: Option<HalfTally>,
    pub youngest_scorer: Option<&'a Player>,
    pub best_location: Option<LocationPoints>,
}
impl<'a> SeasonReport<'a> {
    /// `championship` is expected to be the subset of `season` named by `config.championship`.
    pub fn compute(season: &'a Season, championship: &'a Season, config: &'a Config) -> Self {
        let matches = season.matches();
        Self {
            club: &config.club,
            first_scorer: scorers::first_scorer(matches).map(AsRef::as_ref),
            last_scorer: scorers::last_scorer(matches).map(AsRef::as_ref),
            total_goals: scorers::total_goals(matches),
            best_striker: scorers::best_striker(matches),
            top_strikers: scorers::top_strikers(matches, config.top_strikers),
            best_win: results::best_win(matches),
            worst_loss: results::worst_loss(matches),
            championship: ChampionshipReport::compute(
                &config.championship,
                championship.matches(),
            ),
            unbeaten: streak::longest_unbeaten(matches),
            average_goals: results::average_goals(matches),
            most_goals_in_half: scorers::most_goals_in_half(matches, config.half_time),
            youngest_scorer: scorers::youngest_scorer(matches).map(AsRef::as_ref),
            best_location: results::best_location(matches),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;

    use super::*;
    use crate::domain::{Half, Location};

    const PLAYERS: &[&str] = &[
        "Jean,Dupont,1990-01-01,FW",
        "Paul,Martin,1999-06-15,MF",
        "Marc,Leroy,2003-02-11,FW",
    ];

    const MATCHES: &[&str] = &[
        "2023-08-01 20:00,Lyon,home,2,1,Ligue 1,Matchday 1,Dupont@10:Dupont@80",
        "2023-08-05 15:00,Brest,home,1,0,Coupe de France,Round 1,Leroy@88",
        "2023-08-12 17:00,Nice,away,0,0,Ligue 1,Matchday 2",
        "2023-08-19 21:00,Lens,away,0,2,Ligue 1,Matchday 3",
        "2023-08-26 21:00,Nantes,home,3,3,Ligue 1,Matchday 4,Martin@5:Dupont@40:Martin@77",
        "2023-09-02 21:00,Lens,home,1,4,Ligue 1,Matchday 5,Leroy@60",
    ];

    #[test]
    fn full_report() {
        let season = Season::load(PLAYERS, MATCHES).unwrap();
        let config = Config::default();
        let league = season.championship(&config.championship);
        let report = SeasonReport::compute(&season, &league, &config);

        assert_eq!("Metz", report.club);
        assert_eq!("Dupont", report.first_scorer.unwrap().last_name);
        assert_eq!("Leroy", report.last_scorer.unwrap().last_name);
        assert_eq!(7, report.total_goals);
        let best = report.best_striker.unwrap();
        assert_eq!(("Dupont", 3), (best.player.last_name.as_str(), best.goals));
        let top: Vec<_> = report
            .top_strikers
            .iter()
            .map(|tally| (tally.player.last_name.as_str(), tally.goals))
            .collect();
        assert_eq!(vec![("Dupont", 3), ("Leroy", 2), ("Martin", 2)], top);
        assert_eq!("Lyon", report.best_win.unwrap().opponent);
        assert_eq!("Matchday 5", report.worst_loss.unwrap().event);

        let championship = &report.championship;
        assert_eq!("Ligue 1", championship.name);
        assert_eq!(3 + 1 + 0 + 1 + 0, championship.points);
        assert_eq!(vec!["Lens"], championship.lost_against);
        assert_eq!(vec!["Nice", "Nantes"], championship.drawn_against);
        assert_eq!(vec!["Lyon"], championship.won_against);
        let unbeaten = championship.unbeaten.as_ref().unwrap();
        assert_eq!(0, unbeaten.run.start);
        assert_eq!(2, unbeaten.run.len);
        assert_eq!(0..3, unbeaten.context);
        assert_eq!(
            championship.points,
            championship.evolution.last().unwrap().points
        );
        assert_eq!(6, championship.evolution.last().unwrap().goals);

        let unbeaten = report.unbeaten.as_ref().unwrap();
        assert_eq!(0, unbeaten.run.start);
        assert_eq!(3, unbeaten.run.len);

        assert_float_absolute_eq!(7.0 / 6.0, report.average_goals, 1e-9);
        let half = report.most_goals_in_half.unwrap();
        assert_eq!((Half::Second, 4), (half.half, half.goals));
        assert_eq!("Leroy", report.youngest_scorer.unwrap().last_name);
        let location = report.best_location.unwrap();
        assert_eq!((Location::Home, 7), (location.location, location.points));
    }

    #[test]
    fn empty_report() {
        let season = Season::default();
        let config = Config::default();
        let league = season.championship(&config.championship);
        let report = SeasonReport::compute(&season, &league, &config);
        assert!(report.first_scorer.is_none());
        assert_eq!(0, report.total_goals);
        assert!(report.best_striker.is_none());
        assert!(report.top_strikers.is_empty());
        assert!(report.best_win.is_none());
        assert!(report.worst_loss.is_none());
        assert_eq!(0, report.championship.points);
        assert!(report.championship.unbeaten.is_none());
        assert!(report.championship.evolution.is_empty());
        assert!(report.unbeaten.is_none());
        assert_float_absolute_eq!(0.0, report.average_goals, 1e-12);
        assert!(report.most_goals_in_half.is_none());
        assert!(report.youngest_scorer.is_none());
        assert!(report.best_location.is_none());
    }
}
