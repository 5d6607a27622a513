use stanza::style::HAlign::Left;
use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

use crate::analytics::results::EvolutionStep;
use crate::analytics::scorers::ScorerTally;
use crate::analytics::streak::UnbeatenRun;
use crate::display::{DisplayList, DisplayOption};
use crate::report::SeasonReport;

pub fn tabulate_strikers(tallies: &[ScorerTally]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(5)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(20)).with(Left)),
            Col::new(Styles::default().with(MinWidth(5)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Rank".into(), "Player".into(), "Goals".into()],
        ));
    for (index, tally) in tallies.iter().enumerate() {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{}", index + 1).into(),
                tally.player.name().into(),
                format!("{}", tally.goals).into(),
            ],
        ));
    }
    table
}

/// The run's matches, preceded and followed by the match that bounds it where there is one.
pub fn tabulate_run(unbeaten: &UnbeatenRun, club: &str) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(3)).with(HAlign::Centred)),
            Col::new(Styles::default().with(MinWidth(40)).with(Left)),
            Col::new(Styles::default().with(MinWidth(5)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec!["".into(), "Match".into(), "Pts".into()],
        ));
    for (index, game) in unbeaten.window.iter().enumerate() {
        let marker = if unbeaten.in_run(index) { "*" } else { "" };
        table.push_row(Row::new(
            Styles::default(),
            vec![
                marker.into(),
                game.display_as(club).to_string().into(),
                format!("{}", game.points()).into(),
            ],
        ));
    }
    table
}

pub fn tabulate_evolution(steps: &[EvolutionStep]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(12)).with(Left)),
            Col::new(Styles::default().with(MinWidth(5)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(5)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Event".into(), "Pts".into(), "Goals".into()],
        ));
    for step in steps {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                step.event.to_string().into(),
                format!("{}", step.points).into(),
                format!("{}", step.goals).into(),
            ],
        ));
    }
    table
}

/// One line per scalar statistic of the report.
pub fn summarise(report: &SeasonReport) -> Vec<String> {
    let club = report.club;
    let championship = &report.championship;
    let first_scorer = report.first_scorer.map(|player| player.name());
    let last_scorer = report.last_scorer.map(|player| player.name());
    let best_striker = report
        .best_striker
        .as_ref()
        .map(|tally| format!("{}: {} goals", tally.player.name(), tally.goals));
    let best_win = report
        .best_win
        .map(|game| game.display_as(club).to_string());
    let worst_loss = report
        .worst_loss
        .map(|game| game.display_as(club).to_string());
    let most_goals_in_half = report
        .most_goals_in_half
        .map(|tally| format!("{} half ({})", tally.half, tally.goals));
    let youngest_scorer = report.youngest_scorer.map(|player| player.name());
    let best_location = report
        .best_location
        .as_ref()
        .map(|location| format!("{} ({} points)", location.location, location.points));

    vec![
        format!("First to score: {}", DisplayOption::from(&first_scorer)),
        format!("Last to score: {}", DisplayOption::from(&last_scorer)),
        format!("Total goals: {}", report.total_goals),
        format!("Best striker: {}", DisplayOption::from(&best_striker)),
        format!("Best win: {}", DisplayOption::from(&best_win)),
        format!("Worst loss: {}", DisplayOption::from(&worst_loss)),
        format!("Total points in {}: {}", championship.name, championship.points),
        format!(
            "Lost against in {}: {}",
            championship.name,
            DisplayList::from(&*championship.lost_against)
        ),
        format!(
            "Drawn against in {}: {}",
            championship.name,
            DisplayList::from(&*championship.drawn_against)
        ),
        format!(
            "Won against in {}: {}",
            championship.name,
            DisplayList::from(&*championship.won_against)
        ),
        format!("Average goals per match: {:.2}", report.average_goals),
        format!("Most goals in: {}", DisplayOption::from(&most_goals_in_half)),
        format!("Youngest scorer: {}", DisplayOption::from(&youngest_scorer)),
        format!("Best location: {}", DisplayOption::from(&best_location)),
    ]
}
