use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion};

use touchline::analytics::streak::{longest_unbeaten, run_lengths};
use touchline::domain::{Location, Match};

fn season(num_matches: usize) -> Vec<Match> {
    let kickoff = NaiveDate::from_ymd_opt(2023, 8, 1)
        .unwrap()
        .and_hms_opt(20, 0, 0)
        .unwrap();
    (0..num_matches)
        .map(|index| Match {
            date_time: kickoff + Duration::days(index as i64),
            opponent: "Lyon".into(),
            location: Location::Home,
            own_score: (index % 3) as u8,
            opponent_score: (index % 5 % 3) as u8,
            championship: "Ligue 1".into(),
            event: format!("Matchday {}", index + 1),
            goals: vec![],
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    for num_matches in [38, 380] {
        let matches = season(num_matches);
        c.bench_function(&format!("cri_streak_run_lengths_{num_matches}"), |b| {
            b.iter(|| run_lengths(&matches, Match::unbeaten));
        });
        c.bench_function(&format!("cri_streak_longest_unbeaten_{num_matches}"), |b| {
            b.iter(|| longest_unbeaten(&matches));
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
