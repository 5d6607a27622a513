use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use touchline::config::Config;
use touchline::file;
use touchline::file::ReadJsonFile;
use touchline::print;
use touchline::report::SeasonReport;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// roster file, one `first_name,last_name,dob,type` record per line
    players: PathBuf,

    /// match file, one `date_time,opponent,location,own,opponent,championship,event[,goals]` record per line
    matches: PathBuf,

    /// JSON config file
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// championship to report points, opponents and evolution for
    #[clap(short = 'l', long)]
    championship: Option<String>,

    /// number of strikers to rank
    #[clap(short = 'n', long)]
    top: Option<usize>,

    /// club name used when displaying matches
    #[clap(long)]
    club: Option<String>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.top == Some(0) {
            bail!("at least one striker must be ranked");
        }
        Ok(())
    }

    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            None => Config::default(),
            Some(path) => {
                debug!("loading config from {}", path.display());
                Config::read_json_file(path)?
            }
        };
        if let Some(championship) = &self.championship {
            config.championship = championship.clone();
        }
        if let Some(top) = self.top {
            config.top_strikers = top;
        }
        if let Some(club) = &self.club {
            config.club = club.clone();
        }
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");
    let config = args.config()?;
    debug!("config: {config:?}");

    let start_time = Instant::now();
    let season = file::read_season(&args.players, &args.matches)?;
    let championship = season.championship(&config.championship);
    let elapsed = start_time.elapsed();
    info!(
        "loaded season of {} matches ({} in {}) in {}s",
        season.len(),
        championship.len(),
        config.championship,
        elapsed.as_millis() as f64 / 1_000.
    );
    debug!("championships: {:?}", season.championships());

    let report = SeasonReport::compute(&season, &championship, &config);
    for line in print::summarise(&report) {
        info!("{line}");
    }
    info!(
        "top {} strikers:\n{}",
        config.top_strikers,
        Console::default().render(&print::tabulate_strikers(&report.top_strikers))
    );
    match &report.championship.unbeaten {
        None => info!("no unbeaten run in {}", config.championship),
        Some(unbeaten) => info!(
            "longest unbeaten run in {} ({} matches):\n{}",
            config.championship,
            unbeaten.run.len,
            Console::default().render(&print::tabulate_run(unbeaten, &config.club))
        ),
    }
    match &report.unbeaten {
        None => info!("no unbeaten run across competitions"),
        Some(unbeaten) => info!(
            "longest unbeaten run across competitions ({} matches):\n{}",
            unbeaten.run.len,
            Console::default().render(&print::tabulate_run(unbeaten, &config.club))
        ),
    }
    info!(
        "{} evolution:\n{}",
        config.championship,
        Console::default().render(&print::tabulate_evolution(&report.championship.evolution))
    );

    Ok(())
}
