use clap::{Parser, Subcommand};
use event_schedule::config::{self, error::ConfigError, Config};
use event_schedule::core::schedule::EventSchedule;
use std::fs;
use tracing_subscriber::EnvFilter;

const APP_VERSION: &str = concat!(
    env!("CARGO_PKG_NAME"),
    " version ",
    env!("CARGO_PKG_VERSION"),
    " (rev:",
    env!("GIT_HASH"),
    ")"
);

#[derive(Debug, Parser)]
#[command(
    name = "event-schedule",
    about = "Renders conference schedule data (days, sessions, authors) into the HTML fragment for the event schedule widget.",
    disable_version_flag = true
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(
        long,
        value_name = "FILE",
        global = true,
        help = "Schedule JSON (array of days). Overrides source.schedule."
    )]
    pub schedule: Option<String>,
    #[arg(
        long,
        value_name = "FILE",
        help = "Authors JSON (object keyed by author id). Overrides source.authors."
    )]
    pub authors: Option<String>,
    #[arg(long, conflicts_with = "no_carousel", help = "Render the day carousel.")]
    pub carousel: bool,
    #[arg(long, help = "Do not render the day carousel.")]
    pub no_carousel: bool,
    #[arg(
        long,
        value_name = "RFC3339",
        help = "Instant used to pick the default day (defaults to now)."
    )]
    pub now: Option<String>,
    #[arg(
        long,
        short = 'o',
        value_name = "FILE",
        help = "Write the fragment to FILE instead of stdout."
    )]
    pub output: Option<String>,
    #[arg(long, short = 'V', help = "Print version")]
    pub version: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(
        name = "slugs",
        about = "Print the anchor id assigned to each session, one '<id>\\t<title>' per line"
    )]
    Slugs,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.version {
        print!("{}", APP_VERSION);
        std::process::exit(0);
    }

    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let schedule = init_event_schedule(cli)?;

    match &cli.command {
        Some(Commands::Slugs) => {
            for (id, title) in schedule.slugs()? {
                println!("{}\t{}", id, title);
            }
        }
        None => {
            let html = schedule.render()?;
            match &cli.output {
                Some(path) => fs::write(path, html)?,
                None => println!("{}", html),
            }
        }
    }

    Ok(())
}

fn init_event_schedule(cli: &Cli) -> anyhow::Result<EventSchedule> {
    let config = match (config::init(), &cli.schedule) {
        (Ok(config), _) => config,
        (Err(err), Some(schedule)) => {
            let no_config_file = matches!(
                err.downcast_ref::<ConfigError>(),
                Some(ConfigError::ConfigFileNotFound(_) | ConfigError::HomeNotSet(_))
            );
            if !no_config_file {
                return Err(err);
            }
            tracing::debug!(error = %err, "no config file, using defaults");
            Config::with_schedule(schedule.clone())
        }
        (Err(err), None) => return Err(err),
    };

    let mut schedule = EventSchedule::from_config(config);
    apply_overrides(cli, schedule.config_mut());

    match &cli.now {
        Some(now) => schedule.with_now(now),
        None => Ok(schedule),
    }
}

fn apply_overrides(cli: &Cli, config: &mut Config) {
    if let Some(schedule) = &cli.schedule {
        config.source.schedule = schedule.clone();
    }
    if let Some(authors) = &cli.authors {
        config.source.authors = Some(authors.clone());
    }
    if cli.carousel {
        config.output.show_carousel = true;
    } else if cli.no_carousel {
        config.output.show_carousel = false;
    }
}
