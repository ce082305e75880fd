use std::io;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::Command;
use clap_complete::Shell;

use crate::application::ui;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Guide;
use crate::domain::services::AppStateProps;

pub fn build() -> Command {
    return Command::new("norma-term")
        .about("Interactive terminal walkthrough of relational database normalization")
        .version(env!("CARGO_PKG_VERSION"))
        .args(vec![
            Arg::new("config-file")
                .long("config-file")
                .help(format!(
                    "Path to configuration file. [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .num_args(1),
            Arg::new("nav-lookahead")
                .long("nav-lookahead")
                .help(format!(
                    "Rows of look-ahead before a section counts as reached by the side navigation. [default: {}]",
                    Config::default(ConfigKey::NavLookahead)
                ))
                .num_args(1),
            Arg::new("reveal-threshold")
                .long("reveal-threshold")
                .help(format!(
                    "Fraction of a block that must be on screen before it fades in. [default: {}]",
                    Config::default(ConfigKey::RevealThreshold)
                ))
                .num_args(1),
        ])
        .subcommand(Command::new("config").about("Print the default configuration file to stdout"))
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .short('s')
                        .long("shell")
                        .help("Which shell to generate completions for.")
                        .required(true)
                        .value_parser(value_parser!(Shell)),
                ),
        );
}

fn setup_tracing() -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let cache_dir = dirs::cache_dir()
        .context("Unable to determine cache directory")?
        .join("norma-term");
    std::fs::create_dir_all(&cache_dir)?;

    let file_appender = tracing_appender::rolling::never(cache_dir, "norma-term.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let mut level = tracing::Level::INFO;
    if cfg!(feature = "dev") {
        level = tracing::Level::DEBUG;
    }

    tracing_subscriber::fmt()
        .json()
        .with_max_level(level)
        .with_writer(non_blocking)
        .init();

    return Ok(guard);
}

pub async fn parse() -> Result<()> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            let shell = subcmd_matches
                .get_one::<Shell>("shell")
                .ok_or_else(|| anyhow!("Shell is required"))?;

            clap_complete::generate(*shell, &mut build(), "norma-term", &mut io::stdout());
        }
        Some(("config", _)) => {
            println!("{}", Config::serialize_default(build()));
        }
        _ => {
            Config::load(vec![&matches]).await?;
            let _guard = setup_tracing()?;

            let nav_lookahead = Config::get(ConfigKey::NavLookahead)
                .parse::<i64>()
                .context("nav-lookahead must be a whole number of rows")?;
            let reveal_threshold = Config::get(ConfigKey::RevealThreshold)
                .parse::<f64>()
                .context("reveal-threshold must be a number between 0 and 1")?;

            tracing::info!(nav_lookahead, reveal_threshold, "starting walkthrough");

            ui::start(AppStateProps {
                guide: Guide::walkthrough(),
                nav_lookahead,
                reveal_threshold,
            })
            .await?;
        }
    }

    return Ok(());
}
