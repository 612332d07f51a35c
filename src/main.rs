mod display;

use anyhow::Context;
use clap::{Parser, Subcommand};
use clash_api::config::{self, Config};
use clash_api::{Client, ClashError, QueryParams};
use display::output::{
    display_error, display_info, display_items_table, display_json, display_success, remote_error,
};
use indicatif::ProgressBar;
use serde_json::Value;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "clash")]
#[command(about = "Query the Clash of Clans API", long_about = None)]
struct Args {
    /// API token (overrides CLASH_API_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Request timeout in seconds (overrides CLASH_API_TIMEOUT, default: 20)
    #[arg(long, global = true, value_parser = parse_timeout_arg)]
    timeout: Option<u64>,

    /// Query parameter forwarded as-is, e.g. -p limit=10 (repeatable)
    #[arg(short = 'p', long = "param", global = true, value_parser = parse_param)]
    params: Vec<(String, String)>,

    /// Print compact JSON without the summary table
    #[arg(long, global = true)]
    raw: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search clans (filters go in --param)
    Clans,
    /// Clan information
    Clan { tag: String },
    /// Clan member list
    ClanMembers { tag: String },
    /// Clan war log
    ClanWarLog { tag: String },
    /// Clan's current war
    ClanCurrentWar { tag: String },
    /// Clan's current war league group
    ClanLeagueGroup { tag: String },
    /// A single clan war league war
    WarLeague { war_tag: String },
    /// Player information
    Player { tag: String },
    /// List leagues
    Leagues,
    /// League information
    League { league_id: String },
    /// League seasons (Legend League only)
    LeagueSeasons { league_id: String },
    /// League season rankings (Legend League only)
    LeagueSeasonRankings { league_id: String, season_id: String },
    /// List locations
    Locations,
    /// Location information
    Location { location_id: String },
    /// Clan rankings for a location
    LocationClanRankings { location_id: String },
    /// Player rankings for a location
    LocationPlayerRankings { location_id: String },
    /// Clan versus rankings for a location
    LocationClanVersusRankings { location_id: String },
    /// Player versus rankings for a location
    LocationPlayerVersusRankings { location_id: String },
}

impl Command {
    fn dispatch(&self, client: &Client, query: &QueryParams) -> Result<Value, ClashError> {
        match self {
            Command::Clans => client.clans(query),
            Command::Clan { tag } => client.clan_information(tag, query),
            Command::ClanMembers { tag } => client.clan_members(tag, query),
            Command::ClanWarLog { tag } => client.clan_war_log(tag, query),
            Command::ClanCurrentWar { tag } => client.clan_current_war(tag, query),
            Command::ClanLeagueGroup { tag } => client.clan_league_group(tag, query),
            Command::WarLeague { war_tag } => client.war_league(war_tag, query),
            Command::Player { tag } => client.player(tag, query),
            Command::Leagues => client.leagues(query),
            Command::League { league_id } => client.league_information(league_id, query),
            Command::LeagueSeasons { league_id } => client.league_seasons(league_id, query),
            Command::LeagueSeasonRankings { league_id, season_id } => {
                client.league_season_rankings(league_id, season_id, query)
            }
            Command::Locations => client.locations(query),
            Command::Location { location_id } => client.location_information(location_id, query),
            Command::LocationClanRankings { location_id } => {
                client.location_clan_rankings(location_id, query)
            }
            Command::LocationPlayerRankings { location_id } => {
                client.location_player_rankings(location_id, query)
            }
            Command::LocationClanVersusRankings { location_id } => {
                client.location_clan_versus_rankings(location_id, query)
            }
            Command::LocationPlayerVersusRankings { location_id } => {
                client.location_player_versus_rankings(location_id, query)
            }
        }
    }
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

fn parse_timeout_arg(raw: &str) -> Result<u64, String> {
    config::parse_timeout(raw).map_err(|e| e.to_string())
}

fn init_tracing(verbose: bool) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(filter) => EnvFilter::new(filter),
        Err(_) if verbose => EnvFilter::new("clash_api=debug"),
        Err(_) => EnvFilter::new("warn"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            display_error(&format!("{:#}", e));
            ExitCode::from(1)
        }
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let config = Config::from_env(args.token).context("could not load configuration")?;
    let timeout = args.timeout.unwrap_or(config.timeout);

    let client = Client::with_timeout(config.token, timeout);
    let query: QueryParams = args.params.into_iter().collect();

    display_info(&format!("Requesting {:?} (timeout {}s)", args.command, timeout));

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Waiting for api.clashofclans.com");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = args.command.dispatch(&client, &query);
    spinner.finish_and_clear();

    let value = result.context("request failed")?;

    if let Some(reason) = remote_error(&value) {
        display_error(&format!("API returned an error: {}", reason));
        display_json(&value, args.raw);
        return Ok(ExitCode::from(2));
    }

    display_success("Response received");
    if !args.raw {
        display_items_table(&value);
    }
    display_json(&value, args.raw);

    Ok(ExitCode::SUCCESS)
}
