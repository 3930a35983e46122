use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use league_draft::analysis::champion::{Character, Tag};
use league_draft::analysis::recommender::DraftRecommender;
use league_draft::analysis::roster::{Roster, ToggleOutcome};
use league_draft::analysis::team_stats::compute_stats;
use league_draft::api::client::DataDragonClient;
use league_draft::cache::CatalogCache;
use league_draft::catalog;
use league_draft::config::Config;
use league_draft::display::output::{
    display_champion_detail, display_draft, display_error, display_info, display_recommendations,
    display_search_results, display_success, display_team_stats, display_warning,
};
use league_draft::error::AppError;
use league_draft::knowledge::KnowledgeBase;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "League Draft")]
#[command(about = "Suggest the next champion pick from synergies, counters and team composition", long_about = None)]
struct Args {
    /// Re-download the champion catalog (ignore cache)
    #[arg(long, global = true)]
    refresh: bool,

    /// Data Dragon patch version, or "latest" (default: DDRAGON_VERSION or 13.24.1).
    /// Offline, "latest" falls back to the newest cached patch
    #[arg(long, global = true)]
    patch: Option<String>,

    /// Catalog language (default: DDRAGON_LANGUAGE or es_ES)
    #[arg(long, global = true)]
    language: Option<String>,

    /// JSON knowledge base replacing the built-in synergy/counter table
    #[arg(long, global = true)]
    knowledge: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank the best next picks for the allied side
    Recommend {
        /// Allied picks, comma separated (ids or names)
        #[arg(short, long, value_delimiter = ',')]
        ally: Vec<String>,

        /// Enemy picks, comma separated (ids or names)
        #[arg(short, long, value_delimiter = ',')]
        enemy: Vec<String>,

        /// Number of suggestions to display (default: 5)
        #[arg(short, long, default_value = "5")]
        top: usize,
    },
    /// Radar profile of a team
    Stats {
        /// Picks, comma separated (ids or names)
        #[arg(short, long, value_delimiter = ',')]
        team: Vec<String>,
    },
    /// Search the catalog by name and role
    Search {
        /// Part of the champion name
        #[arg(default_value = "")]
        query: String,

        /// Role filter (Fighter, Tank, Mage, Assassin, Support, Marksman)
        #[arg(short, long)]
        role: Option<Tag>,
    },
    /// Show one champion with its synergy and counter relations
    Champion {
        name: String,
    },
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "league_draft=debug" } else { "league_draft=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: Args) -> Result<(), AppError> {
    let mut config = Config::from_env()?;
    if let Some(patch) = args.patch {
        config.ddragon_version = patch;
    }
    if let Some(language) = args.language {
        config.ddragon_language = language;
    }
    if let Some(path) = args.knowledge {
        config.knowledge_base_path = Some(path);
    }
    tracing::debug!(?config, "configuration loaded");

    let knowledge = match &config.knowledge_base_path {
        Some(path) => KnowledgeBase::load(path)?,
        None => KnowledgeBase::builtin(),
    };

    let client = DataDragonClient::new();
    let cache_dir = CatalogCache::default_dir();
    if config.ddragon_version.eq_ignore_ascii_case("latest") {
        config.ddragon_version = resolve_latest_version(&client, &cache_dir, &config.ddragon_language)?;
        tracing::debug!(version = %config.ddragon_version, "resolved latest patch");
    }

    let champions = load_catalog(&client, &cache_dir, &config, args.refresh)?;

    match args.command {
        Command::Recommend { ally, enemy, top } => {
            let ally = build_roster(&champions, &ally, config.ally_limit)?;
            let enemy = build_roster(&champions, &enemy, config.enemy_limit)?;

            for pick in ally.characters().iter().filter(|c| enemy.contains(&c.id)) {
                display_warning(&format!("{} is on both sides and will be ignored", pick.name));
            }

            display_draft(ally.characters(), ally.capacity(), enemy.characters(), enemy.capacity());

            let recommender = DraftRecommender::new(&knowledge)
                .with_ally_capacity(config.recommend_ally_capacity)
                .with_max_results(top);
            let recommendations =
                recommender.recommend(&champions, ally.characters(), enemy.characters());

            display_recommendations(&recommendations, &knowledge);
            display_team_stats("Aliados", &compute_stats(ally.characters()));
            display_team_stats("Enemigos", &compute_stats(enemy.characters()));
        }
        Command::Stats { team } => {
            let team = build_roster(&champions, &team, config.ally_limit.max(config.enemy_limit))?;
            display_team_stats(
                &format!("Team ({})", team.characters().iter().map(|c| c.name.as_str()).collect::<Vec<_>>().join(", ")),
                &compute_stats(team.characters()),
            );
        }
        Command::Search { query, role } => {
            let results = catalog::filter(&champions, &query, role);
            display_search_results(&results);
        }
        Command::Champion { name } => {
            let champion = catalog::find(&champions, &name)
                .ok_or_else(|| AppError::UnknownChampion(name.clone()))?;
            let image_url = client.image_url(&config.ddragon_version, &champion.id);
            display_champion_detail(champion, &knowledge, &image_url);
        }
    }

    Ok(())
}

fn build_roster(champions: &[Character], names: &[String], capacity: usize) -> Result<Roster, AppError> {
    let mut roster = Roster::new(capacity);

    for name in names.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
        let champion = catalog::find(champions, name)
            .ok_or_else(|| AppError::UnknownChampion(name.to_string()))?;

        if roster.contains(&champion.id) {
            display_warning(&format!("{} listed twice, keeping one", champion.name));
            continue;
        }

        if roster.toggle(champion) == ToggleOutcome::Rejected {
            return Err(AppError::RosterFull(capacity));
        }
    }

    Ok(roster)
}

fn resolve_latest_version(client: &DataDragonClient, cache_dir: &Path, language: &str) -> Result<String, AppError> {
    match client.get_versions() {
        Ok(versions) => versions
            .into_iter()
            .next()
            .ok_or_else(|| AppError::ConfigError("Data Dragon returned no versions".to_string())),
        Err(e) => match CatalogCache::newest(cache_dir, language) {
            Some(cache) => {
                display_warning(&format!(
                    "Could not look up the latest patch ({}), using cached {}",
                    e, cache.version
                ));
                Ok(cache.version)
            }
            None => Err(e),
        },
    }
}

fn load_catalog(
    client: &DataDragonClient,
    cache_dir: &Path,
    config: &Config,
    refresh: bool,
) -> Result<Vec<Character>, AppError> {
    let version = &config.ddragon_version;
    let language = &config.ddragon_language;

    let cached = match CatalogCache::load(cache_dir, version, language) {
        Ok(cached) => cached,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable catalog cache");
            None
        }
    };

    if let Some(cache) = &cached {
        if !refresh && !cache.is_stale(config.catalog_max_age_hours) {
            tracing::debug!(champions = cache.champions.len(), "using cached catalog");
            return Ok(cache.champions.clone());
        }
    }

    display_info(&format!("Fetching champion catalog {} ({})", version, language));
    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    let fetched = client.get_champions(version, language);
    pb.finish_and_clear();

    match fetched {
        Ok(payload) => {
            let champions = catalog::from_data_dragon(&payload);
            display_success(&format!("Loaded {} champions", champions.len()));

            let cache = CatalogCache::new(version, language, champions);
            if let Err(e) = cache.save(cache_dir) {
                tracing::warn!(error = %e, "could not write catalog cache");
            }
            Ok(cache.champions)
        }
        Err(e) => match cached {
            Some(cache) => {
                display_warning(&format!("Download failed ({}), using cached catalog", e));
                Ok(cache.champions)
            }
            None => Err(e),
        },
    }
}
