//! Command-line driver: fights one encounter from a data directory.
mod presentation;

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use battle_content::ContentFactory;
use battle_core::{
    AutoBattle, BattleEngine, BattleEnv, EncounterMode, PcgRng, Session, TurnChoice,
    TurnController, Unit,
};
use clap::Parser;

/// Fight one dungeon encounter and print the battle report
#[derive(Parser)]
#[command(name = "dungeon-battle")]
#[command(about = "Run a turn-based dungeon encounter", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding config.toml, floors/, players/, actions/, items/ and hostiles/
    #[arg(short, long, value_name = "DIR", default_value = "crates/game/content/data")]
    data_dir: PathBuf,

    /// Floor to fight on (file stem under floors/)
    #[arg(short, long, default_value = "cellar")]
    floor: String,

    /// Explorer to fight with (file stem under players/)
    #[arg(short, long, default_value = "aldo")]
    player: String,

    /// Encounter seed; the same seed replays the same battle
    #[arg(short, long)]
    seed: Option<u64>,

    /// Kind of encounter
    #[arg(short, long, value_enum, default_value = "monster")]
    mode: Mode,

    /// Try to flee whenever the explorer is in a critical state
    #[arg(long)]
    flee_when_critical: bool,

    /// Print the full turn log instead of the summary only
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Mode {
    /// A random party of regular monsters
    Monster,
    /// The floor boss
    Boss,
}

impl From<Mode> for EncounterMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Monster => EncounterMode::Monster,
            Mode::Boss => EncounterMode::Boss,
        }
    }
}

/// Flees while critical, fights otherwise.
struct Cautious;

impl TurnController for Cautious {
    fn choose(&mut self, player: &Unit, _party: &[Unit]) -> TurnChoice {
        if player.is_critical() {
            TurnChoice::Flee
        } else {
            TurnChoice::Fight
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let factory = ContentFactory::new(&cli.data_dir);
    let config = factory.load_config().context("loading battle config")?;
    let floor = factory
        .load_floor(&cli.floor)
        .with_context(|| format!("loading floor '{}'", cli.floor))?;
    let mut player = factory
        .load_player(&cli.player)
        .with_context(|| format!("loading player '{}'", cli.player))?;

    let seed = cli.seed.unwrap_or_else(clock_seed);
    tracing::info!("floor {} (danger {}), seed {}", cli.floor, floor.danger(), seed);

    let rng = PcgRng;
    let mut controller: Box<dyn TurnController> = if cli.flee_when_critical {
        Box::new(Cautious)
    } else {
        Box::new(AutoBattle)
    };

    let report = {
        let mut engine = BattleEngine::new(
            Session::new(floor, config, seed),
            BattleEnv::new(&factory, &rng),
            &mut player,
        );
        let report = engine
            .run(cli.mode.into(), controller.as_mut())
            .context("running the encounter")?;
        presentation::print_report(&engine, &report, cli.verbose);
        report
    };

    presentation::print_player(&player, report.rewards.as_ref());
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
