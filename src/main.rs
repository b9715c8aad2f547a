use clap::Parser;
use grid_pursuit::config::DEFAULT_CONFIG_PATH;
use grid_pursuit::display::{render_board, DisplayState};
use grid_pursuit::selfplay::run_selfplay;
use grid_pursuit::{Game, GameConfig, GameStats};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "grid-pursuit", about = "One evader, two pursuers, two goals")]
struct Args {
    /// JSON config file (falls back to defaults when missing)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    max_turns: Option<u32>,

    #[arg(long)]
    settle_ms: Option<u64>,

    #[arg(long)]
    pause_ms: Option<u64>,

    /// Don't draw the board every turn
    #[arg(long, short)]
    quiet: bool,

    /// Play this many headless games and report aggregate stats
    #[arg(long)]
    games: Option<usize>,

    /// Print final stats as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("grid_pursuit=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = GameConfig::load_or_default(&args.config);
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(max_turns) = args.max_turns {
        config.max_turns = max_turns;
    }
    if let Some(settle_ms) = args.settle_ms {
        config.settle_ms = settle_ms;
    }
    if let Some(pause_ms) = args.pause_ms {
        config.turn_pause_ms = pause_ms;
    }
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "using seed");

    if let Some(games) = args.games {
        let stats = run_selfplay(&config, seed, games).await?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            println!("{}", stats);
        }
        return Ok(());
    }

    let game = Game::new(config, seed)?;
    let quiet = args.quiet;

    if !quiet {
        let state = DisplayState {
            status_msg: Some("Starting...".to_string()),
            ..DisplayState::default()
        };
        render_board(&game.board().snapshot(), &state)?;
    }

    let mut render_error = None;
    let report = game
        .play(|turn, snapshot| {
            if quiet || render_error.is_some() {
                return;
            }
            let state = DisplayState {
                status_msg: Some(format!("Turn {}", turn)),
                ..DisplayState::default()
            };
            if let Err(e) = render_board(snapshot, &state) {
                render_error = Some(e);
            }
        })
        .await?;
    if let Some(e) = render_error {
        return Err(e.into());
    }

    let stats = GameStats::from_report(&report);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", stats);
    }

    Ok(())
}
