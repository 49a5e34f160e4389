use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use othello_ai::AiConfig;
use othello_arena::{analyze, load_config, Arena, PlayerKind};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Othello alpha-beta engine arena")]
struct Cli {
    /// Analyze a single position (FEN) and print the selected move
    #[arg(long)]
    fen: Option<String>,

    /// Path to an AiConfig JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search depth in plies (overrides the config)
    #[arg(long)]
    depth: Option<u8>,

    /// Black player
    #[arg(long, value_enum, default_value_t = PlayerKind::Engine)]
    black: PlayerKind,

    /// White player
    #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
    white: PlayerKind,

    /// RNG seed for random players
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("othello_arena=info".parse()?))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AiConfig::default(),
    };
    if let Some(depth) = cli.depth {
        config = config.with_depth(depth);
    }

    if let Some(fen) = &cli.fen {
        let (mv, stats) = analyze(fen, &config)?;
        info!(nodes = stats.nodes, cutoffs = stats.cutoffs, score = ?stats.best_score, "分析完成");
        println!("{}", mv);
        return Ok(());
    }

    info!(black = ?cli.black, white = ?cli.white, depth = config.max_depth, "对局开始");
    let outcome = Arena::new(config, cli.black, cli.white, cli.seed).play()?;

    print!("{}", outcome.final_state.board);
    match outcome.winner() {
        Some(side) => println!("{} wins {}-{}", side, outcome.black, outcome.white),
        None => println!("Draw {}-{}", outcome.black, outcome.white),
    }

    Ok(())
}
