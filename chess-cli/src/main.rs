use std::io;
use std::path::Path;

use anyhow::Result;
use chess_cli::{GameConfig, GameSession};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // 初始化日志（写到 stderr，stdout 留给棋盘）
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("chess_cli=info".parse()?))
        .init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => GameConfig::load(Path::new(&path))?,
        None => GameConfig::default(),
    };

    info!(depth = config.ai.max_depth, "国际象棋对局启动");

    let stdin = io::stdin();
    let mut session = GameSession::new(config, stdin.lock(), io::stdout())?;
    let outcome = session.run()?;

    info!(
        moves = outcome.moves_played,
        reason = outcome.reason.as_str(),
        "对局结束"
    );

    Ok(())
}
