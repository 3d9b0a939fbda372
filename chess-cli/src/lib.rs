//! 国际象棋终端对局
//!
//! 包含:
//! - 对局配置（JSON 文件）
//! - 人机轮流走子的对局循环
//! - 棋谱保存

pub mod config;
pub mod game;

pub use config::GameConfig;
pub use game::{GameOutcome, GameSession, Player, StopReason};
