//! 对局循环
//!
//! 人类玩家和 AI 轮流走子。轮到谁由这里记录，棋盘本身不区分阵营。

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chess_ai::AiEngine;
use chess_core::{Board, GameRecord, Layout, MoveRecord, Mover, Notation};
use tracing::{info, warn};

use crate::config::GameConfig;

/// 输入提示
const PROMPT: &str = "Enter your move (e.g., e2e4): ";

/// 轮到的一方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    /// 人类玩家
    Human,
    /// AI
    Ai,
}

impl Player {
    /// 获取对方
    pub fn opponent(&self) -> Player {
        match self {
            Player::Human => Player::Ai,
            Player::Ai => Player::Human,
        }
    }
}

/// 对局结束的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// 输入结束
    EndOfInput,
    /// 玩家输入 quit
    Quit,
    /// AI 没有可走的棋
    NoMoves,
    /// 达到步数上限
    TurnLimit,
}

impl StopReason {
    /// 写入棋谱和日志的名称
    pub fn as_str(&self) -> &'static str {
        match self {
            StopReason::EndOfInput => "end_of_input",
            StopReason::Quit => "quit",
            StopReason::NoMoves => "no_moves",
            StopReason::TurnLimit => "turn_limit",
        }
    }
}

/// 对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    /// 实际走了多少步
    pub moves_played: u32,
    /// 结束原因
    pub reason: StopReason,
}

/// 单步的结果
enum Turn {
    Moved,
    Retry,
    Stop(StopReason),
}

/// 一局对局
pub struct GameSession<R, W> {
    board: Board,
    engine: AiEngine,
    config: GameConfig,
    current: Player,
    record: GameRecord,
    moves_played: u32,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    /// 创建对局，自定义布局无效时返回错误
    pub fn new(config: GameConfig, input: R, output: W) -> Result<Self> {
        let board = match &config.start_layout {
            Some(layout) => Layout::parse(layout).context("初始布局无效")?,
            None => Board::initial(),
        };

        let (white, black) = if config.human_first {
            (config.human_name.clone(), "AI".to_string())
        } else {
            ("AI".to_string(), config.human_name.clone())
        };
        let mut record = GameRecord::new(white, black);
        record.set_search_depth(config.ai.max_depth);
        record.initial_layout = Layout::to_string(&board);

        let current = if config.human_first {
            Player::Human
        } else {
            Player::Ai
        };

        Ok(Self {
            board,
            engine: AiEngine::new(config.ai),
            config,
            current,
            record,
            moves_played: 0,
            input,
            output,
        })
    }

    /// 当前棋盘
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 当前棋谱
    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    /// 轮到的一方
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// 运行对局直到结束
    pub fn run(&mut self) -> Result<GameOutcome> {
        loop {
            if let Some(limit) = self.config.max_turns {
                if self.moves_played >= limit {
                    return self.finish(StopReason::TurnLimit);
                }
            }

            write!(self.output, "{}", self.board)?;

            let turn = match self.current {
                Player::Human => self.human_turn()?,
                Player::Ai => self.ai_turn()?,
            };

            match turn {
                Turn::Moved => {
                    self.moves_played += 1;
                    self.current = self.current.opponent();
                }
                Turn::Retry => {}
                Turn::Stop(reason) => return self.finish(reason),
            }
        }
    }

    /// 人类走子：读一行，解析并校验
    fn human_turn(&mut self) -> Result<Turn> {
        write!(self.output, "{}", PROMPT)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Turn::Stop(StopReason::EndOfInput));
        }

        let text = line.trim();
        if text.eq_ignore_ascii_case("quit") {
            return Ok(Turn::Stop(StopReason::Quit));
        }

        let played = Notation::parse(text)
            .and_then(|mv| self.board.try_apply_move(&mv).map(|_| mv));

        match played {
            Ok(mv) => {
                info!(%mv, "玩家走子");
                self.record.add_move(MoveRecord::new(&mv, Mover::Human));
                Ok(Turn::Moved)
            }
            Err(err) => {
                warn!(input = text, %err, "走法无效");
                writeln!(self.output, "Invalid move!")?;
                Ok(Turn::Retry)
            }
        }
    }

    /// AI 走子
    fn ai_turn(&mut self) -> Result<Turn> {
        let Some(mv) = self.engine.search(&mut self.board) else {
            warn!("AI 没有可走的棋");
            writeln!(self.output, "AI has no move.")?;
            return Ok(Turn::Stop(StopReason::NoMoves));
        };

        info!(%mv, nodes = self.engine.nodes_searched(), "AI 走子");
        self.board.apply_move(&mv);
        self.record.add_move(MoveRecord::new(&mv, Mover::Ai));
        writeln!(self.output, "AI move: {}", mv)?;
        Ok(Turn::Moved)
    }

    /// 结束对局，需要时保存棋谱
    fn finish(&mut self, reason: StopReason) -> Result<GameOutcome> {
        self.record.finish(reason.as_str());

        if let Some(path) = &self.config.record_path {
            save_record(path, &self.record)?;
            info!(path = ?path, "棋谱已保存");
        }

        Ok(GameOutcome {
            moves_played: self.moves_played,
            reason,
        })
    }
}

/// 写入棋谱文件
fn save_record(path: &Path, record: &GameRecord) -> Result<()> {
    let json_content = record.to_json().context("序列化棋谱失败")?;
    fs::write(path, json_content).with_context(|| format!("写入文件失败: {:?}", path))?;
    Ok(())
}
