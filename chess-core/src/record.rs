//! 棋谱记录格式
//!
//! 支持 JSON 格式的棋谱存储

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::INITIAL_LAYOUT;
use crate::moves::Move;
use crate::notation::Notation;

/// 棋谱版本
pub const RECORD_VERSION: &str = "1.0";

/// 走棋的一方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mover {
    /// 人类玩家
    Human,
    /// AI
    Ai,
}

/// 游戏元数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMetadata {
    /// 白方玩家名
    pub white_player: String,
    /// 黑方玩家名
    pub black_player: String,
    /// 游戏日期
    pub date: String,
    /// AI 搜索深度
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_depth: Option<u32>,
    /// 结束原因
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination: Option<String>,
    /// 结束时间
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

/// 走法记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 起始位置 [x, y]
    pub from: [i8; 2],
    /// 目标位置 [x, y]
    pub to: [i8; 2],
    /// 坐标记谱
    pub notation: String,
    /// 走棋方
    pub by: Mover,
}

impl MoveRecord {
    /// 创建新的走法记录
    pub fn new(mv: &Move, by: Mover) -> Self {
        Self {
            from: [mv.from.x, mv.from.y],
            to: [mv.to.x, mv.to.y],
            notation: Notation::to_algebraic(mv).unwrap_or_default(),
            by,
        }
    }
}

/// 完整的棋谱记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// 版本号
    pub version: String,
    /// 元数据
    pub metadata: GameMetadata,
    /// 初始布局
    pub initial_layout: String,
    /// 走法列表
    pub moves: Vec<MoveRecord>,
}

impl GameRecord {
    /// 创建新的棋谱记录
    pub fn new(white_player: String, black_player: String) -> Self {
        Self {
            version: RECORD_VERSION.to_string(),
            metadata: GameMetadata {
                white_player,
                black_player,
                date: Utc::now().format("%Y-%m-%d").to_string(),
                search_depth: None,
                termination: None,
                finished_at: None,
            },
            initial_layout: INITIAL_LAYOUT.to_string(),
            moves: Vec::new(),
        }
    }

    /// 设置 AI 搜索深度
    pub fn set_search_depth(&mut self, depth: u32) {
        self.metadata.search_depth = Some(depth);
    }

    /// 添加走法
    pub fn add_move(&mut self, mv: MoveRecord) {
        self.moves.push(mv);
    }

    /// 标记对局结束
    pub fn finish(&mut self, termination: &str) {
        self.metadata.termination = Some(termination.to_string());
        self.metadata.finished_at = Some(Utc::now());
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
