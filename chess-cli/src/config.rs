//! 对局配置
//!
//! 从 JSON 文件读取，缺省字段使用默认值

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chess_ai::AiConfig;
use serde::{Deserialize, Serialize};

/// 对局配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// AI 配置
    pub ai: AiConfig,
    /// 人类玩家先走
    pub human_first: bool,
    /// 人类玩家名称（写入棋谱）
    pub human_name: String,
    /// 最多走多少步后结束，None 为不限制
    pub max_turns: Option<u32>,
    /// 自定义初始布局，None 为标准开局
    pub start_layout: Option<String>,
    /// 对局结束后保存棋谱的路径
    pub record_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ai: AiConfig::default(),
            human_first: true,
            human_name: "玩家".to_string(),
            max_turns: None,
            start_layout: None,
            record_path: None,
        }
    }
}

impl GameConfig {
    /// 从 JSON 文件加载
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {:?}", path))?;
        Self::from_json(&content).with_context(|| format!("解析配置文件失败: {:?}", path))
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
