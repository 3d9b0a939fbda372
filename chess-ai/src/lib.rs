//! 国际象棋 AI 引擎
//!
//! 包含:
//! - 局面评估（可替换的评估器）
//! - Minimax + Alpha-Beta 搜索

mod evaluate;
mod search;

pub use evaluate::{ConstantEvaluator, Evaluator, MaterialEvaluator};
pub use search::{AiConfig, AiEngine, SearchResult, DEFAULT_SEARCH_DEPTH};
