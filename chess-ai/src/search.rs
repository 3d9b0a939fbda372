//! 搜索引擎
//!
//! 实现 Minimax + Alpha-Beta 剪枝
//!
//! 整个搜索只使用调用方传入的一块棋盘：每个候选走法先执行、递归、再撤销，
//! 递归返回时棋盘与进入时完全一致。

use chess_core::{Board, Move};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::evaluate::{ConstantEvaluator, Evaluator};

/// 默认搜索深度
pub const DEFAULT_SEARCH_DEPTH: u32 = 3;

/// AI 配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// 搜索深度（层数）
    pub max_depth: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

/// 搜索结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// 最佳走法，没有候选走法时为 None
    pub best_move: Option<Move>,
    /// 最佳走法的分值
    pub score: i32,
    /// 搜索的节点数
    pub nodes_searched: u64,
}

/// AI 引擎
pub struct AiEngine<E = ConstantEvaluator> {
    config: AiConfig,
    evaluator: E,
    nodes_searched: u64,
}

impl AiEngine<ConstantEvaluator> {
    /// 创建使用常数评估的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        Self::with_evaluator(config, ConstantEvaluator)
    }
}

impl Default for AiEngine<ConstantEvaluator> {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}

impl<E: Evaluator> AiEngine<E> {
    /// 使用指定评估器创建
    pub fn with_evaluator(config: AiConfig, evaluator: E) -> Self {
        Self {
            config,
            evaluator,
            nodes_searched: 0,
        }
    }

    /// 获取配置
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 按配置的深度搜索最佳走法
    pub fn search(&mut self, board: &mut Board) -> Option<Move> {
        self.find_best_move(board, self.config.max_depth)
    }

    /// 搜索最佳走法
    ///
    /// 没有候选走法时返回 None。同分时保留先生成的走法。
    pub fn find_best_move(&mut self, board: &mut Board, depth: u32) -> Option<Move> {
        self.search_with_score(board, depth).best_move
    }

    /// 搜索最佳走法并返回分值
    ///
    /// 根节点是极大方，每个候选走法用完整窗口搜索对手的极小层。
    /// `depth` 为 0 时按 1 处理。
    pub fn search_with_score(&mut self, board: &mut Board, depth: u32) -> SearchResult {
        self.nodes_searched = 0;
        let child_depth = depth.saturating_sub(1);

        let mut best_move = None;
        let mut best_score = i32::MIN;

        for mv in board.generate_moves() {
            let score = board.with_move(&mv, |board| {
                self.minimax(board, child_depth, i32::MIN, i32::MAX, false)
            });

            // 严格大于：同分保留第一个
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        debug!(
            depth,
            nodes = self.nodes_searched,
            score = best_score,
            best_move = ?best_move.map(|mv| mv.to_string()),
            "搜索完成"
        );

        SearchResult {
            best_move,
            score: best_score,
            nodes_searched: self.nodes_searched,
        }
    }

    /// Minimax + Alpha-Beta
    ///
    /// 只有深度耗尽一个终止条件。没有候选走法的节点直接返回初始累积值
    /// （极大层 `i32::MIN`，极小层 `i32::MAX`）。
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes_searched += 1;

        if depth == 0 {
            return self.evaluator.evaluate(board);
        }

        let moves = board.generate_moves();

        if maximizing {
            let mut max_eval = i32::MIN;
            for mv in moves {
                let eval = board.with_move(&mv, |board| {
                    self.minimax(board, depth - 1, alpha, beta, false)
                });
                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    trace!(depth, alpha, beta, "beta 剪枝");
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = i32::MAX;
            for mv in moves {
                let eval = board.with_move(&mv, |board| {
                    self.minimax(board, depth - 1, alpha, beta, true)
                });
                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    trace!(depth, alpha, beta, "alpha 剪枝");
                    break;
                }
            }
            min_eval
        }
    }

    /// 获取上一次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}
