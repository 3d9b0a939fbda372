//! 棋局评估函数

use chess_core::{Board, Side};

/// 评估器
///
/// 给叶子局面打分，正值对极大方有利。搜索引擎只通过这个 trait 使用评估，
/// 更换评估器不需要改动搜索。
pub trait Evaluator {
    /// 评估局面
    fn evaluate(&self, board: &Board) -> i32;
}

/// 常数评估器，任何局面都返回 0
///
/// 所有叶子同分，搜索结果完全由走法顺序和严格比较决定。
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantEvaluator;

impl Evaluator for ConstantEvaluator {
    fn evaluate(&self, _board: &Board) -> i32 {
        0
    }
}

/// 子力评估器：己方子力减对方子力
///
/// 搜索根节点总是极大方，所以 `side` 应当是 AI 执的一方。
/// 默认站在白方视角。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialEvaluator {
    side: Side,
}

impl MaterialEvaluator {
    /// 以 `side` 为极大方创建
    pub const fn new(side: Side) -> Self {
        Self { side }
    }

    /// 极大方
    pub fn side(&self) -> Side {
        self.side
    }

    fn material(board: &Board, side: Side) -> i32 {
        board
            .all_pieces()
            .into_iter()
            .filter(|(_, piece)| piece.side == side)
            .map(|(_, piece)| piece.value())
            .sum()
    }
}

impl Default for MaterialEvaluator {
    fn default() -> Self {
        Self::new(Side::White)
    }
}

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, board: &Board) -> i32 {
        Self::material(board, self.side) - Self::material(board, self.side.opponent())
    }
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    fn evaluate(&self, board: &Board) -> i32 {
        (**self).evaluate(board)
    }
}
