//! 国际象棋核心库
//!
//! 包含:
//! - 棋子、棋盘、位置等核心数据结构
//! - 走法生成（相邻格伪走法）与就地走子/悔棋
//! - 坐标记谱法解析与生成
//! - 棋盘布局字符串
//! - 棋谱格式 (JSON)

mod board;
mod constants;
mod error;
mod layout;
mod moves;
mod notation;
mod piece;
mod record;

pub use board::Board;
pub use constants::*;
pub use error::{ChessError, Result};
pub use layout::Layout;
pub use moves::{Move, MoveGenerator};
pub use notation::Notation;
pub use piece::{Piece, PieceType, Position, Side};
pub use record::{GameMetadata, GameRecord, MoveRecord, Mover};
