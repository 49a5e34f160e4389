//! 黑白棋共享库
//!
//! 包含:
//! - 棋子颜色、位置、棋盘等核心数据结构
//! - 合法落子生成、翻转与落子执行
//! - 棋盘文本格式 (FEN)

mod board;
mod constants;
mod error;
mod fen;
mod moves;
mod piece;

pub use board::{Board, BoardState};
pub use constants::*;
pub use error::{BoardError, Result};
pub use fen::{Fen, INITIAL_FEN};
pub use moves::MoveGenerator;
pub use piece::{Position, Side};
