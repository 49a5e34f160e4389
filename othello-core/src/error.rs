//! 错误类型定义

use thiserror::Error;

use crate::piece::Side;

/// 棋盘规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// 坐标超出棋盘
    #[error("Invalid position: ({row}, {col})")]
    InvalidPosition { row: u8, col: u8 },

    /// 目标格子已有棋子
    #[error("Cell ({row}, {col}) is already occupied")]
    CellOccupied { row: u8, col: u8 },

    /// 落子不能翻转任何对方棋子
    #[error("Illegal move for {side}: ({row}, {col}) flips no discs")]
    IllegalMove { row: u8, col: u8, side: Side },

    /// 无效的 FEN 字符串
    #[error("Invalid FEN string: {reason}")]
    InvalidFen { reason: String },
}

/// 棋盘操作结果类型
pub type Result<T> = std::result::Result<T, BoardError>;
