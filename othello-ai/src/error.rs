//! 搜索错误类型

use othello_core::{BoardError, Side};
use thiserror::Error;

/// 搜索引擎错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// 搜索深度必须至少为 1
    #[error("Invalid search depth: {depth} (must be at least 1)")]
    InvalidDepth { depth: u8 },

    /// 根局面没有合法走法，调用方应先判断是否需要停一手
    #[error("No legal moves available for {side}")]
    NoLegalMoves { side: Side },

    /// 棋盘错误，原样向上传递
    #[error("Board error: {0}")]
    Board(#[from] BoardError),
}
