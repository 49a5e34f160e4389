//! 黑白棋 AI 引擎
//!
//! 包含:
//! - 棋盘协作接口 (`SearchBoard`)
//! - 子数差评估函数
//! - Minimax + Alpha-Beta 搜索
//! - 引擎配置

mod board;
mod config;
mod error;
mod evaluate;
mod search;

pub use board::SearchBoard;
pub use config::{AiConfig, Difficulty, DEFAULT_DEPTH};
pub use error::SearchError;
pub use evaluate::Evaluator;
pub use search::{make_move, SearchEngine, SearchStats, INFINITY, NEG_INFINITY};
