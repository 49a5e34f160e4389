//! 黑白棋对局驱动
//!
//! 搜索核心之外的外围：配置加载、对局循环（含停一手）和单局面分析。

pub mod config;
pub mod game;

pub use config::load_config;
pub use game::{analyze, Arena, GameOutcome, PlayerKind};
