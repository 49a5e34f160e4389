//! 引擎配置文件加载

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use othello_ai::AiConfig;
use tracing::info;

/// 从 JSON 文件加载 AI 配置
pub fn load_config(path: &Path) -> Result<AiConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("无法读取配置文件: {:?}", path))?;
    let config: AiConfig = serde_json::from_str(&content)
        .with_context(|| format!("配置文件格式错误: {:?}", path))?;

    info!(?path, difficulty = ?config.difficulty, max_depth = config.max_depth, "已加载配置");
    Ok(config)
}
