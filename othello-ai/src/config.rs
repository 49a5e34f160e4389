//! AI 配置

use serde::{Deserialize, Serialize};

/// 默认搜索深度（层）
pub const DEFAULT_DEPTH: u8 = 4;

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// AI 配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    pub max_depth: u8,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                difficulty,
                max_depth: 2,
            },
            Difficulty::Medium => Self {
                difficulty,
                max_depth: DEFAULT_DEPTH,
            },
            Difficulty::Hard => Self {
                difficulty,
                max_depth: 6,
            },
        }
    }

    /// 覆盖搜索深度
    pub fn with_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Medium)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_config() {
        assert_eq!(AiConfig::from_difficulty(Difficulty::Easy).max_depth, 2);
        assert_eq!(AiConfig::from_difficulty(Difficulty::Medium).max_depth, 4);
        assert_eq!(AiConfig::from_difficulty(Difficulty::Hard).max_depth, 6);
        assert_eq!(AiConfig::default().difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_with_depth() {
        let config = AiConfig::from_difficulty(Difficulty::Hard).with_depth(3);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.max_depth, 3);
    }

    #[test]
    fn test_config_from_json() {
        let config: AiConfig =
            serde_json::from_str(r#"{"difficulty":"Easy","max_depth":5}"#).unwrap();
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.max_depth, 5);
    }
}
