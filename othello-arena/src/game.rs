//! 对局循环

use anyhow::{Context, Result};
use clap::ValueEnum;
use othello_ai::{AiConfig, SearchEngine, SearchStats};
use othello_core::{BoardState, Fen, MoveGenerator, Position, Side};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// 棋手类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    /// Alpha-Beta 搜索引擎
    Engine,
    /// 随机落子
    Random,
}

/// 对局结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub black: usize,
    pub white: usize,
    /// 实际落子数（不含停一手）
    pub moves: usize,
    pub passes: usize,
    pub final_state: BoardState,
}

impl GameOutcome {
    /// 胜方，平局返回 None
    pub fn winner(&self) -> Option<Side> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Side::Black),
            std::cmp::Ordering::Less => Some(Side::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// 对局
pub struct Arena {
    config: AiConfig,
    black: PlayerKind,
    white: PlayerKind,
    rng: ChaCha8Rng,
}

impl Arena {
    pub fn new(config: AiConfig, black: PlayerKind, white: PlayerKind, seed: u64) -> Self {
        Self {
            config,
            black,
            white,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// 为当前走子方选择一步棋（调用前需确认有棋可下）
    pub fn choose_move(&mut self, state: &BoardState) -> Result<Position> {
        let side = state.current_turn;
        let kind = match side {
            Side::Black => self.black,
            Side::White => self.white,
        };

        match kind {
            PlayerKind::Engine => {
                let mut engine = SearchEngine::from_config(&self.config, state.board.clone(), side)?;
                let mv = engine.select_move()?;
                let stats = engine.stats();
                debug!(%side, %mv, nodes = stats.nodes, cutoffs = stats.cutoffs, "引擎落子");
                Ok(mv)
            }
            PlayerKind::Random => {
                let moves = MoveGenerator::legal_moves(&state.board, side);
                let mv = moves
                    .choose(&mut self.rng)
                    .copied()
                    .with_context(|| format!("{} 没有合法落子", side))?;
                debug!(%side, %mv, "随机落子");
                Ok(mv)
            }
        }
    }

    /// 从初始局面下完整一局
    pub fn play(&mut self) -> Result<GameOutcome> {
        self.play_from(BoardState::initial())
    }

    /// 从指定局面下到终局，无子可下的一方停一手
    pub fn play_from(&mut self, mut state: BoardState) -> Result<GameOutcome> {
        let mut moves = 0;
        let mut passes = 0;

        while !MoveGenerator::is_game_over(&state.board) {
            let side = state.current_turn;

            if !MoveGenerator::can_move(&state.board, side) {
                info!(%side, "无子可下，停一手");
                passes += 1;
                state.switch_turn();
                continue;
            }

            let mv = self.choose_move(&state)?;
            let flipped = MoveGenerator::apply(&mut state.board, mv, side)?;
            moves += 1;
            info!(%side, %mv, flipped, "第 {} 手", moves);
            debug!("\n{}", state.board);

            state.switch_turn();
        }

        let outcome = GameOutcome {
            black: state.board.count(Side::Black),
            white: state.board.count(Side::White),
            moves,
            passes,
            final_state: state,
        };
        info!(
            black = outcome.black,
            white = outcome.white,
            winner = ?outcome.winner(),
            "对局结束"
        );

        Ok(outcome)
    }
}

/// 分析单个 FEN 局面，返回引擎选择的走法
pub fn analyze(fen: &str, config: &AiConfig) -> Result<(Position, SearchStats)> {
    let state = Fen::parse(fen).with_context(|| format!("无法解析 FEN: {}", fen))?;
    let mut engine = SearchEngine::from_config(config, state.board, state.current_turn)?;
    let mv = engine.select_move()?;
    Ok((mv, engine.stats()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_core::BOARD_CELLS;

    #[test]
    fn test_random_game_finishes() {
        let mut arena = Arena::new(AiConfig::default(), PlayerKind::Random, PlayerKind::Random, 7);
        let outcome = arena.play().unwrap();

        assert!(MoveGenerator::is_game_over(&outcome.final_state.board));
        assert!(outcome.black + outcome.white <= BOARD_CELLS);
        // 每步棋增加一个棋子
        assert_eq!(outcome.black + outcome.white, 4 + outcome.moves);
    }

    #[test]
    fn test_seeded_game_is_reproducible() {
        let config = AiConfig::default().with_depth(1);
        let first = Arena::new(config.clone(), PlayerKind::Engine, PlayerKind::Random, 42)
            .play()
            .unwrap();
        let second = Arena::new(config, PlayerKind::Engine, PlayerKind::Random, 42)
            .play()
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_play_from_with_pass() {
        // 白方先无子可下，黑方下完后终局
        let state = Fen::parse("BW6/8/8/8/8/8/8/8 W").unwrap();
        let mut arena = Arena::new(AiConfig::default(), PlayerKind::Engine, PlayerKind::Engine, 0);
        let outcome = arena.play_from(state).unwrap();

        assert_eq!(outcome.passes, 1);
        assert_eq!(outcome.moves, 1);
        assert_eq!(outcome.black, 3);
        assert_eq!(outcome.white, 0);
        assert_eq!(outcome.winner(), Some(Side::Black));
    }

    #[test]
    fn test_analyze() {
        let config = AiConfig::default().with_depth(1);
        let (mv, stats) = analyze("BW6/8/BWWW4/8/8/8/8/8 B", &config).unwrap();
        assert_eq!(mv, Position::new_unchecked(2, 4));
        assert_eq!(stats.best_score, Some(5));
    }

    #[test]
    fn test_analyze_errors() {
        let config = AiConfig::default();
        assert!(analyze("not a fen", &config).is_err());
        assert!(analyze("B7/8/8/8/8/8/8/8 W", &config).is_err());
    }
}
