//! 搜索引擎
//!
//! 实现固定深度的 Minimax + Alpha-Beta 剪枝

use othello_core::{Board, Position, Side};
use tracing::{debug, trace};

use crate::board::SearchBoard;
use crate::config::{AiConfig, DEFAULT_DEPTH};
use crate::error::SearchError;
use crate::evaluate::Evaluator;

/// 正无穷哨兵值
pub const INFINITY: i32 = i32::MAX;

/// 负无穷哨兵值
pub const NEG_INFINITY: i32 = i32::MIN;

/// 最近一次搜索的统计信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// 访问的节点数（不含根节点）
    pub nodes: u64,
    /// 叶子评估次数
    pub evaluations: u64,
    /// 剪枝次数
    pub cutoffs: u64,
    /// 选中走法的分数
    pub best_score: Option<i32>,
}

/// 搜索引擎
///
/// 每次决策创建一个实例，选出一步棋后丢弃。
pub struct SearchEngine<B: SearchBoard> {
    max_depth: u8,
    board: B,
    side: Side,
    stats: SearchStats,
}

impl<B: SearchBoard> SearchEngine<B> {
    /// 创建新的搜索引擎，深度至少为 1
    pub fn new(max_depth: u8, board: B, side: Side) -> Result<Self, SearchError> {
        if max_depth == 0 {
            return Err(SearchError::InvalidDepth { depth: max_depth });
        }

        Ok(Self {
            max_depth,
            board,
            side,
            stats: SearchStats::default(),
        })
    }

    /// 从配置创建
    pub fn from_config(config: &AiConfig, board: B, side: Side) -> Result<Self, SearchError> {
        Self::new(config.max_depth, board, side)
    }

    /// 搜索最佳走法
    ///
    /// 只有分数严格更高时才替换当前最佳，所以并列时返回枚举顺序中的第一个。
    pub fn select_move(&mut self) -> Result<B::Move, SearchError> {
        self.stats = SearchStats::default();

        let moves = self.board.legal_moves(self.side)?;
        let Some(&first) = moves.first() else {
            return Err(SearchError::NoLegalMoves { side: self.side });
        };

        let mut best_move = first;
        let mut best_score = NEG_INFINITY;

        for mv in moves {
            let mut child = self.board.clone();
            child.apply_move(mv, self.side)?;

            // 根节点的每个候选都用完整窗口搜索
            let score = self.alpha_beta(
                &child,
                self.side.opponent(),
                NEG_INFINITY,
                INFINITY,
                self.max_depth - 1,
                false,
            )?;
            debug!(side = %self.side, ?mv, score, "根节点候选");

            if score > best_score {
                best_score = score;
                best_move = mv;
            }
        }

        self.stats.best_score = Some(best_score);
        debug!(
            side = %self.side,
            depth = self.max_depth,
            ?best_move,
            best_score,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "搜索完成"
        );

        Ok(best_move)
    }

    /// Alpha-Beta 搜索
    ///
    /// `maximizing` 为真时是己方（引擎）走子，否则是对手走子。
    /// 没有合法走法时循环不执行，直接返回初始的无穷值。
    fn alpha_beta(
        &mut self,
        board: &B,
        side: Side,
        mut alpha: i32,
        mut beta: i32,
        depth: u8,
        maximizing: bool,
    ) -> Result<i32, SearchError> {
        self.stats.nodes += 1;

        // 到达深度限制，从引擎一方的视角评估
        if depth == 0 {
            self.stats.evaluations += 1;
            return Ok(Evaluator::evaluate(board, self.side));
        }

        let moves = board.legal_moves(side)?;
        if moves.is_empty() {
            trace!(%side, depth, maximizing, "无子可下");
        }

        let mut best_score = if maximizing { NEG_INFINITY } else { INFINITY };

        for mv in moves {
            let mut child = board.clone();
            child.apply_move(mv, side)?;

            let score = self.alpha_beta(&child, side.opponent(), alpha, beta, depth - 1, !maximizing)?;

            if maximizing {
                best_score = best_score.max(score);
                if best_score >= beta {
                    // Beta 剪枝
                    self.stats.cutoffs += 1;
                    trace!(depth, best_score, beta, "beta 剪枝");
                    return Ok(best_score);
                }
                alpha = alpha.max(best_score);
            } else {
                best_score = best_score.min(score);
                if best_score <= alpha {
                    // Alpha 剪枝
                    self.stats.cutoffs += 1;
                    trace!(depth, best_score, alpha, "alpha 剪枝");
                    return Ok(best_score);
                }
                beta = beta.min(best_score);
            }
        }

        Ok(best_score)
    }

    /// 获取最近一次搜索的统计
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// 搜索深度
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// 引擎执子方
    pub fn side(&self) -> Side {
        self.side
    }
}

/// 以默认深度为指定阵营选出一步棋
pub fn make_move(board: &Board, side: Side) -> Result<Position, SearchError> {
    SearchEngine::new(DEFAULT_DEPTH, board.clone(), side)?.select_move()
}
