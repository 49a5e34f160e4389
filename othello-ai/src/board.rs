//! 搜索所需的棋盘接口
//!
//! 搜索引擎不关心棋盘如何存储、规则如何判定，只通过这三个操作访问局面。

use std::fmt::Debug;

use othello_core::{Board, BoardError, MoveGenerator, Position, Side, BOARD_SIZE};

/// 搜索引擎使用的棋盘协作接口
///
/// 每个搜索分支都会 `clone` 一份局面再落子，因此实现者可以在
/// `apply_move` 中直接修改自身。
pub trait SearchBoard: Clone {
    /// 走法，引擎只会复制和比较它
    type Move: Copy + PartialEq + Debug;

    /// 棋盘边长，评估时扫描 `SIZE x SIZE` 个格子
    const SIZE: usize;

    /// 指定阵营的合法走法，顺序必须确定（并列最优时取第一个）
    fn legal_moves(&self, side: Side) -> Result<Vec<Self::Move>, BoardError>;

    /// 为指定阵营执行走法
    fn apply_move(&mut self, mv: Self::Move, side: Side) -> Result<(), BoardError>;

    /// 查询格子上的棋子
    fn cell_occupant(&self, row: usize, col: usize) -> Option<Side>;
}

impl SearchBoard for Board {
    type Move = Position;

    const SIZE: usize = BOARD_SIZE;

    fn legal_moves(&self, side: Side) -> Result<Vec<Position>, BoardError> {
        Ok(MoveGenerator::legal_moves(self, side))
    }

    fn apply_move(&mut self, mv: Position, side: Side) -> Result<(), BoardError> {
        MoveGenerator::apply(self, mv, side).map(|_| ())
    }

    fn cell_occupant(&self, row: usize, col: usize) -> Option<Side> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        self.get(Position::new_unchecked(row as u8, col as u8))
    }
}
