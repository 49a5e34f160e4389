//! 走法生成和执行
//!
//! 黑白棋的走法就是落子位置，合法落子必须至少夹住一枚对方棋子。

use crate::board::Board;
use crate::constants::{BOARD_SIZE, DIRECTIONS};
use crate::error::{BoardError, Result};
use crate::piece::{Position, Side};

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成指定阵营的所有合法落子，按行优先顺序（(0, 0) 最先）
    pub fn legal_moves(board: &Board, side: Side) -> Vec<Position> {
        let mut moves = Vec::with_capacity(32);

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Position::new_unchecked(row as u8, col as u8);
                if Self::is_legal(board, pos, side) {
                    moves.push(pos);
                }
            }
        }

        moves
    }

    /// 检查落子是否合法
    pub fn is_legal(board: &Board, pos: Position, side: Side) -> bool {
        pos.is_valid()
            && board.get(pos).is_none()
            && DIRECTIONS
                .iter()
                .any(|&(dr, dc)| Self::count_in_direction(board, pos, side, dr, dc) > 0)
    }

    /// 获取落子后会被翻转的所有棋子
    pub fn flips(board: &Board, pos: Position, side: Side) -> Vec<Position> {
        let mut flipped = Vec::new();
        if !pos.is_valid() || board.get(pos).is_some() {
            return flipped;
        }

        for &(dr, dc) in DIRECTIONS.iter() {
            let count = Self::count_in_direction(board, pos, side, dr, dc);
            let mut current = pos;
            for _ in 0..count {
                // count > 0 保证沿途格子都在棋盘内
                match current.offset(dr, dc) {
                    Some(next) => {
                        flipped.push(next);
                        current = next;
                    }
                    None => break,
                }
            }
        }

        flipped
    }

    /// 执行落子（放置棋子并翻转），返回翻转的棋子数
    pub fn apply(board: &mut Board, pos: Position, side: Side) -> Result<usize> {
        if !pos.is_valid() {
            return Err(BoardError::InvalidPosition {
                row: pos.row,
                col: pos.col,
            });
        }
        if board.get(pos).is_some() {
            return Err(BoardError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }

        let flipped = Self::flips(board, pos, side);
        if flipped.is_empty() {
            return Err(BoardError::IllegalMove {
                row: pos.row,
                col: pos.col,
                side,
            });
        }

        board.set(pos, Some(side));
        for target in &flipped {
            board.set(*target, Some(side));
        }

        Ok(flipped.len())
    }

    /// 指定阵营是否有合法落子
    pub fn can_move(board: &Board, side: Side) -> bool {
        (0..BOARD_SIZE * BOARD_SIZE)
            .filter_map(Position::from_index)
            .any(|pos| Self::is_legal(board, pos, side))
    }

    /// 双方都无子可下时对局结束
    pub fn is_game_over(board: &Board) -> bool {
        !Self::can_move(board, Side::Black) && !Self::can_move(board, Side::White)
    }

    /// 沿一个方向数出可被夹住的对方棋子数（没有己方棋子收尾则为 0）
    fn count_in_direction(board: &Board, pos: Position, side: Side, dr: i8, dc: i8) -> usize {
        let opponent = side.opponent();
        let mut count = 0;
        let mut current = pos;

        while let Some(next) = current.offset(dr, dc) {
            match board.get(next) {
                Some(s) if s == opponent => count += 1,
                Some(_) => return count,
                None => return 0,
            }
            current = next;
        }

        0
    }
}
