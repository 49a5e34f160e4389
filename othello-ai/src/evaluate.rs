//! 局面评估函数

use othello_core::Side;

use crate::board::SearchBoard;

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 子数差评估（`side` 视角，正值对 `side` 有利）
    pub fn evaluate<B: SearchBoard>(board: &B, side: Side) -> i32 {
        Self::count(board, side) - Self::count(board, side.opponent())
    }

    /// 扫描整个棋盘统计指定阵营的棋子数
    pub fn count<B: SearchBoard>(board: &B, side: Side) -> i32 {
        let mut count = 0;
        for row in 0..B::SIZE {
            for col in 0..B::SIZE {
                if board.cell_occupant(row, col) == Some(side) {
                    count += 1;
                }
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_core::{Board, Fen, MoveGenerator, Position};

    #[test]
    fn test_initial_evaluation() {
        let board = Board::initial();
        assert_eq!(Evaluator::evaluate(&board, Side::Black), 0);
        assert_eq!(Evaluator::evaluate(&board, Side::White), 0);
    }

    #[test]
    fn test_count_matches_board() {
        let state = Fen::parse("BW6/8/BWWW4/8/8/8/8/7W B").unwrap();
        assert_eq!(Evaluator::count(&state.board, Side::Black), 2);
        assert_eq!(Evaluator::count(&state.board, Side::White), 5);
        assert_eq!(Evaluator::evaluate(&state.board, Side::Black), -3);
    }

    #[test]
    fn test_evaluation_after_move() {
        let mut board = Board::initial();
        MoveGenerator::apply(&mut board, Position::new_unchecked(2, 3), Side::Black).unwrap();
        // 黑 4 白 1
        assert_eq!(Evaluator::evaluate(&board, Side::Black), 3);
    }

    #[test]
    fn test_symmetry() {
        let fens = [
            "8/8/8/3WB3/3BW3/8/8/8 B",
            "BW6/8/BWWW4/8/8/8/8/7W W",
            "WWWWWWWW/BBBBBBBB/8/8/8/8/8/2B5 B",
        ];
        for fen in fens {
            let board = Fen::parse(fen).unwrap().board;
            assert_eq!(
                Evaluator::evaluate(&board, Side::Black),
                -Evaluator::evaluate(&board, Side::White),
                "评估不对称: {}",
                fen
            );
        }
    }
}
