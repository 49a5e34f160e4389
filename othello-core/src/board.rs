//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_CELLS, BOARD_SIZE};
use crate::piece::{Position, Side};

/// 棋盘
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// 8x8 棋盘，索引为 row * 8 + col，使用 Vec 以支持 serde
    squares: Vec<Option<Side>>,
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            squares: vec![None; BOARD_CELLS],
        }
    }

    /// 创建初始棋盘（中央四子交叉摆放）
    pub fn initial() -> Self {
        let mut board = Self::empty();
        board.set(Position::new_unchecked(3, 3), Some(Side::White));
        board.set(Position::new_unchecked(3, 4), Some(Side::Black));
        board.set(Position::new_unchecked(4, 3), Some(Side::Black));
        board.set(Position::new_unchecked(4, 4), Some(Side::White));
        board
    }

    /// 获取指定位置的棋子
    pub fn get(&self, pos: Position) -> Option<Side> {
        if pos.is_valid() {
            self.squares[pos.to_index()]
        } else {
            None
        }
    }

    /// 设置指定位置的棋子
    pub fn set(&mut self, pos: Position, side: Option<Side>) {
        if pos.is_valid() {
            self.squares[pos.to_index()] = side;
        }
    }

    /// 统计指定阵营的棋子数
    pub fn count(&self, side: Side) -> usize {
        self.squares.iter().filter(|cell| **cell == Some(side)).count()
    }

    /// 统计空格数
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|cell| cell.is_none()).count()
    }

    /// 获取指定阵营的所有棋子位置
    pub fn discs(&self, side: Side) -> Vec<Position> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Some(side))
            .filter_map(|(index, _)| Position::from_index(index))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let c = match self.get(Position::new_unchecked(row as u8, col as u8)) {
                    Some(side) => side.to_fen_char(),
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// 完整的棋盘状态（包含走子方）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// 棋盘
    pub board: Board,
    /// 当前走子方
    pub current_turn: Side,
}

impl BoardState {
    /// 创建初始状态（黑方先行）
    pub fn initial() -> Self {
        Self {
            board: Board::initial(),
            current_turn: Side::Black,
        }
    }

    /// 从棋盘创建状态
    pub fn from_board(board: Board, current_turn: Side) -> Self {
        Self {
            board,
            current_turn,
        }
    }

    /// 切换走子方（落子后或停一手时调用）
    pub fn switch_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board() {
        let board = Board::initial();

        assert_eq!(board.get(Position::new_unchecked(3, 3)), Some(Side::White));
        assert_eq!(board.get(Position::new_unchecked(3, 4)), Some(Side::Black));
        assert_eq!(board.get(Position::new_unchecked(4, 3)), Some(Side::Black));
        assert_eq!(board.get(Position::new_unchecked(4, 4)), Some(Side::White));

        assert_eq!(board.count(Side::Black), 2);
        assert_eq!(board.count(Side::White), 2);
        assert_eq!(board.empty_count(), 60);
    }

    #[test]
    fn test_set_out_of_range_is_ignored() {
        let mut board = Board::empty();
        board.set(Position::new_unchecked(8, 8), Some(Side::Black));
        assert_eq!(board.count(Side::Black), 0);
        assert_eq!(board.get(Position::new_unchecked(8, 8)), None);
    }

    #[test]
    fn test_discs() {
        let board = Board::initial();
        assert_eq!(
            board.discs(Side::Black),
            vec![Position::new_unchecked(3, 4), Position::new_unchecked(4, 3)]
        );
    }

    #[test]
    fn test_display() {
        let text = Board::initial().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[3], "...WB...");
        assert_eq!(lines[4], "...BW...");
    }

    #[test]
    fn test_switch_turn() {
        let mut state = BoardState::initial();
        assert_eq!(state.current_turn, Side::Black);
        state.switch_turn();
        assert_eq!(state.current_turn, Side::White);
    }

    #[test]
    fn test_state_json() {
        let state = BoardState::initial();
        let json = serde_json::to_string(&state).unwrap();
        let parsed: BoardState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }
}
