//! FEN 格式解析和生成
//!
//! 黑白棋 FEN 格式：
//! `<棋盘> <走子方>`
//!
//! 棋盘从第 0 行开始，行之间用 `/` 分隔，数字表示连续空格，
//! `B` 为黑子，`W` 为白子。走子方为 `B` 或 `W`。
//!
//! 示例：
//! `8/8/8/3WB3/3BW3/8/8/8 B`

use crate::board::{Board, BoardState};
use crate::constants::BOARD_SIZE;
use crate::error::BoardError;
use crate::piece::{Position, Side};

/// 初始局面 FEN
pub const INITIAL_FEN: &str = "8/8/8/3WB3/3BW3/8/8/8 B";

/// FEN 格式处理
pub struct Fen;

impl Fen {
    /// 解析 FEN 字符串为棋盘状态
    pub fn parse(fen: &str) -> Result<BoardState, BoardError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.is_empty() {
            return Err(BoardError::InvalidFen {
                reason: "Empty FEN string".to_string(),
            });
        }

        let board = Self::parse_board(parts[0])?;

        // 解析走子方（默认黑方）
        let current_turn = match parts.get(1) {
            Some(s) => {
                let mut chars = s.chars();
                match (chars.next().and_then(Side::from_fen_char), chars.next()) {
                    (Some(side), None) => side,
                    _ => {
                        return Err(BoardError::InvalidFen {
                            reason: format!("Invalid side to move: {}", s),
                        })
                    }
                }
            }
            None => Side::Black,
        };

        Ok(BoardState::from_board(board, current_turn))
    }

    /// 解析棋盘部分
    fn parse_board(board_str: &str) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        let rows: Vec<&str> = board_str.split('/').collect();

        if rows.len() != BOARD_SIZE {
            return Err(BoardError::InvalidFen {
                reason: format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        for (row_idx, row) in rows.iter().enumerate() {
            let mut col = 0usize;

            for c in row.chars() {
                if col >= BOARD_SIZE {
                    return Err(BoardError::InvalidFen {
                        reason: format!("Row {} has too many columns", row_idx),
                    });
                }

                if let Some(empty_count) = c.to_digit(10) {
                    col += empty_count as usize;
                } else if let Some(side) = Side::from_fen_char(c) {
                    board.set(Position::new_unchecked(row_idx as u8, col as u8), Some(side));
                    col += 1;
                } else {
                    return Err(BoardError::InvalidFen {
                        reason: format!("Invalid disc character: {}", c),
                    });
                }
            }

            if col != BOARD_SIZE {
                return Err(BoardError::InvalidFen {
                    reason: format!("Row {} has {} columns, expected {}", row_idx, col, BOARD_SIZE),
                });
            }
        }

        Ok(board)
    }

    /// 将棋盘状态转换为 FEN 字符串
    pub fn to_string(state: &BoardState) -> String {
        format!(
            "{} {}",
            Self::board_to_string(&state.board),
            state.current_turn.to_fen_char()
        )
    }

    /// 将棋盘转换为 FEN 棋盘部分
    pub fn board_to_string(board: &Board) -> String {
        let mut rows = Vec::with_capacity(BOARD_SIZE);

        for row in 0..BOARD_SIZE {
            let mut row_str = String::new();
            let mut empty_count = 0;

            for col in 0..BOARD_SIZE {
                match board.get(Position::new_unchecked(row as u8, col as u8)) {
                    Some(side) => {
                        if empty_count > 0 {
                            row_str.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        row_str.push(side.to_fen_char());
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                row_str.push_str(&empty_count.to_string());
            }
            rows.push(row_str);
        }

        rows.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_initial() {
        let state = Fen::parse(INITIAL_FEN).unwrap();
        assert_eq!(state, BoardState::initial());
    }

    #[test]
    fn test_to_string_initial() {
        assert_eq!(Fen::to_string(&BoardState::initial()), INITIAL_FEN);
    }

    #[test]
    fn test_parse_side_to_move() {
        let state = Fen::parse("8/8/8/3WB3/3BW3/8/8/8 W").unwrap();
        assert_eq!(state.current_turn, Side::White);

        // 省略走子方时默认黑方
        let state = Fen::parse("8/8/8/3WB3/3BW3/8/8/8").unwrap();
        assert_eq!(state.current_turn, Side::Black);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(Fen::parse(""), Err(BoardError::InvalidFen { .. })));
        assert!(matches!(Fen::parse("8/8/8 B"), Err(BoardError::InvalidFen { .. })));
        assert!(matches!(
            Fen::parse("8/8/8/3WX3/3BW3/8/8/8 B"),
            Err(BoardError::InvalidFen { .. })
        ));
        assert!(matches!(
            Fen::parse("9/8/8/3WB3/3BW3/8/8/8 B"),
            Err(BoardError::InvalidFen { .. })
        ));
        assert!(matches!(
            Fen::parse("7/8/8/3WB3/3BW3/8/8/8 B"),
            Err(BoardError::InvalidFen { .. })
        ));
        assert!(matches!(
            Fen::parse("8/8/8/3WB3/3BW3/8/8/8 X"),
            Err(BoardError::InvalidFen { .. })
        ));
    }

    #[test]
    fn test_mixed_row() {
        let fen = "BW6/8/BWWW4/8/8/8/8/7W W";
        let state = Fen::parse(fen).unwrap();
        assert_eq!(state.board.count(Side::Black), 2);
        assert_eq!(state.board.count(Side::White), 5);
        assert_eq!(state.board.get(Position::new_unchecked(7, 7)), Some(Side::White));
        assert_eq!(Fen::to_string(&state), fen);
    }
}
