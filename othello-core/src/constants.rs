//! 棋盘常量定义

/// 棋盘边长（行数与列数相同）
pub const BOARD_SIZE: usize = 8;

/// 棋盘格子总数
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// 八个方向的偏移量 (行, 列)
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
