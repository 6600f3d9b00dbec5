/*
 * 棋盘坐标与几何关系
 *
 * - row 为横排下标：'8' 对应 0，'1' 对应 7，白方在下
 * - col 为直列下标：'a' 对应 0，'h' 对应 7
 * - 所有几何查询都是纯函数，不依赖棋盘状态
 */
use crate::constant::BOARD_SIZE;
use crate::error::BadPosition;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    row: u8,
    col: u8,
}

/// 两个格子之间的关系
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Orientation {
    Rank,     // 同一横排
    File,     // 同一直列
    Diagonal, // 同一斜线
    None,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::East => "E",
            Direction::West => "W",
        };
        f.write_str(label)
    }
}

impl Position {
    // 坐标越界时返回 None
    pub fn new(row: u8, col: u8) -> Option<Self> {
        let size = BOARD_SIZE as u8;
        if row < size && col < size {
            Some(Position { row, col })
        } else {
            None
        }
    }

    // 仅供已确认在棋盘内的坐标使用
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Position { row, col }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    // 相对偏移，越界时返回 None
    pub fn offset(&self, d_row: i32, d_col: i32) -> Option<Position> {
        let row = u8::try_from(self.row as i32 + d_row).ok()?;
        let col = u8::try_from(self.col as i32 + d_col).ok()?;
        Position::new(row, col)
    }

    // 两格在行、列上的绝对距离
    pub fn distances(&self, other: Position) -> (u8, u8) {
        (self.row.abs_diff(other.row), self.col.abs_diff(other.col))
    }

    // 相邻（包含同一格）
    pub fn next_to(&self, other: Position) -> bool {
        let (dr, dc) = self.distances(other);
        dr <= 1 && dc <= 1
    }

    pub fn oriented_to(&self, other: Position) -> Orientation {
        match self.distances(other) {
            (0, _) => Orientation::Rank,
            (_, 0) => Orientation::File,
            (dr, dc) if dr == dc => Orientation::Diagonal,
            _ => Orientation::None,
        }
    }

    // 沿横排的方向：列下标变小为西，变大为东
    pub fn rank_direction(&self, other: Position) -> Option<Direction> {
        match self.col.cmp(&other.col) {
            std::cmp::Ordering::Greater => Some(Direction::West),
            std::cmp::Ordering::Less => Some(Direction::East),
            std::cmp::Ordering::Equal => None,
        }
    }

    // 沿直列的方向：行下标变小（朝第 8 横排）为北
    pub fn file_direction(&self, other: Position) -> Option<Direction> {
        match self.row.cmp(&other.row) {
            std::cmp::Ordering::Greater => Some(Direction::North),
            std::cmp::Ordering::Less => Some(Direction::South),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl FromStr for Position {
    type Err = BadPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || BadPosition(s.to_owned());
        let &[file, rank] = s.as_bytes() else {
            return Err(bad());
        };
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(bad());
        }
        Ok(Position::at(BOARD_SIZE as u8 - 1 - (rank - b'1'), file - b'a'))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.col) as char,
            (b'1' + (BOARD_SIZE as u8 - 1 - self.row)) as char
        )
    }
}
