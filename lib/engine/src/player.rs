use crate::piece::Piece;
use crate::position::Direction;
use std::fmt;

/// 棋子所属方，棋子只保存这个标识，不持有 Player 的引用
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn index(&self) -> usize {
        if self == &Side::White { 0 } else { 1 }
    }
    pub fn initial(&self) -> char {
        if self == &Side::White { 'W' } else { 'B' }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Player {
    pub name: String,
    pub side: Side,
    pub direction: Direction, // 兵前进的方向
    pub graveyard: Vec<Piece>,
}

impl Player {
    pub fn new(side: Side, direction: Direction) -> Self {
        let name = match side {
            Side::White => "White",
            Side::Black => "Black",
        };
        Player {
            name: name.to_owned(),
            side,
            direction,
            graveyard: vec![],
        }
    }

    // 被吃掉的棋子只追加，不会移除
    pub fn bury(&mut self, piece: Piece) {
        self.graveyard.push(piece);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lost: Vec<String> = self.graveyard.iter().map(|p| p.to_string()).collect();
        write!(
            f,
            "{} ({}) graveyard: [{}]",
            self.name,
            self.direction,
            lost.join(" ")
        )
    }
}
