use crate::constant::LABEL_MAP;
use crate::player::Side;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceType {
    Rook,
    Bishop,
    Knight,
    King,
    Queen,
    Pawn,
}

impl PieceType {
    // 未知的标签返回 None
    pub fn from_label(label: &str) -> Option<PieceType> {
        LABEL_MAP.get(label).copied()
    }

    pub fn label(&self) -> char {
        match self {
            PieceType::Rook => 'R',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
            PieceType::King => 'K',
            PieceType::Queen => 'Q',
            PieceType::Pawn => 'P',
        }
    }
}

/// 走子标记，追加到棋子的历史记录中，用于判定双步、吃过路兵与王车易位
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveTag {
    Rank,
    File,
    Diagonal,
    Move,
    Take,
    Double,
    EnPassant,
    Castle,
}

impl fmt::Display for MoveTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MoveTag::Rank => "rank",
            MoveTag::File => "file",
            MoveTag::Diagonal => "diagonal",
            MoveTag::Move => "move",
            MoveTag::Take => "take",
            MoveTag::Double => "double",
            MoveTag::EnPassant => "En passant",
            MoveTag::Castle => "castle",
        };
        f.write_str(label)
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Piece {
    pub owner: Side,
    pub kind: PieceType,
    pub moves: Vec<MoveTag>,
}

impl Piece {
    pub fn new(kind: PieceType, owner: Side) -> Self {
        Piece {
            owner,
            kind,
            moves: vec![],
        }
    }

    pub fn last_move(&self) -> Option<MoveTag> {
        self.moves.last().copied()
    }

    pub fn has_moved(&self) -> bool {
        !self.moves.is_empty()
    }

    pub fn belong_to(&self, side: Side) -> bool {
        self.owner == side
    }
}

// 例如 "WP"、"BK"
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.owner.initial(), self.kind.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label() {
        assert_eq!(PieceType::from_label("N"), Some(PieceType::Knight));
        assert_eq!(PieceType::from_label("Q"), Some(PieceType::Queen));
        assert_eq!(PieceType::from_label("X"), None);
        assert_eq!(PieceType::from_label("n"), None);
        for label in ["R", "B", "N", "K", "Q", "P"] {
            let kind = PieceType::from_label(label).unwrap();
            assert_eq!(kind.label().to_string(), label);
        }
    }

    #[test]
    fn test_history() {
        let mut pawn = Piece::new(PieceType::Pawn, Side::Black);
        assert_eq!(pawn.last_move(), None);
        assert!(!pawn.has_moved());
        pawn.moves.push(MoveTag::Double);
        pawn.moves.push(MoveTag::EnPassant);
        assert_eq!(pawn.last_move(), Some(MoveTag::EnPassant));
        assert_eq!(pawn.to_string(), "BP");
        assert_eq!(MoveTag::EnPassant.to_string(), "En passant");
    }
}
