/*
 * 走法规则
 *
 * evaluate 只读棋盘，按棋子种类分派到对应的判定函数，合法时返回一个 MovePlan，
 * 由 Board::commit 一次性执行。所有涉及的格子都在判定阶段检查完毕，
 * 不合法的走法不会改变棋盘。
 */
use crate::board::Board;
use crate::piece::{MoveTag, Piece, PieceType};
use crate::position::{Direction, Orientation, Position};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Relocation {
    pub from: Position,
    pub to: Position,
    pub tag: MoveTag,
}

/// 一步走子要做的全部改动
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MovePlan {
    pub relocations: Vec<Relocation>, // 按顺序执行的交换，王车易位时有两个
    pub capture: Option<Position>,    // 被吃棋子所在的格子
}

impl MovePlan {
    fn single(from: Position, to: Position, tag: MoveTag, capture: Option<Position>) -> Self {
        MovePlan {
            relocations: vec![Relocation { from, to, tag }],
            capture,
        }
    }
}

// 将军检测的占位实现，目前只有王车易位会调用
pub fn in_check(_king: Position, _board: &Board) -> bool {
    false
}

pub fn evaluate(board: &Board, from: Position, to: Position) -> Option<MovePlan> {
    if from == to {
        return None;
    }
    let piece = board.piece_at(from)?;
    let target = board.piece_at(to);
    if target.is_some_and(|t| t.belong_to(piece.owner)) {
        return None;
    }
    // 除兵以外，落点上的对方棋子直接被吃
    let capture = target.map(|_| to);

    match piece.kind {
        PieceType::Rook => match from.oriented_to(to) {
            Orientation::Rank if board.empty_between_on_rank(from, to) => {
                Some(MovePlan::single(from, to, MoveTag::Rank, capture))
            }
            Orientation::File if board.empty_between_on_file(from, to) => {
                Some(MovePlan::single(from, to, MoveTag::File, capture))
            }
            _ => None,
        },
        PieceType::Bishop => match from.oriented_to(to) {
            Orientation::Diagonal if board.empty_between_on_diagonal(from, to) => {
                Some(MovePlan::single(from, to, MoveTag::Move, capture))
            }
            _ => None,
        },
        PieceType::Knight => match from.distances(to) {
            (1, 2) | (2, 1) => Some(MovePlan::single(from, to, MoveTag::Move, capture)),
            _ => None,
        },
        PieceType::Queen => match from.oriented_to(to) {
            Orientation::Rank if board.empty_between_on_rank(from, to) => {
                Some(MovePlan::single(from, to, MoveTag::Rank, capture))
            }
            Orientation::File if board.empty_between_on_file(from, to) => {
                Some(MovePlan::single(from, to, MoveTag::File, capture))
            }
            Orientation::Diagonal if board.empty_between_on_diagonal(from, to) => {
                Some(MovePlan::single(from, to, MoveTag::Diagonal, capture))
            }
            _ => None,
        },
        PieceType::King => {
            if from.next_to(to) {
                Some(MovePlan::single(from, to, MoveTag::Move, capture))
            } else {
                castle(board, piece, from, to)
            }
        }
        PieceType::Pawn => pawn(board, piece, from, to),
    }
}

// 王车易位：王和车都没动过，王未被将军，两者之间无子
fn castle(board: &Board, king: &Piece, from: Position, to: Position) -> Option<MovePlan> {
    if king.has_moved() || in_check(from, board) {
        return None;
    }
    if from.distances(to) != (0, 2) || board.piece_at(to).is_some() {
        return None;
    }
    let edge = board.max_pos() as u8;
    let (rook_from, rook_to) = match from.rank_direction(to)? {
        Direction::West => (Position::at(from.row(), 0), to.offset(0, 1)?),
        Direction::East => (Position::at(from.row(), edge), to.offset(0, -1)?),
        _ => return None,
    };
    if rook_from == to {
        return None;
    }
    let rook = board.piece_at(rook_from)?;
    if rook.kind != PieceType::Rook
        || !rook.belong_to(king.owner)
        || rook.has_moved()
        || from.rank_direction(rook_from) != from.rank_direction(to)
        || !board.empty_between_on_rank(from, rook_from)
    {
        return None;
    }
    Some(MovePlan {
        relocations: vec![
            Relocation {
                from,
                to,
                tag: MoveTag::Castle,
            },
            Relocation {
                from: rook_from,
                to: rook_to,
                tag: MoveTag::Castle,
            },
        ],
        capture: None,
    })
}

fn pawn(board: &Board, pawn: &Piece, from: Position, to: Position) -> Option<MovePlan> {
    let forward = board.player_of(pawn.owner).direction;
    if from.file_direction(to) != Some(forward) {
        return None;
    }
    let target = board.piece_at(to);

    if from.next_to(to) {
        return match from.oriented_to(to) {
            Orientation::File if target.is_none() => Some(MovePlan::single(from, to, MoveTag::Move, None)),
            Orientation::Diagonal => match target {
                Some(t) if !t.belong_to(pawn.owner) => Some(MovePlan::single(from, to, MoveTag::Take, Some(to))),
                Some(_) => None,
                None => en_passant(board, pawn, from, to),
            },
            _ => None,
        };
    }

    // 首步可以走两格
    if !pawn.has_moved()
        && from.oriented_to(to) == Orientation::File
        && from.distances(to).0 == 2
        && target.is_none()
        && board.empty_between_on_file(from, to)
    {
        return Some(MovePlan::single(from, to, MoveTag::Double, None));
    }
    None
}

// 吃过路兵：落点为空，起点同一横排、朝落点一侧的格子上是刚走过两格的对方兵
fn en_passant(board: &Board, pawn: &Piece, from: Position, to: Position) -> Option<MovePlan> {
    let side = Position::at(from.row(), to.col());
    let victim = board.piece_at(side)?;
    if victim.kind == PieceType::Pawn
        && !victim.belong_to(pawn.owner)
        && victim.last_move() == Some(MoveTag::Double)
    {
        Some(MovePlan::single(from, to, MoveTag::EnPassant, Some(side)))
    } else {
        None
    }
}
