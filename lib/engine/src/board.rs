/*
 * 详细中文注释 - 国际象棋棋盘模块
 *
 * 设计要点
 * - 棋盘为 8x8，白方在下（第 1、2 横排），黑方在上
 * - 每个格子至多一个棋子，Board 是所有棋子的唯一所有者
 * - 两个 Player 由 Board 持有；棋子通过 Side 标识归属，不形成引用环
 * - 被吃掉的棋子从格子中移出，整体追加到其所属玩家的 graveyard
 *
 * 主要功能
 * - 初始化标准开局、按坐标字符串摆放棋子
 * - 路径检查：横排 / 直列 / 斜线上两格之间是否为空
 * - 交换、移除两个原语，以及按 MovePlan 一次性提交整步走子
 * - 文本渲染
 */
use crate::constant::{BACK_RANK, BOARD_SIZE};
use crate::error::BadPosition;
use crate::piece::{MoveTag, Piece, PieceType};
use crate::player::{Player, Side};
use crate::position::{Direction, Position};
use crate::rules::MovePlan;
use std::fmt;
use tracing::info;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    // squares[row][col]，row 0 为第 8 横排
    pub(crate) squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    pub(crate) players: [Player; 2],
}

impl Default for Board {
    fn default() -> Self {
        Board::init()
    }
}

impl Board {
    // 没有任何棋子的棋盘，白方向北，黑方向南
    pub fn empty() -> Self {
        Board {
            squares: std::array::from_fn(|_| std::array::from_fn(|_| None)),
            players: [
                Player::new(Side::White, Direction::North),
                Player::new(Side::Black, Direction::South),
            ],
        }
    }

    // 标准开局局面
    pub fn init() -> Self {
        let mut board = Board::empty();
        let white_home = BOARD_SIZE - 1;
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board.squares[white_home][col] = Some(Piece::new(*kind, Side::White));
            board.squares[white_home - 1][col] = Some(Piece::new(PieceType::Pawn, Side::White));
            board.squares[0][col] = Some(Piece::new(*kind, Side::Black));
            board.squares[1][col] = Some(Piece::new(PieceType::Pawn, Side::Black));
        }
        board
    }

    pub fn max_pos(&self) -> usize {
        BOARD_SIZE - 1
    }

    // 按坐标字符串摆放棋子；未知的棋子标签会让该格为空
    pub fn assign_piece(&mut self, pos: &str, label: &str, side: Side) -> Result<(), BadPosition> {
        let pos: Position = pos.parse()?;
        let piece = PieceType::from_label(label).map(|kind| Piece::new(kind, side));
        self.set_piece(pos, piece);
        Ok(())
    }

    fn cell_mut(&mut self, pos: Position) -> &mut Option<Piece> {
        &mut self.squares[pos.row() as usize][pos.col() as usize]
    }

    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.squares[pos.row() as usize][pos.col() as usize].as_ref()
    }

    pub fn piece_at_str(&self, pos: &str) -> Option<&Piece> {
        let pos: Position = pos.parse().ok()?;
        self.piece_at(pos)
    }

    fn piece_at_mut(&mut self, pos: Position) -> Option<&mut Piece> {
        self.cell_mut(pos).as_mut()
    }

    pub fn set_piece(&mut self, pos: Position, piece: Option<Piece>) {
        *self.cell_mut(pos) = piece;
    }

    // 只读视图：棋盘格子与两位玩家
    pub fn squares(&self) -> &[[Option<Piece>; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn player_of(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    // 同一直列上两格之间（不含两端）是否全空
    pub fn empty_between_on_file(&self, a: Position, b: Position) -> bool {
        let (lo, hi) = (a.row().min(b.row()), a.row().max(b.row()));
        (lo + 1..hi).all(|row| self.piece_at(Position::at(row, a.col())).is_none())
    }

    // 同一横排上两格之间（不含两端）是否全空
    pub fn empty_between_on_rank(&self, a: Position, b: Position) -> bool {
        let (lo, hi) = (a.col().min(b.col()), a.col().max(b.col()));
        (lo + 1..hi).all(|col| self.piece_at(Position::at(a.row(), col)).is_none())
    }

    // 调用方需保证 a、b 在同一斜线上
    pub fn empty_between_on_diagonal(&self, a: Position, b: Position) -> bool {
        let d_row = if b.row() > a.row() { 1 } else { -1 };
        let d_col = if b.col() > a.col() { 1 } else { -1 };
        let steps = a.row().abs_diff(b.row()) as i32;
        (1..steps).all(|i| match a.offset(d_row * i, d_col * i) {
            Some(pos) => self.piece_at(pos).is_none(),
            None => true,
        })
    }

    // 先给 a 上的棋子记下标记，再交换两格内容
    pub fn swap(&mut self, a: Position, b: Position, tag: MoveTag) {
        if let Some(piece) = self.piece_at_mut(a) {
            piece.moves.push(tag);
        }
        let moving = self.cell_mut(a).take();
        let other = std::mem::replace(self.cell_mut(b), moving);
        *self.cell_mut(a) = other;
    }

    pub fn remove_at(&mut self, pos: Position) -> Option<Piece> {
        self.cell_mut(pos).take()
    }

    // 把被吃的棋子交给其所属玩家的 graveyard
    pub fn bury(&mut self, piece: Piece) {
        let owner = piece.owner;
        info!("{} lost {}", self.players[owner.index()].name, piece);
        self.players[owner.index()].bury(piece);
    }

    // 一次性提交已判定合法的走子：先移出被吃的棋子并入 graveyard，
    // 再按顺序交换，保证每次交换的落点都是空格
    pub fn commit(&mut self, plan: &MovePlan) -> Option<PieceType> {
        let captured = plan.capture.and_then(|pos| self.remove_at(pos));
        let kind = captured.as_ref().map(|p| p.kind);
        if let Some(piece) = captured {
            self.bury(piece);
        }
        for r in &plan.relocations {
            self.swap(r.from, r.to, r.tag);
        }
        kind
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.squares.iter().enumerate() {
            for (j, square) in row.iter().enumerate() {
                match square {
                    Some(piece) => write!(f, "|{}", piece)?,
                    None if i % 2 == j % 2 => f.write_str("|  ")?,
                    None => f.write_str("|**")?,
                }
            }
            f.write_str("|\n")?;
            for j in 0..row.len() {
                f.write_str(if i % 2 == j % 2 { "|__" } else { "|**" })?;
            }
            f.write_str("|\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Relocation;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_init() {
        let board = Board::init();
        assert_eq!(board.piece_at_str("e1").map(|p| p.to_string()), Some("WK".into()));
        assert_eq!(board.piece_at_str("d8").map(|p| p.to_string()), Some("BQ".into()));
        assert_eq!(board.piece_at_str("g1").map(|p| p.to_string()), Some("WN".into()));
        assert_eq!(board.piece_at_str("c7").map(|p| p.to_string()), Some("BP".into()));
        assert!(board.piece_at_str("e4").is_none());
        assert!(board.piece_at_str("z9").is_none());
        let count = board.squares.iter().flatten().filter(|s| s.is_some()).count();
        assert_eq!(count, 32);
        assert_eq!(board.player(0).map(|p| p.direction), Some(Direction::North));
        assert_eq!(board.player(1).map(|p| p.direction), Some(Direction::South));
        assert!(board.player(2).is_none());
        assert_eq!(board.max_pos(), 7);
    }

    #[test]
    fn test_lookup_off_board() {
        let board = Board::init();
        assert!(Position::new(8, 0).and_then(|p| board.piece_at(p)).is_none());
        assert!(Position::new(0, 9).and_then(|p| board.piece_at(p)).is_none());
        assert_eq!(
            Position::new(7, 4).and_then(|p| board.piece_at(p)).map(|p| p.to_string()),
            Some("WK".into())
        );
        assert_eq!(board.players()[0].name, "White");
        assert_eq!(board.squares().len(), 8);
    }

    #[test]
    fn test_assign_piece() {
        let mut board = Board::empty();
        assert_eq!(board.assign_piece("d4", "Q", Side::White), Ok(()));
        assert_eq!(board.piece_at_str("d4").map(|p| p.kind), Some(PieceType::Queen));
        assert_eq!(board.assign_piece("d4", "X", Side::White), Ok(()));
        assert!(board.piece_at_str("d4").is_none());
        assert_eq!(
            board.assign_piece("d9", "Q", Side::White),
            Err(BadPosition("d9".into()))
        );
    }

    #[test]
    fn test_empty_between() {
        let board = Board::init();
        assert!(!board.empty_between_on_file(pos("a1"), pos("a8")));
        assert!(board.empty_between_on_file(pos("a2"), pos("a7")));
        assert!(!board.empty_between_on_rank(pos("a1"), pos("e1")));
        assert!(board.empty_between_on_rank(pos("a4"), pos("h4")));
        assert!(board.empty_between_on_diagonal(pos("c1"), pos("b2")));
        assert!(!board.empty_between_on_diagonal(pos("c1"), pos("a3")));
        assert!(board.empty_between_on_diagonal(pos("b3"), pos("f7")));
        assert!(!board.empty_between_on_diagonal(pos("f8"), pos("h6")));
    }

    #[test]
    fn test_swap_tags_moving_piece() {
        let mut board = Board::init();
        board.swap(pos("g1"), pos("f3"), MoveTag::Move);
        assert!(board.piece_at_str("g1").is_none());
        let knight = board.piece_at_str("f3").unwrap();
        assert_eq!(knight.moves, vec![MoveTag::Move]);
    }

    #[test]
    fn test_commit_buries_capture() {
        let mut board = Board::init();
        let plan = MovePlan {
            relocations: vec![Relocation {
                from: pos("d1"),
                to: pos("d7"),
                tag: MoveTag::File,
            }],
            capture: Some(pos("d7")),
        };
        assert_eq!(board.commit(&plan), Some(PieceType::Pawn));
        assert_eq!(board.piece_at_str("d7").map(|p| p.to_string()), Some("WQ".into()));
        assert!(board.piece_at_str("d1").is_none());
        assert_eq!(board.players[1].graveyard.len(), 1);
        assert!(board.players[0].graveyard.is_empty());
    }

    #[test]
    fn test_render() {
        let text = Board::init().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 16);
        assert_eq!(lines[0], "|BR|BN|BB|BQ|BK|BB|BN|BR|");
        assert_eq!(lines[1], "|__|**|__|**|__|**|__|**|");
        assert_eq!(lines[4], "|  |**|  |**|  |**|  |**|");
        assert_eq!(lines[6], "|**|  |**|  |**|  |**|  |");
        assert_eq!(lines[14], "|WR|WN|WB|WQ|WK|WB|WN|WR|");
    }
}
