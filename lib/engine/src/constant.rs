use crate::piece::PieceType;
use regex::Regex;
use std::{collections::HashMap, sync::LazyLock};

pub const BOARD_SIZE: usize = 8;

// 底线棋子顺序，从 a 列到 h 列
pub const BACK_RANK: [PieceType; BOARD_SIZE] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

pub static LABEL_MAP: LazyLock<HashMap<&'static str, PieceType>> = LazyLock::new(|| {
    HashMap::from([
        ("R", PieceType::Rook),
        ("B", PieceType::Bishop),
        ("N", PieceType::Knight),
        ("K", PieceType::King),
        ("Q", PieceType::Queen),
        ("P", PieceType::Pawn),
    ])
});

// 命令行指令的正则
pub static MOVE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<from>[a-h][1-8]) (?P<to>[a-h][1-8])$").unwrap());
pub static PLAYER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^player(?P<index>[12])$").unwrap());
pub static PIECE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^piece (?P<pos>[a-h][1-8])$").unwrap());
