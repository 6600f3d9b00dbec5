/* 引擎门面：解析坐标、分派走法规则、提交走子，并解析命令行指令 */
use crate::board::Board;
use crate::constant::{MOVE_REGEX, PIECE_REGEX, PLAYER_REGEX};
use crate::error::BadPosition;
use crate::position::Position;
use crate::rules;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(String, String),
    Player(usize),
    Piece(String),
    Exit,
    Unknown,
}

impl Command {
    pub fn parse(line: &str) -> Command {
        if line == "exit" {
            return Command::Exit;
        }
        if let Some(captures) = MOVE_REGEX.captures(line) {
            return Command::Move(captures["from"].to_owned(), captures["to"].to_owned());
        }
        if let Some(captures) = PLAYER_REGEX.captures(line) {
            // player1 / player2 对应下标 0 / 1
            let index = if &captures["index"] == "1" { 0 } else { 1 };
            return Command::Player(index);
        }
        if let Some(captures) = PIECE_REGEX.captures(line) {
            return Command::Piece(captures["pos"].to_owned());
        }
        Command::Unknown
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Continue(Option<String>),
    Quit,
}

pub struct ChessEngine {
    pub board: Board,
}

impl Default for ChessEngine {
    fn default() -> Self {
        ChessEngine::new()
    }
}

impl ChessEngine {
    pub fn new() -> Self {
        ChessEngine { board: Board::init() }
    }

    pub fn with_board(board: Board) -> Self {
        ChessEngine { board }
    }

    // 尝试把 from 上的棋子走到 to
    // 坐标格式错误返回 BadPosition；格式正确但走法不合法时返回 Ok(false)，棋盘不变
    pub fn move_piece(&mut self, from: &str, to: &str) -> Result<bool, BadPosition> {
        let from: Position = from.parse()?;
        let to: Position = to.parse()?;

        let Some(plan) = rules::evaluate(&self.board, from, to) else {
            debug!("illegal move {} {}", from, to);
            return Ok(false);
        };
        let captured = self.board.commit(&plan);
        match captured {
            Some(kind) => info!("{} {} takes {:?}", from, to, kind),
            None => info!("{} {}", from, to),
        }
        Ok(true)
    }

    // 执行一行指令，返回需要显示给用户的文本
    pub fn execute(&mut self, line: &str) -> Reply {
        match Command::parse(line.trim()) {
            Command::Exit => Reply::Quit,
            Command::Move(from, to) => match self.move_piece(&from, &to) {
                Ok(_) => Reply::Continue(None),
                Err(e) => Reply::Continue(Some(e.to_string())),
            },
            Command::Player(index) => Reply::Continue(self.board.player(index).map(|p| p.to_string())),
            Command::Piece(pos) => {
                let text = match self.board.piece_at_str(&pos) {
                    Some(piece) => {
                        let moves: Vec<String> = piece.moves.iter().map(|m| m.to_string()).collect();
                        format!("{}\n[{}]", piece, moves.join(" "))
                    }
                    None => "empty square".to_owned(),
                };
                Reply::Continue(Some(text))
            }
            Command::Unknown => {
                debug!("unknown command {:?}", line);
                Reply::Continue(None)
            }
        }
    }
}
