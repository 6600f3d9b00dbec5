use engine::{ChessEngine, Reply};
use std::io::{BufRead, Write};

// 终端交互循环：先消费脚本中的指令，再从输入流逐行读取
pub fn ui<R: BufRead, W: Write>(
    mut game: ChessEngine,
    actions: &[String],
    mut input: R,
    out: &mut W,
) -> anyhow::Result<ChessEngine> {
    writeln!(out, "\n{}", game.board)?;
    writeln!(out, "Welcome to chess")?;

    let mut scripted = actions.iter();
    loop {
        write!(out, "-> ")?;
        let line = match scripted.next() {
            Some(action) => {
                write!(out, "{}", action)?;
                action.clone()
            }
            None => {
                out.flush()?;
                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    // 输入结束等同于 exit
                    writeln!(out)?;
                    break;
                }
                line.trim_end_matches(['\n', '\r']).to_owned()
            }
        };

        match game.execute(&line) {
            Reply::Quit => break,
            Reply::Continue(text) => {
                writeln!(out)?;
                if let Some(text) = text {
                    writeln!(out, "{}", text)?;
                }
            }
        }
        writeln!(out, "{}", game.board)?;
    }
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::piece::MoveTag;
    use std::io::Cursor;

    #[test]
    fn test_scripted_then_input() {
        let actions = vec!["e2 e4".to_owned(), "d7 d5".to_owned()];
        let input = Cursor::new("e4 d5\nplayer2\nexit\ne1 e2\n");
        let mut out = Vec::new();
        let game = ui(ChessEngine::new(), &actions, input, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\n|BR|BN|BB|BQ|BK|BB|BN|BR|"));
        assert!(text.contains("Welcome to chess"));
        assert!(text.contains("-> e2 e4"));
        assert!(text.contains("Black (S) graveyard: [BP]"));
        let pawn = game.board.piece_at_str("d5").unwrap();
        assert_eq!(pawn.last_move(), Some(MoveTag::Take));
        assert!(game.board.piece_at_str("e1").is_some());
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut out = Vec::new();
        let game = ui(ChessEngine::new(), &[], Cursor::new(""), &mut out).unwrap();
        assert_eq!(game.board, engine::Board::init());
    }
}
