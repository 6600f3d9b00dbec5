use engine::ChessEngine;
use tracing_subscriber::EnvFilter;

mod ui;

fn main() -> anyhow::Result<()> {
    // 日志输出到 stderr，避免打乱 stdout 上的棋盘
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // 第一个参数为逗号分隔的预设指令，例如 "e2 e4,d7 d5"
    let actions: Vec<String> = std::env::args()
        .nth(1)
        .map(|arg| arg.split(',').map(str::to_owned).collect())
        .unwrap_or_default();

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    ui::ui(ChessEngine::new(), &actions, stdin.lock(), &mut stdout)?;
    Ok(())
}
