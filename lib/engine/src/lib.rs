/**
 * 详细中文注释 - 引擎核心库入口
 *
 * 说明
 * - position: 坐标与几何关系
 * - piece / player: 棋子、走子标记、玩家与其 graveyard
 * - board: 棋盘状态、路径检查与提交走子
 * - rules: 按棋子种类判定走法是否合法
 * - engine: 对外的走子入口与命令行指令解析
 */
pub mod board;
pub mod constant;
pub mod engine;
pub mod error;
pub mod piece;
pub mod player;
pub mod position;
pub mod rules;

pub use board::Board;
pub use engine::{ChessEngine, Command, Reply};
pub use error::BadPosition;
pub use position::Position;
