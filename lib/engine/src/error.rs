use thiserror::Error;

/// 坐标字符串格式错误或越界，携带原始输入便于诊断
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("bad position: {0}")]
pub struct BadPosition(pub String);
