use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

use super::OutputFormatter;

/// 控制台交互的错误类型
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// 输入无法解析为数字
    #[error("invalid input '{0}'")]
    Parse(String),

    /// 输入提前结束
    #[error("unexpected end of input")]
    Eof,

    /// 矩阵输入不合法
    #[error(transparent)]
    Matrix(#[from] crate::numerical::MatrixError),

    /// JSON 序列化错误
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 按空白切分的输入读取器，行为类似 scanf：一个值可以跨行读取，一行也可以包含多个值
pub struct InputReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// 读取下一个以空白分隔的记号
    pub fn next_token(&mut self) -> Result<String, ConsoleError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            // 非 UTF-8 字节替换为 U+FFFD，交给解析阶段拒绝
            let mut buf = Vec::new();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                return Err(ConsoleError::Eof);
            }
            let line = String::from_utf8_lossy(&buf);
            self.pending
                .extend(line.split_whitespace().map(|s| s.to_string()));
        }
    }

    /// 读取下一个记号并解析
    pub fn next_value<T: FromStr>(&mut self) -> Result<T, ConsoleError> {
        let token = self.next_token()?;
        token.parse().map_err(|_| ConsoleError::Parse(token))
    }

    /// 输出提示并读取一个值，无法解析时提示后重新读取
    pub fn prompt_value<T: FromStr, W: Write>(
        &mut self,
        out: &mut W,
        prompt: &str,
    ) -> Result<T, ConsoleError> {
        loop {
            write!(out, "{}", prompt)?;
            out.flush()?;

            match self.next_value() {
                Ok(value) => return Ok(value),
                Err(ConsoleError::Parse(token)) => {
                    tracing::warn!(%token, "rejected malformed input");
                    writeln!(out)?;
                    writeln!(out, "{}", OutputFormatter::format_invalid_input(&token))?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
