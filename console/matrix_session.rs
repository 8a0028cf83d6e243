use std::io::{BufRead, Write};

use serde::Serialize;

use super::{ConsoleError, InputReader, OutputFormatter};
use crate::numerical::{Dimensions, Matrix};

/// JSON 输出时的矩阵乘法结果
#[derive(Debug, Serialize)]
struct ProductReport {
    left: Vec<Vec<i32>>,
    right: Vec<Vec<i32>>,
    product: Vec<Vec<i32>>,
}

/// 矩阵乘法的交互会话
///
/// 先读取两个矩阵的维度（rows,columns），不可乘时重新读取两组维度；
/// 再按行优先顺序读取两个矩阵的元素，最后输出乘积。
pub struct MatrixSession {
    max_dim: usize,
    json: bool,
}

impl MatrixSession {
    pub fn new(max_dim: usize, json: bool) -> Self {
        Self { max_dim, json }
    }

    pub fn run<R: BufRead, W: Write>(
        &self,
        input: &mut InputReader<R>,
        out: &mut W,
    ) -> Result<Matrix, ConsoleError> {
        tracing::info!(max_dim = self.max_dim, "matrix session started");

        let (first, second) = loop {
            let first = self.read_dimensions(
                input,
                out,
                "Enter rows and columns for first matrix(rows,columns):- ",
            )?;
            writeln!(out)?;
            let second = self.read_dimensions(
                input,
                out,
                "Enter rows and columns for second matrix(rows,columns):- ",
            )?;

            match first.check_compatible(&second) {
                Ok(()) => break (first, second),
                Err(e) => {
                    tracing::warn!("{}", e);
                    writeln!(
                        out,
                        "{}",
                        OutputFormatter::format_error(
                            "Columns of first matrix should be equal to rows of second matrix"
                        )
                    )?;
                }
            }
        };

        write!(out, "\nEnter matrix 1 elements:- ")?;
        out.flush()?;
        let left = Matrix::from_elements(first, &read_elements(input, out, first.len())?)?;

        write!(out, "\nEnter matrix 2 elements:- ")?;
        out.flush()?;
        let right = Matrix::from_elements(second, &read_elements(input, out, second.len())?)?;

        let product = left.multiply(&right)?;

        if self.json {
            let report = ProductReport {
                left: left.to_rows(),
                right: right.to_rows(),
                product: product.to_rows(),
            };
            let json = OutputFormatter::format_json(&report)?;
            writeln!(out)?;
            writeln!(out, "{}", json)?;
        } else {
            writeln!(out, "\nThe resultant matrix is:- ")?;
            writeln!(out, "{}", OutputFormatter::format_matrix(&product))?;
        }

        tracing::info!(dims = %product.dims(), "matrix session finished");
        Ok(product)
    }

    /// 读取一组合法的维度，格式错误或超出上限时重新提示
    fn read_dimensions<R: BufRead, W: Write>(
        &self,
        input: &mut InputReader<R>,
        out: &mut W,
        prompt: &str,
    ) -> Result<Dimensions, ConsoleError> {
        loop {
            write!(out, "{}", prompt)?;
            out.flush()?;

            let token = read_dimension_text(input)?;
            let checked = token
                .parse::<Dimensions>()
                .and_then(|dims| dims.check_bounds(self.max_dim).map(|_| dims));

            match checked {
                Ok(dims) => return Ok(dims),
                Err(e) => {
                    tracing::warn!("{}", e);
                    writeln!(out)?;
                    writeln!(out, "{}", OutputFormatter::format_error(&e.to_string()))?;
                }
            }
        }
    }
}

/// 读取 "行,列" 文本，允许逗号两侧出现空白（如 "2, 3" 或 "3 ,2"）
fn read_dimension_text<R: BufRead>(input: &mut InputReader<R>) -> Result<String, ConsoleError> {
    let mut text = input.next_token()?;
    while is_partial_dimensions(&text) {
        text.push_str(&input.next_token()?);
    }
    Ok(text)
}

/// 只含数字和逗号，且缺少逗号或以逗号结尾
fn is_partial_dimensions(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit() || c == ',')
        && (!text.contains(',') || text.ends_with(','))
}

/// 读取 `count` 个整数，跳过无法解析的记号
fn read_elements<R: BufRead, W: Write>(
    input: &mut InputReader<R>,
    out: &mut W,
    count: usize,
) -> Result<Vec<i32>, ConsoleError> {
    let mut elements = Vec::with_capacity(count);
    while elements.len() < count {
        match input.next_value::<i32>() {
            Ok(value) => elements.push(value),
            Err(ConsoleError::Parse(token)) => {
                tracing::warn!(%token, "rejected malformed matrix element");
                writeln!(out, "{}", OutputFormatter::format_invalid_input(&token))?;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(elements)
}
