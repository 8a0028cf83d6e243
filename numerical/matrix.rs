//! 稠密整数矩阵乘法
//!
//! C[i][j] = Σ_k A[i][k] * B[k][j]，要求 A 的列数等于 B 的行数。
//! 运算使用回绕的 i32 算术，不做溢出检查。

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// 矩阵相关的错误类型
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// 左矩阵列数与右矩阵行数不一致
    #[error("Columns of first matrix should be equal to rows of second matrix ({left_cols} != {right_rows})")]
    DimensionMismatch { left_cols: usize, right_rows: usize },

    /// 超出最大维度
    #[error("matrix of {rows}x{cols} exceeds the maximum of {max}x{max}")]
    TooLarge { rows: usize, cols: usize, max: usize },

    /// 元素个数与维度不符
    #[error("expected {expected} elements, found {found}")]
    ElementCount { expected: usize, found: usize },

    /// 维度格式错误（应为 rows,columns）
    #[error("invalid dimensions '{0}', expected rows,columns")]
    InvalidDimensions(String),
}

/// 矩阵的行数和列数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// 检查维度不超过 `max x max`
    pub fn check_bounds(&self, max: usize) -> Result<(), MatrixError> {
        if self.rows > max || self.cols > max {
            return Err(MatrixError::TooLarge {
                rows: self.rows,
                cols: self.cols,
                max,
            });
        }
        Ok(())
    }

    /// 检查 `self x right` 是否可乘
    pub fn check_compatible(&self, right: &Dimensions) -> Result<(), MatrixError> {
        if self.cols != right.rows {
            return Err(MatrixError::DimensionMismatch {
                left_cols: self.cols,
                right_rows: right.rows,
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromStr for Dimensions {
    type Err = MatrixError;

    /// 解析 "rows,columns" 形式的输入，允许逗号两侧有空格
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MatrixError::InvalidDimensions(s.trim().to_string());

        let (rows, cols) = s.split_once(',').ok_or_else(invalid)?;
        let rows = rows.trim().parse::<usize>().map_err(|_| invalid())?;
        let cols = cols.trim().parse::<usize>().map_err(|_| invalid())?;
        Ok(Self::new(rows, cols))
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.rows, self.cols)
    }
}

/// 行优先存储的矩阵
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Matrix {
    dims: Dimensions,
    data: Vec<i32>,
}

impl Matrix {
    /// 全零矩阵
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            dims: Dimensions::new(rows, cols),
            data: vec![0; rows * cols],
        }
    }

    /// 从行优先的元素序列构造
    pub fn from_elements(dims: Dimensions, elements: &[i32]) -> Result<Self, MatrixError> {
        if elements.len() != dims.len() {
            return Err(MatrixError::ElementCount {
                expected: dims.len(),
                found: elements.len(),
            });
        }
        Ok(Self {
            dims,
            data: elements.to_vec(),
        })
    }

    /// 从二维数组构造，各行长度必须一致
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, |row| row.len());
        let dims = Dimensions::new(rows.len(), cols);
        let elements: Vec<i32> = rows.iter().flatten().copied().collect();
        Self::from_elements(dims, &elements)
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1;
        }
        m
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        Some(self.data[row * self.cols() + col])
    }

    pub fn row(&self, row: usize) -> &[i32] {
        let cols = self.cols();
        &self.data[row * cols..(row + 1) * cols]
    }

    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        (0..self.rows()).map(|i| self.row(i).to_vec()).collect()
    }

    /// 矩阵乘法，三重循环累加
    pub fn multiply(&self, right: &Matrix) -> Result<Matrix, MatrixError> {
        self.dims.check_compatible(&right.dims)?;

        let (r1, c1, c2) = (self.rows(), self.cols(), right.cols());
        let mut result = Matrix::zeros(r1, c2);

        for i in 0..r1 {
            for j in 0..c2 {
                let mut sum: i32 = 0;
                for k in 0..c1 {
                    sum = sum.wrapping_add(self.data[i * c1 + k].wrapping_mul(right.data[k * c2 + j]));
                }
                result.data[i * c2 + j] = sum;
            }
        }

        tracing::debug!(left = %self.dims, right = %right.dims, "matrix multiplied");
        Ok(result)
    }
}

/// 两个矩阵相乘
pub fn multiply(left: &Matrix, right: &Matrix) -> Result<Matrix, MatrixError> {
    left.multiply(right)
}
