// 数值算法模块
//
// - matrix: 稠密整数矩阵乘法

pub mod matrix;

pub use matrix::{multiply, Dimensions, Matrix, MatrixError};
