//! # 网格模型
//!
//! `Grid` 固定为 64 行 × 64 列，每个单元只能是 0 或 1。
//! 只能通过带校验的构造函数得到，反序列化时同样校验形状与取值。

use serde::{Deserialize, Serialize, Serializer};

use super::ConversionError;

/// 网格边长（行数与列数）。
pub const GRID_SIZE: u32 = 64;

const GRID_CELLS: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// 二值化：只有纯黑（0）映射为 0，其余灰度值（1–255）一律为 1。
///
/// 这不是中点阈值，128 以下的非零灰度同样得到 1。
///
/// # 示例
/// ```rust
/// use image_grid_json::converter::binarize;
///
/// assert_eq!(binarize(0), 0);
/// assert_eq!(binarize(1), 1);
/// assert_eq!(binarize(127), 1);
/// ```
pub fn binarize(luma: u8) -> u8 {
    if luma == 0 { 0 } else { 1 }
}

/// 64×64 二值网格，行优先（从左到右、从上到下）。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>")]
pub struct Grid {
    rows: Vec<Vec<u8>>,
}

impl Grid {
    /// 由 64×64 灰度像素（行优先）构建网格，逐像素二值化。
    pub fn from_luma(pixels: &[u8]) -> Result<Self, ConversionError> {
        if pixels.len() != GRID_CELLS {
            return Err(ConversionError::UnreadableImage(format!(
                "灰度像素数量异常：{}（期望：{}）",
                pixels.len(),
                GRID_CELLS
            )));
        }

        let rows = pixels
            .chunks_exact(GRID_SIZE as usize)
            .map(|row| row.iter().copied().map(binarize).collect())
            .collect();

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// 读取 `(row, col)` 处的单元值，越界返回 `None`。
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// 值为 1 的单元数量。
    pub fn count_ones(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&v| v == 1).count())
            .sum()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = ConversionError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        if rows.len() != GRID_SIZE as usize {
            return Err(ConversionError::Encode(format!(
                "网格行数异常：{}（期望：{}）",
                rows.len(),
                GRID_SIZE
            )));
        }

        for (index, row) in rows.iter().enumerate() {
            if row.len() != GRID_SIZE as usize {
                return Err(ConversionError::Encode(format!(
                    "第 {} 行列数异常：{}（期望：{}）",
                    index,
                    row.len(),
                    GRID_SIZE
                )));
            }
            if let Some(value) = row.iter().find(|&&v| v > 1) {
                return Err(ConversionError::Encode(format!(
                    "第 {} 行存在非二值单元：{}",
                    index, value
                )));
            }
        }

        Ok(Self { rows })
    }
}

impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.rows.serialize(serializer)
    }
}
