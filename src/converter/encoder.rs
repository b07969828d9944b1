//! # 序列化模块
//!
//! `OutputRecord` 固定为单键对象 `{"grid": Grid}`，支持两种排版：
//!
//! - compact：`serde_json` 紧凑输出，无多余空白
//! - pretty：每行网格独占一行
//!
//! ```text
//! {
//!     "grid": [
//!         [1,0,...,1],
//!         ...
//!         [0,0,...,1]
//!     ]
//! }
//! ```
//!
//! pretty 样式直接按行拼接，不依赖对通用格式化结果做字符串替换。

use serde::{Deserialize, Serialize};

use super::{ConversionError, Grid, JsonStyle};

const KEY_INDENT: &str = "    ";
const ROW_INDENT: &str = "        ";

/// 输出文件的完整内容模型。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub grid: Grid,
}

impl OutputRecord {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// 解析已生成的 JSON 文本，网格形状与取值同样会被校验。
    pub fn from_json(text: &str) -> Result<Self, ConversionError> {
        serde_json::from_str(text).map_err(|e| ConversionError::Encode(format!("解析输出 JSON 失败：{}", e)))
    }
}

/// 按指定样式序列化。
///
/// # 示例
/// ```rust
/// use image_grid_json::converter::{encode, Grid, JsonStyle, OutputRecord};
///
/// let grid = Grid::from_luma(&[255u8; 64 * 64])?;
/// let text = encode(&OutputRecord::new(grid), JsonStyle::Compact)?;
/// assert!(text.starts_with("{\"grid\":[[1,1,"));
/// # Ok::<(), image_grid_json::converter::ConversionError>(())
/// ```
pub fn encode(record: &OutputRecord, style: JsonStyle) -> Result<String, ConversionError> {
    match style {
        JsonStyle::Compact => serde_json::to_string(record)
            .map_err(|e| ConversionError::Encode(format!("序列化失败：{}", e))),
        JsonStyle::Pretty => Ok(encode_rows_per_line(record)),
    }
}

fn encode_rows_per_line(record: &OutputRecord) -> String {
    let rows: Vec<String> = record
        .grid
        .rows()
        .iter()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(u8::to_string).collect();
            format!("{ROW_INDENT}[{}]", cells.join(","))
        })
        .collect();

    format!(
        "{{\n{KEY_INDENT}\"grid\": [\n{}\n{KEY_INDENT}]\n}}",
        rows.join(",\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn striped_grid() -> Grid {
        let pixels: Vec<u8> = (0..64 * 64).map(|i| if i % 3 == 0 { 0 } else { 200 }).collect();
        Grid::from_luma(&pixels).expect("grid build failed")
    }

    #[test]
    fn compact_has_no_whitespace() {
        let text = encode(&OutputRecord::new(striped_grid()), JsonStyle::Compact).expect("encode failed");
        assert!(!text.contains(' '));
        assert!(!text.contains('\n'));
        assert!(text.starts_with("{\"grid\":[[0,1,1,0,"));
        assert!(text.ends_with("]]}"));
    }

    #[test]
    fn compact_round_trips_byte_for_byte() {
        let text = encode(&OutputRecord::new(striped_grid()), JsonStyle::Compact).expect("encode failed");
        let parsed = OutputRecord::from_json(&text).expect("parse failed");
        let again = encode(&parsed, JsonStyle::Compact).expect("encode failed");
        assert_eq!(text, again);
    }

    #[test]
    fn pretty_puts_each_row_on_its_own_line() {
        let grid = striped_grid();
        let text = encode(&OutputRecord::new(grid.clone()), JsonStyle::Pretty).expect("encode failed");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 64 + 4);
        assert_eq!(lines[0], "{");
        assert_eq!(lines[1], "    \"grid\": [");
        assert_eq!(lines[66], "    ]");
        assert_eq!(lines[67], "}");
        assert!(!text.ends_with('\n'));

        for (index, line) in lines[2..66].iter().enumerate() {
            assert!(line.starts_with("        ["), "row {index} indent");
            if index == 63 {
                assert!(line.ends_with(']'), "last row has no trailing comma");
            } else {
                assert!(line.ends_with("],"), "row {index} trailing comma");
            }
        }
    }

    #[test]
    fn pretty_parses_back_to_same_rows() {
        let grid = striped_grid();
        let text = encode(&OutputRecord::new(grid.clone()), JsonStyle::Pretty).expect("encode failed");
        let parsed = OutputRecord::from_json(&text).expect("parse failed");
        assert_eq!(parsed.grid, grid);
    }

    #[test]
    fn from_json_rejects_non_binary_grid() {
        let mut rows = vec![vec![0u8; 64]; 64];
        rows[0][0] = 7;
        let text = serde_json::to_string(&serde_json::json!({ "grid": rows })).expect("json failed");

        let result = OutputRecord::from_json(&text);

        assert!(matches!(result, Err(ConversionError::Encode(_))));
    }
}
