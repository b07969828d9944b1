//! 集成测试共用工具：临时目录与合成图片。

#![allow(dead_code)]

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use image::{DynamicImage, GrayImage, ImageFormat, Luma};

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

/// 每个测试独立的临时目录，drop 时删除。
pub struct TestDir {
    path: PathBuf,
}

impl TestDir {
    pub fn new(label: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "image-grid-json-{}-{}-{}",
            label,
            std::process::id(),
            NEXT_DIR.fetch_add(1, Ordering::SeqCst)
        ));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).expect("create test dir failed");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn subdir(&self, name: &str) -> PathBuf {
        let dir = self.path.join(name);
        fs::create_dir_all(&dir).expect("create subdir failed");
        dir
    }

    pub fn write(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let file = self.path.join(name);
        fs::write(&file, bytes).expect("write test file failed");
        file
    }

    pub fn write_image(&self, name: &str, image: DynamicImage) -> PathBuf {
        self.write(name, &encode_png(image))
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

pub fn encode_png(image: DynamicImage) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, ImageFormat::Png)
        .expect("failed to encode test image");
    cursor.into_inner()
}

/// 64×64 灰度图，第 x 列的灰度取 `[0, 1, 127, 128, 255][x % 5]`。
pub fn threshold_levels() -> GrayImage {
    const LEVELS: [u8; 5] = [0, 1, 127, 128, 255];
    GrayImage::from_fn(64, 64, |x, _| Luma([LEVELS[x as usize % 5]]))
}

/// 左半纯黑、右半纯白的灰度图。
pub fn half_black(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, _| Luma([if x < width / 2 { 0 } else { 255 }]))
}

pub fn read_grid(path: &Path) -> Vec<Vec<u8>> {
    let text = fs::read_to_string(path).expect("read output failed");
    let value: serde_json::Value = serde_json::from_str(&text).expect("output is not JSON");
    let object = value.as_object().expect("output is not an object");
    assert_eq!(object.len(), 1, "output must have a single key");
    serde_json::from_value(object["grid"].clone()).expect("grid is not a 2-D integer array")
}

pub fn dir_is_empty(dir: &Path) -> bool {
    fs::read_dir(dir).expect("read dir failed").next().is_none()
}
