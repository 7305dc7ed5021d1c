//! 原始文本保存服务 - 业务能力层
//!
//! 把 PDF 提取出的原始文本存成 txt，方便检查解析效果，
//! 保存下来的文件也可以直接作为下一次运行的输入。

use crate::error::{AppError, AppResult, DocumentKind};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// 原始文本保存服务
pub struct TextDumpWriter {
    dir: PathBuf,
}

impl TextDumpWriter {
    /// 使用指定目录创建
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// 保存一份文档的原始文本
    ///
    /// # 参数
    /// - `kind`: 题目或答案，决定文件名
    /// - `text`: 提取出的文本
    ///
    /// # 返回
    /// 写入的文件路径；文本为空时不写文件，返回 `None`
    pub fn write(&self, kind: DocumentKind, text: &str) -> AppResult<Option<PathBuf>> {
        if text.is_empty() {
            return Ok(None);
        }

        let path = self.dir.join(kind.dump_file_name());
        fs::create_dir_all(&self.dir)
            .and_then(|_| fs::write(&path, text))
            .map_err(|source| AppError::TextDump {
                path: path.clone(),
                source,
            })?;

        info!("{}文本已保存到: {}", kind, path.display());
        info!("{}文本长度: {} 字符", kind, text.chars().count());
        Ok(Some(path))
    }
}
