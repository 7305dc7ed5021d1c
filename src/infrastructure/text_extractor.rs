//! 文本提取 - 基础设施层
//!
//! 唯一接触 PDF 后端的地方。解析和合并逻辑只依赖 [`TextExtractor`]，
//! 不关心文本来自哪个库。

use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::{debug, error, info};

/// 文本提取能力
///
/// 约定：永远不返回错误。提取失败时记录日志并返回空字符串，
/// 下游按空文本处理（得到零条记录）。
pub trait TextExtractor {
    fn extract_text(&self, path: &Path) -> String;
}

/// 基于 `pdf-extract` 的 PDF 文本提取
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// 逐页提取，`pdf-extract` 遇到损坏的文件可能 panic，这里统一转为错误
    fn extract_pages(data: &[u8]) -> Result<Vec<String>, String> {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(data)
        }));
        match result {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(e)) => Err(e.to_string()),
            Err(_) => Err("PDF解析崩溃（文件可能已损坏）".to_string()),
        }
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, path: &Path) -> String {
        info!("正在提取PDF文件: {}", path.display());

        let data = match fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                error!("读取PDF失败 ({}): {}", path.display(), e);
                return String::new();
            }
        };

        let pages = match Self::extract_pages(&data) {
            Ok(pages) => pages,
            Err(e) => {
                error!("PDF提取失败 ({}): {}", path.display(), e);
                return String::new();
            }
        };

        info!("PDF页数: {}", pages.len());
        join_pages(pages)
    }
}

/// 读取已经是纯文本的输入（例如 `--dump-text` 保存的文本）
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, path: &Path) -> String {
        info!("正在读取文本文件: {}", path.display());
        match fs::read(path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                error!("读取文本失败 ({}): {}", path.display(), e);
                String::new()
            }
        }
    }
}

/// 根据扩展名选择提取器：`.txt` 按纯文本读取，其余按 PDF 处理
pub fn extractor_for(path: &Path) -> Box<dyn TextExtractor> {
    let is_text = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
    if is_text {
        Box::new(PlainTextExtractor::new())
    } else {
        Box::new(PdfTextExtractor::new())
    }
}

/// 拼接各页文本，每个非空页后追加换行
fn join_pages(pages: Vec<String>) -> String {
    let total = pages.len();
    let mut text = String::new();
    for (i, page) in pages.into_iter().enumerate() {
        debug!("正在处理第 {}/{} 页...", i + 1, total);
        if page.is_empty() {
            continue;
        }
        text.push_str(&page);
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_join_pages_appends_newline_per_page() {
        let pages = vec!["1. 第一题".to_string(), String::new(), "A. 选项".to_string()];
        assert_eq!(join_pages(pages), "1. 第一题\nA. 选项\n");
    }

    #[test]
    fn test_missing_pdf_degrades_to_empty_text() {
        let text = PdfTextExtractor::new().extract_text(Path::new("/no/such/booklet.pdf"));
        assert!(text.is_empty());
    }

    #[test]
    fn test_corrupt_pdf_degrades_to_empty_text() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"%PDF-1.4\nthis is not really a pdf").unwrap();

        let text = PdfTextExtractor::new().extract_text(file.path());
        assert!(text.is_empty());
    }

    #[test]
    fn test_plain_text_is_read_verbatim() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "1. B 解析").unwrap();

        let text = extractor_for(file.path()).extract_text(file.path());
        assert_eq!(text, "1. B 解析");
    }

    #[test]
    fn test_missing_text_file_degrades_to_empty_text() {
        assert!(PlainTextExtractor::new()
            .extract_text(Path::new("/no/such/answers.txt"))
            .is_empty());
    }
}
