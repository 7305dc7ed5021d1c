//! 结果写入服务 - 业务能力层
//!
//! 只负责"把题目写成 JSON 文件"

use crate::error::{AppError, AppResult};
use crate::models::QuestionRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// 写入 JSON 题库文件
///
/// 输出为 UTF-8、两空格缩进的 JSON 数组，中文等非 ASCII 字符原样保留。
/// 写入失败直接返回错误，没有备用路径。
pub struct RecordWriter;

impl RecordWriter {
    /// 写入题目列表
    ///
    /// # 参数
    /// - `records`: 合并后的题目，按此顺序输出
    /// - `path`: 输出文件路径（父目录必须已存在）
    pub fn write(records: &[QuestionRecord], path: &Path) -> AppResult<()> {
        debug!("写入 {} 道题目到 {}", records.len(), path.display());

        let file = File::create(path).map_err(|e| AppError::write_failed(path, e))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, records)?;
        writer
            .write_all(b"\n")
            .and_then(|_| writer.flush())
            .map_err(|e| AppError::write_failed(path, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OptionLetter, RecordMetadata};
    use indexmap::IndexMap;

    fn record() -> QuestionRecord {
        let mut options = IndexMap::new();
        options.insert(OptionLetter::A, "皮亚杰".to_string());
        options.insert(OptionLetter::B, "维果茨基".to_string());
        let mut record =
            QuestionRecord::new(1, "最近发展区理论的提出者是", options, RecordMetadata::default());
        record.answer = Some(OptionLetter::B);
        record
    }

    #[test]
    fn test_output_is_indented_and_unescaped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");

        RecordWriter::write(&[record()], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n  {\n    \"id\": 1,"));
        assert!(content.contains("\"question\": \"最近发展区理论的提出者是\""));
        assert!(content.contains("\"answer\": \"B\""));
        assert!(!content.contains("\\u"));
    }

    #[test]
    fn test_round_trip_reproduces_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let mut unanswered = record();
        unanswered.id = 2;
        unanswered.answer = None;
        let records = vec![record(), unanswered];

        RecordWriter::write(&records, &path).unwrap();

        let back: Vec<QuestionRecord> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn test_empty_record_set_writes_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");

        RecordWriter::write(&[], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");
    }

    #[test]
    fn test_unwritable_path_fails_loudly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("out.json");

        let err = RecordWriter::write(&[record()], &path).unwrap_err();
        assert!(matches!(err, AppError::Write { .. }));
    }
}
