use crate::models::option_letter::{answer_field, OptionLetter};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 题目的固定描述信息，每次运行保持不变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMetadata {
    #[serde(rename = "type")]
    pub question_type: String,
    pub subject: String,
    pub difficulty: String,
}

impl Default for RecordMetadata {
    fn default() -> Self {
        Self {
            question_type: "multiple_choice".to_string(),
            subject: "教师考编".to_string(),
            difficulty: "medium".to_string(),
        }
    }
}

/// 一道选择题，输出 JSON 中的一个元素
///
/// 字段顺序即输出顺序：`id`, `question`, `options`, `answer`,
/// `explanation`, `type`, `subject`, `difficulty`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: u64,
    pub question: String,
    /// 按原文出现顺序保存的选项
    pub options: IndexMap<OptionLetter, String>,
    #[serde(with = "answer_field")]
    pub answer: Option<OptionLetter>,
    pub explanation: String,
    #[serde(flatten)]
    pub metadata: RecordMetadata,
}

impl QuestionRecord {
    /// 创建一道尚未匹配答案的题目
    pub fn new(
        id: u64,
        question: impl Into<String>,
        options: IndexMap<OptionLetter, String>,
        metadata: RecordMetadata,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            options,
            answer: None,
            explanation: String::new(),
            metadata,
        }
    }

    /// 是否已经匹配到答案
    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }
}

/// 答案 PDF 中的一条记录，合并后即丢弃
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub id: u64,
    pub answer: OptionLetter,
    pub explanation: String,
}

impl std::fmt::Display for QuestionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let answer = self.answer.map(OptionLetter::as_str).unwrap_or("-");
        write!(
            f,
            "#{} [{} 个选项, 答案: {}] {}",
            self.id,
            self.options.len(),
            answer,
            crate::utils::logging::truncate_text(&self.question, 40)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QuestionRecord {
        let mut options = IndexMap::new();
        options.insert(OptionLetter::B, "北京".to_string());
        options.insert(OptionLetter::A, "上海".to_string());
        QuestionRecord::new(3, "中国的首都是？", options, RecordMetadata::default())
    }

    #[test]
    fn test_serialize_keeps_field_and_option_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"id":3,"question":"中国的首都是？","options":{"B":"北京","A":"上海"},"answer":"","explanation":"","type":"multiple_choice","subject":"教师考编","difficulty":"medium"}"#
        );
    }

    #[test]
    fn test_round_trip_with_answer() {
        let mut record = sample();
        record.answer = Some(OptionLetter::B);
        record.explanation = "北京是首都".to_string();

        let json = serde_json::to_string_pretty(&record).unwrap();
        let back: QuestionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        assert!(back.is_answered());
    }

    #[test]
    fn test_empty_answer_deserializes_to_none() {
        let json = serde_json::to_string(&sample()).unwrap();
        let back: QuestionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.answer, None);
    }

    #[test]
    fn test_rejects_unknown_answer_letter() {
        let json = serde_json::to_string(&sample())
            .unwrap()
            .replace(r#""answer":"""#, r#""answer":"Z""#);
        assert!(serde_json::from_str::<QuestionRecord>(&json).is_err());
    }
}
