//! 答案解析服务 - 业务能力层
//!
//! 从答案 PDF 的文本中找出 `题号. 字母 解析` 形式的条目

use crate::error::AppResult;
use crate::models::{AnswerRecord, OptionLetter};
use crate::services::label::parse_label;
use regex::Regex;
use tracing::debug;

/// 答案解析服务
///
/// 条目从左到右、互不重叠地匹配。解析文字可以跨行，
/// 一直延续到下一个 `\n数字.` 或文本结尾。
pub struct AnswerParser {
    /// 条目开头：题号、可选的点、答案字母
    entry_head: Regex,
    /// 下一条目的起点
    next_entry: Regex,
}

impl AnswerParser {
    /// 创建新的答案解析服务
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            entry_head: Regex::new(r"(\d+)\.?\s*([A-D])")?,
            next_entry: Regex::new(r"\n\d+\.")?,
        })
    }

    /// 解析答案文本
    ///
    /// # 参数
    /// - `text`: 答案 PDF 提取出的全部文本
    ///
    /// # 返回
    /// 按原文顺序排列的答案，重复的题号全部保留
    pub fn parse(&self, text: &str) -> Vec<AnswerRecord> {
        let mut answers = Vec::new();
        let mut pos = 0;

        while let Some(caps) = self.entry_head.captures_at(text, pos) {
            let Some(head) = caps.get(0) else { break };

            // 从字母之后开始找下一条目，字母后的空白不能吞掉下一条目前的换行
            let body_start = head.end();
            let body_end = self
                .next_entry
                .find_at(text, body_start)
                .map_or(text.len(), |m| m.start());
            pos = body_end;

            let letter = caps[2].chars().next().and_then(OptionLetter::from_char);
            match (parse_label(&caps[1]), letter) {
                (Some(id), Some(answer)) => answers.push(AnswerRecord {
                    id,
                    answer,
                    explanation: text[body_start..body_end].trim().to_string(),
                }),
                _ => debug!("无法解析的答案条目: {:?}", head.as_str()),
            }
        }

        answers
    }
}
