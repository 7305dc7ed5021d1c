//! 题目解析服务 - 业务能力层
//!
//! 把题目 PDF 的纯文本切分为题目块，再逐行拆出题干和选项。
//!
//! 已知的近似处理（保持不变）：
//! - 选项只取第一行，选项的续行会被丢弃
//! - 题干中以 `A`–`D` 开头的行会被当成选项

use crate::error::AppResult;
use crate::models::{OptionLetter, QuestionRecord, RecordMetadata};
use crate::services::label::parse_label;
use indexmap::IndexMap;
use regex::Regex;
use tracing::debug;

/// 逐行扫描时所处的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Question,
    Options,
}

/// 题目解析服务
///
/// 职责：
/// - 文本 → 有序的题目列表（答案为空）
/// - 不读文件，不关心答案
pub struct QuestionParser {
    /// 题目块边界：换行后紧跟 `数字.`
    block_boundary: Regex,
    /// 块首题号
    block_header: Regex,
    /// 选项行
    option_line: Regex,
    metadata: RecordMetadata,
}

impl QuestionParser {
    /// 创建新的题目解析服务
    pub fn new(metadata: RecordMetadata) -> AppResult<Self> {
        Ok(Self {
            block_boundary: Regex::new(r"\n\d+\.")?,
            block_header: Regex::new(r"(?s)\A(\d+)\.?\s*(.*)")?,
            option_line: Regex::new(r"\A([A-D])\.?\s*(.*)")?,
            metadata,
        })
    }

    /// 解析题目文本
    ///
    /// # 参数
    /// - `text`: 题目 PDF 提取出的全部文本
    ///
    /// # 返回
    /// 按原文顺序排列的题目，没有选项或题干为空的块被丢弃
    pub fn parse(&self, text: &str) -> Vec<QuestionRecord> {
        let blocks = self.split_blocks(text);
        debug!("题目文本切分为 {} 个块", blocks.len());

        blocks
            .into_iter()
            .filter_map(|block| self.parse_block(block))
            .collect()
    }

    /// 在每个 `\n数字.` 之前切开，换行符本身不保留
    fn split_blocks<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut blocks = Vec::new();
        let mut start = 0;
        for boundary in self.block_boundary.find_iter(text) {
            blocks.push(&text[start..boundary.start()]);
            start = boundary.start() + 1;
        }
        blocks.push(&text[start..]);
        blocks
    }

    fn parse_block(&self, block: &str) -> Option<QuestionRecord> {
        if block.trim().is_empty() {
            return None;
        }

        let Some(caps) = self.block_header.captures(block) else {
            debug!("跳过无题号的文本块: {:?}", preview(block));
            return None;
        };
        let id = parse_label(&caps[1])?;
        let content = caps.get(2).map_or("", |m| m.as_str());

        let mut section = Section::Question;
        let mut stem = String::new();
        let mut options: IndexMap<OptionLetter, String> = IndexMap::new();

        for line in content.split('\n') {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(option) = self.option_line.captures(line) {
                section = Section::Options;
                let Some(letter) = option[1].chars().next().and_then(OptionLetter::from_char)
                else {
                    continue;
                };
                options.insert(letter, option[2].to_string());
            } else if section == Section::Question {
                stem.push_str(line);
                stem.push(' ');
            }
        }

        let stem = stem.trim();
        if stem.is_empty() || options.is_empty() {
            debug!("题目 {} 缺少题干或选项，已跳过", id);
            return None;
        }

        Some(QuestionRecord::new(id, stem, options, self.metadata.clone()))
    }
}

fn preview(block: &str) -> String {
    crate::utils::logging::truncate_text(block.trim(), 30)
}
