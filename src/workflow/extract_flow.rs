//! 提取流程 - 流程层
//!
//! 核心职责：定义"一对 PDF"的完整处理流程
//!
//! 流程顺序：
//! 1. 提取题目文本 → 解析题目
//! 2. 提取答案文本 → 解析答案
//! 3. 合并 → 写入 JSON

use std::path::Path;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{AppResult, DocumentKind};
use crate::infrastructure::{extractor_for, TextExtractor};
use crate::models::QuestionRecord;
use crate::services::{
    merge, AnswerParser, MergeSummary, QuestionParser, RecordWriter, TextDumpWriter,
};

/// 一次提取的结果
#[derive(Debug)]
pub struct ExtractOutcome {
    pub records: Vec<QuestionRecord>,
    pub summary: MergeSummary,
}

/// 提取流程
///
/// - 编排 提取 → 解析 → 合并 → 写入
/// - 不直接依赖任何 PDF 库，文本来源由 [`TextExtractor`] 决定
pub struct ExtractFlow {
    question_parser: QuestionParser,
    answer_parser: AnswerParser,
    text_dump: Option<TextDumpWriter>,
    verbose_logging: bool,
}

impl ExtractFlow {
    /// 根据配置创建流程
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            question_parser: QuestionParser::new(config.metadata())?,
            answer_parser: AnswerParser::new()?,
            text_dump: config.dump_text_dir.as_ref().map(TextDumpWriter::new),
            verbose_logging: config.verbose_logging,
        })
    }

    /// 处理一对文件，提取器按扩展名自动选择
    pub fn run(
        &self,
        question_path: &Path,
        answer_path: &Path,
        output_path: &Path,
    ) -> AppResult<ExtractOutcome> {
        let question_extractor = extractor_for(question_path);
        let answer_extractor = extractor_for(answer_path);
        self.run_with(
            question_extractor.as_ref(),
            answer_extractor.as_ref(),
            question_path,
            answer_path,
            output_path,
        )
    }

    /// 使用指定的提取器处理一对文件
    ///
    /// # 返回
    /// 合并后的题目和统计；只有写入输出文件失败时返回错误
    pub fn run_with(
        &self,
        question_extractor: &dyn TextExtractor,
        answer_extractor: &dyn TextExtractor,
        question_path: &Path,
        answer_path: &Path,
        output_path: &Path,
    ) -> AppResult<ExtractOutcome> {
        // ========== 题目 ==========
        let question_text = question_extractor.extract_text(question_path);
        self.dump_text(DocumentKind::Questions, &question_text);
        let questions = self.question_parser.parse(&question_text);
        info!("📝 从题目文件中提取了 {} 道题目", questions.len());

        // ========== 答案 ==========
        let answer_text = answer_extractor.extract_text(answer_path);
        self.dump_text(DocumentKind::Answers, &answer_text);
        let answers = self.answer_parser.parse(&answer_text);
        info!("🔑 从答案文件中提取了 {} 个答案", answers.len());

        // ========== 合并并保存 ==========
        let records = merge(questions, &answers);
        let summary = MergeSummary::compute(&records, &answers);

        if self.verbose_logging {
            for record in &records {
                info!("  {}", record);
            }
        }

        RecordWriter::write(&records, output_path)?;

        Ok(ExtractOutcome { records, summary })
    }

    /// 保存原始文本，失败只记录警告
    fn dump_text(&self, kind: DocumentKind, text: &str) {
        let Some(writer) = &self.text_dump else {
            return;
        };
        if let Err(e) = writer.write(kind, text) {
            warn!("⚠️ {}", e);
        }
    }
}
