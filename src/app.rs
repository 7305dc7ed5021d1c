use crate::config::Config;
use crate::error::{AppError, AppResult, DocumentKind};
use crate::utils::logging;
use crate::workflow::{ExtractFlow, ExtractOutcome};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// 应用主结构
pub struct App {
    config: Config,
    question_pdf: PathBuf,
    answer_pdf: PathBuf,
}

impl App {
    /// 初始化应用
    pub fn initialize(
        config: Config,
        question_pdf: impl Into<PathBuf>,
        answer_pdf: impl Into<PathBuf>,
    ) -> Self {
        Self {
            config,
            question_pdf: question_pdf.into(),
            answer_pdf: answer_pdf.into(),
        }
    }

    /// 运行应用主逻辑
    ///
    /// 输入文件不存在时只记录错误并返回 `Ok(None)`，不会生成输出文件
    pub fn run(&self) -> Result<Option<ExtractOutcome>> {
        if let Err(e) = check_inputs(&self.question_pdf, &self.answer_pdf) {
            error!("错误: {}", e);
            return Ok(None);
        }

        logging::log_startup(&self.question_pdf, &self.answer_pdf, &self.config.output_file);

        let flow = ExtractFlow::new(&self.config).context("初始化解析器失败")?;
        let outcome = flow
            .run(&self.question_pdf, &self.answer_pdf, &self.config.output_file)
            .with_context(|| format!("无法保存题库: {}", self.config.output_file.display()))?;

        print_final_stats(&outcome, &self.config);
        Ok(Some(outcome))
    }
}

/// 检查两个输入文件是否存在
fn check_inputs(question_pdf: &Path, answer_pdf: &Path) -> AppResult<()> {
    if !question_pdf.exists() {
        return Err(AppError::input_not_found(DocumentKind::Questions, question_pdf));
    }
    if !answer_pdf.exists() {
        return Err(AppError::input_not_found(DocumentKind::Answers, answer_pdf));
    }
    Ok(())
}

// ========== 日志辅助函数 ==========

fn print_final_stats(outcome: &ExtractOutcome, config: &Config) {
    let summary = &outcome.summary;
    logging::print_final_stats(
        summary.questions,
        summary.answers,
        summary.answered,
        summary.orphan_answers,
        &config.output_file,
    );
    if summary.questions == 0 {
        info!("💡 没有解析出任何题目，可以使用 --dump-text 检查提取出的文本");
    }
}
