//! # PDF Question Extract
//!
//! 从题目 PDF 和答案 PDF 中提取选择题，按题号合并后输出为 JSON 题库
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 唯一接触 PDF 库的地方，只暴露"取文本"能力
//! - `TextExtractor` - 提取失败时返回空字符串，从不报错
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 纯文本处理，不读 PDF
//! - `QuestionParser` - 文本 → 题目
//! - `AnswerParser` - 文本 → 答案
//! - `merge` - 按题号左连接
//! - `RecordWriter` / `TextDumpWriter` - 写 JSON / 写原始文本
//!
//! ### ③ 流程层（Workflow）
//! - `ExtractFlow` - 提取 → 解析 → 合并 → 写入
//!
//! ### ④ 应用层
//! - `App` - 检查输入、运行流程、输出统计
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult, DocumentKind};
pub use infrastructure::{PdfTextExtractor, PlainTextExtractor, TextExtractor};
pub use models::{AnswerRecord, OptionLetter, QuestionRecord, RecordMetadata};
pub use services::{merge, AnswerParser, QuestionParser, RecordWriter};
pub use workflow::{ExtractFlow, ExtractOutcome};
