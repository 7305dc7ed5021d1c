/// 日志工具模块
///
/// 提供日志初始化以及运行开始、结束时的统计输出
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志
///
/// `RUST_LOG` 优先；否则使用 `info`，详细模式下使用 `debug`。
/// 重复调用不会报错（测试中可能多次初始化）。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `question_pdf`: 题目文件路径
/// - `answer_pdf`: 答案文件路径
/// - `output_file`: 输出文件路径
pub fn log_startup(question_pdf: &Path, answer_pdf: &Path, output_file: &Path) {
    info!("{}", "=".repeat(60));
    info!("🚀 开始处理PDF文件");
    info!("📄 题目文件: {}", question_pdf.display());
    info!("📄 答案文件: {}", answer_pdf.display());
    info!("💾 输出文件: {}", output_file.display());
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `questions`: 题目数量
/// - `answers`: 答案数量
/// - `answered`: 匹配到答案的题目数量
/// - `orphan_answers`: 找不到对应题目的答案数量
/// - `output_file`: 输出文件路径
pub fn print_final_stats(
    questions: usize,
    answers: usize,
    answered: usize,
    orphan_answers: usize,
    output_file: &Path,
) {
    info!("\n{}", "=".repeat(60));
    info!("📊 处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("📝 题目: {}", questions);
    info!("🔑 答案: {}", answers);
    info!("✅ 已匹配答案: {}/{}", answered, questions);
    info!("❓ 无对应题目的答案: {}", orphan_answers);
    info!("{}", "=".repeat(60));
    info!("\n已保存 {} 道题目到 {}", questions, output_file.display());
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（字符数）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
