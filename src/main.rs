use anyhow::Result;
use clap::Parser;
use pdf_question_extract::utils::logging;
use pdf_question_extract::{App, Config};
use std::path::PathBuf;

/// 提取PDF中的题目和答案
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// 题目PDF文件路径
    #[arg(short, long)]
    questions: PathBuf,

    /// 答案PDF文件路径
    #[arg(short, long)]
    answers: PathBuf,

    /// 输出JSON文件路径 [默认: questions.json]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 保存提取出的原始文本的目录
    #[arg(long)]
    dump_text: Option<PathBuf>,

    /// 题目类型
    #[arg(long = "type")]
    question_type: Option<String>,

    /// 科目
    #[arg(long)]
    subject: Option<String>,

    /// 难度
    #[arg(long)]
    difficulty: Option<String>,

    /// 显示详细日志
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// 命令行参数覆盖配置
    fn apply(self, mut config: Config) -> (Config, PathBuf, PathBuf) {
        if let Some(output) = self.output {
            config.output_file = output;
        }
        if let Some(dir) = self.dump_text {
            config.dump_text_dir = Some(dir);
        }
        if let Some(question_type) = self.question_type {
            config.question_type = question_type;
        }
        if let Some(subject) = self.subject {
            config.subject = subject;
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        config.verbose_logging |= self.verbose;
        (config, self.questions, self.answers)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 加载配置
    let config = Config::load(args.config.as_deref())?;
    let (config, question_pdf, answer_pdf) = args.apply(config);

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config, question_pdf, answer_pdf).run()?;

    Ok(())
}
