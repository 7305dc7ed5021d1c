use crate::error::{AppError, AppResult};
use crate::models::RecordMetadata;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 程序配置
///
/// 优先级从低到高：默认值 → TOML 配置文件 → 环境变量 → 命令行参数
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 输出 JSON 文件路径
    pub output_file: PathBuf,
    /// 题目类型（固定写入每道题）
    pub question_type: String,
    /// 科目（固定写入每道题）
    pub subject: String,
    /// 难度（固定写入每道题）
    pub difficulty: String,
    /// 保存提取出的原始文本的目录，不设置则不保存
    pub dump_text_dir: Option<PathBuf>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        let metadata = RecordMetadata::default();
        Self {
            output_file: PathBuf::from("questions.json"),
            question_type: metadata.question_type,
            subject: metadata.subject,
            difficulty: metadata.difficulty,
            dump_text_dir: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 加载配置：可选的 TOML 文件，再叠加环境变量
    pub fn load(toml_path: Option<&Path>) -> AppResult<Self> {
        let base = match toml_path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_env_overrides(|name| std::env::var(name).ok()))
    }

    /// 从 TOML 文件加载，缺失的字段使用默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 仅使用环境变量覆盖默认值
    pub fn from_env() -> Self {
        Self::default().with_env_overrides(|name| std::env::var(name).ok())
    }

    /// 用 `lookup` 查到的变量覆盖已有字段
    pub fn with_env_overrides<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            output_file: lookup("OUTPUT_FILE").map(PathBuf::from).unwrap_or(self.output_file),
            question_type: lookup("QUESTION_TYPE").unwrap_or(self.question_type),
            subject: lookup("QUESTION_SUBJECT").unwrap_or(self.subject),
            difficulty: lookup("QUESTION_DIFFICULTY").unwrap_or(self.difficulty),
            dump_text_dir: lookup("DUMP_TEXT_DIR").map(PathBuf::from).or(self.dump_text_dir),
            verbose_logging: lookup("VERBOSE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.verbose_logging),
        }
    }

    /// 每道题共用的描述信息
    pub fn metadata(&self) -> RecordMetadata {
        RecordMetadata {
            question_type: self.question_type.clone(),
            subject: self.subject.clone(),
            difficulty: self.difficulty.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults_match_output_contract() {
        let config = Config::default();
        assert_eq!(config.output_file, PathBuf::from("questions.json"));
        assert_eq!(config.metadata(), RecordMetadata::default());
        assert!(config.dump_text_dir.is_none());
    }

    #[test]
    fn test_toml_file_fills_missing_fields_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "subject = \"小学数学\"\noutput_file = \"out/math.json\"").unwrap();

        let config = Config::from_toml_file(file.path()).unwrap();
        assert_eq!(config.subject, "小学数学");
        assert_eq!(config.output_file, PathBuf::from("out/math.json"));
        assert_eq!(config.difficulty, "medium");
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "verbose_logging = \"maybe").unwrap();

        let err = Config::from_toml_file(file.path()).unwrap_err();
        assert!(matches!(err, AppError::ConfigParse { .. }));
    }

    #[test]
    fn test_env_overrides_take_precedence() {
        let vars: HashMap<&str, &str> = [
            ("QUESTION_DIFFICULTY", "hard"),
            ("VERBOSE_LOGGING", "true"),
            ("DUMP_TEXT_DIR", "dump"),
        ]
        .into_iter()
        .collect();

        let config = Config {
            difficulty: "easy".to_string(),
            ..Config::default()
        }
        .with_env_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.difficulty, "hard");
        assert!(config.verbose_logging);
        assert_eq!(config.dump_text_dir, Some(PathBuf::from("dump")));
        assert_eq!(config.question_type, "multiple_choice");
    }

    #[test]
    fn test_unparsable_bool_keeps_previous_value() {
        let config = Config::default().with_env_overrides(|name| {
            (name == "VERBOSE_LOGGING").then(|| "yes please".to_string())
        });
        assert!(!config.verbose_logging);
    }
}
