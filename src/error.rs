use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 输入文件不存在
    #[error("{kind}文件不存在: {}", .path.display())]
    InputNotFound { kind: DocumentKind, path: PathBuf },

    /// 写入输出文件失败
    #[error("写入文件失败 ({}): {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON 序列化失败
    #[error("JSON序列化失败: {0}")]
    Json(#[from] serde_json::Error),

    /// 读取配置文件失败
    #[error("读取配置文件失败 ({}): {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 解析配置文件失败
    #[error("TOML解析失败 ({}): {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// 内置正则表达式编译失败
    #[error("正则表达式编译失败: {0}")]
    Pattern(#[from] regex::Error),

    /// 保存提取文本失败
    #[error("保存文本失败 ({}): {source}", .path.display())]
    TextDump {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 输入文档种类，用于日志和错误信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// 题目 PDF
    Questions,
    /// 答案 PDF
    Answers,
}

impl DocumentKind {
    /// 原始文本保存时使用的文件名
    pub fn dump_file_name(self) -> &'static str {
        match self {
            DocumentKind::Questions => "questions_text.txt",
            DocumentKind::Answers => "answers_text.txt",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Questions => write!(f, "题目"),
            DocumentKind::Answers => write!(f, "答案"),
        }
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建输入文件不存在错误
    pub fn input_not_found(kind: DocumentKind, path: impl Into<PathBuf>) -> Self {
        AppError::InputNotFound {
            kind,
            path: path.into(),
        }
    }

    /// 创建文件写入错误
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Write {
            path: path.into(),
            source,
        }
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found_message_names_document() {
        let err = AppError::input_not_found(DocumentKind::Answers, "answers.pdf");
        assert_eq!(err.to_string(), "答案文件不存在: answers.pdf");
    }

    #[test]
    fn test_write_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AppError::write_failed("/readonly/out.json", io);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("/readonly/out.json"));
    }
}
