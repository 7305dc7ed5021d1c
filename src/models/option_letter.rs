use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 选项字母枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
}

impl OptionLetter {
    /// 获取字母字符串
    pub fn as_str(self) -> &'static str {
        match self {
            OptionLetter::A => "A",
            OptionLetter::B => "B",
            OptionLetter::C => "C",
            OptionLetter::D => "D",
        }
    }

    /// 从单个字符解析（区分大小写）
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(OptionLetter::A),
            'B' => Some(OptionLetter::B),
            'C' => Some(OptionLetter::C),
            'D' => Some(OptionLetter::D),
            _ => None,
        }
    }

    /// 从字符串解析，必须恰好是一个字母
    pub fn from_str(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OptionLetter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

struct OptionLetterVisitor;

impl<'de> Visitor<'de> for OptionLetterVisitor {
    type Value = OptionLetter;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("one of the letters A, B, C, D")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        OptionLetter::from_str(value)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

impl<'de> Deserialize<'de> for OptionLetter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(OptionLetterVisitor)
    }
}

/// 答案字段：无答案时序列化为空字符串
pub(crate) mod answer_field {
    use super::OptionLetter;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(answer: &Option<OptionLetter>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(answer.map(OptionLetter::as_str).unwrap_or(""))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<OptionLetter>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        OptionLetter::from_str(&raw).map(Some).ok_or_else(|| {
            serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(&raw),
                &"an empty string or one of A, B, C, D",
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_is_case_sensitive() {
        assert_eq!(OptionLetter::from_char('B'), Some(OptionLetter::B));
        assert_eq!(OptionLetter::from_char('b'), None);
        assert_eq!(OptionLetter::from_char('E'), None);
    }

    #[test]
    fn test_from_str_requires_single_letter() {
        assert_eq!(OptionLetter::from_str("D"), Some(OptionLetter::D));
        assert_eq!(OptionLetter::from_str("AB"), None);
        assert_eq!(OptionLetter::from_str(""), None);
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&OptionLetter::C).unwrap();
        assert_eq!(json, "\"C\"");
        let back: OptionLetter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OptionLetter::C);
        assert!(serde_json::from_str::<OptionLetter>("\"X\"").is_err());
    }
}
