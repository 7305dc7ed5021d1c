//! 题号解析

/// 把正则捕获到的题号数字转为整数
///
/// 支持 ASCII 数字和全角数字（`１２`），其他脚本的数字或溢出返回 `None`。
pub fn parse_label(digits: &str) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0u64, |acc, c| {
        let digit = match c {
            '0'..='9' => c as u32 - '0' as u32,
            '０'..='９' => c as u32 - '０' as u32,
            _ => return None,
        };
        acc.checked_mul(10)?.checked_add(u64::from(digit))
    })
}
