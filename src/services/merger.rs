//! 题目与答案合并 - 业务能力层

use crate::models::{AnswerRecord, QuestionRecord};
use std::collections::{HashMap, HashSet};

/// 按题号把答案并入题目（左连接）
///
/// - 每道题都保留，顺序不变
/// - 同一题号有多条答案时，以答案列表中靠后的为准
/// - 没有对应题目的答案被忽略
pub fn merge(mut questions: Vec<QuestionRecord>, answers: &[AnswerRecord]) -> Vec<QuestionRecord> {
    let lookup: HashMap<u64, &AnswerRecord> = answers.iter().map(|a| (a.id, a)).collect();

    for question in questions.iter_mut() {
        if let Some(answer) = lookup.get(&question.id) {
            question.answer = Some(answer.answer);
            question.explanation = answer.explanation.clone();
        }
    }

    questions
}

/// 合并结果统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeSummary {
    /// 题目总数
    pub questions: usize,
    /// 答案总数
    pub answers: usize,
    /// 匹配到答案的题目数
    pub answered: usize,
    /// 找不到对应题目的答案题号数（去重）
    pub orphan_answers: usize,
}

impl MergeSummary {
    /// 统计合并后的记录
    pub fn compute(records: &[QuestionRecord], answers: &[AnswerRecord]) -> Self {
        let question_ids: HashSet<u64> = records.iter().map(|r| r.id).collect();
        let orphan_ids: HashSet<u64> = answers
            .iter()
            .map(|a| a.id)
            .filter(|id| !question_ids.contains(id))
            .collect();

        Self {
            questions: records.len(),
            answers: answers.len(),
            answered: records.iter().filter(|r| r.is_answered()).count(),
            orphan_answers: orphan_ids.len(),
        }
    }
}
