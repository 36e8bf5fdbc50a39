// ==========================================
// 列车入列排名系统 - 领域类型定义
// ==========================================
// 依据: Induction_Engine_Specs_v0.2.md - 0.2 判定体系
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 检修工单严重等级 (Job Card Severity)
// ==========================================
// 红线: 未知等级码是显式错误条件,不得静默视为零罚分
// 序列化格式: SCREAMING_SNAKE_CASE (与外部数据源一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Minor,    // 轻微
    Moderate, // 中等
    Critical, // 严重
}

impl Severity {
    /// 从源字段等级码解析严重等级
    ///
    /// 等级码大小写不敏感（外部数据流混用 "minor" / "MINOR"）
    ///
    /// # 参数
    /// - `code`: 源字段等级码
    ///
    /// # 返回
    /// - `Some(Severity)`: 解析成功
    /// - `None`: 未知等级码（由调用方转为显式错误）
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "MINOR" => Some(Severity::Minor),
            "MODERATE" => Some(Severity::Moderate),
            "CRITICAL" => Some(Severity::Critical),
            _ => None,
        }
    }

    /// 转换为规范等级码
    pub fn as_code(&self) -> &'static str {
        match self {
            Severity::Minor => "MINOR",
            Severity::Moderate => "MODERATE",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

// ==========================================
// 入列判定 (Induction Verdict)
// ==========================================
// 依据: Induction_Engine_Specs 2. Eligibility Gate
// 红线: FITNESS_DENIED / DATA_BLOCKED 不得出现在排名输出中
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InductionVerdict {
    Eligible,      // 适检通过,参与评分与排名
    FitnessDenied, // 适检证书无效,拒绝入列
    DataBlocked,   // 数据质量阻断(工单等级码无法解析)
}

impl InductionVerdict {
    /// 是否参与后续评分与排名
    pub fn is_eligible(&self) -> bool {
        matches!(self, InductionVerdict::Eligible)
    }
}

impl fmt::Display for InductionVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InductionVerdict::Eligible => write!(f, "ELIGIBLE"),
            InductionVerdict::FitnessDenied => write!(f, "FITNESS_DENIED"),
            InductionVerdict::DataBlocked => write!(f, "DATA_BLOCKED"),
        }
    }
}
