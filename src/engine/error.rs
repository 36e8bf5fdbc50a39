// ==========================================
// 列车入列排名系统 - 引擎层错误类型
// ==========================================
// 依据: Induction_Engine_Specs_v0.2.md - 6. 错误分级
// 职责: 定义评分管线错误与可收集的数据质量问题
// 红线: 单条记录的数据形态错误不得中止整个车队的评分
// ==========================================

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ==========================================
// ScoringError - 单条记录评分错误
// ==========================================
// 传播策略: 局部于单条记录,由排名引擎收集后随结果一并返回
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// 工单严重等级码无法解析
    #[error("未知工单严重等级码: trainset_id={trainset_id}, job_id={job_id}, code='{code}'")]
    InvalidSeverity {
        trainset_id: String,
        job_id: i64,
        code: String,
    },
}

// ==========================================
// EngineError - 引擎层统一错误类型
// ==========================================
#[derive(Error, Debug)]
pub enum EngineError {
    /// 单条记录评分错误
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    /// 配置校验错误（启动期致命）
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// 通用错误
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;

// ==========================================
// ScoringIssue - 数据质量问题明细
// ==========================================

/// 评分运行中收集到的单条数据质量问题
///
/// 随 `RankingResult` 一并返回给调用方（可解释性），
/// 取代对深层数据对象里直接打印拒绝信息的做法
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringIssue {
    /// 问题类型（INVALID_SEVERITY）
    pub issue_type: String,
    /// 车组号
    pub trainset_id: String,
    /// 问题原因
    pub reason: String,
    /// 额外信息（可选）
    pub details: Option<serde_json::Value>,
}

impl ScoringIssue {
    /// 由单条记录评分错误构造问题明细
    pub fn from_scoring_error(err: &ScoringError) -> Self {
        match err {
            ScoringError::InvalidSeverity {
                trainset_id,
                job_id,
                code,
            } => ScoringIssue {
                issue_type: "INVALID_SEVERITY".to_string(),
                trainset_id: trainset_id.clone(),
                reason: err.to_string(),
                details: Some(serde_json::json!({
                    "job_id": job_id,
                    "severity_code": code,
                })),
            },
        }
    }
}
