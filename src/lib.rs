// ==========================================
// 列车入列排名系统 - 核心库
// ==========================================
// 系统定位: 决策支持系统 (排名为建议,人工最终控制权)
// 职责: 每夜对车队做一次确定性评分,产出次日入列排名
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 评分与排名规则
pub mod engine;

// 配置层 - 评分策略旋钮
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{InductionVerdict, Severity};

// 领域实体
pub use domain::{BrandingContract, DomainError, JobCard, Trainset};

// 配置
pub use config::{ConfigError, ScoringProfile, ScoringWeights, SeverityPenaltyTable};

// 引擎
pub use engine::{
    EligibilityEngine, EligibilityVerdict, EngineError, InductionRanker, MileageStats,
    RankedTrainset, RankingResult, ScoringCore, ScoringError, ScoringIssue, SubScores,
    TrainsetScorecard,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "列车入列排名系统";

// ==========================================
// 预编译检查
// ==========================================

// 确保编译时所有模块可见
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
