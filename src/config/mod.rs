// ==========================================
// 列车入列排名系统 - 配置层
// ==========================================
// 依据: Induction_Engine_Specs_v0.2.md - 5. 配置项全集
// ==========================================
// 职责: 评分策略旋钮管理（权重/罚分表/归一化上限）
// 红线: 配置错误为启动期致命条件,评分不得开始
// ==========================================

pub mod scoring_profile;

// 重导出核心配置类型
pub use scoring_profile::{
    ConfigError, ConfigResult, ScoringProfile, ScoringWeights, SeverityPenaltyTable,
    WEIGHT_SUM_TOLERANCE,
};
