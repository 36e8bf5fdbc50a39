// ==========================================
// 列车入列排名系统 - 引擎层
// ==========================================
// 依据: Induction_Engine_Specs_v0.2.md - 1.2 模块拆分
// ==========================================
// 职责: 实现评分与排名业务规则
// 红线: 引擎只读快照,不做 I/O; 所有判定必须输出 reason
// ==========================================

pub mod eligibility;
pub mod error;
pub mod fleet_stats;
pub mod ranking;
pub mod scoring;

// 重导出核心引擎
pub use eligibility::{EligibilityEngine, EligibilityVerdict};
pub use error::{EngineError, EngineResult, ScoringError, ScoringIssue};
pub use fleet_stats::MileageStats;
pub use ranking::{InductionRanker, RankedTrainset, RankingResult, TrainsetScorecard};
pub use scoring::{ScoringCore, SubScores};
