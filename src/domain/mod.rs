// ==========================================
// 列车入列排名系统 - 领域模型层
// ==========================================
// 依据: Induction_Engine_Specs_v0.2.md - 1. 数据模型
// ==========================================
// 职责: 定义领域实体、类型、业务规则接口
// 红线: 不含引擎逻辑,不含展示逻辑
// ==========================================

pub mod error;
pub mod trainset;
pub mod types;

// 重导出核心类型
pub use error::{DomainError, DomainResult};
pub use trainset::{BrandingContract, JobCard, Trainset};
pub use types::{InductionVerdict, Severity};
