// ==========================================
// 列车入列排名系统 - 领域层错误类型
// ==========================================
// 依据: Rust 错误处理最佳实践
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 领域层错误类型
#[derive(Error, Debug)]
pub enum DomainError {
    // ===== 容量约束错误 =====
    #[error("广告位已满: trainset_id={trainset_id}, max_slots={max_slots}")]
    BrandingCapacityExceeded {
        trainset_id: String,
        max_slots: usize,
    },

    // ===== 数据质量错误 =====
    #[error("字段值错误 (field={field}): {message}")]
    FieldValueError { field: String, message: String },
}

/// Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
