// ==========================================
// 列车入列排名系统 - 评分策略配置
// ==========================================
// 依据: Induction_Engine_Specs_v0.2.md - 5. 配置项全集
// ==========================================
// 职责: 把评分策略旋钮（权重/罚分表/归一化上限）收敛为
//       一个可注入、可校验的配置结构
// 红线: 五维权重之和必须为 1.0（启动期致命错误,非运行期可恢复）
// ==========================================

use crate::domain::types::Severity;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ==========================================
// 默认策略常数
// ==========================================
// 参考策略基线,全部可被注入配置覆盖
pub const DEFAULT_FITNESS_WEIGHT: f64 = 0.25;
pub const DEFAULT_JOB_CARD_WEIGHT: f64 = 0.20;
pub const DEFAULT_BRANDING_WEIGHT: f64 = 0.20;
pub const DEFAULT_MILEAGE_WEIGHT: f64 = 0.20;
pub const DEFAULT_CLEANING_WEIGHT: f64 = 0.15;

pub const DEFAULT_MINOR_PENALTY: f64 = 0.3;
pub const DEFAULT_MODERATE_PENALTY: f64 = 0.6;
pub const DEFAULT_CRITICAL_PENALTY: f64 = 1.0;

pub const DEFAULT_MAX_JOB_CARDS: u32 = 10;
pub const DEFAULT_BRANDING_AMOUNT_CEILING: f64 = 2_000_000.0;
pub const DEFAULT_MAX_BRANDING_SLOTS: usize = 4;

/// 权重之和校验容差
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

// ==========================================
// ConfigError - 配置校验错误
// ==========================================
// 红线: 配置错误在任何评分开始前中止运行
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("权重配置无效: 五维权重之和={sum}, 要求 1.0 (±{tolerance})")]
    WeightSumInvalid { sum: f64, tolerance: f64 },

    #[error("权重配置无效: {field} 非有限数值或为负")]
    InvalidWeight { field: &'static str },

    #[error("罚分表无效: {severity} 罚分为负或非有限数值")]
    InvalidPenalty { severity: &'static str },

    #[error("归一化上限无效: {field} 必须为正数")]
    NonPositiveCeiling { field: &'static str },
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// ScoringWeights - 五维权重
// ==========================================
// 说明: 每个策略关心的维度在总分公式中恰好出现一次,
//       各带独立权重（fitness 虽被门禁弱化仍保留权重项,保证公式统一可审计）
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// 适检维度权重
    #[serde(default = "default_fitness_weight")]
    pub fitness: f64,

    /// 检修工单维度权重
    #[serde(default = "default_job_card_weight")]
    pub job_card: f64,

    /// 品牌广告维度权重
    #[serde(default = "default_branding_weight")]
    pub branding: f64,

    /// 走行公里维度权重
    #[serde(default = "default_mileage_weight")]
    pub mileage: f64,

    /// 清洁维度权重
    #[serde(default = "default_cleaning_weight")]
    pub cleaning: f64,
}

fn default_fitness_weight() -> f64 {
    DEFAULT_FITNESS_WEIGHT
}
fn default_job_card_weight() -> f64 {
    DEFAULT_JOB_CARD_WEIGHT
}
fn default_branding_weight() -> f64 {
    DEFAULT_BRANDING_WEIGHT
}
fn default_mileage_weight() -> f64 {
    DEFAULT_MILEAGE_WEIGHT
}
fn default_cleaning_weight() -> f64 {
    DEFAULT_CLEANING_WEIGHT
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            fitness: DEFAULT_FITNESS_WEIGHT,
            job_card: DEFAULT_JOB_CARD_WEIGHT,
            branding: DEFAULT_BRANDING_WEIGHT,
            mileage: DEFAULT_MILEAGE_WEIGHT,
            cleaning: DEFAULT_CLEANING_WEIGHT,
        }
    }
}

impl ScoringWeights {
    /// 权重之和
    pub fn sum(&self) -> f64 {
        self.fitness + self.job_card + self.branding + self.mileage + self.cleaning
    }

    /// 校验权重配置
    ///
    /// # 规则
    /// 1. 每个权重必须为有限非负数
    /// 2. 五维权重之和 = 1.0 (±容差)
    pub fn validate(&self) -> ConfigResult<()> {
        let fields: [(&'static str, f64); 5] = [
            ("fitness", self.fitness),
            ("job_card", self.job_card),
            ("branding", self.branding),
            ("mileage", self.mileage),
            ("cleaning", self.cleaning),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { field: name });
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSumInvalid {
                sum,
                tolerance: WEIGHT_SUM_TOLERANCE,
            });
        }
        Ok(())
    }
}

// ==========================================
// SeverityPenaltyTable - 工单严重等级罚分表
// ==========================================
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeverityPenaltyTable {
    /// 轻微工单罚分
    #[serde(default = "default_minor_penalty")]
    pub minor: f64,

    /// 中等工单罚分
    #[serde(default = "default_moderate_penalty")]
    pub moderate: f64,

    /// 严重工单罚分
    #[serde(default = "default_critical_penalty")]
    pub critical: f64,
}

fn default_minor_penalty() -> f64 {
    DEFAULT_MINOR_PENALTY
}
fn default_moderate_penalty() -> f64 {
    DEFAULT_MODERATE_PENALTY
}
fn default_critical_penalty() -> f64 {
    DEFAULT_CRITICAL_PENALTY
}

impl Default for SeverityPenaltyTable {
    fn default() -> Self {
        Self {
            minor: DEFAULT_MINOR_PENALTY,
            moderate: DEFAULT_MODERATE_PENALTY,
            critical: DEFAULT_CRITICAL_PENALTY,
        }
    }
}

impl SeverityPenaltyTable {
    /// 查询严重等级对应的罚分
    pub fn penalty_for(&self, severity: Severity) -> f64 {
        match severity {
            Severity::Minor => self.minor,
            Severity::Moderate => self.moderate,
            Severity::Critical => self.critical,
        }
    }

    /// 校验罚分表（非负且有限）
    pub fn validate(&self) -> ConfigResult<()> {
        let entries: [(&'static str, f64); 3] = [
            ("minor", self.minor),
            ("moderate", self.moderate),
            ("critical", self.critical),
        ];
        for (name, value) in entries {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidPenalty { severity: name });
            }
        }
        Ok(())
    }
}

// ==========================================
// ScoringProfile - 评分策略配置（完整策略旋钮集）
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringProfile {
    /// 五维权重
    #[serde(default)]
    pub weights: ScoringWeights,

    /// 工单严重等级罚分表
    #[serde(default)]
    pub penalties: SeverityPenaltyTable,

    /// 工单罚分归一化上限（最大可信罚分单位数）
    #[serde(default = "default_max_job_cards")]
    pub max_job_cards: u32,

    /// 广告金额归一化上限（假定的车组广告金额合计最大值）
    #[serde(default = "default_branding_amount_ceiling")]
    pub branding_amount_ceiling: f64,

    /// 车组广告位上限
    #[serde(default = "default_max_branding_slots")]
    pub max_branding_slots: usize,
}

fn default_max_job_cards() -> u32 {
    DEFAULT_MAX_JOB_CARDS
}
fn default_branding_amount_ceiling() -> f64 {
    DEFAULT_BRANDING_AMOUNT_CEILING
}
fn default_max_branding_slots() -> usize {
    DEFAULT_MAX_BRANDING_SLOTS
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            penalties: SeverityPenaltyTable::default(),
            max_job_cards: DEFAULT_MAX_JOB_CARDS,
            branding_amount_ceiling: DEFAULT_BRANDING_AMOUNT_CEILING,
            max_branding_slots: DEFAULT_MAX_BRANDING_SLOTS,
        }
    }
}

impl ScoringProfile {
    /// 校验完整策略配置
    ///
    /// # 规则
    /// 1. 权重校验（见 `ScoringWeights::validate`）
    /// 2. 罚分表校验（见 `SeverityPenaltyTable::validate`）
    /// 3. 归一化上限必须为正数
    ///
    /// # 返回
    /// - `Err(ConfigError)`: 启动期致命,评分不得开始
    pub fn validate(&self) -> ConfigResult<()> {
        self.weights.validate()?;
        self.penalties.validate()?;

        if self.max_job_cards == 0 {
            return Err(ConfigError::NonPositiveCeiling {
                field: "max_job_cards",
            });
        }
        if !self.branding_amount_ceiling.is_finite() || self.branding_amount_ceiling <= 0.0 {
            return Err(ConfigError::NonPositiveCeiling {
                field: "branding_amount_ceiling",
            });
        }
        if self.max_branding_slots == 0 {
            return Err(ConfigError::NonPositiveCeiling {
                field: "max_branding_slots",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        let profile = ScoringProfile::default();
        assert!(profile.validate().is_ok());
        assert!((profile.weights.sum() - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
    }

    #[test]
    fn test_weight_sum_invalid() {
        let mut profile = ScoringProfile::default();
        profile.weights.fitness = 0.5; // 和变为 1.25

        match profile.validate() {
            Err(ConfigError::WeightSumInvalid { sum, .. }) => {
                assert!((sum - 1.25).abs() < 1e-12);
            }
            other => panic!("Expected WeightSumInvalid, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut profile = ScoringProfile::default();
        profile.weights.cleaning = -0.15;
        profile.weights.fitness = 0.55; // 和仍为 1.0,但负权重必须被拒绝

        assert!(matches!(
            profile.validate(),
            Err(ConfigError::InvalidWeight { field: "cleaning" })
        ));
    }

    #[test]
    fn test_negative_penalty_rejected() {
        let mut profile = ScoringProfile::default();
        profile.penalties.moderate = -0.6;

        assert!(matches!(
            profile.validate(),
            Err(ConfigError::InvalidPenalty {
                severity: "moderate"
            })
        ));
    }

    #[test]
    fn test_nonpositive_ceilings_rejected() {
        let mut profile = ScoringProfile::default();
        profile.branding_amount_ceiling = 0.0;
        assert!(matches!(
            profile.validate(),
            Err(ConfigError::NonPositiveCeiling {
                field: "branding_amount_ceiling"
            })
        ));

        let mut profile = ScoringProfile::default();
        profile.max_job_cards = 0;
        assert!(profile.validate().is_err());

        let mut profile = ScoringProfile::default();
        profile.max_branding_slots = 0;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        // 外部只覆盖部分旋钮时,其余字段回落到参考策略基线
        let profile: ScoringProfile =
            serde_json::from_str(r#"{"max_job_cards": 20}"#).unwrap();
        assert_eq!(profile.max_job_cards, 20);
        assert_eq!(profile.max_branding_slots, DEFAULT_MAX_BRANDING_SLOTS);
        assert!(profile.validate().is_ok());
    }
}
