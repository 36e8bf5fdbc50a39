// ==========================================
// 列车入列排名系统 - Scoring Core 纯函数库
// ==========================================
// 依据: Induction_Engine_Specs_v0.2.md - 3. 五维子分
// 职责: 提供五维子分与加权总分的纯逻辑
// 红线: 无状态、无副作用、无 I/O 操作; 所有子分 ∈ [0,1]
// ==========================================

use crate::config::{ScoringProfile, ScoringWeights};
use crate::domain::trainset::{BrandingContract, JobCard};
use crate::domain::types::Severity;
use crate::engine::error::ScoringError;
use serde::{Deserialize, Serialize};

// ==========================================
// 品牌广告子分内部系数
// ==========================================
// 金额因子主导、数量因子辅助,两者各自封顶,避免单一维度淹没另一方。
// 这是子分的内部形态,维度间权重见 ScoringWeights。
const BRANDING_AMOUNT_FACTOR_SHARE: f64 = 0.7;
const BRANDING_COUNT_FACTOR_SHARE: f64 = 0.3;

// ==========================================
// SubScores - 五维子分
// ==========================================
// 不变量: 每个子分经计算后 ∈ [0,1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub fitness: f64,  // 适检子分（门禁后恒为 1.0,保留为显式加权项）
    pub job_card: f64, // 检修工单风险子分
    pub branding: f64, // 品牌广告优先级子分
    pub mileage: f64,  // 走行公里子分（车队相对）
    pub cleaning: f64, // 清洁子分
}

// ==========================================
// ScoringCore - 纯函数工具类
// ==========================================
pub struct ScoringCore;

impl ScoringCore {
    /// 计算检修工单风险子分
    ///
    /// # 规则 (Induction_Engine_Specs 3.1)
    /// - 按严重等级累计罚分（critical 1.0 / moderate 0.6 / minor 0.3,可注入）
    /// - score = max(0, 1 - total_penalty / max_job_cards)
    /// - 零工单 → 1.0; 罚分达到上限 → 0.0（下限封底,不得为负）
    ///
    /// # 参数
    /// - `cards`: 未关闭工单列表
    /// - `profile`: 评分策略配置
    ///
    /// # 返回
    /// - `Err(ScoringError::InvalidSeverity)`: 等级码无法解析
    ///   （显式失败,不得静默按零罚分参与）
    pub fn job_card_score(
        cards: &[JobCard],
        profile: &ScoringProfile,
    ) -> Result<f64, ScoringError> {
        let mut total_penalty = 0.0;
        for card in cards {
            let severity = Severity::from_code(&card.severity_code).ok_or_else(|| {
                ScoringError::InvalidSeverity {
                    trainset_id: card.trainset_id.clone(),
                    job_id: card.job_id,
                    code: card.severity_code.clone(),
                }
            })?;
            total_penalty += profile.penalties.penalty_for(severity);
        }

        let max_penalty = profile.max_job_cards as f64;
        Ok((1.0 - total_penalty / max_penalty).max(0.0))
    }

    /// 计算品牌广告优先级子分
    ///
    /// # 规则 (Induction_Engine_Specs 3.2)
    /// - amount_factor = min(1, Σ contract_value / branding_amount_ceiling)
    /// - count_factor  = min(1, count / max_branding_slots)
    /// - score = 0.7 × amount_factor + 0.3 × count_factor
    pub fn branding_score(contracts: &[BrandingContract], profile: &ScoringProfile) -> f64 {
        let total_value: f64 = contracts.iter().map(|c| c.contract_value).sum();
        let total_value = if total_value.is_finite() { total_value } else { 0.0 };

        let amount_factor = (total_value / profile.branding_amount_ceiling).min(1.0);
        let count_factor =
            (contracts.len() as f64 / profile.max_branding_slots as f64).min(1.0);

        BRANDING_AMOUNT_FACTOR_SHARE * amount_factor + BRANDING_COUNT_FACTOR_SHARE * count_factor
    }

    /// 计算走行公里子分（车队相对）
    ///
    /// # 规则 (Induction_Engine_Specs 3.3)
    /// - max_km > 0 → 1 - mileage_km / max_km
    /// - max_km = 0 → 1.0（全零走行的退化车队）
    /// - 结果夹取到 [0,1]（录入不一致导致 mileage > max 时不得产生负分）
    ///
    /// # 参数
    /// - `mileage_km`: 该车组累计走行公里
    /// - `max_km`: 车队最大走行公里（含不适检车组的全队统计量）
    pub fn mileage_score(mileage_km: f64, max_km: f64) -> f64 {
        if max_km <= 0.0 {
            return 1.0;
        }
        let mileage_km = if mileage_km.is_finite() { mileage_km } else { 0.0 };
        (1.0 - mileage_km / max_km).clamp(0.0, 1.0)
    }

    /// 计算清洁子分
    ///
    /// # 规则 (Induction_Engine_Specs 3.4)
    /// 二值: 已清洁 1.0 / 未清洁 0.0,无部分得分
    pub fn cleaning_score(is_clean: bool) -> f64 {
        if is_clean {
            1.0
        } else {
            0.0
        }
    }

    /// 计算适检子分
    ///
    /// # 规则 (Induction_Engine_Specs 3.5)
    /// 二值: 证书有效 1.0 / 无效 0.0。
    /// 门禁已把无效证书车组整体排除,到达加权阶段的车组此分恒为 1.0;
    /// 仍保留为显式加权项,保证评分公式统一可审计。
    pub fn fitness_score(fitness_valid: bool) -> f64 {
        if fitness_valid {
            1.0
        } else {
            0.0
        }
    }

    /// 计算加权总分
    ///
    /// # 规则 (Induction_Engine_Specs 4)
    /// total = Σ weight_i × sub_score_i（五维,权重之和已在配置期校验为 1.0）
    pub fn weighted_total(sub_scores: &SubScores, weights: &ScoringWeights) -> f64 {
        weights.fitness * sub_scores.fitness
            + weights.job_card * sub_scores.job_card
            + weights.branding * sub_scores.branding
            + weights.mileage * sub_scores.mileage
            + weights.cleaning * sub_scores.cleaning
    }
}
