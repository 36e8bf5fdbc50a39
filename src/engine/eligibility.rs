// ==========================================
// 列车入列排名系统 - 入列门禁引擎
// ==========================================
// 依据: Induction_Engine_Specs_v0.2.md - 2. Eligibility Gate
// 红线: 适检证书无效的车组不得进入排名输出
// ==========================================
// 职责: 适检证书门禁判定
// 输入: 车组快照（只读）
// 输出: 逐车组判定 + 审计原因（供外部报表层消费,不参与排名逻辑）
// ==========================================

use crate::domain::trainset::Trainset;
use crate::domain::types::InductionVerdict;
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ==========================================
// EligibilityVerdict - 单车组门禁判定
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    /// 车组号
    pub trainset_id: String,
    /// 判定结果
    pub verdict: InductionVerdict,
    /// 判定原因（可解释性,逐条审计）
    pub reasons: Vec<String>,
}

// ==========================================
// EligibilityEngine - 入列门禁引擎
// ==========================================
// 红线: 门禁唯一输入是适检证书标志,其余字段不参与判定
pub struct EligibilityEngine {
    // 无状态引擎,不需要注入依赖
}

impl EligibilityEngine {
    /// 构造函数
    ///
    /// # 返回
    /// 新的 EligibilityEngine 实例
    pub fn new() -> Self {
        Self {}
    }

    /// 判定单个车组的入列资格
    ///
    /// # 参数
    /// - `trainset`: 车组快照
    ///
    /// # 返回
    /// - `(InductionVerdict, Vec<String>)`: 判定结果和审计原因
    #[instrument(skip(self, trainset), fields(trainset_id = %trainset.trainset_id))]
    pub fn evaluate_single(&self, trainset: &Trainset) -> (InductionVerdict, Vec<String>) {
        if !trainset.fitness_valid {
            return (
                InductionVerdict::FitnessDenied,
                vec!["FITNESS_DENIED: invalid fitness certificate".to_string()],
            );
        }

        (
            InductionVerdict::Eligible,
            vec!["FITNESS_OK: certificate valid".to_string()],
        )
    }

    /// 批量判定整个车队
    ///
    /// # 参数
    /// - `fleet`: 车队快照列表
    ///
    /// # 返回
    /// 与输入同序的逐车组判定列表
    pub fn evaluate_fleet(&self, fleet: &[Trainset]) -> Vec<EligibilityVerdict> {
        fleet
            .iter()
            .map(|trainset| {
                let (verdict, reasons) = self.evaluate_single(trainset);
                EligibilityVerdict {
                    trainset_id: trainset.trainset_id.clone(),
                    verdict,
                    reasons,
                }
            })
            .collect()
    }
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::new()
    }
}
