// ==========================================
// 列车入列排名系统 - 车队走行统计
// ==========================================
// 依据: Induction_Engine_Specs_v0.2.md - 3.3 走行公里子分(第一阶段)
// ==========================================
// 职责: 每次评分运行计算一次全队走行统计量,
//       作为走行子分阶段的只读输入
// 红线: 统计量覆盖全队（含不适检车组）,与门禁无关;
//       必须在任何走行子分计算之前完整得出
// ==========================================

use crate::domain::trainset::Trainset;
use serde::{Deserialize, Serialize};

// ==========================================
// MileageStats - 车队走行统计量
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MileageStats {
    /// 全队平均走行公里（描述性统计,随结果输出,不参与逐车公式）
    pub average_km: f64,
    /// 全队最大走行公里（走行子分的归一化基准）
    pub max_km: f64,
}

impl MileageStats {
    /// 计算全队走行统计量
    ///
    /// # 规则
    /// - 遍历全队（不做门禁过滤）
    /// - 空车队约定: average_km = max_km = 0.0（非错误）
    /// - 非有限走行值按 0 参与（录入防御）
    pub fn compute(fleet: &[Trainset]) -> Self {
        if fleet.is_empty() {
            return Self {
                average_km: 0.0,
                max_km: 0.0,
            };
        }

        let mut sum = 0.0;
        let mut max_km: f64 = 0.0;
        for trainset in fleet {
            let km = if trainset.mileage_km.is_finite() {
                trainset.mileage_km
            } else {
                0.0
            };
            sum += km;
            max_km = max_km.max(km);
        }

        Self {
            average_km: sum / fleet.len() as f64,
            max_km,
        }
    }
}
