// ==========================================
// 列车入列排名系统 - 车组领域模型
// ==========================================
// 依据: Induction_Engine_Specs_v0.2.md - 1. 数据模型
// ==========================================
// 红线: 快照一旦构造即为只读输入,评分管线不得回写
// 用途: 外部车队数据装载层写入,引擎层只读
// ==========================================

use crate::domain::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

// ==========================================
// JobCard - 检修工单
// ==========================================
// 用途: 记录一张未关闭的检修工单
// 说明: severity_code 为源字段原文,由引擎层解析
//       (未知等级码在引擎层转为显式错误,不在此处拦截)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCard {
    pub job_id: i64,             // 工单号
    pub trainset_id: String,     // 所属车组号
    pub severity_code: String,   // 严重等级码（源字段: MINOR/MODERATE/CRITICAL）
}

impl JobCard {
    pub fn new(job_id: i64, trainset_id: impl Into<String>, severity_code: impl Into<String>) -> Self {
        Self {
            job_id,
            trainset_id: trainset_id.into(),
            severity_code: severity_code.into(),
        }
    }
}

// ==========================================
// BrandingContract - 品牌广告合同
// ==========================================
// 用途: 记录一份车身广告承诺（占用一个广告位）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandingContract {
    pub sponsor_name: String,   // 赞助商名称
    pub duration_months: i32,   // 合同期限（月）
    pub contract_value: f64,    // 合同金额（货币单位，≥0）
}

impl BrandingContract {
    pub fn new(sponsor_name: impl Into<String>, duration_months: i32, contract_value: f64) -> Self {
        Self {
            sponsor_name: sponsor_name.into(),
            duration_months,
            contract_value,
        }
    }
}

// ==========================================
// Trainset - 车组静态快照
// ==========================================
// 红线: 广告位上限之外的合同必须显式拒绝,不得静默丢弃或覆盖
// 用途: 每次评分运行构造一次,运行结束即丢弃（无持久化）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trainset {
    // ===== 主键 =====
    pub trainset_id: String, // 车组唯一标识（车队内唯一）

    // ===== 适检状态 =====
    pub fitness_valid: bool, // 适检证书是否有效（入列门禁唯一输入）

    // ===== 检修工单 =====
    pub open_job_cards: Vec<JobCard>, // 未关闭工单（有序）

    // ===== 走行公里 =====
    pub mileage_km: f64, // 累计走行公里（≥0）

    // ===== 清洁状态 =====
    pub is_clean: bool, // 是否已完成清洁

    // ===== 品牌广告 =====
    pub branding_contracts: Vec<BrandingContract>, // 广告合同（≤广告位上限）
}

impl Trainset {
    /// 构造车组快照
    ///
    /// # 参数
    /// - `trainset_id`: 车组号
    /// - `fitness_valid`: 适检证书有效性
    /// - `open_job_cards`: 未关闭工单列表
    /// - `mileage_km`: 累计走行公里
    /// - `is_clean`: 清洁状态
    pub fn new(
        trainset_id: impl Into<String>,
        fitness_valid: bool,
        open_job_cards: Vec<JobCard>,
        mileage_km: f64,
        is_clean: bool,
    ) -> Self {
        Self {
            trainset_id: trainset_id.into(),
            fitness_valid,
            open_job_cards,
            mileage_km,
            is_clean,
            branding_contracts: Vec::new(),
        }
    }

    /// 挂载品牌广告合同
    ///
    /// # 规则 (Induction_Engine_Specs 3.3)
    /// - 合同数已达 `max_slots` 时拒绝挂载,合同集保持不变
    ///
    /// # 参数
    /// - `contract`: 待挂载合同
    /// - `max_slots`: 广告位上限（策略配置 `max_branding_slots`）
    ///
    /// # 返回
    /// - `Err(DomainError::BrandingCapacityExceeded)`: 超出广告位上限
    pub fn add_branding(&mut self, contract: BrandingContract, max_slots: usize) -> DomainResult<()> {
        if self.branding_contracts.len() >= max_slots {
            return Err(DomainError::BrandingCapacityExceeded {
                trainset_id: self.trainset_id.clone(),
                max_slots,
            });
        }
        self.branding_contracts.push(contract);
        Ok(())
    }

    /// 广告合同金额合计
    pub fn total_branding_value(&self) -> f64 {
        self.branding_contracts.iter().map(|c| c.contract_value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_branding_within_capacity() {
        let mut ts = Trainset::new("TS01", true, vec![], 2500.0, true);

        for i in 0..4 {
            let contract = BrandingContract::new(format!("Sponsor{}", i), 12, 100_000.0);
            assert!(ts.add_branding(contract, 4).is_ok());
        }
        assert_eq!(ts.branding_contracts.len(), 4);
    }

    #[test]
    fn test_add_branding_rejects_fifth_contract() {
        let mut ts = Trainset::new("TS01", true, vec![], 2500.0, true);

        for i in 0..4 {
            let contract = BrandingContract::new(format!("Sponsor{}", i), 12, 100_000.0);
            ts.add_branding(contract, 4).unwrap();
        }

        // 第5份合同必须被拒绝,且合同集保持为4
        let overflow = BrandingContract::new("Overflow", 6, 50_000.0);
        let result = ts.add_branding(overflow, 4);
        match result {
            Err(DomainError::BrandingCapacityExceeded {
                trainset_id,
                max_slots,
            }) => {
                assert_eq!(trainset_id, "TS01");
                assert_eq!(max_slots, 4);
            }
            _ => panic!("Expected BrandingCapacityExceeded"),
        }
        assert_eq!(ts.branding_contracts.len(), 4);
    }

    #[test]
    fn test_total_branding_value() {
        let mut ts = Trainset::new("TS02", true, vec![], 6000.0, false);
        ts.add_branding(BrandingContract::new("Samsung", 18, 700_000.0), 4)
            .unwrap();
        ts.add_branding(BrandingContract::new("LG", 10, 250_000.0), 4)
            .unwrap();

        assert_eq!(ts.total_branding_value(), 950_000.0);
    }
}
