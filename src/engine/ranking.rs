// ==========================================
// 列车入列排名系统 - 入列排名引擎
// ==========================================
// 依据: Induction_Engine_Specs_v0.2.md - 4. 加权聚合与排名
// ==========================================
// 职责: 编排完整评分管线
//       门禁 → 全队统计 → 五维子分 → 加权总分 → 确定性排序
// 红线: 输入快照只读,不发布部分结果;
//       同分由升序车组号决定次序（输出可复现）
// ==========================================

use crate::config::{ConfigResult, ScoringProfile};
use crate::domain::trainset::Trainset;
use crate::domain::types::InductionVerdict;
use crate::engine::eligibility::{EligibilityEngine, EligibilityVerdict};
use crate::engine::error::{EngineResult, ScoringIssue};
use crate::engine::fleet_stats::MileageStats;
use crate::engine::scoring::{ScoringCore, SubScores};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info, instrument, warn};

// ==========================================
// TrainsetScorecard - 单车组评分卡
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainsetScorecard {
    /// 车组号
    pub trainset_id: String,
    /// 五维子分（每项 ∈ [0,1]）
    pub sub_scores: SubScores,
    /// 加权总分
    pub total_score: f64,
}

// ==========================================
// RankedTrainset - 排名输出条目
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedTrainset {
    /// 车组号
    pub trainset_id: String,
    /// 加权总分
    pub total_score: f64,
}

// ==========================================
// RankingResult - 单次评分运行的不可变输出
// ==========================================
// 生命周期: 一次运行一个结果,整体产出,不发布部分结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingResult {
    /// 逐车组门禁判定（含审计原因,供外部报表层消费）
    pub verdicts: Vec<EligibilityVerdict>,
    /// 适检车组的评分卡（与输入同序,按车组号检索）
    pub scorecards: Vec<TrainsetScorecard>,
    /// 全队走行统计量
    pub fleet_stats: MileageStats,
    /// 最终入列排名（总分降序,同分按车组号升序）
    pub ranked: Vec<RankedTrainset>,
    /// 运行中收集的数据质量问题
    pub issues: Vec<ScoringIssue>,
    /// 结果生成时间
    pub generated_at: DateTime<Utc>,
}

// ==========================================
// InductionRanker - 入列排名引擎
// ==========================================
// 红线: 策略配置在构造期校验,校验失败评分不得开始
pub struct InductionRanker {
    profile: ScoringProfile,
    gate: EligibilityEngine,
}

impl InductionRanker {
    /// 构造入列排名引擎
    ///
    /// # 参数
    /// - `profile`: 评分策略配置
    ///
    /// # 返回
    /// - `Err(ConfigError)`: 配置无效（启动期致命,非运行期可恢复）
    pub fn new(profile: ScoringProfile) -> ConfigResult<Self> {
        profile.validate()?;
        Ok(Self {
            profile,
            gate: EligibilityEngine::new(),
        })
    }

    /// 当前生效的策略配置（只读）
    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 执行一次完整评分运行
    ///
    /// # 管线 (Induction_Engine_Specs 4)
    /// 1. 门禁判定（适检证书）
    /// 2. 全队走行统计（含不适检车组,先于任何走行子分）
    /// 3. 逐适检车组计算五维子分
    ///    （工单等级码解析失败 → DATA_BLOCKED,问题收集,车队其余不受影响）
    /// 4. 加权总分
    /// 5. 排序: 总分降序,同分按车组号升序（确定性副键）
    ///
    /// # 参数
    /// - `fleet`: 车队快照（只读,本方法不做任何回写）
    ///
    /// # 返回
    /// 单次运行的完整不可变结果
    #[instrument(skip(self, fleet), fields(fleet_size = fleet.len()))]
    pub fn rank(&self, fleet: &[Trainset]) -> RankingResult {
        // === 阶段 1: 门禁判定 ===
        let mut verdicts = self.gate.evaluate_fleet(fleet);

        // === 阶段 2: 全队走行统计（走行子分的同步屏障） ===
        let fleet_stats = MileageStats::compute(fleet);
        debug!(
            average_km = fleet_stats.average_km,
            max_km = fleet_stats.max_km,
            "fleet mileage statistics computed"
        );

        // === 阶段 3/4: 逐车组子分与加权总分 ===
        let mut scorecards = Vec::new();
        let mut issues = Vec::new();

        for (trainset, verdict) in fleet.iter().zip(verdicts.iter_mut()) {
            if !verdict.verdict.is_eligible() {
                continue;
            }

            // 工单等级码解析失败: 数据质量阻断,问题收集,不中止其余车组
            let job_card = match ScoringCore::job_card_score(&trainset.open_job_cards, &self.profile)
            {
                Ok(score) => score,
                Err(err) => {
                    warn!(
                        trainset_id = %trainset.trainset_id,
                        error = %err,
                        "trainset blocked on job card data quality"
                    );
                    verdict.verdict = InductionVerdict::DataBlocked;
                    verdict.reasons.push(format!("ERROR: {}", err));
                    issues.push(ScoringIssue::from_scoring_error(&err));
                    continue;
                }
            };

            let sub_scores = SubScores {
                fitness: ScoringCore::fitness_score(trainset.fitness_valid),
                job_card,
                branding: ScoringCore::branding_score(&trainset.branding_contracts, &self.profile),
                mileage: ScoringCore::mileage_score(trainset.mileage_km, fleet_stats.max_km),
                cleaning: ScoringCore::cleaning_score(trainset.is_clean),
            };
            let total_score = ScoringCore::weighted_total(&sub_scores, &self.profile.weights);

            scorecards.push(TrainsetScorecard {
                trainset_id: trainset.trainset_id.clone(),
                sub_scores,
                total_score,
            });
        }

        // === 阶段 5: 确定性排序 ===
        let mut ranked: Vec<RankedTrainset> = scorecards
            .iter()
            .map(|card| RankedTrainset {
                trainset_id: card.trainset_id.clone(),
                total_score: card.total_score,
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.total_score
                .total_cmp(&a.total_score)
                .then_with(|| a.trainset_id.cmp(&b.trainset_id))
        });

        info!(
            fleet_size = fleet.len(),
            ranked = ranked.len(),
            blocked = issues.len(),
            "induction ranking run completed"
        );

        RankingResult {
            verdicts,
            scorecards,
            fleet_stats,
            ranked,
            issues,
            generated_at: Utc::now(),
        }
    }

    /// 计算单车组评分卡（不含门禁与问题收集的单点入口）
    ///
    /// 供外部调用方在已有全队统计量的前提下对单个车组重算评分;
    /// 工单等级码解析失败在此直接返回错误（无可收集的运行上下文）
    ///
    /// # 参数
    /// - `trainset`: 车组快照
    /// - `fleet_stats`: 全队走行统计量（必须先于本方法完整得出）
    pub fn score_single(
        &self,
        trainset: &Trainset,
        fleet_stats: &MileageStats,
    ) -> EngineResult<TrainsetScorecard> {
        let sub_scores = SubScores {
            fitness: ScoringCore::fitness_score(trainset.fitness_valid),
            job_card: ScoringCore::job_card_score(&trainset.open_job_cards, &self.profile)?,
            branding: ScoringCore::branding_score(&trainset.branding_contracts, &self.profile),
            mileage: ScoringCore::mileage_score(trainset.mileage_km, fleet_stats.max_km),
            cleaning: ScoringCore::cleaning_score(trainset.is_clean),
        };
        let total_score = ScoringCore::weighted_total(&sub_scores, &self.profile.weights);

        Ok(TrainsetScorecard {
            trainset_id: trainset.trainset_id.clone(),
            sub_scores,
            total_score,
        })
    }

    /// 生成单车组排名原因 (可解释性)
    ///
    /// # 参数
    /// - `scorecard`: 车组评分卡
    ///
    /// # 返回
    /// JSON 格式的排名原因字符串（子分、权重、主导因子）
    pub fn rank_reason(&self, scorecard: &TrainsetScorecard) -> String {
        let weights = &self.profile.weights;
        let contributions = [
            ("FITNESS", weights.fitness * scorecard.sub_scores.fitness),
            ("JOB_CARD", weights.job_card * scorecard.sub_scores.job_card),
            ("BRANDING", weights.branding * scorecard.sub_scores.branding),
            ("MILEAGE", weights.mileage * scorecard.sub_scores.mileage),
            ("CLEANING", weights.cleaning * scorecard.sub_scores.cleaning),
        ];
        let primary_factor = contributions
            .iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(name, _)| *name)
            .unwrap_or("FITNESS");

        json!({
            "trainset_id": scorecard.trainset_id,
            "sub_scores": scorecard.sub_scores,
            "total_score": scorecard.total_score,
            "primary_factor": primary_factor,
        })
        .to_string()
    }
}

impl Default for InductionRanker {
    fn default() -> Self {
        // 参考策略基线恒通过校验
        Self {
            profile: ScoringProfile::default(),
            gate: EligibilityEngine::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trainset::JobCard;

    fn fleet_unit(id: &str, fitness: bool, mileage: f64, clean: bool) -> Trainset {
        Trainset::new(id, fitness, vec![], mileage, clean)
    }

    #[test]
    fn test_rank_excludes_unfit_units() {
        let ranker = InductionRanker::default();
        let fleet = vec![
            fleet_unit("TS01", true, 2500.0, true),
            fleet_unit("TS03", false, 3500.0, true),
        ];

        let result = ranker.rank(&fleet);
        assert_eq!(result.ranked.len(), 1);
        assert!(result.ranked.iter().all(|r| r.trainset_id != "TS03"));
        assert!(result.scorecards.iter().all(|c| c.trainset_id != "TS03"));
    }

    #[test]
    fn test_rank_tie_break_by_trainset_id() {
        let ranker = InductionRanker::default();
        // 完全同质的三个车组 → 排名按车组号升序
        let fleet = vec![
            fleet_unit("TS30", true, 1000.0, true),
            fleet_unit("TS10", true, 1000.0, true),
            fleet_unit("TS20", true, 1000.0, true),
        ];

        let result = ranker.rank(&fleet);
        let ids: Vec<&str> = result.ranked.iter().map(|r| r.trainset_id.as_str()).collect();
        assert_eq!(ids, vec!["TS10", "TS20", "TS30"]);
    }

    #[test]
    fn test_rank_input_not_mutated() {
        let ranker = InductionRanker::default();
        let fleet = vec![fleet_unit("TS01", true, 2500.0, true)];
        let before = serde_json::to_string(&fleet).unwrap();

        let _ = ranker.rank(&fleet);

        let after = serde_json::to_string(&fleet).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_invalid_severity_blocks_only_affected_unit() {
        let ranker = InductionRanker::default();
        let bad = Trainset::new(
            "TS08",
            true,
            vec![JobCard::new(9, "TS08", "catastrophic")],
            8500.0,
            false,
        );
        let fleet = vec![fleet_unit("TS01", true, 2500.0, true), bad];

        let result = ranker.rank(&fleet);

        // TS08 被数据质量阻断,TS01 正常参与排名
        assert_eq!(result.ranked.len(), 1);
        assert_eq!(result.ranked[0].trainset_id, "TS01");
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].issue_type, "INVALID_SEVERITY");
        assert_eq!(result.issues[0].trainset_id, "TS08");

        let blocked = result
            .verdicts
            .iter()
            .find(|v| v.trainset_id == "TS08")
            .unwrap();
        assert_eq!(blocked.verdict, InductionVerdict::DataBlocked);
        assert!(blocked.reasons.iter().any(|r| r.starts_with("ERROR:")));
    }

    #[test]
    fn test_score_single_matches_pipeline() {
        let ranker = InductionRanker::default();
        let fleet = vec![
            fleet_unit("TS01", true, 2500.0, true),
            fleet_unit("TS02", true, 6000.0, false),
        ];

        let result = ranker.rank(&fleet);
        let stats = result.fleet_stats;

        let card = ranker.score_single(&fleet[0], &stats).unwrap();
        assert_eq!(card.total_score, result.scorecards[0].total_score);

        // 单点入口下等级码错误直接返回 Err
        let bad = Trainset::new(
            "TS08",
            true,
            vec![JobCard::new(1, "TS08", "unknown")],
            8500.0,
            false,
        );
        assert!(ranker.score_single(&bad, &stats).is_err());
    }

    #[test]
    fn test_rank_reason_primary_factor() {
        let ranker = InductionRanker::default();
        let fleet = vec![fleet_unit("TS10", true, 900.0, true)];
        let result = ranker.rank(&fleet);

        let reason = ranker.rank_reason(&result.scorecards[0]);
        let parsed: serde_json::Value = serde_json::from_str(&reason).unwrap();
        // 无广告、单车车队: fitness 贡献 0.25 最大
        assert_eq!(parsed["primary_factor"], "FITNESS");
        assert_eq!(parsed["trainset_id"], "TS10");
    }
}
