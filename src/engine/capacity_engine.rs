// ==========================================
// 工程组织产能规划系统 - 产能核算引擎
// ==========================================
// 职责: 团队 x 情景的毛/扣减/净产能核算与组织级汇总
// 输入: 规划文档 (团队 + 全局配置 + 工程师注册表)
// 输出: OrgCapacityMetrics (perTeam + totals)
// 红线: 无状态引擎;输入缺失降级为零值结果,不抛错
// ==========================================

use crate::domain::capacity::{
    DeductionBreakdown, NetCapacityResult, OrgCapacityMetrics, ScenarioMetrics,
};
use crate::domain::config::GlobalCapacityConfig;
use crate::domain::document::PlanningDocument;
use crate::domain::team::{Engineer, Team};
use crate::domain::types::CapacityScenario;
use crate::engine::gain_policy::{NetOfDeductionsGain, ProductivityGainPolicy};
use crate::engine::policy_math;
use tracing::{instrument, warn};

/// 每个席位每年的 SDE-年基数
const SDES_PER_SDE_YEAR: f64 = 1.0;

// ==========================================
// CapacityEngine - 产能核算引擎
// ==========================================
pub struct CapacityEngine {
    gain_policy: Box<dyn ProductivityGainPolicy>,
}

/// 团队名册按人类/AI 分拆后的人数
#[derive(Debug, Clone, Copy, Default)]
struct HeadcountSplit {
    team_human: f64,
    team_ai: f64,
    team_total: f64,
    away_human: f64,
    away_ai: f64,
    away_total: f64,
}

impl CapacityEngine {
    /// 默认增益策略 (按扣减后人类净产能计)
    pub fn new() -> Self {
        Self {
            gain_policy: Box::new(NetOfDeductionsGain),
        }
    }

    /// 注入自定义增益策略
    pub fn with_gain_policy(gain_policy: Box<dyn ProductivityGainPolicy>) -> Self {
        Self { gain_policy }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 核算全部团队在三种情景下的产能并汇总
    ///
    /// 配置缺失时返回空结果 (perTeam 为空,totals 全零):
    /// 规划工具必须在数据只填了一半时保持可用
    #[instrument(skip_all, fields(team_count = document.teams.len()))]
    pub fn compute_all(&self, document: &PlanningDocument) -> OrgCapacityMetrics {
        let config = match &document.capacity_configuration {
            Some(config) => config,
            None => {
                warn!("产能配置缺失,返回零值结果");
                return OrgCapacityMetrics::default();
            }
        };

        let mut metrics = OrgCapacityMetrics::default();

        for team in &document.teams {
            if team.team_id.is_empty() {
                warn!("跳过缺少 teamId 的团队");
                continue;
            }

            let team_metrics = self.compute_team(team, config, &document.all_known_engineers);

            for scenario in CapacityScenario::ALL {
                metrics
                    .totals
                    .get_mut(scenario)
                    .accumulate(team_metrics.get(scenario));
            }
            metrics.per_team.insert(team.team_id.clone(), team_metrics);
        }

        metrics
    }

    /// 核算单个团队的三情景结果
    ///
    /// 政策换算只做一次 (只依赖团队政策,与情景无关),
    /// 再按各情景的人力口径折算为 SDE-年
    pub fn compute_team(
        &self,
        team: &Team,
        config: &GlobalCapacityConfig,
        registry: &[Engineer],
    ) -> ScenarioMetrics {
        let split = split_headcount(team, registry);
        let working_days = config.working_days_divisor();

        // 政策量 (天数口径)
        let std_leave_days = policy_math::standard_leave_days_per_sde(team, config);
        let holiday_days = config.global_constraints.public_holiday_days();
        let org_event_days = policy_math::org_event_days_per_sde(config);
        let overhead_days = policy_math::overhead_days_per_sde(team, config.working_days_per_year);
        let variable_leave_days = policy_math::variable_leave_total_days(team);
        let activity_impacts = policy_math::team_activity_impacts(team);

        let gain_percent = team
            .team_capacity_adjustments
            .ai_productivity_gain_percent;

        let mut result = ScenarioMetrics::default();

        for scenario in CapacityScenario::ALL {
            let (total_headcount, human_headcount) = scenario_headcount(scenario, team, &split);

            let gross_yrs = total_headcount * SDES_PER_SDE_YEAR;

            // 扣减只作用于人类: AI 席位不休假,也不参加多数会议
            let mut breakdown = DeductionBreakdown {
                std_leave_yrs: (std_leave_days / working_days) * human_headcount,
                var_leave_yrs: variable_leave_days / working_days,
                holiday_yrs: (holiday_days / working_days) * human_headcount,
                org_event_yrs: (org_event_days / working_days) * human_headcount,
                team_activity_yrs: (activity_impacts.days_per_sde / working_days) * human_headcount
                    + activity_impacts.total_team_days / working_days,
                overhead_yrs: (overhead_days / working_days) * human_headcount,
                ai_productivity_gain_yrs: 0.0,
            };

            let deduct_yrs = breakdown.total_deduct_yrs();

            // 增益基数: 扣减后的人类净产能
            let human_net_before_gain = human_headcount * SDES_PER_SDE_YEAR - deduct_yrs;
            let gain_yrs = self.gain_policy.gain_yrs(human_net_before_gain, gain_percent);
            breakdown.ai_productivity_gain_yrs = gain_yrs;

            // 净值允许为负: 负值即团队超配的预警信号,不做截断
            let net_yrs = gross_yrs - deduct_yrs + gain_yrs;

            *result.get_mut(scenario) = NetCapacityResult {
                total_headcount,
                human_headcount,
                gross_yrs,
                deduct_yrs,
                net_yrs,
                deductions_breakdown: breakdown,
            };
        }

        result
    }
}

impl Default for CapacityEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 辅助函数
// ==========================================

/// 按注册表 AI 标记分拆名册与外借成员
///
/// 注册表中查不到的名册成员计入总数但不计入人类数
fn split_headcount(team: &Team, registry: &[Engineer]) -> HeadcountSplit {
    let mut split = HeadcountSplit {
        team_total: team.engineers.len() as f64,
        away_total: team.away_team_members.len() as f64,
        ..Default::default()
    };

    for name in &team.engineers {
        match registry.iter().find(|e| &e.name == name) {
            Some(engineer) if engineer.is_ai() => split.team_ai += 1.0,
            Some(_) => split.team_human += 1.0,
            None => {}
        }
    }

    for member in &team.away_team_members {
        if member.is_ai() {
            split.away_ai += 1.0;
        } else {
            split.away_human += 1.0;
        }
    }

    split
}

/// 各情景的 (总人数, 人类人数) 口径
fn scenario_headcount(
    scenario: CapacityScenario,
    team: &Team,
    split: &HeadcountSplit,
) -> (f64, f64) {
    match scenario {
        // 在座人力: 仅自有名册
        CapacityScenario::TeamBis => (split.team_total, split.team_human),
        // 有效人力: 名册 + 外借
        CapacityScenario::EffectiveBis => (
            split.team_total + split.away_total,
            split.team_human + split.away_human,
        ),
        // 预算人力: 财务只批人类编制;AI 席位不占预算但仍贡献产能
        CapacityScenario::FundedHc => {
            let funded = if team.funded_headcount.is_finite() && team.funded_headcount > 0.0 {
                team.funded_headcount
            } else {
                0.0
            };
            (funded + split.team_ai + split.away_ai, funded)
        }
    }
}
