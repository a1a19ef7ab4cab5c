// ==========================================
// 工程组织产能规划系统 - 产能核算结果模型
// ==========================================
// 职责: 扣减明细 / 团队净产能 / 情景汇总的派生视图
// 红线: 纯派生数据,随输入变更整体重算,不落库不缓存
// ==========================================

use crate::domain::types::CapacityScenario;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// DeductionBreakdown - 扣减明细 (SDE-年)
// ==========================================
// 六项扣减 + 一项增益;增益不计入扣减合计
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeductionBreakdown {
    /// 标准假期
    pub std_leave_yrs: f64,
    /// 可变假期 (产假/病假等,团队总量口径)
    pub var_leave_yrs: f64,
    /// 公共假日
    pub holiday_yrs: f64,
    /// 组织级活动
    pub org_event_yrs: f64,
    /// 团队活动
    pub team_activity_yrs: f64,
    /// 例行事务 (会议/站会/1:1)
    pub overhead_yrs: f64,
    /// AI 生产力增益 (正向,不参与扣减求和)
    pub ai_productivity_gain_yrs: f64,
}

impl DeductionBreakdown {
    /// 扣减合计 (六项之和,不含增益)
    pub fn total_deduct_yrs(&self) -> f64 {
        self.std_leave_yrs
            + self.var_leave_yrs
            + self.holiday_yrs
            + self.org_event_yrs
            + self.team_activity_yrs
            + self.overhead_yrs
    }

    /// 逐项累加 (用于情景汇总)
    pub fn accumulate(&mut self, other: &DeductionBreakdown) {
        self.std_leave_yrs += other.std_leave_yrs;
        self.var_leave_yrs += other.var_leave_yrs;
        self.holiday_yrs += other.holiday_yrs;
        self.org_event_yrs += other.org_event_yrs;
        self.team_activity_yrs += other.team_activity_yrs;
        self.overhead_yrs += other.overhead_yrs;
        self.ai_productivity_gain_yrs += other.ai_productivity_gain_yrs;
    }
}

// ==========================================
// NetCapacityResult - 单团队单情景净产能
// ==========================================
// 不变式: gross = totalHeadcount x 1.0
//         deduct = 六项扣减之和
//         net = gross - deduct + aiGain (允许为负,负值即超配预警)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetCapacityResult {
    pub total_headcount: f64,
    pub human_headcount: f64,
    pub gross_yrs: f64,
    pub deduct_yrs: f64,
    pub net_yrs: f64,
    pub deductions_breakdown: DeductionBreakdown,
}

impl NetCapacityResult {
    /// 全零结果 (缺失输入的降级输出)
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// 逐字段累加 (用于组织级汇总)
    pub fn accumulate(&mut self, other: &NetCapacityResult) {
        self.total_headcount += other.total_headcount;
        self.human_headcount += other.human_headcount;
        self.gross_yrs += other.gross_yrs;
        self.deduct_yrs += other.deduct_yrs;
        self.net_yrs += other.net_yrs;
        self.deductions_breakdown
            .accumulate(&other.deductions_breakdown);
    }
}

// ==========================================
// ScenarioMetrics - 三情景结果组
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioMetrics {
    #[serde(rename = "TeamBIS")]
    pub team_bis: NetCapacityResult,
    #[serde(rename = "EffectiveBIS")]
    pub effective_bis: NetCapacityResult,
    #[serde(rename = "FundedHC")]
    pub funded_hc: NetCapacityResult,
}

impl ScenarioMetrics {
    pub fn get(&self, scenario: CapacityScenario) -> &NetCapacityResult {
        match scenario {
            CapacityScenario::TeamBis => &self.team_bis,
            CapacityScenario::EffectiveBis => &self.effective_bis,
            CapacityScenario::FundedHc => &self.funded_hc,
        }
    }

    pub fn get_mut(&mut self, scenario: CapacityScenario) -> &mut NetCapacityResult {
        match scenario {
            CapacityScenario::TeamBis => &mut self.team_bis,
            CapacityScenario::EffectiveBis => &mut self.effective_bis,
            CapacityScenario::FundedHc => &mut self.funded_hc,
        }
    }
}

// ==========================================
// OrgCapacityMetrics - 组织级核算输出
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrgCapacityMetrics {
    /// teamId -> 三情景结果
    pub per_team: BTreeMap<String, ScenarioMetrics>,

    /// 全组织三情景汇总 (逐字段求和)
    pub totals: ScenarioMetrics,
}
