// ==========================================
// 工程组织产能规划系统 - 团队领域模型
// ==========================================
// 职责: 团队名册摘要 + 团队级产能调整政策
// 红线: 不含核算逻辑,字段缺省按零值/空集处理
// ==========================================

use crate::domain::types::{ActivityEstimateType, VariableLeaveCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// Team - 团队
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub team_id: String,

    #[serde(default)]
    pub team_name: String,

    /// 财务批准的人类工程师编制数
    #[serde(default)]
    pub funded_headcount: f64,

    /// 名册成员 (按姓名引用 allKnownEngineers 注册表)
    #[serde(default)]
    pub engineers: Vec<String>,

    /// 外借成员 (从其他团队借入,各自带 AI 标记)
    #[serde(default)]
    pub away_team_members: Vec<AwayTeamMember>,

    /// 团队级产能调整政策
    #[serde(default)]
    pub team_capacity_adjustments: TeamCapacityAdjustments,
}

// ==========================================
// AwayTeamMember - 外借成员
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwayTeamMember {
    pub name: String,

    #[serde(default)]
    pub attributes: EngineerAttributes,
}

impl AwayTeamMember {
    pub fn is_ai(&self) -> bool {
        self.attributes.is_ai_swe
    }
}

// ==========================================
// Engineer - 工程师注册表条目
// ==========================================
// 名册/外借列表按姓名引用此注册表判定人类/AI 归属
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Engineer {
    pub name: String,

    #[serde(default)]
    pub level: Option<i32>,

    #[serde(default)]
    pub attributes: EngineerAttributes,
}

impl Engineer {
    pub fn is_ai(&self) -> bool {
        self.attributes.is_ai_swe
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineerAttributes {
    /// AI 软件工程师席位标记
    #[serde(rename = "isAISWE", default)]
    pub is_ai_swe: bool,
}

// ==========================================
// TeamCapacityAdjustments - 团队级产能调整
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamCapacityAdjustments {
    /// 各标准假期类型的使用率估算 (缺失条目按 100% 计)
    pub leave_uptake_estimates: Vec<LeaveUptakeEstimate>,

    /// 可变假期影响 (按类别,团队总量口径)
    pub variable_leave_impact: BTreeMap<VariableLeaveCategory, VariableLeaveImpact>,

    /// 一次性团队活动 (团建/培训等)
    pub team_activities: Vec<TeamActivity>,

    /// 每人每周例行事务小时数 (会议/站会/1:1)
    pub avg_overhead_hours_per_week_per_sde: f64,

    /// AI 工具带来的生产力增益百分比
    pub ai_productivity_gain_percent: f64,
}

// ==========================================
// LeaveUptakeEstimate - 假期使用率估算
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveUptakeEstimate {
    pub leave_type_id: String,

    /// 0-100;None 表示未填写,按 100 处理
    #[serde(default)]
    pub estimated_uptake_percent: Option<f64>,
}

// ==========================================
// VariableLeaveImpact - 可变假期影响
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariableLeaveImpact {
    /// 受影响人数
    #[serde(rename = "affectedSDEs")]
    pub affected_sdes: f64,

    /// 人均受影响天数
    #[serde(rename = "avgDaysPerAffectedSDE")]
    pub avg_days_per_affected_sde: f64,
}

// ==========================================
// TeamActivity - 团队活动
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamActivity {
    #[serde(default)]
    pub name: String,

    pub estimate_type: ActivityEstimateType,

    /// 天数 (perSDE: 人均;total: 团队合计)
    #[serde(default)]
    pub value: f64,
}
