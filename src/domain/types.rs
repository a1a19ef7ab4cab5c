// ==========================================
// 工程组织产能规划系统 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 产能情景 (Capacity Scenario)
// ==========================================
// 红线: 三种情景固定,同一团队在三种人力口径下分别核算
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CapacityScenario {
    /// 在座人力: 仅团队自有名册
    #[serde(rename = "TeamBIS")]
    TeamBis,
    /// 有效人力: 名册 + 外借成员
    #[serde(rename = "EffectiveBIS")]
    EffectiveBis,
    /// 预算人力: 财务批准人数 + AI 席位
    #[serde(rename = "FundedHC")]
    FundedHc,
}

impl CapacityScenario {
    /// 固定的情景全集 (遍历顺序与展示顺序一致)
    pub const ALL: [CapacityScenario; 3] = [
        CapacityScenario::TeamBis,
        CapacityScenario::EffectiveBis,
        CapacityScenario::FundedHc,
    ];
}

impl fmt::Display for CapacityScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityScenario::TeamBis => write!(f, "TeamBIS"),
            CapacityScenario::EffectiveBis => write!(f, "EffectiveBIS"),
            CapacityScenario::FundedHc => write!(f, "FundedHC"),
        }
    }
}

// ==========================================
// 可变假期类别 (Variable Leave Category)
// ==========================================
// 区别于标准假期: 只影响指定人数,按团队总天数计
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VariableLeaveCategory {
    #[serde(rename = "maternity")]
    Maternity, // 产假
    #[serde(rename = "paternity")]
    Paternity, // 陪产假
    #[serde(rename = "familyResp")]
    FamilyResp, // 家庭照护假
    #[serde(rename = "medical")]
    Medical, // 长期病假
}

impl VariableLeaveCategory {
    pub const ALL: [VariableLeaveCategory; 4] = [
        VariableLeaveCategory::Maternity,
        VariableLeaveCategory::Paternity,
        VariableLeaveCategory::FamilyResp,
        VariableLeaveCategory::Medical,
    ];
}

impl fmt::Display for VariableLeaveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableLeaveCategory::Maternity => write!(f, "maternity"),
            VariableLeaveCategory::Paternity => write!(f, "paternity"),
            VariableLeaveCategory::FamilyResp => write!(f, "familyResp"),
            VariableLeaveCategory::Medical => write!(f, "medical"),
        }
    }
}

// ==========================================
// 团队活动估算方式 (Activity Estimate Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityEstimateType {
    /// 按人均天数估算
    #[serde(rename = "perSDE")]
    PerSde,
    /// 按团队总天数估算
    #[serde(rename = "total")]
    Total,
}

impl fmt::Display for ActivityEstimateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityEstimateType::PerSde => write!(f, "perSDE"),
            ActivityEstimateType::Total => write!(f, "total"),
        }
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_serde_roundtrip() {
        // 序列化名称必须与宿主文档中的键一致
        let json = serde_json::to_string(&CapacityScenario::TeamBis).unwrap();
        assert_eq!(json, "\"TeamBIS\"");
        let back: CapacityScenario = serde_json::from_str("\"FundedHC\"").unwrap();
        assert_eq!(back, CapacityScenario::FundedHc);
    }

    #[test]
    fn test_scenario_display_matches_serde() {
        for scenario in CapacityScenario::ALL {
            let json = serde_json::to_value(scenario).unwrap();
            assert_eq!(json.as_str().unwrap(), scenario.to_string());
        }
    }

    #[test]
    fn test_variable_leave_category_display() {
        assert_eq!(VariableLeaveCategory::FamilyResp.to_string(), "familyResp");
        assert_eq!(VariableLeaveCategory::ALL.len(), 4);
    }
}
