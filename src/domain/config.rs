// ==========================================
// 工程组织产能规划系统 - 全局产能配置
// ==========================================
// 职责: 组织级政策输入 (年工作日/假期类型/全组织事件)
// 红线: 配置缺失不是错误,按零值/空集降级
// ==========================================

use serde::{Deserialize, Serialize};

/// 默认年工作日 (52 周 x 5 天 + 1)
pub const DEFAULT_WORKING_DAYS_PER_YEAR: f64 = 261.0;

// ==========================================
// GlobalCapacityConfig - 组织级产能配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalCapacityConfig {
    /// 年工作日数
    pub working_days_per_year: f64,

    /// 标准假期类型定义 (id 全局唯一,有序)
    pub leave_types: Vec<LeaveType>,

    /// 全局约束 (公共假日/组织活动)
    pub global_constraints: GlobalConstraints,
}

impl Default for GlobalCapacityConfig {
    fn default() -> Self {
        Self {
            working_days_per_year: DEFAULT_WORKING_DAYS_PER_YEAR,
            leave_types: Vec::new(),
            global_constraints: GlobalConstraints::default(),
        }
    }
}

impl GlobalCapacityConfig {
    /// 作为除数使用的年工作日
    ///
    /// # 返回
    /// 配置值非正或非有限时返回 1.0,保证除法总是良定义
    pub fn working_days_divisor(&self) -> f64 {
        if self.working_days_per_year.is_finite() && self.working_days_per_year > 0.0 {
            self.working_days_per_year
        } else {
            1.0
        }
    }
}

// ==========================================
// LeaveType - 标准假期类型
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveType {
    pub id: String,
    pub name: String,
    /// 每人每年默认估算天数
    #[serde(default)]
    pub default_estimated_days: f64,
}

// ==========================================
// GlobalConstraints - 全局约束
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalConstraints {
    /// 公共假日 (天/年,每人)
    pub public_holidays: Option<f64>,

    /// 组织级活动 (黑客松/全员大会等,有序)
    pub org_events: Vec<OrgEvent>,
}

impl GlobalConstraints {
    /// 公共假日天数 (未配置按 0 计)
    pub fn public_holiday_days(&self) -> f64 {
        match self.public_holidays {
            Some(d) if d.is_finite() && d > 0.0 => d,
            _ => 0.0,
        }
    }
}

// ==========================================
// OrgEvent - 组织级活动
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgEvent {
    pub id: String,
    pub name: String,
    /// 每人损失天数估算
    #[serde(default)]
    pub estimated_days_per_sde: f64,
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_days_divisor_guards_non_positive() {
        let mut config = GlobalCapacityConfig::default();
        assert_eq!(config.working_days_divisor(), 261.0);

        config.working_days_per_year = 0.0;
        assert_eq!(config.working_days_divisor(), 1.0);

        config.working_days_per_year = -10.0;
        assert_eq!(config.working_days_divisor(), 1.0);

        config.working_days_per_year = f64::NAN;
        assert_eq!(config.working_days_divisor(), 1.0);
    }

    #[test]
    fn test_config_deserializes_from_host_document() {
        // 宿主文档中 publicHolidays 可能为 null
        let json = r#"{
            "workingDaysPerYear": 261,
            "globalConstraints": {
                "publicHolidays": null,
                "orgEvents": [
                    { "id": "hackathon", "name": "Hackathon", "estimatedDaysPerSDE": 3 }
                ]
            },
            "leaveTypes": [
                { "id": "annual", "name": "Annual Leave", "defaultEstimatedDays": 20 }
            ]
        }"#;

        let config: GlobalCapacityConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.working_days_per_year, 261.0);
        assert_eq!(config.global_constraints.public_holiday_days(), 0.0);
        assert_eq!(config.global_constraints.org_events.len(), 1);
        assert_eq!(config.leave_types[0].default_estimated_days, 20.0);
    }
}
