// ==========================================
// 工程组织产能规划系统 - 人力增长预测模型
// ==========================================
// 职责: 模拟参数与 52 周模拟结果的载体类型
// 红线: 瞬态数据,每次 what-if 查询重新生成,不持久化
// ==========================================

use serde::{Deserialize, Serialize};

/// 模拟周数 (一个规划年)
pub const SIMULATION_WEEKS: usize = 52;

/// 每周标准可用天数
pub const STANDARD_DAYS_PER_WEEK: f64 = 5.0;

/// 周 -> 月映射表 (4/4/5 周分块,下标 0 起,月号 1-12)
pub const WEEK_TO_MONTH: [u32; SIMULATION_WEEKS] = [
    1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 6, 6, 6, 6, 6, 7, 7, 7, 7, 8,
    8, 8, 8, 9, 9, 9, 9, 9, 10, 10, 10, 10, 11, 11, 11, 11, 12, 12, 12, 12, 12,
];

// ==========================================
// SimulationParams - 模拟输入参数
// ==========================================
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationParams {
    /// 每周恒定招聘速率 (人/周,可为小数)
    pub hiring_rate_per_week: f64,

    /// 财务批准编制
    pub funded_size: f64,

    /// 当前在岗工程师数
    pub current_engineers: f64,

    /// 招聘周期 (签约到入职的周数)
    pub hiring_time_weeks: u32,

    /// 上手周期 (入职到完全产出的周数)
    pub ramp_up_time_weeks: u32,

    /// 年化流失率 (如 0.10 表示 10%/年)
    pub attrition_rate: f64,

    /// 每人每周净可用天数 (默认 5.0,可由团队政策推导)
    pub net_available_days_per_week: f64,

    /// 总人数是否封顶在编制数
    pub cap_at_funded_size: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            hiring_rate_per_week: 0.0,
            funded_size: 0.0,
            current_engineers: 0.0,
            hiring_time_weeks: 0,
            ramp_up_time_weeks: 0,
            attrition_rate: 0.0,
            net_available_days_per_week: STANDARD_DAYS_PER_WEEK,
            cap_at_funded_size: true,
        }
    }
}

impl SimulationParams {
    /// 归一化: 非法数值替换为最近的合法默认值
    ///
    /// 表单输入可能出现负数或 NaN;此处一次性清洗,
    /// 核心差分方程不再做任何防御检查
    pub fn normalized(&self) -> Self {
        Self {
            hiring_rate_per_week: sanitize_non_negative(self.hiring_rate_per_week),
            funded_size: sanitize_non_negative(self.funded_size),
            current_engineers: sanitize_non_negative(self.current_engineers),
            hiring_time_weeks: self.hiring_time_weeks,
            ramp_up_time_weeks: self.ramp_up_time_weeks,
            attrition_rate: sanitize_non_negative(self.attrition_rate),
            net_available_days_per_week: if self.net_available_days_per_week.is_finite()
                && self.net_available_days_per_week >= 0.0
            {
                self.net_available_days_per_week
            } else {
                STANDARD_DAYS_PER_WEEK
            },
            cap_at_funded_size: self.cap_at_funded_size,
        }
    }
}

fn sanitize_non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

// ==========================================
// SimulationResult - 52 周模拟结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// 各周总人数 (在岗口径: 上手期 + 完全产出)
    pub total_headcount: Vec<f64>,

    /// 各周完全产出人数
    pub productive_engineers: Vec<f64>,

    /// 各周累计流失人数
    pub cumulative_attrition: Vec<f64>,

    /// 月度汇总
    pub monthly: MonthlyAggregates,

    /// 本次模拟采用的每周净可用天数
    pub net_available_days_per_week: f64,
}

// ==========================================
// MonthlyAggregates - 月度汇总
// ==========================================
// headcount 取该月末周快照;sdeWeeks/sdeDays 为月内求和
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonthlyAggregates {
    pub headcount: Vec<f64>,
    pub sde_weeks: Vec<f64>,
    pub sde_days: Vec<f64>,
}

// ==========================================
// HiresEstimate - 总招聘量估算
// ==========================================
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiresEstimate {
    /// 需要的总招聘人数 (缺口 + 流失补员)
    pub total_hires_needed: f64,

    /// 初始缺口 (编制 - 当前,下限 0)
    pub initial_gap: f64,

    /// 目标周之前的预期流失人数
    pub estimated_attrition: f64,
}

// ==========================================
// HiringPlan - 招聘速率求解输出
// ==========================================
// effectiveHiringWeeks == 1 且缺口很大时,速率会异常偏高;
// 是否可行由调用方判断,引擎只保证结果有限
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiringPlan {
    /// 求得的每周招聘速率
    pub hiring_rate_per_week: f64,

    /// 有效招聘周数 (目标周 - 招聘周期,下限 1)
    pub effective_hiring_weeks: u32,

    /// 对应的总招聘量估算
    pub estimate: HiresEstimate,
}
