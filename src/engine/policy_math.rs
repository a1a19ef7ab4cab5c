// ==========================================
// 工程组织产能规划系统 - 政策换算函数
// ==========================================
// 职责: 团队政策 -> 每人/每团队年天数的无状态换算
// 输入: Team 政策字段 + 全局配置
// 输出: 天数 (尚未折算为 SDE-年)
// 红线: 纯函数,无共享状态;缺省字段按零处理,不在本层报错
// ==========================================

use crate::domain::config::GlobalCapacityConfig;
use crate::domain::team::Team;
use crate::domain::types::ActivityEstimateType;

/// 标准工作日小时数 (例行事务小时->天换算用)
pub const STANDARD_HOURS_PER_DAY: f64 = 8.0;

/// 每周标准工作天数
pub const DAYS_PER_WEEK: f64 = 5.0;

/// 未填写使用率时的默认值 (%)
const DEFAULT_UPTAKE_PERCENT: f64 = 100.0;

// ==========================================
// 标准假期
// ==========================================

/// 计算一名全职人类工程师一年的标准假期天数
///
/// 对每种全局假期类型: 取团队的使用率估算 (缺失条目按 100% 计),
/// 乘以该类型的默认天数,再求和
pub fn standard_leave_days_per_sde(team: &Team, config: &GlobalCapacityConfig) -> f64 {
    let uptake_estimates = &team.team_capacity_adjustments.leave_uptake_estimates;

    config
        .leave_types
        .iter()
        .map(|leave_type| {
            let default_days = non_negative(leave_type.default_estimated_days);
            let uptake_percent = uptake_estimates
                .iter()
                .find(|est| est.leave_type_id == leave_type.id)
                .map(|est| match est.estimated_uptake_percent {
                    Some(p) if p.is_finite() => p.clamp(0.0, 100.0),
                    // 条目存在但未填百分比,仍按 100% 计
                    _ => DEFAULT_UPTAKE_PERCENT,
                })
                .unwrap_or(DEFAULT_UPTAKE_PERCENT);
            default_days * (uptake_percent / 100.0)
        })
        .sum()
}

// ==========================================
// 组织级活动
// ==========================================

/// 全组织活动 (黑客松/全员大会等) 的每人年天数合计
pub fn org_event_days_per_sde(config: &GlobalCapacityConfig) -> f64 {
    config
        .global_constraints
        .org_events
        .iter()
        .map(|event| non_negative(event.estimated_days_per_sde))
        .sum()
}

// ==========================================
// 例行事务
// ==========================================

/// 每周例行事务小时数折算为每人年天数
///
/// 年工作周数 = workingDaysPerYear / 5;按 8 小时工作日换算
///
/// # 参数
/// - `working_days_per_year`: 非正时整体返回 0 (无法定义工作周)
pub fn overhead_days_per_sde(team: &Team, working_days_per_year: f64) -> f64 {
    if !working_days_per_year.is_finite() || working_days_per_year <= 0.0 {
        return 0.0;
    }

    let hours_per_week = non_negative(
        team.team_capacity_adjustments
            .avg_overhead_hours_per_week_per_sde,
    );
    if hours_per_week == 0.0 {
        return 0.0;
    }

    let annual_overhead_hours = hours_per_week * (working_days_per_year / DAYS_PER_WEEK);
    annual_overhead_hours / STANDARD_HOURS_PER_DAY
}

// ==========================================
// 可变假期
// ==========================================

/// 可变假期 (产假/陪产假/家庭照护/长期病假) 的团队总天数
///
/// 注意口径: 只影响指定人数,因此是团队总量而非每人值
pub fn variable_leave_total_days(team: &Team) -> f64 {
    team.team_capacity_adjustments
        .variable_leave_impact
        .values()
        .map(|impact| {
            non_negative(impact.affected_sdes) * non_negative(impact.avg_days_per_affected_sde)
        })
        .sum()
}

// ==========================================
// 团队活动
// ==========================================

/// 团队活动影响 (按估算方式分拆)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActivityImpacts {
    /// perSDE 条目合计 (每人天数)
    pub days_per_sde: f64,
    /// total 条目合计 (团队总天数)
    pub total_team_days: f64,
}

/// 按估算方式分拆团队活动天数
pub fn team_activity_impacts(team: &Team) -> ActivityImpacts {
    let mut impacts = ActivityImpacts::default();
    for activity in &team.team_capacity_adjustments.team_activities {
        let value = non_negative(activity.value);
        match activity.estimate_type {
            ActivityEstimateType::PerSde => impacts.days_per_sde += value,
            ActivityEstimateType::Total => impacts.total_team_days += value,
        }
    }
    impacts
}

// ==========================================
// 每周净可用天数 (预测引擎用)
// ==========================================

/// 由团队政策推导每人每周净可用天数
///
/// 每人年扣减 = 标准假期 + 公共假日 + 组织活动 + 例行事务 + perSDE 团队活动;
/// 净年天数下限 0,再折算到 5 天工作周。
/// 年工作日未配置 (非正) 时返回标准值 5.0
pub fn net_available_days_per_week(team: &Team, config: &GlobalCapacityConfig) -> f64 {
    let working_days = config.working_days_per_year;
    if !working_days.is_finite() || working_days <= 0.0 {
        return DAYS_PER_WEEK;
    }

    let per_sde_deduction_days = standard_leave_days_per_sde(team, config)
        + config.global_constraints.public_holiday_days()
        + org_event_days_per_sde(config)
        + overhead_days_per_sde(team, working_days)
        + team_activity_impacts(team).days_per_sde;

    let net_days_per_year = (working_days - per_sde_deduction_days).max(0.0);
    (net_days_per_year / working_days) * DAYS_PER_WEEK
}

/// 负数/非有限值归零
fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
