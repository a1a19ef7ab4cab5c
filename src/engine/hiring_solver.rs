// ==========================================
// 工程组织产能规划系统 - 招聘速率求解器
// ==========================================
// 职责: 反解增长差分方程,求按期补齐编制所需的恒定周招聘速率
// 输入: 编制/当前人数/管道周期/流失率/目标周
// 输出: HiringPlan (速率 + 有效招聘周数 + 总招聘量估算)
// 红线: 任何输入下结果有限;目标不可达时给出偏大速率,可行性由调用方判断
// ==========================================

use crate::domain::forecast::{HiresEstimate, HiringPlan, SIMULATION_WEEKS};
use tracing::instrument;

// ==========================================
// HiringRateSolver - 招聘速率求解器
// ==========================================
pub struct HiringRateSolver;

impl HiringRateSolver {
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 求按目标周补齐编制所需的恒定周招聘速率
    ///
    /// 两遍算法:
    /// 1) 暂定速率 = 初始缺口 / 有效招聘周数
    ///    (有效周数 = 目标周 - 招聘周期,下限 1)
    /// 2) 以暂定速率重放人数递推,累计目标周前的预期流失,
    ///    得到最终速率 = (缺口 + 预期流失) / 有效周数
    ///
    /// 补齐判定针对在岗总人数 (上手期 + 完全产出),
    /// 因此上手周期不改变求解代数,只影响产出侧序列
    ///
    /// # 返回
    /// 目标周早于招聘周期时有效周数取 1,速率会异常偏大但保持有限
    #[instrument(skip(self))]
    pub fn solve_hiring_rate(
        &self,
        funded_size: f64,
        current_engineers: f64,
        hiring_time_weeks: u32,
        ramp_up_time_weeks: u32,
        attrition_rate: f64,
        close_gap_by_week: u32,
    ) -> HiringPlan {
        let funded = non_negative(funded_size);
        let current = non_negative(current_engineers);
        let attrition = non_negative(attrition_rate);

        let initial_gap = (funded - current).max(0.0);
        let effective_hiring_weeks = close_gap_by_week.saturating_sub(hiring_time_weeks).max(1);

        // 第一遍: 不计流失的暂定速率
        let provisional_rate = initial_gap / effective_hiring_weeks as f64;

        // 第二遍: 以暂定速率估算目标周前的流失,抬高缺口
        let provisional = self.estimate_total_hires(
            funded,
            current,
            provisional_rate,
            attrition,
            close_gap_by_week,
        );
        let hiring_rate_per_week =
            (initial_gap + provisional.estimated_attrition) / effective_hiring_weeks as f64;

        // 对外报告的估算与最终速率保持一致
        let estimate = self.estimate_total_hires(
            funded,
            current,
            hiring_rate_per_week,
            attrition,
            close_gap_by_week,
        );

        HiringPlan {
            hiring_rate_per_week,
            effective_hiring_weeks,
            estimate,
        }
    }

    /// 估算给定速率下需要的总招聘量 (缺口 + 流失补员)
    ///
    /// 重放与模拟引擎一致的期望值递推:
    /// 每周先流失 (人数 x 周流失率),再按速率补员并封顶在编制数
    pub fn estimate_total_hires(
        &self,
        funded_size: f64,
        current_engineers: f64,
        hiring_rate_per_week: f64,
        attrition_rate: f64,
        close_gap_by_week: u32,
    ) -> HiresEstimate {
        let funded = non_negative(funded_size);
        let current = non_negative(current_engineers);
        let rate = non_negative(hiring_rate_per_week);
        let weekly_attrition =
            (non_negative(attrition_rate) / SIMULATION_WEEKS as f64).min(1.0);

        let initial_gap = (funded - current).max(0.0);

        let mut headcount = current;
        let mut estimated_attrition = 0.0;
        for _week in 1..close_gap_by_week {
            let departures = headcount * weekly_attrition;
            estimated_attrition += departures;
            headcount -= departures;
            headcount = (headcount + rate).min(funded);
        }

        HiresEstimate {
            total_hires_needed: initial_gap + estimated_attrition,
            initial_gap,
            estimated_attrition,
        }
    }
}

impl Default for HiringRateSolver {
    fn default() -> Self {
        Self::new()
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_attrition_rate_is_gap_over_effective_weeks() {
        // 缺口 10,有效周数 20 - 4 = 16
        let plan =
            HiringRateSolver::new().solve_hiring_rate(20.0, 10.0, 4, 8, 0.0, 20);
        assert_eq!(plan.effective_hiring_weeks, 16);
        assert!((plan.hiring_rate_per_week - 10.0 / 16.0).abs() < 1e-12);
        assert_eq!(plan.estimate.initial_gap, 10.0);
        assert_eq!(plan.estimate.estimated_attrition, 0.0);
        assert_eq!(plan.estimate.total_hires_needed, 10.0);
    }

    #[test]
    fn test_attrition_inflates_rate() {
        let solver = HiringRateSolver::new();
        let without = solver.solve_hiring_rate(20.0, 10.0, 4, 8, 0.0, 26);
        let with = solver.solve_hiring_rate(20.0, 10.0, 4, 8, 0.15, 26);
        assert!(with.hiring_rate_per_week > without.hiring_rate_per_week);
        assert!(with.estimate.estimated_attrition > 0.0);
        assert!(
            with.estimate.total_hires_needed
                > with.estimate.initial_gap
        );
    }

    #[test]
    fn test_unreachable_target_stays_finite() {
        // 目标周早于招聘周期: 有效周数取 1,速率偏大但有限
        let plan =
            HiringRateSolver::new().solve_hiring_rate(50.0, 10.0, 12, 8, 0.1, 6);
        assert_eq!(plan.effective_hiring_weeks, 1);
        assert!(plan.hiring_rate_per_week.is_finite());
        assert!(plan.hiring_rate_per_week >= 40.0);
    }

    #[test]
    fn test_already_at_funded_size_needs_no_hiring() {
        let plan =
            HiringRateSolver::new().solve_hiring_rate(10.0, 12.0, 4, 8, 0.0, 26);
        assert_eq!(plan.hiring_rate_per_week, 0.0);
        assert_eq!(plan.estimate.total_hires_needed, 0.0);
    }

    #[test]
    fn test_estimate_counts_attrition_before_target_week() {
        // 零速率下人数逐周衰减,流失累计为各周损失之和
        let estimate =
            HiringRateSolver::new().estimate_total_hires(20.0, 10.0, 0.0, 0.52, 11);
        // 周流失率 = 0.52 / 52 = 1%;10 周累计约 10 x (1 - 0.99^10)
        let expected = 10.0 * (1.0 - 0.99_f64.powi(10));
        assert!((estimate.estimated_attrition - expected).abs() < 1e-9);
        assert_eq!(estimate.initial_gap, 10.0);
    }

    #[test]
    fn test_garbage_inputs_produce_finite_plan() {
        let plan = HiringRateSolver::new().solve_hiring_rate(
            f64::NAN,
            -5.0,
            4,
            8,
            f64::INFINITY,
            0,
        );
        assert!(plan.hiring_rate_per_week.is_finite());
        assert_eq!(plan.effective_hiring_weeks, 1);
    }
}
