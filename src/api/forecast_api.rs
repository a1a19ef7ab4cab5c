// ==========================================
// 工程组织产能规划系统 - 增长预测 API
// ==========================================
// 职责: what-if 模拟与招聘速率求解的同步入口
// 输入归一化在此边界一次完成,引擎内部不再防御
// ==========================================

use crate::domain::document::PlanningDocument;
use crate::domain::forecast::{
    HiresEstimate, HiringPlan, SimulationParams, SimulationResult,
};
use crate::engine::policy_math;
use crate::engine::{GrowthSimulator, HiringRateSolver};
use tracing::{instrument, warn};

// ==========================================
// ForecastApi - 增长预测门面
// ==========================================
pub struct ForecastApi {
    simulator: GrowthSimulator,
    solver: HiringRateSolver,
}

impl ForecastApi {
    pub fn new() -> Self {
        Self {
            simulator: GrowthSimulator::new(),
            solver: HiringRateSolver::new(),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 52 周 what-if 模拟
    ///
    /// 指定 team_id 时,每周净可用天数由该团队的产能政策推导;
    /// 团队或配置缺失时退回标准 5 天 (告警,不报错)
    #[instrument(skip(self, document, params), fields(team_id = team_id.unwrap_or("-")))]
    pub fn simulate(
        &self,
        document: &PlanningDocument,
        params: &SimulationParams,
        team_id: Option<&str>,
    ) -> SimulationResult {
        let mut effective = *params;

        if let Some(id) = team_id {
            match (document.find_team(id), &document.capacity_configuration) {
                (Some(team), Some(config)) => {
                    effective.net_available_days_per_week =
                        policy_math::net_available_days_per_week(team, config);
                }
                _ => {
                    warn!(team_id = id, "团队或配置缺失,净可用天数按标准 5 天计");
                }
            }
        }

        self.simulator.simulate(&effective)
    }

    /// 求按目标周补齐编制所需的恒定周招聘速率
    #[allow(clippy::too_many_arguments)]
    pub fn required_hiring_rate(
        &self,
        funded_size: f64,
        current_engineers: f64,
        hiring_time_weeks: u32,
        ramp_up_time_weeks: u32,
        attrition_rate: f64,
        close_gap_by_week: u32,
    ) -> HiringPlan {
        self.solver.solve_hiring_rate(
            funded_size,
            current_engineers,
            hiring_time_weeks,
            ramp_up_time_weeks,
            attrition_rate,
            close_gap_by_week,
        )
    }

    /// 估算给定速率下的总招聘量
    pub fn estimate_total_hires(
        &self,
        funded_size: f64,
        current_engineers: f64,
        hiring_rate_per_week: f64,
        attrition_rate: f64,
        close_gap_by_week: u32,
    ) -> HiresEstimate {
        self.solver.estimate_total_hires(
            funded_size,
            current_engineers,
            hiring_rate_per_week,
            attrition_rate,
            close_gap_by_week,
        )
    }
}

impl Default for ForecastApi {
    fn default() -> Self {
        Self::new()
    }
}
