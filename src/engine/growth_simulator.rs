// ==========================================
// 工程组织产能规划系统 - 人力增长模拟引擎
// ==========================================
// 职责: 52 周离散模拟 (招聘管道 -> 上手期 -> 完全产出)
// 输入: SimulationParams (速率/编制/周期/流失率)
// 输出: SimulationResult (周序列 + 月度汇总)
// 红线: 完全确定性;流失与招聘均按期望值处理,无随机过程
// ==========================================

use crate::domain::forecast::{
    MonthlyAggregates, SimulationParams, SimulationResult, SIMULATION_WEEKS,
    STANDARD_DAYS_PER_WEEK, WEEK_TO_MONTH,
};
use tracing::instrument;

/// 报告月数
const MONTHS: usize = 12;

/// 管道/上手期批次 (按剩余周数推进的期望人数)
#[derive(Debug, Clone, Copy)]
struct Cohort {
    weeks_left: u32,
    count: f64,
}

fn cohort_sum(cohorts: &[Cohort]) -> f64 {
    cohorts.iter().map(|c| c.count).sum()
}

// ==========================================
// GrowthSimulator - 增长模拟引擎
// ==========================================
pub struct GrowthSimulator;

impl GrowthSimulator {
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 模拟 52 周的团队规模演化
    ///
    /// 周循环各阶段 (顺序固定):
    /// 1) 流失: 在岗各批次 (上手期 + 完全产出) 按周率等比缩减;
    ///    在途招聘 (未入职) 不参与流失
    /// 2) 招聘: 恒定速率入池;封顶时入池量以剩余缺口 (含在途) 为限
    /// 3) 管道推进: 在途批次到期转入上手期,上手批次到期转为完全产出
    /// 4) 封顶: 在岗总数超出编制的部分按最新批次优先丢弃
    /// 5) 记录周样本并按周->月映射累计月度汇总
    ///
    /// 总人数口径为在岗 (上手期 + 完全产出);签约未入职的
    /// 在途人员只参与封顶判断,不计入人数序列
    #[instrument(skip(self, params), fields(
        hiring_rate = params.hiring_rate_per_week,
        funded_size = params.funded_size,
        current_engineers = params.current_engineers,
        attrition_rate = params.attrition_rate,
    ))]
    pub fn simulate(&self, params: &SimulationParams) -> SimulationResult {
        let p = params.normalized();
        let weekly_attrition = (p.attrition_rate / SIMULATION_WEEKS as f64).min(1.0);

        let mut productive = p.current_engineers;
        let mut ramping: Vec<Cohort> = Vec::new();
        let mut pipeline: Vec<Cohort> = Vec::new();
        let mut cumulative_attrition = 0.0;

        let mut total_series = Vec::with_capacity(SIMULATION_WEEKS);
        let mut productive_series = Vec::with_capacity(SIMULATION_WEEKS);
        let mut attrition_series = Vec::with_capacity(SIMULATION_WEEKS);
        let mut monthly = MonthlyAggregates {
            headcount: vec![0.0; MONTHS],
            sde_weeks: vec![0.0; MONTHS],
            sde_days: vec![0.0; MONTHS],
        };

        for week in 0..SIMULATION_WEEKS {
            // 1. 流失
            let on_board = productive + cohort_sum(&ramping);
            if weekly_attrition > 0.0 && on_board > 0.0 {
                let survival = 1.0 - weekly_attrition;
                cumulative_attrition += on_board * weekly_attrition;
                productive *= survival;
                for cohort in &mut ramping {
                    cohort.count *= survival;
                }
            }

            // 2. 招聘
            let hires = if p.cap_at_funded_size {
                let committed =
                    productive + cohort_sum(&ramping) + cohort_sum(&pipeline);
                (p.funded_size - committed).clamp(0.0, p.hiring_rate_per_week)
            } else {
                p.hiring_rate_per_week
            };
            if hires > 0.0 {
                pipeline.push(Cohort {
                    weeks_left: p.hiring_time_weeks,
                    count: hires,
                });
            }

            // 3. 管道推进: 在途 -> 上手
            let mut arrivals = 0.0;
            pipeline.retain_mut(|cohort| {
                cohort.weeks_left = cohort.weeks_left.saturating_sub(1);
                if cohort.weeks_left == 0 {
                    arrivals += cohort.count;
                    false
                } else {
                    true
                }
            });
            if arrivals > 0.0 {
                ramping.push(Cohort {
                    weeks_left: p.ramp_up_time_weeks,
                    count: arrivals,
                });
            }

            // 上手 -> 完全产出
            let mut ramped_up = 0.0;
            ramping.retain_mut(|cohort| {
                cohort.weeks_left = cohort.weeks_left.saturating_sub(1);
                if cohort.weeks_left == 0 {
                    ramped_up += cohort.count;
                    false
                } else {
                    true
                }
            });
            productive += ramped_up;

            // 4. 封顶
            if p.cap_at_funded_size {
                let mut overflow = productive + cohort_sum(&ramping) - p.funded_size;
                while overflow > 0.0 {
                    match ramping.last_mut() {
                        Some(cohort) => {
                            let discarded = cohort.count.min(overflow);
                            cohort.count -= discarded;
                            overflow -= discarded;
                            if cohort.count <= 0.0 {
                                ramping.pop();
                            }
                        }
                        None => {
                            productive = (productive - overflow).max(0.0);
                            break;
                        }
                    }
                }
            }

            // 5. 记录
            let total = productive + cohort_sum(&ramping);
            total_series.push(total);
            productive_series.push(productive);
            attrition_series.push(cumulative_attrition);

            // 6. 月度汇总: headcount 为月末快照,其余为月内求和
            let month_index = (WEEK_TO_MONTH[week] - 1) as usize;
            monthly.headcount[month_index] = total;
            monthly.sde_days[month_index] += productive * p.net_available_days_per_week;
            monthly.sde_weeks[month_index] +=
                productive * p.net_available_days_per_week / STANDARD_DAYS_PER_WEEK;
        }

        SimulationResult {
            total_headcount: total_series,
            productive_engineers: productive_series,
            cumulative_attrition: attrition_series,
            monthly,
            net_available_days_per_week: p.net_available_days_per_week,
        }
    }
}

impl Default for GrowthSimulator {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> SimulationParams {
        SimulationParams {
            hiring_rate_per_week: 1.0,
            funded_size: 20.0,
            current_engineers: 10.0,
            hiring_time_weeks: 4,
            ramp_up_time_weeks: 8,
            attrition_rate: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_series_always_have_52_samples() {
        let simulator = GrowthSimulator::new();
        for p in [
            SimulationParams::default(),
            params(),
            SimulationParams {
                hiring_rate_per_week: -5.0,
                funded_size: f64::NAN,
                ..Default::default()
            },
        ] {
            let result = simulator.simulate(&p);
            assert_eq!(result.total_headcount.len(), SIMULATION_WEEKS);
            assert_eq!(result.productive_engineers.len(), SIMULATION_WEEKS);
            assert_eq!(result.cumulative_attrition.len(), SIMULATION_WEEKS);
        }
    }

    #[test]
    fn test_pipeline_delay_before_headcount_growth() {
        // 招聘周期 4 周: 第 1 周入池的批次第 4 周入职
        let result = GrowthSimulator::new().simulate(&params());
        assert_eq!(result.total_headcount[0], 10.0);
        assert_eq!(result.total_headcount[1], 10.0);
        assert_eq!(result.total_headcount[2], 10.0);
        assert!((result.total_headcount[3] - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_ramp_up_delays_productive_cohort() {
        // 入职后还需上手期才计入完全产出
        let result = GrowthSimulator::new().simulate(&params());
        // 第 4 周入职的批次要到第 11 周才完全产出
        assert_eq!(result.productive_engineers[9], 10.0);
        assert!(result.productive_engineers[10] > 10.0);
    }

    #[test]
    fn test_cap_at_funded_size_holds_every_week() {
        let p = SimulationParams {
            hiring_rate_per_week: 5.0,
            ..params()
        };
        let result = GrowthSimulator::new().simulate(&p);
        for &total in &result.total_headcount {
            assert!(total <= p.funded_size + 1e-9);
        }
    }

    #[test]
    fn test_cap_clamps_oversized_initial_roster() {
        // 当前人数已超编制: 封顶后第 1 周即收敛到编制数
        let p = SimulationParams {
            current_engineers: 30.0,
            hiring_rate_per_week: 0.0,
            ..params()
        };
        let result = GrowthSimulator::new().simulate(&p);
        assert!((result.total_headcount[0] - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_uncapped_growth_exceeds_funded_size() {
        let p = SimulationParams {
            hiring_rate_per_week: 2.0,
            cap_at_funded_size: false,
            ..params()
        };
        let result = GrowthSimulator::new().simulate(&p);
        assert!(*result.total_headcount.last().unwrap() > p.funded_size);
    }

    #[test]
    fn test_no_attrition_headcount_is_monotonic() {
        let result = GrowthSimulator::new().simulate(&params());
        for pair in result.total_headcount.windows(2) {
            assert!(pair[1] >= pair[0] - 1e-12);
        }
    }

    #[test]
    fn test_attrition_only_is_strictly_decreasing() {
        let p = SimulationParams {
            hiring_rate_per_week: 0.0,
            current_engineers: 10.0,
            attrition_rate: 0.1,
            ..params()
        };
        let result = GrowthSimulator::new().simulate(&p);
        let mut previous = p.current_engineers;
        for &total in &result.total_headcount {
            assert!(total < previous);
            previous = total;
        }
        // 累计流失单调上升
        assert!(result.cumulative_attrition[51] > result.cumulative_attrition[0]);
    }

    #[test]
    fn test_simulation_is_deterministic() {
        let simulator = GrowthSimulator::new();
        let p = SimulationParams {
            attrition_rate: 0.15,
            ..params()
        };
        let first = simulator.simulate(&p);
        let second = simulator.simulate(&p);
        assert_eq!(first.total_headcount, second.total_headcount);
        assert_eq!(first.productive_engineers, second.productive_engineers);
    }

    #[test]
    fn test_monthly_aggregates_cover_twelve_months() {
        let result = GrowthSimulator::new().simulate(&params());
        assert_eq!(result.monthly.headcount.len(), 12);
        assert_eq!(result.monthly.sde_weeks.len(), 12);
        assert_eq!(result.monthly.sde_days.len(), 12);
        // 一月有 4 周,每周 10 人完全产出 x 5 天
        assert!((result.monthly.sde_days[0] - 4.0 * 10.0 * 5.0).abs() < 1e-9);
        // 十二月快照等于第 52 周总人数
        assert_eq!(result.monthly.headcount[11], result.total_headcount[51]);
    }

    #[test]
    fn test_productive_capacity_uses_net_days() {
        let p = SimulationParams {
            hiring_rate_per_week: 0.0,
            net_available_days_per_week: 4.0,
            ..params()
        };
        let result = GrowthSimulator::new().simulate(&p);
        // sdeDays = 完全产出人数 x 净可用天数
        assert!((result.monthly.sde_days[0] - 4.0 * 10.0 * 4.0).abs() < 1e-9);
        assert!((result.monthly.sde_weeks[0] - 4.0 * 10.0 * 4.0 / 5.0).abs() < 1e-9);
    }
}
