// Small dev utility: recompute capacity metrics for a planning document
// and optionally run a hiring forecast for one team.
//
// Usage:
//   cargo run -- <document.json>
//   cargo run -- <document.json> --forecast <team_id> <out.csv>
//
// This is intentionally lightweight and does not start any UI.

use org_capacity_planner::domain::forecast::SimulationParams;
use org_capacity_planner::{CapacityApi, CapacityScenario, ForecastApi, PlanningDocument};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    org_capacity_planner::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 决策支持引擎", org_capacity_planner::APP_NAME);
    tracing::info!("系统版本: {}", org_capacity_planner::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let document_path = args
        .next()
        .ok_or("用法: org-capacity-planner <document.json> [--forecast <team_id> <out.csv>]")?;

    let raw = std::fs::read_to_string(&document_path)?;
    let document: PlanningDocument = serde_json::from_str(&raw)?;
    tracing::info!("已读入规划文档: {} ({} 个团队)", document_path, document.teams.len());

    // 全量重算并打印三情景汇总
    let capacity_api = CapacityApi::new();
    let metrics = capacity_api.recalculate(&document);

    println!("组织级产能汇总 (SDE-年):");
    for scenario in CapacityScenario::ALL {
        let totals = metrics.totals.get(scenario);
        println!(
            "  {:<12} 总人数={:<6.1} 人类={:<6.1} 毛产能={:<7.2} 扣减={:<7.2} 净产能={:.2}",
            scenario.to_string(),
            totals.total_headcount,
            totals.human_headcount,
            totals.gross_yrs,
            totals.deduct_yrs,
            totals.net_yrs,
        );
    }

    // 可选: 针对单个团队做招聘预测并导出 CSV
    if let Some(flag) = args.next() {
        if flag != "--forecast" {
            return Err(format!("未知参数: {}", flag).into());
        }
        let team_id = args.next().ok_or("--forecast 需要 <team_id>")?;
        let csv_path = args.next().ok_or("--forecast 需要 <out.csv>")?;

        let team = document
            .find_team(&team_id)
            .ok_or_else(|| format!("团队不存在: {}", team_id))?;

        let forecast_api = ForecastApi::new();
        let funded_size = team.funded_headcount;
        let current_engineers = team.engineers.len() as f64;

        // 默认管道假设: 招聘 4 周、上手 8 周、年流失 10%、26 周内补齐
        let plan = forecast_api.required_hiring_rate(
            funded_size,
            current_engineers,
            4,
            8,
            0.10,
            26,
        );
        println!(
            "团队 {} 需要约每周 {:.2} 人的招聘速率 (总计约 {:.1} 人) 才能在第 26 周补齐编制",
            team_id, plan.hiring_rate_per_week, plan.estimate.total_hires_needed,
        );

        let params = SimulationParams {
            hiring_rate_per_week: plan.hiring_rate_per_week,
            funded_size,
            current_engineers,
            hiring_time_weeks: 4,
            ramp_up_time_weeks: 8,
            attrition_rate: 0.10,
            ..Default::default()
        };
        let result = forecast_api.simulate(&document, &params, Some(&team_id));
        org_capacity_planner::report::write_forecast_csv(&csv_path, &result)?;
        println!("预测明细已写入 {}", csv_path);
    }

    Ok(())
}
