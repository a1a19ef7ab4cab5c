// ==========================================
// 工程组织产能规划系统 - 预测报表导出
// ==========================================
// 职责: 把 52 周模拟结果导出为 CSV (供外部图表/表格消费)
// ==========================================

use crate::domain::forecast::SimulationResult;
use serde::Serialize;
use std::error::Error;
use std::path::Path;
use tracing::info;

/// 单周样本记录 (CSV 一行)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyForecastRecord {
    /// 周号 (1 起)
    pub week: usize,
    pub total_headcount: f64,
    pub productive_engineers: f64,
    pub cumulative_attrition: f64,
    /// 本周产出产能 (完全产出人数 x 净可用天数)
    pub productive_sde_days: f64,
}

/// 把模拟结果展开为逐周记录
pub fn weekly_records(result: &SimulationResult) -> Vec<WeeklyForecastRecord> {
    result
        .total_headcount
        .iter()
        .enumerate()
        .map(|(index, &total)| WeeklyForecastRecord {
            week: index + 1,
            total_headcount: total,
            productive_engineers: result.productive_engineers[index],
            cumulative_attrition: result.cumulative_attrition[index],
            productive_sde_days: result.productive_engineers[index]
                * result.net_available_days_per_week,
        })
        .collect()
}

/// 把模拟结果写入 CSV 文件
pub fn write_forecast_csv(
    file_path: &str,
    result: &SimulationResult,
) -> Result<(), Box<dyn Error>> {
    let path = Path::new(file_path);
    let mut writer = csv::Writer::from_path(path)?;

    for record in weekly_records(result) {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!(file_path, weeks = result.total_headcount.len(), "预测报表已导出");
    Ok(())
}
