// ==========================================
// 工程组织产能规划系统 - API 层
// ==========================================
// 职责: 宿主应用的同步调用门面 (核算/预测)
// 红线: 入口处统一归一化输入;引擎内部不做防御检查
// ==========================================

pub mod capacity_api;
pub mod error;
pub mod forecast_api;

pub use capacity_api::CapacityApi;
pub use error::{ApiError, ApiResult};
pub use forecast_api::ForecastApi;
