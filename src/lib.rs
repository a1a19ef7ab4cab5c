// ==========================================
// 工程组织产能规划系统 - 核心库
// ==========================================
// 系统定位: 决策支持引擎 (产能核算 + 人力增长预测)
// 引擎对输入文档只读;宿主改文档后显式触发重算
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 数据仓储层 - 文档持久化
pub mod repository;

// API 层 - 业务接口
pub mod api;

// 报表导出
pub mod report;

// 数据库基础设施 (连接初始化/PRAGMA 统一)
pub mod db;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ActivityEstimateType, CapacityScenario, VariableLeaveCategory};

// 领域实体
pub use domain::{
    DeductionBreakdown, Engineer, GlobalCapacityConfig, HiresEstimate, HiringPlan,
    MonthlyAggregates, NetCapacityResult, OrgCapacityMetrics, PlanningDocument, ScenarioMetrics,
    SimulationParams, SimulationResult, Team, SIMULATION_WEEKS,
};

// 引擎
pub use engine::{CapacityEngine, GrowthSimulator, HiringRateSolver, ProductivityGainPolicy};

// API
pub use api::{ApiError, ApiResult, CapacityApi, ForecastApi};

// 仓储
pub use repository::{DocumentRepository, DocumentRevision, RepositoryError};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "工程组织产能规划系统";

// ==========================================
// 预编译检查
// ==========================================

// 确保编译时所有模块可见
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
