// ==========================================
// 工程组织产能规划系统 - 产能核算 API
// ==========================================
// 职责: 宿主触发面 (表单编辑/情景切换/显式重算) 的同步入口
// 红线: 无事件系统、无轮询、无订阅;宿主改文档后显式调用
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::capacity::{OrgCapacityMetrics, ScenarioMetrics};
use crate::domain::document::PlanningDocument;
use crate::engine::CapacityEngine;
use tracing::{instrument, warn};

// ==========================================
// CapacityApi - 产能核算门面
// ==========================================
pub struct CapacityApi {
    engine: CapacityEngine,
}

impl CapacityApi {
    pub fn new() -> Self {
        Self {
            engine: CapacityEngine::new(),
        }
    }

    /// 注入自定义引擎 (如替换增益策略)
    pub fn with_engine(engine: CapacityEngine) -> Self {
        Self { engine }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 全量重算所有团队三情景指标
    ///
    /// 配置/团队缺失按零值结果降级,不报错:
    /// 数据只填了一半的文档也必须能出报表
    #[instrument(skip_all)]
    pub fn recalculate(&self, document: &PlanningDocument) -> OrgCapacityMetrics {
        self.engine.compute_all(document)
    }

    /// 单团队三情景明细
    ///
    /// # 返回
    /// - `NotFound`: teamId 不在文档中
    pub fn team_breakdown(
        &self,
        document: &PlanningDocument,
        team_id: &str,
    ) -> ApiResult<ScenarioMetrics> {
        let team = document
            .find_team(team_id)
            .ok_or_else(|| ApiError::NotFound(format!("Team(id={})不存在", team_id)))?;

        match &document.capacity_configuration {
            Some(config) => Ok(self
                .engine
                .compute_team(team, config, &document.all_known_engineers)),
            None => {
                warn!(team_id, "产能配置缺失,返回零值明细");
                Ok(ScenarioMetrics::default())
            }
        }
    }
}

impl Default for CapacityApi {
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

    #[test]
    fn test_team_breakdown_unknown_team_is_not_found() {
        let api = CapacityApi::new();
        let document = PlanningDocument::default();
        let result = api.team_breakdown(&document, "ghost-team");
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[test]
    fn test_team_breakdown_without_config_degrades_to_zero() {
        let api = CapacityApi::new();
        let document: PlanningDocument =
            serde_json::from_str(r#"{ "teams": [{ "teamId": "team1" }] }"#).unwrap();
        let breakdown = api.team_breakdown(&document, "team1").unwrap();
        assert_eq!(breakdown, ScenarioMetrics::default());
    }
}
