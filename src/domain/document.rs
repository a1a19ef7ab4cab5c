// ==========================================
// 工程组织产能规划系统 - 规划文档
// ==========================================
// 职责: 引擎输入的统一载体 (团队/配置/工程师注册表)
// 红线: 引擎只读;任何变更由宿主修改文档后整体重算
// ==========================================

use crate::domain::config::GlobalCapacityConfig;
use crate::domain::team::{Engineer, Team};
use serde::{Deserialize, Serialize};

// ==========================================
// PlanningDocument - 规划文档
// ==========================================
// 宿主应用以不透明 JSON blob 形式持久化整份文档
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanningDocument {
    /// 团队列表
    pub teams: Vec<Team>,

    /// 组织级产能配置 (可能尚未配置)
    pub capacity_configuration: Option<GlobalCapacityConfig>,

    /// 全量工程师注册表 (人类/AI 归属的唯一事实来源)
    pub all_known_engineers: Vec<Engineer>,
}

impl PlanningDocument {
    /// 按姓名查注册表
    pub fn find_engineer(&self, name: &str) -> Option<&Engineer> {
        self.all_known_engineers.iter().find(|e| e.name == name)
    }

    /// 按 teamId 查团队
    pub fn find_team(&self, team_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.team_id == team_id)
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_deserializes() {
        // 空白文档 (新安装) 必须可读入
        let doc: PlanningDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.teams.is_empty());
        assert!(doc.capacity_configuration.is_none());
    }

    #[test]
    fn test_find_engineer_by_name() {
        let json = r#"{
            "allKnownEngineers": [
                { "name": "Alice Johnson", "level": 4 },
                { "name": "Unit 734", "attributes": { "isAISWE": true } }
            ]
        }"#;
        let doc: PlanningDocument = serde_json::from_str(json).unwrap();
        assert!(!doc.find_engineer("Alice Johnson").unwrap().is_ai());
        assert!(doc.find_engineer("Unit 734").unwrap().is_ai());
        assert!(doc.find_engineer("Nobody").is_none());
    }
}
