// ==========================================
// 集成测试数据构造器
// ==========================================
// 职责: 构造规划文档/团队/配置的测试样本
// ==========================================

use org_capacity_planner::domain::config::{
    GlobalCapacityConfig, GlobalConstraints, LeaveType, OrgEvent,
};
use org_capacity_planner::domain::team::{
    AwayTeamMember, Engineer, EngineerAttributes, LeaveUptakeEstimate, Team, TeamActivity,
    TeamCapacityAdjustments,
};
use org_capacity_planner::PlanningDocument;

/// 标准测试配置: 261 工作日,20 天年假,10 天公共假日,3 天黑客松
pub fn standard_config() -> GlobalCapacityConfig {
    GlobalCapacityConfig {
        working_days_per_year: 261.0,
        leave_types: vec![LeaveType {
            id: "annual".to_string(),
            name: "Annual Leave".to_string(),
            default_estimated_days: 20.0,
        }],
        global_constraints: GlobalConstraints {
            public_holidays: Some(10.0),
            org_events: vec![OrgEvent {
                id: "hackathon".to_string(),
                name: "Hackathon".to_string(),
                estimated_days_per_sde: 3.0,
            }],
        },
    }
}

/// 空政策配置: 只有年工作日,无任何扣减来源
pub fn bare_config() -> GlobalCapacityConfig {
    GlobalCapacityConfig {
        working_days_per_year: 261.0,
        leave_types: Vec::new(),
        global_constraints: GlobalConstraints::default(),
    }
}

/// 人类工程师注册表条目
pub fn human_engineer(name: &str) -> Engineer {
    Engineer {
        name: name.to_string(),
        level: Some(3),
        attributes: EngineerAttributes { is_ai_swe: false },
    }
}

/// AI 工程师注册表条目
pub fn ai_engineer(name: &str) -> Engineer {
    Engineer {
        name: name.to_string(),
        level: None,
        attributes: EngineerAttributes { is_ai_swe: true },
    }
}

/// 外借成员
pub fn away_member(name: &str, is_ai: bool) -> AwayTeamMember {
    AwayTeamMember {
        name: name.to_string(),
        attributes: EngineerAttributes { is_ai_swe: is_ai },
    }
}

/// 名册团队 (零调整政策)
pub fn team_with_roster(team_id: &str, engineer_names: &[&str], funded_headcount: f64) -> Team {
    Team {
        team_id: team_id.to_string(),
        team_name: format!("Team {}", team_id),
        funded_headcount,
        engineers: engineer_names.iter().map(|n| n.to_string()).collect(),
        away_team_members: Vec::new(),
        team_capacity_adjustments: TeamCapacityAdjustments::default(),
    }
}

/// 带 n 名人类工程师的团队,注册表一并生成
pub fn team_of_humans(team_id: &str, count: usize) -> (Team, Vec<Engineer>) {
    let names: Vec<String> = (1..=count).map(|i| format!("{}-eng{}", team_id, i)).collect();
    let engineers = names.iter().map(|n| human_engineer(n)).collect();
    let name_refs: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
    let team = team_with_roster(team_id, &name_refs, count as f64);
    (team, engineers)
}

/// 组装完整规划文档
pub fn document(
    teams: Vec<Team>,
    engineers: Vec<Engineer>,
    config: GlobalCapacityConfig,
) -> PlanningDocument {
    PlanningDocument {
        teams,
        capacity_configuration: Some(config),
        all_known_engineers: engineers,
    }
}

/// 常用团队活动
pub fn per_sde_activity(days: f64) -> TeamActivity {
    TeamActivity {
        name: "Offsite".to_string(),
        estimate_type: org_capacity_planner::ActivityEstimateType::PerSde,
        value: days,
    }
}

pub fn total_activity(days: f64) -> TeamActivity {
    TeamActivity {
        name: "Migration freeze".to_string(),
        estimate_type: org_capacity_planner::ActivityEstimateType::Total,
        value: days,
    }
}

/// 使用率估算
pub fn uptake(leave_type_id: &str, percent: f64) -> LeaveUptakeEstimate {
    LeaveUptakeEstimate {
        leave_type_id: leave_type_id.to_string(),
        estimated_uptake_percent: Some(percent),
    }
}
