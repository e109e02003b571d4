//! Read-only domain records shown by the dashboard.
//!
//! Records are immutable for the lifetime of the process. Foreign-key-like
//! fields (`project_id`, `workflow_id`) are informational and never
//! integrity-checked.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Visual weight of a status, mapped to a palette role by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Info,
    Error,
    Neutral,
}

// ─────────────────────────────────────────────────────────────────────────────
// Users & tenants
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    Viewer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
            UserRole::Viewer => "viewer",
        }
    }
}

/// The signed-in user together with the tenant they belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub tenant_id: String,
    pub tenant_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Two-letter monogram used in place of an avatar image.
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Projects
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Draft,
    Active,
    Archived,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::Active => "active",
            ProjectStatus::Archived => "archived",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            ProjectStatus::Active => Tone::Success,
            ProjectStatus::Draft => Tone::Warning,
            ProjectStatus::Archived => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
    pub agent_count: u32,
    pub workflow_count: u32,
}

// ─────────────────────────────────────────────────────────────────────────────
// Agents
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Draft,
    Active,
    Paused,
    Error,
}

impl AgentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AgentStatus::Draft => "draft",
            AgentStatus::Active => "active",
            AgentStatus::Paused => "paused",
            AgentStatus::Error => "error",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            AgentStatus::Active => Tone::Success,
            AgentStatus::Draft => Tone::Warning,
            AgentStatus::Paused => Tone::Info,
            AgentStatus::Error => Tone::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub description: String,
    pub agent_type: String,
    pub category: String,
    pub status: AgentStatus,
    #[serde(default)]
    pub llm_provider: Option<String>,
    #[serde(default)]
    pub llm_model: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub execution_count: u32,
    /// Seconds
    pub avg_execution_time: f64,
    /// Percentage in `0.0..=100.0`
    pub success_rate: f64,
}

impl Agent {
    /// `"Provider • model"` when both are known.
    pub fn llm_summary(&self) -> Option<String> {
        match (&self.llm_provider, &self.llm_model) {
            (Some(provider), Some(model)) => Some(format!("{} • {}", provider, model)),
            _ => None,
        }
    }
}

/// Grouping of agent types shown as tabs on the agents page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub agent_count: u32,
    #[serde(default)]
    pub subcategories: Vec<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Workflows & executions
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStatus {
    Draft,
    Active,
    Archived,
}

impl WorkflowStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowStatus::Draft => "draft",
            WorkflowStatus::Active => "active",
            WorkflowStatus::Archived => "archived",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            WorkflowStatus::Active => Tone::Success,
            WorkflowStatus::Draft => Tone::Warning,
            WorkflowStatus::Archived => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub project_id: String,
    pub status: WorkflowStatus,
    pub agent_count: u32,
    pub execution_count: u32,
    #[serde(default)]
    pub last_executed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Agents wired into this workflow. Drives the agent → execution join.
    #[serde(default)]
    pub agent_ids: Vec<String>,
}

impl Workflow {
    pub fn uses_agent(&self, agent_id: &str) -> bool {
        self.agent_ids.iter().any(|id| id == agent_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Pending,
    Running,
    Completed,
    Failed,
    Cancelled,
}

impl ExecutionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ExecutionStatus::Pending => "pending",
            ExecutionStatus::Running => "running",
            ExecutionStatus::Completed => "completed",
            ExecutionStatus::Failed => "failed",
            ExecutionStatus::Cancelled => "cancelled",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            ExecutionStatus::Completed => Tone::Success,
            ExecutionStatus::Failed => Tone::Error,
            ExecutionStatus::Running => Tone::Info,
            ExecutionStatus::Pending => Tone::Warning,
            ExecutionStatus::Cancelled => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowExecution {
    pub id: String,
    pub workflow_id: String,
    pub workflow_name: String,
    pub status: ExecutionStatus,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    /// Minutes
    #[serde(default)]
    pub duration: Option<u32>,
    pub agents_executed: u32,
    pub total_agents: u32,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub tokens_used: Option<u32>,
}

impl WorkflowExecution {
    /// Fraction of agents executed, clamped to `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.total_agents == 0 {
            return 0.0;
        }
        (self.agents_executed as f64 / self.total_agents as f64).clamp(0.0, 1.0)
    }

    pub fn duration_label(&self) -> String {
        match self.duration {
            Some(minutes) => format!("{}m", minutes),
            None => "-".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Code generation
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeGenerationStatus {
    Pending,
    Generating,
    Building,
    Completed,
    Failed,
}

impl CodeGenerationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CodeGenerationStatus::Pending => "pending",
            CodeGenerationStatus::Generating => "generating",
            CodeGenerationStatus::Building => "building",
            CodeGenerationStatus::Completed => "completed",
            CodeGenerationStatus::Failed => "failed",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            CodeGenerationStatus::Completed => Tone::Success,
            CodeGenerationStatus::Failed => Tone::Error,
            CodeGenerationStatus::Generating | CodeGenerationStatus::Building => Tone::Info,
            CodeGenerationStatus::Pending => Tone::Warning,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Autogen,
    Langchain,
    Crewai,
}

impl Framework {
    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Autogen => "AutoGen",
            Framework::Langchain => "LangChain",
            Framework::Crewai => "CrewAI",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeGeneration {
    pub id: String,
    pub workflow_id: String,
    pub workflow_name: String,
    pub status: CodeGenerationStatus,
    pub framework: Framework,
    #[serde(default)]
    pub wheel_file_path: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl CodeGeneration {
    /// File name portion of the exported wheel, if any.
    pub fn wheel_file_name(&self) -> Option<&str> {
        self.wheel_file_path
            .as_deref()
            .map(|p| p.rsplit('/').next().unwrap_or(p))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dashboard
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_projects: u32,
    pub total_agents: u32,
    pub total_workflows: u32,
    pub total_executions: u32,
    pub active_executions: u32,
    pub success_rate: f64,
    pub avg_execution_time: f64,
    pub code_generations: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn execution(executed: u32, total: u32) -> WorkflowExecution {
        WorkflowExecution {
            id: "exec-x".to_string(),
            workflow_id: "workflow-1".to_string(),
            workflow_name: "Test".to_string(),
            status: ExecutionStatus::Running,
            start_time: Utc.with_ymd_and_hms(2024, 11, 5, 14, 30, 0).unwrap(),
            end_time: None,
            duration: None,
            agents_executed: executed,
            total_agents: total,
            error_message: None,
            tokens_used: None,
        }
    }

    #[test]
    fn test_execution_progress() {
        assert_eq!(execution(3, 5).progress(), 0.6);
        assert_eq!(execution(0, 0).progress(), 0.0);
        assert_eq!(execution(9, 5).progress(), 1.0);
    }

    #[test]
    fn test_duration_label() {
        let mut exec = execution(1, 1);
        assert_eq!(exec.duration_label(), "-");
        exec.duration = Some(15);
        assert_eq!(exec.duration_label(), "15m");
    }

    #[test]
    fn test_status_tones() {
        assert_eq!(ProjectStatus::Active.tone(), Tone::Success);
        assert_eq!(AgentStatus::Paused.tone(), Tone::Info);
        assert_eq!(ExecutionStatus::Failed.tone(), Tone::Error);
        assert_eq!(CodeGenerationStatus::Building.tone(), Tone::Info);
    }

    #[test]
    fn test_user_initials() {
        let user = User {
            id: "user-1".into(),
            email: "ada@example.com".into(),
            first_name: "ada".into(),
            last_name: "lovelace".into(),
            role: UserRole::Admin,
            tenant_id: "tenant-1".into(),
            tenant_name: "Analytical Engines".into(),
            avatar: None,
        };
        assert_eq!(user.initials(), "AL");
        assert_eq!(user.full_name(), "ada lovelace");
    }

    #[test]
    fn test_wheel_file_name() {
        let generation = CodeGeneration {
            id: "codegen-1".into(),
            workflow_id: "workflow-1".into(),
            workflow_name: "Support".into(),
            status: CodeGenerationStatus::Completed,
            framework: Framework::Autogen,
            wheel_file_path: Some("/exports/support-1.0.0-py3-none-any.whl".into()),
            created_at: Utc.with_ymd_and_hms(2024, 11, 4, 10, 0, 0).unwrap(),
            completed_at: None,
        };
        assert_eq!(
            generation.wheel_file_name(),
            Some("support-1.0.0-py3-none-any.whl")
        );
    }

    #[test]
    fn test_status_deserializes_lowercase() {
        let status: ExecutionStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, ExecutionStatus::Cancelled);
    }
}
