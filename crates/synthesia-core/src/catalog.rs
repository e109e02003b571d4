//! Read-only query surface over the dashboard's records.
//!
//! Pages never hold the records themselves; they ask a [`Catalog`] and
//! derive their view from what it returns. [`MockCatalog`] is the only
//! implementation and is backed by a bundled JSON document, or by a file of
//! the same shape supplied at startup.

use std::path::Path;

use serde::Deserialize;

use crate::charts::{AgentInsights, ChartData};
use crate::entities::{
    Agent, AgentCategory, CodeGeneration, DashboardStats, Project, User, Workflow,
    WorkflowExecution,
};
use crate::error::{Error, Result};

/// Maximum number of executions listed on an agent's detail page.
pub const AGENT_EXECUTION_LIMIT: usize = 5;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

pub trait Catalog: Send + Sync {
    fn current_user(&self) -> &User;
    fn projects(&self) -> &[Project];
    fn agents(&self) -> &[Agent];
    fn workflows(&self) -> &[Workflow];
    fn executions(&self) -> &[WorkflowExecution];
    fn categories(&self) -> &[AgentCategory];
    fn code_generations(&self) -> &[CodeGeneration];
    fn dashboard_stats(&self) -> &DashboardStats;
    fn chart_data(&self) -> &ChartData;
    fn agent_insights(&self) -> &AgentInsights;

    fn project(&self, id: &str) -> Option<&Project> {
        self.projects().iter().find(|p| p.id == id)
    }

    fn agent(&self, id: &str) -> Option<&Agent> {
        self.agents().iter().find(|a| a.id == id)
    }

    fn workflow(&self, id: &str) -> Option<&Workflow> {
        self.workflows().iter().find(|w| w.id == id)
    }

    fn workflows_for_project(&self, project_id: &str) -> Vec<&Workflow> {
        self.workflows()
            .iter()
            .filter(|w| w.project_id == project_id)
            .collect()
    }

    /// Executions of workflows that include `agent_id`, newest first, capped
    /// at [`AGENT_EXECUTION_LIMIT`].
    fn executions_for_agent(&self, agent_id: &str) -> Vec<&WorkflowExecution> {
        let workflow_ids: Vec<&str> = self
            .workflows()
            .iter()
            .filter(|w| w.uses_agent(agent_id))
            .map(|w| w.id.as_str())
            .collect();

        let mut executions: Vec<&WorkflowExecution> = self
            .executions()
            .iter()
            .filter(|e| workflow_ids.contains(&e.workflow_id.as_str()))
            .collect();
        executions.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        executions.truncate(AGENT_EXECUTION_LIMIT);
        executions
    }

    /// Category names in catalog order, for category tabs.
    fn category_names(&self) -> Vec<&str> {
        self.categories().iter().map(|c| c.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDocument {
    user: User,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    agents: Vec<Agent>,
    #[serde(default)]
    workflows: Vec<Workflow>,
    #[serde(default)]
    executions: Vec<WorkflowExecution>,
    #[serde(default)]
    categories: Vec<AgentCategory>,
    #[serde(default)]
    code_generations: Vec<CodeGeneration>,
    dashboard_stats: DashboardStats,
    #[serde(default)]
    charts: ChartData,
    #[serde(default)]
    agent_insights: AgentInsights,
}

/// In-memory catalog loaded once at startup.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    doc: CatalogDocument,
}

impl MockCatalog {
    /// Catalog bundled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Ok(Self { doc })
    }

    /// Load a catalog document from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::DataNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let doc: CatalogDocument = serde_json::from_str(&content)
            .map_err(|e| Error::data_invalid(path, e.to_string()))?;

        tracing::debug!(
            "Loaded catalog from {}: {} projects, {} agents, {} workflows",
            path.display(),
            doc.projects.len(),
            doc.agents.len(),
            doc.workflows.len()
        );
        Ok(Self { doc })
    }
}

impl Catalog for MockCatalog {
    fn current_user(&self) -> &User {
        &self.doc.user
    }

    fn projects(&self) -> &[Project] {
        &self.doc.projects
    }

    fn agents(&self) -> &[Agent] {
        &self.doc.agents
    }

    fn workflows(&self) -> &[Workflow] {
        &self.doc.workflows
    }

    fn executions(&self) -> &[WorkflowExecution] {
        &self.doc.executions
    }

    fn categories(&self) -> &[AgentCategory] {
        &self.doc.categories
    }

    fn code_generations(&self) -> &[CodeGeneration] {
        &self.doc.code_generations
    }

    fn dashboard_stats(&self) -> &DashboardStats {
        &self.doc.dashboard_stats
    }

    fn chart_data(&self) -> &ChartData {
        &self.doc.charts
    }

    fn agent_insights(&self) -> &AgentInsights {
        &self.doc.agent_insights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = MockCatalog::builtin().unwrap();
        assert_eq!(catalog.current_user().full_name(), "John Doe");
        assert_eq!(catalog.current_user().tenant_name, "Acme Corporation");
        assert_eq!(catalog.projects().len(), 4);
        assert_eq!(catalog.agents().len(), 6);
        assert_eq!(catalog.workflows().len(), 4);
        assert_eq!(catalog.executions().len(), 5);
        assert_eq!(catalog.categories().len(), 6);
        assert_eq!(catalog.code_generations().len(), 3);
        assert_eq!(catalog.agent_insights().weekly.len(), 7);
    }

    #[test]
    fn test_find_by_id() {
        let catalog = MockCatalog::builtin().unwrap();
        assert_eq!(
            catalog.agent("agent-2").map(|a| a.name.as_str()),
            Some("Content Writer Agent")
        );
        assert!(catalog.agent("agent-404").is_none());
        assert!(catalog.project("proj-3").is_some());
        assert!(catalog.workflow("").is_none());
    }

    #[test]
    fn test_workflows_for_project() {
        let catalog = MockCatalog::builtin().unwrap();
        let ids: Vec<&str> = catalog
            .workflows_for_project("proj-2")
            .iter()
            .map(|w| w.id.as_str())
            .collect();
        assert_eq!(ids, vec!["workflow-2", "workflow-3"]);
        assert!(catalog.workflows_for_project("proj-4").is_empty());
    }

    #[test]
    fn test_executions_for_agent_follow_workflow_membership() {
        let catalog = MockCatalog::builtin().unwrap();

        // agent-3 participates in workflow-2 and workflow-3 only
        let ids: Vec<&str> = catalog
            .executions_for_agent("agent-3")
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["exec-3", "exec-2", "exec-5"]);

        assert!(catalog.executions_for_agent("agent-404").is_empty());
    }

    #[test]
    fn test_executions_for_agent_is_deterministic_and_capped() {
        let catalog = MockCatalog::builtin().unwrap();
        let first = catalog.executions_for_agent("agent-1");
        let second = catalog.executions_for_agent("agent-1");
        assert_eq!(first, second);
        assert!(first.len() <= AGENT_EXECUTION_LIMIT);
    }

    #[test]
    fn test_from_file_missing_is_data_not_found() {
        let dir = tempdir().unwrap();
        let err = MockCatalog::from_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::DataNotFound { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_from_file_invalid_is_data_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "{ \"projects\": 3 }").unwrap();

        let err = MockCatalog::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::DataInvalid { .. }));
    }

    #[test]
    fn test_from_file_minimal_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{
                "user": {
                    "id": "u", "email": "e@x", "firstName": "A", "lastName": "B",
                    "role": "viewer", "tenantId": "t", "tenantName": "T"
                },
                "dashboardStats": {
                    "totalProjects": 0, "totalAgents": 0, "totalWorkflows": 0,
                    "totalExecutions": 0, "activeExecutions": 0, "successRate": 0,
                    "avgExecutionTime": 0, "codeGenerations": 0
                }
            }"#,
        )
        .unwrap();

        let catalog = MockCatalog::from_file(&path).unwrap();
        assert!(catalog.projects().is_empty());
        assert!(catalog.chart_data().execution_trend.is_empty());
    }
}
