//! Per-page view models derived from the catalog and page state.
//!
//! Nothing here mutates; the renderer and the key handler both call these so
//! they always agree on what is listed and what `Enter` opens.

use synthesia_core::{
    Agent, AgentConfiguration, AgentInsights, Catalog, FilteredList, ListFilter, Project,
    ProjectStatus, Workflow, WorkflowExecution,
};

use crate::page::PageState;
use crate::route::Route;

/// Label of the first category tab.
pub const ALL_CATEGORIES: &str = "All Categories";

/// Number of active projects listed on the dashboard.
pub const DASHBOARD_PROJECT_LIMIT: usize = 4;

/// Number of executions listed on the dashboard.
pub const DASHBOARD_EXECUTION_LIMIT: usize = 5;

/// Result of resolving a detail page's subject.
#[derive(Debug, Clone, PartialEq)]
pub enum Detail<T> {
    Found(T),
    NotFound(NotFound),
}

impl<T> Detail<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Detail::Found(_))
    }
}

/// Not-found message plus the way back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    pub message: &'static str,
    pub back_label: &'static str,
    pub back: Route,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgentDetailView<'a> {
    pub agent: &'a Agent,
    pub configuration: AgentConfiguration,
    pub executions: Vec<&'a WorkflowExecution>,
    pub insights: &'a AgentInsights,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetailView<'a> {
    pub project: &'a Project,
    pub workflows: Vec<&'a Workflow>,
}

/// The workflow builder page serves both create and edit.
#[derive(Debug, Clone, PartialEq)]
pub enum BuilderMode<'a> {
    Create,
    Edit {
        id: &'a str,
        workflow: Option<&'a Workflow>,
    },
}

pub fn category_tabs(catalog: &dyn Catalog) -> Vec<&str> {
    std::iter::once(ALL_CATEGORIES)
        .chain(catalog.categories().iter().map(|c| c.name.as_str()))
        .collect()
}

pub fn project_list<'a>(catalog: &'a dyn Catalog, filter: &ListFilter) -> FilteredList<'a, Project> {
    filter.apply(catalog.projects())
}

pub fn agent_list<'a>(catalog: &'a dyn Catalog, filter: &ListFilter) -> FilteredList<'a, Agent> {
    filter.apply(catalog.agents())
}

pub fn workflow_list<'a>(
    catalog: &'a dyn Catalog,
    filter: &ListFilter,
) -> FilteredList<'a, Workflow> {
    filter.apply(catalog.workflows())
}

pub fn active_projects(catalog: &dyn Catalog) -> Vec<&Project> {
    catalog
        .projects()
        .iter()
        .filter(|p| p.status == ProjectStatus::Active)
        .take(DASHBOARD_PROJECT_LIMIT)
        .collect()
}

pub fn recent_executions(catalog: &dyn Catalog) -> Vec<&WorkflowExecution> {
    catalog
        .executions()
        .iter()
        .take(DASHBOARD_EXECUTION_LIMIT)
        .collect()
}

pub fn agent_detail<'a>(catalog: &'a dyn Catalog, id: &str) -> Detail<AgentDetailView<'a>> {
    match catalog.agent(id) {
        Some(agent) => Detail::Found(AgentDetailView {
            agent,
            configuration: AgentConfiguration::for_agent(agent),
            executions: catalog.executions_for_agent(&agent.id),
            insights: catalog.agent_insights(),
        }),
        None => Detail::NotFound(NotFound {
            message: "Agent not found",
            back_label: "Back to Agents",
            back: Route::Agents,
        }),
    }
}

pub fn project_detail<'a>(catalog: &'a dyn Catalog, id: &str) -> Detail<ProjectDetailView<'a>> {
    match catalog.project(id) {
        Some(project) => Detail::Found(ProjectDetailView {
            project,
            workflows: catalog.workflows_for_project(&project.id),
        }),
        None => Detail::NotFound(NotFound {
            message: "Project not found",
            back_label: "Back to Projects",
            back: Route::Projects,
        }),
    }
}

pub fn workflow_builder<'a>(catalog: &'a dyn Catalog, id: Option<&'a str>) -> BuilderMode<'a> {
    match id {
        None => BuilderMode::Create,
        Some(id) => BuilderMode::Edit {
            id,
            workflow: catalog.workflow(id),
        },
    }
}

/// Routes opened by `Enter` on each row of the current page, in display
/// order. The length is the page's selectable row count.
pub fn content_targets(catalog: &dyn Catalog, route: &Route, page: &PageState) -> Vec<Route> {
    match route {
        Route::Dashboard => active_projects(catalog)
            .into_iter()
            .map(|p| Route::ProjectDetail { id: p.id.clone() })
            .collect(),
        Route::Projects => project_list(catalog, &page.filter)
            .items
            .into_iter()
            .map(|p| Route::ProjectDetail { id: p.id.clone() })
            .collect(),
        Route::Agents => agent_list(catalog, &page.filter)
            .items
            .into_iter()
            .map(|a| Route::AgentDetail { id: a.id.clone() })
            .collect(),
        Route::Workflows => workflow_list(catalog, &page.filter)
            .items
            .into_iter()
            .map(|w| Route::WorkflowBuilder {
                id: Some(w.id.clone()),
            })
            .collect(),
        Route::ProjectDetail { id } => match project_detail(catalog, id) {
            Detail::Found(view) => view
                .workflows
                .into_iter()
                .map(|w| Route::WorkflowBuilder {
                    id: Some(w.id.clone()),
                })
                .collect(),
            Detail::NotFound(nf) => vec![nf.back],
        },
        Route::AgentDetail { id } => match agent_detail(catalog, id) {
            Detail::Found(view) => view
                .executions
                .into_iter()
                .map(|_| Route::Executions)
                .collect(),
            Detail::NotFound(nf) => vec![nf.back],
        },
        Route::Executions
        | Route::CodeGeneration
        | Route::WorkflowBuilder { .. }
        | Route::Settings
        | Route::About => Vec::new(),
    }
}
