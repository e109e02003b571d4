//! Route table: URL-style paths to page views.
//!
//! Paths are matched segment by segment. `/` is a redirect to the dashboard
//! and never a page of its own. `/workflows/new` is tried before
//! `/workflows/:id` so "new" is never taken as a workflow id.

use std::fmt;

use synthesia_core::prelude::*;

/// Redirect target for `/`.
pub const HOME_PATH: &str = "/dashboard";

/// A resolved page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Dashboard,
    Projects,
    ProjectDetail { id: String },
    Agents,
    AgentDetail { id: String },
    Workflows,
    /// `id` is `None` when creating a new workflow.
    WorkflowBuilder { id: Option<String> },
    Executions,
    CodeGeneration,
    Settings,
    About,
}

impl Route {
    /// Resolve `path` to a route.
    ///
    /// A single trailing slash is ignored. Anything the table does not list
    /// is an [`Error::UnknownRoute`].
    pub fn resolve(path: &str) -> Result<Route> {
        let trimmed = path.trim();
        let normalized = match trimmed.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() && stripped != "/" => stripped,
            _ => trimmed,
        };

        if normalized == "/" {
            return Self::resolve(HOME_PATH);
        }

        let Some(rest) = normalized.strip_prefix('/') else {
            return Err(Error::unknown_route(path));
        };
        let segments: Vec<&str> = rest.split('/').collect();

        let route = match segments.as_slice() {
            ["dashboard"] => Route::Dashboard,
            ["projects"] => Route::Projects,
            ["projects", id] if !id.is_empty() => Route::ProjectDetail { id: id.to_string() },
            ["agents"] => Route::Agents,
            ["agents", id] if !id.is_empty() => Route::AgentDetail { id: id.to_string() },
            ["workflows"] => Route::Workflows,
            ["workflows", "new"] => Route::WorkflowBuilder { id: None },
            ["workflows", id] if !id.is_empty() => Route::WorkflowBuilder {
                id: Some(id.to_string()),
            },
            ["executions"] => Route::Executions,
            ["code-generation"] => Route::CodeGeneration,
            ["settings"] => Route::Settings,
            ["about"] => Route::About,
            _ => return Err(Error::unknown_route(path)),
        };
        Ok(route)
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/dashboard".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::ProjectDetail { id } => format!("/projects/{}", id),
            Route::Agents => "/agents".to_string(),
            Route::AgentDetail { id } => format!("/agents/{}", id),
            Route::Workflows => "/workflows".to_string(),
            Route::WorkflowBuilder { id: None } => "/workflows/new".to_string(),
            Route::WorkflowBuilder { id: Some(id) } => format!("/workflows/{}", id),
            Route::Executions => "/executions".to_string(),
            Route::CodeGeneration => "/code-generation".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::About => "/about".to_string(),
        }
    }

    /// List view a detail view returns to.
    pub fn parent(&self) -> Option<Route> {
        match self {
            Route::ProjectDetail { .. } => Some(Route::Projects),
            Route::AgentDetail { .. } => Some(Route::Agents),
            Route::WorkflowBuilder { .. } => Some(Route::Workflows),
            _ => None,
        }
    }

    /// Whether the page has a search box.
    pub fn is_searchable(&self) -> bool {
        matches!(self, Route::Projects | Route::Agents | Route::Workflows)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
