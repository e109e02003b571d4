//! # synthesia-core - Core Domain Types
//!
//! Foundation crate for SynthesiaCanvas. Provides the read-only domain
//! records, the catalog query surface, list filtering, theme mode selection,
//! error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Records (`entities`)
//! - [`Project`], [`Agent`], [`Workflow`], [`WorkflowExecution`] - Core records
//! - [`AgentCategory`], [`CodeGeneration`], [`DashboardStats`], [`User`]
//! - [`Tone`] - Visual weight of a status value
//!
//! ### Catalog (`catalog`)
//! - [`Catalog`] - Read-only query trait used by every page
//! - [`MockCatalog`] - Bundled or file-backed implementation
//!
//! ### Filtering (`filter`)
//! - [`ListFilter`] - Search text plus optional category
//! - [`EmptyState`] - Distinguishes "no data" from "no results"
//!
//! ### Theme (`theme_mode`)
//! - [`ThemeMode`] - Light, Dark or Ocean; the only persisted UI state
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use synthesia_core::prelude::*;
//! ```

pub mod catalog;
pub mod charts;
pub mod entities;
pub mod error;
pub mod filter;
pub mod logging;
pub mod theme_mode;

/// Prelude for common imports used throughout all SynthesiaCanvas crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::{Catalog, MockCatalog, AGENT_EXECUTION_LIMIT};
pub use charts::{
    AgentConfiguration, AgentInsights, AgentPerformancePoint, CategoryShare, ChartData,
    DailyPerformance, ExecutionTrendPoint, ResourceSample,
};
pub use entities::{
    Agent, AgentCategory, AgentStatus, CodeGeneration, CodeGenerationStatus, DashboardStats,
    ExecutionStatus, Framework, Project, ProjectStatus, Tone, User, UserRole, Workflow,
    WorkflowExecution, WorkflowStatus,
};
pub use error::{Error, Result, ResultExt};
pub use filter::{EmptyState, FilteredList, Filterable, ListFilter};
pub use theme_mode::{ThemeMode, UnknownThemeMode, THEME_MODE_KEY};
