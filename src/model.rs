// SPDX-License-Identifier: MPL-2.0
//! Model/graph variant detection.
//!
//! A note-graph host stores notes either as markdown files or in a database,
//! and the workspace graph is itself file-based or database-based. The two
//! booleans the host reports collapse into exactly three variants, derived
//! once at startup and immutable for the activation's lifetime. There is no
//! re-detection.

use crate::error::Result;
use crate::host::HostApi;

/// Raw flags as reported by the host environment query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelFlags {
    /// Notes are stored as markdown files.
    pub is_markdown_model: bool,
    /// The workspace graph is database-backed.
    pub is_db_graph: bool,
}

/// The three storage variants a host can be running.
///
/// Derived from [`ModelFlags`]; the markdown flag takes precedence, so the
/// graph flag only matters under the db model. Using an enum makes every
/// downstream dispatch exhaustive, with no fourth, unreachable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelVariant {
    /// Markdown-file-based note storage.
    MarkdownModel,
    /// Database model with a file-based graph.
    DbModelFileGraph,
    /// Database model with a database-backed graph.
    DbModelDbGraph,
}

impl ModelVariant {
    /// Collapses the host's flags into a variant. Markdown wins; otherwise
    /// the graph flag splits the db model.
    #[must_use]
    pub fn from_flags(flags: ModelFlags) -> Self {
        if flags.is_markdown_model {
            ModelVariant::MarkdownModel
        } else if flags.is_db_graph {
            ModelVariant::DbModelDbGraph
        } else {
            ModelVariant::DbModelFileGraph
        }
    }
}

/// Queries the host once and derives the active [`ModelVariant`].
///
/// # Errors
///
/// A failed environment query propagates unchanged; detection failure is
/// fatal to activation and is handled only by the entry point's catch.
pub async fn detect(host: &dyn HostApi) -> Result<ModelVariant> {
    let flags = host.model_info().await?;
    Ok(ModelVariant::from_flags(flags))
}
