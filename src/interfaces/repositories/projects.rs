use async_trait::async_trait;

use crate::{entities::project::ProjectRow, errors::AppError};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// All stored rows, ordered by year descending.
    async fn fetch_all(&self) -> Result<Vec<ProjectRow>, AppError>;

    /// Exact slug match. `Ok(None)` is the source's no-rows condition,
    /// distinct from transport or query failures.
    async fn fetch_by_slug(&self, slug: &str) -> Result<Option<ProjectRow>, AppError>;
}
