use slug::slugify;
use tracing::warn;

use crate::{
    entities::project::{normalize_project_row, Project, ProjectRow},
    fallback::{find_fallback_project, FALLBACK_PROJECTS},
    repositories::projects::ProjectRepository,
};

/// Read-side accessor for the project directory. Prefers the remote
/// source and degrades to the embedded fallback list on any failure, so
/// neither operation ever returns an error.
pub struct ProjectDirectory<R>
where
    R: ProjectRepository,
{
    repo: Option<R>,
}

impl<R> ProjectDirectory<R>
where
    R: ProjectRepository,
{
    /// `repo` is `None` when the data source is not configured.
    pub fn new(repo: Option<R>) -> Self {
        ProjectDirectory { repo }
    }

    /// Lists all projects, newest year first when the remote source
    /// answers, authored order when the fallback list serves.
    pub async fn list(&self) -> Vec<Project> {
        let Some(repo) = &self.repo else {
            warn!("Data source not configured, serving the static project list");
            return FALLBACK_PROJECTS.clone();
        };

        match repo.fetch_all().await {
            Ok(rows) if rows.is_empty() => {
                warn!("Data source returned no projects, serving the static project list");
                FALLBACK_PROJECTS.clone()
            }
            Ok(rows) => rows.iter().map(normalize_project_row).collect(),
            Err(e) => {
                warn!("Project listing failed ({}), serving the static project list", e);
                FALLBACK_PROJECTS.clone()
            }
        }
    }

    /// Looks a project up by slug. Tolerates slug drift between data
    /// entry and routing: when the exact remote match reports no rows,
    /// a secondary scan accepts the first row whose slug matches
    /// case-insensitively or after slug normalization.
    pub async fn get_by_slug(&self, slug: &str) -> Option<Project> {
        if slug.trim().is_empty() {
            warn!("Empty project slug requested");
            return None;
        }

        let Some(repo) = &self.repo else {
            warn!("Data source not configured, looking up '{}' in the static project list", slug);
            return find_fallback_project(slug);
        };

        match repo.fetch_by_slug(slug).await {
            Ok(Some(row)) => Some(normalize_project_row(&row)),
            Ok(None) => match self.scan_for_drifted_slug(repo, slug).await {
                Some(row) => Some(normalize_project_row(&row)),
                None => find_fallback_project(slug),
            },
            Err(e) => {
                warn!("Project lookup for '{}' failed ({}), trying the static project list", slug, e);
                find_fallback_project(slug)
            }
        }
    }

    async fn scan_for_drifted_slug(&self, repo: &R, slug: &str) -> Option<ProjectRow> {
        let rows = match repo.fetch_all().await {
            Ok(rows) => rows,
            Err(e) => {
                warn!("Secondary slug scan for '{}' failed: {}", slug, e);
                return None;
            }
        };

        rows.into_iter().find(|row| {
            row.slug
                .as_deref()
                .is_some_and(|stored| slugs_match(stored, slug))
        })
    }
}

/// Alternate-match rule: case difference or `-`/`_` drift, nothing
/// wider. Two distinct slugs colliding under this rule resolve to
/// whichever row the source returns first.
fn slugs_match(stored: &str, requested: &str) -> bool {
    stored.eq_ignore_ascii_case(requested) || slugify(stored) == slugify(requested)
}
