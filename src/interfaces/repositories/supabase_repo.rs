use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};

use crate::{
    entities::{contact::ContactRecord, project::ProjectRow},
    errors::AppError,
    repositories::{contact::ContactRepository, projects::ProjectRepository},
};

const PROJECTS_TABLE: &str = "projects";
const CONTACTS_TABLE: &str = "contacts";

/// PostgREST client for the managed data source. One instance serves
/// both the `projects` reads and the `contacts` mirror writes.
#[derive(Clone)]
pub struct SupabaseRepo {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SupabaseRepo {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        SupabaseRepo {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

#[async_trait]
impl ProjectRepository for SupabaseRepo {
    async fn fetch_all(&self) -> Result<Vec<ProjectRow>, AppError> {
        let response = self
            .authorized(self.client.get(self.table_url(PROJECTS_TABLE)))
            .query(&[("select", "*"), ("order", "year.desc")])
            .send()
            .await?;

        let response = response.error_for_status()?;
        let rows = response.json::<Vec<ProjectRow>>().await?;
        Ok(rows)
    }

    async fn fetch_by_slug(&self, slug: &str) -> Result<Option<ProjectRow>, AppError> {
        // Single-object read: PostgREST answers 406 when the filter does
        // not match exactly one row, which is the no-rows signal here.
        let url = format!(
            "{}?select=*&slug=eq.{}",
            self.table_url(PROJECTS_TABLE),
            urlencoding::encode(slug)
        );

        let response = self
            .authorized(self.client.get(url))
            .header("Accept", "application/vnd.pgrst.object+json")
            .send()
            .await?;

        if response.status() == StatusCode::NOT_ACCEPTABLE {
            return Ok(None);
        }

        let response = response.error_for_status()?;
        let row = response.json::<ProjectRow>().await?;
        Ok(Some(row))
    }
}

#[async_trait]
impl ContactRepository for SupabaseRepo {
    async fn insert_contact(&self, record: &ContactRecord) -> Result<(), AppError> {
        let response = self
            .authorized(self.client.post(self.table_url(CONTACTS_TABLE)))
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await?;

        response.error_for_status()?;
        Ok(())
    }
}
