use async_trait::async_trait;

use crate::{entities::contact::ContactRecord, errors::AppError};

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert_contact(&self, record: &ContactRecord) -> Result<(), AppError>;
}
