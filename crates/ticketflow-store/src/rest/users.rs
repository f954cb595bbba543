//! REST implementation of UserDirectory

use async_trait::async_trait;
use tracing::instrument;

use ticketflow_core::{RepoResult, UserAccount, UserDirectory};

use crate::models::UserModel;

use super::{ensure_success, transport, RestClient};

/// Read-only roster backed by the external REST resource
#[derive(Debug, Clone)]
pub struct RestUserDirectory {
    client: RestClient,
}

impl RestUserDirectory {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserDirectory for RestUserDirectory {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<UserAccount>> {
        let response = self
            .client
            .http()
            .get(self.client.url("/users"))
            .send()
            .await
            .map_err(transport)?;

        let models: Vec<UserModel> = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(transport)?;

        Ok(models.into_iter().map(UserAccount::from).collect())
    }
}
