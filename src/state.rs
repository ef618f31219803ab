use crate::{
    config::RuntimeConfiguration,
    data::postgres::PostgresStudentStore,
    error::{OpenDatabaseSnafu, RosterResult},
    service::StudentService,
};
use snafu::ResultExt;
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};
use std::{ops::Deref, sync::Arc};

#[derive(Clone)]
pub struct RosterState {
    pool: Option<Pool<Postgres>>,
    service: StudentService,
}

impl RosterState {
    pub async fn new(options: PgPoolOptions, config: &RuntimeConfiguration) -> RosterResult<Self> {
        let pool = options
            .max_connections(config.server_config().max_connections)
            .connect(&config.db_config().get_db_path())
            .await
            .context(OpenDatabaseSnafu)?;

        let store = PostgresStudentStore::new(pool.clone());
        store.ensure_table().await?;

        Ok(Self {
            pool: Some(pool),
            service: StudentService::new(Arc::new(store)),
        })
    }

    /// State over any store, with no pool to close at shutdown.
    #[cfg(test)]
    pub fn with_store(store: Arc<dyn crate::data::StudentStore>) -> Self {
        Self {
            pool: None,
            service: StudentService::new(store),
        }
    }

    pub async fn sensible_shutdown(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

impl Deref for RosterState {
    type Target = StudentService;

    fn deref(&self) -> &Self::Target {
        &self.service
    }
}
