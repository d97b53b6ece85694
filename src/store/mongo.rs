use super::StatusStore;
use crate::config::Config;
use crate::error::StoreError;
use crate::models::status::StatusCheck;
use async_trait::async_trait;
use chrono::DateTime;
use futures::TryStreamExt;
use mongodb::bson::{self, doc};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Stored shape of a [`StatusCheck`]. The timestamp is kept as a native BSON
/// date so the collection stays queryable by time; the store-assigned `_id`
/// is ignored on read.
#[derive(Debug, Serialize, Deserialize)]
struct StatusCheckDocument {
    id: String,
    client_name: String,
    timestamp: bson::DateTime,
}

impl From<&StatusCheck> for StatusCheckDocument {
    fn from(check: &StatusCheck) -> Self {
        Self {
            id: check.id.clone(),
            client_name: check.client_name.clone(),
            timestamp: bson::DateTime::from_millis(check.timestamp.timestamp_millis()),
        }
    }
}

impl StatusCheckDocument {
    fn into_status_check(self) -> Result<StatusCheck, StoreError> {
        let millis = self.timestamp.timestamp_millis();
        let timestamp = DateTime::from_timestamp_millis(millis).ok_or(StoreError::InvalidTimestamp {
            id: self.id.clone(),
            millis,
        })?;
        Ok(StatusCheck {
            id: self.id,
            client_name: self.client_name,
            timestamp,
        })
    }
}

/// # MongoDB Status Store
///
/// Holds the process-wide client. Cloning shares the underlying connection
/// pool.
#[derive(Clone)]
pub struct MongoStatusStore {
    client: Client,
    collection: Collection<StatusCheckDocument>,
}

impl MongoStatusStore {
    /// Connects and pings the server, so an unreachable store fails startup
    /// instead of the first request.
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&config.mongo_url).await?;
        let database = client.database(&config.db_name);
        database.run_command(doc! { "ping": 1 }).await?;

        info!(
            database = %config.db_name,
            collection = %config.collection,
            "connected to MongoDB"
        );

        let collection = database.collection(&config.collection);
        Ok(Self { client, collection })
    }

    /// Closes the connection pool once in-flight operations finish.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("MongoDB client closed");
    }
}

#[async_trait]
impl StatusStore for MongoStatusStore {
    async fn insert(&self, check: &StatusCheck) -> Result<(), StoreError> {
        self.collection
            .insert_one(StatusCheckDocument::from(check))
            .await?;
        Ok(())
    }

    async fn list(&self, limit: usize) -> Result<Vec<StatusCheck>, StoreError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let documents: Vec<StatusCheckDocument> = self
            .collection
            .find(doc! {})
            .limit(limit)
            .await?
            .try_collect()
            .await?;

        documents
            .into_iter()
            .map(StatusCheckDocument::into_status_check)
            .collect()
    }
}
