use super::StatusStore;
use crate::error::StoreError;
use crate::models::status::StatusCheck;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Keeps records in insertion order.
#[derive(Default)]
pub struct MemoryStatusStore {
    records: RwLock<Vec<StatusCheck>>,
}

#[async_trait]
impl StatusStore for MemoryStatusStore {
    async fn insert(&self, check: &StatusCheck) -> Result<(), StoreError> {
        self.records.write().await.push(check.clone());
        Ok(())
    }

    async fn list(&self, limit: usize) -> Result<Vec<StatusCheck>, StoreError> {
        Ok(self.records.read().await.iter().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_then_list() {
        let store = MemoryStatusStore::default();
        let check = StatusCheck::new("calculator");

        store.insert(&check).await.unwrap();

        assert_eq!(store.list(10).await.unwrap(), vec![check]);
    }

    #[tokio::test]
    async fn test_list_respects_limit() {
        let store = MemoryStatusStore::default();
        for i in 0..5 {
            store.insert(&StatusCheck::new(format!("client-{i}"))).await.unwrap();
        }

        assert_eq!(store.list(3).await.unwrap().len(), 3);
        assert_eq!(store.list(0).await.unwrap().len(), 0);
    }
}
