//! Durable client cache — carries a Record (and the profile photo) from
//! the form flow to the preview flow without a server round trip.
//!
//! Pluggable, trait-based: the components hold an `Arc<dyn ClientCache>`
//! and never care whether it is backed by files or memory.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::EditorError;
use crate::models::record::Record;

pub mod file;

pub use file::FileCache;

#[async_trait]
pub trait ClientCache: Send + Sync {
    /// Stores the résumé under the `cv_data` key, replacing any previous
    /// value.
    async fn put_record(&self, record: &Record) -> Result<(), EditorError>;

    /// Absent is `Ok(None)`, never an error.
    async fn get_record(&self) -> Result<Option<Record>, EditorError>;

    /// Stores the photo data URI under the `photo_base64` key.
    async fn put_photo(&self, data_uri: &str) -> Result<(), EditorError>;

    async fn get_photo(&self) -> Result<Option<String>, EditorError>;
}

/// In-process cache for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryCache {
    record: Mutex<Option<Record>>,
    photo: Mutex<Option<String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientCache for MemoryCache {
    async fn put_record(&self, record: &Record) -> Result<(), EditorError> {
        *self.record.lock().expect("cache mutex poisoned") = Some(record.clone());
        Ok(())
    }

    async fn get_record(&self) -> Result<Option<Record>, EditorError> {
        Ok(self.record.lock().expect("cache mutex poisoned").clone())
    }

    async fn put_photo(&self, data_uri: &str) -> Result<(), EditorError> {
        *self.photo.lock().expect("cache mutex poisoned") = Some(data_uri.to_string());
        Ok(())
    }

    async fn get_photo(&self) -> Result<Option<String>, EditorError> {
        Ok(self.photo.lock().expect("cache mutex poisoned").clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_cache_round_trips_a_record() {
        let cache = MemoryCache::new();
        assert!(cache.get_record().await.unwrap().is_none());

        let mut record = Record::default();
        record
            .personal_info
            .as_fields_mut()
            .unwrap()
            .insert("first_name".to_string(), "Ana".to_string());
        cache.put_record(&record).await.unwrap();

        assert_eq!(cache.get_record().await.unwrap(), Some(record));
    }

    #[tokio::test]
    async fn test_memory_cache_round_trips_a_photo() {
        let cache = MemoryCache::new();
        assert!(cache.get_photo().await.unwrap().is_none());
        cache.put_photo("data:image/png;base64,AA==").await.unwrap();
        assert_eq!(
            cache.get_photo().await.unwrap().as_deref(),
            Some("data:image/png;base64,AA==")
        );
    }
}
