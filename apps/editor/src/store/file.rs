//! File-backed cache: one file per key under a configurable directory.
//! This is the durable counterpart of the browser's local storage.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::errors::EditorError;
use crate::models::record::Record;
use crate::store::ClientCache;

const RECORD_FILE: &str = "cv_data.json";
const PHOTO_FILE: &str = "photo_base64.txt";

pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    async fn write(&self, file_name: &str, contents: &[u8]) -> Result<(), EditorError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.dir.join(file_name), contents).await?;
        Ok(())
    }

    async fn read(&self, file_name: &str) -> Result<Option<String>, EditorError> {
        match tokio::fs::read_to_string(self.dir.join(file_name)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl ClientCache for FileCache {
    async fn put_record(&self, record: &Record) -> Result<(), EditorError> {
        let json = serde_json::to_vec(record)?;
        self.write(RECORD_FILE, &json).await
    }

    async fn get_record(&self) -> Result<Option<Record>, EditorError> {
        match self.read(RECORD_FILE).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn put_photo(&self, data_uri: &str) -> Result<(), EditorError> {
        self.write(PHOTO_FILE, data_uri.as_bytes()).await
    }

    async fn get_photo(&self) -> Result<Option<String>, EditorError> {
        self.read(PHOTO_FILE).await
    }
}
