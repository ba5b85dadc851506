//! File management methods for [`PreevalClient`].

use serde_json::Value;

use crate::client::PreevalClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{FileContent, FileCreateRequest, FileListing, FileWriteRequest};

impl PreevalClient {
    pub async fn list_files(&self) -> Result<FileListing> {
        endpoints::list_files(&self.http, &self.advanced_url, self.metrics.as_ref()).await
    }

    pub async fn read_file(&self, file_name: &str) -> Result<FileContent> {
        endpoints::read_file(
            &self.http,
            &self.advanced_url,
            file_name,
            self.metrics.as_ref(),
        )
        .await
    }

    pub async fn write_file(&self, request: &FileWriteRequest) -> Result<Value> {
        endpoints::write_file(&self.http, &self.advanced_url, request, self.metrics.as_ref()).await
    }

    pub async fn create_file(&self, request: &FileCreateRequest) -> Result<Value> {
        endpoints::create_file(&self.http, &self.advanced_url, request, self.metrics.as_ref()).await
    }

    pub async fn file_stats(&self) -> Result<Value> {
        endpoints::file_stats(&self.http, &self.advanced_url, self.metrics.as_ref()).await
    }
}
