use crate::core::reducer::FormEvent;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&full_path, data).await?;
        Ok(full_path.display().to_string())
    }
}

/// Reads a JSON array of form events.
pub async fn read_events_file<P: AsRef<Path>>(path: P) -> Result<Vec<FormEvent>> {
    let content = tokio::fs::read_to_string(path).await?;
    let events = serde_json::from_str(&content)?;
    Ok(events)
}
