use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{Settings, SettingsPatch};

/// One settings record per user id. Reads never fail: an unknown user gets
/// the default record, which is created lazily on first read. There is no
/// delete; concurrent updates are last-write-wins.
#[async_trait]
pub trait SettingsStore: Send + Sync + 'static {
    async fn get(&self, user_id: &str) -> Settings;

    async fn update(&self, user_id: &str, patch: SettingsPatch) -> Settings;
}

#[derive(Default)]
pub struct InMemorySettingsStore {
    records: RwLock<HashMap<String, Settings>>,
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn get(&self, user_id: &str) -> Settings {
        let mut records = self.records.write().await;
        records
            .entry(user_id.to_string())
            .or_insert_with(Settings::default)
            .clone()
    }

    async fn update(&self, user_id: &str, patch: SettingsPatch) -> Settings {
        let mut records = self.records.write().await;
        let record = records
            .entry(user_id.to_string())
            .or_insert_with(Settings::default);
        record.apply(patch);
        record.clone()
    }
}
