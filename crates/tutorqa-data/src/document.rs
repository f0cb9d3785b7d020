use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use tutorqa_core::Channel;
use tutorqa_core::ChannelId;
use tutorqa_core::ThreadBucket;
use tutorqa_core::ThreadDetail;
use tutorqa_core::ThreadId;
use tutorqa_core::ThreadRepository;

/// On-disk form of a dataset: the channel list plus the two lookup maps
/// the repository is built from. Field names follow the wire shape of the
/// model types, so a document is exactly what a remote provider would
/// return in one response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetDocument {
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub threads: HashMap<ChannelId, ThreadBucket>,
    #[serde(default)]
    pub details: HashMap<ThreadId, ThreadDetail>,
}

impl DatasetDocument {
    pub fn into_repository(self) -> ThreadRepository {
        ThreadRepository::new(self.channels, self.threads, self.details)
    }
}

pub fn parse_dataset(text: &str) -> std::io::Result<DatasetDocument> {
    serde_json::from_str::<DatasetDocument>(text)
        .map_err(|err| std::io::Error::other(format!("parse dataset: {err}")))
}

pub fn load_dataset(path: impl AsRef<Path>) -> std::io::Result<DatasetDocument> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str::<DatasetDocument>(&text)
        .map_err(|err| std::io::Error::other(format!("parse {}: {err}", path.display())))
}
