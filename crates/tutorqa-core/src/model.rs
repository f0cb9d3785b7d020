use std::fmt;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(pub String);

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreadId(pub String);

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
    pub subject: String,
    pub students_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    pub id: ThreadId,
    pub title: String,
    pub tags: Vec<String>,
    pub author: String,
    pub created_at_ms: u64,
    pub preview: String,
    pub solved: bool,
    pub reactions: u32,
    #[serde(default)]
    pub pinned: bool,
}

impl Thread {
    pub fn age_label(&self, now_ms: u64) -> String {
        age_label(self.created_at_ms, now_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    Pdf,
}

impl AttachmentKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Pdf => "pdf",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerStep {
    pub title: String,
    pub text: String,
}

// Answer steps are numbered by position, 1-based, when presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadDetail {
    #[serde(flatten)]
    pub summary: Thread,
    pub body: String,
    pub attachments: Vec<Attachment>,
    pub steps: Vec<AnswerStep>,
    #[serde(rename = "final")]
    pub final_answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadBucket {
    pub pinned: Vec<Thread>,
    pub recent: Vec<Thread>,
}

impl ThreadBucket {
    pub fn is_empty(&self) -> bool {
        self.pinned.is_empty() && self.recent.is_empty()
    }

    pub fn thread_ids(&self) -> impl Iterator<Item = &ThreadId> {
        self.pinned
            .iter()
            .chain(self.recent.iter())
            .map(|thread| &thread.id)
    }
}

const MINUTE_MS: u64 = 60 * 1_000;
const HOUR_MS: u64 = 60 * MINUTE_MS;
const DAY_MS: u64 = 24 * HOUR_MS;

pub fn age_label(created_at_ms: u64, now_ms: u64) -> String {
    let elapsed = now_ms.saturating_sub(created_at_ms);
    if elapsed < MINUTE_MS {
        return "just now".to_string();
    }
    if elapsed < HOUR_MS {
        return format!("{}m ago", elapsed / MINUTE_MS);
    }
    if elapsed < DAY_MS {
        return format!("{}h ago", elapsed / HOUR_MS);
    }
    format!("{}d ago", elapsed / DAY_MS)
}
