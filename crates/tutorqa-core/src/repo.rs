use std::collections::HashMap;
use std::collections::HashSet;

use super::model::Channel;
use super::model::ChannelId;
use super::model::ThreadBucket;
use super::model::ThreadDetail;
use super::model::ThreadId;

static EMPTY_BUCKET: ThreadBucket = ThreadBucket {
    pinned: Vec::new(),
    recent: Vec::new(),
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    EmptyChannelSet,
    DuplicateChannelId { channel: ChannelId },
    DuplicateThreadId { thread: ThreadId },
    BucketForUnknownChannel { channel: ChannelId },
    MissingDetail { channel: ChannelId, thread: ThreadId },
}

impl IntegrityIssue {
    pub fn message(&self) -> String {
        match self {
            Self::EmptyChannelSet => "dataset has no channels".to_string(),
            Self::DuplicateChannelId { channel } => {
                format!("duplicate channel id {channel}")
            }
            Self::DuplicateThreadId { thread } => {
                format!("thread {thread} listed more than once")
            }
            Self::BucketForUnknownChannel { channel } => {
                format!("bucket keyed by unknown channel {channel}")
            }
            Self::MissingDetail { channel, thread } => {
                format!("thread {thread} in channel {channel} has no detail")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThreadRepository {
    channels: Vec<Channel>,
    buckets: HashMap<ChannelId, ThreadBucket>,
    details: HashMap<ThreadId, ThreadDetail>,
}

impl ThreadRepository {
    pub fn new(
        channels: Vec<Channel>,
        buckets: HashMap<ChannelId, ThreadBucket>,
        details: HashMap<ThreadId, ThreadDetail>,
    ) -> Self {
        Self {
            channels,
            buckets,
            details,
        }
    }

    pub fn list_channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn channel(&self, channel: &ChannelId) -> Option<&Channel> {
        self.channels.iter().find(|candidate| candidate.id == *channel)
    }

    pub fn channel_exists(&self, channel: &ChannelId) -> bool {
        self.channel(channel).is_some()
    }

    pub fn first_channel(&self) -> Option<&Channel> {
        self.channels.first()
    }

    // Total: unknown channel ids read as an empty bucket, never an error.
    pub fn bucket_for(&self, channel: &ChannelId) -> &ThreadBucket {
        self.buckets.get(channel).unwrap_or(&EMPTY_BUCKET)
    }

    // None is the explicit not-found result; ids may be stale (deep links,
    // replaced datasets) while summaries still render.
    pub fn detail_for(&self, thread: &ThreadId) -> Option<&ThreadDetail> {
        self.details.get(thread)
    }

    pub fn audit(&self) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();
        if self.channels.is_empty() {
            issues.push(IntegrityIssue::EmptyChannelSet);
        }

        let mut seen_channels = HashSet::new();
        for channel in &self.channels {
            if !seen_channels.insert(&channel.id) {
                issues.push(IntegrityIssue::DuplicateChannelId {
                    channel: channel.id.clone(),
                });
            }
        }

        let mut seen_threads = HashSet::new();
        for channel in &self.channels {
            let Some(bucket) = self.buckets.get(&channel.id) else {
                continue;
            };
            audit_bucket(
                &channel.id,
                bucket,
                &self.details,
                &mut seen_threads,
                &mut issues,
            );
        }

        for (channel, bucket) in &self.buckets {
            if seen_channels.contains(channel) {
                continue;
            }
            issues.push(IntegrityIssue::BucketForUnknownChannel {
                channel: channel.clone(),
            });
            audit_bucket(channel, bucket, &self.details, &mut seen_threads, &mut issues);
        }

        issues
    }
}

fn audit_bucket(
    channel: &ChannelId,
    bucket: &ThreadBucket,
    details: &HashMap<ThreadId, ThreadDetail>,
    seen_threads: &mut HashSet<ThreadId>,
    issues: &mut Vec<IntegrityIssue>,
) {
    for thread in bucket.thread_ids() {
        if !seen_threads.insert(thread.clone()) {
            issues.push(IntegrityIssue::DuplicateThreadId {
                thread: thread.clone(),
            });
        }
        if !details.contains_key(thread) {
            issues.push(IntegrityIssue::MissingDetail {
                channel: channel.clone(),
                thread: thread.clone(),
            });
        }
    }
}
