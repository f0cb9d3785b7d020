use std::collections::VecDeque;

use super::identity::UserIdentity;
use super::model::Channel;
use super::model::ChannelId;
use super::model::Thread;
use super::model::ThreadDetail;
use super::model::ThreadId;
use super::repo::ThreadRepository;
use super::search::filter_recent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTab {
    Home,
    Profile,
}

impl AppTab {
    pub fn next(self) -> Self {
        match self {
            Self::Home => Self::Profile,
            Self::Profile => Self::Home,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Profile => "Profile",
        }
    }
}

// Picker and detail are both full-screen presentations; a single slot
// keeps them mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOverlay {
    None,
    ChannelPicker,
    ThreadDetail { thread: ThreadId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionErrorKind {
    NotFound,
    InvalidTransition,
}

impl SessionErrorKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::NotFound => "not-found",
            Self::InvalidTransition => "invalid-transition",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

impl NoticeLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionNotice {
    pub seq: u64,
    pub level: NoticeLevel,
    pub error: Option<SessionErrorKind>,
    pub thread: Option<ThreadId>,
    pub message: String,
}

impl SessionNotice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            seq: 0,
            level: NoticeLevel::Info,
            error: None,
            thread: None,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            seq: 0,
            level: NoticeLevel::Warning,
            error: None,
            thread: None,
            message: message.into(),
        }
    }

    pub fn thread_error(
        error: SessionErrorKind,
        thread: ThreadId,
        message: impl Into<String>,
    ) -> Self {
        Self {
            seq: 0,
            level: NoticeLevel::Warning,
            error: Some(error),
            thread: Some(thread),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NoticeLog {
    cap: usize,
    next_seq: u64,
    buf: VecDeque<SessionNotice>,
}

impl NoticeLog {
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            next_seq: 1,
            buf: VecDeque::with_capacity(cap),
        }
    }

    pub fn append(&mut self, mut notice: SessionNotice) {
        notice.seq = self.next_seq;
        self.next_seq += 1;

        if self.buf.len() == self.cap {
            self.buf.pop_front();
        }
        self.buf.push_back(notice);
    }

    pub fn clear(&mut self) {
        self.buf.clear();
        self.next_seq = 1;
    }

    pub fn iter(&self) -> impl Iterator<Item = &SessionNotice> {
        self.buf.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct SessionRouting {
    pub tab: AppTab,
}

#[derive(Debug, Clone)]
pub struct BrowseState {
    pub active_channel: ChannelId,
    pub search: String,
}

#[derive(Debug, Clone)]
pub struct SessionInteraction {
    pub overlay: SessionOverlay,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub routing: SessionRouting,
    pub browse: BrowseState,
    pub interaction: SessionInteraction,
    pub notices: NoticeLog,
    pub identity: Option<UserIdentity>,
    pub data: ThreadRepository,
}

impl SessionState {
    pub fn new(data: ThreadRepository) -> Self {
        let active_channel = data
            .first_channel()
            .map(|channel| channel.id.clone())
            .unwrap_or(ChannelId(String::new()));
        Self {
            routing: SessionRouting { tab: AppTab::Home },
            browse: BrowseState {
                active_channel,
                search: String::new(),
            },
            interaction: SessionInteraction {
                overlay: SessionOverlay::None,
            },
            notices: NoticeLog::new(100),
            identity: None,
            data,
        }
    }

    pub fn is_detail_visible(&self) -> bool {
        matches!(
            self.interaction.overlay,
            SessionOverlay::ThreadDetail { .. }
        )
    }

    pub fn is_picker_visible(&self) -> bool {
        self.interaction.overlay == SessionOverlay::ChannelPicker
    }

    pub fn selected_thread_id(&self) -> Option<&ThreadId> {
        match &self.interaction.overlay {
            SessionOverlay::ThreadDetail { thread } => Some(thread),
            _ => None,
        }
    }

    pub fn open_detail(&self) -> Option<&ThreadDetail> {
        self.selected_thread_id()
            .and_then(|thread| self.data.detail_for(thread))
    }

    pub fn active_channel(&self) -> Option<&Channel> {
        self.data.channel(&self.browse.active_channel)
    }

    // Pinned threads bypass search; only the recent list is filtered.
    pub fn visible_threads(&self) -> VisibleThreads<'_> {
        let bucket = self.data.bucket_for(&self.browse.active_channel);
        VisibleThreads {
            pinned: &bucket.pinned,
            recent: filter_recent(&bucket.recent, &self.browse.search),
        }
    }
}

#[derive(Debug, Clone)]
pub struct VisibleThreads<'a> {
    pub pinned: &'a [Thread],
    pub recent: Vec<&'a Thread>,
}
