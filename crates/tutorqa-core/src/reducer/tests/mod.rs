use std::collections::HashMap;

pub(super) use super::reduce;
pub(super) use super::HostEvent;
pub(super) use super::SessionEffect;
pub(super) use crate::actions::RuntimeAction;
pub(super) use crate::actions::SessionAction;
pub(super) use crate::actions::UserAction;
pub(super) use crate::identity::UserIdentity;
pub(super) use crate::model::Channel;
pub(super) use crate::model::ChannelId;
pub(super) use crate::model::Thread;
pub(super) use crate::model::ThreadBucket;
pub(super) use crate::model::ThreadDetail;
pub(super) use crate::model::ThreadId;
pub(super) use crate::repo::ThreadRepository;
pub(super) use crate::state::AppTab;
pub(super) use crate::state::NoticeLevel;
pub(super) use crate::state::NoticeLog;
pub(super) use crate::state::SessionErrorKind;
pub(super) use crate::state::SessionNotice;
pub(super) use crate::state::SessionOverlay;
pub(super) use crate::state::SessionState;

mod overlay_exclusion;
mod tab_routing;

fn cid(id: &str) -> ChannelId {
    ChannelId(id.to_string())
}

fn tid(id: &str) -> ThreadId {
    ThreadId(id.to_string())
}

fn channel(id: &str, name: &str, subject: &str) -> Channel {
    Channel {
        id: cid(id),
        name: name.to_string(),
        subject: subject.to_string(),
        students_count: 40,
    }
}

fn thread(id: &str, title: &str, tags: &[&str]) -> Thread {
    Thread {
        id: tid(id),
        title: title.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        author: "Maya R.".to_string(),
        created_at_ms: 0,
        preview: "preview".to_string(),
        solved: false,
        reactions: 2,
        pinned: false,
    }
}

fn detail_of(summary: Thread) -> ThreadDetail {
    ThreadDetail {
        body: format!("{} body", summary.title),
        attachments: Vec::new(),
        steps: Vec::new(),
        final_answer: "final answer".to_string(),
        summary,
    }
}

fn dataset() -> ThreadRepository {
    let mut pinned = thread("p1", "Week 3 problem set walkthrough", &["calc", "homework"]);
    pinned.pinned = true;
    let recent_c1 = vec![
        thread("r1", "Derivatives", &["calc"]),
        thread("r2", "Limits intro", &["calc", "intro"]),
    ];
    let recent_c2 = vec![thread("m1", "Friction on inclined planes", &["forces"])];

    let mut buckets = HashMap::new();
    buckets.insert(
        cid("c1"),
        ThreadBucket {
            pinned: vec![pinned.clone()],
            recent: recent_c1.clone(),
        },
    );
    buckets.insert(
        cid("c2"),
        ThreadBucket {
            pinned: Vec::new(),
            recent: recent_c2.clone(),
        },
    );

    let mut details = HashMap::new();
    for summary in std::iter::once(pinned)
        .chain(recent_c1)
        .chain(recent_c2)
    {
        details.insert(summary.id.clone(), detail_of(summary));
    }

    ThreadRepository::new(
        vec![
            channel("c1", "Calculus I", "Mathematics"),
            channel("c2", "Physics Mechanics", "Physics"),
        ],
        buckets,
        details,
    )
}

fn state() -> SessionState {
    SessionState::new(dataset())
}

fn run_runtime(state: &mut SessionState, action: RuntimeAction) {
    let effects = reduce(state, SessionAction::Runtime(action));
    assert!(effects.is_empty());
}
