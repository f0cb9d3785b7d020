#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    PinThread { thread: ThreadId },
    MarkThreadSolved { thread: ThreadId },
    RecordVoiceNote { thread: ThreadId },
    GenerateTranscript { thread: ThreadId },
    SignOutRequested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    EmitHostEvent(HostEvent),
    SurfaceNotice(SessionNotice),
    RequestFrame,
}

use super::actions::RuntimeAction;
use super::actions::SessionAction;
use super::actions::UserAction;
use super::model::ThreadId;
use super::state::SessionErrorKind;
use super::state::SessionNotice;
use super::state::SessionOverlay;
use super::state::SessionState;

pub fn reduce(state: &mut SessionState, action: SessionAction) -> Vec<SessionEffect> {
    match action {
        SessionAction::User(user) => reduce_user(state, user),
        SessionAction::Runtime(runtime) => {
            reduce_runtime(state, runtime);
            Vec::new()
        }
    }
}

fn reduce_user(state: &mut SessionState, action: UserAction) -> Vec<SessionEffect> {
    match action {
        UserAction::SelectChannel(channel) => {
            // Unknown ids are accepted; reads degrade to the empty bucket.
            state.browse.active_channel = channel;
            state.browse.search.clear();
            if state.is_picker_visible() {
                state.interaction.overlay = SessionOverlay::None;
            }
            vec![SessionEffect::RequestFrame]
        }
        UserAction::OpenChannelPicker => {
            state.interaction.overlay = SessionOverlay::ChannelPicker;
            vec![SessionEffect::RequestFrame]
        }
        UserAction::CloseChannelPicker => {
            if state.is_picker_visible() {
                state.interaction.overlay = SessionOverlay::None;
                return vec![SessionEffect::RequestFrame];
            }
            Vec::new()
        }
        UserAction::OpenThread(thread) => {
            if state.data.detail_for(&thread).is_none() {
                let notice = SessionNotice::thread_error(
                    SessionErrorKind::InvalidTransition,
                    thread.clone(),
                    format!("thread {thread} has no detail to open"),
                );
                return vec![
                    SessionEffect::SurfaceNotice(notice),
                    SessionEffect::RequestFrame,
                ];
            }
            state.interaction.overlay = SessionOverlay::ThreadDetail { thread };
            vec![SessionEffect::RequestFrame]
        }
        UserAction::CloseThreadDetail => {
            if state.is_detail_visible() {
                state.interaction.overlay = SessionOverlay::None;
                return vec![SessionEffect::RequestFrame];
            }
            Vec::new()
        }
        UserAction::SelectTab(tab) => {
            let switched = state.routing.tab != tab;
            state.routing.tab = tab;
            // The detail is scoped to the Home stack; the picker and the
            // search text survive tab switches.
            if switched && state.is_detail_visible() {
                state.interaction.overlay = SessionOverlay::None;
            }
            vec![SessionEffect::RequestFrame]
        }
        UserAction::SetSearchQuery(text) => {
            state.browse.search = text;
            vec![SessionEffect::RequestFrame]
        }
        UserAction::PinThread(thread) => intent_effects(HostEvent::PinThread { thread }),
        UserAction::MarkThreadSolved(thread) => {
            intent_effects(HostEvent::MarkThreadSolved { thread })
        }
        UserAction::RecordVoiceNote(thread) => {
            intent_effects(HostEvent::RecordVoiceNote { thread })
        }
        UserAction::GenerateTranscript(thread) => {
            intent_effects(HostEvent::GenerateTranscript { thread })
        }
        UserAction::SignOut => intent_effects(HostEvent::SignOutRequested),
        UserAction::DismissNotices => {
            state.notices.clear();
            vec![SessionEffect::RequestFrame]
        }
    }
}

// Intents carry no local mutation: the backend owns their semantics, and
// each tap emits exactly one event.
fn intent_effects(event: HostEvent) -> Vec<SessionEffect> {
    vec![
        SessionEffect::EmitHostEvent(event),
        SessionEffect::RequestFrame,
    ]
}

fn reduce_runtime(state: &mut SessionState, action: RuntimeAction) {
    match action {
        RuntimeAction::SetCurrentUser(identity) => {
            state.identity = identity;
        }
        RuntimeAction::ReplaceDataset(data) => {
            state.data = data;
            reconcile_active_channel(state);
            reconcile_open_detail(state);
        }
        RuntimeAction::AppendNotice(notice) => {
            state.notices.append(notice);
        }
        RuntimeAction::ClearNotices => {
            state.notices.clear();
        }
    }
}

fn reconcile_active_channel(state: &mut SessionState) {
    if state.data.channel_exists(&state.browse.active_channel) {
        return;
    }
    let Some(fallback) = state
        .data
        .first_channel()
        .map(|channel| channel.id.clone())
    else {
        return;
    };
    let dropped = std::mem::replace(&mut state.browse.active_channel, fallback);
    state.browse.search.clear();
    state.notices.append(SessionNotice::warning(format!(
        "channel {dropped} is gone; switched to {}",
        state.browse.active_channel
    )));
}

fn reconcile_open_detail(state: &mut SessionState) {
    let SessionOverlay::ThreadDetail { thread } = &state.interaction.overlay else {
        return;
    };
    if state.data.detail_for(thread).is_some() {
        return;
    }
    let thread = thread.clone();
    state.interaction.overlay = SessionOverlay::None;
    state.notices.append(SessionNotice::thread_error(
        SessionErrorKind::NotFound,
        thread.clone(),
        format!("thread {thread} is no longer available"),
    ));
}

#[cfg(test)]
mod tests;
