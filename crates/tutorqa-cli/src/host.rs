use tutorqa_core::identity::UserIdentity;
use tutorqa_core::reducer::HostEvent;
use tutorqa_core::state::SessionNotice;

/// Receives the intent events the reducer emits. The bundled implementation
/// only acknowledges them; a real host would call its backend here.
pub trait IntentBackend {
    fn acknowledge(&self, event: &HostEvent) -> SessionNotice;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedBackend;

impl IntentBackend for SimulatedBackend {
    fn acknowledge(&self, event: &HostEvent) -> SessionNotice {
        match event {
            HostEvent::PinThread { thread } => {
                SessionNotice::info(format!("backend: pinned thread {thread}"))
            }
            HostEvent::MarkThreadSolved { thread } => {
                SessionNotice::info(format!("backend: marked thread {thread} solved"))
            }
            HostEvent::RecordVoiceNote { thread } => {
                SessionNotice::info(format!("backend: recording voice note for {thread}"))
            }
            HostEvent::GenerateTranscript { thread } => {
                SessionNotice::info(format!("backend: transcript queued for {thread}"))
            }
            HostEvent::SignOutRequested => SessionNotice::info("backend: session closed"),
        }
    }
}

/// Stand-in for the session provider: holds the signed-in user and hands
/// out identity snapshots for `SetCurrentUser` actions.
#[derive(Debug, Default, Clone)]
pub struct StubSession {
    current_user: Option<UserIdentity>,
}

impl StubSession {
    pub fn login(&mut self, id: impl Into<String>, display_name: impl Into<String>) -> UserIdentity {
        let user = UserIdentity {
            id: id.into(),
            display_name: display_name.into(),
        };
        self.current_user = Some(user.clone());
        user
    }

    pub fn logout(&mut self) {
        self.current_user = None;
    }

    pub fn current_user(&self) -> Option<&UserIdentity> {
        self.current_user.as_ref()
    }
}
