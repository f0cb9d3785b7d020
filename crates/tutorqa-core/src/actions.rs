use super::identity::UserIdentity;
use super::model::ChannelId;
use super::model::ThreadId;
use super::repo::ThreadRepository;
use super::state::AppTab;
use super::state::SessionNotice;

#[derive(Debug, Clone)]
pub enum SessionAction {
    User(UserAction),
    Runtime(RuntimeAction),
}

#[derive(Debug, Clone)]
pub enum UserAction {
    SelectChannel(ChannelId),
    OpenChannelPicker,
    CloseChannelPicker,
    OpenThread(ThreadId),
    CloseThreadDetail,
    SelectTab(AppTab),
    SetSearchQuery(String),
    PinThread(ThreadId),
    MarkThreadSolved(ThreadId),
    RecordVoiceNote(ThreadId),
    GenerateTranscript(ThreadId),
    SignOut,
    DismissNotices,
}

#[derive(Debug, Clone)]
pub enum RuntimeAction {
    SetCurrentUser(Option<UserIdentity>),
    ReplaceDataset(ThreadRepository),
    AppendNotice(SessionNotice),
    ClearNotices,
}
