use tutorqa_core::identity::derive_profile;
use tutorqa_core::model::Thread;
use tutorqa_core::state::AppTab;
use tutorqa_core::state::SessionState;

/// One full frame: the active overlay wins, then the current tab. Notices
/// ride along at the bottom whenever the log is non-empty.
pub fn render_frame(state: &SessionState, now_ms: u64) -> String {
    let mut out = String::new();
    if state.is_picker_visible() {
        out.push_str(&render_channel_picker(state));
    } else if state.is_detail_visible() {
        out.push_str(&render_thread_detail(state, now_ms));
    } else {
        match state.routing.tab {
            AppTab::Home => out.push_str(&render_home(state, now_ms)),
            AppTab::Profile => out.push_str(&render_profile(state)),
        }
    }
    if !state.notices.is_empty() {
        out.push_str(&render_notices(state));
    }
    out
}

pub fn render_home(state: &SessionState, now_ms: u64) -> String {
    let mut out = String::new();
    match state.active_channel() {
        Some(channel) => out.push_str(&format!(
            "[{}] {} ({} students)\n",
            channel.name, channel.subject, channel.students_count
        )),
        None => out.push_str("[no channel]\n"),
    }
    if !state.browse.search.is_empty() {
        out.push_str(&format!("search: \"{}\"\n", state.browse.search));
    }

    let visible = state.visible_threads();
    if !visible.pinned.is_empty() {
        out.push_str("pinned:\n");
        for thread in visible.pinned {
            out.push_str(&render_thread_line(thread, now_ms));
        }
    }
    out.push_str("recent:\n");
    if visible.recent.is_empty() {
        out.push_str("  (no threads)\n");
    }
    for thread in visible.recent {
        out.push_str(&render_thread_line(thread, now_ms));
    }
    out
}

pub fn render_channel_picker(state: &SessionState) -> String {
    let mut out = String::from("channels:\n");
    for channel in state.data.list_channels() {
        let marker = if channel.id == state.browse.active_channel {
            '>'
        } else {
            ' '
        };
        out.push_str(&format!(
            "{} {}  {} ({}, {} students)\n",
            marker, channel.id, channel.name, channel.subject, channel.students_count
        ));
    }
    out
}

pub fn render_thread_detail(state: &SessionState, now_ms: u64) -> String {
    let Some(detail) = state.open_detail() else {
        return "(no thread selected)\n".to_string();
    };
    let summary = &detail.summary;
    let mut out = String::new();
    let solved = if summary.solved { " [solved]" } else { "" };
    out.push_str(&format!("# {}{}\n", summary.title, solved));
    out.push_str(&format!(
        "{} asked {}, {} reactions\n",
        summary.author,
        summary.age_label(now_ms),
        summary.reactions
    ));
    if !summary.tags.is_empty() {
        out.push_str(&format!("tags: {}\n", summary.tags.join(", ")));
    }
    out.push_str(&format!("\n{}\n", detail.body));
    if !detail.attachments.is_empty() {
        out.push_str("\nattachments:\n");
        for attachment in &detail.attachments {
            out.push_str(&format!(
                "  [{}] {}\n",
                attachment.kind.label(),
                attachment.name
            ));
        }
    }
    if !detail.steps.is_empty() {
        out.push_str("\nanswer:\n");
        for (index, step) in detail.steps.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n     {}\n", index + 1, step.title, step.text));
        }
    }
    out.push_str(&format!("\nfinal: {}\n", detail.final_answer));
    out
}

pub fn render_profile(state: &SessionState) -> String {
    let profile = derive_profile(state.identity.as_ref());
    let mut out = String::new();
    out.push_str(&format!("({}) {}\n", profile.initial, profile.display_name));
    out.push_str(if profile.signed_in {
        "signed in\n"
    } else {
        "browsing as guest\n"
    });
    out
}

pub fn render_notices(state: &SessionState) -> String {
    let mut out = String::from("notices:\n");
    for notice in state.notices.iter() {
        out.push_str(&format!("  [{}] {}\n", notice.level.label(), notice.message));
    }
    out
}

fn render_thread_line(thread: &Thread, now_ms: u64) -> String {
    let solved = if thread.solved { " [solved]" } else { "" };
    let tags = if thread.tags.is_empty() {
        String::new()
    } else {
        format!(" #{}", thread.tags.join(" #"))
    };
    format!(
        "  {}  {} ({}, {}){} {} reactions{}\n",
        thread.id,
        thread.title,
        thread.author,
        thread.age_label(now_ms),
        solved,
        thread.reactions,
        tags
    )
}
