use std::env;
use std::fs;
use std::io;
use std::io::Write;
use std::path::PathBuf;

use tutorqa_core::actions::RuntimeAction;
use tutorqa_core::actions::SessionAction;
use tutorqa_core::actions::UserAction;
use tutorqa_core::model::ChannelId;
use tutorqa_core::model::ThreadId;
use tutorqa_core::reducer::reduce;
use tutorqa_core::reducer::HostEvent;
use tutorqa_core::reducer::SessionEffect;
use tutorqa_core::state::AppTab;
use tutorqa_core::state::SessionNotice;
use tutorqa_core::state::SessionState;
use tutorqa_data::document::load_dataset;
use tutorqa_data::document::DatasetDocument;
use tutorqa_data::fixture::demo_dataset;

use crate::config::load_config;
use crate::config::HostConfig;
use crate::host::IntentBackend;
use crate::host::SimulatedBackend;
use crate::host::StubSession;
use crate::render::render_frame;
use crate::render::render_notices;

mod config;
mod host;
mod render;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let Some(command) = args.next() else {
        print_help();
        return Ok(());
    };

    match command.as_str() {
        "--help" | "-h" | "help" => {
            print_help();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("tutorqa {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "demo" => {
            let options = parse_host_args(args.collect::<Vec<_>>())?;
            run_demo(options)
        }
        "browse" => {
            let options = parse_host_args(args.collect::<Vec<_>>())?;
            run_browse(options)
        }
        "export" => run_export(args.collect::<Vec<_>>()),
        _ => {
            print_help();
            Err(format!("unknown command: {command}").into())
        }
    }
}

struct HostOptions {
    data: Option<PathBuf>,
}

fn parse_host_args(args: Vec<String>) -> Result<HostOptions, Box<dyn std::error::Error>> {
    let mut options = HostOptions { data: None };
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--data" => {
                let Some(value) = args.get(i + 1) else {
                    return Err("--data requires a path".into());
                };
                options.data = Some(PathBuf::from(value));
                i += 2;
            }
            other => {
                return Err(format!("unsupported argument: {other}").into());
            }
        }
    }
    Ok(options)
}

fn load_document(
    options: &HostOptions,
    config: &HostConfig,
) -> Result<DatasetDocument, Box<dyn std::error::Error>> {
    match options.data.as_ref().or(config.dataset.as_ref()) {
        Some(path) => Ok(load_dataset(path)?),
        None => Ok(demo_dataset()),
    }
}

fn build_state(document: DatasetDocument, config: &HostConfig) -> SessionState {
    let repo = document.into_repository();
    let issues = repo.audit();
    let mut state = SessionState::new(repo);
    for issue in issues {
        reduce(
            &mut state,
            SessionAction::Runtime(RuntimeAction::AppendNotice(SessionNotice::warning(
                issue.message(),
            ))),
        );
    }
    if let Some(start) = config.start_channel.as_ref() {
        reduce(
            &mut state,
            SessionAction::User(UserAction::SelectChannel(ChannelId(start.clone()))),
        );
    }
    state
}

/// Applies one action and runs its effects: notices are echoed back into
/// the session log, intent events go to the backend, and the return value
/// says whether a new frame was requested.
fn dispatch(
    state: &mut SessionState,
    backend: &dyn IntentBackend,
    session: &mut StubSession,
    action: SessionAction,
) -> bool {
    let mut frame = false;
    for effect in reduce(state, action) {
        match effect {
            SessionEffect::RequestFrame => frame = true,
            SessionEffect::SurfaceNotice(notice) => {
                reduce(
                    state,
                    SessionAction::Runtime(RuntimeAction::AppendNotice(notice)),
                );
            }
            SessionEffect::EmitHostEvent(event) => {
                if matches!(event, HostEvent::SignOutRequested) {
                    session.logout();
                    reduce(
                        state,
                        SessionAction::Runtime(RuntimeAction::SetCurrentUser(None)),
                    );
                }
                let notice = backend.acknowledge(&event);
                reduce(
                    state,
                    SessionAction::Runtime(RuntimeAction::AppendNotice(notice)),
                );
            }
        }
    }
    frame
}

fn step(
    state: &mut SessionState,
    backend: &dyn IntentBackend,
    session: &mut StubSession,
    now: u64,
    title: &str,
    action: SessionAction,
) {
    println!("-- {title} --");
    if dispatch(state, backend, session, action) {
        print!("{}", render_frame(state, now));
    }
}

fn run_demo(options: HostOptions) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    let document = load_document(&options, &config)?;
    let mut state = build_state(document, &config);
    let backend = SimulatedBackend;
    let mut session = StubSession::default();
    let now = now_ms();

    println!("== tutorqa demo ==");
    print!("{}", render_frame(&state, now));

    step(
        &mut state,
        &backend,
        &mut session,
        now,
        "search: limits",
        SessionAction::User(UserAction::SetSearchQuery("limits".to_string())),
    );
    step(
        &mut state,
        &backend,
        &mut session,
        now,
        "clear the search",
        SessionAction::User(UserAction::SetSearchQuery(String::new())),
    );
    step(
        &mut state,
        &backend,
        &mut session,
        now,
        "open the channel picker",
        SessionAction::User(UserAction::OpenChannelPicker),
    );

    let second_channel = state.data.list_channels().get(1).map(|channel| channel.id.clone());
    match second_channel {
        Some(channel) => step(
            &mut state,
            &backend,
            &mut session,
            now,
            "switch channels",
            SessionAction::User(UserAction::SelectChannel(channel)),
        ),
        None => step(
            &mut state,
            &backend,
            &mut session,
            now,
            "close the picker",
            SessionAction::User(UserAction::CloseChannelPicker),
        ),
    }

    let visible = state.visible_threads();
    let first_thread = visible
        .recent
        .first()
        .map(|thread| thread.id.clone())
        .or_else(|| visible.pinned.first().map(|thread| thread.id.clone()));
    if let Some(thread) = first_thread {
        step(
            &mut state,
            &backend,
            &mut session,
            now,
            "open a thread",
            SessionAction::User(UserAction::OpenThread(thread.clone())),
        );
        step(
            &mut state,
            &backend,
            &mut session,
            now,
            "pin it",
            SessionAction::User(UserAction::PinThread(thread.clone())),
        );
        step(
            &mut state,
            &backend,
            &mut session,
            now,
            "queue a transcript",
            SessionAction::User(UserAction::GenerateTranscript(thread)),
        );
        step(
            &mut state,
            &backend,
            &mut session,
            now,
            "close the detail",
            SessionAction::User(UserAction::CloseThreadDetail),
        );
    }

    step(
        &mut state,
        &backend,
        &mut session,
        now,
        "open a thread that is not there",
        SessionAction::User(UserAction::OpenThread(ThreadId("missing".to_string()))),
    );

    let user = session.login("u-100", "Maya Rivera");
    step(
        &mut state,
        &backend,
        &mut session,
        now,
        "sign in as Maya",
        SessionAction::Runtime(RuntimeAction::SetCurrentUser(Some(user))),
    );
    step(
        &mut state,
        &backend,
        &mut session,
        now,
        "visit the profile tab",
        SessionAction::User(UserAction::SelectTab(AppTab::Profile)),
    );
    step(
        &mut state,
        &backend,
        &mut session,
        now,
        "sign out",
        SessionAction::User(UserAction::SignOut),
    );
    step(
        &mut state,
        &backend,
        &mut session,
        now,
        "back to home",
        SessionAction::User(UserAction::SelectTab(AppTab::Home)),
    );

    println!("-- notices --");
    print!("{}", render_notices(&state));
    Ok(())
}

enum ParsedCommand {
    Action(SessionAction),
    Help,
    Quit,
    Message(String),
}

fn parse_command(input: &str, state: &SessionState, session: &mut StubSession) -> ParsedCommand {
    // The query is taken verbatim after the first space, spaces included.
    if let Some(rest) = input.strip_prefix("search ") {
        return ParsedCommand::Action(SessionAction::User(UserAction::SetSearchQuery(
            rest.to_string(),
        )));
    }
    if input == "search" {
        return ParsedCommand::Action(SessionAction::User(UserAction::SetSearchQuery(
            String::new(),
        )));
    }

    let mut words = input.split_whitespace();
    let Some(command) = words.next() else {
        return ParsedCommand::Message("type help for commands".to_string());
    };
    match command {
        "channels" => ParsedCommand::Action(SessionAction::User(UserAction::OpenChannelPicker)),
        "select" => match words.next() {
            Some(id) => ParsedCommand::Action(SessionAction::User(UserAction::SelectChannel(
                ChannelId(id.to_string()),
            ))),
            None => ParsedCommand::Message("select requires a channel id".to_string()),
        },
        "open" => match words.next() {
            Some(id) => ParsedCommand::Action(SessionAction::User(UserAction::OpenThread(
                ThreadId(id.to_string()),
            ))),
            None => ParsedCommand::Message("open requires a thread id".to_string()),
        },
        "close" | "back" => {
            if state.is_picker_visible() {
                ParsedCommand::Action(SessionAction::User(UserAction::CloseChannelPicker))
            } else {
                ParsedCommand::Action(SessionAction::User(UserAction::CloseThreadDetail))
            }
        }
        "tab" => ParsedCommand::Action(SessionAction::User(UserAction::SelectTab(
            state.routing.tab.next(),
        ))),
        "pin" | "solve" | "voice" | "transcript" => match state.selected_thread_id() {
            Some(thread) => {
                let thread = thread.clone();
                let action = match command {
                    "pin" => UserAction::PinThread(thread),
                    "solve" => UserAction::MarkThreadSolved(thread),
                    "voice" => UserAction::RecordVoiceNote(thread),
                    _ => UserAction::GenerateTranscript(thread),
                };
                ParsedCommand::Action(SessionAction::User(action))
            }
            None => ParsedCommand::Message("open a thread first".to_string()),
        },
        "login" => {
            let Some(id) = words.next() else {
                return ParsedCommand::Message(
                    "login requires an id and a display name".to_string(),
                );
            };
            let name = words.collect::<Vec<_>>().join(" ");
            if name.is_empty() {
                return ParsedCommand::Message(
                    "login requires an id and a display name".to_string(),
                );
            }
            let user = session.login(id, name);
            ParsedCommand::Action(SessionAction::Runtime(RuntimeAction::SetCurrentUser(Some(
                user,
            ))))
        }
        "logout" => ParsedCommand::Action(SessionAction::User(UserAction::SignOut)),
        "notices" => {
            if state.notices.is_empty() {
                ParsedCommand::Message("no notices".to_string())
            } else {
                ParsedCommand::Message(render_notices(state).trim_end().to_string())
            }
        }
        "dismiss" => ParsedCommand::Action(SessionAction::User(UserAction::DismissNotices)),
        "refresh" => ParsedCommand::Message(render_frame(state, now_ms()).trim_end().to_string()),
        "quit" | "exit" | "q" => ParsedCommand::Quit,
        "help" | "?" => ParsedCommand::Help,
        other => ParsedCommand::Message(format!("unknown command: {other}")),
    }
}

fn run_browse(options: HostOptions) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    let document = load_document(&options, &config)?;
    let mut state = build_state(document, &config);
    let backend = SimulatedBackend;
    let mut session = StubSession::default();

    print!("{}", render_frame(&state, now_ms()));
    println!("type help for commands");

    let mut line = String::new();
    loop {
        print!("tutorqa> ");
        io::stdout().flush()?;
        line.clear();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim_end_matches(['\n', '\r']);
        if input.is_empty() {
            continue;
        }

        match parse_command(input, &state, &mut session) {
            ParsedCommand::Action(action) => {
                if dispatch(&mut state, &backend, &mut session, action) {
                    print!("{}", render_frame(&state, now_ms()));
                }
            }
            ParsedCommand::Help => print_browse_help(),
            ParsedCommand::Quit => break,
            ParsedCommand::Message(text) => println!("{text}"),
        }
    }
    Ok(())
}

fn run_export(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut out_path = None;
    let mut options = HostOptions { data: None };
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--data" => {
                let Some(value) = args.get(i + 1) else {
                    return Err("--data requires a path".into());
                };
                options.data = Some(PathBuf::from(value));
                i += 2;
            }
            other if out_path.is_none() && !other.starts_with('-') => {
                out_path = Some(PathBuf::from(other));
                i += 1;
            }
            other => {
                return Err(format!("unsupported argument: {other}").into());
            }
        }
    }
    let Some(out_path) = out_path else {
        return Err("export requires an output path".into());
    };

    let config = load_config()?;
    let document = load_document(&options, &config)?;
    fs::write(&out_path, serde_json::to_vec_pretty(&document)?)?;
    println!("dataset written: {}", out_path.display());
    Ok(())
}

fn now_ms() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}

fn print_help() {
    println!("tutorqa {}", env!("CARGO_PKG_VERSION"));
    println!("Usage:");
    println!("  tutorqa demo [--data PATH]");
    println!("  tutorqa browse [--data PATH]");
    println!("  tutorqa export OUT [--data PATH]");
    println!("  tutorqa --help");
    println!("  tutorqa --version");
}

fn print_browse_help() {
    println!("commands:");
    println!("  channels              open the channel picker");
    println!("  select ID             switch to a channel");
    println!("  open ID               open a thread");
    println!("  close                 close the picker or the detail view");
    println!("  tab                   toggle home/profile");
    println!("  search TEXT           filter recent threads; bare search clears");
    println!("  pin | solve | voice | transcript");
    println!("                        act on the open thread");
    println!("  login ID NAME         sign in with the stub session");
    println!("  logout                request sign-out");
    println!("  notices | dismiss     show or clear notices");
    println!("  refresh               redraw the screen");
    println!("  quit");
}
