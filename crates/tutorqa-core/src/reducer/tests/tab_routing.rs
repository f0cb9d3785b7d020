use super::*;
use pretty_assertions::assert_eq;

#[test]
fn switching_tabs_closes_an_open_detail() {
    let mut state = state();
    reduce(
        &mut state,
        SessionAction::User(UserAction::OpenThread(tid("p1"))),
    );

    reduce(
        &mut state,
        SessionAction::User(UserAction::SelectTab(AppTab::Profile)),
    );

    assert_eq!(state.routing.tab, AppTab::Profile);
    assert_eq!(state.interaction.overlay, SessionOverlay::None);
}

#[test]
fn reselecting_the_current_tab_keeps_the_detail() {
    let mut state = state();
    reduce(
        &mut state,
        SessionAction::User(UserAction::OpenThread(tid("p1"))),
    );

    reduce(
        &mut state,
        SessionAction::User(UserAction::SelectTab(AppTab::Home)),
    );

    assert_eq!(state.routing.tab, AppTab::Home);
    assert_eq!(
        state.interaction.overlay,
        SessionOverlay::ThreadDetail { thread: tid("p1") }
    );
}

#[test]
fn picker_and_search_survive_tab_switches() {
    let mut state = state();
    reduce(
        &mut state,
        SessionAction::User(UserAction::SetSearchQuery("calc".to_string())),
    );
    reduce(&mut state, SessionAction::User(UserAction::OpenChannelPicker));

    reduce(
        &mut state,
        SessionAction::User(UserAction::SelectTab(AppTab::Profile)),
    );
    assert_eq!(state.interaction.overlay, SessionOverlay::ChannelPicker);
    assert_eq!(state.browse.search, "calc");

    reduce(
        &mut state,
        SessionAction::User(UserAction::SelectTab(AppTab::Home)),
    );
    assert_eq!(state.interaction.overlay, SessionOverlay::ChannelPicker);
    assert_eq!(state.browse.search, "calc");
}

#[test]
fn tab_cycle_alternates_between_home_and_profile() {
    assert_eq!(AppTab::Home.next(), AppTab::Profile);
    assert_eq!(AppTab::Profile.next(), AppTab::Home);
    assert_eq!(AppTab::Home.label(), "Home");
    assert_eq!(AppTab::Profile.label(), "Profile");
}
