use super::*;
use pretty_assertions::assert_eq;

#[test]
fn opening_the_picker_closes_an_open_detail() {
    let mut state = state();
    reduce(
        &mut state,
        SessionAction::User(UserAction::OpenThread(tid("p1"))),
    );
    assert!(state.is_detail_visible());

    reduce(&mut state, SessionAction::User(UserAction::OpenChannelPicker));

    assert_eq!(state.interaction.overlay, SessionOverlay::ChannelPicker);
    assert!(!state.is_detail_visible());
}

#[test]
fn opening_a_detail_closes_the_picker() {
    let mut state = state();
    reduce(&mut state, SessionAction::User(UserAction::OpenChannelPicker));
    assert!(state.is_picker_visible());

    reduce(
        &mut state,
        SessionAction::User(UserAction::OpenThread(tid("r1"))),
    );

    assert_eq!(
        state.interaction.overlay,
        SessionOverlay::ThreadDetail { thread: tid("r1") }
    );
    assert!(!state.is_picker_visible());
}

#[test]
fn close_picker_is_idempotent() {
    let mut state = state();
    reduce(&mut state, SessionAction::User(UserAction::OpenChannelPicker));

    let effects = reduce(&mut state, SessionAction::User(UserAction::CloseChannelPicker));
    assert_eq!(state.interaction.overlay, SessionOverlay::None);
    assert!(matches!(effects.as_slice(), [SessionEffect::RequestFrame]));

    let effects = reduce(&mut state, SessionAction::User(UserAction::CloseChannelPicker));
    assert_eq!(state.interaction.overlay, SessionOverlay::None);
    assert!(effects.is_empty());
}

#[test]
fn close_picker_does_not_touch_an_open_detail() {
    let mut state = state();
    reduce(
        &mut state,
        SessionAction::User(UserAction::OpenThread(tid("p1"))),
    );

    let effects = reduce(&mut state, SessionAction::User(UserAction::CloseChannelPicker));

    assert_eq!(
        state.interaction.overlay,
        SessionOverlay::ThreadDetail { thread: tid("p1") }
    );
    assert!(effects.is_empty());
}

#[test]
fn close_detail_does_not_touch_the_picker() {
    let mut state = state();
    reduce(&mut state, SessionAction::User(UserAction::OpenChannelPicker));

    let effects = reduce(&mut state, SessionAction::User(UserAction::CloseThreadDetail));

    assert_eq!(state.interaction.overlay, SessionOverlay::ChannelPicker);
    assert!(effects.is_empty());
}
