use crate::app::{App, AppEvent, AppMode};
use crate::engine::{EngineError, ManualClock, RunConfig};

fn manual_app(text: &str, config: RunConfig) -> App<ManualClock> {
    App::with_clock(ManualClock::default(), text.to_string(), config).unwrap()
}

/// Advances virtual time by `ms` and lets the app process due timers.
fn advance(app: &mut App<ManualClock>, ms: u64) -> bool {
    app.clock_mut().advance(ms);
    app.tick()
}

#[test]
fn test_app_starts_reading_first_word() {
    let app = manual_app("One. Two, three!", RunConfig::new(300, 600, 0));
    assert_eq!(app.mode(), AppMode::Reading);
    let state = app.render_state();
    assert_eq!(state.current_word.as_deref(), Some("One."));
    assert_eq!(state.anchor, 1);
    assert_eq!(state.progress, (1, 3));
}

#[test]
fn test_app_rejects_empty_text() {
    let result = App::with_clock(
        ManualClock::default(),
        "   ".to_string(),
        RunConfig::new(100, 300, 0),
    );
    assert!(matches!(result, Err(EngineError::EmptyInput)));
}

#[test]
fn test_app_rejects_inverted_speeds() {
    let result = App::with_clock(
        ManualClock::default(),
        "words".to_string(),
        RunConfig::new(300, 100, 0),
    );
    assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
}

#[test]
fn test_app_tick_waits_for_deadline() {
    let mut app = manual_app("One. Two, three!", RunConfig::new(300, 600, 0));
    assert_eq!(app.time_until_next().unwrap().as_millis(), 250);

    advance(&mut app, 249);
    assert_eq!(app.render_state().current_word.as_deref(), Some("One."));

    assert!(advance(&mut app, 1));
    assert_eq!(app.render_state().current_word.as_deref(), Some("Two,"));
    assert_eq!(app.render_state().progress, (2, 3));
}

#[test]
fn test_app_finishes_after_last_word() {
    let mut app = manual_app("One. Two, three!", RunConfig::new(300, 600, 0));
    advance(&mut app, 250);
    advance(&mut app, 180);
    assert_eq!(app.mode(), AppMode::Reading);
    advance(&mut app, 220);

    assert_eq!(app.mode(), AppMode::Finished);
    assert!(app.render_state().finished);
    assert_eq!(app.time_until_next(), None);
    // Last word stays on screen
    assert_eq!(app.render_state().current_word.as_deref(), Some("three!"));
}

#[test]
fn test_app_handle_event_quit() {
    let mut app = manual_app("a b c", RunConfig::new(100, 300, 0));
    app.handle_event(AppEvent::Quit);
    assert_eq!(app.mode(), AppMode::Quit);
    assert!(app.render_state().stopped);
    assert_eq!(app.time_until_next(), None);
}

#[test]
fn test_app_restart_from_first_word() {
    let mut app = manual_app("a b c", RunConfig::new(100, 300, 0));
    advance(&mut app, 200);
    assert_eq!(app.render_state().progress, (2, 3));

    app.handle_keypress('r');
    assert_eq!(app.mode(), AppMode::Reading);
    assert_eq!(app.render_state().progress, (1, 3));
    assert_eq!(app.render_state().current_word.as_deref(), Some("a"));
}

#[test]
fn test_app_any_key_dismisses_finished() {
    let mut app = manual_app("done", RunConfig::new(100, 300, 0));
    advance(&mut app, 200);
    assert_eq!(app.mode(), AppMode::Finished);

    app.handle_keypress('x');
    assert_eq!(app.mode(), AppMode::Quit);
}

#[test]
fn test_app_unbound_key_while_reading_is_ignored() {
    let mut app = manual_app("a b", RunConfig::new(100, 300, 0));
    app.handle_keypress('x');
    assert_eq!(app.mode(), AppMode::Reading);
}
