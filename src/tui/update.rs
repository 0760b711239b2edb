//! Pure state transitions: (Session, Key) → Transition.
//!
//! This is the core logic of the menu. Fully testable without a terminal.
//! Each state decides what a key means; keys a state does not use leave
//! the session unchanged.

use crate::transform::TRANSFORMS;
use crate::types::MenuConfig;

use super::state::{Key, MenuState, Session, Transition};

/// Pure state transition function.
pub fn update(session: Session, key: &Key, config: &MenuConfig) -> Transition {
    // Ctrl+C always quits
    if *key == Key::Interrupt {
        return Transition::Quit;
    }

    match session.state {
        MenuState::Select => update_select(session, key),
        MenuState::Input => update_input(session, key, config),
        MenuState::Result => update_result(session),
    }
}

// ============================================================================
// PER-STATE HANDLERS
// ============================================================================

/// Select: move the cursor, pick a transform, or quit.
fn update_select(mut session: Session, key: &Key) -> Transition {
    if key.is_up() {
        session.cursor = session.cursor.saturating_sub(1);
    } else if key.is_down() {
        session.cursor = (session.cursor + 1).min(TRANSFORMS.len() - 1);
    } else if key.is_confirm() {
        session.selected = session.cursor;
        session.display = session.chosen().label().to_string();
        session.state = MenuState::Input;
    } else if *key == Key::Char('q') {
        return Transition::Quit;
    }
    Transition::Session(session)
}

/// Input: confirm runs the transform; every other key is typed text.
///
/// `q` and the navigation keys are literal text here, not commands.
fn update_input(mut session: Session, key: &Key, config: &MenuConfig) -> Transition {
    if key.is_confirm() {
        let transform = session.chosen();
        let result = transform.apply(&session.input);
        session.display = format!("{}\n\n{}", transform.label(), result);
        session.state = MenuState::Result;
        return Transition::Session(session);
    }

    session.input.push_str(&key.literal());
    if session.input_len() > config.max_input_chars {
        return Transition::Quit;
    }
    Transition::Session(session)
}

/// Result: any key goes back to the list with a clean slate.
fn update_result(mut session: Session) -> Transition {
    session.display.clear();
    session.input.clear();
    session.state = MenuState::Select;
    Transition::Session(session)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Transform;
    use proptest::prelude::*;

    fn config() -> MenuConfig {
        MenuConfig::default()
    }

    /// Apply a key and unwrap the resulting session.
    fn step(session: Session, key: Key) -> Session {
        match update(session, &key, &config()) {
            Transition::Session(s) => s,
            Transition::Quit => panic!("Expected Session, got Quit on {:?}", key),
        }
    }

    fn type_str(mut session: Session, text: &str) -> Session {
        for c in text.chars() {
            session = step(session, Key::Char(c));
        }
        session
    }

    fn input_session(index: usize) -> Session {
        let mut session = Session::new();
        for _ in 0..index {
            session = step(session, Key::Down);
        }
        step(session, Key::Enter)
    }

    // -- Select --

    #[test]
    fn select_cursor_down() {
        let session = step(Session::new(), Key::Down);
        assert_eq!(session.cursor, 1);
        assert_eq!(session.state, MenuState::Select);
    }

    #[test]
    fn select_cursor_up_at_top_stays() {
        let session = step(Session::new(), Key::Up);
        assert_eq!(session.cursor, 0);
    }

    #[test]
    fn select_cursor_down_clamps_at_end() {
        let session = Session {
            cursor: 3,
            ..Session::new()
        };
        assert_eq!(step(session, Key::Down).cursor, 3);
    }

    #[test]
    fn select_vim_keys_move_cursor() {
        let session = step(Session::new(), Key::Char('m'));
        assert_eq!(session.cursor, 1);
        let session = step(session, Key::Char('k'));
        assert_eq!(session.cursor, 0);
    }

    #[test]
    fn select_q_quits() {
        assert_eq!(update(Session::new(), &Key::Char('q'), &config()), Transition::Quit);
    }

    #[test]
    fn select_ignores_other_keys() {
        let session = Session {
            cursor: 2,
            ..Session::new()
        };
        for key in [Key::Char('j'), Key::Char('x'), Key::Named("esc".into())] {
            assert_eq!(step(session.clone(), key), session);
        }
    }

    #[test]
    fn select_space_confirms_like_enter() {
        let by_enter = step(Session::new(), Key::Enter);
        let by_space = step(Session::new(), Key::Char(' '));
        assert_eq!(by_enter, by_space);
    }

    #[test]
    fn select_confirm_enters_input_with_label() {
        for (i, transform) in TRANSFORMS.iter().enumerate() {
            let session = input_session(i);
            assert_eq!(session.state, MenuState::Input);
            assert_eq!(session.selected, i);
            assert_eq!(session.display, transform.label());
        }
    }

    // -- Input --

    #[test]
    fn input_appends_printable_keys() {
        let session = type_str(input_session(0), "abc");
        assert_eq!(session.input, "abc");
        assert_eq!(session.state, MenuState::Input);
    }

    #[test]
    fn input_q_is_literal_text() {
        let session = step(input_session(0), Key::Char('q'));
        assert_eq!(session.input, "q");
        assert_eq!(session.state, MenuState::Input);
    }

    #[test]
    fn input_navigation_keys_are_literal_text() {
        let session = input_session(1);
        let session = step(session, Key::Char('k'));
        let session = step(session, Key::Char('m'));
        let session = step(session, Key::Up);
        let session = step(session, Key::Down);
        assert_eq!(session.input, "kmupdown");
        assert_eq!(session.cursor, 1);
        assert_eq!(session.selected, 1);
    }

    #[test]
    fn input_named_keys_append_their_names() {
        let session = step(input_session(0), Key::Named("tab".into()));
        assert_eq!(session.input, "tab");
    }

    #[test]
    fn input_confirm_shows_result() {
        let session = type_str(input_session(2), "AB");
        let session = step(session, Key::Enter);
        assert_eq!(session.state, MenuState::Result);
        assert_eq!(session.display, "3. Byte Encoding\n\n[65 66]");
    }

    #[test]
    fn input_malformed_base64_shows_error() {
        let session = type_str(input_session(1), "ab!c");
        let session = step(session, Key::Enter);
        assert_eq!(session.state, MenuState::Result);
        let result = session.display.strip_prefix("2. Base64 Decoding\n\n").unwrap();
        assert!(result.starts_with("Error: "));
    }

    #[test]
    fn input_at_limit_is_accepted() {
        let session = Session {
            input: "a".repeat(4095),
            ..input_session(0)
        };
        let session = step(session, Key::Char('b'));
        assert_eq!(session.input_len(), 4096);
    }

    #[test]
    fn input_past_limit_quits() {
        let session = Session {
            input: "a".repeat(4096),
            ..input_session(0)
        };
        assert_eq!(update(session, &Key::Char('b'), &config()), Transition::Quit);
    }

    #[test]
    fn input_multichar_key_can_cross_limit() {
        let session = Session {
            input: "a".repeat(4094),
            ..input_session(0)
        };
        assert_eq!(
            update(session, &Key::Named("backspace".into()), &config()),
            Transition::Quit
        );
    }

    #[test]
    fn input_limit_comes_from_config() {
        let small = MenuConfig { max_input_chars: 2 };
        let session = type_str(input_session(0), "ab");
        assert_eq!(update(session, &Key::Char('c'), &small), Transition::Quit);
    }

    // -- Result --

    #[test]
    fn result_any_key_returns_to_select() {
        for key in [
            Key::Enter,
            Key::Char(' '),
            Key::Char('q'),
            Key::Up,
            Key::Char('z'),
            Key::Named("esc".into()),
        ] {
            let session = step(type_str(input_session(3), "xy"), Key::Enter);
            let session = step(session, key);
            assert_eq!(session.state, MenuState::Select);
            assert!(session.input.is_empty());
            assert!(session.display.is_empty());
            assert_eq!(session.cursor, 3);
        }
    }

    // -- Interrupt --

    #[test]
    fn interrupt_quits_from_every_state() {
        let select = Session::new();
        let input = input_session(0);
        let result = step(input.clone(), Key::Enter);
        for session in [select, input, result] {
            assert_eq!(update(session, &Key::Interrupt, &config()), Transition::Quit);
        }
    }

    // -- Properties --

    fn nav_key() -> impl Strategy<Value = Key> {
        prop_oneof![
            Just(Key::Up),
            Just(Key::Down),
            Just(Key::Char('k')),
            Just(Key::Char('m')),
        ]
    }

    proptest! {
        #[test]
        fn cursor_stays_in_bounds(keys in proptest::collection::vec(nav_key(), 0..64)) {
            let mut session = Session::new();
            for key in keys {
                let before = session.cursor;
                session = step(session, key.clone());
                prop_assert!(session.cursor < TRANSFORMS.len());
                if key.is_up() {
                    prop_assert_eq!(session.cursor, before.saturating_sub(1));
                } else {
                    prop_assert_eq!(session.cursor, (before + 1).min(3));
                }
            }
        }

        #[test]
        fn confirmed_result_matches_transform(
            index in 0usize..4,
            text in "[a-zA-Z0-9!=_-]{0,64}",
        ) {
            // k and m are ordinary letters once on the input screen
            let session = step(type_str(input_session(index), &text), Key::Enter);
            let transform = Transform::from_index(index).unwrap();
            prop_assert_eq!(
                session.display,
                format!("{}\n\n{}", transform.label(), transform.apply(&text))
            );
        }

        #[test]
        fn round_trip_through_two_sessions(text in "[a-zA-Z0-9.,;:!?]{0,64}") {
            let encoded = step(type_str(input_session(0), &text), Key::Enter);
            let encoded = encoded.display.strip_prefix("1. Base64 Encoding\n\n").unwrap().to_string();

            let decoded = step(type_str(input_session(1), &encoded), Key::Enter);
            prop_assert_eq!(decoded.display, format!("2. Base64 Decoding\n\n{}", text));
        }
    }
}
