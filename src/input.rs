//! Input handling for the runner screen.
//!
//! Maps crossterm key and mouse events onto UI-agnostic `RunnerInput`s so
//! the core never sees a terminal type.

use crate::runner::{process_input, RunnerEvent, RunnerGame, RunnerInput};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Result of handling one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running. Carries the event the key produced, if any.
    Continue(Option<RunnerEvent>),
    /// Leave the host loop.
    Quit,
}

/// What a key or click means to the host, before it reaches the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Runner(RunnerInput),
    Quit,
    /// Key releases and auto-repeats delivered by some terminals, plus any
    /// mouse activity other than a left click.
    Ignore,
}

/// Unified key mapping: Space/Up/Enter/k/w act, q/Esc/Ctrl-C quit.
///
/// Only fresh presses count, so holding a key never retries or jumps again.
pub fn classify_key(key: KeyEvent) -> KeyIntent {
    if key.kind != KeyEventKind::Press {
        return KeyIntent::Ignore;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyIntent::Quit;
    }

    match key.code {
        KeyCode::Char(' ')
        | KeyCode::Up
        | KeyCode::Enter
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => KeyIntent::Runner(RunnerInput::Action),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyIntent::Quit,
        _ => KeyIntent::Runner(RunnerInput::Other),
    }
}

/// Tap anywhere: a left-button press acts like the action key.
pub fn classify_mouse(mouse: MouseEvent) -> KeyIntent {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => KeyIntent::Runner(RunnerInput::Action),
        _ => KeyIntent::Ignore,
    }
}

/// Dispatch a key to the game.
pub fn handle_key(key: KeyEvent, game: &mut RunnerGame) -> InputResult {
    dispatch(classify_key(key), game)
}

/// Dispatch any terminal event to the game. Resizes and focus changes are
/// ignored; the next draw picks up the new size.
pub fn handle_event(event: Event, game: &mut RunnerGame) -> InputResult {
    match event {
        Event::Key(key) => handle_key(key, game),
        Event::Mouse(mouse) => dispatch(classify_mouse(mouse), game),
        _ => InputResult::Continue(None),
    }
}

fn dispatch(intent: KeyIntent, game: &mut RunnerGame) -> InputResult {
    match intent {
        KeyIntent::Runner(input) => InputResult::Continue(process_input(game, input)),
        KeyIntent::Quit => InputResult::Quit,
        KeyIntent::Ignore => InputResult::Continue(None),
    }
}
