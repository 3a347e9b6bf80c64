use crate::ui::app::App;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset(),
        KeyCode::Char(ch) => {
            // 1-9 pick palette entries
            if let Some(digit) = ch.to_digit(10).filter(|d| *d > 0) {
                app.select_swatch(digit as usize - 1);
            }
        }
        _ => {}
    }
}

/// Translate a terminal mouse report into pointer events using the layout of
/// the last drawn frame.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let target = app
        .layout()
        .and_then(|layout| layout.hit_test(mouse.column, mouse.row));

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.pointer_down(target),
        MouseEventKind::Up(MouseButton::Left) => app.pointer_up(target),
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            app.pointer_motion(target)
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AppState, Color, Dimensions};
    use crate::store::StateStore;

    fn app() -> App {
        let store = StateStore::new(AppState::new(
            Dimensions::new(2, 2),
            vec![Color::Black, Color::Red],
        ))
        .unwrap();
        App::new(store)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digit_selects_palette_entry() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.store().pending().brush, Color::Red);
    }

    #[test]
    fn zero_and_out_of_range_digits_are_ignored() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('0')));
        handle_key(&mut app, press(KeyCode::Char('9')));
        assert!(!app.store().is_dirty());
    }

    #[test]
    fn quit_keys() {
        for key in [
            press(KeyCode::Char('q')),
            press(KeyCode::Esc),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = app();
            handle_key(&mut app, key);
            assert!(app.should_quit(), "{key:?}");
        }
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app();
        handle_key(
            &mut app,
            KeyEvent::new_with_kind(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release),
        );
        assert!(!app.should_quit());
    }

    #[test]
    fn mouse_without_layout_hits_nothing() {
        let mut app = app();
        let event = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 1,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut app, event);
        handle_mouse(
            &mut app,
            MouseEvent {
                kind: MouseEventKind::Up(MouseButton::Left),
                ..event
            },
        );
        assert!(!app.store().is_dirty());
    }
}
