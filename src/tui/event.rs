use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::key::Key;

/// Block until the next terminal event and translate it.
///
/// `Ok(None)` means "nothing for the core" (resize, focus, key release);
/// the caller still redraws.
pub fn read_key() -> std::io::Result<Option<Key>> {
    let event = event::read()?;
    Ok(translate(&event))
}

pub fn translate(event: &Event) -> Option<Key> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Paste(data) => Some(Key::Other(data.clone())),
        _ => None,
    }
}

fn translate_key(key_event: &KeyEvent) -> Option<Key> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key_event.modifiers.contains(KeyModifiers::ALT);
    let key = match key_event.code {
        KeyCode::Char('c') if ctrl => Key::CtrlC,
        KeyCode::Char('q') if ctrl => Key::CtrlQ,
        KeyCode::Char(c) if ctrl => Key::Other(format!("ctrl+{c}")),
        KeyCode::Char(c) if alt => Key::Other(format!("alt+{c}")),
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Tab => Key::Tab,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        other => Key::Other(format!("{other:?}").to_lowercase()),
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_quit_chords() {
        assert_eq!(
            translate(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::CtrlC)
        );
        assert_eq!(
            translate(&key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            Some(Key::CtrlQ)
        );
    }

    #[test]
    fn test_plain_and_shifted_chars() {
        assert_eq!(
            translate(&key(KeyCode::Char('k'), KeyModifiers::NONE)),
            Some(Key::Char('k'))
        );
        assert_eq!(
            translate(&key(KeyCode::Char('K'), KeyModifiers::SHIFT)),
            Some(Key::Char('K'))
        );
        assert_eq!(
            translate(&key(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Key::Char(' '))
        );
    }

    #[test]
    fn test_other_chords_are_not_text() {
        assert_eq!(
            translate(&key(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            Some(Key::Other("ctrl+a".to_string()))
        );
        assert_eq!(
            translate(&key(KeyCode::Char('x'), KeyModifiers::ALT)),
            Some(Key::Other("alt+x".to_string()))
        );
        assert!(matches!(
            translate(&key(KeyCode::F(1), KeyModifiers::NONE)),
            Some(Key::Other(_))
        ));
    }

    #[test]
    fn test_named_keys() {
        let cases = [
            (KeyCode::Tab, Key::Tab),
            (KeyCode::Up, Key::Up),
            (KeyCode::Down, Key::Down),
            (KeyCode::Left, Key::Left),
            (KeyCode::Right, Key::Right),
            (KeyCode::Enter, Key::Enter),
            (KeyCode::Backspace, Key::Backspace),
            (KeyCode::Delete, Key::Delete),
        ];
        for (code, expected) in cases {
            assert_eq!(translate(&key(code, KeyModifiers::NONE)), Some(expected));
        }
    }

    #[test]
    fn test_release_and_resize_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(&Event::Key(release)), None);
        assert_eq!(translate(&Event::Resize(80, 24)), None);
    }
}
