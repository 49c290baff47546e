use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use std::time::Duration;

/// Everything the player can do to the app, already translated out of
/// crossterm's event vocabulary. Clicks arrive in cell coordinates; the
/// app owns the cell-to-logical mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Click { col: u16, row: u16 },
    Resize { cols: u16, rows: u16 },
    TogglePause,
    ToggleHelp,
    Restart,
    Quit,
}

pub fn poll_actions(max_frame_time: Duration) -> anyhow::Result<Vec<Action>> {
    let mut out = Vec::new();

    // poll with a tiny timeout so we stay responsive
    let timeout = std::cmp::min(Duration::from_millis(1), max_frame_time);
    while event::poll(timeout)? {
        match event::read()? {
            Event::Key(k) => {
                if k.kind == KeyEventKind::Press || k.kind == KeyEventKind::Repeat {
                    if let Some(a) = map_key(k.code) {
                        out.push(a);
                    }
                }
            }
            Event::Mouse(m) => {
                if let MouseEventKind::Down(MouseButton::Left) = m.kind {
                    out.push(Action::Click {
                        col: m.column,
                        row: m.row,
                    });
                }
            }
            Event::Resize(cols, rows) => out.push(Action::Resize { cols, rows }),
            _ => {}
        }
        if out.len() >= 32 {
            break;
        }
    }
    Ok(out)
}

fn map_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Action::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => Some(Action::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(map_key(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(map_key(KeyCode::Char('Q')), Some(Action::Quit));
        assert_eq!(map_key(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(map_key(KeyCode::Char('p')), Some(Action::TogglePause));
        assert_eq!(map_key(KeyCode::Char('r')), Some(Action::Restart));
        assert_eq!(map_key(KeyCode::Char('h')), Some(Action::ToggleHelp));
        assert_eq!(map_key(KeyCode::Char('?')), Some(Action::ToggleHelp));
    }

    #[test]
    fn unbound_keys_do_nothing() {
        assert_eq!(map_key(KeyCode::Char('x')), None);
        assert_eq!(map_key(KeyCode::Enter), None);
        assert_eq!(map_key(KeyCode::Up), None);
    }
}
