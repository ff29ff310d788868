/// Actions the player can perform on the inventory screen
///
/// Decouples raw input from what the game does with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Select whatever slot is under this screen position
    SelectAt(i32, i32),

    Quit,
}

/// Keys the game distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
    Other,
}

/// Engine-independent input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close request
    Quit,
    KeyDown(Key),
    PointerDown { button: PointerButton, x: i32, y: i32 },
}

/// InputSystem turns input events into GameActions
///
/// Window close and Escape quit; a left click selects. Everything else is
/// ignored.
#[derive(Debug, Default)]
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Translates a single event, or returns None if it has no meaning here
    pub fn translate(&self, event: InputEvent) -> Option<GameAction> {
        match event {
            InputEvent::Quit => Some(GameAction::Quit),
            InputEvent::KeyDown(Key::Escape) => Some(GameAction::Quit),
            InputEvent::KeyDown(_) => None,
            InputEvent::PointerDown { button: PointerButton::Left, x, y } => {
                Some(GameAction::SelectAt(x, y))
            }
            InputEvent::PointerDown { .. } => None,
        }
    }

    /// Polls all pending SDL2 events and returns the actions they map to
    #[cfg(feature = "sdl")]
    pub fn poll_events(&self, event_pump: &mut sdl2::EventPump) -> Vec<GameAction> {
        event_pump
            .poll_iter()
            .filter_map(|event| from_sdl_event(&event))
            .filter_map(|event| self.translate(event))
            .collect()
    }
}

/// Converts an SDL2 event, dropping the kinds the game never looks at
#[cfg(feature = "sdl")]
pub fn from_sdl_event(event: &sdl2::event::Event) -> Option<InputEvent> {
    use sdl2::event::Event;
    use sdl2::keyboard::Keycode;
    use sdl2::mouse::MouseButton;

    match event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::KeyDown { keycode: Some(key), .. } => {
            let key = match *key {
                Keycode::Escape => Key::Escape,
                _ => Key::Other,
            };
            Some(InputEvent::KeyDown(key))
        }
        Event::MouseButtonDown { mouse_btn, x, y, .. } => {
            let button = match mouse_btn {
                MouseButton::Left => PointerButton::Left,
                MouseButton::Right => PointerButton::Right,
                MouseButton::Middle => PointerButton::Middle,
                _ => PointerButton::Other,
            };
            Some(InputEvent::PointerDown { button, x: *x, y: *y })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_events() {
        let input = InputSystem::new();
        assert_eq!(input.translate(InputEvent::Quit), Some(GameAction::Quit));
        assert_eq!(input.translate(InputEvent::KeyDown(Key::Escape)), Some(GameAction::Quit));
    }

    #[test]
    fn test_left_click_selects() {
        let input = InputSystem::new();
        let event = InputEvent::PointerDown { button: PointerButton::Left, x: 140, y: 260 };
        assert_eq!(input.translate(event), Some(GameAction::SelectAt(140, 260)));
    }

    #[test]
    fn test_ignored_events() {
        let input = InputSystem::new();
        assert_eq!(input.translate(InputEvent::KeyDown(Key::Other)), None);

        for button in [PointerButton::Right, PointerButton::Middle, PointerButton::Other] {
            let event = InputEvent::PointerDown { button, x: 140, y: 140 };
            assert_eq!(input.translate(event), None);
        }
    }
}
