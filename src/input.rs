use sdl2::event::Event;
use sdl2::keyboard::{KeyboardState, Keycode, Scancode};

use crate::game::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Command(Command),
    Quit,
}

/// Translates one frame of SDL input into game actions, in the order the
/// game should apply them.
pub struct InputHandler {
    quit_requested: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        InputHandler {
            quit_requested: false,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn process_event(&mut self, event: &Event) -> Option<InputAction> {
        let action = match event {
            Event::Quit { .. } => Some(InputAction::Quit),
            Event::KeyDown { keycode: Some(keycode), .. } => match keycode {
                Keycode::Left => Some(InputAction::Command(Command::MoveLeft)),
                Keycode::Right => Some(InputAction::Command(Command::MoveRight)),
                Keycode::R => Some(InputAction::Command(Command::Restart)),
                Keycode::Escape => Some(InputAction::Quit),
                _ => None,
            },
            _ => None,
        };

        if action == Some(InputAction::Quit) {
            self.quit_requested = true;
        }
        action
    }

    /// Held arrow keys move the car every frame on top of key-down events.
    /// When both are held both moves are emitted, left first, and the lane
    /// clamp settles the result.
    pub fn held_actions(left_held: bool, right_held: bool) -> Vec<InputAction> {
        let mut actions = Vec::new();
        if left_held {
            actions.push(InputAction::Command(Command::MoveLeft));
        }
        if right_held {
            actions.push(InputAction::Command(Command::MoveRight));
        }
        actions
    }

    /// All actions for one frame: queued events first, then held keys.
    pub fn collect_frame<I>(&mut self, events: I, keyboard: &KeyboardState) -> Vec<InputAction>
    where
        I: IntoIterator<Item = Event>,
    {
        let mut actions: Vec<InputAction> = events
            .into_iter()
            .filter_map(|event| self.process_event(&event))
            .collect();

        actions.extend(Self::held_actions(
            keyboard.is_scancode_pressed(Scancode::Left),
            keyboard.is_scancode_pressed(Scancode::Right),
        ));
        actions
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
