#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// Input delivered to the active scene, positions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { button: PointerButton, pos: (f32, f32) },
    PointerUp { button: PointerButton, pos: (f32, f32) },
    PointerMove { pos: (f32, f32) },
    Quit,
}

impl InputEvent {
    /// Position of a left-button press, the only event scenes treat as a click.
    pub fn left_click(&self) -> Option<(f32, f32)> {
        match self {
            InputEvent::PointerDown { button: PointerButton::Left, pos } => Some(*pos),
            _ => None,
        }
    }
}
