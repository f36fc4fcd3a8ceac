/// Clickable button surface
use crossterm::event::{Event, MouseEventKind};

use poly3d_core::Polyhedron;

/// Effect a button triggers on the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Reverse,
    SpeedUp,
    SlowDown,
    RemoveLast,
    Spawn(Polyhedron),
}

/// A rectangular hit region with a label. Buttons hold no mutable state;
/// the loop applies the action when one activates.
#[derive(Debug, Clone, Copy)]
pub struct Button {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub label: &'static str,
    pub action: Action,
}

impl Button {
    pub const fn new(
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        label: &'static str,
        action: Action,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label,
            action,
        }
    }

    /// Containment with exclusive far edges.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// A button activates when the pointer is inside it and any event in
    /// this frame's batch is a press. The press itself does not have to land
    /// inside the rectangle; hover plus a press anywhere in the batch counts.
    pub fn is_activated(&self, pointer: (i32, i32), events: &[Event]) -> bool {
        self.contains(pointer.0, pointer.1)
            && events.iter().any(|event| {
                matches!(event, Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)))
            })
    }
}

/// The demo's control surface, in canvas coordinates.
pub fn layout() -> Vec<Button> {
    vec![
        Button::new(50, 50, 120, 40, "Change Direction", Action::Reverse),
        Button::new(200, 50, 80, 40, "Velocity ++", Action::SpeedUp),
        Button::new(310, 50, 80, 40, "Velocity --", Action::SlowDown),
        Button::new(410, 50, 100, 40, "Delete objects", Action::RemoveLast),
        Button::new(50, 120, 80, 40, "Add cube", Action::Spawn(Polyhedron::Cube)),
        Button::new(
            50,
            180,
            120,
            40,
            "Add Tetrahedron",
            Action::Spawn(Polyhedron::Tetrahedron),
        ),
        Button::new(
            50,
            240,
            120,
            40,
            "Add Octahedron",
            Action::Spawn(Polyhedron::Octahedron),
        ),
        Button::new(
            50,
            300,
            120,
            40,
            "Add Dodecahedron",
            Action::Spawn(Polyhedron::Dodecahedron),
        ),
        Button::new(
            50,
            360,
            120,
            40,
            "Add Icosahedron",
            Action::Spawn(Polyhedron::Icosahedron),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent};

    fn press_at(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn moved() -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn contains_is_inclusive_near_exclusive_far() {
        let button = Button::new(50, 50, 120, 40, "test", Action::Reverse);
        assert!(button.contains(50, 50));
        assert!(button.contains(169, 89));
        assert!(!button.contains(49, 60)); // left of the rect
        assert!(!button.contains(170, 60)); // right edge is exclusive
        assert!(!button.contains(60, 49)); // above the rect
        assert!(!button.contains(60, 90)); // bottom edge is exclusive
    }

    #[test]
    fn activation_needs_hover_and_a_press_in_the_batch() {
        let button = Button::new(50, 50, 120, 40, "test", Action::Reverse);
        assert!(button.is_activated((60, 60), &[press_at(0, 0)]));
        assert!(!button.is_activated((60, 60), &[moved()]));
        assert!(!button.is_activated((60, 60), &[]));
        assert!(!button.is_activated((10, 10), &[press_at(0, 0)]));
    }

    #[test]
    fn press_anywhere_in_the_batch_activates_a_hovered_button() {
        // Only the tracked pointer matters; the press event's own
        // coordinates are not consulted.
        let button = Button::new(50, 50, 120, 40, "test", Action::Reverse);
        assert!(button.is_activated((60, 60), &[moved(), press_at(999, 999)]));
    }

    #[test]
    fn layout_spawns_every_solid() {
        let buttons = layout();
        assert_eq!(buttons.len(), 9);
        for kind in Polyhedron::ALL {
            assert!(
                buttons
                    .iter()
                    .any(|button| button.action == Action::Spawn(kind)),
                "no spawn button for {}",
                kind.label()
            );
        }
    }
}
