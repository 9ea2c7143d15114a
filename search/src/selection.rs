//! Keyboard selection over a result list.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Highlighted result, or none.
///
/// Movement clamps at both ends: down stops at the last result, up stops at
/// "no selection". There is no wraparound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection(Option<usize>);

impl Selection {
    pub const NONE: Selection = Selection(None);

    pub fn get(&self) -> Option<usize> {
        self.0
    }

    /// Selected position, or `-1` for no selection.
    pub fn index(&self) -> isize {
        self.0.map_or(-1, |i| i as isize)
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    pub fn step(&mut self, direction: Direction, len: usize) {
        match direction {
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(len),
        }
    }

    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            self.0 = None;
            return;
        }
        self.0 = Some(match self.0 {
            None => 0,
            Some(i) => (i + 1).min(len - 1),
        });
    }

    pub fn move_up(&mut self) {
        self.0 = match self.0 {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    pub fn reset(&mut self) {
        self.0 = None;
    }
}
