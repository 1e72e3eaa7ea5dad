//! Raw input state

use std::collections::HashSet;

use indexmap::IndexMap;

use super::events::KeyCode;

/// Touch slots available when none are configured
pub const DEFAULT_TOUCH_POINTERS: usize = 3;

/// Identity of a pointer contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerId {
    Mouse,
    Touch(u64),
}

impl PointerId {
    pub fn is_touch(self) -> bool {
        matches!(self, Self::Touch(_))
    }
}

/// Last known state of one pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    /// Logical screen position
    pub position: [f32; 2],
    pub is_down: bool,
    /// Whether the contact came from a touch screen
    pub was_touch: bool,
}

/// Pointers known to the input source, in activation order
///
/// Holds the mouse plus up to `touch_slots` touch contacts. A touch that
/// arrives while every slot is taken is rejected.
#[derive(Debug, Clone)]
pub struct PointerTable {
    pointers: IndexMap<PointerId, Pointer>,
    touch_slots: usize,
}

impl PointerTable {
    pub fn new(touch_slots: usize) -> Self {
        Self {
            pointers: IndexMap::new(),
            touch_slots,
        }
    }

    pub fn get(&self, id: PointerId) -> Option<&Pointer> {
        self.pointers.get(&id)
    }

    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }

    fn touch_count(&self) -> usize {
        self.pointers.keys().filter(|id| id.is_touch()).count()
    }

    /// Record a press; returns false when the contact was rejected
    pub fn press(&mut self, id: PointerId, position: [f32; 2]) -> bool {
        if id.is_touch()
            && !self.pointers.contains_key(&id)
            && self.touch_count() >= self.touch_slots
        {
            return false;
        }
        let pointer = self.pointers.entry(id).or_insert(Pointer {
            position,
            is_down: false,
            was_touch: id.is_touch(),
        });
        pointer.position = position;
        pointer.is_down = true;
        true
    }

    /// Record movement; returns the updated pointer if it is tracked
    ///
    /// The mouse is tracked from its first movement; touches only once pressed.
    pub fn move_to(&mut self, id: PointerId, position: [f32; 2]) -> Option<Pointer> {
        if id == PointerId::Mouse {
            self.pointers.entry(id).or_insert(Pointer {
                position,
                is_down: false,
                was_touch: false,
            });
        }
        let pointer = self.pointers.get_mut(&id)?;
        pointer.position = position;
        Some(*pointer)
    }

    /// Record a release; touches leave the table, the mouse stays tracked
    pub fn release(&mut self, id: PointerId, position: Option<[f32; 2]>) -> Option<Pointer> {
        let pointer = self.pointers.get_mut(&id)?;
        if let Some(position) = position {
            pointer.position = position;
        }
        pointer.is_down = false;
        let released = *pointer;
        if id.is_touch() {
            self.pointers.shift_remove(&id);
        }
        Some(released)
    }

    /// Positions of pressed touch contacts, in the order they were activated
    pub fn active_touches(&self) -> impl Iterator<Item = [f32; 2]> + '_ {
        self.pointers
            .values()
            .filter(|p| p.is_down && p.was_touch)
            .map(|p| p.position)
    }
}

impl Default for PointerTable {
    fn default() -> Self {
        Self::new(DEFAULT_TOUCH_POINTERS)
    }
}

/// Raw input state shared with handlers
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub pointers: PointerTable,
    pub held_keys: HashSet<KeyCode>,
}

impl InputState {
    pub fn new(touch_slots: usize) -> Self {
        Self {
            pointers: PointerTable::new(touch_slots),
            held_keys: HashSet::new(),
        }
    }

    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.held_keys.contains(&key)
    }
}
