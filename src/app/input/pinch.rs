//! Two-finger pinch distance tracking

/// Remembers the separation of the two tracked touch contacts between ticks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PinchTracker {
    last_distance: Option<f32>,
}

impl PinchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Separation seen on the previous tick, if a pinch is in progress
    pub fn last_distance(&self) -> Option<f32> {
        self.last_distance
    }

    /// Forget the baseline
    pub fn reset(&mut self) {
        self.last_distance = None;
    }

    /// Feed the pressed touch contacts for this tick
    ///
    /// Only the first two contacts are paired; extras are ignored. Returns the
    /// change in separation since the previous tick, or `None` when there is
    /// no pinch or this tick only establishes the baseline.
    pub fn sample<I>(&mut self, contacts: I) -> Option<f32>
    where
        I: IntoIterator<Item = [f32; 2]>,
    {
        let mut contacts = contacts.into_iter();
        let (Some(a), Some(b)) = (contacts.next(), contacts.next()) else {
            self.last_distance = None;
            return None;
        };

        let distance = (b[0] - a[0]).hypot(b[1] - a[1]);
        let change = self.last_distance.map(|last| distance - last);
        self.last_distance = Some(distance);
        change
    }
}
