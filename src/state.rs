//! Local state of the product detail view.

/// Smallest quantity the stepper allows.
pub const MIN_QUANTITY: u32 = 1;

/// Quantity and favorite flag owned by one product detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    quantity: u32,
    is_favorite: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            quantity: MIN_QUANTITY,
            is_favorite: false,
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    /// Add one unit. Saturates at `u32::MAX`.
    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Remove one unit. Returns false (and changes nothing) at the minimum.
    pub fn decrement(&mut self) -> bool {
        if self.quantity > MIN_QUANTITY {
            self.quantity -= 1;
            true
        } else {
            false
        }
    }

    pub fn toggle_favorite(&mut self) {
        self.is_favorite = !self.is_favorite;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert_eq!(state.quantity(), 1);
        assert!(!state.is_favorite());
        assert_eq!(ViewState::default(), state);
    }

    #[test]
    fn test_increments_count_up_from_one() {
        for n in [0u32, 1, 5, 100] {
            let mut state = ViewState::new();
            for _ in 0..n {
                state.increment();
            }
            assert_eq!(state.quantity(), 1 + n);
        }
    }

    #[test]
    fn test_decrement_never_below_one() {
        let mut state = ViewState::new();
        state.increment();
        state.increment();
        let mut moved = 0;
        for _ in 0..10 {
            if state.decrement() {
                moved += 1;
            }
            assert!(state.quantity() >= MIN_QUANTITY);
        }
        assert_eq!(moved, 2);
        assert_eq!(state.quantity(), 1);
    }

    #[test]
    fn test_decrement_at_one_is_noop() {
        let mut state = ViewState::new();
        assert!(!state.decrement());
        assert_eq!(state, ViewState::new());
    }

    #[test]
    fn test_increment_saturates() {
        let mut state = ViewState {
            quantity: u32::MAX,
            is_favorite: false,
        };
        state.increment();
        assert_eq!(state.quantity(), u32::MAX);
    }

    #[test]
    fn test_toggle_favorite_twice_restores() {
        let mut state = ViewState::new();
        state.toggle_favorite();
        assert!(state.is_favorite());
        state.toggle_favorite();
        assert!(!state.is_favorite());
    }
}
