/// BusyIndicator port for the host's busy spinner
///
/// The indicator is a shared UI resource; callers acquire it through
/// [`BusyGuard`] so it is hidden again on every exit path.
pub trait BusyIndicator {
    fn show(&self);
    fn hide(&self);
}

/// Scoped hold on a busy indicator; shows on creation, hides on drop
pub struct BusyGuard<'a, B: BusyIndicator + ?Sized> {
    indicator: &'a B,
}

impl<'a, B: BusyIndicator + ?Sized> BusyGuard<'a, B> {
    pub fn show(indicator: &'a B) -> Self {
        indicator.show();
        Self { indicator }
    }
}

impl<B: BusyIndicator + ?Sized> Drop for BusyGuard<'_, B> {
    fn drop(&mut self) {
        self.indicator.hide();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingIndicator {
        shown: Cell<usize>,
        hidden: Cell<usize>,
    }

    impl BusyIndicator for CountingIndicator {
        fn show(&self) {
            self.shown.set(self.shown.get() + 1);
        }

        fn hide(&self) {
            self.hidden.set(self.hidden.get() + 1);
        }
    }

    #[test]
    fn test_guard_shows_then_hides_on_drop() {
        let indicator = CountingIndicator::default();
        {
            let _guard = BusyGuard::show(&indicator);
            assert_eq!(indicator.shown.get(), 1);
            assert_eq!(indicator.hidden.get(), 0);
        }
        assert_eq!(indicator.hidden.get(), 1);
    }

    #[test]
    fn test_guard_hides_on_early_return() {
        fn failing(indicator: &CountingIndicator) -> Result<(), String> {
            let _guard = BusyGuard::show(indicator);
            if indicator.shown.get() > 0 {
                return Err("boom".to_string());
            }
            Ok(())
        }

        let indicator = CountingIndicator::default();
        assert!(failing(&indicator).is_err());
        assert_eq!(indicator.shown.get(), 1);
        assert_eq!(indicator.hidden.get(), 1);
    }
}
