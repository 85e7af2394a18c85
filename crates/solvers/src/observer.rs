/// Receives solver events and decides how the iteration should proceed.
///
/// `observe` returns `Some(action)` to request a solver-specific action, or
/// `None` to let the solver continue unchanged.
///
/// Closures of the form `FnMut(&E) -> Option<A>` implement `Observer`, and
/// `()` is a no-op observer.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_observer_never_acts() {
        let action: Option<()> = ().observe(&42);
        assert!(action.is_none());
    }

    #[test]
    fn closure_observer_sees_each_event() {
        let mut seen = Vec::new();
        let mut observer = |event: &i32| -> Option<&'static str> {
            seen.push(*event);
            (*event > 1).then_some("stop")
        };

        assert_eq!(observer.observe(&1), None);
        assert_eq!(observer.observe(&2), Some("stop"));
        assert_eq!(seen, [1, 2]);
    }
}
