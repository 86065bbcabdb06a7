/// Watches the events a solver emits while it steps.
///
/// An observer can record samples as they are produced or stop a long
/// integration once it has seen enough. Returning `Some(action)` asks the
/// solver to act; `None` lets it carry on.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. `()` is the observer
/// that never acts.
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
        let action = Observer::<u32, ()>::observe(&mut (), &42);
        assert!(action.is_none());
    }

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let mut observer = |event: &usize| {
            seen.push(*event);
            (*event >= 2).then_some("stop")
        };

        assert_eq!(observer.observe(&1_usize), None);
        assert_eq!(observer.observe(&2_usize), Some("stop"));
        drop(observer);

        assert_eq!(seen, vec![1, 2]);
    }
}
