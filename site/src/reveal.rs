//! Reveal-on-scroll: a one-way visibility latch with a staggered delay.
//!
//! Cards start hidden. The first time a card intersects the viewport it is
//! marked visible after `(index % 4) * 150ms` and observation stops. Leaving
//! the viewport never hides it again.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Cards per stagger group.
pub const STAGGER_GROUP: usize = 4;

/// Delay step between cards of one group.
pub const STAGGER_STEP: Duration = Duration::from_millis(150);

/// Transition delay of the card at `index`.
pub fn stagger_delay(index: usize) -> Duration {
    STAGGER_STEP * (index % STAGGER_GROUP) as u32
}

/// CSS value for a delay, e.g. `0.15s`.
pub fn css_seconds(delay: Duration) -> String {
    format!("{}s", delay.as_secs_f64())
}

/// Intersection settings shared by every reveal card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserveOptions {
    /// Fraction of the element that must be visible
    pub threshold: f64,
    /// Root margin in CSS shorthand
    pub root_margin: &'static str,
}

/// 10% visible, bottom edge pulled up by 50px.
pub const REVEAL_OPTIONS: ObserveOptions = ObserveOptions {
    threshold: 0.1,
    root_margin: "0px 0px -50px 0px",
};

/// Reply of a visibility callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Watch {
    /// Keep delivering notifications
    Continue,
    /// Stop observing this element
    Stop,
}

/// Per-card latch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealLatch {
    index: usize,
    visible: bool,
}

impl RevealLatch {
    /// Hidden card at position `index` of its grid.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            visible: false,
        }
    }

    /// Has the card been revealed?
    pub fn is_visible(self) -> bool {
        self.visible
    }

    /// Feed one intersection notification. Returns the stagger delay the
    /// first time the card intersects, `None` otherwise.
    pub fn observe(&mut self, intersecting: bool) -> Option<Duration> {
        if self.visible || !intersecting {
            return None;
        }
        self.visible = true;
        Some(stagger_delay(self.index))
    }

    /// Transition delay once revealed.
    pub fn delay(self) -> Option<Duration> {
        self.visible.then(|| stagger_delay(self.index))
    }

    /// Class list of the card element.
    pub fn class(self) -> &'static str {
        if self.visible {
            "industry-card visible"
        } else {
            "industry-card"
        }
    }
}

/// Source of viewport intersection notifications for one element.
pub trait ViewportObserver {
    /// Token of a live observation.
    type Registration;

    /// Begin delivering `is_intersecting` changes to `on_change`. Returns
    /// `None` when the host cannot observe; callers reveal straight away.
    fn observe(
        &self,
        options: ObserveOptions,
        on_change: Box<dyn FnMut(bool) -> Watch>,
    ) -> Option<Self::Registration>;

    /// End an observation. No callback fires afterwards.
    fn unobserve(&self, registration: Self::Registration);
}

/// Reveal lifecycle of one card: observe on mount, latch once, unobserve
/// on unmount (or drop).
pub struct RevealOnScroll<O: ViewportObserver> {
    observer: O,
    latch: Rc<Cell<RevealLatch>>,
    registration: Option<O::Registration>,
}

impl<O: ViewportObserver> RevealOnScroll<O> {
    /// Card at `index`, not yet observed.
    pub fn new(observer: O, index: usize) -> Self {
        Self {
            observer,
            latch: Rc::new(Cell::new(RevealLatch::new(index))),
            registration: None,
        }
    }

    /// Start observing. `on_reveal` runs once, with the stagger delay,
    /// when the card first intersects. Returns `false` if the observer is
    /// unavailable.
    pub fn start(&mut self, on_reveal: impl Fn(Duration) + 'static) -> bool {
        self.stop();
        let latch = Rc::clone(&self.latch);
        let on_change = Box::new(move |intersecting: bool| {
            let mut state = latch.get();
            if state.is_visible() {
                return Watch::Stop;
            }
            match state.observe(intersecting) {
                Some(delay) => {
                    latch.set(state);
                    on_reveal(delay);
                    Watch::Stop
                }
                None => Watch::Continue,
            }
        });
        self.registration = self.observer.observe(REVEAL_OPTIONS, on_change);
        self.registration.is_some()
    }

    /// Unregister the observation.
    pub fn stop(&mut self) {
        if let Some(registration) = self.registration.take() {
            self.observer.unobserve(registration);
        }
    }

    /// Current latch state.
    pub fn latch(&self) -> RevealLatch {
        self.latch.get()
    }

    /// Is an observation registered?
    pub fn is_observing(&self) -> bool {
        self.registration.is_some()
    }
}

impl<O: ViewportObserver> Drop for RevealOnScroll<O> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    use super::*;

    type Callback = Box<dyn FnMut(bool) -> Watch>;

    /// Observer driven by hand; tracks live registrations.
    #[derive(Clone, Default)]
    struct MockObserver {
        callbacks: Rc<RefCell<BTreeMap<u32, Callback>>>,
        next_id: Rc<Cell<u32>>,
        last_options: Rc<Cell<Option<ObserveOptions>>>,
    }

    impl MockObserver {
        fn live(&self) -> usize {
            self.callbacks.borrow().len()
        }

        /// Deliver one notification to every live registration.
        fn notify(&self, intersecting: bool) {
            let ids: Vec<u32> = self.callbacks.borrow().keys().copied().collect();
            for id in ids {
                let Some(mut cb) = self.callbacks.borrow_mut().remove(&id) else {
                    continue;
                };
                if cb(intersecting) == Watch::Continue {
                    self.callbacks.borrow_mut().insert(id, cb);
                }
            }
        }
    }

    impl ViewportObserver for MockObserver {
        type Registration = u32;

        fn observe(&self, options: ObserveOptions, on_change: Callback) -> Option<u32> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.last_options.set(Some(options));
            self.callbacks.borrow_mut().insert(id, on_change);
            Some(id)
        }

        fn unobserve(&self, registration: u32) {
            self.callbacks.borrow_mut().remove(&registration);
        }
    }

    #[test]
    fn stagger_cycles_every_four_cards() {
        assert_eq!(stagger_delay(0), Duration::ZERO);
        assert_eq!(stagger_delay(3), Duration::from_millis(450));
        assert_eq!(stagger_delay(5), Duration::from_millis(150));
        assert_eq!(stagger_delay(8), Duration::ZERO);
        assert_eq!(css_seconds(stagger_delay(5)), "0.15s");
        assert_eq!(css_seconds(stagger_delay(8)), "0s");
    }

    #[test]
    fn latch_fires_once() {
        let mut latch = RevealLatch::new(6);
        assert_eq!(latch.observe(false), None);
        assert!(!latch.is_visible());
        assert_eq!(latch.delay(), None);
        assert_eq!(latch.class(), "industry-card");
        assert_eq!(latch.observe(true), Some(Duration::from_millis(300)));
        assert!(latch.is_visible());
        assert_eq!(latch.observe(true), None);
        assert_eq!(latch.observe(false), None);
        assert!(latch.is_visible());
        assert_eq!(latch.delay(), Some(Duration::from_millis(300)));
        assert_eq!(latch.class(), "industry-card visible");
    }

    #[test]
    fn reveal_uses_the_card_options() {
        let observer = MockObserver::default();
        let mut reveal = RevealOnScroll::new(observer.clone(), 0);
        assert!(reveal.start(|_| {}));
        assert_eq!(observer.last_options.get(), Some(REVEAL_OPTIONS));
    }

    #[test]
    fn first_intersection_reveals_and_stops_observing() {
        let observer = MockObserver::default();
        let revealed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&revealed);
        let mut reveal = RevealOnScroll::new(observer.clone(), 5);
        reveal.start(move |delay| sink.borrow_mut().push(delay));

        observer.notify(false);
        assert!(!reveal.latch().is_visible());
        assert_eq!(observer.live(), 1);

        observer.notify(true);
        assert!(reveal.latch().is_visible());
        assert_eq!(*revealed.borrow(), vec![Duration::from_millis(150)]);
        assert_eq!(observer.live(), 0);

        // Leaving the viewport afterwards changes nothing.
        observer.notify(false);
        assert!(reveal.latch().is_visible());
        assert_eq!(revealed.borrow().len(), 1);
    }

    #[test]
    fn unmount_unregisters_before_any_intersection() {
        let observer = MockObserver::default();
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        let mut reveal = RevealOnScroll::new(observer.clone(), 1);
        reveal.start(move |_| flag.set(true));
        assert!(reveal.is_observing());

        drop(reveal);
        assert_eq!(observer.live(), 0);
        observer.notify(true);
        assert!(!fired.get());
    }

    #[test]
    fn restarting_keeps_a_single_registration() {
        let observer = MockObserver::default();
        let mut reveal = RevealOnScroll::new(observer.clone(), 2);
        reveal.start(|_| {});
        reveal.start(|_| {});
        assert_eq!(observer.live(), 1);
        reveal.stop();
        assert!(!reveal.is_observing());
        assert_eq!(observer.live(), 0);
    }
}
