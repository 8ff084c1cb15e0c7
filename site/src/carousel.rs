//! Carousel state machine and autoplay timer lifecycle.
//!
//! [`CarouselState`] holds the active index and every transition the widget
//! knows. [`AutoPlay`] owns the one repeating timer of a widget instance;
//! the timer itself comes from a [`Ticker`], so the browser uses
//! `setInterval` while tests count timers with a mock.

use std::rc::Rc;
use std::time::Duration;

/// Autoplay period when nothing else is configured.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

/// Active slide of a carousel with `len` slides.
///
/// `active` is always in `0..len` for `len >= 1`. An empty carousel keeps
/// `active == 0` and ignores every transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    active: usize,
    len: usize,
}

impl CarouselState {
    /// Fresh state, first slide active.
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    /// Index of the active slide.
    pub fn active(self) -> usize {
        self.active
    }

    /// Number of slides.
    pub fn len(self) -> usize {
        self.len
    }

    /// True when there is nothing to show.
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Index before the active one, wrapping.
    pub fn prev_index(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.active + self.len - 1) % self.len
    }

    /// Index after the active one, wrapping.
    pub fn next_index(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.active + 1) % self.len
    }

    /// Timer tick.
    pub fn tick(&mut self) {
        self.next();
    }

    /// Explicit "next" action.
    pub fn next(&mut self) {
        self.active = self.next_index();
    }

    /// Explicit "previous" action.
    pub fn prev(&mut self) {
        self.active = self.prev_index();
    }

    /// Click on a slide: only the neighbours of the active slide are
    /// selectable. Returns whether the index changed.
    pub fn select_adjacent(&mut self, index: usize) -> bool {
        if self.is_empty() || index == self.active {
            return false;
        }
        if index == self.prev_index() || index == self.next_index() {
            self.active = index;
            return true;
        }
        false
    }

    /// Click on a dot indicator: any slide is selectable. Returns whether
    /// the selection was accepted.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.active = index;
        true
    }

    /// Signed distance of `index` from the active slide, normalised into
    /// `-(len / 2) ..= (len - 1) / 2`. The previous neighbour is always `-1`.
    pub fn offset(self, index: usize) -> isize {
        if self.is_empty() {
            return 0;
        }
        let len = self.len as isize;
        let raw = (index as isize - self.active as isize).rem_euclid(len);
        if raw > (len - 1) / 2 { raw - len } else { raw }
    }

    /// Visual slot of `index`.
    pub fn position(self, index: usize) -> SlidePosition {
        SlidePosition::from_offset(self.offset(index))
    }
}

/// Where a slide sits relative to the active one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlidePosition {
    /// The active slide, front and centre
    Active,
    /// Left neighbour
    Prev,
    /// Right neighbour
    Next,
    /// Everything else, tucked behind; carries the signed offset
    Hidden(isize),
}

impl SlidePosition {
    /// Classify a signed offset.
    pub fn from_offset(offset: isize) -> Self {
        match offset {
            0 => SlidePosition::Active,
            -1 => SlidePosition::Prev,
            1 => SlidePosition::Next,
            other => SlidePosition::Hidden(other),
        }
    }

    /// Class list for the slide element.
    pub fn class(self) -> &'static str {
        match self {
            SlidePosition::Active => "carousel-slide active",
            SlidePosition::Prev => "carousel-slide prev",
            SlidePosition::Next => "carousel-slide next",
            SlidePosition::Hidden(_) => "carousel-slide",
        }
    }

    /// Inline transform/opacity/stacking for the slide element.
    pub fn style(self) -> String {
        let (shift, scale, opacity, z) = match self {
            SlidePosition::Active => (0, 1.0, 1.0, 3),
            SlidePosition::Prev => (-60, 0.8, 0.6, 2),
            SlidePosition::Next => (60, 0.8, 0.6, 2),
            SlidePosition::Hidden(offset) => (offset.signum() as i32 * 90, 0.6, 0.0, 1),
        };
        format!(
            "transform: translateX(calc(-50% + {shift}%)) scale({scale}); opacity: {opacity}; z-index: {z};"
        )
    }
}

/// Source of repeating timers.
pub trait Ticker {
    /// Token identifying a running timer.
    type Handle;

    /// Start calling `on_tick` every `period`.
    fn start(&self, period: Duration, on_tick: Rc<dyn Fn()>) -> Self::Handle;

    /// Stop a timer started by [`Ticker::start`].
    fn stop(&self, handle: Self::Handle);
}

/// The autoplay timer of one carousel instance.
///
/// At most one timer is alive at any time: [`AutoPlay::start`] clears a
/// running timer before starting a new one, and dropping the value clears
/// it too.
pub struct AutoPlay<T: Ticker> {
    ticker: T,
    period: Duration,
    on_tick: Rc<dyn Fn()>,
    running: Option<T::Handle>,
}

impl<T: Ticker> AutoPlay<T> {
    /// Wire a tick callback to a ticker. Nothing runs until
    /// [`AutoPlay::start`].
    pub fn new(ticker: T, period: Duration, on_tick: impl Fn() + 'static) -> Self {
        Self {
            ticker,
            period,
            on_tick: Rc::new(on_tick),
            running: None,
        }
    }

    /// Start ticking (mount, hover leave).
    pub fn start(&mut self) {
        self.stop();
        let handle = self.ticker.start(self.period, Rc::clone(&self.on_tick));
        self.running = Some(handle);
    }

    /// Stop ticking (unmount, hover enter).
    pub fn stop(&mut self) {
        if let Some(handle) = self.running.take() {
            self.ticker.stop(handle);
        }
    }

    /// Explicit user navigation: a full period before the next tick.
    pub fn restart(&mut self) {
        self.start();
    }

    /// Is a timer alive?
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }
}

impl<T: Ticker> Drop for AutoPlay<T> {
    fn drop(&mut self) {
        self.stop();
    }
}
