//! One-shot fade/slide-in of elements as they scroll into view.
//!
//! Elements opt in with the [`SCROLL_TARGET_CLASS`] class. A registered
//! element is *pending* until it first crosses the visibility threshold, at
//! which point it is *revealed* for good. Reveal state lives on the element's
//! own class list, so re-scanning after new content is injected never picks up
//! an element twice.

pub const SCROLL_TARGET_CLASS: &str = "scroll-target";
pub const SCROLL_TARGET_SELECTOR: &str = ".scroll-target";
/// Set on registration. An element carrying it already has an observer.
pub const OBSERVED_CLASS: &str = "scroll-observed";
pub const DEFAULT_THRESHOLD: f64 = 0.15;

/// Hidden, offset and ready to transition.
pub const PENDING_CLASSES: [&str; 5] = [
    "opacity-0",
    "translate-y-10",
    "transition-all",
    "duration-700",
    "ease-out",
];
pub const REVEALED_CLASSES: [&str; 2] = ["opacity-100", "translate-y-0"];
/// Removed on reveal; the transition classes stay so the change animates.
pub const HIDING_CLASSES: [&str; 2] = ["opacity-0", "translate-y-10"];

/// The slice of an element the reveal controller needs.
pub trait RevealElement {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

pub fn reveal_state<E: RevealElement>(el: &E) -> RevealState {
    if el.has_class(REVEALED_CLASSES[0]) {
        RevealState::Revealed
    } else {
        RevealState::Pending
    }
}

/// What an intersection report did to its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intersection {
    /// Not visible enough yet; keep observing.
    Pending,
    Revealed,
    /// Some other observer got there first.
    AlreadyRevealed,
}

impl Intersection {
    pub fn should_unobserve(self) -> bool {
        !matches!(self, Intersection::Pending)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealController {
    threshold: f64,
}

impl RevealController {
    /// Out-of-range thresholds are clamped to `0.0..=1.0`; NaN and the
    /// infinities fall back to [`DEFAULT_THRESHOLD`].
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_THRESHOLD
        };
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Prepares an element for observation. Returns `false` for elements that
    /// were already revealed or are watched by an earlier scan; neither must
    /// be observed again.
    pub fn register<E: RevealElement>(&self, el: &E) -> bool {
        if reveal_state(el) == RevealState::Revealed || el.has_class(OBSERVED_CLASS) {
            return false;
        }
        for class in PENDING_CLASSES {
            el.add_class(class);
        }
        el.add_class(OBSERVED_CLASS);
        true
    }

    /// Handles one intersection report. Both revealed outcomes mean the
    /// caller should stop observing the element.
    pub fn on_intersection<E: RevealElement>(
        &self,
        el: &E,
        is_intersecting: bool,
        ratio: f64,
    ) -> Intersection {
        if !is_intersecting || ratio < self.threshold {
            return Intersection::Pending;
        }
        if reveal_state(el) == RevealState::Revealed {
            return Intersection::AlreadyRevealed;
        }
        for class in REVEALED_CLASSES {
            el.add_class(class);
        }
        for class in HIDING_CLASSES {
            el.remove_class(class);
        }
        Intersection::Revealed
    }
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeElement {
        classes: RefCell<Vec<String>>,
        writes: RefCell<usize>,
    }

    impl FakeElement {
        fn with_classes(classes: &[&str]) -> Self {
            Self {
                classes: RefCell::new(classes.iter().map(|s| s.to_string()).collect()),
                writes: RefCell::new(0),
            }
        }

        fn writes(&self) -> usize {
            *self.writes.borrow()
        }
    }

    impl RevealElement for FakeElement {
        fn has_class(&self, class: &str) -> bool {
            self.classes.borrow().iter().any(|c| c == class)
        }

        fn add_class(&self, class: &str) {
            *self.writes.borrow_mut() += 1;
            if !self.has_class(class) {
                self.classes.borrow_mut().push(class.to_string());
            }
        }

        fn remove_class(&self, class: &str) {
            *self.writes.borrow_mut() += 1;
            self.classes.borrow_mut().retain(|c| c != class);
        }
    }

    #[test]
    fn test_register_marks_pending() {
        let controller = RevealController::default();
        let el = FakeElement::with_classes(&[SCROLL_TARGET_CLASS]);
        assert!(controller.register(&el));
        for class in PENDING_CLASSES {
            assert!(el.has_class(class), "missing {class}");
        }
        assert_eq!(reveal_state(&el), RevealState::Pending);
    }

    #[test]
    fn test_reveal_at_threshold() {
        let controller = RevealController::new(0.15);
        let el = FakeElement::with_classes(&[SCROLL_TARGET_CLASS]);
        controller.register(&el);

        // a single pixel of overlap is not enough
        assert_eq!(controller.on_intersection(&el, true, 0.01), Intersection::Pending);
        assert_eq!(reveal_state(&el), RevealState::Pending);

        assert_eq!(controller.on_intersection(&el, true, 0.15), Intersection::Revealed);
        assert_eq!(reveal_state(&el), RevealState::Revealed);
        assert!(el.has_class("opacity-100"));
        assert!(el.has_class("translate-y-0"));
        assert!(!el.has_class("opacity-0"));
        assert!(!el.has_class("translate-y-10"));
        assert!(el.has_class("transition-all"));
    }

    #[test]
    fn test_not_intersecting_is_ignored() {
        let controller = RevealController::default();
        let el = FakeElement::default();
        controller.register(&el);
        let outcome = controller.on_intersection(&el, false, 1.0);
        assert_eq!(outcome, Intersection::Pending);
        assert!(!outcome.should_unobserve());
        assert_eq!(reveal_state(&el), RevealState::Pending);
    }

    #[test]
    fn test_reveal_happens_once() {
        let controller = RevealController::default();
        let el = FakeElement::default();
        controller.register(&el);
        assert_eq!(controller.on_intersection(&el, true, 0.5), Intersection::Revealed);
        let writes = el.writes();

        assert_eq!(controller.on_intersection(&el, true, 0.9), Intersection::AlreadyRevealed);
        assert_eq!(controller.on_intersection(&el, false, 0.0), Intersection::Pending);
        assert_eq!(controller.on_intersection(&el, true, 1.0), Intersection::AlreadyRevealed);
        assert_eq!(el.writes(), writes);
        assert_eq!(reveal_state(&el), RevealState::Revealed);
    }

    #[test]
    fn test_rescan_skips_revealed() {
        let controller = RevealController::default();
        let revealed = FakeElement::default();
        controller.register(&revealed);
        controller.on_intersection(&revealed, true, 1.0);

        let fresh = FakeElement::default();
        let registered = [&revealed, &fresh]
            .into_iter()
            .filter(|el| controller.register(*el))
            .count();
        assert_eq!(registered, 1);
        assert!(!revealed.has_class("opacity-0"));
        assert!(fresh.has_class("opacity-0"));
    }

    #[test]
    fn test_second_scan_skips_observed() {
        let first_scan = RevealController::default();
        let second_scan = RevealController::default();
        let below_fold = FakeElement::with_classes(&[SCROLL_TARGET_CLASS]);

        assert!(first_scan.register(&below_fold));
        assert!(!second_scan.register(&below_fold));
        assert!(below_fold.has_class(OBSERVED_CLASS));
        assert_eq!(reveal_state(&below_fold), RevealState::Pending);
    }

    #[test]
    fn test_every_observer_lets_go_once_revealed() {
        // an element that ended up with two observers anyway
        let a = RevealController::default();
        let b = RevealController::default();
        let el = FakeElement::default();
        a.register(&el);

        let first = a.on_intersection(&el, true, 0.5);
        let second = b.on_intersection(&el, true, 0.5);
        assert_eq!(first, Intersection::Revealed);
        assert_eq!(second, Intersection::AlreadyRevealed);
        assert!(first.should_unobserve());
        assert!(second.should_unobserve());
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(RevealController::new(3.0).threshold(), 1.0);
        assert_eq!(RevealController::new(-1.0).threshold(), 0.0);
    }

    #[test]
    fn test_non_finite_threshold_uses_default() {
        assert_eq!(RevealController::new(f64::NAN).threshold(), DEFAULT_THRESHOLD);
        assert_eq!(RevealController::new(f64::INFINITY).threshold(), DEFAULT_THRESHOLD);
        assert_eq!(RevealController::new(f64::NEG_INFINITY).threshold(), DEFAULT_THRESHOLD);

        let controller = RevealController::new(f64::NAN);
        let el = FakeElement::default();
        controller.register(&el);
        assert_eq!(controller.on_intersection(&el, true, 0.01), Intersection::Pending);
        assert_eq!(reveal_state(&el), RevealState::Pending);
    }
}
