use crate::observer::{Publisher, Subscription};
use crate::state::StepperState;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use tokio::sync::watch;
use tracing::{debug, trace};

/// Owns a [`StepperState`] and notifies subscribers when it changes.
///
/// The controller never sees the step list, so nothing is clamped:
/// [`next`](Self::next) can run past the last step and
/// [`previous`](Self::previous) below zero. Both are valid "no step active"
/// states and simply render without visible content. None of the operations
/// can fail.
///
/// Notifications run synchronously on the calling thread. Every navigation
/// call publishes a state, even one equal to the current state; only a
/// [`set_failed`](Self::set_failed) that changes nothing is skipped.
///
/// A subscriber may mutate the controller from inside its callback. The new
/// state is queued and delivered after the running notification has reached
/// every subscriber, so all of them see states in the order they were made.
///
/// # Examples
///
/// ```
/// use ayumi::StepperController;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let controller = StepperController::new();
/// let seen = Rc::new(Cell::new(-1));
///
/// let sink = Rc::clone(&seen);
/// let _subscription = controller.subscribe(move |state| sink.set(state.current_step()));
///
/// controller.next();
/// controller.next();
/// assert_eq!(seen.get(), 2);
///
/// controller.dispose();
/// controller.previous();
/// assert_eq!(seen.get(), 2);
/// ```
pub struct StepperController {
    state: RefCell<StepperState>,
    publisher: Publisher<StepperState>,
    watch: RefCell<Option<watch::Sender<StepperState>>>,
    pending: RefCell<VecDeque<StepperState>>,
    notifying: Cell<bool>,
}

impl fmt::Debug for StepperController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepperController")
            .field("state", &*self.state.borrow())
            .field("publisher", &self.publisher)
            .finish()
    }
}

impl Default for StepperController {
    fn default() -> Self {
        Self::new()
    }
}

impl StepperController {
    /// Creates a controller positioned on the first step.
    pub fn new() -> Self {
        Self::with_state(StepperState::default())
    }

    pub fn with_state(initial: StepperState) -> Self {
        let (sender, _) = watch::channel(initial.clone());
        Self {
            state: RefCell::new(initial),
            publisher: Publisher::new(),
            watch: RefCell::new(Some(sender)),
            pending: RefCell::new(VecDeque::new()),
            notifying: Cell::new(false),
        }
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> StepperState {
        self.state.borrow().clone()
    }

    pub fn current_step(&self) -> i64 {
        self.state.borrow().current_step()
    }

    /// Advances by one step.
    pub fn next(&self) {
        let state = self.state();
        self.update("next", state.with_current_step(state.current_step().saturating_add(1)));
    }

    /// Goes back one step. May go negative.
    pub fn previous(&self) {
        let state = self.state();
        self.update(
            "previous",
            state.with_current_step(state.current_step().saturating_sub(1)),
        );
    }

    /// Moves to `index` verbatim, without bounds checks.
    pub fn jump_to(&self, index: i64) {
        let state = self.state();
        self.update("jump_to", state.with_current_step(index));
    }

    /// Marks or clears the failure flag of `index`. Setting a flag to the
    /// value it already has notifies nobody.
    pub fn set_failed(&self, index: i64, failed: bool) {
        let state = self.state();
        if state.is_failed(index) == failed {
            trace!(index, failed, "Failure flag unchanged");
            return;
        }
        self.update("set_failed", state.with_failed(index, failed));
    }

    /// Registers a callback invoked with every new state.
    ///
    /// Callbacks are expected to schedule a re-render rather than render
    /// inline.
    pub fn subscribe(&self, callback: impl Fn(&StepperState) + 'static) -> Subscription {
        self.publisher.subscribe(callback)
    }

    /// Returns a channel that always holds the latest state, for async
    /// consumers. The channel closes when the controller is disposed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ayumi::StepperController;
    ///
    /// let controller = StepperController::new();
    /// let mut changes = controller.watch();
    ///
    /// controller.jump_to(3);
    /// tokio_test::block_on(changes.changed()).expect("controller alive");
    /// assert_eq!(changes.borrow().current_step(), 3);
    ///
    /// controller.dispose();
    /// assert!(tokio_test::block_on(changes.changed()).is_err());
    /// ```
    pub fn watch(&self) -> watch::Receiver<StepperState> {
        match self.watch.borrow().as_ref() {
            Some(sender) => sender.subscribe(),
            None => {
                let (_, receiver) = watch::channel(self.state());
                receiver
            }
        }
    }

    /// Detaches every subscriber and closes the watch channel.
    ///
    /// The state stays readable and mutable afterwards; changes just reach
    /// nobody.
    pub fn dispose(&self) {
        self.publisher.dispose();
        self.watch.borrow_mut().take();
        debug!("Stepper controller disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.publisher.is_disposed()
    }

    fn update(&self, operation: &'static str, next: StepperState) {
        *self.state.borrow_mut() = next.clone();
        debug!(
            operation,
            current_step = next.current_step(),
            failed_steps = ?next.failed_steps().collect::<Vec<_>>(),
            "Stepper state changed"
        );

        if let Some(sender) = self.watch.borrow().as_ref() {
            sender.send_replace(next.clone());
        }
        self.pending.borrow_mut().push_back(next);

        if self.notifying.replace(true) {
            trace!(operation, "Queued reentrant update");
            return;
        }
        loop {
            let queued = self.pending.borrow_mut().pop_front();
            match queued {
                Some(state) => self.publisher.publish(&state),
                None => break,
            }
        }
        self.notifying.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn recorder(controller: &StepperController) -> Rc<RefCell<Vec<StepperState>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let _ = controller.subscribe(move |state| sink.borrow_mut().push(state.clone()));
        log
    }

    #[test]
    fn test_navigation_is_unclamped() {
        let controller = StepperController::new();
        controller.previous();
        assert_eq!(controller.current_step(), -1);

        controller.jump_to(99);
        controller.next();
        assert_eq!(controller.current_step(), 100);
    }

    #[test]
    fn test_one_notification_per_change() {
        let controller = StepperController::new();
        let log = recorder(&controller);

        controller.next();
        controller.set_failed(1, true);
        controller.previous();

        let states = log.borrow();
        assert_eq!(states.len(), 3);
        assert_eq!(states[0], StepperState::new(1));
        assert_eq!(states[1], StepperState::new(1).with_failed(1, true));
        assert_eq!(states[2], StepperState::new(0).with_failed(1, true));
    }

    #[test]
    fn test_navigation_always_publishes() {
        let controller = StepperController::with_state(StepperState::new(2));
        let log = recorder(&controller);

        controller.jump_to(2);
        assert_eq!(*log.borrow(), vec![StepperState::new(2)]);

        let capped = StepperController::with_state(StepperState::new(i64::MAX));
        let capped_log = recorder(&capped);
        capped.next();
        assert_eq!(capped_log.borrow().len(), 1);
    }

    #[test]
    fn test_unchanged_failure_flag_is_not_published() {
        let controller = StepperController::with_state(StepperState::new(2));
        let log = recorder(&controller);

        controller.set_failed(0, false);
        assert!(log.borrow().is_empty());

        controller.set_failed(0, true);
        controller.set_failed(0, true);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_reentrant_updates_arrive_in_order() {
        let controller = Rc::new(StepperController::new());

        let weak = Rc::downgrade(&controller);
        let _ = controller.subscribe(move |state| {
            if state.current_step() == 1 {
                if let Some(controller) = weak.upgrade() {
                    controller.next();
                }
            }
        });
        let log = recorder(&controller);

        controller.next();

        let steps: Vec<_> = log.borrow().iter().map(|s| s.current_step()).collect();
        assert_eq!(steps, vec![1, 2]);
        assert_eq!(controller.current_step(), 2);
        assert_eq!(log.borrow().last(), Some(&controller.state()));
    }

    #[test]
    fn test_saturating_arithmetic() {
        let controller = StepperController::with_state(StepperState::new(i64::MAX));
        controller.next();
        assert_eq!(controller.current_step(), i64::MAX);
    }

    #[test]
    fn test_dispose_stops_notifications() {
        let controller = StepperController::new();
        let log = recorder(&controller);

        controller.dispose();
        controller.next();

        assert!(controller.is_disposed());
        assert!(log.borrow().is_empty());
        assert_eq!(controller.current_step(), 1);
    }

    #[test]
    fn test_subscriber_can_read_controller_during_notification() {
        let controller = Rc::new(StepperController::new());
        let seen = Rc::new(RefCell::new(None));

        let weak = Rc::downgrade(&controller);
        let sink = Rc::clone(&seen);
        let _ = controller.subscribe(move |_| {
            if let Some(controller) = weak.upgrade() {
                *sink.borrow_mut() = Some(controller.current_step());
            }
        });

        controller.jump_to(4);
        assert_eq!(*seen.borrow(), Some(4));
    }

    #[tokio::test]
    async fn test_watch_receives_latest_state() {
        let controller = StepperController::new();
        let mut changes = controller.watch();

        controller.next();
        controller.set_failed(1, true);

        changes.changed().await.unwrap();
        assert_eq!(*changes.borrow(), StepperState::new(1).with_failed(1, true));
    }

    #[tokio::test]
    async fn test_watch_closes_on_dispose() {
        let controller = StepperController::new();
        let mut changes = controller.watch();

        controller.dispose();
        assert!(changes.changed().await.is_err());

        let mut late = controller.watch();
        assert!(late.changed().await.is_err());
        assert_eq!(late.borrow().current_step(), 0);
    }
}
