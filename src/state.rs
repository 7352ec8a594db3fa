use std::collections::BTreeSet;

/// Immutable snapshot of a stepper: the current step and the failed steps.
///
/// A `current_step` that is negative or past the last step is a valid
/// "no step active" value. Failed indices need not be in range either;
/// entries outside the step list are simply never drawn.
///
/// Every `with_*` method returns a new state and leaves `self` untouched.
///
/// # Examples
///
/// ```
/// use ayumi::StepperState;
///
/// let start = StepperState::new(0);
/// let failed = start.with_failed(2, true);
///
/// assert!(failed.is_failed(2));
/// assert!(!start.is_failed(2));
/// assert_eq!(failed, StepperState::new(0).with_failed(2, true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct StepperState {
    current_step: i64,
    failed_steps: BTreeSet<i64>,
}

impl StepperState {
    pub fn new(current_step: i64) -> Self {
        Self {
            current_step,
            failed_steps: BTreeSet::new(),
        }
    }

    pub fn current_step(&self) -> i64 {
        self.current_step
    }

    pub fn is_failed(&self, index: i64) -> bool {
        self.failed_steps.contains(&index)
    }

    /// Failed indices in ascending order.
    pub fn failed_steps(&self) -> impl Iterator<Item = i64> + '_ {
        self.failed_steps.iter().copied()
    }

    /// Lowest failed index, if any.
    pub fn first_failed(&self) -> Option<i64> {
        self.failed_steps.first().copied()
    }

    pub fn with_current_step(&self, current_step: i64) -> Self {
        Self {
            current_step,
            failed_steps: self.failed_steps.clone(),
        }
    }

    pub fn with_failed(&self, index: i64, failed: bool) -> Self {
        let mut failed_steps = self.failed_steps.clone();
        if failed {
            failed_steps.insert(index);
        } else {
            failed_steps.remove(&index);
        }
        Self {
            current_step: self.current_step,
            failed_steps,
        }
    }
}

/// Converts a step position into the signed index space of [`StepperState`].
pub(crate) fn step_index(position: usize) -> i64 {
    i64::try_from(position).unwrap_or(i64::MAX)
}
