//! First-class invariants over the recorded history.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are checked in debug builds and can be tested independently.

use super::GameState;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A recorded history rejected because it breaks one or more invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidHistory {
    /// Every violated invariant.
    pub violations: Vec<InvariantViolation>,
}

impl InvalidHistory {
    /// Wraps the violations reported by an [`InvariantSet`].
    pub fn new(violations: Vec<InvariantViolation>) -> Self {
        Self { violations }
    }
}

impl std::fmt::Display for InvalidHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Invalid history")?;
        for (i, violation) in self.violations.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for InvalidHistory {}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose without boxing.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod anchored_start;
pub mod single_step;

pub use alternating_turn::AlternatingTurnInvariant;
pub use anchored_start::AnchoredStartInvariant;
pub use single_step::SingleStepInvariant;

/// Every history invariant as a composable set.
pub type HistoryInvariants = (
    AnchoredStartInvariant,
    SingleStepInvariant,
    AlternatingTurnInvariant,
);

/// Logs and debug-asserts the full invariant set.
#[instrument(skip(game))]
pub fn assert_invariants(game: &GameState) {
    let result = HistoryInvariants::check_all(game);
    if let Err(violations) = &result {
        for violation in violations {
            warn!(%violation, "History invariant violated");
        }
    }
    debug_assert!(result.is_ok(), "History invariants violated: {:?}", result);
}
