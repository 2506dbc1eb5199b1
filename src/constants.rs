//! Constants shared across the crate.

/// Outward padding applied to every feature's `[min, max]` range
/// so that boundary samples fall strictly inside it.
pub const BOUND_PADDING:          f64 = 1e-10;
/// Nudge applied before rounding a scaled feature value to a bin index.
pub const BIN_PERTURBATION:       f64 = 1e-10;
/// Tolerance used when checking that a distribution sums to `1`.
pub const SIMPLEX_TOLERANCE:      f64 = 1e-9;
/// A weak hypothesis whose weighted error reaches this value
/// is no better than random guessing.
pub const RANDOM_GUESS_ERROR:     f64 = 0.5;

/// Default number of bins per feature.
pub const DEFAULT_NBINS:          usize = 100_000;
/// Default maximum number of boosting rounds.
pub const DEFAULT_MAX_WEAK_COUNT: usize = 100;
/// Default interval, in rounds, of the console progress rows.
pub const DEFAULT_PRINT_EVERY:    usize = 10;
