use accord_core::{SourceError, MAX_WEIGHT};
use thiserror::Error;

/// Errors that abort a cache rebuild.
///
/// A failed rebuild never publishes anything; the previously published
/// table stays in place.
#[derive(Error, Debug)]
pub enum BuildError {
    /// A similarity weight fell outside the expected scale. A weight above
    /// the scale would turn into a negative distance and break the
    /// shortest-path relaxation, so the whole document is rejected.
    #[error(
        "similarity weight {weight} between \"{category_a}\" and \"{category_b}\" is outside [0, {max}]",
        max = MAX_WEIGHT
    )]
    WeightOutOfRange {
        category_a: String,
        category_b: String,
        weight: f64,
    },

    /// The edge source could not be read or decoded.
    #[error("edge source error: {0}")]
    Source(#[from] SourceError),
}
