use thiserror::Error;

/// Errors surfaced by node construction and the per-tick layout update.
///
/// An empty dataset is deliberately *not* an error: rendering zero records
/// yields an empty frame (blank canvas). All failures here are local to a
/// single render or tick and leave the chart handle usable.
#[derive(Debug, Error)]
pub enum ChartError {
    /// A record's value field is missing or not numeric. Rejected outright:
    /// silently coercing to zero would produce an invisible bubble that still
    /// participates in collision resolution.
    #[error("record `{id}`: invalid value {raw:?}")]
    InvalidValue { id: String, raw: String },

    /// Split mode was asked to place a node whose region has no registered
    /// target point. Surfaced instead of defaulting to the origin.
    #[error("no split-mode target registered for category `{0}`")]
    MissingCategoryTarget(String),
}
