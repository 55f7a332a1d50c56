/// Errors from validating user-supplied angles
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum OrientationError {
    /// Heading outside [0, 360] degrees
    #[error("heading {0} is outside 0..=360 degrees")]
    HeadingOutOfRange(i32),
    /// Pitch outside [-90, 90] degrees
    #[error("pitch {0} is outside -90..=90 degrees")]
    PitchOutOfRange(i32),
}
