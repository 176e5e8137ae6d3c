use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CaptureDestination {
    Screenshot,
    GamePreview,
}

impl CaptureDestination {
    pub const ALL: [CaptureDestination; 2] =
        [CaptureDestination::GamePreview, CaptureDestination::Screenshot];
}

impl fmt::Display for CaptureDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureDestination::Screenshot => write!(f, "Screenshot"),
            CaptureDestination::GamePreview => write!(f, "GamePreview"),
        }
    }
}
