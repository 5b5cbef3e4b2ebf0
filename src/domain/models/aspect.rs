/// Aspect-ratio bucket a video falls into, used to pick the storage key
/// prefix for the uploaded object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectClass {
    Landscape,
    Portrait,
    Other,
}

// The bands are intentionally narrow approximations of 16:9 and 9:16.
// Clients rely on the resulting key prefixes, so the bounds must not be
// widened to a rounded 16/9.
const LANDSCAPE_LOWER: f64 = 1.77;
const LANDSCAPE_UPPER: f64 = 1.78;
const PORTRAIT_LOWER: f64 = 0.562;
const PORTRAIT_UPPER: f64 = 0.564;

impl AspectClass {
    /// Classify a width/height pair. A zero height yields an infinite
    /// ratio and falls through to `Other`.
    pub fn classify(width: u32, height: u32) -> Self {
        let ratio = width as f64 / height as f64;
        if ratio > LANDSCAPE_LOWER && ratio < LANDSCAPE_UPPER {
            AspectClass::Landscape
        } else if ratio > PORTRAIT_LOWER && ratio < PORTRAIT_UPPER {
            AspectClass::Portrait
        } else {
            AspectClass::Other
        }
    }

    pub fn key_prefix(&self) -> &'static str {
        match self {
            AspectClass::Landscape => "landscape",
            AspectClass::Portrait => "portrait",
            AspectClass::Other => "other",
        }
    }
}
