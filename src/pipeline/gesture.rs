use std::fmt;
use serde::{Deserialize, Serialize};

/// Gesture labels the pipeline can emit. "No gesture" is `None` at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gesture {
    /// Two or more faces in the frame.
    Double,
    /// Open mouth with a red, bright patch between the lips.
    Tongue,
    /// Hands clasped below the chin, or open palms raised to face height.
    Scared,
    /// Fists held low, apart from each other.
    Mad,
    /// Index finger straight up with the thumb tucked.
    Idea,
    /// Pointing finger at the mouth.
    Think,
}

impl Gesture {
    pub const ALL: [Gesture; 6] = [
        Gesture::Double,
        Gesture::Tongue,
        Gesture::Scared,
        Gesture::Mad,
        Gesture::Idea,
        Gesture::Think,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::Double => "Double",
            Gesture::Tongue => "Tongue",
            Gesture::Scared => "Scared",
            Gesture::Mad => "Mad",
            Gesture::Idea => "Idea",
            Gesture::Think => "Think",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
