use anyhow::Error;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

pub const HAND_LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_PIP: usize = 14;
pub const RING_TIP: usize = 16;
pub const PINKY_PIP: usize = 18;
pub const PINKY_TIP: usize = 20;

/// (tip, pip) pairs for the four non-thumb fingers, index first.
pub const FINGER_TIP_PIP: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

pub const FACE_HEAD_TOP: usize = 10;
pub const FACE_UPPER_LIP: usize = 13;
pub const FACE_LOWER_LIP: usize = 14;
pub const FACE_CHIN: usize = 152;

/// A single detector landmark in normalized frame coordinates.
/// `z` is relative depth and is carried but never read by the classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Landmark { x, y, z: 0.0 }
    }

    pub fn xy(&self) -> Vector2<f32> {
        Vector2::new(self.x, self.y)
    }

    /// distance returns the euclidean distance between two landmarks in the image plane.
    pub fn distance(&self, other: &Landmark) -> f32 {
        (self.xy() - other.xy()).norm()
    }
}

/// The 21 landmarks of one detected hand, in anatomical order (wrist = 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandLandmarks {
    pub landmarks: [Landmark; HAND_LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(landmarks: [Landmark; HAND_LANDMARK_COUNT]) -> Self {
        HandLandmarks { landmarks }
    }

    pub fn wrist(&self) -> Landmark {
        self.landmarks[WRIST]
    }

    pub fn get(&self, idx: usize) -> Landmark {
        self.landmarks[idx]
    }
}

impl Default for HandLandmarks {
    fn default() -> Self {
        HandLandmarks {
            landmarks: [Landmark::default(); HAND_LANDMARK_COUNT],
        }
    }
}

impl TryFrom<Vec<Landmark>> for HandLandmarks {
    type Error = Error;

    fn try_from(value: Vec<Landmark>) -> Result<Self, Self::Error> {
        let len = value.len();
        let landmarks: [Landmark; HAND_LANDMARK_COUNT] = value.try_into().map_err(|_| {
            Error::msg(format!(
                "a hand must have {HAND_LANDMARK_COUNT} landmarks, got {len}"
            ))
        })?;
        Ok(HandLandmarks { landmarks })
    }
}

/// The landmarks of one detected face mesh. Only a handful of indices are read,
/// so a short mesh is tolerated and the missing points come back as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaceLandmarks {
    pub landmarks: Vec<Landmark>,
}

impl FaceLandmarks {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        FaceLandmarks { landmarks }
    }

    pub fn get(&self, idx: usize) -> Option<Landmark> {
        self.landmarks.get(idx).copied()
    }

    pub fn head_top(&self) -> Option<Landmark> {
        self.get(FACE_HEAD_TOP)
    }

    pub fn upper_lip(&self) -> Option<Landmark> {
        self.get(FACE_UPPER_LIP)
    }

    pub fn lower_lip(&self) -> Option<Landmark> {
        self.get(FACE_LOWER_LIP)
    }

    pub fn chin(&self) -> Option<Landmark> {
        self.get(FACE_CHIN)
    }
}
