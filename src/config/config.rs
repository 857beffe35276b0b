use anyhow::Error;
use serde::{Deserialize, Serialize};

/// Numeric cut-offs of the gesture cascade. All distances are in normalized
/// frame coordinates unless the name says otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GestureThresholds {
    pub mouth_open_ratio: f32,
    pub roi_half_size: i64,
    pub tongue_red_margin: f32,
    pub tongue_min_red: f32,
    pub default_face_bottom_y: f32,
    pub clasp_distance: f32,
    pub raised_margin: f32,
    pub open_fingers_min: usize,
    pub fist_fingers_max: usize,
    pub mad_distance_max: f32,
    pub mouth_distance: f32,
    pub vertical_tolerance: f32,
    pub thumb_tuck_distance: f32,
    /// Fingertip height for the face-less Think fallback. Not validated against real footage.
    pub think_fallback_y: f32,
}

impl GestureThresholds {
    pub(crate) fn new() -> Self {
        GestureThresholds {
            mouth_open_ratio: 0.03,
            roi_half_size: 5,
            tongue_red_margin: 10.0,
            tongue_min_red: 60.0,
            default_face_bottom_y: 0.5,
            clasp_distance: 0.15,
            raised_margin: 0.1,
            open_fingers_min: 3,
            fist_fingers_max: 1,
            mad_distance_max: 0.5,
            mouth_distance: 0.15,
            vertical_tolerance: 0.12,
            thumb_tuck_distance: 0.2,
            think_fallback_y: 0.35,
        }
    }
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GestureConfig {
    /// Kept for configuration compatibility. The cascade returns labels without
    /// a score, so nothing reads this value.
    pub min_confidence: f32,
    /// Run the Double and Tongue stages. Turning this off gives the
    /// hands-only classifier; faces are still used as chin and lip references.
    pub face_gestures: bool,
    pub thresholds: GestureThresholds,
}

impl GestureConfig {
    pub(crate) fn new() -> Self {
        GestureConfig {
            min_confidence: 0.7,
            face_gestures: true,
            thresholds: GestureThresholds::new(),
        }
    }

    /// hands_only returns the default configuration with the face stages disabled.
    pub fn hands_only() -> Self {
        GestureConfig {
            face_gestures: false,
            ..Self::new()
        }
    }

    /// from_json parses a configuration, filling missing fields with defaults.
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        let config: GestureConfig = serde_json::from_str(raw)?;
        Ok(config)
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::new()
    }
}
