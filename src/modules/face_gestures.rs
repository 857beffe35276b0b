use tracing::{debug, trace};
use crate::config::config::GestureConfig;
use crate::helper::face_helper::{is_tongue_color, mouth_color, mouth_open_ratio};
use crate::pipeline::gesture::Gesture;
use crate::pipeline::pipeline::FrameInput;

/// detect_double fires whenever two or more faces are in the frame, hands or not.
pub fn detect_double(input: &FrameInput, config: &GestureConfig) -> Option<Gesture> {
    if !config.face_gestures || input.faces.len() < 2 {
        return None;
    }
    debug!("{} faces detected", input.faces.len());
    Some(Gesture::Double)
}

/// detect_tongue needs an open mouth on the first face and a red, bright
/// patch between the lips. An open mouth alone is not enough.
pub fn detect_tongue(input: &FrameInput, config: &GestureConfig) -> Option<Gesture> {
    if !config.face_gestures {
        return None;
    }
    let face = input.faces.first()?;
    let thresholds = &config.thresholds;

    let ratio = mouth_open_ratio(face)?;
    trace!(ratio, "mouth open ratio");
    if !(ratio > thresholds.mouth_open_ratio) {
        return None;
    }

    let frame = input.frame?;
    let bgr = mouth_color(face, frame, thresholds.roi_half_size)?;
    trace!(b = bgr[0], g = bgr[1], r = bgr[2], "mouth color");
    if is_tongue_color(bgr, thresholds) {
        debug!(ratio, red = bgr[2], "tongue out");
        return Some(Gesture::Tongue);
    }
    None
}
