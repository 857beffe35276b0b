use tracing::{debug, trace};
use crate::config::config::GestureConfig;
use crate::helper::face_helper::face_bottom_y;
use crate::helper::hand_helper::fingers_open;
use crate::pipeline::gesture::Gesture;
use crate::pipeline::pipeline::FrameInput;

/// detect_two_hand covers Scared and Mad. It only looks at frames with exactly
/// two hands; any other count falls through to the single-hand stage.
///
/// Rule order matters: clasped hands below the chin read as Scared even when
/// both hands are fists.
pub fn detect_two_hand(input: &FrameInput, config: &GestureConfig) -> Option<Gesture> {
    let [h1, h2] = input.hands else {
        return None;
    };
    let thresholds = &config.thresholds;

    let (w1, w2) = (h1.wrist(), h2.wrist());
    let avg_y = (w1.y + w2.y) / 2.0;
    let wrists_dist = w1.distance(&w2);
    let face_bottom = face_bottom_y(input.faces.first(), thresholds.default_face_bottom_y);

    let open_1 = fingers_open(h1);
    let open_2 = fingers_open(h2);
    let is_hands_open = open_1 >= thresholds.open_fingers_min && open_2 >= thresholds.open_fingers_min;
    let is_hands_fists = open_1 <= thresholds.fist_fingers_max && open_2 <= thresholds.fist_fingers_max;
    trace!(avg_y, wrists_dist, face_bottom, open_1, open_2, "two hands");

    if wrists_dist < thresholds.clasp_distance && avg_y > face_bottom {
        debug!(wrists_dist, "hands clasped below chin");
        return Some(Gesture::Scared);
    }

    if avg_y < face_bottom + thresholds.raised_margin && is_hands_open {
        debug!(avg_y, "open palms raised");
        return Some(Gesture::Scared);
    }

    if wrists_dist >= thresholds.clasp_distance
        && wrists_dist < thresholds.mad_distance_max
        && is_hands_fists
        && avg_y > face_bottom
    {
        debug!(wrists_dist, "fists held low");
        return Some(Gesture::Mad);
    }

    None
}
