use crate::config::config::GestureThresholds;
use crate::utils::coordinate::{FaceLandmarks, Landmark};
use crate::utils::image::FrameBuffer;

/// mouth_open_ratio returns the inner-lip gap divided by the head-top to chin distance.
///
/// Returns `None` when the mesh is too short or the face height is not positive,
/// so a degenerate face never counts as an open mouth.
///
/// # Arguments
/// * `face` - face mesh landmarks
///
/// # Returns
/// * `Option<f32>`
pub fn mouth_open_ratio(face: &FaceLandmarks) -> Option<f32> {
    let upper_lip = face.upper_lip()?;
    let lower_lip = face.lower_lip()?;
    let head_top = face.head_top()?;
    let chin = face.chin()?;

    let mouth_open = upper_lip.distance(&lower_lip);
    let face_height = head_top.distance(&chin);
    if !(face_height > 0.0) {
        return None;
    }
    Some(mouth_open / face_height)
}

/// mouth_center returns the midpoint of the inner lips.
pub fn mouth_center(face: &FaceLandmarks) -> Option<Landmark> {
    let upper_lip = face.upper_lip()?;
    let lower_lip = face.lower_lip()?;
    Some(Landmark::new(
        (upper_lip.x + lower_lip.x) / 2.0,
        (upper_lip.y + lower_lip.y) / 2.0,
    ))
}

/// to_pixel maps a normalized landmark onto the frame grid, truncating toward zero.
/// Points off the frame map to out-of-range pixels; callers clip.
pub fn to_pixel(lmk: &Landmark, frame: &FrameBuffer) -> (i64, i64) {
    let px = (lmk.x * frame.width() as f32) as i64;
    let py = (lmk.y * frame.height() as f32) as i64;
    (px, py)
}

/// mouth_color samples the mean BGR color around the mouth center.
///
/// # Arguments
/// * `face` - face mesh landmarks
/// * `frame` - the frame the mesh was detected on
/// * `half_size` - half side of the sampled square in pixels
///
/// # Returns
/// * `Option<[f32; 3]>` - `None` if the mesh is short or the square falls off the frame
pub fn mouth_color(face: &FaceLandmarks, frame: &FrameBuffer, half_size: i64) -> Option<[f32; 3]> {
    let center = mouth_center(face)?;
    let (mx, my) = to_pixel(&center, frame);
    frame.roi_mean_bgr(mx, my, half_size)
}

/// is_tongue_color tells a red-dominant, reasonably bright sample (tongue)
/// apart from the dark shadow of an open mouth.
pub fn is_tongue_color(bgr: [f32; 3], thresholds: &GestureThresholds) -> bool {
    let [b_mean, g_mean, r_mean] = bgr;
    r_mean > g_mean
        && r_mean > b_mean + thresholds.tongue_red_margin
        && r_mean > thresholds.tongue_min_red
}

/// face_bottom_y returns the chin height, or `default` without a usable face.
pub fn face_bottom_y(face: Option<&FaceLandmarks>, default: f32) -> f32 {
    face.and_then(FaceLandmarks::chin)
        .map(|chin| chin.y)
        .unwrap_or(default)
}
