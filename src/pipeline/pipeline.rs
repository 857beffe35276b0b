use tracing::trace;
use crate::config::config::GestureConfig;
use crate::modules::face_gestures::{detect_double, detect_tongue};
use crate::modules::single_hand::detect_single_hand;
use crate::modules::two_hand::detect_two_hand;
use crate::pipeline::gesture::Gesture;
use crate::utils::coordinate::{FaceLandmarks, HandLandmarks};
use crate::utils::image::FrameBuffer;

/// FrameInput borrows everything the detector produced for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    pub hands: &'a [HandLandmarks],
    pub faces: &'a [FaceLandmarks],
    /// Only read by the Tongue stage. Without it, Tongue never matches.
    pub frame: Option<&'a FrameBuffer>,
}

type Stage = fn(&FrameInput, &GestureConfig) -> Option<Gesture>;

/// Stages in priority order. The first one returning a label wins.
const STAGES: [(&str, Stage); 4] = [
    ("double", detect_double),
    ("tongue", detect_tongue),
    ("two_hand", detect_two_hand),
    ("single_hand", detect_single_hand),
];

#[derive(Debug, Clone, Default)]
pub struct GesturePipeline {
    config: GestureConfig,
}

impl GesturePipeline {

    /// new initializes new instance of the gesture pipeline.
    pub fn new(config: GestureConfig) -> Self {
        GesturePipeline { config }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// detect_gesture classifies a single frame.
    ///
    /// Stateless: the same input always gives the same label, and the pipeline
    /// can be shared across threads.
    ///
    /// # Arguments
    /// * `input` - hands, faces and optionally the BGR frame
    ///
    /// # Returns
    /// * `Option<Gesture>` - `None` when no stage matched
    pub fn detect_gesture(&self, input: &FrameInput) -> Option<Gesture> {
        if input.hands.is_empty() && input.faces.is_empty() {
            return None;
        }
        STAGES.iter().find_map(|(name, stage)| {
            let gesture = stage(input, &self.config)?;
            trace!(stage = *name, gesture = gesture.as_str(), "stage matched");
            Some(gesture)
        })
    }
}

/// classify runs the default pipeline on one frame.
pub fn classify(
    hands: &[HandLandmarks],
    faces: &[FaceLandmarks],
    frame: Option<&FrameBuffer>,
) -> Option<Gesture> {
    GesturePipeline::default().detect_gesture(&FrameInput { hands, faces, frame })
}
