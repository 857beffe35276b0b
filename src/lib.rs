pub mod utils;
pub mod pipeline;
pub mod config;
pub mod helper;
pub mod modules;

pub use config::config::{GestureConfig, GestureThresholds};
pub use pipeline::gesture::Gesture;
pub use pipeline::pipeline::{classify, FrameInput, GesturePipeline};
pub use utils::coordinate::{FaceLandmarks, HandLandmarks, Landmark};
pub use utils::image::{FrameBuffer, FrameLandmarks};
