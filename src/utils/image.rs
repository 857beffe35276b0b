use anyhow::Error;
use ndarray::{s, Array3, Axis};
use serde::{Deserialize, Serialize};
use crate::pipeline::pipeline::FrameInput;
use crate::utils::coordinate::{FaceLandmarks, HandLandmarks};

#[cfg(feature = "opencv")]
use opencv::core::{Mat, MatTraitConst, MatTraitConstManual, CV_8UC3};

/// A decoded video frame, shape (height, width, 3), channels in BGR order.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    data: Array3<u8>,
}

impl FrameBuffer {
    pub fn new(data: Array3<u8>) -> Result<Self, Error> {
        if data.shape()[2] != 3 {
            return Err(Error::msg(format!(
                "frame must have 3 channels, got {}",
                data.shape()[2]
            )));
        }
        Ok(FrameBuffer { data })
    }

    /// filled creates a frame where every pixel has the same BGR color.
    pub fn filled(width: usize, height: usize, bgr: [u8; 3]) -> Self {
        let data = Array3::from_shape_fn((height, width, 3), |(_, _, c)| bgr[c]);
        FrameBuffer { data }
    }

    /// from_bgr_bytes wraps a packed, row-major BGR byte buffer.
    ///
    /// # Arguments
    /// * `bytes` - `width * height * 3` bytes
    /// * `width` - frame width in pixels
    /// * `height` - frame height in pixels
    ///
    /// # Returns
    /// * `Result<FrameBuffer, Error>`
    pub fn from_bgr_bytes(bytes: Vec<u8>, width: usize, height: usize) -> Result<Self, Error> {
        let data = Array3::from_shape_vec((height, width, 3), bytes)?;
        Ok(FrameBuffer { data })
    }

    /// from_mat copies an 8-bit, 3-channel OpenCV matrix into a frame buffer.
    #[cfg(feature = "opencv")]
    pub fn from_mat(mat: &Mat) -> Result<Self, Error> {
        if mat.typ() != CV_8UC3 {
            return Err(Error::msg("frame matrix must be CV_8UC3"));
        }
        let size = mat.size()?;
        let continuous = mat.try_clone()?;
        let bytes = continuous.data_bytes()?.to_vec();
        Self::from_bgr_bytes(bytes, size.width as usize, size.height as usize)
    }

    pub fn width(&self) -> usize {
        self.data.shape()[1]
    }

    pub fn height(&self) -> usize {
        self.data.shape()[0]
    }

    pub fn data(&self) -> &Array3<u8> {
        &self.data
    }

    /// fill_rect paints a rectangle, clipped to the frame.
    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize, bgr: [u8; 3]) {
        let x2 = (x + width).min(self.width());
        let y2 = (y + height).min(self.height());
        if x >= x2 || y >= y2 {
            return;
        }
        for (c, value) in bgr.iter().enumerate() {
            self.data.slice_mut(s![y..y2, x..x2, c]).fill(*value);
        }
    }

    /// roi_mean_bgr averages each channel over the square `[cx - half, cx + half) x [cy - half, cy + half)`.
    ///
    /// The region is clipped to the frame first. Returns `None` when nothing is left.
    ///
    /// # Arguments
    /// * `cx` - center column in pixels, may lie outside the frame
    /// * `cy` - center row in pixels, may lie outside the frame
    /// * `half` - half of the square side
    ///
    /// # Returns
    /// * `Option<[f32; 3]>` - mean blue, green, red
    pub fn roi_mean_bgr(&self, cx: i64, cy: i64, half: i64) -> Option<[f32; 3]> {
        let w = self.width() as i64;
        let h = self.height() as i64;

        let x1 = cx.saturating_sub(half).max(0);
        let x2 = cx.saturating_add(half).min(w);
        let y1 = cy.saturating_sub(half).max(0);
        let y2 = cy.saturating_add(half).min(h);
        if x1 >= x2 || y1 >= y2 {
            return None;
        }

        let roi = self
            .data
            .slice(s![y1 as usize..y2 as usize, x1 as usize..x2 as usize, ..]);
        let mut means = [0.0f32; 3];
        for (c, mean) in means.iter_mut().enumerate() {
            *mean = roi.index_axis(Axis(2), c).mapv(f32::from).mean()?;
        }
        Some(means)
    }
}

/// FrameLandmarks is one frame of detector output as it comes over the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameLandmarks {
    #[serde(default)]
    pub hands: Vec<HandLandmarks>,
    #[serde(default)]
    pub faces: Vec<FaceLandmarks>,
}

impl FrameLandmarks {
    /// from_json decodes `{"hands": [...], "faces": [...]}`.
    ///
    /// Each hand is either `{"landmarks": [21 points]}` or a bare array of 21 points.
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        let wire: WireFrame = serde_json::from_str(raw)?;
        let hands = wire
            .hands
            .into_iter()
            .map(|hand| match hand {
                WireHand::Wrapped(hand) => Ok(hand),
                WireHand::Bare(points) => HandLandmarks::try_from(points),
            })
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(FrameLandmarks { hands, faces: wire.faces })
    }

    pub fn as_input<'a>(&'a self, frame: Option<&'a FrameBuffer>) -> FrameInput<'a> {
        FrameInput {
            hands: &self.hands,
            faces: &self.faces,
            frame,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireHand {
    Wrapped(HandLandmarks),
    Bare(Vec<crate::utils::coordinate::Landmark>),
}

#[derive(Deserialize)]
struct WireFrame {
    #[serde(default)]
    hands: Vec<WireHand>,
    #[serde(default)]
    faces: Vec<FaceLandmarks>,
}
