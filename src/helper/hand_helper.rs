use crate::utils::coordinate::{HandLandmarks, FINGER_TIP_PIP, INDEX_MCP, INDEX_PIP, INDEX_TIP, MIDDLE_MCP, THUMB_TIP};

/// is_finger_extended checks tip above pip (smaller y), which assumes an upright hand.
pub fn is_finger_extended(hand: &HandLandmarks, tip: usize, pip: usize) -> bool {
    hand.get(tip).y < hand.get(pip).y
}

/// fingers_open counts extended fingers among index, middle, ring and pinky.
pub fn fingers_open(hand: &HandLandmarks) -> usize {
    FINGER_TIP_PIP
        .iter()
        .filter(|(tip, pip)| is_finger_extended(hand, *tip, *pip))
        .count()
}

/// is_pointing is the index-up shape: index extended, the other three curled.
pub fn is_pointing(hand: &HandLandmarks) -> bool {
    let index_extended = is_finger_extended(hand, INDEX_TIP, INDEX_PIP);
    let others_curled = FINGER_TIP_PIP[1..]
        .iter()
        .all(|(tip, pip)| !is_finger_extended(hand, *tip, *pip));
    index_extended && others_curled
}

/// index_tilt is the horizontal offset between index tip and index mcp.
pub fn index_tilt(hand: &HandLandmarks) -> f32 {
    (hand.get(INDEX_TIP).x - hand.get(INDEX_MCP).x).abs()
}

pub fn thumb_to_middle_mcp(hand: &HandLandmarks) -> f32 {
    hand.get(THUMB_TIP).distance(&hand.get(MIDDLE_MCP))
}

#[cfg(test)]
pub(crate) mod test_hands {
    use crate::utils::coordinate::*;

    /// Builds an upright hand with the wrist at `(wx, wy)`. Every finger starts
    /// curled (tip below pip); callers extend the ones they need.
    pub fn hand_at(wx: f32, wy: f32) -> HandLandmarks {
        let mut lm = [Landmark::new(wx, wy); HAND_LANDMARK_COUNT];
        for (finger, (tip, pip)) in FINGER_TIP_PIP.iter().enumerate() {
            let x = wx - 0.03 + 0.02 * finger as f32;
            let mcp = pip - 1;
            lm[mcp] = Landmark::new(x, wy - 0.08);
            lm[*pip] = Landmark::new(x, wy - 0.12);
            lm[pip + 1] = Landmark::new(x, wy - 0.10);
            lm[*tip] = Landmark::new(x, wy - 0.09);
        }
        // thumb tucked next to the middle mcp
        lm[THUMB_TIP] = Landmark::new(wx + 0.01, wy - 0.06);
        HandLandmarks::new(lm)
    }

    pub fn extend(hand: &mut HandLandmarks, tip: usize, pip: usize) {
        let pip_lmk = hand.landmarks[pip];
        hand.landmarks[tip] = Landmark::new(pip_lmk.x, pip_lmk.y - 0.06);
    }

    pub fn open_hand(wx: f32, wy: f32) -> HandLandmarks {
        let mut hand = hand_at(wx, wy);
        for (tip, pip) in FINGER_TIP_PIP {
            extend(&mut hand, tip, pip);
        }
        hand
    }

    pub fn fist(wx: f32, wy: f32) -> HandLandmarks {
        hand_at(wx, wy)
    }

    /// Index pointing up, fingertip at `(tx, ty)`, index mcp at `(mcp_x, ty + 0.15)`.
    pub fn pointing_hand(tx: f32, ty: f32, mcp_x: f32) -> HandLandmarks {
        let mut hand = hand_at(mcp_x, ty + 0.23);
        hand.landmarks[INDEX_MCP] = Landmark::new(mcp_x, ty + 0.15);
        hand.landmarks[INDEX_PIP] = Landmark::new((tx + mcp_x) / 2.0, ty + 0.08);
        hand.landmarks[INDEX_TIP] = Landmark::new(tx, ty);
        hand
    }

    pub fn set_thumb(hand: &mut HandLandmarks, x: f32, y: f32) {
        hand.landmarks[THUMB_TIP] = Landmark::new(x, y);
    }
}
