use tracing::{debug, trace};
use crate::config::config::GestureConfig;
use crate::helper::hand_helper::{index_tilt, is_pointing, thumb_to_middle_mcp};
use crate::pipeline::gesture::Gesture;
use crate::pipeline::pipeline::FrameInput;
use crate::utils::coordinate::{FaceLandmarks, HandLandmarks, INDEX_TIP};

/// detect_single_hand walks the hands in detection order and returns the first
/// Think or Idea match.
pub fn detect_single_hand(input: &FrameInput, config: &GestureConfig) -> Option<Gesture> {
    let face = input.faces.first();
    input
        .hands
        .iter()
        .enumerate()
        .find_map(|(idx, hand)| {
            let gesture = classify_pointing_hand(hand, face, config)?;
            debug!(hand = idx, gesture = gesture.as_str(), "single hand match");
            Some(gesture)
        })
}

/// classify_pointing_hand decides between Think and Idea for one hand.
///
/// A fingertip near the mouth is Think even if the Idea pose also holds.
/// Without any face, a raised but tilted finger falls back to Think.
fn classify_pointing_hand(
    hand: &HandLandmarks,
    face: Option<&FaceLandmarks>,
    config: &GestureConfig,
) -> Option<Gesture> {
    if !is_pointing(hand) {
        return None;
    }
    let thresholds = &config.thresholds;
    let tip = hand.get(INDEX_TIP);

    if let Some(mouth) = face.and_then(FaceLandmarks::upper_lip) {
        let dist_to_mouth = tip.distance(&mouth);
        trace!(dist_to_mouth, "pointing finger to mouth");
        if dist_to_mouth < thresholds.mouth_distance {
            return Some(Gesture::Think);
        }
    }

    let is_vertical = index_tilt(hand) < thresholds.vertical_tolerance;
    let is_thumb_curled = thumb_to_middle_mcp(hand) < thresholds.thumb_tuck_distance;
    trace!(is_vertical, is_thumb_curled, "idea pose");
    if is_vertical && is_thumb_curled {
        return Some(Gesture::Idea);
    }

    if face.is_none() && tip.y < thresholds.think_fallback_y && !is_vertical {
        return Some(Gesture::Think);
    }

    None
}

#[cfg(test)]
mod tests {
    use crate::config::config::GestureConfig;
    use crate::helper::hand_helper::test_hands::{extend, fist, pointing_hand, set_thumb};
    use crate::modules::face_gestures::test_faces::face;
    use crate::modules::single_hand::detect_single_hand;
    use crate::pipeline::gesture::Gesture;
    use crate::pipeline::pipeline::FrameInput;
    use crate::utils::coordinate::{FaceLandmarks, HandLandmarks, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP};

    fn run(hands: &[HandLandmarks], faces: &[FaceLandmarks]) -> Option<Gesture> {
        let input = FrameInput { hands, faces, frame: None };
        detect_single_hand(&input, &GestureConfig::default())
    }

    fn untuck_thumb(hand: &mut HandLandmarks) {
        let mcp = hand.get(MIDDLE_MCP);
        set_thumb(hand, mcp.x + 0.3, mcp.y);
    }

    #[test]
    fn test_idea_vertical_with_tucked_thumb() {
        // fingertip 0.05 left of the mcp, thumb 0.1 from the middle mcp
        let mut hand = pointing_hand(0.45, 0.3, 0.5);
        let mcp = hand.get(MIDDLE_MCP);
        set_thumb(&mut hand, mcp.x + 0.06, mcp.y + 0.08);
        assert_eq!(run(&[hand], &[]), Some(Gesture::Idea));
    }

    #[test]
    fn test_idea_needs_vertical_and_thumb() {
        // thumb out, vertical, low enough that no fallback applies
        let mut hand = pointing_hand(0.5, 0.5, 0.5);
        untuck_thumb(&mut hand);
        assert_eq!(run(&[hand], &[]), None);

        // tilted, thumb tucked, low
        let hand = pointing_hand(0.3, 0.5, 0.5);
        assert_eq!(run(&[hand], &[]), None);
    }

    #[test]
    fn test_think_fallback_without_face() {
        // fingertip y 0.2, mcp x - tip x = 0.2
        let hand = pointing_hand(0.3, 0.2, 0.5);
        assert_eq!(run(&[hand], &[]), Some(Gesture::Think));
    }

    #[test]
    fn test_no_fallback_when_vertical() {
        // high and vertical but thumb out: neither Idea nor fallback
        let mut hand = pointing_hand(0.5, 0.2, 0.5);
        untuck_thumb(&mut hand);
        assert_eq!(run(&[hand], &[]), None);
    }

    #[test]
    fn test_no_fallback_with_face() {
        let hand = pointing_hand(0.3, 0.2, 0.5);
        let faces = [face(0.5, 0.7, 0.71)];
        assert_eq!(run(&[hand], &faces), None);
    }

    #[test]
    fn test_think_near_mouth_beats_idea() {
        // fingertip right on the upper lip, Idea pose also holds
        let hand = pointing_hand(0.5, 0.4, 0.5);
        let faces = [face(0.55, 0.42, 0.43)];
        assert_eq!(run(&[hand], &faces), Some(Gesture::Think));
    }

    #[test]
    fn test_idea_with_face_far_from_mouth() {
        let hand = pointing_hand(0.2, 0.3, 0.22);
        let faces = [face(0.55, 0.42, 0.43)];
        assert_eq!(run(&[hand], &faces), Some(Gesture::Idea));
    }

    #[test]
    fn test_not_pointing_is_skipped() {
        let mut hand = pointing_hand(0.5, 0.4, 0.5);
        extend(&mut hand, MIDDLE_TIP, MIDDLE_PIP);
        let faces = [face(0.55, 0.42, 0.43)];
        assert_eq!(run(&[hand], &faces), None);
        assert_eq!(run(&[fist(0.5, 0.7)], &[]), None);
    }

    #[test]
    fn test_first_matching_hand_wins() {
        let mut idea = pointing_hand(0.7, 0.3, 0.71);
        let mcp = idea.get(MIDDLE_MCP);
        set_thumb(&mut idea, mcp.x, mcp.y + 0.05);
        let think = pointing_hand(0.1, 0.2, 0.3);

        assert_eq!(run(&[fist(0.5, 0.7), idea, think], &[]), Some(Gesture::Idea));
        assert_eq!(run(&[think, idea], &[]), Some(Gesture::Think));
    }
}
