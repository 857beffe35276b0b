use anyhow::{bail, Error};
use crate::utils::coordinate::{HandLandmarks, Landmark, HAND_LANDMARK_COUNT};

/// u8_to_f32_vec decodes a packed little-endian f32 buffer.
pub fn u8_to_f32_vec(v: &[u8]) -> Result<Vec<f32>, Error> {
    if v.len() % 4 != 0 {
        bail!("byte buffer length {} is not a multiple of 4", v.len());
    }
    Ok(v.chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

/// landmarks_from_le_bytes decodes packed little-endian (x, y, z) triples.
///
/// # Arguments
/// * `bytes` - raw detector output, 12 bytes per landmark
///
/// # Returns
/// * `Result<Vec<Landmark>, Error>`
pub fn landmarks_from_le_bytes(bytes: &[u8]) -> Result<Vec<Landmark>, Error> {
    let values = u8_to_f32_vec(bytes)?;
    if values.len() % 3 != 0 {
        bail!("{} floats cannot be split into (x, y, z) triples", values.len());
    }
    Ok(values
        .chunks_exact(3)
        .map(|c| Landmark { x: c[0], y: c[1], z: c[2] })
        .collect())
}

/// hands_from_le_bytes decodes a buffer holding any number of 21-point hands back to back.
///
/// # Arguments
/// * `bytes` - raw detector output, 21 * 12 bytes per hand
///
/// # Returns
/// * `Result<Vec<HandLandmarks>, Error>`
pub fn hands_from_le_bytes(bytes: &[u8]) -> Result<Vec<HandLandmarks>, Error> {
    let landmarks = landmarks_from_le_bytes(bytes)?;
    if landmarks.len() % HAND_LANDMARK_COUNT != 0 {
        bail!(
            "{} landmarks cannot be split into hands of {HAND_LANDMARK_COUNT}",
            landmarks.len()
        );
    }
    landmarks
        .chunks_exact(HAND_LANDMARK_COUNT)
        .map(|chunk| HandLandmarks::try_from(chunk.to_vec()))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::utils::utils::{hands_from_le_bytes, landmarks_from_le_bytes, u8_to_f32_vec};

    fn encode(values: &[f32]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    #[test]
    fn test_u8_to_f32_vec() {
        let bytes = encode(&[0.5, -1.25]);
        assert_eq!(u8_to_f32_vec(&bytes).unwrap(), vec![0.5, -1.25]);
        assert!(u8_to_f32_vec(&bytes[..7]).is_err());
    }

    #[test]
    fn test_landmarks_from_le_bytes() {
        let bytes = encode(&[0.1, 0.2, 0.0, 0.3, 0.4, -0.05]);
        let lmks = landmarks_from_le_bytes(&bytes).unwrap();
        assert_eq!(lmks.len(), 2);
        assert_eq!(lmks[1].y, 0.4);
        assert_eq!(lmks[1].z, -0.05);

        assert!(landmarks_from_le_bytes(&encode(&[0.1, 0.2])).is_err());
    }

    #[test]
    fn test_hands_from_le_bytes() {
        let values: Vec<f32> = (0..2 * 21 * 3).map(|i| i as f32 / 1000.0).collect();
        let hands = hands_from_le_bytes(&encode(&values)).unwrap();
        assert_eq!(hands.len(), 2);
        assert_eq!(hands[1].wrist().x, (21 * 3) as f32 / 1000.0);

        let partial: Vec<f32> = vec![0.0; 20 * 3];
        assert!(hands_from_le_bytes(&encode(&partial)).is_err());
        assert!(hands_from_le_bytes(&[]).unwrap().is_empty());
    }
}
