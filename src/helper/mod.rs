pub mod face_helper;
pub mod hand_helper;
