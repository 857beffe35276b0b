pub mod face_gestures;
pub mod single_hand;
pub mod two_hand;
