pub mod gesture;
pub mod pipeline;
