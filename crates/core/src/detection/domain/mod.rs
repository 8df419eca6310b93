pub mod detection_context;
pub mod face_detector;
