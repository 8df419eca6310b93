pub mod precomputed_landmark_detector;
pub mod timeout_face_detector;
