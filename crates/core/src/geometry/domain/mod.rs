pub mod face_shapes;
pub mod landmark_set;
pub mod shape_classifier;
