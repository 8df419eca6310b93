pub mod color;
pub mod detection;
pub mod geometry;
pub mod imaging;
pub mod persistence;
pub mod pipeline;
pub mod recommendation;
pub mod sampling;
pub mod shared;
