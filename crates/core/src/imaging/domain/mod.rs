pub mod image_decoder;
