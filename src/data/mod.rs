pub mod frames;

pub use frames::{binarize, black_pixel_count, frame_path, load_frame, pixel_count_target};
