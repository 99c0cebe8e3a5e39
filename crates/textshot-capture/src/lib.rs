mod file;
mod provider;
mod temp;

pub use file::{open_file, save_image};
pub use provider::{CaptureTool, capture_region, run_tools};
pub use temp::TempCapture;
