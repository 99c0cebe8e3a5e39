pub mod error;
pub mod normalize;
pub mod presentation;
pub mod viewport;
