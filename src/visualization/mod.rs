pub mod picture;
pub mod renderer;
