pub mod compositor;
pub mod frame;
pub mod pipeline;
pub mod surface;
