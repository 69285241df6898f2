pub mod color;
pub mod deck;
pub mod model;
pub mod setup;
pub mod slide;
