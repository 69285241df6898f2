pub mod fit;
pub mod lower_third;
pub mod text;
