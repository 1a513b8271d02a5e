pub mod collision;
pub mod element;
pub mod math;
pub mod meta;
pub mod scene;
pub mod shape;
