pub mod point;
pub mod vector;

pub type FloatNum = f32;
