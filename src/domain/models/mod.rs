pub mod aspect;
pub mod asset;
pub mod reference;
pub mod video;
