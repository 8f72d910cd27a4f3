pub mod entity;
pub mod keys;
pub mod wire;
