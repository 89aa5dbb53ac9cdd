pub mod timestamp;
pub mod uuid;

pub mod author;
