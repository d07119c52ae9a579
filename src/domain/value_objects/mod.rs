pub mod enums;
pub mod upload;
