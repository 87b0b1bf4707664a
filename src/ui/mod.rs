pub mod dashboard;
pub mod upload;
