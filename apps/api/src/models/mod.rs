pub mod internship;
pub mod profile;
