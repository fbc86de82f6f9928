// Match Engine: scores a student profile against the fixed internship catalog.
// Pure and deterministic; never touches the session beyond reading the profile.

pub mod catalog;
pub mod degrees;
pub mod handlers;
pub mod ranking;
pub mod scoring;
