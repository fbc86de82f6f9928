// Session layer: per-client state kept in memory for the life of the process.
// The coach and the match handlers receive the bag explicitly; nothing here
// knows about scenarios or scoring beyond the bag's shape.

pub mod bag;
pub mod handlers;
pub mod middleware;
pub mod store;
