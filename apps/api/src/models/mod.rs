pub mod job;
pub mod profile;
pub mod role;
