pub mod application;
pub mod automation;
pub mod job;
pub mod profile;
