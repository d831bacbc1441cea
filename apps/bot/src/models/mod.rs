pub mod application;
pub mod headshot;
pub mod job;
