pub mod calendar;
pub mod config;
pub mod curriculum;
pub mod distraction;
pub mod session;
pub mod stats;
pub mod timer;
