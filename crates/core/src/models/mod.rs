pub mod auth;
pub mod school;
pub mod timetable;
pub mod weekday;
