pub mod school;
pub mod timetable;
pub mod users;
