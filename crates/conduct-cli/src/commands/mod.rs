pub mod dispatch;

mod class;
mod incident;
mod record;
mod report;
mod seed;
mod shared;
mod student;
mod year;
