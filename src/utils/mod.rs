pub mod odds;
pub mod periods;
pub mod schedule;
pub mod standings;
pub mod table;
