pub mod charts;
pub mod health;
pub mod records;
pub mod uploads;
