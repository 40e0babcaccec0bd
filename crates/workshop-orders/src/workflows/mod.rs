pub mod inspection;
pub mod orders;
pub mod report;
