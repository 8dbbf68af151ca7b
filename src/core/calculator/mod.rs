pub mod goal;
pub mod limits;
pub mod progress;
pub mod reminder;
pub mod weekly;
