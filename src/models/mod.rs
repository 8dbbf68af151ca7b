pub mod decision;
pub mod goal;
pub mod intake;
pub mod progress;
pub mod weekly;
