pub mod errors;
pub mod utils;
pub mod console;
pub mod runner;
