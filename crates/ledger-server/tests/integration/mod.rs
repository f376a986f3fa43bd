pub mod common;

mod record_tests;
mod system_tests;
