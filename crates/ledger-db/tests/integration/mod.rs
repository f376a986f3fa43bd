
mod user_tests;
