mod config_tests;
mod fakes;
