mod utils;

mod export_tests;
