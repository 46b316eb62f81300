mod export_tests;
mod json_tests;
mod routing_tests;
