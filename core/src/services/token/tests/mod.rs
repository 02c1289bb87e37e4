//! Token service tests

mod service_tests;
