//! Internal test modules - whitebox tests with crate access
//!
//! Fixture-driven tests that exercise the splitter, validator, resolvers and
//! report rendering together.
