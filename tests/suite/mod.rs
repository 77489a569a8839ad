//! Integration suite modules.

mod transcript;
