//! Static content tables for every section of the portfolio page.
//!
//! Nothing in this crate carries behavior; editing copy here never touches the
//! rendering or submission code.

pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod footer;
pub mod projects;
pub mod skills;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
