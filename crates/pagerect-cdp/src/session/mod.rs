//! CDP session attached to a single page or iframe target.

mod core;
mod dom;
mod js;
mod layout;

pub use self::core::PageSession;

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
