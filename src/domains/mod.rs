//! Domains module containing business logic organized by bounded contexts.
//!
//! The server exposes a single domain, tools; resources and prompts are not
//! advertised.

pub mod tools;
