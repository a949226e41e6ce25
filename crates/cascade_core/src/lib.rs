//! Cascade Core Primitive
//!
//! This crate provides the composability primitive the Cascade libraries are
//! built on:
//!
//! - **Actions**: a local effect plus an ordered list of reactions
//! - **Reactions**: actions referenced by other actions, fired during
//!   propagation
//! - **Propagation**: synchronous, depth-first delivery of one shared
//!   context value through an entire action tree
//!
//! Invoking [`Action::act`] runs the action's own effect first, then hands
//! the same context to every reaction's `act`, recursively, in list order.
//! The context is an opaque caller payload; the core never inspects it.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use cascade_core::{Action, ActionRef, FnAction};
//!
//! // Reactions are plain actions, shared by reference.
//! let audit: ActionRef<Vec<String>> = Rc::new(FnAction::new(|log: &mut Vec<String>| {
//!     log.push("audit".into());
//!     Ok(())
//! }));
//!
//! let save = FnAction::new(|log: &mut Vec<String>| {
//!     log.push("save".into());
//!     Ok(())
//! })
//! .with_reactions([audit]);
//!
//! let mut log = Vec::new();
//! save.act(&mut log).unwrap();
//! assert_eq!(log, ["save", "audit"]);
//! ```
//!
//! The core is single-threaded by design: handles are [`std::rc::Rc`] and
//! reaction lists use interior mutability so freely shared actions can still
//! be rewired in place. Nothing here blocks, yields, or spawns.

pub mod action;
pub mod effect;
pub mod error;
pub mod reaction;

pub use action::{Action, Cascade};
pub use effect::FnAction;
pub use error::{ActionError, Result};
pub use reaction::{ActionRef, ReactionList, Reactions};
