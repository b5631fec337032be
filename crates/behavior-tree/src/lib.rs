//! Small behavior tree for frame-driven game AI.
//!
//! A tree is re-evaluated from the root every simulation tick against a
//! blackboard `C`. Nodes never suspend: a tick either succeeds or fails, and
//! anything that spans several frames (an attack window, a charge) lives in the
//! entity's own state machine, not in the tree.
//!
//! - [`Behavior`]: the node trait
//! - [`Status`]: `Success` or `Failure`
//! - Composites: [`Sequence`], [`Selector`]
//! - Decorator: [`Inverter`]
//! - Leaves: [`Condition`], [`Action`]
//!
//! The [`builder`] functions keep tree definitions short:
//!
//! ```
//! use behavior_tree::builder::{action, condition, selector, sequence};
//! use behavior_tree::Behavior;
//!
//! struct Board { near: bool, picked: &'static str }
//!
//! let tree = selector(vec![
//!     sequence(vec![
//!         condition(|b: &Board| b.near),
//!         action(|b: &mut Board| b.picked = "attack"),
//!     ]),
//!     action(|b: &mut Board| b.picked = "patrol"),
//! ]);
//!
//! let mut board = Board { near: true, picked: "" };
//! tree.tick(&mut board);
//! assert_eq!(board.picked, "attack");
//! ```

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod leaf;
pub mod status;

pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use decorator::Inverter;
pub use leaf::{Action, Condition};
pub use status::Status;
