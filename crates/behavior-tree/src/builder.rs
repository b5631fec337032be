//! Boxed constructors so trees read as nested lists.
//!
//! `selector(vec![...])` instead of `Box::new(Selector::new(vec![...]))`.

use crate::{Action, Behavior, Condition, Inverter, Selector, Sequence};

/// Creates a sequence node: succeeds only if every child succeeds, in order.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node: the first succeeding child wins.
///
/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

/// Creates an inverter node.
///
/// Shorthand for `Box::new(Inverter::new(child))`.
#[inline]
pub fn inverter<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Inverter::new(child))
}

/// Creates a condition leaf that succeeds when `check` holds.
///
/// # Arguments
///
/// * `check` - Read-only predicate over the blackboard.
#[inline]
pub fn condition<C, F>(check: F) -> Box<dyn Behavior<C>>
where
    C: 'static,
    F: Fn(&C) -> bool + Send + Sync + 'static,
{
    Box::new(Condition::new(check))
}

/// Creates an action leaf that runs `run` and always succeeds.
///
/// # Arguments
///
/// * `run` - Writes the decision into the blackboard.
#[inline]
pub fn action<C, F>(run: F) -> Box<dyn Behavior<C>>
where
    C: 'static,
    F: Fn(&mut C) + Send + Sync + 'static,
{
    Box::new(Action::new(run))
}
