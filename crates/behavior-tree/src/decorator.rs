//! Decorator nodes.

use crate::{Behavior, Status};

/// Logical NOT of its child.
pub struct Inverter<C> {
    child: Box<dyn Behavior<C>>,
}

impl<C> Inverter<C> {
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Condition;

    #[test]
    fn inverts_child() {
        let not_stunned: Inverter<bool> =
            Inverter::new(Box::new(Condition::new(|stunned: &bool| *stunned)));
        assert_eq!(not_stunned.tick(&mut true), Status::Failure);
        assert_eq!(not_stunned.tick(&mut false), Status::Success);
    }
}
