//! Hostile decision making.
//!
//! Each tick an unstunned, living hostile that is not mid-attack fills a
//! [`Blackboard`] and runs its kind's tree. The tree only picks a [`Decision`];
//! [`super::Hostile`] carries it out.

use std::fmt;

use behavior_tree::Behavior;
use behavior_tree::builder::{action, condition, inverter, selector, sequence};

/// What a hostile does this tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Decision {
    /// Stand still.
    #[default]
    Hold,
    /// Wander around the spawn anchor.
    Patrol,
    Chase,
    Attack,
    /// Boss only: dash at the target.
    Charge,
}

/// Per-tick facts the trees branch on.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Blackboard {
    /// A living player exists.
    pub has_target: bool,
    /// Mobs: centre-to-centre distance. Boss: horizontal distance.
    pub distance: f32,
    pub attack_range: f32,
    pub chase_range: f32,
    pub attack_ready: bool,
    /// Phase 2, charge cooldown elapsed and the target far enough away.
    pub charge_ready: bool,
    pub decision: Decision,
}

impl Blackboard {
    fn in_attack_range(&self) -> bool {
        self.has_target && self.distance <= self.attack_range
    }

    fn in_chase_range(&self) -> bool {
        self.has_target && self.distance <= self.chase_range
    }
}

type Tree = Box<dyn Behavior<Blackboard>>;

fn decide(decision: Decision) -> Tree {
    action(move |board: &mut Blackboard| board.decision = decision)
}

/// Priority trees shared by every hostile of a kind.
pub struct HostileBrains {
    mob: Tree,
    boss: Tree,
}

impl HostileBrains {
    pub fn new() -> Self {
        Self {
            mob: Self::mob_tree(),
            boss: Self::boss_tree(),
        }
    }

    /// Attack if in range and ready, else chase if close, else patrol.
    fn mob_tree() -> Tree {
        selector(vec![
            sequence(vec![
                condition(|b: &Blackboard| b.in_attack_range() && b.attack_ready),
                decide(Decision::Attack),
            ]),
            sequence(vec![
                condition(Blackboard::in_chase_range),
                decide(Decision::Chase),
            ]),
            decide(Decision::Patrol),
        ])
    }

    /// Hold without a target; otherwise charge, then melee, then chase.
    fn boss_tree() -> Tree {
        selector(vec![
            sequence(vec![
                inverter(condition(|b: &Blackboard| b.has_target)),
                decide(Decision::Hold),
            ]),
            sequence(vec![
                condition(|b: &Blackboard| b.charge_ready),
                decide(Decision::Charge),
            ]),
            sequence(vec![
                condition(|b: &Blackboard| b.in_attack_range() && b.attack_ready),
                decide(Decision::Attack),
            ]),
            decide(Decision::Chase),
        ])
    }

    pub fn decide_mob(&self, board: &mut Blackboard) -> Decision {
        Self::run(&self.mob, board)
    }

    pub fn decide_boss(&self, board: &mut Blackboard) -> Decision {
        Self::run(&self.boss, board)
    }

    fn run(tree: &Tree, board: &mut Blackboard) -> Decision {
        board.decision = Decision::Hold;
        tree.tick(board);
        board.decision
    }
}

impl Default for HostileBrains {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HostileBrains {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostileBrains").finish_non_exhaustive()
    }
}
