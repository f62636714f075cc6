use crate::BlockNumber;
use std::collections::BTreeMap;

/// Protocol upgrades the RPC layer needs to know about.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum Hardfork {
    Homestead,
    Byzantium,
    Constantinople,
    Petersburg,
    Istanbul,
    /// Introduces the EIP-1559 fee market.
    London,
}

/// The condition at which a fork is activated.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum ForkCondition {
    /// The fork is activated after a certain block.
    Block(BlockNumber),
    /// The fork is never activated.
    #[default]
    Never,
}

impl ForkCondition {
    /// Returns `true` if the fork is active at the given block number.
    pub const fn active_at_block(&self, current_block: BlockNumber) -> bool {
        matches!(self, Self::Block(block) if current_block >= *block)
    }
}

/// Activation blocks of the hardforks of a chain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ForkSchedule {
    forks: BTreeMap<Hardfork, ForkCondition>,
}

impl ForkSchedule {
    /// A schedule with every known fork active from genesis.
    pub fn all_at_genesis() -> Self {
        [
            Hardfork::Homestead,
            Hardfork::Byzantium,
            Hardfork::Constantinople,
            Hardfork::Petersburg,
            Hardfork::Istanbul,
            Hardfork::London,
        ]
        .into_iter()
        .fold(Self::default(), |schedule, fork| schedule.with_fork(fork, ForkCondition::Block(0)))
    }

    /// Sets the activation condition of a fork.
    pub fn with_fork(mut self, fork: Hardfork, condition: ForkCondition) -> Self {
        self.forks.insert(fork, condition);
        self
    }

    /// Returns the activation condition of the fork, [`ForkCondition::Never`] if unknown.
    pub fn fork(&self, fork: Hardfork) -> ForkCondition {
        self.forks.get(&fork).copied().unwrap_or_default()
    }

    /// Returns `true` if the fork is active at the given block number.
    pub fn is_fork_active(&self, fork: Hardfork, block: BlockNumber) -> bool {
        self.fork(fork).active_at_block(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_is_inclusive() {
        let schedule = ForkSchedule::default().with_fork(Hardfork::London, ForkCondition::Block(10));
        assert!(!schedule.is_fork_active(Hardfork::London, 9));
        assert!(schedule.is_fork_active(Hardfork::London, 10));
        assert!(schedule.is_fork_active(Hardfork::London, 11));
        assert!(!schedule.is_fork_active(Hardfork::Istanbul, 11));
    }

    #[test]
    fn genesis_schedule() {
        let schedule = ForkSchedule::all_at_genesis();
        assert!(schedule.is_fork_active(Hardfork::London, 0));
        assert_eq!(schedule.fork(Hardfork::Byzantium), ForkCondition::Block(0));
    }
}
