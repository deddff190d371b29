use anchor_lang::prelude::*;

use super::{
    EntryLedger, RaffleConfig, RequestTracker, ENTRY_LEDGER_SIZE, RAFFLE_CONFIG_SIZE,
    REQUEST_TRACKER_SIZE,
};

// Space calculation:
// 8 (discriminator) +
// config +
// 1 (raffle_state) +
// 8 (latest_timestamp) +
// 33 (recent_winner: Option<Pubkey>) +
// 8 (round) +
// ledger +
// requests +
// 1 (bump) +
// 1 (treasury_bump)
pub const RAFFLE_ACCOUNT_SIZE: usize =
    8 + RAFFLE_CONFIG_SIZE + 1 + 8 + 33 + 8 + ENTRY_LEDGER_SIZE + REQUEST_TRACKER_SIZE + 1 + 1;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaffleState {
    Open = 0,
    Calculating = 1,
}

#[account]
#[derive(Debug)]
pub struct Raffle {
    pub config: RaffleConfig,
    pub raffle_state: RaffleState,
    /// Last OPEN -> CALCULATING transition, or initialization time before the first
    pub latest_timestamp: i64,
    pub recent_winner: Option<Pubkey>,
    /// Completed rounds
    pub round: u64,
    pub ledger: EntryLedger,
    pub requests: RequestTracker,
    pub bump: u8,
    pub treasury_bump: u8,
}

impl Raffle {
    pub fn new(config: RaffleConfig, now: i64, bump: u8, treasury_bump: u8) -> Self {
        Self {
            config,
            raffle_state: RaffleState::Open,
            latest_timestamp: now,
            recent_winner: None,
            round: 0,
            ledger: EntryLedger::default(),
            requests: RequestTracker::default(),
            bump,
            treasury_bump,
        }
    }

    pub fn entrance_fee(&self) -> u64 {
        self.config.entrance_fee
    }

    pub fn interval(&self) -> u64 {
        self.config.interval
    }

    pub fn raffle_state(&self) -> RaffleState {
        self.raffle_state
    }

    pub fn latest_timestamp(&self) -> i64 {
        self.latest_timestamp
    }

    pub fn number_of_players(&self) -> u64 {
        self.ledger.count()
    }

    pub fn player_at(&self, index: u64) -> Result<Pubkey> {
        self.ledger.player_at(index)
    }

    pub fn recent_winner(&self) -> Option<Pubkey> {
        self.recent_winner
    }

    pub fn pool_balance(&self) -> u64 {
        self.ledger.pool_balance()
    }

    pub fn outstanding_request(&self) -> Option<u64> {
        self.requests.outstanding()
    }
}
