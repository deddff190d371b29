//! Test doubles for the oracle and the payout path.

use std::collections::{HashMap, HashSet};

use anchor_lang::error::{Error, ERROR_CODE_OFFSET};
use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    oracle::{RandomWordsRequest, RandomnessCoordinator},
    payout::PayoutExecutor,
    state::RaffleConfig,
};

pub fn test_config(entrance_fee: u64, interval: u64) -> RaffleConfig {
    RaffleConfig {
        entrance_fee,
        interval,
        callback_gas_limit: 500_000,
        subscription_id: 1,
        gas_lane: [7; 32],
        vrf_coordinator: Pubkey::new_unique(),
    }
}

#[track_caller]
pub fn assert_raffle_error<T: std::fmt::Debug>(result: Result<T>, expected: RaffleError) {
    match result {
        Err(Error::AnchorError(error)) => assert_eq!(
            error.error_code_number,
            ERROR_CODE_OFFSET + expected as u32,
            "expected {:?}, got {}",
            expected,
            error.error_name
        ),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

/// Coordinator that hands out ids 1, 2, 3, ... and remembers every request.
#[derive(Default)]
pub struct MockCoordinator {
    pub requests: Vec<RandomWordsRequest>,
    fail: bool,
}

impl MockCoordinator {
    pub fn failing() -> Self {
        Self {
            requests: Vec::new(),
            fail: true,
        }
    }
}

impl RandomnessCoordinator for MockCoordinator {
    fn request_random_words(&mut self, request: &RandomWordsRequest) -> Result<u64> {
        if self.fail {
            return Err(ProgramError::InvalidArgument.into());
        }
        self.requests.push(request.clone());
        Ok(self.requests.len() as u64)
    }
}

/// In-memory ledger of external balances. Recipients in `rejected` refuse funds.
#[derive(Default)]
pub struct MockBank {
    pub balances: HashMap<Pubkey, u64>,
    pub transfers: Vec<(Pubkey, u64)>,
    rejected: HashSet<Pubkey>,
}

impl MockBank {
    pub fn rejecting(recipient: Pubkey) -> Self {
        Self {
            rejected: HashSet::from([recipient]),
            ..Self::default()
        }
    }

    pub fn balance(&self, account: &Pubkey) -> u64 {
        self.balances.get(account).copied().unwrap_or(0)
    }
}

impl PayoutExecutor for MockBank {
    fn transfer(&mut self, recipient: &Pubkey, amount: u64) -> Result<()> {
        require!(
            !self.rejected.contains(recipient),
            RaffleError::TransferFailed
        );
        *self.balances.entry(*recipient).or_default() += amount;
        self.transfers.push((*recipient, amount));
        Ok(())
    }
}
