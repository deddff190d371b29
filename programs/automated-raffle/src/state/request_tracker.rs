use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    oracle::{RandomWordsRequest, RandomnessCoordinator},
    state::RaffleConfig,
};

// 9 outstanding: Option<u64> + 8 nonce
pub const REQUEST_TRACKER_SIZE: usize = 9 + 8;

/// Single-slot record of the randomness request the raffle is waiting on.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestTracker {
    outstanding: Option<u64>,
    nonce: u64,
}

impl RequestTracker {
    /// Asks the coordinator for random words and records the returned id as the
    /// outstanding request. Nothing is recorded if the coordinator fails.
    pub fn issue<C: RandomnessCoordinator>(
        &mut self,
        coordinator: &mut C,
        config: &RaffleConfig,
    ) -> Result<u64> {
        require!(
            self.outstanding.is_none(),
            RaffleError::RequestAlreadyOutstanding
        );
        let nonce = self.nonce.checked_add(1).ok_or(RaffleError::Overflow)?;

        let request_id =
            coordinator.request_random_words(&RandomWordsRequest::new(config, self.nonce))?;

        self.outstanding = Some(request_id);
        self.nonce = nonce;
        Ok(request_id)
    }

    pub fn ensure_outstanding(&self, request_id: u64) -> Result<()> {
        require!(
            self.outstanding == Some(request_id),
            RaffleError::UnknownRequest
        );
        Ok(())
    }

    /// Consumes the outstanding request if `request_id` matches it, handing back the
    /// random words for winner derivation. A consumed id can never match again.
    pub fn fulfill(&mut self, request_id: u64, random_words: Vec<u64>) -> Result<Vec<u64>> {
        self.ensure_outstanding(request_id)?;
        self.outstanding = None;
        Ok(random_words)
    }

    pub fn outstanding(&self) -> Option<u64> {
        self.outstanding
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }
}
