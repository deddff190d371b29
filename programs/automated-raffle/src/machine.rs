use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    oracle::RandomnessCoordinator,
    payout::PayoutExecutor,
    state::{Raffle, RaffleState},
    upkeep::check_upkeep,
};

/// Outcome of a successful fulfillment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundSettled {
    pub winner: Pubkey,
    pub winner_index: u64,
    pub prize: u64,
    /// Round that was just paid out
    pub round: u64,
}

/// State transitions of the raffle.
///
/// Every transition validates all of its preconditions before writing, so a failed
/// call leaves the account exactly as it found it.
impl Raffle {
    pub fn enter_raffle(&mut self, player: Pubkey, amount: u64) -> Result<()> {
        require!(
            self.raffle_state == RaffleState::Open,
            RaffleError::NotOpen
        );
        require!(
            amount >= self.config.entrance_fee,
            RaffleError::InsufficientFunds
        );

        self.ledger.enter(player, amount)
    }

    /// Closes the round and requests randomness. The upkeep predicate is evaluated
    /// again here rather than trusted from an earlier `check_upkeep` read.
    pub fn perform_upkeep<C: RandomnessCoordinator>(
        &mut self,
        now: i64,
        coordinator: &mut C,
    ) -> Result<u64> {
        let status = check_upkeep(self, now);
        if !status.upkeep_needed {
            msg!(
                "Upkeep not needed: balance={}, players={}, state={:?}, elapsed={}",
                status.pool_balance,
                status.num_players,
                status.raffle_state,
                status.elapsed
            );
            return Err(RaffleError::UpkeepNotNeeded.into());
        }

        let request_id = self.requests.issue(coordinator, &self.config)?;
        self.raffle_state = RaffleState::Calculating;
        self.latest_timestamp = now;

        Ok(request_id)
    }

    /// Settles the round with the oracle's random words.
    ///
    /// The prize is paid before the request slot is consumed. If the payout fails the
    /// raffle stays CALCULATING with the same request outstanding.
    pub fn fulfill_random_words<P: PayoutExecutor>(
        &mut self,
        request_id: u64,
        random_words: Vec<u64>,
        payout: &mut P,
    ) -> Result<RoundSettled> {
        self.requests.ensure_outstanding(request_id)?;
        let seed = *random_words.first().ok_or(RaffleError::NoRandomWords)?;

        let num_players = self.ledger.count();
        require!(num_players > 0, RaffleError::NoPlayers);

        // Plain modulo, no rejection sampling
        let winner_index = seed % num_players;
        let winner = self.ledger.player_at(winner_index)?;
        let prize = self.ledger.pool_balance();
        let round = self.round;
        let next_round = round.checked_add(1).ok_or(RaffleError::Overflow)?;

        payout.transfer(&winner, prize)?;

        self.requests.fulfill(request_id, random_words)?;
        self.ledger.reset();
        self.recent_winner = Some(winner);
        self.round = next_round;
        self.raffle_state = RaffleState::Open;

        Ok(RoundSettled {
            winner,
            winner_index,
            prize,
            round,
        })
    }
}
