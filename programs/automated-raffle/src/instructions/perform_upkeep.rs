use anchor_lang::prelude::*;

use crate::{constants::RAFFLE_SEED, oracle::CoordinatorClient, state::Raffle};

/// Event emitted when a round closes and randomness is requested
#[event]
pub struct RequestedRaffleWinner {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// Identifier the oracle will answer with
    pub request_id: u64,
    /// Round being closed
    pub round: u64,
}

/// Closes the current round and asks the oracle for a random word.
///
/// Permissionless: any automation service may call it. The upkeep predicate is
/// re-evaluated against the on-chain clock, so a stale off-chain `check_upkeep`
/// read cannot force a close.
pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
    let clock = Clock::get()?;
    let raffle_key = ctx.accounts.raffle.key();
    let mut coordinator = CoordinatorClient::new(raffle_key, clock.slot);

    let request_id = ctx
        .accounts
        .raffle
        .perform_upkeep(clock.unix_timestamp, &mut coordinator)?;

    emit!(RequestedRaffleWinner {
        raffle: raffle_key,
        request_id,
        round: ctx.accounts.raffle.round,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}
