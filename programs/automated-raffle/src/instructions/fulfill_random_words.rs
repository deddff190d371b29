use anchor_lang::prelude::*;

use crate::{
    constants::{RAFFLE_SEED, TREASURY_SEED},
    error::RaffleError,
    payout::TreasuryPayout,
    state::{Raffle, Treasury, TREASURY_ACCOUNT_SIZE},
};

/// Event emitted when a winner is paid
#[event]
pub struct WinnerPicked {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The winner's address
    pub winner: Pubkey,
    /// Lamports paid out
    pub prize: u64,
    /// Round that was settled
    pub round: u64,
}

/// Oracle callback delivering random words for the outstanding request.
///
/// # Security Considerations
/// 1. Only the configured VRF coordinator may sign
/// 2. The request id must match the single outstanding request; stale, replayed
///    and never-issued ids are rejected
/// 3. The `winner` account must be the entrant drawn from the random word,
///    otherwise the transfer fails and nothing changes
///
/// # Implementation Notes
/// - Winner index is `random_words[0] % number_of_players`
/// - The treasury keeps its rent-exempt reserve; only the pool is paid out
pub fn fulfill_random_words(
    ctx: Context<FulfillRandomWords>,
    request_id: u64,
    random_words: Vec<u64>,
) -> Result<()> {
    let rent_reserve = Rent::get()?.minimum_balance(TREASURY_ACCOUNT_SIZE);
    let mut payout = TreasuryPayout::new(
        ctx.accounts.treasury.to_account_info(),
        ctx.accounts.winner.to_account_info(),
        rent_reserve,
    );

    let settled = ctx
        .accounts
        .raffle
        .fulfill_random_words(request_id, random_words, &mut payout)?;

    msg!(
        "Round {} settled: entrant {} wins {} lamports",
        settled.round,
        settled.winner_index,
        settled.prize
    );

    emit!(WinnerPicked {
        raffle: ctx.accounts.raffle.key(),
        winner: settled.winner,
        prize: settled.prize,
        round: settled.round,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
        constraint = raffle.config.vrf_coordinator == vrf_coordinator.key() @ RaffleError::OnlyCoordinatorCanFulfill,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        mut,
        seeds = [
            TREASURY_SEED,
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    pub vrf_coordinator: Signer<'info>,

    /// CHECK: Matched against the drawn entrant before any lamports move.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}
