use anchor_lang::prelude::*;

use crate::{
    constants::RAFFLE_SEED,
    state::Raffle,
    upkeep::{self, UpkeepStatus},
};

/// Read-only upkeep check for automation services, returned as instruction return
/// data. Intended for simulation; it never writes.
pub fn check_upkeep(ctx: Context<ReadRaffle>) -> Result<UpkeepStatus> {
    let now = Clock::get()?.unix_timestamp;
    Ok(upkeep::check_upkeep(&ctx.accounts.raffle, now))
}

pub fn get_player(ctx: Context<ReadRaffle>, index: u64) -> Result<Pubkey> {
    ctx.accounts.raffle.player_at(index)
}

#[derive(Accounts)]
pub struct ReadRaffle<'info> {
    #[account(
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}
