use anchor_lang::prelude::*;

use crate::{
    constants::{RAFFLE_SEED, TREASURY_SEED},
    error::RaffleError,
    state::{Raffle, RaffleConfig, Treasury, RAFFLE_ACCOUNT_SIZE, TREASURY_ACCOUNT_SIZE},
};

/// Event emitted when the raffle is created
#[event]
pub struct RaffleInitialized {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// Minimum deposit per entry in lamports
    pub entrance_fee: u64,
    /// Seconds between round closes
    pub interval: u64,
    /// Signer allowed to deliver randomness
    pub vrf_coordinator: Pubkey,
    /// When the first round opened
    pub opened_at: i64,
}

/// Instruction to create the raffle and its treasury
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `entrance_fee` - Minimum deposit per entry in lamports (must be > 0)
/// * `interval` - Minimum seconds between round closes (must be > 0)
/// * `gas_lane` - Oracle key hash selecting the randomness lane
/// * `subscription_id` - Oracle subscription funding the requests
/// * `callback_gas_limit` - Compute budget for the oracle callback (must be > 0)
/// * `vrf_coordinator` - Signer that will deliver random words
///
/// # Implementation Notes
/// - The configuration is immutable once written
/// - Round 0 opens immediately and the interval is measured from now
/// - Treasury PDA is created with seeds ["treasury", raffle_key]
pub fn initialize_raffle(
    ctx: Context<InitializeRaffle>,
    entrance_fee: u64,
    interval: u64,
    gas_lane: [u8; 32],
    subscription_id: u64,
    callback_gas_limit: u32,
    vrf_coordinator: Pubkey,
) -> Result<()> {
    require!(entrance_fee > 0, RaffleError::InvalidEntranceFee);
    require!(interval > 0, RaffleError::InvalidInterval);
    require!(callback_gas_limit > 0, RaffleError::InvalidCallbackGasLimit);

    let now = Clock::get()?.unix_timestamp;
    let config = RaffleConfig {
        entrance_fee,
        interval,
        callback_gas_limit,
        subscription_id,
        gas_lane,
        vrf_coordinator,
    };

    ctx.accounts.raffle.set_inner(Raffle::new(
        config,
        now,
        ctx.bumps.raffle,
        ctx.bumps.treasury,
    ));
    ctx.accounts.treasury.raffle = ctx.accounts.raffle.key();
    ctx.accounts.treasury.bump = ctx.bumps.treasury;

    emit!(RaffleInitialized {
        raffle: ctx.accounts.raffle.key(),
        entrance_fee,
        interval,
        vrf_coordinator,
        opened_at: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRaffle<'info> {
    #[account(
        init,
        payer = authority,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [RAFFLE_SEED],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        init,
        payer = authority,
        space = TREASURY_ACCOUNT_SIZE,
        seeds = [
            TREASURY_SEED,
            raffle.key().as_ref(),
        ],
        bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
