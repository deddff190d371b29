use anchor_lang::prelude::*;

use crate::{
    constants::{RAFFLE_SEED, TREASURY_SEED},
    error::RaffleError,
    state::{Raffle, Treasury},
};

/// Event emitted when a player enters the raffle
#[event]
pub struct RaffleEnter {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The entrant's address
    pub player: Pubkey,
    /// Lamports deposited
    pub amount: u64,
    /// Round the entry belongs to
    pub round: u64,
}

/// Instruction to enter the current round
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `amount` - Lamports to deposit, at least the entrance fee
///
/// # Security Considerations
/// 1. Entry is refused while the raffle is calculating a winner
/// 2. Deposits below the entrance fee are refused
/// 3. The treasury balance is verified to have grown by exactly `amount`
///
/// # Implementation Notes
/// - Ledger is updated before the lamport transfer; a failed transfer reverts both
pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    ctx.accounts.raffle.enter_raffle(player, amount)?;

    let pre_transfer_balance = ctx.accounts.treasury.to_account_info().lamports();

    // Transfer lamports from the player to the raffle treasury
    anchor_lang::solana_program::program::invoke(
        &anchor_lang::solana_program::system_instruction::transfer(
            &player,
            &ctx.accounts.treasury.key(),
            amount,
        ),
        &[
            ctx.accounts.player.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
            ctx.accounts.treasury.to_account_info(),
        ],
    )?;

    let post_transfer_balance = ctx.accounts.treasury.to_account_info().lamports();
    require!(
        post_transfer_balance
            == pre_transfer_balance
                .checked_add(amount)
                .ok_or(RaffleError::Overflow)?,
        RaffleError::TransferFailed
    );

    emit!(RaffleEnter {
        raffle: ctx.accounts.raffle.key(),
        player,
        amount,
        round: ctx.accounts.raffle.round,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
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

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}
