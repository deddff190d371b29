use anchor_lang::prelude::*;
use instructions::*;
use upkeep::UpkeepStatus;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod machine;
pub mod oracle;
pub mod payout;
pub mod state;
pub mod upkeep;

#[cfg(test)]
mod testing;

declare_id!("FCZX53Y3Fn3kCxkHy6X2xthe3ZnH37rJTGAnpXikyEkN");

#[program]
pub mod automated_raffle {
    use super::*;

    pub fn initialize_raffle(
        ctx: Context<InitializeRaffle>,
        entrance_fee: u64,
        interval: u64,
        gas_lane: [u8; 32],
        subscription_id: u64,
        callback_gas_limit: u32,
        vrf_coordinator: Pubkey,
    ) -> Result<()> {
        instructions::initialize_raffle::initialize_raffle(
            ctx,
            entrance_fee,
            interval,
            gas_lane,
            subscription_id,
            callback_gas_limit,
            vrf_coordinator,
        )
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        instructions::enter_raffle::enter_raffle(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<ReadRaffle>) -> Result<UpkeepStatus> {
        instructions::views::check_upkeep(ctx)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
        instructions::perform_upkeep::perform_upkeep(ctx)
    }

    pub fn fulfill_random_words(
        ctx: Context<FulfillRandomWords>,
        request_id: u64,
        random_words: Vec<u64>,
    ) -> Result<()> {
        instructions::fulfill_random_words::fulfill_random_words(ctx, request_id, random_words)
    }

    pub fn get_player(ctx: Context<ReadRaffle>, index: u64) -> Result<Pubkey> {
        instructions::views::get_player(ctx, index)
    }
}
