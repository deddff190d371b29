use anchor_lang::prelude::*;

// 8 entrance_fee + 8 interval + 4 callback_gas_limit + 8 subscription_id + 32 gas_lane + 32 vrf_coordinator
pub const RAFFLE_CONFIG_SIZE: usize = 8 + 8 + 4 + 8 + 32 + 32;

/// Deployment parameters, written once when the raffle is initialized.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RaffleConfig {
    /// Minimum deposit in lamports
    pub entrance_fee: u64,
    /// Minimum seconds between round closes
    pub interval: u64,
    /// Compute budget the oracle should attach to its callback
    pub callback_gas_limit: u32,
    /// Oracle subscription paying for requests
    pub subscription_id: u64,
    /// Oracle key hash selecting the quality-of-service lane
    pub gas_lane: [u8; 32],
    /// Signer allowed to deliver random words
    pub vrf_coordinator: Pubkey,
}
