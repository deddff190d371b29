use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;
use arrayref::array_ref;

use crate::{
    constants::{NUM_WORDS, REQUEST_CONFIRMATIONS, REQUEST_ID_DOMAIN},
    state::RaffleConfig,
};

/// Event emitted when a randomness request is published for the oracle
#[event]
pub struct RandomWordsRequested {
    /// The raffle that will receive the callback
    pub raffle: Pubkey,
    /// Identifier the oracle must echo back on fulfillment
    pub request_id: u64,
    pub gas_lane: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
}

/// Parameters of a single randomness request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomWordsRequest {
    pub gas_lane: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
    /// Count of requests issued before this one by the same raffle
    pub nonce: u64,
}

impl RandomWordsRequest {
    pub fn new(config: &RaffleConfig, nonce: u64) -> Self {
        Self {
            gas_lane: config.gas_lane,
            subscription_id: config.subscription_id,
            request_confirmations: REQUEST_CONFIRMATIONS,
            callback_gas_limit: config.callback_gas_limit,
            num_words: NUM_WORDS,
            nonce,
        }
    }
}

/// Capability to ask the external oracle for random words.
///
/// Implementations return the identifier the oracle will quote when it calls back.
/// Identifiers are never zero.
pub trait RandomnessCoordinator {
    fn request_random_words(&mut self, request: &RandomWordsRequest) -> Result<u64>;
}

/// On-chain coordinator client. The oracle watches the program log for
/// `RandomWordsRequested` and answers through `fulfill_random_words`.
pub struct CoordinatorClient {
    raffle: Pubkey,
    slot: u64,
}

impl CoordinatorClient {
    pub fn new(raffle: Pubkey, slot: u64) -> Self {
        Self { raffle, slot }
    }

    /// Derives the request id from the raffle, the request parameters, its nonce and
    /// the current slot, so ids cannot be precomputed before the round closes.
    pub fn derive_request_id(&self, request: &RandomWordsRequest) -> u64 {
        let hash = hashv(&[
            REQUEST_ID_DOMAIN,
            self.raffle.as_ref(),
            &request.gas_lane,
            &request.subscription_id.to_le_bytes(),
            &request.nonce.to_le_bytes(),
            &self.slot.to_le_bytes(),
        ])
        .to_bytes();

        u64::from_le_bytes(*array_ref![hash, 0, 8]).max(1)
    }
}

impl RandomnessCoordinator for CoordinatorClient {
    fn request_random_words(&mut self, request: &RandomWordsRequest) -> Result<u64> {
        let request_id = self.derive_request_id(request);

        emit!(RandomWordsRequested {
            raffle: self.raffle,
            request_id,
            gas_lane: request.gas_lane,
            subscription_id: request.subscription_id,
            request_confirmations: request.request_confirmations,
            callback_gas_limit: request.callback_gas_limit,
            num_words: request.num_words,
        });

        Ok(request_id)
    }
}
