pub const RAFFLE_SEED: &[u8] = b"raffle";
pub const TREASURY_SEED: &[u8] = b"treasury";

/// Upper bound on entrants per round, fixed by the raffle account's allocated space.
pub const MAX_PLAYERS: usize = 100;

/// Block confirmations the oracle waits for before answering a request.
pub const REQUEST_CONFIRMATIONS: u16 = 3;

/// Random words requested per round. Winner selection reads only the first.
pub const NUM_WORDS: u32 = 1;

/// Domain separator for request id derivation.
pub const REQUEST_ID_DOMAIN: &[u8] = b"vrf-request";
