use anchor_lang::prelude::*;

use crate::{constants::MAX_PLAYERS, error::RaffleError};

// 4 vec length + 32 per player + 8 pool_balance
pub const ENTRY_LEDGER_SIZE: usize = 4 + 32 * MAX_PLAYERS + 8;

/// Entrants of the current round in entry order, and the lamports they deposited.
///
/// Gating on raffle state and entrance fee happens in the state machine before the
/// ledger is touched; the ledger itself only enforces capacity and arithmetic.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryLedger {
    players: Vec<Pubkey>,
    pool_balance: u64,
}

impl EntryLedger {
    pub fn enter(&mut self, player: Pubkey, amount: u64) -> Result<()> {
        require!(self.players.len() < MAX_PLAYERS, RaffleError::RaffleFull);
        let pool_balance = self
            .pool_balance
            .checked_add(amount)
            .ok_or(RaffleError::Overflow)?;

        self.players.push(player);
        self.pool_balance = pool_balance;
        Ok(())
    }

    pub fn player_at(&self, index: u64) -> Result<Pubkey> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.players.get(index))
            .copied()
            .ok_or_else(|| RaffleError::IndexOutOfRange.into())
    }

    pub fn count(&self) -> u64 {
        self.players.len() as u64
    }

    pub fn pool_balance(&self) -> u64 {
        self.pool_balance
    }

    pub fn players(&self) -> &[Pubkey] {
        &self.players
    }

    /// Drops every entrant and zeroes the pool. Called only once the prize has left
    /// the treasury.
    pub fn reset(&mut self) {
        self.players.clear();
        self.pool_balance = 0;
    }
}
