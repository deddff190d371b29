use anchor_lang::prelude::*;

use crate::error::RaffleError;

/// Moves the prize out of the raffle's custody.
///
/// A transfer either moves the full amount or fails with `TransferFailed`.
pub trait PayoutExecutor {
    fn transfer(&mut self, recipient: &Pubkey, amount: u64) -> Result<()>;
}

/// Pays from the program-owned treasury PDA to the winner account supplied with the
/// fulfillment. The treasury never drops below its rent-exempt reserve.
pub struct TreasuryPayout<'info> {
    treasury: AccountInfo<'info>,
    recipient: AccountInfo<'info>,
    rent_reserve: u64,
}

impl<'info> TreasuryPayout<'info> {
    pub fn new(treasury: AccountInfo<'info>, recipient: AccountInfo<'info>, rent_reserve: u64) -> Self {
        Self {
            treasury,
            recipient,
            rent_reserve,
        }
    }
}

impl<'info> PayoutExecutor for TreasuryPayout<'info> {
    fn transfer(&mut self, recipient: &Pubkey, amount: u64) -> Result<()> {
        if self.recipient.key != recipient {
            msg!(
                "Winner account mismatch: expected {}, got {}",
                recipient,
                self.recipient.key
            );
            return Err(RaffleError::TransferFailed.into());
        }

        let available = self
            .treasury
            .lamports()
            .checked_sub(self.rent_reserve)
            .ok_or(RaffleError::TransferFailed)?;
        require!(available >= amount, RaffleError::TransferFailed);

        // Direct lamport movement; the treasury is a PDA owned by this program
        self.treasury
            .sub_lamports(amount)
            .map_err(|_| RaffleError::TransferFailed)?;
        self.recipient
            .add_lamports(amount)
            .map_err(|_| RaffleError::TransferFailed)?;

        Ok(())
    }
}
