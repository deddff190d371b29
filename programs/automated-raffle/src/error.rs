use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    Overflow,
    #[msg("Deposit is below the entrance fee")]
    InsufficientFunds,
    #[msg("Raffle is not open for entries")]
    NotOpen,
    #[msg("Upkeep conditions are not met")]
    UpkeepNotNeeded,
    #[msg("A randomness request is already outstanding")]
    RequestAlreadyOutstanding,
    #[msg("Request id does not match the outstanding randomness request")]
    UnknownRequest,
    #[msg("Prize transfer failed")]
    TransferFailed,
    #[msg("Player index is out of range")]
    IndexOutOfRange,
    #[msg("No players in the current round")]
    NoPlayers,
    #[msg("Fulfillment carried no random words")]
    NoRandomWords,
    #[msg("Maximum number of players reached for this round")]
    RaffleFull,
    #[msg("Only the configured VRF coordinator can fulfill randomness")]
    OnlyCoordinatorCanFulfill,
    #[msg("Entrance fee must be greater than zero")]
    InvalidEntranceFee,
    #[msg("Interval must be greater than zero")]
    InvalidInterval,
    #[msg("Callback gas limit must be greater than zero")]
    InvalidCallbackGasLimit,
}
