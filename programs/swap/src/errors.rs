use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Invalid amount: amount must be greater than zero")]
    InvalidAmount,
    #[msg("Token mints must be different")]
    SameTokenMints,
    #[msg("Maker does not hold enough of token A for the deposit")]
    InsufficientMakerBalance,
    #[msg("Taker does not hold enough of token B to settle the offer")]
    InsufficientTakerBalance,
}
