use anchor_lang::prelude::*;

/// Prefix of every offer PDA: ["offer", maker, id (le bytes)]
#[constant]
pub const OFFER_SEED: &[u8] = b"offer";

pub const ANCHOR_DISCRIMINATOR: usize = 8;
