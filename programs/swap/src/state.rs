use anchor_lang::prelude::*;

use crate::constants::{ANCHOR_DISCRIMINATOR, OFFER_SEED};

/// Offer account that stores the exchange terms of one open trade
#[account]
#[derive(InitSpace)]
pub struct Offer {
    /// Maker-chosen identifier, part of the PDA seeds
    pub id: u64,
    /// The maker's wallet address (creator of the offer)
    pub maker: Pubkey,
    /// Token A mint address (the token the maker deposits)
    pub token_mint_a: Pubkey,
    /// Token B mint address (the token the maker wants to receive)
    pub token_mint_b: Pubkey,
    /// Amount of Token B the maker wants to receive
    pub token_b_wanted_amount: u64,
    /// Bump seed for PDA derivation (cached for re-signing)
    pub bump: u8,
}

impl Offer {
    pub const SPACE: usize = ANCHOR_DISCRIMINATOR + Offer::INIT_SPACE;

    /// Derive the offer PDA and its bump for `(maker, id)`
    pub fn find_address(maker: &Pubkey, id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[OFFER_SEED, maker.as_ref(), id.to_le_bytes().as_ref()],
            &crate::ID,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_covers_discriminator_and_fields() {
        assert_eq!(Offer::INIT_SPACE, 8 + 32 + 32 + 32 + 8 + 1);
        assert_eq!(Offer::SPACE, 121);
    }

    #[test]
    fn find_address_is_deterministic() {
        let maker = Pubkey::new_unique();

        let (first, first_bump) = Offer::find_address(&maker, 42);
        let (second, second_bump) = Offer::find_address(&maker, 42);

        assert_eq!(first, second);
        assert_eq!(first_bump, second_bump);
    }

    #[test]
    fn find_address_is_reproducible_from_stored_bump() {
        let maker = Pubkey::new_unique();
        let id: u64 = 7;

        let (offer, bump) = Offer::find_address(&maker, id);
        let recreated = Pubkey::create_program_address(
            &[OFFER_SEED, maker.as_ref(), &id.to_le_bytes(), &[bump]],
            &crate::ID,
        )
        .unwrap();
        assert_eq!(recreated, offer);
    }

    #[test]
    fn distinct_maker_or_id_gives_distinct_address() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        let (alice_1, _) = Offer::find_address(&alice, 1);
        let (alice_2, _) = Offer::find_address(&alice, 2);
        let (bob_1, _) = Offer::find_address(&bob, 1);

        assert_ne!(alice_1, alice_2);
        assert_ne!(alice_1, bob_1);
    }
}
