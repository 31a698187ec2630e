use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{
    constants::OFFER_SEED,
    errors::EscrowError,
    events::OfferTaken,
    instructions::shared::{close_token_account, transfer_tokens},
    state::Offer,
};

#[derive(Accounts)]
pub struct TakeOffer<'info> {
    /// The taker who accepts the exchange terms
    #[account(mut)]
    pub taker: Signer<'info>,

    /// The maker who opened the offer, receives Token B and all rent
    #[account(mut)]
    pub maker: SystemAccount<'info>,

    /// Token A mint
    pub token_mint_a: Box<InterfaceAccount<'info, Mint>>,

    /// Token B mint
    pub token_mint_b: Box<InterfaceAccount<'info, Mint>>,

    /// Taker's associated token account for Token A (receives the vault)
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = token_mint_a,
        associated_token::authority = taker,
        associated_token::token_program = token_program,
    )]
    pub taker_token_account_a: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Taker's associated token account for Token B (source of payment)
    #[account(
        mut,
        associated_token::mint = token_mint_b,
        associated_token::authority = taker,
        associated_token::token_program = token_program,
    )]
    pub taker_token_account_b: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Maker's associated token account for Token B (receives payment)
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = token_mint_b,
        associated_token::authority = maker,
        associated_token::token_program = token_program,
    )]
    pub maker_token_account_b: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Offer account storing the exchange terms (closed to the maker)
    #[account(
        mut,
        close = maker,
        has_one = maker,
        has_one = token_mint_a,
        has_one = token_mint_b,
        seeds = [OFFER_SEED, maker.key().as_ref(), offer.id.to_le_bytes().as_ref()],
        bump = offer.bump,
    )]
    pub offer: Box<Account<'info, Offer>>,

    /// Vault holding Token A (authority is the offer PDA)
    #[account(
        mut,
        associated_token::mint = token_mint_a,
        associated_token::authority = offer,
        associated_token::token_program = token_program,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> TakeOffer<'info> {
    /// Transfer the wanted amount of Token B from the taker to the maker
    pub fn send_wanted_tokens_to_maker(&mut self) -> Result<()> {
        require_gte!(
            self.taker_token_account_b.amount,
            self.offer.token_b_wanted_amount,
            EscrowError::InsufficientTakerBalance
        );

        transfer_tokens(
            &self.taker_token_account_b,
            &self.maker_token_account_b,
            self.offer.token_b_wanted_amount,
            &self.token_mint_b,
            &self.taker.to_account_info(),
            &self.token_program,
            None,
        )
    }

    /// Withdraw all Token A from the vault to the taker, then close the vault
    pub fn withdraw_and_close_vault(&mut self) -> Result<()> {
        let id_bytes = self.offer.id.to_le_bytes();
        let signer_seeds: &[&[&[u8]]] = &[&[
            OFFER_SEED,
            self.maker.key.as_ref(),
            id_bytes.as_ref(),
            &[self.offer.bump],
        ]];

        transfer_tokens(
            &self.vault,
            &self.taker_token_account_a,
            self.vault.amount,
            &self.token_mint_a,
            &self.offer.to_account_info(),
            &self.token_program,
            Some(signer_seeds),
        )?;

        close_token_account(
            &self.vault,
            &self.maker.to_account_info(),
            &self.offer.to_account_info(),
            &self.token_program,
            signer_seeds,
        )
    }
}

/// Handler for the take_offer instruction
pub fn handler(ctx: Context<TakeOffer>) -> Result<()> {
    let token_a_amount = ctx.accounts.vault.amount;
    let token_b_amount = ctx.accounts.offer.token_b_wanted_amount;

    // Debit the taker first so an underfunded taker fails before any PDA-signed move
    ctx.accounts.send_wanted_tokens_to_maker()?;
    ctx.accounts.withdraw_and_close_vault()?;

    msg!(
        "Offer {} taken: {} of token A for {} of token B",
        ctx.accounts.offer.id,
        token_a_amount,
        token_b_amount
    );
    emit!(OfferTaken {
        offer: ctx.accounts.offer.key(),
        maker: ctx.accounts.maker.key(),
        taker: ctx.accounts.taker.key(),
        token_a_amount,
        token_b_amount,
    });

    Ok(())
}
