use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    close_account, transfer_checked, CloseAccount, Mint, TokenAccount, TokenInterface,
    TransferChecked,
};

/// Move `amount` tokens between two token accounts of `mint`.
///
/// `signer_seeds` is required when `authority` is a PDA (the offer signing
/// for its vault) and must be `None` when the authority already signed the
/// transaction.
pub fn transfer_tokens<'info>(
    from: &InterfaceAccount<'info, TokenAccount>,
    to: &InterfaceAccount<'info, TokenAccount>,
    amount: u64,
    mint: &InterfaceAccount<'info, Mint>,
    authority: &AccountInfo<'info>,
    token_program: &Interface<'info, TokenInterface>,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from: from.to_account_info(),
        mint: mint.to_account_info(),
        to: to.to_account_info(),
        authority: authority.clone(),
    };
    let cpi_program = token_program.to_account_info();
    let cpi_ctx = match signer_seeds {
        Some(seeds) => CpiContext::new_with_signer(cpi_program, cpi_accounts, seeds),
        None => CpiContext::new(cpi_program, cpi_accounts),
    };

    transfer_checked(cpi_ctx, amount, mint.decimals)
}

/// Close an empty token account owned by a PDA and send its rent to `destination`
pub fn close_token_account<'info>(
    token_account: &InterfaceAccount<'info, TokenAccount>,
    destination: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    token_program: &Interface<'info, TokenInterface>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let cpi_accounts = CloseAccount {
        account: token_account.to_account_info(),
        destination: destination.clone(),
        authority: authority.clone(),
    };
    let cpi_program = token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

    close_account(cpi_ctx)
}
