use anchor_lang::prelude::*;

use crate::utils;

pub fn supports_interface(_ctx: Context<SupportsInterface>, interface_id: [u8; 4]) -> Result<bool> {
    Ok(utils::supports_interface(interface_id))
}

#[derive(Accounts)]
pub struct SupportsInterface {}
