use crate::constants::{
    ED25519_PROGRAM_ID, INTERFACE_DETECTION_ID, SIGNATURE_VALIDATOR_ID,
    SOCIAL_RECOVERY_INSTRUCTIONS, SPEND_LIMIT_INSTRUCTIONS,
};
use crate::{error::GuardedWalletError, ID};
use anchor_lang::prelude::*;
use anchor_lang::solana_program::{instruction::Instruction, program::invoke_signed};

// Utility functions for guarded wallet operations: CPI forwarding, lamport
// moves out of the smart wallet PDA, Ed25519 instruction parsing and
// interface ids.

// Layout of the native Ed25519 program instruction data
const ED25519_HEADER_SIZE: usize = 2;
const ED25519_OFFSETS_SIZE: usize = 14;
const ED25519_PUBKEY_SIZE: usize = 32;
const ED25519_SIGNATURE_SIZE: usize = 64;
/// Instruction index meaning "data lives in this same instruction"
const CURRENT_INSTRUCTION: u16 = u16::MAX;

/// PDA seeds & bump passed into [`execute_cpi`].
#[derive(Clone, Debug)]
pub struct PdaSigner {
    /// PDA derivation seeds **without** the trailing bump.
    pub seeds: Vec<Vec<u8>>,
    /// The bump associated with the PDA.
    pub bump: u8,
}

impl PdaSigner {
    pub fn smart_wallet(wallet_id: u64, bump: u8) -> Self {
        Self {
            seeds: vec![
                crate::constants::SMART_WALLET_SEED.to_vec(),
                wallet_id.to_le_bytes().to_vec(),
            ],
            bump,
        }
    }
}

/// Execute a Cross-Program Invocation signed by `signer`.
///
/// The account derived from `signer` is marked as a signer in the instruction
/// metas; every other account keeps its own flags.
pub fn execute_cpi<'info>(
    accounts: &[AccountInfo<'info>],
    data: &[u8],
    program: &AccountInfo<'info>,
    signer: &PdaSigner,
) -> Result<()> {
    let bump_slice = [signer.bump];
    let mut signer_seeds: Vec<&[u8]> = signer.seeds.iter().map(|s| s.as_slice()).collect();
    signer_seeds.push(&bump_slice);

    let pda_pubkey = Pubkey::create_program_address(&signer_seeds, &ID)
        .map_err(|_| GuardedWalletError::InvalidRemainingAccounts)?;

    let ix = Instruction {
        program_id: program.key(),
        accounts: accounts
            .iter()
            .map(|acc| AccountMeta {
                pubkey: *acc.key,
                is_signer: acc.is_signer || *acc.key == pda_pubkey,
                is_writable: acc.is_writable,
            })
            .collect(),
        data: data.to_vec(),
    };

    invoke_signed(&ix, accounts, &[&signer_seeds]).map_err(Into::into)
}

/// Move lamports out of a program-owned PDA, keeping it rent exempt
pub fn transfer_sol_from_pda(
    from: &AccountInfo,
    to: &AccountInfo,
    amount: u64,
    rent_exempt_minimum: u64,
) -> Result<()> {
    require_keys_neq!(*from.key, *to.key, GuardedWalletError::SelfTransfer);
    if amount == 0 {
        return Ok(());
    }

    let spendable = from.lamports().saturating_sub(rent_exempt_minimum);
    require!(spendable >= amount, GuardedWalletError::InsufficientBalance);

    let from_balance = from.lamports() - amount;
    **from.try_borrow_mut_lamports()? = from_balance;

    let to_balance = to
        .lamports()
        .checked_add(amount)
        .ok_or(GuardedWalletError::TransferAmountOverflow)?;
    **to.try_borrow_mut_lamports()? = to_balance;
    Ok(())
}

/// Helper to get sighash for anchor instructions
pub fn sighash(namespace: &str, name: &str) -> [u8; 8] {
    let preimage = format!("{}:{}", namespace, name);
    let mut out = [0u8; 8];
    out.copy_from_slice(
        &anchor_lang::solana_program::hash::hash(preimage.as_bytes()).to_bytes()[..8],
    );
    out
}

/// Interface id of a set of instructions: XOR of their 4-byte selectors
pub fn interface_id(instructions: &[&str]) -> [u8; 4] {
    instructions.iter().fold([0u8; 4], |mut acc, name| {
        let selector = sighash("global", name);
        for (a, s) in acc.iter_mut().zip(selector.iter()) {
            *a ^= s;
        }
        acc
    })
}

pub fn supports_interface(id: [u8; 4]) -> bool {
    id == INTERFACE_DETECTION_ID
        || id == SIGNATURE_VALIDATOR_ID
        || id == interface_id(&SPEND_LIMIT_INSTRUCTIONS)
        || id == interface_id(&SOCIAL_RECOVERY_INSTRUCTIONS)
}

/// One signature entry parsed out of an Ed25519 verification instruction
#[derive(Debug, PartialEq, Eq)]
struct Ed25519Entry<'a> {
    pubkey: &'a [u8],
    signature: &'a [u8],
    message: &'a [u8],
}

#[inline]
fn read_u16(data: &[u8], at: usize) -> Option<u16> {
    let bytes = data.get(at..at + 2)?;
    Some(u16::from_le_bytes([bytes[0], bytes[1]]))
}

fn parse_ed25519_entry(data: &[u8], index: usize) -> Option<Ed25519Entry<'_>> {
    let base = ED25519_HEADER_SIZE + index * ED25519_OFFSETS_SIZE;

    let signature_offset = read_u16(data, base)? as usize;
    let signature_ix = read_u16(data, base + 2)?;
    let pubkey_offset = read_u16(data, base + 4)? as usize;
    let pubkey_ix = read_u16(data, base + 6)?;
    let message_offset = read_u16(data, base + 8)? as usize;
    let message_size = read_u16(data, base + 10)? as usize;
    let message_ix = read_u16(data, base + 12)?;

    // Only data embedded in the verification instruction itself is trusted here
    if signature_ix != CURRENT_INSTRUCTION
        || pubkey_ix != CURRENT_INSTRUCTION
        || message_ix != CURRENT_INSTRUCTION
    {
        return None;
    }

    Some(Ed25519Entry {
        pubkey: data.get(pubkey_offset..pubkey_offset + ED25519_PUBKEY_SIZE)?,
        signature: data.get(signature_offset..signature_offset + ED25519_SIGNATURE_SIZE)?,
        message: data.get(message_offset..message_offset + message_size)?,
    })
}

/// Recover the signer of `message` from a native Ed25519 verification instruction.
///
/// The runtime has already rejected the transaction if any signature in that
/// instruction is invalid, so a matching entry proves its pubkey signed the
/// message. Returns `None` for anything that is not a well-formed match.
pub fn recover_ed25519_signer(
    ix: &Instruction,
    message: &[u8],
    signature: &[u8; ED25519_SIGNATURE_SIZE],
) -> Option<Pubkey> {
    if ix.program_id != ED25519_PROGRAM_ID || !ix.accounts.is_empty() {
        return None;
    }

    let count = *ix.data.first()? as usize;
    (0..count)
        .filter_map(|i| parse_ed25519_entry(&ix.data, i))
        .find(|entry| entry.message == message && entry.signature == &signature[..])
        .and_then(|entry| Pubkey::try_from(entry.pubkey).ok())
}
