//! Generic instruction interpreter.
//!
//! One function, [`interpret`], turns a raw instruction plus its
//! registry spec plus its resolved accounts into an immutable
//! [`ParsedInstruction`]. There is no half-decoded state: either every
//! payload field decodes, every byte of the payload is consumed, and
//! every required account slot is bound, or the whole signing request
//! fails.
//!
//! Exact payload consumption is the central anti-spoofing check here.
//! It guarantees that every byte the host submitted as instruction data
//! is represented in the summary the holder reviews.

use common::Pubkey;

use crate::parsing::accounts::Account;
use crate::parsing::reader::Reader;
use crate::parsing::registry::{InstructionSpec, PropertyKind};
use crate::parsing::DecodeError;

/// An instruction as it sits in the transaction: indices and borrowed
/// payload bytes, nothing resolved or decoded yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawInstruction<'a> {
    /// Index of the executing program within the transaction's address
    /// list (not the combined table).
    pub program_index: u8,
    /// Indices into the combined account table, in wire order.
    pub account_indices: &'a [u8],
    /// Full instruction payload, discriminant bytes included.
    pub data: &'a [u8],
    /// Discriminant decoded from the front of `data` per the program's
    /// rule; 0 when the rule allows omission and the payload is short.
    pub discriminant: u64,
    /// Payload after the discriminant bytes; the declared fields decode
    /// from exactly this slice.
    pub payload: &'a [u8],
}

/// Stake authority selector, 4 bytes little-endian on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StakeAuthorize {
    Stake,
    Withdraw,
}

impl StakeAuthorize {
    fn from_u32(value: u32) -> Result<Self, DecodeError> {
        match value {
            0 => Ok(StakeAuthorize::Stake),
            1 => Ok(StakeAuthorize::Withdraw),
            other => Err(DecodeError::InvalidEnumValue(other as u64)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StakeAuthorize::Stake => "Stake",
            StakeAuthorize::Withdraw => "Withdraw",
        }
    }
}

/// Token authority selector, 1 byte on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorityType {
    MintTokens,
    FreezeAccount,
    AccountOwner,
    CloseAccount,
}

impl AuthorityType {
    fn from_u8(value: u8) -> Result<Self, DecodeError> {
        match value {
            0 => Ok(AuthorityType::MintTokens),
            1 => Ok(AuthorityType::FreezeAccount),
            2 => Ok(AuthorityType::AccountOwner),
            3 => Ok(AuthorityType::CloseAccount),
            other => Err(DecodeError::InvalidEnumValue(other as u64)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AuthorityType::MintTokens => "Mint tokens",
            AuthorityType::FreezeAccount => "Freeze account",
            AuthorityType::AccountOwner => "Account owner",
            AuthorityType::CloseAccount => "Close account",
        }
    }
}

/// One decoded payload field. The template's
/// [`PropertyKind`](crate::parsing::registry::PropertyKind) decides how
/// the value is rendered; amounts and plain integers share the
/// representation here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    U8(u8),
    U32(u32),
    U64(u64),
    I64(i64),
    Pubkey(Pubkey),
    String(String),
    StakeAuthorize(StakeAuthorize),
    AuthorityType(AuthorityType),
}

/// Result of the combined name lookup on a parsed instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InstructionValue<'i> {
    Property(&'i PropertyValue),
    Account(&'i Account),
}

/// A fully interpreted instruction. Only [`interpret`] constructs one,
/// and only after every check passed.
#[derive(Debug)]
pub struct ParsedInstruction<'a> {
    /// Registry spec this instruction matched, possibly a fallback.
    pub spec: &'static InstructionSpec,
    /// Key of the program that executes the instruction.
    pub program_id: Pubkey,
    /// Decoded discriminant.
    pub discriminant: u64,
    /// Full payload, discriminant bytes included. Shown raw on the
    /// blind-signing path.
    pub data: &'a [u8],
    /// Every referenced account in wire order. Shown on the
    /// blind-signing path.
    pub accounts: Vec<Account>,
    properties: Vec<(&'static str, PropertyValue)>,
    bound_accounts: Vec<(&'static str, Account)>,
    /// Signer accounts supplied beyond the declared slots, in wire
    /// order. Non-empty only for specs with multisig support.
    pub multisig_signers: Vec<Account>,
}

impl<'a> ParsedInstruction<'a> {
    /// Combined, checked lookup by declared name. Property and account
    /// names never collide for a registered spec, so the namespaces can
    /// be merged.
    pub fn get(&self, name: &str) -> Option<InstructionValue<'_>> {
        if let Some(value) = self.property(name) {
            return Some(InstructionValue::Property(value));
        }
        self.account(name).map(InstructionValue::Account)
    }

    /// Decoded property by name. `None` for an absent optional field or
    /// an undeclared name.
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties
            .iter()
            .find(|(declared, _)| *declared == name)
            .map(|(_, value)| value)
    }

    /// Bound account by name. `None` for an unbound optional slot or an
    /// undeclared name.
    pub fn account(&self, name: &str) -> Option<&Account> {
        self.bound_accounts
            .iter()
            .find(|(declared, _)| *declared == name)
            .map(|(_, account)| account)
    }

    /// Token decimals when the instruction carries them.
    pub fn token_decimals(&self) -> Option<u8> {
        match self.property("decimals") {
            Some(PropertyValue::U8(decimals)) => Some(*decimals),
            _ => None,
        }
    }
}

fn decode_property(kind: PropertyKind, reader: &mut Reader<'_>) -> Result<PropertyValue, DecodeError> {
    match kind {
        PropertyKind::U8 => Ok(PropertyValue::U8(reader.read_u8()?)),
        PropertyKind::U32 => Ok(PropertyValue::U32(reader.read_u32_le()?)),
        PropertyKind::U64 | PropertyKind::Lamports | PropertyKind::TokenAmount => {
            Ok(PropertyValue::U64(reader.read_u64_le()?))
        }
        PropertyKind::UnixTimestamp => Ok(PropertyValue::I64(reader.read_i64_le()?)),
        PropertyKind::Pubkey | PropertyKind::Authority => {
            Ok(PropertyValue::Pubkey(reader.read_pubkey()?))
        }
        PropertyKind::String => {
            let length = reader.read_u64_le()?;
            let length = usize::try_from(length).map_err(|_| DecodeError::LengthOverflow)?;
            let bytes = reader.take(length)?;
            let text = std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8)?;
            Ok(PropertyValue::String(text.to_owned()))
        }
        PropertyKind::Memo => {
            let bytes = reader.take_remaining();
            let text = std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8)?;
            Ok(PropertyValue::String(text.to_owned()))
        }
        PropertyKind::StakeAuthorize => {
            let value = reader.read_u32_le()?;
            Ok(PropertyValue::StakeAuthorize(StakeAuthorize::from_u32(
                value,
            )?))
        }
        PropertyKind::AuthorityType => {
            let value = reader.read_u8()?;
            Ok(PropertyValue::AuthorityType(AuthorityType::from_u8(value)?))
        }
    }
}

/// Interprets one raw instruction against its spec and its resolved
/// accounts.
///
/// Payload fields decode in declared order. An optional field with no
/// bytes remaining is absent and consumes nothing; optional fields are
/// a tail of the template list by registry invariant, so absence never
/// shifts a later field. After the walk the payload must be exactly
/// exhausted.
///
/// Accounts bind positionally. A missing required slot is an error, a
/// missing optional slot stays unbound. Surplus accounts become the
/// multisig signer list when the spec allows that, otherwise they are
/// an error.
///
/// Unrecognized instructions carry no templates and skip the walk
/// entirely. They never fail here: the raw payload and account list are
/// retained for the blind-signing display.
pub fn interpret<'a>(
    raw: &RawInstruction<'a>,
    spec: &'static InstructionSpec,
    program_id: Pubkey,
    accounts: Vec<Account>,
) -> Result<ParsedInstruction<'a>, DecodeError> {
    if !spec.is_instruction_supported {
        return Ok(ParsedInstruction {
            spec,
            program_id,
            discriminant: raw.discriminant,
            data: raw.data,
            accounts,
            properties: Vec::new(),
            bound_accounts: Vec::new(),
            multisig_signers: Vec::new(),
        });
    }

    let mut reader = Reader::new(raw.payload);
    let mut properties = Vec::with_capacity(spec.properties.len());
    for template in spec.properties {
        if template.optional && reader.is_empty() {
            continue;
        }
        let value = decode_property(template.kind, &mut reader)?;
        properties.push((template.name, value));
    }
    if !reader.is_empty() {
        return Err(DecodeError::UnconsumedPayload(reader.remaining()));
    }

    let mut bound_accounts = Vec::with_capacity(spec.accounts.len());
    for (position, template) in spec.accounts.iter().enumerate() {
        match accounts.get(position) {
            Some(account) => bound_accounts.push((template.name, *account)),
            None if template.optional => {}
            None => return Err(DecodeError::MissingAccount(template.name)),
        }
    }

    let multisig_signers = if accounts.len() > spec.accounts.len() {
        if !spec.supports_multisig {
            return Err(DecodeError::UnexpectedAccounts);
        }
        accounts[spec.accounts.len()..].to_vec()
    } else {
        Vec::new()
    };

    Ok(ParsedInstruction {
        spec,
        program_id,
        discriminant: raw.discriminant,
        data: raw.data,
        accounts,
        properties,
        bound_accounts,
        multisig_signers,
    })
}
