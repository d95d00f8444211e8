//! Transaction decoding.
//!
//! [`ParsedTransaction::decode`] runs the whole pipeline over one
//! immutable buffer: header, address list, blockhash, instruction
//! section, lookup tables for versioned messages, a trailing-byte
//! check, then account resolution and per-instruction interpretation.
//! The pass is single direction with no back-edges: the first violation
//! aborts and no transaction value exists.

use crate::parsing::accounts::{
    role_for_position, AccountRole, AccountTable, Address, AddressReference,
};
use crate::parsing::instruction::{interpret, ParsedInstruction, RawInstruction};
use crate::parsing::reader::Reader;
use crate::parsing::registry;
use crate::parsing::DecodeError;

/// Base fee charged by the network per required signature, in lamports.
pub const LAMPORTS_PER_SIGNATURE: u64 = 5_000;

const VERSION_FLAG: u8 = 0x80;

/// A fully decoded and interpreted transaction.
///
/// Borrows instruction payloads from the input buffer; the buffer must
/// outlive the value, and the signature is always produced over that
/// same buffer, never over this structure.
#[derive(Debug)]
pub struct ParsedTransaction<'a> {
    /// Message version, `None` for legacy. Decode currently rejects
    /// every versioned message, so no constructed value carries a
    /// version yet.
    pub version: Option<u8>,
    /// Number of required signatures.
    pub required_signers: u8,
    /// Number of signing addresses that are read-only.
    pub readonly_signers: u8,
    /// Number of non-signing addresses that are read-only.
    pub readonly: u8,
    /// Address list in wire order, roles derived from position.
    pub addresses: Vec<Address>,
    /// Recent blockhash the transaction commits to.
    pub blockhash: [u8; 32],
    /// Instructions as laid out on the wire, indices unresolved.
    pub raw_instructions: Vec<RawInstruction<'a>>,
    /// Interpreted instructions, one per raw instruction.
    pub instructions: Vec<ParsedInstruction<'a>>,
    /// Writable lookup references from all tables, in table order.
    pub lookup_writable: Vec<AddressReference>,
    /// Read-only lookup references from all tables, in table order.
    pub lookup_readonly: Vec<AddressReference>,
    /// True when at least one instruction could not be fully explained.
    pub blind_signing: bool,
}

impl<'a> ParsedTransaction<'a> {
    /// Decodes and interprets a serialized transaction message.
    pub fn decode(data: &'a [u8]) -> Result<Self, DecodeError> {
        let mut reader = Reader::new(data);

        let version = parse_version(&mut reader)?;
        let required_signers = reader.read_u8()?;
        let readonly_signers = reader.read_u8()?;
        let readonly = reader.read_u8()?;

        let address_count = reader.read_varint()?;
        let role_slots =
            required_signers as u64 + readonly_signers as u64 + readonly as u64;
        if address_count < role_slots {
            return Err(DecodeError::InvalidAddressCount);
        }
        // Counts are untrusted, so no preallocation from them; a lying
        // count runs out of input before it runs out of memory.
        let mut addresses = Vec::new();
        for position in 0..address_count {
            let key = reader.read_pubkey()?;
            let role = role_for_position(
                position as usize,
                required_signers,
                readonly_signers,
                readonly,
            );
            addresses.push(Address { key, role });
        }

        let blockhash = reader.read_pubkey()?;

        let instruction_count = reader.read_varint()?;
        let mut raw_instructions = Vec::new();
        for _ in 0..instruction_count {
            raw_instructions.push(parse_raw_instruction(&mut reader, &addresses)?);
        }

        // Only versioned messages carry a lookup-table section.
        let (lookup_writable, lookup_readonly) = if version.is_some() {
            parse_lookup_tables(&mut reader)?
        } else {
            (Vec::new(), Vec::new())
        };

        if !reader.is_empty() {
            return Err(DecodeError::TrailingData(reader.remaining()));
        }

        let table = AccountTable::new(&addresses, &lookup_writable, &lookup_readonly);
        let mut instructions = Vec::with_capacity(raw_instructions.len());
        for raw in &raw_instructions {
            let program = addresses
                .get(raw.program_index as usize)
                .ok_or(DecodeError::ProgramIndexOutOfRange(raw.program_index))?;
            let mut accounts = Vec::with_capacity(raw.account_indices.len());
            for &index in raw.account_indices {
                let account = table
                    .get(index)
                    .copied()
                    .ok_or(DecodeError::AccountIndexOutOfRange(index))?;
                accounts.push(account);
            }
            let spec = registry::lookup(&program.key, raw.discriminant);
            instructions.push(interpret(raw, spec, program.key, accounts)?);
        }

        let blind_signing = instructions
            .iter()
            .any(|ins| !ins.spec.is_program_supported || !ins.spec.is_instruction_supported);

        Ok(ParsedTransaction {
            version,
            required_signers,
            readonly_signers,
            readonly,
            addresses,
            blockhash,
            raw_instructions,
            instructions,
            lookup_writable,
            lookup_readonly,
            blind_signing,
        })
    }

    /// Network base fee for this transaction.
    pub fn base_fee(&self) -> u64 {
        self.required_signers as u64 * LAMPORTS_PER_SIGNATURE
    }
}

/// Reads the optional version prefix.
///
/// Versioned messages are rejected outright, version 0 included, until
/// versioned signing is enabled product-side. The version value rides
/// in the error for logging.
fn parse_version(reader: &mut Reader<'_>) -> Result<Option<u8>, DecodeError> {
    if reader.peek()? & VERSION_FLAG == 0 {
        return Ok(None);
    }
    let version = reader.read_u8()? & !VERSION_FLAG;
    Err(DecodeError::UnsupportedVersion(version))
}

/// Parses one instruction and splits its discriminant per the executing
/// program's rule.
fn parse_raw_instruction<'a>(
    reader: &mut Reader<'a>,
    addresses: &[Address],
) -> Result<RawInstruction<'a>, DecodeError> {
    let program_index = reader.read_u8()?;
    let program_key = addresses
        .get(program_index as usize)
        .map(|address| address.key)
        .ok_or(DecodeError::ProgramIndexOutOfRange(program_index))?;

    let account_count = reader.read_varint()?;
    let account_count =
        usize::try_from(account_count).map_err(|_| DecodeError::LengthOverflow)?;
    let account_indices = reader.take(account_count)?;

    let data_length = reader.read_varint()?;
    let data_length = usize::try_from(data_length).map_err(|_| DecodeError::LengthOverflow)?;
    let data = reader.take(data_length)?;

    let rule = registry::discriminant_rule(&program_key);
    let (discriminant, payload) = if data.len() < rule.length {
        if rule.mandatory_if_zero {
            return Err(DecodeError::MissingDiscriminant);
        }
        // Short-form encoding of the zero discriminant.
        (0, data)
    } else {
        let (id_bytes, payload) = data.split_at(rule.length);
        let mut discriminant = 0u64;
        for (i, byte) in id_bytes.iter().enumerate() {
            discriminant |= u64::from(*byte) << (8 * i);
        }
        (discriminant, payload)
    };

    Ok(RawInstruction {
        program_index,
        account_indices,
        data,
        discriminant,
        payload,
    })
}

/// Parses the lookup-table section of a versioned message.
///
/// References are split into one writable and one read-only list so the
/// combined account table can append them band by band.
fn parse_lookup_tables(
    reader: &mut Reader<'_>,
) -> Result<(Vec<AddressReference>, Vec<AddressReference>), DecodeError> {
    let mut writable = Vec::new();
    let mut readonly = Vec::new();

    let table_count = reader.read_varint()?;
    for _ in 0..table_count {
        let table = reader.read_pubkey()?;
        let writable_count = reader.read_varint()?;
        for _ in 0..writable_count {
            writable.push(AddressReference {
                table,
                index: reader.read_u8()?,
                role: AccountRole::Writable,
            });
        }
        let readonly_count = reader.read_varint()?;
        for _ in 0..readonly_count {
            readonly.push(AddressReference {
                table,
                index: reader.read_u8()?,
                role: AccountRole::Readonly,
            });
        }
    }

    Ok((writable, readonly))
}
