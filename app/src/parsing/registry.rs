//! Static instruction registry.
//!
//! One record per instruction the device can fully explain, keyed by
//! (program id, discriminant). The table is compile-time data: adding
//! support for a new instruction is a data change here, not a parser
//! change. Lookup never fails; an unknown discriminant of a known
//! program or an unknown program id resolves to a fallback spec whose
//! support flags drive the blind-signing policy.
//!
//! The per-program discriminant rule lives alongside the table, since
//! how many leading payload bytes select the instruction is a property
//! of the program, not of the transaction.

use common::Pubkey;
use hex_literal::hex;

// 32-byte program ids. The base58 forms are asserted in tests.

/// `11111111111111111111111111111111`
pub const SYSTEM_PROGRAM_ID: Pubkey =
    hex!("0000000000000000000000000000000000000000000000000000000000000000");
/// `Stake11111111111111111111111111111111111111`
pub const STAKE_PROGRAM_ID: Pubkey =
    hex!("06a1d8179137542a983437bdfe2a7ab2557f535c8a78722b68a49dc000000000");
/// `ComputeBudget111111111111111111111111111111`
pub const COMPUTE_BUDGET_PROGRAM_ID: Pubkey =
    hex!("0306466fe5211732ffecadba72c39be7bc8ce5bbc5f7126b2c439b3a40000000");
/// `TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA`
pub const TOKEN_PROGRAM_ID: Pubkey =
    hex!("06ddf6e1d765a193d9cbe146ceeb79ac1cb485ed5f5b37913a8cf5857eff00a9");
/// `TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb`
pub const TOKEN_2022_PROGRAM_ID: Pubkey =
    hex!("06ddf6e1ee758fde18425dbce46ccddab61afc4d83b90d27febdf928d8a18bfc");
/// `ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL`
pub const ASSOCIATED_TOKEN_ACCOUNT_PROGRAM_ID: Pubkey =
    hex!("8c97258f4e2489f1bb3d1029148e0d830b5a1399daff1084048e7bd8dbe9f859");
/// `MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr`
pub const MEMO_PROGRAM_ID: Pubkey =
    hex!("054a535a992921064d24e87160da387c7c35b5ddbc92bb81e41fa8404105448d");
/// `Memo1UhkJRfHyvLMcVucJwxXeuD728EqVDDwQDxFMNo`
pub const MEMO_LEGACY_PROGRAM_ID: Pubkey =
    hex!("054a5350f85dc882d614a55672788a296ddf1eababd0a60678884932f4eef6a0");

/// Wire type of one payload field, in declaration order within the
/// instruction payload. Also selects how the decoded value is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Unsigned 8-bit integer.
    U8,
    /// Little-endian unsigned 32-bit integer.
    U32,
    /// Little-endian unsigned 64-bit integer.
    U64,
    /// u64 amount in lamports, shown as a SOL amount.
    Lamports,
    /// u64 token amount, scaled by the instruction's `decimals`
    /// property when it has one.
    TokenAmount,
    /// Little-endian signed 64-bit Unix timestamp.
    UnixTimestamp,
    /// 32-byte public key.
    Pubkey,
    /// 32-byte public key of a controlling party. Not shown when it
    /// equals the signer's own key.
    Authority,
    /// u64 little-endian length prefix followed by that many UTF-8 bytes.
    String,
    /// UTF-8 text spanning the whole rest of the payload.
    Memo,
    /// 4-byte little-endian stake authority selector.
    StakeAuthorize,
    /// 1-byte token authority selector.
    AuthorityType,
}

/// One named payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyTemplate {
    pub name: &'static str,
    pub kind: PropertyKind,
    /// Optional fields may be absent when the payload ends early. They
    /// must sit at the tail of the template list.
    pub optional: bool,
}

/// One named account slot, bound positionally from the instruction's
/// account indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountTemplate {
    pub name: &'static str,
    /// Signing or controlling party. Not shown when it is the signer.
    pub is_authority: bool,
    /// Optional slots may be left unbound when fewer accounts are
    /// supplied than declared.
    pub optional: bool,
}

/// One review page: exactly one of `property` or `account` names the
/// value to show under `label`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiDirective {
    pub property: Option<&'static str>,
    pub account: Option<&'static str>,
    pub label: &'static str,
}

/// Declarative description of one instruction kind. Every instance is
/// a compile-time constant; the interpreter never mutates specs.
#[derive(Debug)]
pub struct InstructionSpec {
    /// Owning program. `None` only for the unknown-program fallback.
    pub program_id: Option<&'static Pubkey>,
    /// Discriminant this spec matches.
    pub instruction_id: u64,
    /// Human-readable instruction name.
    pub name: &'static str,
    /// Payload fields in wire order.
    pub properties: &'static [PropertyTemplate],
    /// Account slots in reference order.
    pub accounts: &'static [AccountTemplate],
    /// Review pages in display order.
    pub ui: &'static [UiDirective],
    /// False only for the unknown-program fallback.
    pub is_program_supported: bool,
    /// False for both fallback kinds.
    pub is_instruction_supported: bool,
    /// Accounts supplied beyond the declared slots are multisig
    /// signers rather than an error.
    pub supports_multisig: bool,
    /// Warning reviewed before the instruction's own pages.
    pub deprecation_notice: Option<&'static str>,
}

/// How many leading payload bytes encode the discriminant for one
/// program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscriminantRule {
    /// Number of leading payload bytes holding the discriminant,
    /// little-endian unsigned.
    pub length: usize,
    /// When true the discriminant bytes must be present even for value
    /// zero; when false a payload shorter than `length` decodes as
    /// discriminant 0 consuming nothing.
    pub mandatory_if_zero: bool,
}

/// Notice for token instructions that predate on-chain decimals
/// metadata; amounts decode but cannot be scaled.
const TOKEN_DECIMALS_UNKNOWN: &str =
    "Warning: Instruction is deprecated. Token decimals unknown.";

const fn prop(name: &'static str, kind: PropertyKind) -> PropertyTemplate {
    PropertyTemplate {
        name,
        kind,
        optional: false,
    }
}

const fn prop_opt(name: &'static str, kind: PropertyKind) -> PropertyTemplate {
    PropertyTemplate {
        name,
        kind,
        optional: true,
    }
}

const fn account(name: &'static str) -> AccountTemplate {
    AccountTemplate {
        name,
        is_authority: false,
        optional: false,
    }
}

const fn authority(name: &'static str) -> AccountTemplate {
    AccountTemplate {
        name,
        is_authority: true,
        optional: false,
    }
}

const fn authority_opt(name: &'static str) -> AccountTemplate {
    AccountTemplate {
        name,
        is_authority: true,
        optional: true,
    }
}

const fn show_prop(property: &'static str, label: &'static str) -> UiDirective {
    UiDirective {
        property: Some(property),
        account: None,
        label,
    }
}

const fn show_account(account: &'static str, label: &'static str) -> UiDirective {
    UiDirective {
        property: None,
        account: Some(account),
        label,
    }
}

const fn spec(
    program_id: &'static Pubkey,
    instruction_id: u64,
    name: &'static str,
    properties: &'static [PropertyTemplate],
    accounts: &'static [AccountTemplate],
    ui: &'static [UiDirective],
) -> InstructionSpec {
    InstructionSpec {
        program_id: Some(program_id),
        instruction_id,
        name,
        properties,
        accounts,
        ui,
        is_program_supported: true,
        is_instruction_supported: true,
        supports_multisig: false,
        deprecation_notice: None,
    }
}

const fn multisig_spec(
    program_id: &'static Pubkey,
    instruction_id: u64,
    name: &'static str,
    deprecation_notice: Option<&'static str>,
    properties: &'static [PropertyTemplate],
    accounts: &'static [AccountTemplate],
    ui: &'static [UiDirective],
) -> InstructionSpec {
    InstructionSpec {
        program_id: Some(program_id),
        instruction_id,
        name,
        properties,
        accounts,
        ui,
        is_program_supported: true,
        is_instruction_supported: true,
        supports_multisig: true,
        deprecation_notice,
    }
}

const fn fallback_spec(program_id: &'static Pubkey, name: &'static str) -> InstructionSpec {
    InstructionSpec {
        program_id: Some(program_id),
        instruction_id: 0,
        name,
        properties: &[],
        accounts: &[],
        ui: &[],
        is_program_supported: true,
        is_instruction_supported: false,
        supports_multisig: false,
        deprecation_notice: None,
    }
}

/// Spec returned for a program the registry does not know at all.
static UNKNOWN_PROGRAM: InstructionSpec = InstructionSpec {
    program_id: None,
    instruction_id: 0,
    name: "Unsupported program",
    properties: &[],
    accounts: &[],
    ui: &[],
    is_program_supported: false,
    is_instruction_supported: false,
    supports_multisig: false,
    deprecation_notice: None,
};

/// Discriminant rule and unknown-discriminant fallback for one known
/// program.
struct ProgramEntry {
    program_id: &'static Pubkey,
    rule: DiscriminantRule,
    fallback: InstructionSpec,
}

static PROGRAMS: [ProgramEntry; 8] = [
    ProgramEntry {
        program_id: &SYSTEM_PROGRAM_ID,
        rule: DiscriminantRule {
            length: 4,
            mandatory_if_zero: true,
        },
        fallback: fallback_spec(&SYSTEM_PROGRAM_ID, "System Program"),
    },
    ProgramEntry {
        program_id: &STAKE_PROGRAM_ID,
        rule: DiscriminantRule {
            length: 4,
            mandatory_if_zero: true,
        },
        fallback: fallback_spec(&STAKE_PROGRAM_ID, "Stake Program"),
    },
    ProgramEntry {
        program_id: &COMPUTE_BUDGET_PROGRAM_ID,
        rule: DiscriminantRule {
            length: 1,
            mandatory_if_zero: true,
        },
        fallback: fallback_spec(&COMPUTE_BUDGET_PROGRAM_ID, "Compute Budget Program"),
    },
    ProgramEntry {
        program_id: &TOKEN_PROGRAM_ID,
        rule: DiscriminantRule {
            length: 1,
            mandatory_if_zero: true,
        },
        fallback: fallback_spec(&TOKEN_PROGRAM_ID, "Token Program"),
    },
    ProgramEntry {
        program_id: &TOKEN_2022_PROGRAM_ID,
        rule: DiscriminantRule {
            length: 1,
            mandatory_if_zero: true,
        },
        fallback: fallback_spec(&TOKEN_2022_PROGRAM_ID, "Token 2022 Program"),
    },
    ProgramEntry {
        program_id: &ASSOCIATED_TOKEN_ACCOUNT_PROGRAM_ID,
        // A zero discriminant (Create) may be encoded as an empty payload.
        rule: DiscriminantRule {
            length: 1,
            mandatory_if_zero: false,
        },
        fallback: fallback_spec(
            &ASSOCIATED_TOKEN_ACCOUNT_PROGRAM_ID,
            "Associated Token Account Program",
        ),
    },
    ProgramEntry {
        program_id: &MEMO_PROGRAM_ID,
        rule: DiscriminantRule {
            length: 0,
            mandatory_if_zero: false,
        },
        fallback: fallback_spec(&MEMO_PROGRAM_ID, "Memo Program"),
    },
    ProgramEntry {
        program_id: &MEMO_LEGACY_PROGRAM_ID,
        rule: DiscriminantRule {
            length: 0,
            mandatory_if_zero: false,
        },
        fallback: fallback_spec(&MEMO_LEGACY_PROGRAM_ID, "Memo Legacy Program"),
    },
];

/// Every instruction the device can fully explain.
static INSTRUCTIONS: &[InstructionSpec] = &[
    // === System program ===
    spec(
        &SYSTEM_PROGRAM_ID,
        0,
        "System Program: Create Account",
        &[
            prop("lamports", PropertyKind::Lamports),
            prop("space", PropertyKind::U64),
            prop("owner", PropertyKind::Authority),
        ],
        &[authority("funding_account"), account("new_account")],
        &[
            show_account("new_account", "Create account"),
            show_prop("lamports", "Deposit"),
            show_account("funding_account", "From"),
        ],
    ),
    spec(
        &SYSTEM_PROGRAM_ID,
        1,
        "System Program: Assign",
        &[prop("owner", PropertyKind::Authority)],
        &[authority("assigned_account")],
        &[
            show_account("assigned_account", "Assigned account"),
            show_prop("owner", "To program"),
        ],
    ),
    spec(
        &SYSTEM_PROGRAM_ID,
        2,
        "System Program: Transfer",
        &[prop("lamports", PropertyKind::Lamports)],
        &[authority("funding_account"), account("recipient_account")],
        &[
            show_prop("lamports", "Transfer"),
            show_account("funding_account", "Sender"),
            show_account("recipient_account", "Recipient"),
        ],
    ),
    spec(
        &SYSTEM_PROGRAM_ID,
        3,
        "System Program: Create Account With Seed",
        &[
            prop("base", PropertyKind::Pubkey),
            prop("seed", PropertyKind::String),
            prop("lamports", PropertyKind::Lamports),
            prop("space", PropertyKind::U64),
            prop("owner", PropertyKind::Pubkey),
        ],
        &[
            authority("funding_account"),
            account("created_account"),
            authority_opt("base_account"),
        ],
        &[
            show_account("created_account", "Create account"),
            show_prop("lamports", "Deposit"),
            show_account("funding_account", "From"),
        ],
    ),
    spec(
        &SYSTEM_PROGRAM_ID,
        4,
        "System Program: Advance nonce account",
        &[],
        &[
            account("nonce_account"),
            account("recent_blockhashes_sysvar"),
            authority("nonce_authority"),
        ],
        &[
            show_account("nonce_account", "Advance nonce"),
            show_account("nonce_authority", "Authorized by"),
        ],
    ),
    spec(
        &SYSTEM_PROGRAM_ID,
        5,
        "System Program: Withdraw nonce account",
        &[prop("lamports", PropertyKind::Lamports)],
        &[
            account("nonce_account"),
            account("recipient_account"),
            account("recent_blockhashes_sysvar"),
            account("rent_sysvar"),
            authority("nonce_authority"),
        ],
        &[
            show_prop("lamports", "Nonce withdraw"),
            show_account("nonce_account", "From"),
            show_account("recipient_account", "To"),
            show_account("nonce_authority", "Authorized by"),
        ],
    ),
    spec(
        &SYSTEM_PROGRAM_ID,
        6,
        "System Program: Initialize nonce account",
        &[prop("nonce_authority", PropertyKind::Authority)],
        &[
            account("nonce_account"),
            account("recent_blockhashes_sysvar"),
            account("rent_sysvar"),
        ],
        &[
            show_account("nonce_account", "Initialize nonce account"),
            show_prop("nonce_authority", "New authority"),
        ],
    ),
    spec(
        &SYSTEM_PROGRAM_ID,
        7,
        "System Program: Authorize nonce account",
        &[prop("new_nonce_authority", PropertyKind::Authority)],
        &[account("nonce_account"), authority("nonce_authority")],
        &[
            show_account("nonce_account", "Set nonce authority"),
            show_prop("new_nonce_authority", "New authority"),
            show_account("nonce_authority", "Authorized by"),
        ],
    ),
    spec(
        &SYSTEM_PROGRAM_ID,
        8,
        "System Program: Allocate",
        &[prop("space", PropertyKind::U64)],
        &[authority("new_account")],
        &[
            show_account("new_account", "Allocate account"),
            show_prop("space", "Data size"),
        ],
    ),
    spec(
        &SYSTEM_PROGRAM_ID,
        9,
        "System Program: Allocate With Seed",
        &[
            prop("base", PropertyKind::Pubkey),
            prop("seed", PropertyKind::String),
            prop("space", PropertyKind::U64),
            prop("owner", PropertyKind::Pubkey),
        ],
        &[account("allocated_account"), authority("base_account")],
        &[
            show_account("allocated_account", "Allocate account"),
            show_prop("space", "Data size"),
        ],
    ),
    spec(
        &SYSTEM_PROGRAM_ID,
        10,
        "System Program: Assign With Seed",
        &[
            prop("base", PropertyKind::Pubkey),
            prop("seed", PropertyKind::String),
            prop("owner", PropertyKind::Pubkey),
        ],
        &[account("assigned_account"), authority("base_account")],
        &[
            show_account("assigned_account", "Assigned account"),
            show_prop("owner", "To program"),
        ],
    ),
    spec(
        &SYSTEM_PROGRAM_ID,
        11,
        "System Program: Transfer With Seed",
        &[
            prop("lamports", PropertyKind::Lamports),
            prop("from_seed", PropertyKind::String),
            prop("from_owner", PropertyKind::Pubkey),
        ],
        &[
            account("funding_account"),
            authority("base_account"),
            account("recipient_account"),
        ],
        &[
            show_prop("lamports", "Transfer"),
            show_account("funding_account", "Sender"),
            show_account("recipient_account", "Recipient"),
        ],
    ),
    spec(
        &SYSTEM_PROGRAM_ID,
        12,
        "System Program: Upgrade Nonce Account",
        &[],
        &[account("nonce_account")],
        &[show_account("nonce_account", "Upgrade nonce account")],
    ),
    // === Stake program ===
    spec(
        &STAKE_PROGRAM_ID,
        0,
        "Stake Program: Initialize",
        &[
            prop("staker", PropertyKind::Authority),
            prop("withdrawer", PropertyKind::Authority),
            prop("unix_timestamp", PropertyKind::UnixTimestamp),
            prop("epoch", PropertyKind::U64),
            prop("custodian", PropertyKind::Authority),
        ],
        &[
            account("uninitialized_stake_account"),
            account("rent_sysvar"),
        ],
        &[
            show_account("uninitialized_stake_account", "Initialize stake account"),
            show_prop("staker", "New stake authority"),
            show_prop("withdrawer", "New withdraw authority"),
            show_prop("unix_timestamp", "Lockup time"),
            show_prop("epoch", "Lockup epoch"),
            show_prop("custodian", "Lockup authority"),
        ],
    ),
    spec(
        &STAKE_PROGRAM_ID,
        1,
        "Stake Program: Authorize",
        &[
            prop("pubkey", PropertyKind::Pubkey),
            prop("stake_authorize", PropertyKind::StakeAuthorize),
        ],
        &[
            account("stake_account"),
            account("clock_sysvar"),
            authority("stake_or_withdraw_authority"),
            authority_opt("lockup_authority"),
        ],
        &[
            show_account("stake_account", "Set stake authority for"),
            show_prop("pubkey", "New authority"),
            show_prop("stake_authorize", "Authority type"),
            show_account("stake_or_withdraw_authority", "Authorized by"),
            show_account("lockup_authority", "Custodian"),
        ],
    ),
    spec(
        &STAKE_PROGRAM_ID,
        2,
        "Stake Program: Delegate Stake",
        &[],
        &[
            account("initialized_stake_account"),
            account("vote_account"),
            account("clock_sysvar"),
            account("stake_history_sysvar"),
            account("config_account"),
            authority("stake_authority"),
        ],
        &[
            show_account("initialized_stake_account", "Delegate from"),
            show_account("stake_authority", "Authorized by"),
            show_account("vote_account", "Vote account"),
        ],
    ),
    spec(
        &STAKE_PROGRAM_ID,
        3,
        "Stake Program: Split",
        &[prop("lamports", PropertyKind::Lamports)],
        &[
            account("stake_account"),
            account("uninitialized_stake_account"),
            authority("stake_authority"),
        ],
        &[
            show_prop("lamports", "Split stake"),
            show_account("stake_account", "From"),
            show_account("uninitialized_stake_account", "To"),
            show_account("stake_authority", "Authorized by"),
        ],
    ),
    spec(
        &STAKE_PROGRAM_ID,
        4,
        "Stake Program: Withdraw",
        &[prop("lamports", PropertyKind::Lamports)],
        &[
            account("stake_account"),
            account("recipient_account"),
            account("clock_sysvar"),
            account("stake_history_sysvar"),
            authority("withdrawal_authority"),
            authority_opt("lockup_authority"),
        ],
        &[
            show_prop("lamports", "Stake withdraw"),
            show_account("stake_account", "From"),
            show_account("recipient_account", "To"),
            show_account("withdrawal_authority", "Authorized by"),
        ],
    ),
    spec(
        &STAKE_PROGRAM_ID,
        5,
        "Stake Program: Deactivate",
        &[],
        &[
            account("delegated_stake_account"),
            account("clock_sysvar"),
            authority("stake_authority"),
        ],
        &[
            show_account("delegated_stake_account", "Deactivate stake"),
            show_account("stake_authority", "Authorized by"),
        ],
    ),
    spec(
        &STAKE_PROGRAM_ID,
        6,
        "Stake Program: Set Lockup",
        &[
            prop_opt("unix_timestamp", PropertyKind::UnixTimestamp),
            prop_opt("epoch", PropertyKind::U64),
            prop_opt("custodian", PropertyKind::Pubkey),
        ],
        &[
            account("initialized_stake_account"),
            authority("lockup_or_withdraw_authority"),
        ],
        &[
            show_account("initialized_stake_account", "Set lockup"),
            show_prop("unix_timestamp", "Time"),
            show_prop("epoch", "Epoch"),
            show_prop("custodian", "New authority"),
            show_account("lockup_or_withdraw_authority", "Authorized by"),
        ],
    ),
    spec(
        &STAKE_PROGRAM_ID,
        7,
        "Stake Program: Merge",
        &[],
        &[
            account("destination_stake_account"),
            account("source_stake_account"),
            account("clock_sysvar"),
            account("stake_history_sysvar"),
            authority("stake_authority"),
        ],
        &[
            show_account("source_stake_account", "Merge"),
            show_account("destination_stake_account", "Into"),
            show_account("stake_authority", "Authorized by"),
        ],
    ),
    spec(
        &STAKE_PROGRAM_ID,
        8,
        "Stake Program: Authorize With Seed",
        &[
            prop("new_authorized_pubkey", PropertyKind::Pubkey),
            prop("stake_authorize", PropertyKind::StakeAuthorize),
            prop("authority_seed", PropertyKind::String),
            prop("authority_owner", PropertyKind::Pubkey),
        ],
        &[
            account("stake_account"),
            authority("stake_or_withdraw_authority"),
            account("clock_sysvar"),
            authority_opt("lockup_authority"),
        ],
        &[
            show_account("stake_account", "Set stake auth"),
            show_prop("new_authorized_pubkey", "New (stake/withdraw) auth"),
            show_account("stake_or_withdraw_authority", "Authorized by"),
            show_account("lockup_authority", "Custodian"),
        ],
    ),
    spec(
        &STAKE_PROGRAM_ID,
        9,
        "Stake Program: Initialize Checked",
        &[],
        &[
            account("uninitialized_stake_account"),
            account("rent_sysvar"),
            account("stake_authority"),
            authority("withdrawal_authority"),
        ],
        &[
            show_account("uninitialized_stake_account", "Uninitialized stake account"),
            show_account("stake_authority", "New stake authority"),
            show_account("withdrawal_authority", "New withdraw authority"),
        ],
    ),
    spec(
        &STAKE_PROGRAM_ID,
        10,
        "Stake Program: Authorize Checked",
        &[prop("stake_authorize", PropertyKind::StakeAuthorize)],
        &[
            account("stake_account"),
            account("clock_sysvar"),
            authority("stake_or_withdraw_authority"),
            authority("new_stake_or_withdraw_authority"),
            authority_opt("lockup_authority"),
        ],
        &[
            show_account("stake_account", "Set stake auth"),
            show_account("stake_or_withdraw_authority", "Stake or withdraw authority"),
            show_account(
                "new_stake_or_withdraw_authority",
                "New stake or withdraw authority",
            ),
        ],
    ),
    spec(
        &STAKE_PROGRAM_ID,
        11,
        "Stake Program: Authorize Checked With Seed",
        &[
            prop("stake_authorize", PropertyKind::StakeAuthorize),
            prop("authority_seed", PropertyKind::String),
            prop("authority_owner", PropertyKind::Pubkey),
        ],
        &[
            account("stake_account"),
            authority("stake_or_withdraw_authority"),
            account("clock_sysvar"),
            authority("new_stake_or_withdraw_authority"),
            authority_opt("lockup_authority"),
        ],
        &[
            show_account("stake_account", "Set stake account"),
            show_account("new_stake_or_withdraw_authority", "New authority"),
            show_prop("stake_authorize", "Authority type"),
            show_account("stake_or_withdraw_authority", "Authorized by"),
            show_account("lockup_authority", "Custodian"),
        ],
    ),
    spec(
        &STAKE_PROGRAM_ID,
        12,
        "Stake Program: Set Lockup Checked",
        &[
            prop_opt("unix_timestamp", PropertyKind::UnixTimestamp),
            prop_opt("epoch", PropertyKind::U64),
        ],
        &[
            account("stake_account"),
            authority("lockup_or_withdraw_authority"),
            authority_opt("new_lockup_authority"),
        ],
        &[
            show_account("stake_account", "Set lockup"),
            show_prop("unix_timestamp", "Time"),
            show_prop("epoch", "Epoch"),
            show_account("new_lockup_authority", "New authority"),
            show_account("lockup_or_withdraw_authority", "Authorized by"),
        ],
    ),
    // === Compute budget program ===
    spec(
        &COMPUTE_BUDGET_PROGRAM_ID,
        1,
        "Compute Budget Program: Request Heap Frame",
        &[prop("bytes", PropertyKind::U32)],
        &[],
        &[show_prop("bytes", "Bytes")],
    ),
    spec(
        &COMPUTE_BUDGET_PROGRAM_ID,
        2,
        "Compute Budget Program: Set Compute Unit Limit",
        &[prop("units", PropertyKind::U32)],
        &[],
        &[show_prop("units", "Units")],
    ),
    spec(
        &COMPUTE_BUDGET_PROGRAM_ID,
        3,
        "Compute Budget Program: Set Compute Unit Price",
        &[prop("lamports", PropertyKind::U64)],
        &[],
        &[show_prop("lamports", "Compute unit price")],
    ),
    // === Token program ===
    spec(
        &TOKEN_PROGRAM_ID,
        1,
        "Token Program: Initialize Account",
        &[],
        &[
            account("account_to_initialize"),
            account("mint_account"),
            account("owner"),
            account("rent_sysvar"),
        ],
        &[
            show_account("account_to_initialize", "Init account"),
            show_account("owner", "Owner"),
            show_account("mint_account", "Mint"),
        ],
    ),
    spec(
        &TOKEN_PROGRAM_ID,
        2,
        "Token Program: Initialize Multisig",
        &[prop("number_of_signers", PropertyKind::U8)],
        &[
            account("multisig_account"),
            account("rent_sysvar"),
            account("signer_accounts"),
        ],
        &[
            show_account("multisig_account", "Init multisig"),
            show_account("signer_accounts", "Required signers"),
        ],
    ),
    multisig_spec(
        &TOKEN_PROGRAM_ID,
        3,
        "Token Program: Transfer",
        Some(TOKEN_DECIMALS_UNKNOWN),
        &[prop("amount", PropertyKind::TokenAmount)],
        &[
            account("source_account"),
            account("destination_account"),
            authority("owner"),
        ],
        &[
            show_prop("amount", "Transfer tokens"),
            show_account("source_account", "From"),
            show_account("destination_account", "To"),
            show_account("owner", "Owner"),
        ],
    ),
    multisig_spec(
        &TOKEN_PROGRAM_ID,
        4,
        "Token Program: Approve",
        Some(TOKEN_DECIMALS_UNKNOWN),
        &[prop("amount", PropertyKind::TokenAmount)],
        &[
            account("source_account"),
            account("delegate_account"),
            authority("owner"),
        ],
        &[
            show_account("delegate_account", "Approve delegate"),
            show_prop("amount", "Allowance"),
            show_account("owner", "Owner"),
        ],
    ),
    multisig_spec(
        &TOKEN_PROGRAM_ID,
        5,
        "Token Program: Revoke",
        None,
        &[],
        &[account("source_account"), authority("owner")],
        &[
            show_account("source_account", "Rewoke delegate"),
            show_account("owner", "Owner"),
        ],
    ),
    multisig_spec(
        &TOKEN_PROGRAM_ID,
        6,
        "Token Program: Set Authority",
        None,
        &[
            prop("authority_type", PropertyKind::AuthorityType),
            prop_opt("new_authority", PropertyKind::Authority),
        ],
        &[account("mint_account"), authority("current_authority")],
        &[
            show_account("mint_account", "Set authority for"),
            show_prop("new_authority", "New authority"),
            show_prop("authority_type", "Authority type"),
            show_account("current_authority", "Current authority"),
        ],
    ),
    multisig_spec(
        &TOKEN_PROGRAM_ID,
        7,
        "Token Program: Mint to",
        Some(TOKEN_DECIMALS_UNKNOWN),
        &[prop("amount", PropertyKind::TokenAmount)],
        &[
            account("mint"),
            account("account_to_mint"),
            authority("minting_authority"),
        ],
        &[
            show_prop("amount", "Mint tokens"),
            show_account("account_to_mint", "To"),
            show_account("minting_authority", "Mint authority"),
        ],
    ),
    multisig_spec(
        &TOKEN_PROGRAM_ID,
        8,
        "Token Program: Burn",
        Some(TOKEN_DECIMALS_UNKNOWN),
        &[prop("amount", PropertyKind::TokenAmount)],
        &[
            account("account_to_burn_from"),
            account("token_mint"),
            authority("owner"),
        ],
        &[
            show_prop("amount", "Burn tokens"),
            show_account("account_to_burn_from", "From"),
            show_account("owner", "Mint authority"),
        ],
    ),
    multisig_spec(
        &TOKEN_PROGRAM_ID,
        9,
        "Token Program: Close Account",
        None,
        &[],
        &[
            account("account_to_close"),
            account("destination_account"),
            authority("owner"),
        ],
        &[
            show_account("account_to_close", "Close account"),
            show_account("destination_account", "Withdraw to"),
            show_account("owner", "Owner"),
        ],
    ),
    multisig_spec(
        &TOKEN_PROGRAM_ID,
        10,
        "Token Program: Freeze Account",
        None,
        &[],
        &[
            account("account_to_freeze"),
            account("token_mint"),
            authority("freeze_authority"),
        ],
        &[
            show_account("account_to_freeze", "Freeze account"),
            show_account("freeze_authority", "Owner"),
        ],
    ),
    multisig_spec(
        &TOKEN_PROGRAM_ID,
        11,
        "Token Program: Thaw Account",
        None,
        &[],
        &[
            account("account_to_freeze"),
            account("token_mint"),
            authority("freeze_authority"),
        ],
        &[
            show_account("account_to_freeze", "Thaw account"),
            show_account("freeze_authority", "Owner"),
        ],
    ),
    multisig_spec(
        &TOKEN_PROGRAM_ID,
        12,
        "Token Program: Transfer Checked",
        None,
        &[
            prop("amount", PropertyKind::TokenAmount),
            prop("decimals", PropertyKind::U8),
        ],
        &[
            account("source_account"),
            account("token_mint"),
            account("destination_account"),
            authority("owner"),
        ],
        &[
            show_prop("amount", "Transfer tokens"),
            show_account("source_account", "From"),
            show_account("destination_account", "To"),
            show_account("owner", "Owner"),
        ],
    ),
    multisig_spec(
        &TOKEN_PROGRAM_ID,
        13,
        "Token Program: Approve Checked",
        None,
        &[
            prop("amount", PropertyKind::TokenAmount),
            prop("decimals", PropertyKind::U8),
        ],
        &[
            account("source_account"),
            account("token_mint"),
            account("delegate"),
            authority("owner"),
        ],
        &[
            show_account("delegate", "Approve delegate"),
            show_prop("amount", "Allowance"),
            show_account("source_account", "From"),
            show_account("owner", "Owner"),
        ],
    ),
    multisig_spec(
        &TOKEN_PROGRAM_ID,
        14,
        "Token Program: Mint to Checked",
        None,
        &[
            prop("amount", PropertyKind::TokenAmount),
            prop("decimals", PropertyKind::U8),
        ],
        &[
            account("mint"),
            account("account_to_mint"),
            authority("minting_authority"),
        ],
        &[
            show_prop("amount", "Mint tokens"),
            show_account("account_to_mint", "To"),
            show_account("minting_authority", "Owner"),
        ],
    ),
    multisig_spec(
        &TOKEN_PROGRAM_ID,
        15,
        "Token Program: Burn Checked",
        None,
        &[
            prop("amount", PropertyKind::TokenAmount),
            prop("decimals", PropertyKind::U8),
        ],
        &[
            account("account_to_burn_from"),
            account("token_mint"),
            authority("owner"),
        ],
        &[
            show_prop("amount", "Burn tokens"),
            show_account("account_to_burn_from", "From"),
            show_account("owner", "Owner"),
        ],
    ),
    spec(
        &TOKEN_PROGRAM_ID,
        16,
        "Token Program: Initialize Account 2",
        &[prop("owner", PropertyKind::Pubkey)],
        &[
            account("account_to_initialize"),
            account("mint_account"),
            account("rent_sysvar"),
        ],
        &[
            show_account("account_to_initialize", "Init account"),
            show_prop("owner", "Owner"),
            show_account("mint_account", "Mint"),
        ],
    ),
    spec(
        &TOKEN_PROGRAM_ID,
        17,
        "Token Program: Sync Native",
        &[],
        &[account("token_account")],
        &[show_account("token_account", "Sync native account")],
    ),
    spec(
        &TOKEN_PROGRAM_ID,
        18,
        "Token Program: Initialize Account 3",
        &[prop("owner", PropertyKind::Pubkey)],
        &[account("account_to_initialize"), account("mint_account")],
        &[
            show_account("account_to_initialize", "Init account"),
            show_prop("owner", "Owner"),
            show_account("mint_account", "Mint"),
        ],
    ),
    spec(
        &TOKEN_PROGRAM_ID,
        22,
        "Token Program: Initialize Immutable Owner",
        &[],
        &[account("account_to_initialize")],
        &[show_account("account_to_initialize", "Init account")],
    ),
    // === Token 2022 program ===
    spec(
        &TOKEN_2022_PROGRAM_ID,
        1,
        "Token 2022 Program: Initialize Account",
        &[],
        &[
            account("account_to_initialize"),
            account("mint_account"),
            account("owner"),
            account("rent_sysvar"),
        ],
        &[
            show_account("account_to_initialize", "Init account"),
            show_account("owner", "Owner"),
            show_account("mint_account", "Mint"),
        ],
    ),
    spec(
        &TOKEN_2022_PROGRAM_ID,
        2,
        "Token 2022 Program: Initialize Multisig",
        &[prop("number_of_signers", PropertyKind::U8)],
        &[
            account("multisig_account"),
            account("rent_sysvar"),
            account("signer_accounts"),
        ],
        &[
            show_account("multisig_account", "Init multisig"),
            show_account("signer_accounts", "Required signers"),
        ],
    ),
    multisig_spec(
        &TOKEN_2022_PROGRAM_ID,
        3,
        "Token 2022 Program: Transfer",
        Some(TOKEN_DECIMALS_UNKNOWN),
        &[prop("amount", PropertyKind::TokenAmount)],
        &[
            account("source_account"),
            account("destination_account"),
            authority("owner"),
        ],
        &[
            show_prop("amount", "Transfer tokens"),
            show_account("source_account", "From"),
            show_account("destination_account", "To"),
            show_account("owner", "Owner"),
        ],
    ),
    multisig_spec(
        &TOKEN_2022_PROGRAM_ID,
        4,
        "Token 2022 Program: Approve",
        Some(TOKEN_DECIMALS_UNKNOWN),
        &[prop("amount", PropertyKind::TokenAmount)],
        &[
            account("source_account"),
            account("delegate_account"),
            authority("owner"),
        ],
        &[
            show_account("delegate_account", "Approve delegate"),
            show_prop("amount", "Allowance"),
            show_account("owner", "Owner"),
        ],
    ),
    multisig_spec(
        &TOKEN_2022_PROGRAM_ID,
        5,
        "Token 2022 Program: Revoke",
        None,
        &[],
        &[account("source_account"), authority("owner")],
        &[
            show_account("source_account", "Rewoke delegate"),
            show_account("owner", "Owner"),
        ],
    ),
    multisig_spec(
        &TOKEN_2022_PROGRAM_ID,
        6,
        "Token 2022 Program: Set Authority",
        None,
        &[
            prop("authority_type", PropertyKind::AuthorityType),
            prop_opt("new_authority", PropertyKind::Authority),
        ],
        &[account("mint_account"), authority("current_authority")],
        &[
            show_prop("new_authority", "Set authority"),
            show_prop("authority_type", "Type"),
            show_account("current_authority", "Type"),
            show_account("mint_account", "Token mint"),
        ],
    ),
    multisig_spec(
        &TOKEN_2022_PROGRAM_ID,
        7,
        "Token 2022 Program: Mint to",
        Some(TOKEN_DECIMALS_UNKNOWN),
        &[prop("amount", PropertyKind::TokenAmount)],
        &[
            account("mint"),
            account("account_to_mint"),
            authority("minting_authority"),
        ],
        &[
            show_prop("amount", "Mint tokens"),
            show_account("account_to_mint", "To"),
            show_account("minting_authority", "Mint authority"),
        ],
    ),
    multisig_spec(
        &TOKEN_2022_PROGRAM_ID,
        8,
        "Token 2022 Program: Burn",
        Some(TOKEN_DECIMALS_UNKNOWN),
        &[prop("amount", PropertyKind::TokenAmount)],
        &[
            account("account_to_burn_from"),
            account("token_mint"),
            authority("owner"),
        ],
        &[
            show_prop("amount", "Burn tokens"),
            show_account("account_to_burn_from", "From"),
            show_account("owner", "Mint authority"),
        ],
    ),
    multisig_spec(
        &TOKEN_2022_PROGRAM_ID,
        9,
        "Token 2022 Program: Close Account",
        None,
        &[],
        &[
            account("account_to_close"),
            account("destination_account"),
            authority("owner"),
        ],
        &[
            show_account("account_to_close", "Close account"),
            show_account("destination_account", "Withdraw to"),
            show_account("owner", "Owner"),
        ],
    ),
    multisig_spec(
        &TOKEN_2022_PROGRAM_ID,
        10,
        "Token 2022 Program: Freeze Account",
        None,
        &[],
        &[
            account("account_to_freeze"),
            account("token_mint"),
            authority("freeze_authority"),
        ],
        &[
            show_account("account_to_freeze", "Freeze account"),
            show_account("freeze_authority", "Owner"),
        ],
    ),
    multisig_spec(
        &TOKEN_2022_PROGRAM_ID,
        11,
        "Token 2022 Program: Thaw Account",
        None,
        &[],
        &[
            account("account_to_freeze"),
            account("token_mint"),
            authority("freeze_authority"),
        ],
        &[
            show_account("account_to_freeze", "Thaw account"),
            show_account("freeze_authority", "Owner"),
        ],
    ),
    multisig_spec(
        &TOKEN_2022_PROGRAM_ID,
        12,
        "Token 2022 Program: Transfer Checked",
        None,
        &[
            prop("amount", PropertyKind::TokenAmount),
            prop("decimals", PropertyKind::U8),
        ],
        &[
            account("source_account"),
            account("token_mint"),
            account("destination_account"),
            authority("owner"),
        ],
        &[
            show_prop("amount", "Transfer tokens"),
            show_account("source_account", "From"),
            show_account("destination_account", "To"),
            show_account("owner", "Owner"),
        ],
    ),
    multisig_spec(
        &TOKEN_2022_PROGRAM_ID,
        13,
        "Token 2022 Program: Approve Checked",
        None,
        &[
            prop("amount", PropertyKind::TokenAmount),
            prop("decimals", PropertyKind::U8),
        ],
        &[
            account("source_account"),
            account("token_mint"),
            account("delegate"),
            authority("owner"),
        ],
        &[
            show_account("delegate", "Approve delegate"),
            show_prop("amount", "Allowance"),
            show_account("source_account", "From"),
            show_account("owner", "Owner"),
        ],
    ),
    multisig_spec(
        &TOKEN_2022_PROGRAM_ID,
        14,
        "Token 2022 Program: Mint to Checked",
        None,
        &[
            prop("amount", PropertyKind::TokenAmount),
            prop("decimals", PropertyKind::U8),
        ],
        &[
            account("mint"),
            account("account_to_mint"),
            authority("minting_authority"),
        ],
        &[
            show_prop("amount", "Mint tokens"),
            show_account("account_to_mint", "To"),
            show_account("minting_authority", "Owner"),
        ],
    ),
    multisig_spec(
        &TOKEN_2022_PROGRAM_ID,
        15,
        "Token 2022 Program: Burn Checked",
        None,
        &[
            prop("amount", PropertyKind::TokenAmount),
            prop("decimals", PropertyKind::U8),
        ],
        &[
            account("account_to_burn_from"),
            account("token_mint"),
            authority("owner"),
        ],
        &[
            show_prop("amount", "Burn tokens"),
            show_account("account_to_burn_from", "From"),
            show_account("owner", "Owner"),
        ],
    ),
    spec(
        &TOKEN_2022_PROGRAM_ID,
        16,
        "Token 2022 Program: Initialize Account 2",
        &[prop("owner", PropertyKind::Pubkey)],
        &[
            account("account_to_initialize"),
            account("mint_account"),
            account("rent_sysvar"),
        ],
        &[
            show_account("account_to_initialize", "Init account"),
            show_prop("owner", "Owner"),
            show_account("mint_account", "Mint"),
        ],
    ),
    spec(
        &TOKEN_2022_PROGRAM_ID,
        17,
        "Token 2022 Program: Sync Native",
        &[],
        &[account("token_account")],
        &[show_account("token_account", "Sync native account")],
    ),
    spec(
        &TOKEN_2022_PROGRAM_ID,
        18,
        "Token 2022 Program: Initialize Account 3",
        &[prop("owner", PropertyKind::Pubkey)],
        &[account("account_to_initialize"), account("mint_account")],
        &[
            show_account("account_to_initialize", "Init account"),
            show_prop("owner", "Owner"),
            show_account("mint_account", "Mint"),
        ],
    ),
    spec(
        &TOKEN_2022_PROGRAM_ID,
        22,
        "Token 2022 Program: Initialize Immutable Owner",
        &[],
        &[account("account_to_initialize")],
        &[show_account("account_to_initialize", "Init account")],
    ),
    // === Associated token account program ===
    spec(
        &ASSOCIATED_TOKEN_ACCOUNT_PROGRAM_ID,
        0,
        "Associated Token Account Program: Create",
        &[],
        &[
            authority("funding_account"),
            account("associated_token_account"),
            account("wallet_address"),
            account("token_mint"),
            account("system_program"),
            account("spl_token"),
        ],
        &[
            show_account("associated_token_account", "Create token account"),
            show_account("token_mint", "From mint"),
            show_account("wallet_address", "Owned by"),
            show_account("funding_account", "Funded by"),
        ],
    ),
    spec(
        &ASSOCIATED_TOKEN_ACCOUNT_PROGRAM_ID,
        1,
        "Associated Token Account Program: Create Idempotent",
        &[],
        &[
            authority("funding_account"),
            account("associated_token_account"),
            account("wallet_address"),
            account("token_mint"),
            account("system_program"),
            account("spl_token"),
        ],
        &[
            show_account("associated_token_account", "Create token account"),
            show_account("token_mint", "From mint"),
            show_account("wallet_address", "Owned by"),
            show_account("funding_account", "Funded by"),
        ],
    ),
    spec(
        &ASSOCIATED_TOKEN_ACCOUNT_PROGRAM_ID,
        2,
        "Associated Token Account Program: Recover Nested",
        &[],
        &[
            authority("nested_account"),
            account("token_mint_nested"),
            account("associated_token_account"),
            account("owner"),
            account("token_mint_owner"),
            authority("wallet_address"),
            account("spl_token"),
        ],
        &[
            show_account("nested_account", "Recover nested token account"),
            show_account("associated_token_account", "Transfer recovered tokens to"),
            show_account("wallet_address", "Transfer recovered SOL to"),
        ],
    ),
    // === Memo programs ===
    spec(
        &MEMO_PROGRAM_ID,
        0,
        "Memo Program: Memo",
        &[prop("memo", PropertyKind::Memo)],
        &[authority_opt("signer_accounts")],
        &[
            show_prop("memo", "Memo"),
            show_account("signer_accounts", "Signer accounts"),
        ],
    ),
    spec(
        &MEMO_LEGACY_PROGRAM_ID,
        0,
        "Memo Legacy Program: Memo",
        &[prop("memo", PropertyKind::Memo)],
        &[authority_opt("signer_accounts")],
        &[
            show_prop("memo", "Memo"),
            show_account("signer_accounts", "Signer accounts"),
        ],
    ),
];

/// Resolves the spec for (program, discriminant).
///
/// Never fails: an unknown discriminant of a known program yields that
/// program's fallback, an unknown program yields the generic fallback.
/// The support flags of the returned spec feed the blind-signing
/// policy.
pub fn lookup(program_id: &Pubkey, instruction_id: u64) -> &'static InstructionSpec {
    for spec in INSTRUCTIONS {
        if spec.program_id == Some(program_id) && spec.instruction_id == instruction_id {
            return spec;
        }
    }
    for program in &PROGRAMS {
        if program.program_id == program_id {
            return &program.fallback;
        }
    }
    &UNKNOWN_PROGRAM
}

/// Returns the discriminant rule of a program; unknown programs carry
/// no discriminant.
pub fn discriminant_rule(program_id: &Pubkey) -> DiscriminantRule {
    for program in &PROGRAMS {
        if program.program_id == program_id {
            return program.rule;
        }
    }
    DiscriminantRule {
        length: 0,
        mandatory_if_zero: false,
    }
}
