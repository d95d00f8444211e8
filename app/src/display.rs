//! Review page construction.
//!
//! Pure functions that turn a parsed transaction into the ordered pages
//! the user steps through before signing. What each page says is decided
//! here; how pages are rendered and confirmed is the
//! [`Platform`](crate::platform::Platform) implementation's concern.
//!
//! Page text follows wallet conventions: amounts in SOL with trailing
//! zeros trimmed, keys in base58, the signer's own key annotated
//! wherever it appears.

use common::{Bip32Path, Pubkey, HARDENED};

use crate::parsing::registry::PropertyKind;
use crate::parsing::{
    Account, AccountRole, AddressReference, ParsedInstruction, ParsedTransaction, PropertyValue,
};

/// One page of the review flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewStep {
    /// Free-text page confirmed with a single action.
    Notice { title: String, body: String },
    /// Label/value page. `hold` marks the final hold-to-confirm page.
    Pairs {
        title: String,
        pairs: Vec<(String, String)>,
        hold: bool,
    },
}

/// Builds the review flow for a transaction: every instruction's pages
/// in transaction order, then the hold-to-confirm summary.
pub fn transaction_review(
    tx: &ParsedTransaction<'_>,
    signer: &Pubkey,
    signer_path: &Bip32Path,
) -> Vec<ReviewStep> {
    let mut steps = Vec::new();
    let count = tx.instructions.len();
    for (position, instruction) in tx.instructions.iter().enumerate() {
        instruction_review(&mut steps, instruction, position + 1, count, signer, signer_path);
    }
    steps.push(final_summary(tx, signer, signer_path));
    steps
}

// =============================================================================
// Per-instruction pages
// =============================================================================

fn instruction_review(
    steps: &mut Vec<ReviewStep>,
    instruction: &ParsedInstruction<'_>,
    index: usize,
    count: usize,
    signer: &Pubkey,
    signer_path: &Bip32Path,
) {
    let spec = instruction.spec;

    if !spec.is_instruction_supported {
        // Unknown instructions of a known program name the discriminant
        // in the title; unknown programs have no discriminant to name.
        let title = if spec.is_program_supported {
            format!(
                "{}/{}: {}: instruction id ({})",
                index, count, spec.name, instruction.discriminant
            )
        } else {
            format!("{}/{}: {}", index, count, spec.name)
        };
        unsupported_instruction_review(steps, instruction, &title, signer, signer_path);
        return;
    }

    let title = format!("{}/{}: {}", index, count, spec.name);

    if let Some(notice) = spec.deprecation_notice {
        steps.push(ReviewStep::Notice {
            title: title.clone(),
            body: notice.to_string(),
        });
    }

    for directive in spec.ui {
        if let Some(name) = directive.property {
            property_page(steps, instruction, name, directive.label, &title, signer);
        } else if let Some(name) = directive.account {
            account_page(steps, instruction, name, directive.label, &title, signer);
        }
    }

    if !instruction.multisig_signers.is_empty() {
        steps.push(ReviewStep::Notice {
            title: "Confirm multisig".to_string(),
            body: "The following instruction is a multisig instruction.".to_string(),
        });

        let pairs = instruction
            .multisig_signers
            .iter()
            .enumerate()
            .map(|(i, account)| {
                let key = account.key_bytes();
                let path_str = if key == signer {
                    format!(" ({})", signer_path)
                } else {
                    String::new()
                };
                (format!("Signer {}{}:", i + 1, path_str), format_pubkey(key))
            })
            .collect();

        steps.push(ReviewStep::Pairs {
            title,
            pairs,
            hold: false,
        });
    }
}

/// One page per shown payload field. Absent optional fields and
/// authority values equal to the signer produce no page.
fn property_page(
    steps: &mut Vec<ReviewStep>,
    instruction: &ParsedInstruction<'_>,
    name: &str,
    label: &str,
    title: &str,
    signer: &Pubkey,
) {
    let Some(template) = instruction.spec.properties.iter().find(|t| t.name == name) else {
        return;
    };
    let Some(value) = instruction.property(name) else {
        return;
    };

    if template.kind == PropertyKind::Authority {
        if let PropertyValue::Pubkey(key) = value {
            if key == signer {
                return;
            }
        }
    }

    steps.push(ReviewStep::Pairs {
        title: title.to_string(),
        pairs: vec![(
            label.to_string(),
            format_property(instruction, template.kind, value),
        )],
        hold: false,
    });
}

/// One page per shown account slot. Unbound optional slots and
/// authority accounts equal to the signer produce no page.
fn account_page(
    steps: &mut Vec<ReviewStep>,
    instruction: &ParsedInstruction<'_>,
    name: &str,
    label: &str,
    title: &str,
    signer: &Pubkey,
) {
    let Some(template) = instruction.spec.accounts.iter().find(|t| t.name == name) else {
        return;
    };
    let Some(account) = instruction.account(name) else {
        return;
    };

    if template.is_authority && account.key_bytes() == signer {
        return;
    }

    let pairs = match account {
        Account::Key(address) => {
            let signer_suffix = if &address.key == signer { " (Signer)" } else { "" };
            vec![(
                label.to_string(),
                format!("{}{}", format_pubkey(&address.key), signer_suffix),
            )]
        }
        Account::Lookup(reference) => lookup_reference_pairs(reference, label).to_vec(),
    };

    steps.push(ReviewStep::Pairs {
        title: title.to_string(),
        pairs,
        hold: false,
    });
}

/// Blind-signing detail pages: a summary sentence, the raw payload in
/// hex, and every referenced account with its role.
fn unsupported_instruction_review(
    steps: &mut Vec<ReviewStep>,
    instruction: &ParsedInstruction<'_>,
    title: &str,
    signer: &Pubkey,
    signer_path: &Bip32Path,
) {
    steps.push(ReviewStep::Notice {
        title: title.to_string(),
        body: format!(
            "Instruction contains {} accounts and its data is {} bytes long.",
            instruction.accounts.len(),
            instruction.data.len()
        ),
    });

    steps.push(ReviewStep::Pairs {
        title: title.to_string(),
        pairs: vec![(
            "Instruction data:".to_string(),
            hex::encode(instruction.data),
        )],
        hold: false,
    });

    let mut pairs = Vec::with_capacity(instruction.accounts.len());
    for (i, account) in instruction.accounts.iter().enumerate() {
        let role = role_suffix(account.role());
        match account {
            Account::Key(address) => {
                let path_str = if &address.key == signer {
                    format!(" ({})", signer_path)
                } else {
                    String::new()
                };
                pairs.push((
                    format!("Account {}{} {}:", i + 1, path_str, role),
                    format_pubkey(&address.key),
                ));
            }
            Account::Lookup(reference) => {
                pairs.extend(lookup_reference_pairs(
                    reference,
                    &format!("Account {} {}", i + 1, role),
                ));
            }
        }
    }

    steps.push(ReviewStep::Pairs {
        title: title.to_string(),
        pairs,
        hold: false,
    });
}

fn final_summary(
    tx: &ParsedTransaction<'_>,
    signer: &Pubkey,
    signer_path: &Bip32Path,
) -> ReviewStep {
    ReviewStep::Pairs {
        title: "Confirm transaction".to_string(),
        pairs: vec![
            (
                "Expected fee:".to_string(),
                format!("{} lamports", tx.base_fee()),
            ),
            ("Blockhash:".to_string(), format_pubkey(&tx.blockhash)),
            (
                "Signer account:".to_string(),
                format_signer_account(signer_path),
            ),
            ("Signer address:".to_string(), format_pubkey(signer)),
        ],
        hold: true,
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Renders a 32-byte key the way wallets show it.
pub fn format_pubkey(key: &Pubkey) -> String {
    bs58::encode(key).into_string()
}

fn format_property(
    instruction: &ParsedInstruction<'_>,
    kind: PropertyKind,
    value: &PropertyValue,
) -> String {
    match (kind, value) {
        (PropertyKind::Lamports, PropertyValue::U64(v)) => {
            format!("{} SOL", format_amount(*v, 9))
        }
        (PropertyKind::TokenAmount, PropertyValue::U64(v)) => {
            // Scaled by the instruction's own decimals field; the
            // deprecated unchecked instructions have none.
            format_amount(*v, instruction.token_decimals().unwrap_or(0))
        }
        (PropertyKind::UnixTimestamp, PropertyValue::I64(v)) => format_timestamp(*v),
        (_, PropertyValue::Pubkey(key)) => format_pubkey(key),
        (_, PropertyValue::U8(v)) => v.to_string(),
        (_, PropertyValue::U32(v)) => v.to_string(),
        (_, PropertyValue::U64(v)) => v.to_string(),
        (_, PropertyValue::I64(v)) => v.to_string(),
        (_, PropertyValue::String(s)) => s.clone(),
        (_, PropertyValue::StakeAuthorize(a)) => a.as_str().to_string(),
        (_, PropertyValue::AuthorityType(a)) => a.as_str().to_string(),
    }
}

/// Formats a raw integer amount with a decimal point, trailing zeros
/// trimmed.
pub fn format_amount(value: u64, decimals: u8) -> String {
    if decimals == 0 {
        return value.to_string();
    }

    let divisor = 10u64.pow(decimals as u32);
    let whole = value / divisor;
    let frac = value % divisor;

    if frac == 0 {
        whole.to_string()
    } else {
        let frac_str = format!("{:0width$}", frac, width = decimals as usize);
        format!("{}.{}", whole, frac_str.trim_end_matches('0'))
    }
}

/// Renders a Unix timestamp as UTC `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(timestamp: i64) -> String {
    let days = timestamp.div_euclid(86_400);
    let secs = timestamp.rem_euclid(86_400);

    // Days-to-civil conversion for the proleptic Gregorian calendar,
    // howardhinnant.github.io/date_algorithms.html#civil_from_days
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);

    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        year,
        month,
        day,
        secs / 3_600,
        (secs / 60) % 60,
        secs % 60
    )
}

/// Shows the account index for full 4-component paths, the whole path
/// otherwise.
fn format_signer_account(path: &Bip32Path) -> String {
    if path.as_slice().len() < 4 {
        return path.to_string();
    }
    let account_index = path.as_slice()[3] & !HARDENED;
    format!("#{}", account_index + 1)
}

fn role_suffix(role: AccountRole) -> &'static str {
    match role {
        AccountRole::SignerWritable => "(Writable, Signer)",
        AccountRole::SignerReadonly => "(Signer)",
        AccountRole::Readonly => "",
        AccountRole::Writable => "(Writable)",
    }
}

/// A lookup reference cannot be resolved on the device; the pages show
/// the table key and index instead of a concrete account key.
fn lookup_reference_pairs(
    reference: &AddressReference,
    display_name: &str,
) -> [(String, String); 3] {
    [
        (
            format!("{} is provided via a lookup table.", display_name),
            String::new(),
        ),
        (
            "Lookup table address:".to_string(),
            format_pubkey(&reference.table),
        ),
        ("Account index:".to_string(), reference.index.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::instruction::interpret;
    use crate::parsing::registry::{self, STAKE_PROGRAM_ID, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID};
    use crate::parsing::{Address, RawInstruction};

    const SIGNER: Pubkey = [0x11; 32];
    const RECIPIENT: Pubkey = [0x22; 32];
    const BLOCKHASH: [u8; 32] = [0x33; 32];

    fn signer_path() -> Bip32Path {
        Bip32Path::solana(0)
    }

    fn varint(mut value: u64) -> Vec<u8> {
        let mut out = Vec::new();
        loop {
            let byte = (value & 0x7f) as u8;
            value >>= 7;
            if value == 0 {
                out.push(byte);
                return out;
            }
            out.push(byte | 0x80);
        }
    }

    fn encode_legacy(
        header: [u8; 3],
        addresses: &[Pubkey],
        blockhash: [u8; 32],
        instructions: &[(u8, &[u8], &[u8])],
    ) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&header);
        out.extend_from_slice(&varint(addresses.len() as u64));
        for key in addresses {
            out.extend_from_slice(key);
        }
        out.extend_from_slice(&blockhash);
        out.extend_from_slice(&varint(instructions.len() as u64));
        for (program_index, account_indices, data) in instructions {
            out.push(*program_index);
            out.extend_from_slice(&varint(account_indices.len() as u64));
            out.extend_from_slice(account_indices);
            out.extend_from_slice(&varint(data.len() as u64));
            out.extend_from_slice(data);
        }
        out
    }

    fn transfer_tx(lamports: u64, funding: Pubkey) -> Vec<u8> {
        let mut data = 2u32.to_le_bytes().to_vec();
        data.extend_from_slice(&lamports.to_le_bytes());
        encode_legacy(
            [1, 0, 0],
            &[funding, RECIPIENT, SYSTEM_PROGRAM_ID],
            BLOCKHASH,
            &[(2, &[0, 1], &data)],
        )
    }

    #[test]
    fn test_format_amount_trims_trailing_zeros() {
        assert_eq!(format_amount(1_000_000_000, 9), "1");
        assert_eq!(format_amount(1_500_000_000, 9), "1.5");
        assert_eq!(format_amount(1_234_567_890, 9), "1.23456789");
        assert_eq!(format_amount(1, 9), "0.000000001");
        assert_eq!(format_amount(0, 9), "0");
        assert_eq!(format_amount(123, 0), "123");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00:00");
        assert_eq!(format_timestamp(946_684_800), "2000-01-01 00:00:00");
        // 2000 is a leap year.
        assert_eq!(format_timestamp(951_782_400), "2000-02-29 00:00:00");
        assert_eq!(format_timestamp(1_700_000_000), "2023-11-14 22:13:20");
    }

    #[test]
    fn test_signer_account_label() {
        assert_eq!(format_signer_account(&Bip32Path::solana(0)), "#1");
        assert_eq!(format_signer_account(&Bip32Path::solana(4)), "#5");

        let short = Bip32Path::from_slice(&[44 | HARDENED, 501 | HARDENED]);
        assert_eq!(format_signer_account(&short), "m/44'/501'");
    }

    #[test]
    fn test_transfer_review_pages() {
        let encoded = transfer_tx(1_000_000, SIGNER);
        let tx = ParsedTransaction::decode(&encoded).unwrap();
        let steps = transaction_review(&tx, &SIGNER, &signer_path());

        // The funding account is an authority held by the signer, so its
        // page is suppressed: amount, recipient, summary.
        assert_eq!(steps.len(), 3);
        assert_eq!(
            steps[0],
            ReviewStep::Pairs {
                title: "1/1: System Program: Transfer".to_string(),
                pairs: vec![("Transfer".to_string(), "0.001 SOL".to_string())],
                hold: false,
            }
        );
        assert_eq!(
            steps[1],
            ReviewStep::Pairs {
                title: "1/1: System Program: Transfer".to_string(),
                pairs: vec![("Recipient".to_string(), format_pubkey(&RECIPIENT))],
                hold: false,
            }
        );
        assert_eq!(
            steps[2],
            ReviewStep::Pairs {
                title: "Confirm transaction".to_string(),
                pairs: vec![
                    ("Expected fee:".to_string(), "5000 lamports".to_string()),
                    ("Blockhash:".to_string(), format_pubkey(&BLOCKHASH)),
                    ("Signer account:".to_string(), "#1".to_string()),
                    ("Signer address:".to_string(), format_pubkey(&SIGNER)),
                ],
                hold: true,
            }
        );
    }

    #[test]
    fn test_sender_page_shown_for_third_party_authority() {
        let encoded = transfer_tx(500, [0x44; 32]);
        let tx = ParsedTransaction::decode(&encoded).unwrap();
        let steps = transaction_review(&tx, &RECIPIENT, &signer_path());

        // Amount, sender, recipient, summary.
        assert_eq!(steps.len(), 4);
        assert_eq!(
            steps[1],
            ReviewStep::Pairs {
                title: "1/1: System Program: Transfer".to_string(),
                pairs: vec![("Sender".to_string(), format_pubkey(&[0x44; 32]))],
                hold: false,
            }
        );
        // The recipient is the signer and gets the annotation.
        assert_eq!(
            steps[2],
            ReviewStep::Pairs {
                title: "1/1: System Program: Transfer".to_string(),
                pairs: vec![(
                    "Recipient".to_string(),
                    format!("{} (Signer)", format_pubkey(&RECIPIENT)),
                )],
                hold: false,
            }
        );
    }

    #[test]
    fn test_stake_initialize_pages() {
        // id 0, staker = signer (suppressed), withdrawer and custodian
        // third parties, lockup at the turn of 2000.
        let mut data = 0u32.to_le_bytes().to_vec();
        data.extend_from_slice(&SIGNER);
        data.extend_from_slice(&[0x44; 32]);
        data.extend_from_slice(&946_684_800i64.to_le_bytes());
        data.extend_from_slice(&300u64.to_le_bytes());
        data.extend_from_slice(&[0x55; 32]);

        let encoded = encode_legacy(
            [1, 0, 1],
            &[SIGNER, [0x77; 32], [0x78; 32], STAKE_PROGRAM_ID],
            BLOCKHASH,
            &[(3, &[1, 2], &data)],
        );
        let tx = ParsedTransaction::decode(&encoded).unwrap();
        let steps = transaction_review(&tx, &SIGNER, &signer_path());

        let title = "1/1: Stake Program: Initialize".to_string();
        let expected: Vec<(String, String)> = vec![
            ("Initialize stake account".to_string(), format_pubkey(&[0x77; 32])),
            ("New withdraw authority".to_string(), format_pubkey(&[0x44; 32])),
            ("Lockup time".to_string(), "2000-01-01 00:00:00".to_string()),
            ("Lockup epoch".to_string(), "300".to_string()),
            ("Lockup authority".to_string(), format_pubkey(&[0x55; 32])),
        ];
        assert_eq!(steps.len(), expected.len() + 1);
        for (step, want) in steps.iter().zip(&expected) {
            assert_eq!(
                step,
                &ReviewStep::Pairs {
                    title: title.clone(),
                    pairs: vec![want.clone()],
                    hold: false,
                }
            );
        }
    }

    #[test]
    fn test_multisig_pages() {
        // Token transfer owned by a multisig account: owner is the
        // signer, two surplus accounts become multisig signers.
        let mut data = vec![3u8];
        data.extend_from_slice(&2_500u64.to_le_bytes());

        let encoded = encode_legacy(
            [1, 0, 0],
            &[SIGNER, [0x55; 32], [0x66; 32], SIGNER, [0x88; 32], TOKEN_PROGRAM_ID],
            BLOCKHASH,
            &[(5, &[1, 2, 0, 3, 4], &data)],
        );
        let tx = ParsedTransaction::decode(&encoded).unwrap();
        let steps = transaction_review(&tx, &SIGNER, &signer_path());

        let title = "1/1: Token Program: Transfer".to_string();

        // Deprecation notice, amount, from, to, multisig notice,
        // multisig signers, summary. The owner page is suppressed.
        assert_eq!(steps.len(), 7);
        assert_eq!(
            steps[0],
            ReviewStep::Notice {
                title: title.clone(),
                body: "Warning: Instruction is deprecated. Token decimals unknown.".to_string(),
            }
        );
        // No decimals property on the deprecated transfer: raw integer.
        assert_eq!(
            steps[1],
            ReviewStep::Pairs {
                title: title.clone(),
                pairs: vec![("Transfer tokens".to_string(), "2500".to_string())],
                hold: false,
            }
        );
        assert_eq!(
            steps[4],
            ReviewStep::Notice {
                title: "Confirm multisig".to_string(),
                body: "The following instruction is a multisig instruction.".to_string(),
            }
        );
        assert_eq!(
            steps[5],
            ReviewStep::Pairs {
                title,
                pairs: vec![
                    (
                        format!("Signer 1 ({}):", signer_path()),
                        format_pubkey(&SIGNER),
                    ),
                    ("Signer 2:".to_string(), format_pubkey(&[0x88; 32])),
                ],
                hold: false,
            }
        );
    }

    #[test]
    fn test_unsupported_instruction_pages() {
        let data = [99u8, 0, 0, 0, 0xAA, 0xBB];
        let encoded = encode_legacy(
            [1, 0, 1],
            &[SIGNER, RECIPIENT, SYSTEM_PROGRAM_ID],
            BLOCKHASH,
            &[(2, &[0, 1], &data)],
        );
        let tx = ParsedTransaction::decode(&encoded).unwrap();
        assert!(tx.blind_signing);

        let steps = transaction_review(&tx, &SIGNER, &signer_path());
        let title = "1/1: System Program: instruction id (99)".to_string();

        assert_eq!(steps.len(), 4);
        assert_eq!(
            steps[0],
            ReviewStep::Notice {
                title: title.clone(),
                body: "Instruction contains 2 accounts and its data is 6 bytes long."
                    .to_string(),
            }
        );
        assert_eq!(
            steps[1],
            ReviewStep::Pairs {
                title: title.clone(),
                pairs: vec![("Instruction data:".to_string(), "63000000aabb".to_string())],
                hold: false,
            }
        );
        // Roles per the header: the signer writable, the recipient
        // read-only with the bare suffix.
        assert_eq!(
            steps[2],
            ReviewStep::Pairs {
                title,
                pairs: vec![
                    (
                        format!("Account 1 ({}) (Writable, Signer):", signer_path()),
                        format_pubkey(&SIGNER),
                    ),
                    ("Account 2 :".to_string(), format_pubkey(&RECIPIENT)),
                ],
                hold: false,
            }
        );
    }

    #[test]
    fn test_unknown_program_pages() {
        let encoded = encode_legacy(
            [1, 0, 0],
            &[SIGNER, RECIPIENT, [0xAB; 32]],
            BLOCKHASH,
            &[(2, &[1], &[0xDE, 0xAD])],
        );
        let tx = ParsedTransaction::decode(&encoded).unwrap();
        let steps = transaction_review(&tx, &SIGNER, &signer_path());

        // No instruction id in the title when the program is unknown.
        assert_eq!(
            steps[0],
            ReviewStep::Notice {
                title: "1/1: Unsupported program".to_string(),
                body: "Instruction contains 1 accounts and its data is 2 bytes long."
                    .to_string(),
            }
        );
        assert_eq!(
            steps[1],
            ReviewStep::Pairs {
                title: "1/1: Unsupported program".to_string(),
                pairs: vec![("Instruction data:".to_string(), "dead".to_string())],
                hold: false,
            }
        );
    }

    #[test]
    fn test_lookup_account_reference_pages() {
        let spec = registry::lookup(&SYSTEM_PROGRAM_ID, 2);
        let mut data = 2u32.to_le_bytes().to_vec();
        data.extend_from_slice(&42u64.to_le_bytes());
        let raw = RawInstruction {
            program_index: 0,
            account_indices: &[],
            data: &data,
            discriminant: 2,
            payload: &data[4..],
        };
        let accounts = vec![
            Account::Key(Address {
                key: SIGNER,
                role: AccountRole::SignerWritable,
            }),
            Account::Lookup(AddressReference {
                table: [0xAB; 32],
                index: 7,
                role: AccountRole::Writable,
            }),
        ];
        let instruction = interpret(&raw, spec, SYSTEM_PROGRAM_ID, accounts).unwrap();

        let mut steps = Vec::new();
        instruction_review(&mut steps, &instruction, 1, 1, &[0x99; 32], &signer_path());

        // Amount, sender, recipient in the three-pair reference form.
        assert_eq!(steps.len(), 3);
        match &steps[2] {
            ReviewStep::Pairs { pairs, .. } => {
                assert_eq!(
                    pairs[0],
                    (
                        "Recipient is provided via a lookup table.".to_string(),
                        String::new(),
                    )
                );
                assert_eq!(
                    pairs[1],
                    ("Lookup table address:".to_string(), format_pubkey(&[0xAB; 32]))
                );
                assert_eq!(pairs[2], ("Account index:".to_string(), "7".to_string()));
            }
            other => panic!("expected a pairs page, got {:?}", other),
        }
    }
}
