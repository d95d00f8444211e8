//! Account representation and the combined account table.
//!
//! A transaction references accounts in two ways: 32-byte keys listed
//! directly in the message, and (table, index) references into on-chain
//! address lookup tables. The device never resolves lookup references to
//! concrete keys; it can only show the reference itself. The two forms
//! are kept as distinct variants and matched exhaustively, never
//! distinguished by shape.

use common::Pubkey;

/// Access role of an account, derived from its position in the address
/// list or from the lookup-table section it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRole {
    /// Required signer, writable.
    SignerWritable,
    /// Required signer, read-only.
    SignerReadonly,
    /// Read-only, no signature.
    Readonly,
    /// Writable, no signature.
    Writable,
}

impl AccountRole {
    /// Returns true for the two signer roles.
    pub fn is_signer(self) -> bool {
        matches!(self, AccountRole::SignerWritable | AccountRole::SignerReadonly)
    }

    /// Returns true for the two writable roles.
    pub fn is_writable(self) -> bool {
        matches!(self, AccountRole::SignerWritable | AccountRole::Writable)
    }
}

/// Assigns the role of the address at `position` in the address list.
///
/// The first `required_signers` entries sign and are writable, the next
/// `readonly_signers` sign but are read-only, the next `readonly` are
/// read-only without signing, and the remainder are writable.
pub fn role_for_position(
    position: usize,
    required_signers: u8,
    readonly_signers: u8,
    readonly: u8,
) -> AccountRole {
    let signers_end = required_signers as usize;
    let readonly_signers_end = signers_end + readonly_signers as usize;
    let readonly_end = readonly_signers_end + readonly as usize;

    if position < signers_end {
        AccountRole::SignerWritable
    } else if position < readonly_signers_end {
        AccountRole::SignerReadonly
    } else if position < readonly_end {
        AccountRole::Readonly
    } else {
        AccountRole::Writable
    }
}

/// An address listed directly in the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address {
    /// 32-byte public key.
    pub key: Pubkey,
    /// Position-derived role.
    pub role: AccountRole,
}

/// A reference into an address lookup table.
///
/// The concrete key lives on chain; the device only sees the table key
/// and the byte index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressReference {
    /// Public key of the lookup table account.
    pub table: Pubkey,
    /// Index of the referenced entry within the table.
    pub index: u8,
    /// Role of the referenced account (writable or read-only section).
    pub role: AccountRole,
}

/// An account as an instruction sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Account {
    /// Key present directly in the address list.
    Key(Address),
    /// Key referenced through a lookup table.
    Lookup(AddressReference),
}

impl Account {
    /// Returns the embedded 32-byte key: the account key for a direct
    /// address, the table key for a lookup reference.
    pub fn key_bytes(&self) -> &Pubkey {
        match self {
            Account::Key(address) => &address.key,
            Account::Lookup(reference) => &reference.table,
        }
    }

    /// Returns the account role.
    pub fn role(&self) -> AccountRole {
        match self {
            Account::Key(address) => address.role,
            Account::Lookup(reference) => reference.role,
        }
    }
}

/// Ordered table of every account an instruction index may refer to:
/// the transaction's own addresses, then all lookup read-write
/// references in table order, then all lookup read-only references.
#[derive(Debug, Clone)]
pub struct AccountTable {
    accounts: Vec<Account>,
}

impl AccountTable {
    /// Builds the combined table from the decoded transaction sections.
    pub fn new(
        addresses: &[Address],
        lookup_writable: &[AddressReference],
        lookup_readonly: &[AddressReference],
    ) -> Self {
        let mut accounts =
            Vec::with_capacity(addresses.len() + lookup_writable.len() + lookup_readonly.len());
        accounts.extend(addresses.iter().copied().map(Account::Key));
        accounts.extend(lookup_writable.iter().copied().map(Account::Lookup));
        accounts.extend(lookup_readonly.iter().copied().map(Account::Lookup));
        Self { accounts }
    }

    /// Resolves an instruction account index, checked against the table
    /// length.
    pub fn get(&self, index: u8) -> Option<&Account> {
        self.accounts.get(index as usize)
    }

    /// Total number of resolvable accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_bands() {
        // 2 required signers, 1 read-only signer, 1 read-only, 5 total
        let roles: Vec<AccountRole> =
            (0..5).map(|i| role_for_position(i, 2, 1, 1)).collect();
        assert_eq!(
            roles,
            vec![
                AccountRole::SignerWritable,
                AccountRole::SignerWritable,
                AccountRole::SignerReadonly,
                AccountRole::Readonly,
                AccountRole::Writable,
            ]
        );
    }

    #[test]
    fn test_role_predicates() {
        assert!(AccountRole::SignerWritable.is_signer());
        assert!(AccountRole::SignerWritable.is_writable());
        assert!(AccountRole::SignerReadonly.is_signer());
        assert!(!AccountRole::SignerReadonly.is_writable());
        assert!(!AccountRole::Readonly.is_signer());
        assert!(!AccountRole::Readonly.is_writable());
        assert!(!AccountRole::Writable.is_signer());
        assert!(AccountRole::Writable.is_writable());
    }

    #[test]
    fn test_combined_table_order_and_bounds() {
        let addresses = [
            Address {
                key: [1; 32],
                role: AccountRole::SignerWritable,
            },
            Address {
                key: [2; 32],
                role: AccountRole::Writable,
            },
        ];
        let lookup_writable = [AddressReference {
            table: [3; 32],
            index: 7,
            role: AccountRole::Writable,
        }];
        let lookup_readonly = [AddressReference {
            table: [4; 32],
            index: 9,
            role: AccountRole::Readonly,
        }];

        let table = AccountTable::new(&addresses, &lookup_writable, &lookup_readonly);
        assert_eq!(table.len(), 4);
        assert_eq!(table.get(0).unwrap().key_bytes(), &[1; 32]);
        assert_eq!(table.get(1).unwrap().key_bytes(), &[2; 32]);
        assert!(matches!(table.get(2), Some(Account::Lookup(r)) if r.index == 7));
        assert!(matches!(table.get(3), Some(Account::Lookup(r)) if r.index == 9));
        assert!(table.get(4).is_none());
    }

    #[test]
    fn test_key_bytes_for_lookup_is_table_key() {
        let account = Account::Lookup(AddressReference {
            table: [0xAA; 32],
            index: 1,
            role: AccountRole::Readonly,
        });
        assert_eq!(account.key_bytes(), &[0xAA; 32]);
    }
}
