//! Insertion-ordered registry of the identifiers seen during a lexing pass.
//!
//! Each name is registered once. Its synthetic address is fixed at that point
//! and never reassigned by later occurrences.

use ordermap::OrderMap;
use tracing::{debug, warn};

pub mod r#type;
use r#type::Type;


pub const DEFAULT_BASE_ADDRESS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTableEntry {
    pub name: String,
    pub declared_type: Type,
    pub size_bytes: usize,
    pub address: usize,
    pub value: i64,
}

#[derive(Debug, Clone)]
pub struct SymbolTable {
    base_address: usize,
    entries: OrderMap<String, SymbolTableEntry>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::with_base_address(DEFAULT_BASE_ADDRESS)
    }

    pub fn with_base_address(base_address: usize) -> Self {
        Self {
            base_address,
            entries: OrderMap::new(),
        }
    }

    pub fn base_address(&self) -> usize {
        self.base_address
    }

    /// Looks `name` up, inserting it if absent, and returns its address.
    ///
    /// A new entry is placed at `base_address + len() * size_bytes`, where
    /// `len()` is taken before the insertion. Addresses past `usize::MAX`
    /// saturate to `usize::MAX`.
    pub fn intern(&mut self, name: &str, declared_type: Type, size_bytes: usize) -> usize {
        if let Some(entry) = self.entries.get(name) {
            return entry.address;
        }

        let address = self
            .entries
            .len()
            .checked_mul(size_bytes)
            .and_then(|offset| self.base_address.checked_add(offset))
            .unwrap_or_else(|| {
                warn!(name, base = self.base_address, "symbol address overflow, saturating");
                usize::MAX
            });
        debug!(name, %declared_type, size_bytes, address, "new symbol");
        self.entries.insert(
            name.to_string(),
            SymbolTableEntry {
                name: name.to_string(),
                declared_type,
                size_bytes,
                address,
                value: 0,
            },
        );
        address
    }

    /// Interns `name` as an `int`, the only type the lexer can assign.
    pub fn intern_default(&mut self, name: &str) -> usize {
        let ty = Type::default();
        self.intern(name, ty, ty.size_bytes())
    }

    pub fn get(&self, name: &str) -> Option<&SymbolTableEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &SymbolTableEntry> {
        self.entries.values()
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a SymbolTableEntry;
    type IntoIter = ordermap::map::Values<'a, String, SymbolTableEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
