use super::{ExpenseId, ExpenseRecord};

/// Insertion-ordered list of expenses for the current session.
/// Duplicates are allowed; records are only ever added or removed whole.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record at the end.
    pub fn append(&mut self, record: ExpenseRecord) -> &ExpenseRecord {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Remove and return the record at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<ExpenseRecord, LedgerError> {
        if index >= self.records.len() {
            return Err(LedgerError::NotFound {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    /// Put a record back at `index`, or at the end if the ledger has
    /// shrunk below it. Returns the position actually used.
    pub fn insert_at(&mut self, index: usize, record: ExpenseRecord) -> usize {
        let index = index.min(self.records.len());
        self.records.insert(index, record);
        index
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&ExpenseRecord> {
        self.records.get(index)
    }

    pub fn position(&self, id: ExpenseId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    NotFound { index: usize, len: usize },
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::NotFound { index, len } => {
                write!(f, "No expense at position {} (ledger has {})", index, len)
            }
        }
    }
}

impl std::error::Error for LedgerError {}
