//! Deterministic text rendering of the bucket layout.

use crate::bucket_store::BucketStore;
use crate::hashing::BucketHasher;
use crate::table::HashTable;
use core::fmt;

const RULE_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 18;

struct Dump<'a, V, B, H> {
    table: &'a HashTable<V, B, H>,
}

impl<V, B, H> fmt::Display for Dump<'_, V, B, H>
where
    V: fmt::Debug,
    B: BucketStore<V>,
    H: BucketHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.table;
        for index in 0..t.capacity() {
            write!(f, "Bucket {} → ", index)?;
            for (key, value) in t.buckets.bucket(index) {
                write!(f, "({}, {:?}) → ", key, value)?;
            }
            writeln!(f, "None")?;
        }
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        let rows = [
            ("Hash Function", t.hasher.describe().to_string()),
            ("Num elements", t.len().to_string()),
            ("Size of hash table", t.capacity().to_string()),
            ("Load Factor", format!("{:.2}", t.load_factor())),
        ];
        for (label, value) in rows {
            writeln!(f, "{:<width$} → {}", label, value, width = LABEL_WIDTH)?;
        }
        Ok(())
    }
}

impl<V, B, H> HashTable<V, B, H>
where
    V: fmt::Debug,
    B: BucketStore<V>,
    H: BucketHasher,
{
    /// One line per bucket, `Bucket <i> → (key, value) → … → None`, in
    /// ascending index and bucket order, then a summary of the hash
    /// function, element count, capacity and load factor (two decimals).
    ///
    /// Keys use `Display` and values `Debug`.
    pub fn dump(&self) -> String {
        Dump { table: self }.to_string()
    }
}
