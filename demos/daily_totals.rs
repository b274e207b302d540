//! Walks a table of daily sales totals through growth and deletion,
//! printing the bucket layout after each phase.
//!
//! Run with `RUST_LOG=chain_hashmap=debug` to see the resize log.

use chain_hashmap::HashTable;

fn main() {
    env_logger::init();

    let mut totals = HashTable::new();
    let data = [
        ("2025-12-20", 260.0),
        ("2025-12-19", 180.5),
        ("2025-12-18", 95.75),
        ("2025-12-17", 420.0),
        ("2025-12-16", 310.25),
    ];
    for (day, total) in data {
        totals.insert(day, total);
    }
    print!("{}", totals.dump());

    for day in ["2025-12-16", "2025-12-19", "2025-12-01"] {
        match totals.lookup(day) {
            Some(total) => println!("{day}: {total}"),
            None => println!("{day}: no entry"),
        }
    }

    totals.insert("2025-12-10", 230.90);
    print!("{}", totals.dump());

    for day in ["2025-12-17", "2025-12-20"] {
        totals.delete(day);
    }
    print!("{}", totals.dump());

    let violations = totals.validate();
    if !violations.is_empty() {
        for v in &violations {
            eprintln!("invariant violated: {v}");
        }
        std::process::exit(1);
    }
}
