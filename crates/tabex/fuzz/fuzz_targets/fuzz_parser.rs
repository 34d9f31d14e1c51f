//! Fuzz target for the delimited text parser.
//!
//! This fuzzer tests that the parser:
//! 1. Never panics on malformed input
//! 2. Only returns tables that satisfy the arity and unique-name invariants

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;
use tabex::{Parser, ParserConfig, RowArity};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for arity in [RowArity::Strict, RowArity::Coerce] {
        let parser = Parser::with_config(ParserConfig {
            arity,
            ..ParserConfig::default()
        });

        if let Ok(table) = parser.parse_str(text) {
            let names: HashSet<&String> = table.columns().iter().collect();
            assert_eq!(names.len(), table.column_count());
            assert!(table.rows().iter().all(|r| r.len() == table.column_count()));
        }
    }
});
