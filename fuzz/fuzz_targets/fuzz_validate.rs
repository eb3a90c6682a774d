//! Fuzz target for the validation entry points
//!
//! Feeds arbitrary byte strings to every entry point to find panics.

#![no_main]

use hgvs_validate::{MolecularLevel, Validator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if input.len() > 1000 {
            return;
        }

        let _ = hgvs_validate::validate_expression(input);
        let _ = hgvs_validate::validate_multi(input);
        let _ = hgvs_validate::is_multi(input);
        for level in [MolecularLevel::Dna, MolecularLevel::Rna, MolecularLevel::Protein] {
            let _ = hgvs_validate::validate(input, level);
        }
        let _ = Validator::new().validate_with_warnings(input);
    }
});
