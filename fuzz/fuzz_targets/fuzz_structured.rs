//! Structured fuzz target
//!
//! Builds description-shaped inputs from arbitrary parts, which reaches the
//! semantic checks far more often than raw bytes.

#![no_main]

use arbitrary::Arbitrary;
use hgvs_validate::error_handling::ErrorConfig;
use hgvs_validate::Validator;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Prefix {
    C,
    G,
    R,
    P,
    Other(char),
}

#[derive(Debug, Arbitrary)]
enum Edit {
    Substitution(u8, u8),
    Deletion,
    Insertion(u8),
    Delins(u8),
    FrameShift,
    Silent,
}

#[derive(Debug, Arbitrary)]
struct Event {
    start: i32,
    end: Option<i32>,
    offset: Option<i16>,
    edit: Edit,
}

#[derive(Debug, Arbitrary)]
struct Description {
    prefix: Prefix,
    events: Vec<Event>,
    predicted: bool,
    lenient: bool,
}

const BASES: &[u8] = b"ACGTacguX*";

fn position(value: i32, offset: Option<i16>) -> String {
    let mut text = if value < 0 {
        format!("-{}", value.unsigned_abs())
    } else {
        value.to_string()
    };
    if let Some(offset) = offset {
        text.push_str(&format!("{offset:+}"));
    }
    text
}

fn render(event: &Event) -> String {
    let mut text = position(event.start, event.offset);
    if let Some(end) = event.end {
        text.push('_');
        text.push_str(&position(end, None));
    }
    let base = |b: u8| BASES[b as usize % BASES.len()] as char;
    match event.edit {
        Edit::Substitution(r, n) => text.push_str(&format!("{}>{}", base(r), base(n))),
        Edit::Deletion => text.push_str("del"),
        Edit::Insertion(b) => text.push_str(&format!("ins{}", base(b))),
        Edit::Delins(b) => text.push_str(&format!("delins{}", base(b))),
        Edit::FrameShift => text.push_str("fs"),
        Edit::Silent => text.push('='),
    }
    text
}

fuzz_target!(|description: Description| {
    let prefix = match description.prefix {
        Prefix::C => 'c',
        Prefix::G => 'g',
        Prefix::R => 'r',
        Prefix::P => 'p',
        Prefix::Other(c) => c,
    };
    let events: Vec<String> = description.events.iter().take(16).map(render).collect();
    let body = events.join(";");
    let input = match (events.len(), description.predicted) {
        (0 | 1, false) => format!("{prefix}.{body}"),
        (0 | 1, true) => format!("{prefix}.({body})"),
        (_, false) => format!("{prefix}.[{body}]"),
        (_, true) => format!("{prefix}.[({body})]"),
    };

    let validator = if description.lenient {
        Validator::new().with_error_config(ErrorConfig::lenient())
    } else {
        Validator::new()
    };
    let _ = validator.validate_expression(&input);
});
