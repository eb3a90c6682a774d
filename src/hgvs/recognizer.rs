//! Single and multi-variant recognition
//!
//! A multi-variant is written `X.[e1;e2;...]`: a level prefix, square
//! brackets and at least two distinct events. RNA also separates members
//! with `,`, but one description never mixes the two separators. Members are
//! matched with the same single-event grammar as standalone events.

use crate::error::ValidationError;
use crate::error_handling::LegacyTokenPolicy;
use crate::hgvs::edit::{EventCaptures, LegacyToken};
use crate::hgvs::grammar::match_event;
use crate::hgvs::validate::{strip_predicted, validate_event};
use crate::hgvs::variant::{EventKind, MolecularLevel, VariantEvent, VariantExpression};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

static MULTI_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z])\.\[(.+)\]$").unwrap());

/// Level, members and predicted flag of a multi-variant
#[derive(Debug)]
struct MultiParts<'a> {
    level: MolecularLevel,
    members: Vec<&'a str>,
    predicted: bool,
}

/// Validates single events and multi-variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Recognizer {
    legacy: LegacyTokenPolicy,
}

impl Recognizer {
    pub fn new(legacy: LegacyTokenPolicy) -> Self {
        Self { legacy }
    }

    pub fn legacy_policy(&self) -> LegacyTokenPolicy {
        self.legacy
    }

    /// Validate one event at `level`
    ///
    /// The level prefix is optional; protein events may be wrapped as
    /// predicted: `p.(Trp24Cys)`.
    pub fn validate_single(
        &self,
        text: &str,
        level: MolecularLevel,
    ) -> Result<VariantEvent, ValidationError> {
        if text.is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        let event = strip_prefix_for(text, level)?;
        if let Some(token) = LegacyToken::from_token(event) {
            return self.legacy_event(token, level);
        }

        let (bare, predicted) = unwrap_predicted(event, level);
        if match_event(level, bare).is_none() {
            return Err(ValidationError::unsupported(
                text,
                format!("does not match the {} event grammar", level),
            ));
        }
        Ok(validate_event(bare, level)?.predicted(predicted))
    }

    /// Validate a bracketed multi-variant
    pub fn validate_multi(&self, text: &str) -> Result<Vec<VariantEvent>, ValidationError> {
        let parts = split_multi(text)?;

        let mut seen = HashSet::with_capacity(parts.members.len());
        for member in &parts.members {
            if !seen.insert(*member) {
                return Err(ValidationError::DuplicateEvent {
                    input: text.to_string(),
                    event: member.to_string(),
                });
            }
        }

        let mut events = Vec::with_capacity(parts.members.len());
        for member in parts.members {
            if let Some(token) = LegacyToken::from_token(member) {
                events.push(self.legacy_event(token, parts.level)?);
                continue;
            }
            let (bare, predicted) = unwrap_predicted(member, parts.level);
            if match_event(parts.level, bare).is_none() {
                return Err(ValidationError::InvalidEvent {
                    input: text.to_string(),
                    event: member.to_string(),
                });
            }
            let event = validate_event(bare, parts.level)?;
            events.push(event.predicted(parts.predicted || predicted));
        }
        Ok(events)
    }

    /// Multi-variant shape with every member matching the level grammar
    pub fn is_multi(&self, text: &str) -> bool {
        let Ok(parts) = split_multi(text) else {
            return false;
        };
        parts.members.iter().all(|member| {
            if LegacyToken::from_token(member).is_some() {
                return self.legacy == LegacyTokenPolicy::Accept;
            }
            let (bare, _) = unwrap_predicted(member, parts.level);
            match_event(parts.level, bare).is_some()
        })
    }

    /// Validate a single or multi-variant, taking the level from its prefix
    pub fn validate_expression(&self, text: &str) -> Result<VariantExpression, ValidationError> {
        if text.is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        if MULTI_SHAPE.is_match(text) {
            return self.validate_multi(text).map(VariantExpression::Multi);
        }
        if let Some(token) = LegacyToken::from_token(text) {
            let level = match token {
                LegacyToken::WildType => MolecularLevel::Dna,
                LegacyToken::Synonymous => MolecularLevel::Protein,
            };
            return self.legacy_event(token, level).map(VariantExpression::Single);
        }

        let level = match level_prefix(text) {
            Some(prefix) => MolecularLevel::from_prefix(prefix).ok_or_else(|| {
                ValidationError::UnsupportedPrefix {
                    input: text.to_string(),
                    prefix: prefix.to_string(),
                }
            })?,
            None => {
                return Err(ValidationError::unsupported(
                    text,
                    "missing level prefix (c., n., g., m., r. or p.)",
                ));
            }
        };
        self.validate_single(text, level)
            .map(VariantExpression::Single)
    }

    fn legacy_event(
        &self,
        token: LegacyToken,
        level: MolecularLevel,
    ) -> Result<VariantEvent, ValidationError> {
        match self.legacy {
            LegacyTokenPolicy::Accept => Ok(VariantEvent::new(
                EventKind::Substitution,
                level,
                token.as_str(),
                EventCaptures::Legacy(token),
            )),
            LegacyTokenPolicy::Reject => Err(ValidationError::unsupported(
                token.as_str(),
                format!(
                    "{} is no longer supported and should be replaced by {}",
                    token.as_str(),
                    token.replacement()
                ),
            )),
        }
    }
}

/// Leading `X.` of a description
fn level_prefix(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(prefix), Some('.')) if prefix.is_ascii_alphabetic() => Some(prefix),
        _ => None,
    }
}

/// Drop an optional prefix, which must belong to `level`
fn strip_prefix_for(text: &str, level: MolecularLevel) -> Result<&str, ValidationError> {
    let Some(prefix) = level_prefix(text) else {
        return Ok(text);
    };
    if level.prefixes().contains(&prefix) {
        return Ok(&text[2..]);
    }
    if MolecularLevel::from_prefix(prefix).is_none() {
        return Err(ValidationError::UnsupportedPrefix {
            input: text.to_string(),
            prefix: prefix.to_string(),
        });
    }
    let expected: Vec<String> = level.prefixes().iter().map(|p| format!("{}.", p)).collect();
    Err(ValidationError::unsupported(
        text,
        format!(
            "'{}.' is not a {} prefix, expected {}",
            prefix,
            level,
            expected.join(" or ")
        ),
    ))
}

fn unwrap_predicted(event: &str, level: MolecularLevel) -> (&str, bool) {
    match level {
        MolecularLevel::Protein => strip_predicted(event),
        MolecularLevel::Dna | MolecularLevel::Rna => (event, false),
    }
}

fn split_multi(text: &str) -> Result<MultiParts<'_>, ValidationError> {
    let captures = MULTI_SHAPE.captures(text).ok_or_else(|| {
        ValidationError::unsupported(
            text,
            "expected a multi-variant such as 'c.[76A>T;83G>C]'",
        )
    })?;
    let (Some(prefix), Some(body)) = (captures.get(1), captures.get(2)) else {
        return Err(ValidationError::unsupported(text, "malformed multi-variant"));
    };

    let level = prefix
        .as_str()
        .chars()
        .next()
        .and_then(MolecularLevel::from_prefix)
        .ok_or_else(|| ValidationError::UnsupportedPrefix {
            input: text.to_string(),
            prefix: prefix.as_str().to_string(),
        })?;

    let (body, predicted) = unwrap_predicted(body.as_str(), level);
    let members = split_members(text, body, level.separators())?;
    if members.len() < 2 {
        return Err(ValidationError::unsupported(
            text,
            "a multi-variant needs at least two events",
        ));
    }
    debug!(input = %text, %level, members = members.len(), "split multi-variant");
    Ok(MultiParts {
        level,
        members,
        predicted,
    })
}

/// Split `body` on the level's separators outside parentheses and brackets
fn split_members<'a>(
    text: &str,
    body: &'a str,
    separators: &[char],
) -> Result<Vec<&'a str>, ValidationError> {
    let mut members = Vec::new();
    let mut used: Option<char> = None;
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in body.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| ValidationError::unsupported(text, "unbalanced brackets"))?;
            }
            _ if depth == 0 && separators.contains(&c) => {
                if used.is_some_and(|u| u != c) {
                    return Err(ValidationError::unsupported(
                        text,
                        "separators ';' and ',' cannot be mixed",
                    ));
                }
                used = Some(c);
                members.push(&body[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(ValidationError::unsupported(text, "unbalanced brackets"));
    }
    members.push(&body[start..]);

    if members.iter().any(|m| m.is_empty()) {
        return Err(ValidationError::unsupported(
            text,
            "multi-variant members cannot be empty",
        ));
    }
    Ok(members)
}

/// Validate one event at `level` with the default recognizer
pub fn validate(text: &str, level: MolecularLevel) -> Result<VariantEvent, ValidationError> {
    Recognizer::default().validate_single(text, level)
}

/// Validate a multi-variant with the default recognizer
pub fn validate_multi(text: &str) -> Result<Vec<VariantEvent>, ValidationError> {
    Recognizer::default().validate_multi(text)
}

pub fn is_multi(text: &str) -> bool {
    Recognizer::default().is_multi(text)
}

/// Validate a single or multi-variant with the default recognizer
pub fn validate_expression(text: &str) -> Result<VariantExpression, ValidationError> {
    Recognizer::default().validate_expression(text)
}
