//! Compile-time validation for the messages! macro.
//!
//! Checks, in order:
//! 1. At least one locale block is present
//! 2. Locale names are unique
//! 3. Keys are unique within a locale and map to distinct enum variants
//! 4. Translation keys exist in the reference locale
//! 5. Translation placeholders exist in the reference template
//!
//! Unknown names get typo suggestions using Levenshtein distance.

use std::collections::{BTreeSet, HashMap, HashSet};

use csv_importer_syntax::placeholder_names;
use proc_macro2::Span;
use strsim::levenshtein;

use crate::codegen::variant_name;
use crate::input::{LocaleBlock, MacroInput};

/// Main validation entry point.
///
/// Returns an error spanned at the offending token on the first problem.
pub fn validate(input: &MacroInput) -> syn::Result<()> {
    let Some((reference, translations)) = input.locales.split_first() else {
        return Err(syn::Error::new(
            Span::call_site(),
            "messages! requires at least one locale block\nhelp: add `en { key = \"text\"; }`",
        ));
    };

    let mut seen_locales = HashSet::new();
    for locale in &input.locales {
        if !seen_locales.insert(locale.name.name.as_str()) {
            return Err(syn::Error::new(
                locale.name.span,
                format!("locale '{}' is declared more than once", locale.name.name),
            ));
        }
        validate_unique_keys(locale)?;
    }

    validate_variant_names(reference)?;

    let reference_templates: HashMap<&str, &str> = reference
        .messages
        .iter()
        .map(|m| (m.key.name.as_str(), m.template.value.as_str()))
        .collect();

    for locale in translations {
        validate_translation(locale, &reference.name.name, &reference_templates)?;
    }

    Ok(())
}

/// Reject a key declared twice in the same locale block.
fn validate_unique_keys(locale: &LocaleBlock) -> syn::Result<()> {
    let mut seen = HashSet::new();
    for message in &locale.messages {
        if !seen.insert(message.key.name.as_str()) {
            return Err(syn::Error::new(
                message.key.span,
                format!(
                    "duplicate key '{}' in locale '{}'",
                    message.key.name, locale.name.name
                ),
            ));
        }
    }
    Ok(())
}

/// Every reference key must yield a distinct, valid enum variant name.
fn validate_variant_names(reference: &LocaleBlock) -> syn::Result<()> {
    let mut variants: HashMap<String, &str> = HashMap::new();

    for message in &reference.messages {
        let variant = variant_name(&message.key.name);
        if !variant.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(syn::Error::new(
                message.key.span,
                format!(
                    "key '{}' does not produce a valid variant name\nhelp: start the key with a letter",
                    message.key.name
                ),
            ));
        }
        if variant == "Self" {
            return Err(syn::Error::new(
                message.key.span,
                format!(
                    "key '{}' maps to the reserved variant name `Self`\nhelp: rename the key",
                    message.key.name
                ),
            ));
        }
        if let Some(previous) = variants.insert(variant.clone(), &message.key.name) {
            return Err(syn::Error::new(
                message.key.span,
                format!(
                    "keys '{}' and '{}' both map to variant `{}`",
                    previous, message.key.name, variant
                ),
            ));
        }
    }

    Ok(())
}

/// Check a translation block against the reference templates.
fn validate_translation(
    locale: &LocaleBlock,
    reference_locale: &str,
    reference_templates: &HashMap<&str, &str>,
) -> syn::Result<()> {
    for message in &locale.messages {
        let key = message.key.name.as_str();

        let Some(reference_template) = reference_templates.get(key) else {
            let mut available: Vec<&str> = reference_templates.keys().copied().collect();
            available.sort_unstable();
            let suggestions = compute_suggestions(key, &available);
            let mut msg = format!("unknown key '{key}': not declared in locale '{reference_locale}'");
            if let Some(best) = suggestions.first() {
                msg.push_str(&format!("\nhelp: did you mean '{best}'?"));
            }
            return Err(syn::Error::new(message.key.span, msg));
        };

        let allowed: BTreeSet<&str> = placeholder_names(reference_template);
        for name in placeholder_names(&message.template.value) {
            if allowed.contains(name) {
                continue;
            }
            let available: Vec<&str> = allowed.iter().copied().collect();
            let suggestions = compute_suggestions(name, &available);
            let mut msg = format!(
                "unknown placeholder '{{{name}}}' in '{key}' for locale '{}'",
                locale.name.name
            );
            if let Some(best) = suggestions.first() {
                msg.push_str(&format!("\nhelp: did you mean '{{{best}}}'?"));
            } else if available.is_empty() {
                msg.push_str(&format!(
                    "\nnote: '{key}' takes no placeholders in '{reference_locale}'"
                ));
            } else {
                msg.push_str(&format!(
                    "\nnote: available placeholders: {}",
                    available.join(", ")
                ));
            }
            return Err(syn::Error::new(message.template.span, msg));
        }
    }

    Ok(())
}

/// Closest candidates within a small edit distance, best first.
fn compute_suggestions(name: &str, available: &[&str]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, (*candidate).to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
