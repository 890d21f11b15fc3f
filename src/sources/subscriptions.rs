use std::fs;

use opml::{Outline, OPML};

use crate::domain::Subscription;

/// Load the run's subscriptions.
///
/// The OPML file wins when it exists and yields at least one outline with a
/// non-empty `xmlUrl`; otherwise the plain URL list is used (one URL per
/// non-blank line, empty context). Missing files mean zero sources, never an
/// error.
pub fn load(opml_path: &str, list_path: &str) -> Vec<Subscription> {
    let subscriptions = load_opml(opml_path);
    if !subscriptions.is_empty() {
        return subscriptions;
    }

    load_plain_list(list_path)
}

fn load_opml(path: &str) -> Vec<Subscription> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Vec::new(),
    };

    match OPML::from_str(&content) {
        Ok(opml) => collect_outlines(&opml.body.outlines),
        Err(e) => {
            eprintln!("Error parsing {}: {}", path, e);
            Vec::new()
        }
    }
}

/// Recursively extract subscriptions from OPML outlines
fn collect_outlines(outlines: &[Outline]) -> Vec<Subscription> {
    let mut subscriptions = Vec::new();

    for outline in outlines {
        if let Some(url) = &outline.xml_url {
            if !url.is_empty() {
                subscriptions.push(Subscription::new(url).with_context(outline_context(outline)));
            }
        }

        subscriptions.extend(collect_outlines(&outline.outlines));
    }

    subscriptions
}

/// Context fallback chain: `description` attribute, then `text`.
fn outline_context(outline: &Outline) -> String {
    match &outline.description {
        Some(description) if !description.is_empty() => description.clone(),
        _ => outline.text.clone(),
    }
}

fn load_plain_list(path: &str) -> Vec<Subscription> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Vec::new(),
    };

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Subscription::new)
        .collect()
}
