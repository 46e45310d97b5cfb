//! Path sanitization.
//!
//! A raw path is classified by its prefix, split into segments, filtered for
//! navigation tokens, escaped segment by segment and joined back together.
//! Nothing here touches the filesystem and nothing here fails: hostile input
//! is neutralised, never rejected.

use crate::path_utils::{
    fold_width, is_reserved_name, starts_with_prefix, PathFlavor, CURRENT_DIR,
    INACTIVATION_PREFIX, PARENT_DIR, UNC_PREFIX,
};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Prefix style of a raw path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    #[default]
    Normal,
    /// `\\server\share\...`
    Unc,
    /// `\\?\...`
    Inactivation,
}

/// Rules applied while sanitizing.
///
/// `allow_inactivation` overrides the navigation and UNC flags: when it is
/// set, `.` and `..` are always removed and no UNC prefix is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizePolicy {
    pub escape_char: char,
    pub allow_drive_letter: bool,
    pub allow_current_directory: bool,
    pub allow_parent_directory: bool,
    pub allow_inactivation: bool,
    pub allow_unc: bool,
    pub flavor: PathFlavor,
}

impl Default for SanitizePolicy {
    fn default() -> Self {
        Self {
            escape_char: '_',
            allow_drive_letter: true,
            allow_current_directory: true,
            allow_parent_directory: true,
            allow_inactivation: false,
            allow_unc: true,
            flavor: PathFlavor::native(),
        }
    }
}

impl SanitizePolicy {
    /// Default policy for a given flavor.
    pub fn for_flavor(flavor: PathFlavor) -> Self {
        Self {
            flavor,
            ..Self::default()
        }
    }

    /// Policy used to split paths for ordering: navigation tokens and
    /// prefixes are dropped so only meaningful segments remain.
    pub fn ordering(flavor: PathFlavor) -> Self {
        Self {
            escape_char: '_',
            allow_drive_letter: true,
            allow_current_directory: false,
            allow_parent_directory: false,
            allow_inactivation: false,
            allow_unc: false,
            flavor,
        }
    }

    pub fn with_escape_char(mut self, c: char) -> Self {
        self.escape_char = c;
        self
    }

    pub fn with_drive_letter(mut self, allow: bool) -> Self {
        self.allow_drive_letter = allow;
        self
    }

    pub fn with_current_directory(mut self, allow: bool) -> Self {
        self.allow_current_directory = allow;
        self
    }

    pub fn with_parent_directory(mut self, allow: bool) -> Self {
        self.allow_parent_directory = allow;
        self
    }

    pub fn with_inactivation(mut self, allow: bool) -> Self {
        self.allow_inactivation = allow;
        self
    }

    pub fn with_unc(mut self, allow: bool) -> Self {
        self.allow_unc = allow;
        self
    }

    pub fn with_flavor(mut self, flavor: PathFlavor) -> Self {
        self.flavor = flavor;
        self
    }

    pub fn keeps_current_directory(&self) -> bool {
        self.allow_current_directory && !self.allow_inactivation
    }

    pub fn keeps_parent_directory(&self) -> bool {
        self.allow_parent_directory && !self.allow_inactivation
    }

    pub fn keeps_unc(&self) -> bool {
        self.allow_unc && !self.allow_inactivation
    }
}

/// Outcome of sanitizing one raw path.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SanitizedPath {
    pub kind: PathKind,
    pub parts: Vec<String>,
    pub value: String,
}

impl std::fmt::Display for SanitizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// A policy bundled with the operations that apply it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathSanitizer {
    policy: SanitizePolicy,
}

impl PathSanitizer {
    pub fn new(policy: SanitizePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &SanitizePolicy {
        &self.policy
    }

    pub fn sanitize(&self, raw: &str) -> SanitizedPath {
        sanitize(raw, &self.policy)
    }

    /// `None` is treated exactly like an empty path.
    pub fn sanitize_opt(&self, raw: Option<&str>) -> SanitizedPath {
        sanitize_opt(raw, &self.policy)
    }

    pub fn split(&self, raw: &str) -> Vec<String> {
        split(raw, &self.policy)
    }

    pub fn file_name(&self, name: &str) -> Option<String> {
        sanitize_file_name(name, &self.policy)
    }
}

/// Work out which prefix style `raw` uses.
///
/// Matching ignores case and character width, and any separator stands in
/// for a backslash, so `//?/C:` and `\\？\C:` are both inactivated paths.
pub fn classify(raw: &str, flavor: PathFlavor) -> PathKind {
    if raw.is_empty() || !flavor.has_prefixes() {
        PathKind::Normal
    } else if starts_with_prefix(raw, INACTIVATION_PREFIX, flavor) {
        PathKind::Inactivation
    } else if starts_with_prefix(raw, UNC_PREFIX, flavor) {
        PathKind::Unc
    } else {
        PathKind::Normal
    }
}

pub fn sanitize(raw: &str, policy: &SanitizePolicy) -> SanitizedPath {
    let kind = classify(raw, policy.flavor);
    let parts = split_segments(raw, kind, policy);
    let value = join(kind, &parts, policy);

    if value != raw {
        trace!(raw, value = %value, ?kind, "path rewritten");
    }

    SanitizedPath { kind, parts, value }
}

pub fn sanitize_opt(raw: Option<&str>, policy: &SanitizePolicy) -> SanitizedPath {
    sanitize(raw.unwrap_or_default(), policy)
}

/// Split `raw` into its escaped, surviving segments.
pub fn split(raw: &str, policy: &SanitizePolicy) -> Vec<String> {
    split_segments(raw, classify(raw, policy.flavor), policy)
}

fn split_segments(raw: &str, kind: PathKind, policy: &SanitizePolicy) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }

    raw.split(|c: char| policy.flavor.is_separator(c))
        // A leading separator run (including the `\\` of a prefix) only
        // produces empty segments.
        .skip_while(|seg| seg.is_empty())
        .enumerate()
        .filter(|(index, seg)| keep_segment(kind, *index, seg, policy))
        .map(|(_, seg)| seg)
        .enumerate()
        .filter_map(|(index, seg)| escape_segment(index, seg, policy))
        .collect()
}

/// Sanitize a single name, escaping separators instead of splitting on them.
///
/// Returns `None` when nothing usable is left: an empty name, a bare `.` or
/// `..`, or one made only of trailing dots and spaces.
pub fn sanitize_file_name(name: &str, policy: &SanitizePolicy) -> Option<String> {
    if name.is_empty() || name == CURRENT_DIR || name == PARENT_DIR {
        return None;
    }
    // Drive letters are a property of whole paths, never of a single name.
    let policy = policy.with_drive_letter(false);
    escape_segment(0, name, &policy).filter(|n| n != CURRENT_DIR && n != PARENT_DIR)
}

fn keep_segment(kind: PathKind, index: usize, seg: &str, policy: &SanitizePolicy) -> bool {
    if seg.is_empty() {
        return false;
    }
    // `\\?\` tokenizes into a leading `?` segment, however it was spelled.
    if kind == PathKind::Inactivation && index == 0 && is_question_mark(seg) {
        return false;
    }
    if seg == CURRENT_DIR && !policy.keeps_current_directory() {
        trace!("dropping current-directory segment");
        return false;
    }
    if seg == PARENT_DIR && !policy.keeps_parent_directory() {
        trace!("dropping parent-directory segment");
        return false;
    }
    true
}

fn escape_segment(index: usize, seg: &str, policy: &SanitizePolicy) -> Option<String> {
    if index == 0 && policy.allow_drive_letter && is_drive_letter(seg) {
        return Some(seg.to_string());
    }

    let escaped: String = seg
        .chars()
        .map(|c| {
            if policy.flavor.is_invalid_char(c) {
                policy.escape_char
            } else {
                c
            }
        })
        .collect();

    let mut name = if escaped == CURRENT_DIR || escaped == PARENT_DIR {
        escaped
    } else {
        escaped.trim_end_matches([' ', '.']).to_string()
    };

    if name.is_empty() {
        trace!(segment = seg, "segment trimmed away");
        return None;
    }

    if is_reserved_name(&name) {
        trace!(segment = %name, "escaping reserved device name");
        name.insert(0, policy.escape_char);
    }

    Some(name)
}

fn is_question_mark(seg: &str) -> bool {
    let mut chars = seg.chars().map(fold_width);
    matches!((chars.next(), chars.next()), (Some('?'), None))
}

fn is_drive_letter(seg: &str) -> bool {
    let mut chars = seg.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(letter), Some(':'), None) if letter.is_ascii_alphabetic()
    )
}

fn join(kind: PathKind, parts: &[String], policy: &SanitizePolicy) -> String {
    let prefix = match kind {
        PathKind::Inactivation if policy.allow_inactivation => INACTIVATION_PREFIX,
        PathKind::Unc if policy.keeps_unc() => UNC_PREFIX,
        _ => "",
    };

    let sep = policy.flavor.separator().to_string();
    format!("{prefix}{}", parts.join(&sep))
}
