use crate::InfraError;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use sanepath_core::{sanitize, SanitizePolicy};
use tracing::{debug, warn};

/// Place an untrusted relative path under `root`.
///
/// The path is sanitized with everything that could climb out of `root`
/// switched off: no `..`, no drive letter, no UNC or inactivation prefix.
/// Only the escape character and flavor of `policy` are used. Every
/// resulting part must still be a single plain name on the host, otherwise
/// the path is rejected.
pub fn resolve_under(
    root: &Utf8Path,
    raw: &str,
    policy: &SanitizePolicy,
) -> Result<Utf8PathBuf, InfraError> {
    if let Some(reason) = policy.flavor.escape_char_problem(policy.escape_char) {
        return Err(InfraError::UnusableEscapeChar(policy.escape_char, reason));
    }

    let confined = confined_policy(policy);
    let sanitized = sanitize(raw, &confined);
    if sanitized.parts.is_empty() {
        return Err(InfraError::UnsafePath(raw.to_string()));
    }

    let mut out = root.to_path_buf();
    for part in &sanitized.parts {
        if !is_plain_name(part) {
            warn!("Rejecting '{}': part '{}' is not a plain name", raw, part);
            return Err(InfraError::UnsafePath(raw.to_string()));
        }
        out.push(part);
    }
    if sanitized.value != raw {
        debug!("Resolved '{}' as '{}'", raw, out);
    }
    Ok(out)
}

fn confined_policy(policy: &SanitizePolicy) -> SanitizePolicy {
    SanitizePolicy::ordering(policy.flavor)
        .with_escape_char(policy.escape_char)
        .with_drive_letter(false)
}

// Host path rules may differ from the sanitizing flavor.
fn is_plain_name(part: &str) -> bool {
    let mut components = Utf8Path::new(part).components();
    matches!(
        (components.next(), components.next()),
        (Some(Utf8Component::Normal(name)), None) if name == part
    )
}
