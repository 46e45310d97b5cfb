use serde::{Deserialize, Serialize};

/// Segment that refers to the current directory.
pub const CURRENT_DIR: &str = ".";

/// Segment that refers to the parent directory.
pub const PARENT_DIR: &str = "..";

/// Prefix of a `\\server\share` path.
pub const UNC_PREFIX: &str = "\\\\";

/// Prefix that switches off the OS's own path normalization (`\\?\C:\...`).
pub const INACTIVATION_PREFIX: &str = "\\\\?\\";

/// Device names that can't be used as a file name, with or without extension.
/// Compared case-insensitively.
pub const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM0", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7",
    "COM8", "COM9", "LPT0", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

const WINDOWS_SEPARATORS: &[char] = &['\\', '/'];
const POSIX_SEPARATORS: &[char] = &['/'];

const WINDOWS_INVALID_CHARS: &[char] = &['"', '<', '>', '|', ':', '*', '?', '\\', '/'];

/// The path grammar a sanitizer or orderer works against.
///
/// Separators, the invalid-character set and the recognised prefixes all
/// come from here, so results don't depend on the host running the code
/// unless [`PathFlavor::native`] is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathFlavor {
    Windows,
    Posix,
}

impl Default for PathFlavor {
    fn default() -> Self {
        Self::native()
    }
}

impl PathFlavor {
    #[cfg(windows)]
    pub const fn native() -> Self {
        PathFlavor::Windows
    }

    #[cfg(not(windows))]
    pub const fn native() -> Self {
        PathFlavor::Posix
    }

    pub fn separators(self) -> &'static [char] {
        match self {
            PathFlavor::Windows => WINDOWS_SEPARATORS,
            PathFlavor::Posix => POSIX_SEPARATORS,
        }
    }

    /// Separator used when segments are joined back together.
    pub fn separator(self) -> char {
        match self {
            PathFlavor::Windows => '\\',
            PathFlavor::Posix => '/',
        }
    }

    pub fn is_separator(self, c: char) -> bool {
        self.separators().contains(&c)
    }

    /// Characters that may not appear inside a single path segment.
    ///
    /// Windows prefixes are matched width-insensitively, so the fullwidth
    /// forms of its invalid characters are invalid as well.
    pub fn is_invalid_char(self, c: char) -> bool {
        match self {
            PathFlavor::Windows => {
                let c = fold_width(c);
                c <= '\u{1f}' || WINDOWS_INVALID_CHARS.contains(&c)
            }
            PathFlavor::Posix => c == '\0' || c == '/',
        }
    }

    /// Why `c` can't replace invalid characters under this flavor, if it can't.
    ///
    /// A usable escape character survives sanitization unchanged and can't
    /// form a navigation segment on its own.
    pub fn escape_char_problem(self, c: char) -> Option<&'static str> {
        if self.is_separator(c) {
            Some("it is a path separator")
        } else if self.is_invalid_char(c) || c.is_control() {
            Some("it is not allowed in file names")
        } else if c == '.' || c == ' ' {
            Some("trailing dots and spaces are trimmed")
        } else {
            None
        }
    }

    /// Whether this flavor knows about UNC and inactivation prefixes at all.
    pub fn has_prefixes(self) -> bool {
        matches!(self, PathFlavor::Windows)
    }
}

impl std::fmt::Display for PathFlavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathFlavor::Windows => f.write_str("windows"),
            PathFlavor::Posix => f.write_str("posix"),
        }
    }
}

impl std::str::FromStr for PathFlavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" | "win" => Ok(PathFlavor::Windows),
            "posix" | "unix" => Ok(PathFlavor::Posix),
            "native" => Ok(PathFlavor::native()),
            other => Err(format!("unknown path flavor '{other}'")),
        }
    }
}

/// True when the part of `name` before its first `.` is a reserved device name.
pub fn is_reserved_name(name: &str) -> bool {
    let stem = name.split('.').next().unwrap_or(name);
    RESERVED_NAMES.iter().any(|r| r.eq_ignore_ascii_case(stem))
}

/// Split a file name into stem and extension.
///
/// The extension keeps its leading dot. A trailing dot yields an empty
/// extension with the dot dropped from the stem; a name without any dot is
/// all stem.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(dot) if dot + 1 == name.len() => (&name[..dot], ""),
        Some(dot) => (&name[..dot], &name[dot..]),
        None => (name, ""),
    }
}

/// Case- and width-insensitive `starts_with` for path prefixes.
///
/// Any separator of `flavor` in `haystack` matches a `\\` in `prefix`.
pub(crate) fn starts_with_prefix(haystack: &str, prefix: &str, flavor: PathFlavor) -> bool {
    let fold = |c: char| {
        let c = fold_width(c).to_ascii_lowercase();
        if flavor.is_separator(c) {
            '\\'
        } else {
            c
        }
    };
    let mut hay = haystack.chars().map(fold);
    prefix
        .chars()
        .map(fold)
        .all(|p| hay.next().is_some_and(|h| h == p))
}

/// Fullwidth forms fold onto their ASCII counterparts.
pub(crate) fn fold_width(c: char) -> char {
    match c {
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
        '\u{3000}' => ' ',
        _ => c,
    }
}
