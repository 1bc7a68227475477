//! Platform capability strategy
//!
//! The host platform is resolved once into [`PlatformCapabilities`]; the rest of
//! the picker only ever looks at the capability descriptor.

use super::EmojiRecord;

/// Short names that are never shown, on any platform
pub const DENYLIST: [&str; 3] = ["white_frowning_face", "keycap_star", "eject"];

/// Host platform the picker is embedded in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Android, with its OS API level
    Android { api_level: u32 },
    Ios,
    /// Web targets, whose list primitive cannot jump to an offset
    Web,
    Other,
}

/// How much of the emoji history the platform's fonts can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphSupport {
    /// Every dataset entry renders
    Full,
    /// Support depends on the emoji version and the OS version
    Tiered { os_version: u32 },
}

/// What the picker may rely on for the current platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformCapabilities {
    pub glyph_support: GlyphSupport,
    /// Whether shortcut taps may request a scroll on the host list
    pub shortcuts_enabled: bool,
}

impl Default for PlatformCapabilities {
    fn default() -> Self {
        Platform::Other.capabilities()
    }
}

impl Platform {
    pub fn capabilities(self) -> PlatformCapabilities {
        match self {
            Platform::Android { api_level } => PlatformCapabilities {
                glyph_support: GlyphSupport::Tiered {
                    os_version: api_level,
                },
                shortcuts_enabled: true,
            },
            Platform::Web => PlatformCapabilities {
                glyph_support: GlyphSupport::Full,
                shortcuts_enabled: false,
            },
            Platform::Ios | Platform::Other => PlatformCapabilities {
                glyph_support: GlyphSupport::Full,
                shortcuts_enabled: true,
            },
        }
    }
}

impl GlyphSupport {
    /// Whether an emoji introduced in `added_in` can be drawn
    ///
    /// | added_in     | required OS version |
    /// |--------------|---------------------|
    /// | non-numeric  | none                |
    /// | < 2          | none                |
    /// | == 2         | 23                  |
    /// | <= 4         | 24                  |
    /// | <= 5         | 26                  |
    /// | <= 11        | 28                  |
    /// | > 11         | 29                  |
    pub fn supports(self, added_in: &str) -> bool {
        let os_version = match self {
            GlyphSupport::Full => return true,
            GlyphSupport::Tiered { os_version } => os_version,
        };

        let Some(added_in) = parse_added_in(added_in) else {
            return true;
        };

        if added_in < 2.0 {
            true
        } else if added_in == 2.0 {
            os_version >= 23
        } else if added_in <= 4.0 {
            os_version >= 24
        } else if added_in <= 5.0 {
            os_version >= 26
        } else if added_in <= 11.0 {
            os_version >= 28
        } else {
            os_version >= 29
        }
    }
}

/// Parse the numeric prefix of a version string (`"12.1"`, `"6.0"`, `"2"`)
///
/// Lenient float parse: leading whitespace is skipped, then the longest prefix
/// of the form `[+-](Infinity | digits[.digits][e[+-]digits])` is read and
/// anything after it ignored. Returns `None` when there is no such prefix.
pub fn parse_added_in(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if text[end..].starts_with("Infinity") {
        let value = if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return Some(value);
    }

    let int_digits = digits_from(end);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok()
}

pub fn is_denylisted(short_name: &str) -> bool {
    DENYLIST.contains(&short_name)
}

/// Keep only the records the platform can draw, preserving order
pub fn filter_by_capability<T: AsRef<EmojiRecord>>(records: Vec<T>, support: GlyphSupport) -> Vec<T> {
    if support == GlyphSupport::Full {
        return records;
    }
    records
        .into_iter()
        .filter(|record| support.supports(&record.as_ref().added_in))
        .collect()
}
