use std::fmt;

/// Color-space name attached to a session.
///
/// Bounded-length: at most [`ColorSpace::MAX_LEN`] bytes are kept, truncating
/// on a `char` boundary so the stored name is always valid UTF-8. An empty
/// name normalizes to `"sRGB"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSpace(String);

impl ColorSpace {
    /// Maximum stored length in bytes.
    pub const MAX_LEN: usize = 63;

    pub fn new(name: &str) -> Self {
        if name.is_empty() {
            return Self("sRGB".to_owned());
        }

        let mut end = name.len().min(Self::MAX_LEN);
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        Self(name[..end].to_owned())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ColorSpace {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_defaults_to_srgb() {
        assert_eq!(ColorSpace::new("").as_str(), "sRGB");
        assert_eq!(ColorSpace::default().as_str(), "sRGB");
    }

    #[test]
    fn short_name_kept_verbatim() {
        assert_eq!(ColorSpace::new("DisplayP3").as_str(), "DisplayP3");
    }

    #[test]
    fn exactly_max_len_kept() {
        let name = "x".repeat(ColorSpace::MAX_LEN);
        assert_eq!(ColorSpace::new(&name).as_str(), name);
    }

    #[test]
    fn over_max_len_truncated() {
        let name = "x".repeat(ColorSpace::MAX_LEN + 10);
        let cs = ColorSpace::new(&name);
        assert_eq!(cs.as_str().len(), ColorSpace::MAX_LEN);
        assert_eq!(cs.as_str(), &name[..ColorSpace::MAX_LEN]);
    }

    #[test]
    fn truncation_respects_char_boundary() {
        // 'é' is two bytes; 32 of them put a boundary mid-char at byte 63.
        let name = "é".repeat(32);
        let cs = ColorSpace::new(&name);
        assert_eq!(cs.as_str().len(), 62);
        assert_eq!(cs.as_str(), "é".repeat(31));
    }
}
