/// CSS font shorthand parsing (`"bold 24px Arial"`, `"italic 12pt 'Fira Sans', serif"`).

use super::config;
use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub size_px: f64,
    pub family: String,
    pub bold: bool,
    pub italic: bool,
}

impl FontSpec {
    /// Lenient parse: never fails, missing parts take the configured defaults.
    ///
    /// The size is the first `<number>px` or `<number>pt` token wherever it
    /// sits in the string; without one, a bare leading number is accepted.
    pub fn parse(font: &str) -> Self {
        static SIZE_RE: OnceLock<Regex> = OnceLock::new();
        static LEADING_RE: OnceLock<Regex> = OnceLock::new();
        let size_re = SIZE_RE.get_or_init(|| {
            Regex::new(r"(?i)(\d+(?:\.\d+)?|\.\d+)(px|pt)(?:\s*/\s*\S+)?").unwrap()
        });
        let leading_re = LEADING_RE.get_or_init(|| Regex::new(r"^\s*(\d+(?:\.\d+)?)").unwrap());

        let (size_px, modifiers, family) = match size_re.captures(font) {
            Some(caps) => {
                let whole = caps.get(0).map_or(0..0, |m| m.range());
                let value: f64 = caps[1].parse().unwrap_or(config::DEFAULT_FONT_SIZE);
                let size = if caps[2].eq_ignore_ascii_case("pt") {
                    value * 4.0 / 3.0
                } else {
                    value
                };
                (size, &font[..whole.start], &font[whole.end..])
            }
            None => match leading_re.captures(font) {
                Some(caps) => {
                    let end = caps.get(0).map_or(0, |m| m.end());
                    let size = caps[1].parse().unwrap_or(config::DEFAULT_FONT_SIZE);
                    (size, "", &font[end..])
                }
                None => (config::DEFAULT_FONT_SIZE, "", font),
            },
        };

        let mut bold = false;
        let mut italic = false;
        for token in modifiers.split_whitespace() {
            match token.to_ascii_lowercase().as_str() {
                "bold" | "bolder" => bold = true,
                "italic" | "oblique" => italic = true,
                weight => {
                    if let Ok(w) = weight.parse::<u32>() {
                        bold = w >= 600;
                    }
                }
            }
        }

        Self {
            size_px,
            family: Self::first_family(family),
            bold,
            italic,
        }
    }

    fn first_family(list: &str) -> String {
        let first = list
            .split(',')
            .next()
            .unwrap_or("")
            .trim()
            .trim_matches(|c| c == '"' || c == '\'');
        if first.is_empty() {
            config::DEFAULT_FONT_FAMILY.to_string()
        } else {
            first.to_string()
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::parse(config::DEFAULT_FONT)
    }
}

/// Pixel size of a CSS font string; used as the extent of vertical text gradients.
pub fn font_pixel_size(font: &str) -> f64 {
    FontSpec::parse(font).size_px
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_pixel_font() {
        let f = FontSpec::parse("16px Arial");
        assert_eq!(f.size_px, 16.0);
        assert_eq!(f.family, "Arial");
        assert!(!f.bold && !f.italic);
    }

    #[test]
    fn test_size_after_modifiers() {
        let f = FontSpec::parse("italic bold 24px 'Fira Sans', serif");
        assert_eq!(f.size_px, 24.0);
        assert_eq!(f.family, "Fira Sans");
        assert!(f.bold);
        assert!(f.italic);
        assert_eq!(font_pixel_size("bold 24px Arial"), 24.0);
    }

    #[test]
    fn test_numeric_weight_and_points() {
        let f = FontSpec::parse("700 12pt Georgia");
        assert!(f.bold);
        assert_eq!(f.size_px, 16.0);
        assert!(!FontSpec::parse("300 12px Georgia").bold);
    }

    #[test]
    fn test_line_height_is_ignored() {
        let f = FontSpec::parse("20px/1.5 monospace");
        assert_eq!(f.size_px, 20.0);
        assert_eq!(f.family, "monospace");
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(font_pixel_size("30 Arial"), 30.0);
        let f = FontSpec::parse("Helvetica");
        assert_eq!(f.size_px, config::DEFAULT_FONT_SIZE);
        assert_eq!(f.family, "Helvetica");
        assert_eq!(FontSpec::parse("").family, config::DEFAULT_FONT_FAMILY);
    }
}
