//! Scalar encoding: style selection, quoting, and escaping.

use yamlet_ast::{Scalar, ScalarCodec};

/// Rendering style for a string scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarStyle {
    /// Bare text, chosen when nothing would misread.
    Plain,
    /// Single quotes, with `''` escaping the quote itself.
    SingleQuoted,
    /// Double quotes with backslash escapes.
    DoubleQuoted,
}

/// The default scalar codec.
///
/// Strings are quoted exactly when bare text would be misread (empty
/// text, keyword and number look-alikes, indicator characters, or
/// surrounding whitespace), preferring single quotes and falling back
/// to double quotes when the text itself contains single quotes or
/// control characters. Other primitives render canonically.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec {
    forced: Option<ScalarStyle>,
}

impl YamlCodec {
    /// Create a codec with automatic style detection.
    pub fn new() -> Self {
        YamlCodec::default()
    }

    /// Create a codec that encodes every string with a fixed style
    /// instead of detecting one.
    pub fn with_style(style: ScalarStyle) -> Self {
        YamlCodec {
            forced: Some(style),
        }
    }

    fn encode_str(&self, text: &str) -> String {
        let style = self.forced.unwrap_or_else(|| detect_style(text));
        match style {
            ScalarStyle::Plain => text.to_string(),
            ScalarStyle::SingleQuoted => single_quoted(text),
            ScalarStyle::DoubleQuoted => double_quoted(text),
        }
    }
}

impl ScalarCodec for YamlCodec {
    fn encode(&self, scalar: &Scalar) -> String {
        match scalar {
            Scalar::Str(s) => self.encode_str(s),
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(x) => format_float(*x),
            Scalar::Bool(true) => "true".to_string(),
            Scalar::Bool(false) => "false".to_string(),
            Scalar::Null => "null".to_string(),
        }
    }

    fn encode_key(&self, key: &str) -> String {
        self.encode_str(key)
    }
}

/// Integral floats keep one decimal so they read back as floats.
fn format_float(x: f64) -> String {
    if x.is_finite() && x.fract() == 0.0 {
        format!("{x:.1}")
    } else {
        x.to_string()
    }
}

fn detect_style(text: &str) -> ScalarStyle {
    if !needs_quoting(text) {
        ScalarStyle::Plain
    } else if text.contains('\'') || text.chars().any(char::is_control) {
        ScalarStyle::DoubleQuoted
    } else {
        ScalarStyle::SingleQuoted
    }
}

/// Check if bare text would be misread as something other than the
/// string it is.
fn needs_quoting(text: &str) -> bool {
    if text.is_empty() {
        return true;
    }

    // Keywords that would be misread as booleans or null
    let lowered = text.to_lowercase();
    if matches!(
        lowered.as_str(),
        "true" | "false" | "yes" | "no" | "on" | "off" | "null" | "~"
    ) {
        return true;
    }

    // Number look-alikes stay strings only when quoted
    if text.parse::<i64>().is_ok() || text.parse::<f64>().is_ok() {
        return true;
    }

    if text
        .chars()
        .any(|c| matches!(c, ':' | '#' | '&' | '*' | '!' | '|' | '>' | '\'' | '"' | '%' | '@' | '`') || c.is_control())
    {
        return true;
    }

    if let Some(first) = text.chars().next() {
        if matches!(first, '-' | '?' | '[' | ']' | '{' | '}' | ',') {
            return true;
        }
    }

    // Surrounding whitespace would be swallowed by a bare read
    text != text.trim()
}

fn single_quoted(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

fn double_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x08' => out.push_str("\\b"),
            '\x0c' => out.push_str("\\f"),
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
