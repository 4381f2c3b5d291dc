/// Marker every canonical flag name starts with
pub const MARKER: char = '-';

const NEGATION_PREFIX: &str = "no";

/// A single flag token, normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Canonical name, including the leading marker
    pub name: String,
    /// Text after the first `=`, or empty for a bare flag
    pub value: String,
}

impl Token {
    /// Classifies a raw argument.
    ///
    /// Returns `None` for anything that is not a flag: tokens without a
    /// leading dash and tokens whose name is empty once the dashes are gone.
    pub fn parse(raw: &str) -> Option<Self> {
        if !raw.starts_with(MARKER) {
            return None;
        }

        let body = raw.trim_start_matches(MARKER);
        let (name, value) = match body.split_once('=') {
            Some((name, value)) => (name, value),
            None => (body, ""),
        };

        if name.is_empty() {
            return None;
        }

        Some(Self {
            name: format!("{MARKER}{name}"),
            value: value.to_string(),
        })
    }

    /// Base name this token negates, if it is a `-noX` form
    pub fn negated(&self) -> Option<String> {
        negated_name(&self.name)
    }
}

/// Collapses leading dashes to a single marker, adding one if missing.
pub fn canonical_name(name: &str) -> String {
    format!("{MARKER}{}", name.trim_start_matches(MARKER))
}

/// `-noX` -> `-X`. A lone `-no` negates nothing.
pub fn negated_name(name: &str) -> Option<String> {
    name.strip_prefix(MARKER)?
        .strip_prefix(NEGATION_PREFIX)
        .filter(|base| !base.is_empty())
        .map(|base| format!("{MARKER}{base}"))
}

/// Only a literal `0` is false. Empty means set.
pub fn is_truthy(value: &str) -> bool {
    value != "0"
}
