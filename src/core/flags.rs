use std::{
    collections::{hash_map, HashMap},
    str::FromStr,
};

use tracing::{debug, trace};

use super::token::{canonical_name, is_truthy, Token};

/// Resolved command-line flags and their values
///
/// Built once from an argument vector and read-only afterwards. Keys are
/// canonical names (`-name`); negations are already folded into the base
/// flag's value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    values: HashMap<String, String>,
    occurrences: HashMap<String, Vec<String>>,
}

/// Represents errors that can occur during flag parsing
#[derive(Debug, thiserror::Error)]
pub enum FlagError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Flags {
    /// Parses an argument vector whose first element is the program name
    ///
    /// # Arguments
    /// * `args` - Program name followed by the raw arguments
    ///
    /// # Returns
    /// * `Result<Self, FlagError>` - Resolved flags, or `InvalidInput` when
    ///   `args` holds no program name
    pub fn parse<I, S>(args: I) -> Result<Self, FlagError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        let program = args.next().ok_or_else(|| {
            FlagError::InvalidInput("empty argument vector, expected a program name".to_string())
        })?;
        debug!(program = program.as_ref(), "parsing arguments");

        let mut values = HashMap::new();
        let mut occurrences: HashMap<String, Vec<String>> = HashMap::new();
        let mut negations = HashMap::new();

        for arg in args {
            let arg = arg.as_ref();
            let Some(token) = Token::parse(arg) else {
                trace!(arg, "ignoring non-flag argument");
                continue;
            };

            if let Some(base) = token.negated() {
                negations.insert(base, token.value.clone());
            }

            debug!(name = %token.name, value = %token.value, "flag");
            occurrences
                .entry(token.name.clone())
                .or_default()
                .push(token.value.clone());
            values.insert(token.name, token.value);
        }

        // Any literal occurrence of the base name beats its negations.
        let resolved: Vec<(String, String)> = negations
            .into_iter()
            .filter(|(base, _)| !values.contains_key(base))
            .map(|(base, negation)| {
                let value = if is_truthy(&negation) { "0" } else { "1" };
                debug!(name = %base, value, "resolved negation");
                (base, value.to_string())
            })
            .collect();
        values.extend(resolved);

        Ok(Self {
            values,
            occurrences,
        })
    }

    /// Boolean value of a flag, or `default` when it was never given
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        self.get(name).map_or(default, is_truthy)
    }

    /// String value of a flag. A bare flag yields `""`, not `default`.
    pub fn get_str(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or(default).to_string()
    }

    /// Integer value of a flag. Values that are not base-10 integers read as `0`.
    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        self.get(name)
            .map_or(default, |value| value.parse().unwrap_or(0))
    }

    /// Gets the raw value stored for a flag
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(&canonical_name(name)).map(String::as_str)
    }

    /// Every value given for a flag, in command-line order
    pub fn get_all(&self, name: &str) -> &[String] {
        self.occurrences
            .get(&canonical_name(name))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Checks if a flag is present
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(&canonical_name(name))
    }

    /// Iterates over resolved `(name, value)` pairs in no particular order
    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.values.iter()
    }

    /// Returns number of resolved flags
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Checks if there are no flags
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromStr for Flags {
    type Err = FlagError;

    /// Splits a whole command line, program name included, on whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.split_whitespace())
    }
}

impl<'a> IntoIterator for &'a Flags {
    type Item = (&'a String, &'a String);
    type IntoIter = hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(args: &[&str]) -> Flags {
        Flags::parse(std::iter::once("prog").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_empty_vector_is_invalid() {
        let result = Flags::parse(Vec::<String>::new());
        assert!(matches!(result, Err(FlagError::InvalidInput(_))));
    }

    #[test]
    fn test_program_name_only() {
        let flags = Flags::parse(["prog"]).unwrap();
        assert!(flags.is_empty());
        assert_eq!(flags.len(), 0);
    }

    #[test]
    fn test_program_name_is_not_a_flag() {
        let flags = Flags::parse(["-prog", "-a"]).unwrap();
        assert!(!flags.contains("-prog"));
        assert!(flags.contains("-a"));
    }

    #[test]
    fn test_positionals_ignored() {
        let flags = flags(&["value1", "-a", "value2", ""]);
        assert_eq!(flags.len(), 1);
        assert!(flags.contains("-a"));
    }

    #[test]
    fn test_negation_keeps_literal_name() {
        let flags = flags(&["-noBOLD"]);
        assert_eq!(flags.get("-noBOLD"), Some(""));
        assert_eq!(flags.get("-BOLD"), Some("0"));
        assert_eq!(flags.get_int("-BOLD", 7), 0);
    }

    #[test]
    fn test_falsy_negation_sets_base() {
        let flags = flags(&["-noBOLD=0"]);
        assert_eq!(flags.get("-BOLD"), Some("1"));
        assert!(flags.get_bool("-BOLD", false));
    }

    #[test]
    fn test_zero_lookalike_negation_is_truthy() {
        for arg in ["-noBOLD=00", "-noBOLD=-0", "-noBOLD=+0"] {
            let flags = flags(&[arg]);
            assert!(!flags.get_bool("-BOLD", false), "{arg}");
            assert!(!flags.get_bool("-BOLD", true), "{arg}");
        }
    }

    #[test]
    fn test_last_negation_decides() {
        assert!(flags(&["-noBOLD", "-noBOLD=0"]).get_bool("-BOLD", false));
        assert!(!flags(&["-noBOLD=0", "--noBOLD"]).get_bool("-BOLD", true));
    }

    #[test]
    fn test_positive_value_survives_negation() {
        let flags = flags(&["-noBOLD", "-BOLD=eleven", "-noBOLD=1"]);
        assert_eq!(flags.get_str("-BOLD", ""), "eleven");
        assert!(flags.get_bool("-BOLD", false));
    }

    #[test]
    fn test_double_negation_literal_wins() {
        let flags = flags(&["-noBOLD=0", "-nonoBOLD"]);
        assert_eq!(flags.get("-noBOLD"), Some("0"));
        assert!(flags.get_bool("-BOLD", false));
    }

    #[test]
    fn test_repeated_flag() {
        let flags = flags(&["-add=1", "--add=2", "-add"]);
        assert_eq!(flags.get_str("-add", "x"), "");
        assert_eq!(flags.get_all("-add"), ["1", "2", ""]);
        assert!(flags.get_all("-missing").is_empty());
    }

    #[test]
    fn test_negation_not_in_occurrences() {
        let flags = flags(&["-noBOLD"]);
        assert!(flags.get_all("-BOLD").is_empty());
        assert_eq!(flags.get_all("-noBOLD"), [""]);
    }

    #[test]
    fn test_lookup_normalization() {
        let flags = flags(&["--BOLD=1"]);
        assert!(flags.contains("BOLD"));
        assert!(flags.contains("-BOLD"));
        assert!(flags.contains("--BOLD"));
        assert!(!flags.contains("-bold"));
    }

    #[test]
    fn test_from_str() {
        let flags: Flags = "prog -a -b=2  c".parse().unwrap();
        assert!(flags.contains("-a"));
        assert_eq!(flags.get_int("-b", 0), 2);
        assert_eq!(flags.len(), 2);

        assert!(matches!("   ".parse::<Flags>(), Err(FlagError::InvalidInput(_))));
    }

    #[test]
    fn test_iter() {
        let flags = flags(&["-a=1", "-b"]);
        let mut pairs: Vec<_> = flags.iter().collect();
        pairs.sort();
        assert_eq!(
            pairs,
            [
                (&"-a".to_string(), &"1".to_string()),
                (&"-b".to_string(), &String::new()),
            ]
        );
        assert_eq!((&flags).into_iter().count(), 2);
    }
}
