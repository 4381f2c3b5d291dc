use argmap::Flags;
use colored::{ColoredString, Colorize};

pub fn term_width() -> usize {
    term_size::dimensions().map_or(80, |(w, _)| w)
}

/// Flags that read as set are green, the rest dimmed
pub fn colorize_flag_name(name: &str, set: bool) -> ColoredString {
    if set {
        name.green().bold()
    } else {
        name.dimmed()
    }
}

/// Cuts `value` to at most `width` characters, marking the cut with `...`
pub fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let kept: String = value.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// One `name = "value" (bool, int)` line per flag, sorted by name
pub fn format_flags(flags: &Flags, term_width: usize) -> Vec<String> {
    let mut names: Vec<&String> = flags.iter().map(|(name, _)| name).collect();
    names.sort();

    let name_width = names.iter().map(|name| name.len()).max().unwrap_or(0);
    let value_width = term_width.saturating_sub(name_width + 24).max(8);

    names
        .into_iter()
        .map(|name| {
            let set = flags.get_bool(name, false);
            // Pad before coloring so escape codes don't eat the width.
            let padded = format!("{name:<name_width$}");
            format!(
                "{} = {:?} ({}, {})",
                colorize_flag_name(&padded, set),
                truncate(&flags.get_str(name, ""), value_width),
                set,
                flags.get_int(name, 0),
            )
        })
        .collect()
}
