use colored::Colorize;

/// Prints a section header such as `=== Dynamic dispatch ===`.
pub fn section(title: &str) {
    println!("{}", header(title));
}

/// Same as [`section`] but preceded by a blank line.
pub fn next_section(title: &str) {
    println!();
    section(title);
}

pub fn header(title: &str) -> String {
    format!("=== {title} ===").bold().cyan().to_string()
}

/// Prints every line of a step log returned by domain code.
pub fn print_lines<I, S>(lines: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        println!("{}", line.as_ref());
    }
}

/// Reports a recoverable error without aborting the demo.
pub fn report_error(err: &dyn std::error::Error) {
    eprintln!("{} {err}", "error:".red().bold());
}

pub fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_rounds_to_cents() {
        assert_eq!(money(1.49), "$1.49");
        assert_eq!(money(0.99 + 0.2 + 0.2 + 0.1), "$1.49");
        assert_eq!(money(2.0), "$2.00");
    }

    #[test]
    fn test_header_contains_title() {
        colored::control::set_override(false);
        assert_eq!(header("Adapter"), "=== Adapter ===");
        colored::control::unset_override();
    }
}
