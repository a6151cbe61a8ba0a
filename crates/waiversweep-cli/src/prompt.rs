//! Destructive-action confirmation gate.

use std::io::{self, BufRead, Write};

/// Phrase the operator must type to confirm deletion.
const CONFIRM_PHRASE: &str = "DELETE";

/// Whether `input` confirms the deletion.
///
/// Only the confirmation phrase counts, ignoring case and surrounding
/// whitespace; everything else cancels.
pub fn is_delete_confirmation(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(CONFIRM_PHRASE)
}

/// Interactively confirm deletion of `count` waivers.
///
/// Prints the warning banner and reads one line from stdin. EOF and
/// read failures cancel.
pub fn confirm_deletion(count: usize) -> bool {
    println!();
    println!("{}", "=".repeat(40));
    println!("WARNING: proceeding will permanently delete {count} waivers via the API.");
    println!("Ensure credentials and scope mappings are correct.");
    println!("{}", "=".repeat(40));
    print!("Type '{CONFIRM_PHRASE}' to confirm deletion, or anything else to cancel: ");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => false,
        Ok(_) => is_delete_confirmation(&input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_phrase_accepted() {
        assert!(is_delete_confirmation("DELETE"));
    }

    #[test]
    fn test_case_and_whitespace_ignored() {
        assert!(is_delete_confirmation(" delete \n"));
        assert!(is_delete_confirmation("Delete"));
    }

    #[test]
    fn test_everything_else_cancels() {
        assert!(!is_delete_confirmation(""));
        assert!(!is_delete_confirmation("yes"));
        assert!(!is_delete_confirmation("DELETE!"));
        assert!(!is_delete_confirmation("DELETE W1"));
    }
}
