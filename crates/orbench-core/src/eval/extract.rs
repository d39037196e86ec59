//! Objective value extraction from captured program output
//!
//! Candidate programs are asked to print only the final objective value,
//! but generated code often emits solver logs instead. Extraction is an
//! ordered chain of strategies, first success wins:
//!
//! 1. parse the last non-empty line as a number (the requested contract)
//! 2. scan the full output for labeled values in common solver phrasings

use once_cell::sync::Lazy;
use regex::Regex;

/// Labeled-value patterns in priority order, matching e.g.
/// `Optimal objective: 17.3` or `objVal 42`. Case-insensitive.
static LABELED_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        "Optimal objective",
        "Objective value",
        "Obj",
        "objval",
        "objVal",
    ]
    .iter()
    .map(|label| {
        Regex::new(&format!(r"(?i){label}[:\s]+([0-9.e+-]+)"))
            .expect("labeled pattern must compile")
    })
    .collect()
});

/// Recover a single numeric objective from raw stdout
pub fn extract_objective(output: &str) -> Option<f64> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(last_line) = trimmed.lines().next_back() {
        if let Ok(value) = last_line.trim().parse::<f64>() {
            return Some(value);
        }
    }

    for pattern in LABELED_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(trimmed) {
            // The numeric token class is loose; an unparseable capture
            // falls through to the next pattern.
            if let Ok(value) = captures[1].parse::<f64>() {
                return Some(value);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_line_number() {
        assert_eq!(extract_objective("setup done\n42.5\n"), Some(42.5));
    }

    #[test]
    fn test_last_line_only() {
        assert_eq!(extract_objective("-17"), Some(-17.0));
        assert_eq!(extract_objective("3.5e2"), Some(350.0));
    }

    #[test]
    fn test_labeled_pattern_when_last_line_is_not_numeric() {
        let output = "solver log...\nObjective value: 17.3\nDone";
        assert_eq!(extract_objective(output), Some(17.3));
    }

    #[test]
    fn test_pattern_priority() {
        let output = "Optimal objective: 1.5\nObjective value: 9.9\nfinished";
        assert_eq!(extract_objective(output), Some(1.5));
    }

    #[test]
    fn test_gurobi_style_objval() {
        let output = "Solved in 12 iterations\nobjVal: 250.0\nmodel disposed";
        assert_eq!(extract_objective(output), Some(250.0));
    }

    #[test]
    fn test_case_insensitive_label() {
        let output = "OPTIMAL OBJECTIVE  88\ndone";
        assert_eq!(extract_objective(output), Some(88.0));
    }

    #[test]
    fn test_no_number_anywhere() {
        assert_eq!(extract_objective("model is infeasible\naborting"), None);
    }

    #[test]
    fn test_empty_output() {
        assert_eq!(extract_objective(""), None);
        assert_eq!(extract_objective("  \n \n"), None);
    }

    #[test]
    fn test_trailing_blank_lines() {
        assert_eq!(extract_objective("12.0\n\n  \n"), Some(12.0));
    }
}
