//! List rules command implementation.

use umdp_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<36} {:<6} Description", "Name", "Scope");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<36} {:<6} {}",
            rule.name,
            match rule.scope {
                umdp_lint_core::RuleScope::Line => "line",
                umdp_lint_core::RuleScope::Unit => "unit",
            },
            rule.description
        );
    }

    println!("\nLine-scoped rules are meaningful over any subset of a file;");
    println!("unit-scoped rules judge the complete file.");
}
