use console::style;

use crate::cli::WorkflowResult;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print the end of run summary
pub fn display_summary(result: &WorkflowResult) {
    println!("\n{}", style("Catalog entry:").bold());
    println!("  Tag:    {}", style(&result.tag).green());
    println!("  Branch: {}", result.branch);
    println!("  Build:  {}", result.build_dir);

    if result.committed {
        display_success(&format!("Published catalog entry {}", result.build_dir));
    } else {
        display_status("Catalog entry written locally, nothing pushed");
    }
}
