mod styling;
mod tables;

pub use styling::{bright_green, bright_red, cyan, dim};
pub use tables::{databases_table, references_table, services_table};

/// Prints the banner to stderr.
pub fn print_banner() {
    eprintln!(
        r"
{} {}
  {}
",
        styling::magenta_bold("🫚 ginger-shared"),
        dim(env!("CARGO_PKG_VERSION")),
        dim("Project descriptors, versions and claims")
    );
}
