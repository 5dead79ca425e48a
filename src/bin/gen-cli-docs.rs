use clap::Parser;
use clap_markdown::help_markdown;

/// Print a greeting to standard output
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Name to greet (defaults to "World"); extra arguments are ignored
    #[arg(
        value_name = "NAME",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,
}

fn main() {
    // Print header
    println!("# greet CLI Reference");
    println!();
    println!("This page contains the auto-generated reference documentation for the `greet` command-line interface.");
    println!();

    // Generate and print the markdown using the type parameter
    println!("{}", help_markdown::<Cli>());
}
