//! MVP type checker CLI
//!
//! Types the built-in example program and prints the result.

use mvpc::{check_example, init_tracing, Render, RenderOptions};

fn main() {
    init_tracing();

    let mut options = RenderOptions::default();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--provenance" | "-p" => options.provenance = true,
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("error: unknown option '{other}'");
                print_usage();
                std::process::exit(2);
            }
        }
    }

    let report = match check_example() {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    print!("{}", Render::new(&report, options));
}

fn print_usage() {
    println!("Usage: mvpc [options]");
    println!();
    println!("Types the example program and prints each function type and");
    println!("the errors of each unification.");
    println!();
    println!("Options:");
    println!("  -p, --provenance    Show where error operands were derived from");
    println!("  -h, --help          Show this message");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=mvp_types=trace) for engine tracing.");
}
