use clap::Parser;
use minic::ast::{print_list, NodeList};
use minic::config::driver::DEFAULT_SAMPLE;
use minic::errors::AstResult;
use minic::samples::{find_sample, SAMPLES};
use minic::validate::validate_list;
use std::time::Instant;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Dump MiniC abstract syntax trees",
    long_about = "Dump MiniC abstract syntax trees.\n\
                 Builds one of the bundled sample trees through the node factory\n\
                 and prints it as an indented outline.\n\
                 \n\
                 Example usage:\n\
                 minic-ast --list                  # List bundled samples\n\
                 minic-ast factorial               # Print a sample tree\n\
                 minic-ast loops --level 1         # Start one level deep\n\
                 minic-ast main --validate         # Check the tree before printing\n\
                 minic-ast factorial --timing      # Show build and print timing"
)]
struct Cli {
    // Name of the sample tree to print
    sample: Option<String>,

    // List the bundled samples and exit
    #[arg(short, long)]
    list: bool,

    // Indentation level of the top-level nodes
    #[arg(long, default_value_t = 0)]
    level: usize,

    // Validate the tree before printing it
    #[arg(long)]
    validate: bool,

    // Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    // Show timing and node statistics
    #[arg(short, long)]
    timing: bool,
}

#[derive(Debug, Default)]
struct DumpStats {
    build_time: f64,
    validate_time: f64,
    print_time: f64,
    top_level: usize,
    node_count: usize,
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn list_samples() {
    println!("Available samples:");
    for sample in SAMPLES {
        println!("  {:<10} {}", sample.name, sample.description);
    }
}

fn count_nodes(list: &NodeList) -> usize {
    list.iter().map(|node| node.count()).sum()
}

fn dump(name: &str, args: &Cli) -> AstResult<DumpStats> {
    let mut stats = DumpStats::default();
    let sample = find_sample(name)?;

    let build_start = Instant::now();
    let tree = sample.build();
    stats.build_time = build_start.elapsed().as_secs_f64();
    stats.top_level = tree.len();
    stats.node_count = count_nodes(&tree);

    if args.verbose {
        println!("✓ Built sample '{}' in {:.6}s", sample.name, stats.build_time);
        println!("  {} top-level nodes, {} nodes total", stats.top_level, stats.node_count);
    }

    if args.validate {
        let validate_start = Instant::now();
        validate_list(&tree)?;
        stats.validate_time = validate_start.elapsed().as_secs_f64();
        if args.verbose {
            println!("✓ Validation passed in {:.6}s", stats.validate_time);
        }
    }

    let print_start = Instant::now();
    print_list(&tree, args.level)?;
    stats.print_time = print_start.elapsed().as_secs_f64();

    Ok(stats)
}

fn print_stats(stats: &DumpStats) {
    println!("\n Dump Statistics:");
    println!("  • Build:              {:.6}s", stats.build_time);
    println!("  • Validate:           {:.6}s", stats.validate_time);
    println!("  • Print:              {:.6}s", stats.print_time);
    println!("  • Top-level nodes:    {}", stats.top_level);
    println!("  • AST nodes:          {}", stats.node_count);
}

fn main() {
    let args = Cli::parse();

    if args.list {
        list_samples();
        return;
    }

    let name = args.sample.as_deref().unwrap_or(DEFAULT_SAMPLE);
    match dump(name, &args) {
        Ok(stats) => {
            if args.timing {
                print_stats(&stats);
            }
        }
        Err(e) => fatal(&format!("Dump failed: {}", e)),
    }
}
