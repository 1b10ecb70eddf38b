use clap::{Parser, Subcommand};
use lightningcss::printer::PrinterOptions;
use lightningcss::stylesheet::{ParserOptions, StyleSheet};
use std::path::Path;

#[derive(Parser)]
#[command(name = "stylemix")]
#[command(about = "Stylemix — CSS reset and preset class generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the full stylesheet: reset plus every preset class
    Build {
        /// Output file, stdout if omitted
        #[arg(short, long)]
        out: Option<String>,

        /// Skip minification
        #[arg(long)]
        pretty: bool,
    },

    /// Generate the reset sheet alone
    Normalize {
        /// Output file, stdout if omitted
        #[arg(short, long)]
        out: Option<String>,

        /// Skip minification
        #[arg(long)]
        pretty: bool,
    },

    /// Print the rules of a single preset class
    Class {
        /// Preset class name, e.g. fhcc
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Build { out, pretty } => cmd_build(out.as_deref(), pretty),
        Command::Normalize { out, pretty } => cmd_normalize(out.as_deref(), pretty),
        Command::Class { name } => cmd_class(&name),
    }
}

// Round-trips the sheet through the CSS parser so the output is known
// to be syntactically valid, not just concatenated text.
fn reserialize(css: &str, minify: bool) -> String {
    let sheet = match StyleSheet::parse(css, ParserOptions::default()) {
        Ok(sheet) => sheet,
        Err(e) => {
            eprintln!("Parse error: {e}");
            std::process::exit(1);
        }
    };

    let options = PrinterOptions {
        minify,
        ..PrinterOptions::default()
    };
    match sheet.to_css(options) {
        Ok(output) => output.code,
        Err(e) => {
            eprintln!("Serialize error: {e}");
            std::process::exit(1);
        }
    }
}

fn write_output(css: &str, out: Option<&str>) {
    let Some(path) = out else {
        println!("{css}");
        return;
    };

    if let Some(dir) = Path::new(path).parent() {
        if !dir.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(dir) {
                eprintln!("Error creating {}: {e}", dir.display());
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = std::fs::write(path, css) {
        eprintln!("Error writing {path}: {e}");
        std::process::exit(1);
    }

    eprintln!("Wrote: {path}");
}

fn cmd_build(out: Option<&str>, pretty: bool) {
    let css = reserialize(&stylemix_core::classes::stylesheet(), !pretty);
    write_output(&css, out);
}

fn cmd_normalize(out: Option<&str>, pretty: bool) {
    let css = reserialize(stylemix_core::normalize(), !pretty);
    write_output(&css, out);
}

fn cmd_class(name: &str) {
    match stylemix_core::classes::get(name) {
        Some(rules) => println!("{rules}"),
        None => {
            eprintln!("Error: unknown class: {name}");
            std::process::exit(1);
        }
    }
}
