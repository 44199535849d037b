//! Build script to generate the embedded word bank
//!
//! Reads the frequency list and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_frequency_table(
        "data/frequencies.txt",
        &Path::new(&out_dir).join("frequencies.rs"),
        "FREQUENCIES",
        "Default word bank with relative corpus frequencies",
    );

    // Rebuild if the word bank changes
    println!("cargo:rerun-if-changed=data/frequencies.txt");
}

fn generate_frequency_table(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(&str, f64)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let mut fields = line.split_whitespace();
            let word = fields
                .next()
                .unwrap_or_else(|| panic!("Missing word in line: {line}"));
            let freq = fields
                .next()
                .and_then(|f| f.parse::<f64>().ok())
                .unwrap_or_else(|| panic!("Missing or bad frequency in line: {line}"));
            (word, freq)
        })
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word bank").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, f64)] = &[").unwrap();

    for (word, freq) in entries {
        writeln!(output, "    (\"{word}\", {freq:e}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
