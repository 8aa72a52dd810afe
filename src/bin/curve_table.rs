//! Print the Hilbert distance of every cell of an `n × n` grid, row 0 first.
//!
//! Useful to eyeball the traversal the unroller applies to an image.
use hilbert_sonify::unroll::distance_table;
use std::env;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let arg = env::args().nth(1).ok_or_else(usage)?;
    let n: usize = arg
        .parse()
        .map_err(|e| format!("Invalid dimension {arg:?}: {e}"))?;
    let table = distance_table(n).map_err(|e| e.to_string())?;

    let width = (n * n - 1).to_string().len();
    for row in table.chunks_exact(n) {
        let line: Vec<String> = row.iter().map(|d| format!("{d:>width$}")).collect();
        println!("{}", line.join(" "));
    }
    Ok(())
}

fn usage() -> String {
    "Usage: curve_table <n>   (n a power of two)".to_string()
}
