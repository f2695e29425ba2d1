//! A small interactive base-conversion tool: prompts for an input base,
//! reads a number in that base, prompts for an output base, prints the
//! number rendered in it. No flags, so no argument-parsing crate — just
//! `std::io`.

use exact_int::BigUInt;
use std::io::{self, Write};
use std::process::ExitCode;

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn run() -> Result<(), String> {
    let ibase_str = prompt("Input base (2-36): ").map_err(|e| e.to_string())?;
    let ibase: u32 = ibase_str
        .parse()
        .map_err(|_| format!("not a valid base: {ibase_str}"))?;
    if ibase > BigUInt::max_input_base() {
        return Err(format!(
            "input base too large, enter a base of {} or less",
            BigUInt::max_input_base()
        ));
    }

    let digits = prompt("Number in that base: ").map_err(|e| e.to_string())?;
    let mut number = BigUInt::from_str_radix(&digits, ibase).map_err(|e| e.to_string())?;

    let obase_str = prompt("Output base (2-65536): ").map_err(|e| e.to_string())?;
    let obase: u32 = obase_str
        .parse()
        .map_err(|_| format!("not a valid base: {obase_str}"))?;
    number.set_base(obase).map_err(|e| e.to_string())?;

    println!("{number}");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
