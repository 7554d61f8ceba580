//! Line-input prompt helpers. Every helper re-prompts until the operator
//! supplies something parseable.

use std::io::{self, Write};

use crate::kernel::ReadWrite;

pub(crate) fn read_line(prompt: &str) -> String {
    if !prompt.is_empty() {
        print!("{} ", prompt);
        io::stdout().flush().expect("failed to flush stdout");
    }
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .expect("failed to read stdin");
    line.trim().to_string()
}

pub(crate) fn get_usize(prompt: &str) -> usize {
    loop {
        match read_line(prompt).parse() {
            Ok(value) => return value,
            Err(_) => println!("Please enter a whole number."),
        }
    }
}

pub(crate) fn get_u32(prompt: &str) -> u32 {
    loop {
        match read_line(prompt).parse() {
            Ok(value) => return value,
            Err(_) => println!("Please enter a whole number."),
        }
    }
}

pub(crate) fn get_f64(prompt: &str) -> f64 {
    loop {
        match read_line(prompt).parse() {
            Ok(value) => return value,
            Err(_) => println!("Please enter a number."),
        }
    }
}

pub(crate) fn get_alpha(prompt: &str) -> f64 {
    loop {
        let alpha = get_f64(prompt);
        if (0.0..=1.0).contains(&alpha) {
            return alpha;
        }
        println!("The history parameter must be within [0, 1].");
    }
}

pub(crate) fn get_page_size(prompt: &str) -> u32 {
    loop {
        let size = get_u32(prompt);
        if size > 0 && size.is_power_of_two() {
            return size;
        }
        println!("Page size must be a power of two.");
    }
}

/// Hexadecimal input, with or without a leading `0x`.
pub(crate) fn get_hex(prompt: &str) -> u32 {
    loop {
        let line = read_line(prompt);
        let digits = line.trim_start_matches("0x").trim_start_matches("0X");
        match u32::from_str_radix(digits, 16) {
            Ok(value) => return value,
            Err(_) => println!("Please enter a hexadecimal number."),
        }
    }
}

pub(crate) fn get_read_write(prompt: &str) -> ReadWrite {
    loop {
        match read_line(prompt).as_str() {
            "r" | "R" => return ReadWrite::Read,
            "w" | "W" => return ReadWrite::Write,
            _ => println!("Please enter r or w."),
        }
    }
}
