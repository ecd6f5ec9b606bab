// Copyright (c) 2018 Fabian Schuiki
#[macro_use]
extern crate clap;
extern crate gander;
extern crate memmap;
extern crate stderrlog;

use std::fs::File;
use std::process;
use std::str;

use clap::{App, Arg};
use memmap::Mmap;

use gander::emit::emit;
use gander::errors::fatal;
use gander::parser::Parser;
use gander::regurge::regurge;

fn main() {
    let matches = App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about("Parses a grammar description and prints it back out.")
        .arg(
            Arg::with_name("verbosity")
                .short("v")
                .multiple(true)
                .help("Increase message verbosity"),
        )
        .arg(
            Arg::with_name("emit")
                .long("emit")
                .help("Run the code emission pass instead of regurgitating"),
        )
        .arg(
            Arg::with_name("GRAMMAR")
                .required(true)
                .help("The grammar description file to process"),
        )
        .get_matches();

    stderrlog::new()
        .verbosity(matches.occurrences_of("verbosity") as usize)
        .init()
        .expect("failed to initialize logger");

    // Map the input file into memory. Empty files cannot be mapped, but an
    // empty grammar is still a well-formed (if erroneous) input.
    let path = matches.value_of("GRAMMAR").unwrap();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => fatal(&format!("cannot open input file: {}: {}", path, err)),
    };
    let length = file.metadata().map(|m| m.len()).unwrap_or(0);
    let mmap;
    let text = if length == 0 {
        ""
    } else {
        mmap = match unsafe { Mmap::map(&file) } {
            Ok(mmap) => mmap,
            Err(err) => fatal(&format!("cannot map input file: {}: {}", path, err)),
        };
        match str::from_utf8(&mmap[..]) {
            Ok(text) => text,
            Err(err) => fatal(&format!("input file is not valid UTF-8: {}: {}", path, err)),
        }
    };

    let mut parser = Parser::new(path, text);
    let grammar = match parser.parse() {
        Some(grammar) if parser.error_count() == 0 => grammar,
        _ => {
            eprintln!("{} errors found", parser.error_count());
            process::exit(1);
        }
    };

    if matches.is_present("emit") {
        emit(&grammar);
    } else {
        print!("{}", regurge(&grammar));
    }
}
