//! # Cooli
//!
//! This binary is the semantic analyzer of COOL. It combines the parser, the
//! type checker, and the type inferer into a single application.
extern crate cool_lang;

mod cli;

use cli::*;

use std::{error::Error, fs};

use log::{error, info};
use serde_json::json;

use cool_lang::{
    ast::{Ast, CoolParser},
    typechecker,
};

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::init();

    simple_logger::init_with_level((&args.verbosity).into()).unwrap();

    let source = fs::read_to_string(&args.file)?;

    let pairs = match CoolParser::parse_program(&source) {
        Ok(pairs) => pairs,
        Err(err) => {
            error!("Failed to parse file ({err})");
            std::process::exit(-1);
        }
    };

    let ast = Ast::from_program(pairs);

    if args.dump_ast {
        info!("Parsed AST:\n{ast:#?}");
    }

    let analysis = typechecker::analyze(&ast);

    if args.json {
        let report = json!({
            "errors": &analysis.errors,
            "inferences": &analysis.inferences,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for inference in &analysis.inferences {
            println!("{inference}");
        }
        for error in &analysis.errors {
            eprintln!("{error}");
        }
    }

    if args.dump_context {
        println!("{}", analysis.context);
    }

    if !analysis.errors.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
