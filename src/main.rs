mod cli;

use anyhow::Result;
use clap::Parser;

use cdeclgen::{decl, lexer::tokenize, parser::parse};

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let tokens = tokenize(cli.type_expr)?;
    let ty = parse(tokens)?;

    if cli.dump_tree {
        eprintln!("{ty:#?}");
    }

    let declaration = decl::render(&ty, cli.name.as_deref().unwrap_or(""))?;
    println!("{declaration}");

    Ok(())
}
