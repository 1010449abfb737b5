use std::{env, fs, path::PathBuf, process};

use rat25f::{
    errors::errors::DriverError,
    lexer::{lexer::tokenize, tokens::TokenKind},
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if let Err(error) = run(&args[1..]) {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), DriverError> {
    if args.len() != 2 {
        return Err(DriverError::Usage);
    }

    let input = PathBuf::from(&args[0]);
    let output = PathBuf::from(&args[1]);

    let source = fs::read_to_string(&input).map_err(|source| DriverError::ReadFailed {
        path: input.clone(),
        source,
    })?;

    fs::write(&output, render_token_table(&source)).map_err(|source| {
        DriverError::WriteFailed {
            path: output.clone(),
            source,
        }
    })?;

    println!("Wrote {}", output.display());
    Ok(())
}

/// Formats the token stream as the two-column table the assignment output
/// expects. Comments are dropped; the EndOfInput sentinel terminates the
/// loop and is not printed.
fn render_token_table(source: &str) -> String {
    let mut table = String::new();
    table.push_str(&format!("{:<15} {}\n", "token", "lexeme"));
    table.push_str(&format!("{}\n", "-".repeat(40)));

    for token in tokenize(source) {
        match token.kind {
            TokenKind::EndOfInput => break,
            TokenKind::Comment => continue,
            _ => table.push_str(&format!("{:<15} {}\n", token.kind, token.lexeme)),
        }
    }

    table
}
