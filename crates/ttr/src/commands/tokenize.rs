use std::io::{self, BufWriter, Write};

use anyhow::Result;
use ttr_config::{Settings, TokenizeArgs};
use ttr_core::Tokenizer;

use crate::input;

pub(crate) fn handle(args: TokenizeArgs, settings: Settings) -> Result<()> {
    let tokenizer = Tokenizer::new(args.strip_numbers || settings.tokenizer.strip_numbers);
    let text = input::read_text(&args.file)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for token in tokenizer.tokenize(&text) {
        writeln!(out, "{token}")?;
    }
    out.flush()?;
    Ok(())
}
