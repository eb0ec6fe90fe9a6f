use std::io::{self, Write};

use anyhow::Result;
use tracing::warn;
use ttr_config::{ChunksArgs, Settings};
use ttr_core::{Tokenizer, TtrCalculator, analyze_text};
use ttr_format as format;

use crate::input;

pub(crate) fn handle(args: ChunksArgs, settings: Settings) -> Result<()> {
    let settings = args.compute.apply(settings)?;
    let calculator = TtrCalculator::new(settings.ttr.with_chunk_details(true));
    let tokenizer = Tokenizer::from(settings.tokenizer);

    let text = input::read_text(&args.file)?;
    let text_id = args.id.unwrap_or_else(|| input::text_id(&args.file));
    let result = analyze_text(&text, text_id, &tokenizer, &calculator);
    if result.sttr.is_none() {
        warn!(
            text_id = %result.text_id,
            total_words = result.total_words,
            min_words = settings.ttr.min_words_for_sttr(),
            "too short for standardized TTR; no chunks"
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    format::write_chunk_series_csv(&mut out, std::slice::from_ref(&result))?;
    out.flush()?;
    Ok(())
}
