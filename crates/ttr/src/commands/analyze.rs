use std::io::{self, Write};

use anyhow::{Result, bail};
use tracing::info;
use ttr_config::{AnalyzeArgs, JsonOptions, OutputFormat, Settings};
use ttr_core::{DocumentMeta, Tokenizer, TtrAggregator, TtrCalculator, TtrResult, analyze_text};
use ttr_format as format;

use crate::input;

pub(crate) fn handle(args: AnalyzeArgs, settings: Settings) -> Result<()> {
    let results = compute(&args, settings)?;
    let json = JsonOptions::from(&args.json);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    format::write_results_to(&mut out, &results, args.format, json)?;

    if let Some(group) = &args.aggregate {
        let aggregate = TtrAggregator::new().aggregate(&results, group.as_str())?;
        if matches!(args.format, OutputFormat::Table | OutputFormat::Csv) {
            writeln!(out)?;
        }
        format::write_aggregate_to(&mut out, &aggregate, args.format, json)?;
    }

    out.flush()?;
    Ok(())
}

fn compute(args: &AnalyzeArgs, settings: Settings) -> Result<Vec<TtrResult>> {
    let single_only = args.id.is_some() || args.title.is_some() || args.author.is_some();
    if single_only && args.files.len() > 1 {
        bail!("--id, --title and --author need exactly one input file");
    }

    let settings = args.compute.apply(settings)?;
    let config = settings
        .ttr
        .with_chunk_details(args.chunks || settings.ttr.return_chunk_details());
    let calculator = TtrCalculator::new(config);
    let tokenizer = Tokenizer::from(settings.tokenizer);

    let mut results = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let text = input::read_text(path)?;
        let meta = DocumentMeta {
            text_id: args.id.clone().unwrap_or_else(|| input::text_id(path)),
            title: args.title.clone(),
            author: args.author.clone(),
        };
        let result = analyze_text(&text, meta, &tokenizer, &calculator);
        info!(text_id = %result.text_id, ttr = result.ttr, "analyzed");
        results.push(result);
    }
    Ok(results)
}
