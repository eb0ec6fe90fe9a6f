use anyhow::{Context, Result};
use ttr_config::{AggregateArgs, JsonOptions};
use ttr_core::TtrAggregator;
use ttr_format as format;

use crate::input;

pub(crate) fn handle(args: AggregateArgs) -> Result<()> {
    let mut results = Vec::new();
    for path in &args.files {
        let text = input::read_text(path)?;
        let parsed = format::read_results(&text)
            .with_context(|| format!("Failed to parse results from {}", path.display()))?;
        results.extend(parsed);
    }

    let aggregate = TtrAggregator::new().aggregate(&results, args.group)?;
    format::write_aggregate(&aggregate, args.format, JsonOptions::from(&args.json))
}
