use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("no such file or directory") || haystack.contains("cannot find the") {
        push_hint(&mut out, "Verify the input path exists and is readable.");
        push_hint(&mut out, "Use `-` to read text from stdin.");
    }

    if haystack.contains("must be positive") {
        push_hint(
            &mut out,
            "`--min-words` and `--chunk-size` (and their `ttr.toml` keys) must be at least 1.",
        );
    }

    if haystack.contains("toml") && (haystack.contains("parse") || haystack.contains("unknown field")) {
        push_hint(
            &mut out,
            "Check `ttr.toml` syntax; only `[ttr]` and `[tokenizer]` tables are recognized.",
        );
    }

    if haystack.contains("no chunk details") {
        push_hint(
            &mut out,
            "Set `return_chunk_details = true` under `[ttr]`, or pass `--chunks` to `analyze`.",
        );
    }

    if haystack.contains("not a ttr result") || haystack.contains("invalid json") {
        push_hint(
            &mut out,
            "`ttr aggregate` reads the output of `ttr analyze --format json` or `--format jsonl`.",
        );
    }

    if haystack.contains("no results given") {
        push_hint(&mut out, "Pass at least one non-empty result file.");
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::{format, suggestions};

    #[test]
    fn suggests_for_missing_path() {
        let err = anyhow!("No such file or directory (os error 2)").context("Failed to read a.txt");
        let hints = suggestions(&err);
        assert!(hints.iter().any(|h| h.contains("stdin")));
    }

    #[test]
    fn suggests_for_invalid_sizes() {
        let err = anyhow!("Invalid configuration: `sttr_chunk_size` must be positive (got 0)");
        assert!(suggestions(&err).iter().any(|h| h.contains("--chunk-size")));
    }

    #[test]
    fn format_without_hints_is_just_the_chain() {
        let err = anyhow!("inner").context("outer");
        assert_eq!(format(&err), "Error: outer: inner");
    }

    #[test]
    fn hints_are_not_duplicated() {
        let err = anyhow!("no such file or directory").context("no such file or directory");
        let hints = suggestions(&err);
        let unique: std::collections::BTreeSet<_> = hints.iter().collect();
        assert_eq!(unique.len(), hints.len());
    }
}
