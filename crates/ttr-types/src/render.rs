//! Table and JSON rendering for single values.

use serde::Serialize;
use serde_json::Value;

use crate::{JsonOptions, TtrAggregateResult, TtrResult};

const RULE_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 16;

pub(crate) fn json_value<T: Serialize>(value: &T, exclude_none: bool) -> serde_json::Result<Value> {
    let mut value = serde_json::to_value(value)?;
    if exclude_none && let Value::Object(map) = &mut value {
        map.retain(|_, v| !v.is_null());
    }
    Ok(value)
}

pub(crate) fn json<T: Serialize>(value: &T, options: JsonOptions) -> serde_json::Result<String> {
    let value = json_value(value, options.exclude_none)?;
    if options.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
}

pub(crate) fn result_table(r: &TtrResult) -> String {
    let mut out = heading(&format!("TTR Report: {}", r.display_name()));
    row(&mut out, "Text ID", &r.text_id);
    if let Some(author) = &r.author {
        row(&mut out, "Author", author);
    }
    row(&mut out, "Total Words", &group_thousands(r.total_words));
    row(&mut out, "Unique Words", &group_thousands(r.unique_words));
    row(&mut out, "TTR", &format!("{:.6}", r.ttr));
    row(&mut out, "Root TTR", &format!("{:.4}", r.root_ttr));
    row(&mut out, "Log TTR", &format!("{:.6}", r.log_ttr));
    if let Some(s) = &r.sttr {
        row(&mut out, "STTR", &format!("{:.6}", s.mean));
        row(&mut out, "STTR Std", &format!("{:.6}", s.std_dev));
        row(&mut out, "Chunks", &group_thousands(s.chunk_count));
        if let Some(d) = &s.delta {
            row(&mut out, "Delta Mean", &format!("{:.6}", d.mean));
            row(&mut out, "Delta Std", &format!("{:.6}", d.std_dev));
            row(&mut out, "Delta Min", &format!("{:.6}", d.min));
            row(&mut out, "Delta Max", &format!("{:.6}", d.max));
        }
    }
    out.push_str(&"=".repeat(RULE_WIDTH));
    out
}

pub(crate) fn aggregate_table(a: &TtrAggregateResult) -> String {
    let mut out = heading(&format!("TTR Aggregate: {}", a.group_id));
    row(&mut out, "Texts", &group_thousands(a.text_count));
    row(&mut out, "Total Words", &group_thousands(a.total_words));
    row(&mut out, "TTR Mean", &format!("{:.6}", a.ttr_mean));
    row(&mut out, "TTR Min", &format!("{:.6}", a.ttr_min));
    row(&mut out, "TTR Max", &format!("{:.6}", a.ttr_max));
    out.push_str(&"=".repeat(RULE_WIDTH));
    out
}

fn heading(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\n{title}\n{rule}\n")
}

fn row(out: &mut String, label: &str, value: &str) {
    let label = format!("{label}:");
    out.push_str(&format!("{label:<LABEL_WIDTH$}{value}\n"));
}

/// `59131` -> `"59,131"`.
pub(crate) fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
