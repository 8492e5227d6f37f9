use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Per-invocation response metadata.
#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub warnings: Vec<String>,
}

/// Top-level CLI response: metadata plus the command payload.
#[derive(Debug, Serialize)]
pub struct Response {
    pub meta: ResponseMeta,
    pub data: Value,
}

pub fn render(response: &Response, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(response)?
            } else {
                serde_json::to_string(response)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(response)?,
    }

    Ok(())
}

fn render_table(response: &Response) -> Result<(), CliError> {
    println!("request_id: {}", response.meta.request_id);

    if !response.meta.warnings.is_empty() {
        println!("warnings:");
        for warning in &response.meta.warnings {
            println!("  - {warning}");
        }
    }

    println!("data:");
    let pretty_data = serde_json::to_string_pretty(&response.data)?;
    for line in pretty_data.lines() {
        println!("  {line}");
    }

    Ok(())
}
