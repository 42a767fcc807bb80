//! Print the model response schema.

use anyhow::Result;
use lander_core::generator::prompt::response_schema;

pub fn execute() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&response_schema())?);
    Ok(())
}
