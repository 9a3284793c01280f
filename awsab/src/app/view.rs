use std::io::Write;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::Service;

pub fn render<W: Write>(mut output: W, service: Service, value: &Value) -> Result<()> {
    writeln!(output, "{}", service.heading())?;
    let pretty = serde_json::to_string_pretty(value).map_err(Error::Render)?;
    writeln!(output, "{}", pretty)?;
    Ok(())
}
