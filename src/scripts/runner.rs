//! Script dispatch: contract validation, harness assembly, time budget.

use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::scripts::host::ExecutionHost;

/// Fixed harness the user script is spliced into. `output` starts empty so
/// the script can append to it, and the marker is replaced with the script
/// body verbatim.
const HARNESS: &str = "output = ''\n[***]\n";
const HARNESS_SLOT: &str = "[***]";

/// The script must assign to `output` (not merely compare against it).
static OUTPUT_ASSIGNMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\boutput\b\s*=([^=]|$)").expect("valid regex"));
/// The script must read the `input` binding somewhere.
static INPUT_READ: Lazy<Regex> = Lazy::new(|| Regex::new(r"\binput\b").expect("valid regex"));

/// Dispatches validated scripts to an execution host under a wall-clock
/// budget.
pub struct ScriptRunner {
    host: Arc<dyn ExecutionHost>,
}

impl ScriptRunner {
    pub fn new(host: Arc<dyn ExecutionHost>) -> Self {
        ScriptRunner { host }
    }

    /// Check the script's textual contract: it must assign `output` and
    /// read `input`. Runs before any host dispatch.
    pub fn validate_contract(script_body: &str) -> Result<()> {
        if !OUTPUT_ASSIGNMENT.is_match(script_body) {
            return Err(Error::contract(
                "Script must assign a value to 'output'.",
            ));
        }
        if !INPUT_READ.is_match(script_body) {
            return Err(Error::contract("Script must read 'input'."));
        }
        Ok(())
    }

    /// Splice a script body into the harness.
    pub fn assemble(script_body: &str) -> String {
        HARNESS.replace(HARNESS_SLOT, script_body)
    }

    /// Validate, assemble, and execute a script against `input`.
    ///
    /// The host call races a timer: whichever resolves first wins, and the
    /// loser is not awaited further. On timeout the in-flight execution is
    /// abandoned; a late host result is discarded.
    pub async fn run(
        &self,
        script_body: &str,
        input: &str,
        budget: Duration,
    ) -> Result<String> {
        Self::validate_contract(script_body)?;
        let program = Self::assemble(script_body);
        let input = input.to_string();
        let host = Arc::clone(&self.host);

        let handle = tokio::spawn(async move { host.execute(&program, &input).await });
        match tokio::time::timeout(budget, handle).await {
            Err(_) => Err(Error::Timeout { budget }),
            Ok(Err(join_error)) => Err(Error::host(join_error)),
            Ok(Ok(Ok(output))) => Ok(output),
            Ok(Ok(Err(host_error))) => Err(Error::host(format!("{host_error:#}"))),
        }
    }
}
