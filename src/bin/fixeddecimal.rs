//! Formats a Bengali fixed decimal through every output path and checks
//! the results.
//!
//! Exit codes: 0 when every comparison matches, 1 on the first mismatch,
//! 2 when the locale, data provider or formatter cannot be created.

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use fixed_decimal_format::conformance::{
    CheckOutcome, DATA_ROOT, exit_code, run_fixed_decimal_check,
};

fn main() -> ExitCode {
    env_logger::init();

    let data_root = Path::new(env!("CARGO_MANIFEST_DIR")).join(DATA_ROOT);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = run_fixed_decimal_check(&data_root, &mut out);
    match &result {
        Ok(CheckOutcome::Passed) => {}
        Ok(CheckOutcome::Mismatch {
            step,
            expected,
            actual,
        }) => {
            log::error!("step {step}: expected {expected:?}, got {actual:?}");
        }
        Err(e) => {
            let _ = writeln!(out, "Error: {e}");
        }
    }

    ExitCode::from(exit_code(&result))
}
