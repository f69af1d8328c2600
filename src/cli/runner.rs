use std::ffi::OsString;
use std::process::ExitCode;

use tracing::{Level, debug, error};

use crate::core::Symbol;
use crate::types::RenderSettings;

use super::args::{CliArgs, EXPECTED_ARGC};
use super::errors::AppError;

fn init_logging() {
    // Ignore the error from a second init when `run` is called repeatedly.
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn parse_invocation(argv: Vec<OsString>) -> Result<CliArgs, AppError> {
    let found = argv.len().saturating_sub(1);
    let Ok([program, text, stem]) = <[OsString; EXPECTED_ARGC]>::try_from(argv) else {
        return Err(AppError::Usage {
            found,
            usage: CliArgs::usage(),
        });
    };
    Ok(CliArgs::try_from_operands(program, text, stem)?)
}

fn try_run(argv: Vec<OsString>) -> Result<(), AppError> {
    let args = parse_invocation(argv)?;
    let settings = RenderSettings::default();

    // Encode before touching the filesystem so a rejected text leaves no file behind.
    let symbol = Symbol::encode(args.text.as_encoded_bytes(), settings.ec_level)?;
    let output = args.output_path();
    symbol.write_svg(&output, &settings)?;

    debug!("Successfully wrote QR code -> {:?}", output);
    Ok(())
}

/// Runs one invocation and maps its outcome to the process exit status.
///
/// `args` is the full argument vector, program name first.
pub fn run<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    init_logging();

    match try_run(args.into_iter().map(Into::into).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        // A wrong argument count exits silently.
        Err(e @ AppError::Usage { .. }) => e.exit_code(),
        Err(e) => {
            error!("{}", e);
            e.exit_code()
        }
    }
}
