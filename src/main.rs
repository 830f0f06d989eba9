use anyhow::{Context, Result};
use clap::Parser;

use checkfile::application::dto::{CheckMode, OracleKind};
use checkfile::application::{
    CheckFileUseCase, PROGRESS, Reporter, RunBatchUseCase, ScanDirectoryUseCase,
};
use checkfile::domain::repositories::ContentTypeOracle;
use checkfile::infrastructure::oracles::{FileCommandOracle, SignatureOracle};
use checkfile::infrastructure::signals::install_progress_probe;
use checkfile::presentation::cli::{Cli, ConsoleReporter, init_logging};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = cli.into_options().context("No check mode selected")?;

    install_progress_probe().context("Failed to set up the progress probe")?;

    let mut reporter = ConsoleReporter::stdio();

    match options.oracle {
        OracleKind::FileCommand => {
            let oracle = FileCommandOracle::new(options.file_command.clone());
            oracle
                .ensure_available()
                .context("Failed to launch the file type detector")?;
            run_checks(CheckFileUseCase::new(oracle), &options.mode, &mut reporter);
        }
        OracleKind::Builtin => {
            run_checks(
                CheckFileUseCase::new(SignatureOracle::new()),
                &options.mode,
                &mut reporter,
            );
        }
    }

    Ok(())
}

fn run_checks<O: ContentTypeOracle>(
    checker: CheckFileUseCase<O>,
    mode: &CheckMode,
    reporter: &mut dyn Reporter,
) {
    match mode {
        CheckMode::File(path) => {
            checker.execute(path, reporter);
        }
        CheckMode::Batch(list) => {
            RunBatchUseCase::new(&checker, &PROGRESS).execute(list, reporter);
        }
        CheckMode::Directory(dir) => {
            ScanDirectoryUseCase::new(&checker, &PROGRESS).execute(dir, reporter);
        }
    }
}
