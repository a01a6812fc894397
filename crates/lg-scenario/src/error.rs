//! Pipeline error type.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use lg_core::LotError;
use lg_demand::DemandError;
use lg_network::NetworkError;
use lg_output::OutputError;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Config(#[from] LotError),

    #[error("topology error: {0}")]
    Network(#[from] NetworkError),

    #[error("demand error: {0}")]
    Demand(#[from] DemandError),

    #[error("{owner} references {kind} {id}, which was not generated")]
    DanglingReference {
        owner: String,
        kind:  &'static str,
        id:    String,
    },

    #[error("output error: {0}")]
    Output(#[from] OutputError),

    #[error("could not run network compiler {program}: {source}")]
    CompilerSpawn {
        program: PathBuf,
        #[source]
        source:  std::io::Error,
    },

    #[error("network compiler {program} exited with {status}")]
    CompilerFailed { program: PathBuf, status: ExitStatus },
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
