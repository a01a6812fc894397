//! External network compilation.
//!
//! The simulator cannot read plain node/edge files directly; `netconvert`
//! compiles them into a `.net.xml`.  It is treated as a black box: one
//! synchronous call, success or failure, no retry.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{info, warn};

use crate::{ScenarioError, ScenarioResult};

/// Something that turns a node file and an edge file into a network file.
pub trait NetworkCompiler {
    fn compile(&self, nodes: &Path, edges: &Path, net: &Path) -> ScenarioResult<()>;
}

/// The simulator's `netconvert` binary.
#[derive(Clone, Debug)]
pub struct Netconvert {
    program: PathBuf,
}

impl Netconvert {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }

    /// `$SUMO_HOME/bin/netconvert` if it exists, else `netconvert` on `PATH`.
    pub fn locate() -> Self {
        if let Some(home) = env::var_os("SUMO_HOME") {
            let candidate = Path::new(&home).join("bin").join(binary_name());
            if candidate.is_file() {
                return Self::new(candidate);
            }
            warn!("SUMO_HOME is set but {} does not exist; falling back to PATH", candidate.display());
        }
        Self::new(binary_name())
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl NetworkCompiler for Netconvert {
    fn compile(&self, nodes: &Path, edges: &Path, net: &Path) -> ScenarioResult<()> {
        info!("compiling {} with {}", net.display(), self.program.display());
        let status = Command::new(&self.program)
            .arg("-n")
            .arg(nodes)
            .arg("-e")
            .arg(edges)
            .arg("-o")
            .arg(net)
            .status()
            .map_err(|source| ScenarioError::CompilerSpawn { program: self.program.clone(), source })?;

        if !status.success() {
            return Err(ScenarioError::CompilerFailed { program: self.program.clone(), status });
        }
        Ok(())
    }
}

/// Leaves the network file unwritten, for callers that compile elsewhere.
#[derive(Copy, Clone, Debug, Default)]
pub struct SkipCompile;

impl NetworkCompiler for SkipCompile {
    fn compile(&self, _nodes: &Path, _edges: &Path, net: &Path) -> ScenarioResult<()> {
        info!("skipping network compilation; {} not written", net.display());
        Ok(())
    }
}

fn binary_name() -> &'static str {
    if cfg!(windows) { "netconvert.exe" } else { "netconvert" }
}
