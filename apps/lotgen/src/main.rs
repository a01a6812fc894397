//! lotgen — generate a parking-lot scenario for the SUMO traffic simulator.
//!
//! Writes the plain node/edge files, compiles them with `netconvert`, then
//! writes the parking areas, trip demand, run configuration and a space
//! inventory CSV into the output directory.
//!
//! ```text
//! lotgen --rows 8 --slots-per-row 10 -o out/
//! lotgen -c lot.json --no-compile -v
//! ```

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use log::{debug, info, LevelFilter};
use structopt::StructOpt;

use lg_core::{AccessibleDemand, LayoutConfig};
use lg_output::SpaceRendering;
use lg_scenario::{Netconvert, NetworkCompiler, ScenarioBuilder, SkipCompile};

#[derive(Debug, StructOpt)]
#[structopt(name = "lotgen", about = "Parking-lot scenario generator for SUMO.")]
struct Opt {
    /// JSON layout configuration.  Missing fields take their defaults;
    /// command-line flags override the file.
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Directory the artifacts are written to.
    #[structopt(short, long, parse(from_os_str), default_value = ".")]
    out_dir: PathBuf,

    /// File-name prefix of every artifact.
    #[structopt(long)]
    prefix: Option<String>,

    /// Number of parking rows.
    #[structopt(long)]
    rows: Option<u32>,

    /// Distance between row junctions (m).
    #[structopt(long)]
    row_pitch: Option<f64>,

    /// Width of one parking slot (m).
    #[structopt(long)]
    slot_width: Option<f64>,

    /// Spaces per parking area.  Without `--accessible-spaces` the reserved
    /// prefix is capped at this value, so `--slots-per-row 0` is accepted.
    #[structopt(long)]
    slots_per_row: Option<u32>,

    /// Leading spaces of every area reserved for accessible vehicles.
    /// At most `--slots-per-row`.
    #[structopt(long)]
    accessible_spaces: Option<u32>,

    /// Trips to the first N rows use the accessible vehicle type.
    #[structopt(long, conflicts_with = "accessible-slots")]
    accessible_rows: Option<u32>,

    /// Trips in the first N departure waves use the accessible vehicle type.
    #[structopt(long)]
    accessible_slots: Option<u32>,

    /// Seconds between departure waves.
    #[structopt(long)]
    period: Option<u32>,

    /// Write `roadsideCapacity` instead of individual spaces.
    #[structopt(long)]
    roadside: bool,

    /// Skip netconvert; the .net.xml is not produced.
    #[structopt(long)]
    no_compile: bool,

    /// netconvert binary to use instead of $SUMO_HOME/bin or PATH.
    #[structopt(long, parse(from_os_str))]
    netconvert: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit.
    #[structopt(long)]
    dump_config: bool,

    /// Activate debug logging.
    #[structopt(short, long)]
    verbose: bool,
}

impl Opt {
    /// Defaults, then the config file, then individual flags.
    fn layout_config(&self) -> Result<LayoutConfig> {
        let mut cfg = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
            }
            None => LayoutConfig::default(),
        };

        if let Some(v) = &self.prefix { cfg.prefix = v.clone(); }
        if let Some(v) = self.rows { cfg.rows = v; }
        if let Some(v) = self.row_pitch { cfg.row_pitch = v; }
        if let Some(v) = self.slot_width { cfg.slot_width = v; }
        if let Some(v) = self.slots_per_row { cfg.slots_per_row = v; }
        match self.accessible_spaces {
            Some(v) => cfg.accessible_spaces = v,
            None if self.slots_per_row.is_some() => {
                cfg.accessible_spaces = cfg.accessible_spaces.min(cfg.slots_per_row);
            }
            None => {}
        }
        if let Some(v) = self.period { cfg.period = v; }
        match (self.accessible_rows, self.accessible_slots) {
            (Some(0), None) | (None, Some(0)) => cfg.accessible_demand = AccessibleDemand::None,
            (Some(n), None) => cfg.accessible_demand = AccessibleDemand::Rows(n),
            (None, Some(n)) => cfg.accessible_demand = AccessibleDemand::Slots(n),
            (None, None) => {}
            (Some(_), Some(_)) => bail!("--accessible-rows and --accessible-slots are exclusive"),
        }
        Ok(cfg)
    }

    fn compiler(&self) -> Box<dyn NetworkCompiler> {
        if self.no_compile {
            return Box::new(SkipCompile);
        }
        let netconvert = match &self.netconvert {
            Some(path) => Netconvert::new(path.clone()),
            None => Netconvert::locate(),
        };
        info!("using {}", netconvert.program().display());
        Box::new(netconvert)
    }
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    let level = if opt.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    simple_logger::SimpleLogger::new().with_level(level).init()?;
    debug!("{:#?}", opt);

    let config = opt.layout_config()?;
    if opt.dump_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let rendering = if opt.roadside { SpaceRendering::Roadside } else { SpaceRendering::Explicit };

    let t0 = Instant::now();
    let scenario = ScenarioBuilder::new(config)
        .space_rendering(rendering)
        .build()
        .context("building scenario")?;

    let writer = scenario
        .generate(&opt.out_dir, opt.compiler().as_ref())
        .with_context(|| format!("generating scenario in {}", opt.out_dir.display()))?;

    info!(
        "{} rows, {} spaces ({} accessible), {} trips → {} files in {} ({:.3} s)",
        scenario.config.rows,
        scenario.parking.space_count(),
        scenario.parking.accessible_count(),
        scenario.demand.len(),
        writer.written().len(),
        writer.dir().display(),
        t0.elapsed().as_secs_f64()
    );
    info!("run with: sumo -c {}", writer.path(&scenario.names.sumocfg).display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use structopt::StructOpt;

    use lg_core::AccessibleDemand;

    use super::Opt;

    fn opt(args: &[&str]) -> Opt {
        Opt::from_iter(std::iter::once("lotgen").chain(args.iter().copied()))
    }

    #[test]
    fn zero_slots_caps_default_space_quota() {
        let cfg = opt(&["--slots-per-row", "0"]).layout_config().unwrap();
        assert_eq!(cfg.slots_per_row, 0);
        assert_eq!(cfg.accessible_spaces, 0);
        cfg.validate().unwrap();
    }

    #[test]
    fn explicit_space_quota_is_kept() {
        let cfg = opt(&["--slots-per-row", "2", "--accessible-spaces", "3"]).layout_config().unwrap();
        assert_eq!(cfg.accessible_spaces, 3);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn demand_flags_override_default() {
        let cfg = opt(&["--accessible-slots", "2"]).layout_config().unwrap();
        assert_eq!(cfg.accessible_demand, AccessibleDemand::Slots(2));
        let cfg = opt(&["--accessible-rows", "0"]).layout_config().unwrap();
        assert_eq!(cfg.accessible_demand, AccessibleDemand::None);
    }
}
