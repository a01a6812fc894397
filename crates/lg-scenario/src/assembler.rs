//! Run descriptor: which files make up a scenario and how the simulator
//! should treat them.

use lg_core::LayoutConfig;
use lg_output::document::flag;
use lg_output::{Document, Element};

/// File names of every artifact, derived from the prefix and period.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactNames {
    pub nodes:      String,
    pub edges:      String,
    pub net:        String,
    pub additional: String,
    pub routes:     String,
    pub sumocfg:    String,
    pub spaces:     String,
}

impl ArtifactNames {
    pub fn new(cfg: &LayoutConfig) -> Self {
        let p = &cfg.prefix;
        let period = cfg.period;
        Self {
            nodes:      format!("{p}.nod.xml"),
            edges:      format!("{p}.edg.xml"),
            net:        format!("{p}.net.xml"),
            additional: format!("{p}.add.xml"),
            routes:     format!("{p}_demand{period}.rou.xml"),
            sumocfg:    format!("{p}{period}.sumocfg"),
            spaces:     format!("{p}.spaces.csv"),
        }
    }
}

/// Run-level simulator switches.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunSwitches {
    /// Suppress the per-step progress log.
    pub no_step_log:      bool,
    /// Seconds a blocked vehicle waits before teleporting; 0 as written.
    pub time_to_teleport: i64,
}

impl Default for RunSwitches {
    fn default() -> Self {
        Self { no_step_log: true, time_to_teleport: 0 }
    }
}

/// The run configuration file's content.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioConfig {
    pub net_file:        String,
    pub route_file:      String,
    pub additional_file: String,
    pub switches:        RunSwitches,
}

/// Package the three simulator inputs named by `names` with the default
/// run switches.
pub fn assemble(names: &ArtifactNames) -> ScenarioConfig {
    ScenarioConfig {
        net_file:        names.net.clone(),
        route_file:      names.routes.clone(),
        additional_file: names.additional.clone(),
        switches:        RunSwitches::default(),
    }
}

impl ScenarioConfig {
    pub fn to_document(&self) -> Document {
        let input = Element::new("input")
            .child(value("net-file", &self.net_file))
            .child(value("route-files", &self.route_file))
            .child(value("additional-files", &self.additional_file))
            .child(value("no-step-log", flag(self.switches.no_step_log)))
            .child(value("time-to-teleport", self.switches.time_to_teleport));
        Document::with_schema(Element::new("configuration").child(input), "sumoConfiguration.xsd")
    }
}

fn value(name: &str, v: impl std::fmt::Display) -> Element {
    Element::new(name).attr("value", v)
}
