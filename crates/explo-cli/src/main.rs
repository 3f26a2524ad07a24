//! explo CLI - exploration target estimation and drill campaign planning
//!
//! Works on a JSON session store holding the working scenario and the saved
//! scenarios. Commands that change the session write the store back.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use explo_kernel::{SweepParameter, SweepRange};
use explo_model::{Date, GradeUnit, MineralizedBody, Session, Uuid};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;

mod config;
mod report;

use config::{Config, DrillMethod};

#[derive(Parser)]
#[command(name = "explo")]
#[command(about = "Exploration target estimation and drill campaign planning", long_about = None)]
struct Cli {
    /// Session store file
    #[arg(long, global = true, default_value = "explo-session.json")]
    store: PathBuf,
    /// Configuration file (optional; defaults apply when missing)
    #[arg(long, global = true, default_value = "explo.toml")]
    config: PathBuf,
    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a scenario, save it and make it current
    New {
        /// Scenario name
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        location: Option<String>,
        /// Main commodity
        #[arg(long)]
        substance: Option<String>,
        /// Main measurement unit: "g/t" or "%"
        #[arg(long)]
        unit: Option<String>,
    },
    /// Add a vein body to the current scenario
    AddBody {
        /// Body name
        name: String,
        /// Strike length (m)
        #[arg(long)]
        strike_length: f64,
        /// True thickness (m)
        #[arg(long)]
        thickness: f64,
        /// Extent down dip (m)
        #[arg(long)]
        depth_extent: f64,
        /// Average grade
        #[arg(long)]
        grade: f64,
        /// Grade unit: "g/t" or "%"
        #[arg(long, default_value = "g/t")]
        unit: String,
        /// Density (t/m3)
        #[arg(long)]
        density: f64,
        /// Strike azimuth (degrees from north)
        #[arg(long)]
        azimuth: f64,
        /// Dip (degrees below horizontal)
        #[arg(long)]
        dip: f64,
        /// Elevation of the body top (m, negative below surface)
        #[arg(long, allow_hyphen_values = true)]
        roof_elevation: f64,
    },
    /// Remove a body from the current scenario
    RemoveBody {
        /// Body name or id
        body: String,
    },
    /// List saved scenarios and the current scenario's bodies
    List,
    /// Make a saved scenario current
    Load {
        /// Scenario name or id
        scenario: String,
    },
    /// Save the current scenario
    Save,
    /// Delete a saved scenario
    Delete {
        /// Scenario name or id
        scenario: String,
    },
    /// Append scenarios from an export file
    Import {
        /// JSON list of scenarios
        input: PathBuf,
    },
    /// Write saved scenarios as a JSON list
    Export {
        /// Output file (stdout if omitted)
        output: Option<PathBuf>,
    },
    /// Estimate tonnage and metal of the current scenario
    Estimate {
        /// Mesh spacing along strike (m)
        #[arg(long)]
        spacing_x: Option<f64>,
        /// Mesh spacing along dip (m)
        #[arg(long)]
        spacing_y: Option<f64>,
    },
    /// Plan a two-phase drill campaign over the current scenario
    Plan {
        /// Body to drill (repeatable; all bodies if omitted)
        #[arg(long = "body")]
        bodies: Vec<String>,
        /// Drilling method
        #[arg(long, value_enum)]
        drill_type: Option<DrillMethod>,
        /// Attach the plan to the current scenario and save it
        #[arg(long)]
        save: bool,
    },
    /// Sweep grade or thickness of one body
    Sensitivity {
        /// Body name or id
        body: String,
        #[arg(long, value_enum, default_value = "grade")]
        parameter: ParameterArg,
        /// Number of values
        #[arg(long)]
        steps: Option<usize>,
    },
    /// Display geometry of the current scenario's bodies
    Geometry {
        /// Also trace planned drill holes
        #[arg(long)]
        holes: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ParameterArg {
    Grade,
    Thickness,
}

impl From<ParameterArg> for SweepParameter {
    fn from(arg: ParameterArg) -> Self {
        match arg {
            ParameterArg::Grade => SweepParameter::Grade,
            ParameterArg::Thickness => SweepParameter::Thickness,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    let mut session = load_session(&cli.store)?;

    let changed = run(cli.command, &config, &mut session, cli.json)?;
    if changed {
        save_session(&cli.store, &session)?;
    }
    Ok(())
}

/// Execute one command. Returns whether the session changed.
fn run(command: Commands, config: &Config, session: &mut Session, json: bool) -> Result<bool> {
    match command {
        Commands::New {
            name,
            description,
            location,
            substance,
            unit,
        } => {
            let measurement_unit = unit.as_deref().map(GradeUnit::from_label).transpose()?;
            let scenario = session.new_scenario(name);
            scenario.description = description;
            scenario.location = location;
            scenario.main_substance = substance;
            scenario.measurement_unit = measurement_unit;
            println!("Created scenario {} ({})", scenario.name, scenario.id);
            session.save_current();
            Ok(true)
        }
        Commands::AddBody {
            name,
            strike_length,
            thickness,
            depth_extent,
            grade,
            unit,
            density,
            azimuth,
            dip,
            roof_elevation,
        } => {
            let body = MineralizedBody {
                id: Uuid::new_v4(),
                name,
                strike_length,
                thickness,
                depth_extent,
                grade,
                grade_unit: GradeUnit::from_label(&unit)?,
                density,
                azimuth,
                dip,
                roof_elevation,
            };
            let label = format!("{} ({})", body.name, body.id);
            session.current.add_body(body)?;
            println!("Added body {} to {}", label, session.current.name);
            Ok(true)
        }
        Commands::RemoveBody { body } => {
            let id = resolve_body(session, &body)?;
            let removed = session.current.remove_body(id)?;
            println!("Removed body {}", removed.name);
            Ok(true)
        }
        Commands::List => {
            if json {
                print_json(&*session)?;
            } else {
                print!("{}", report::scenario_list(session));
                println!();
                print!("{}", report::scenario_detail(&session.current));
            }
            Ok(false)
        }
        Commands::Load { scenario } => {
            let id = resolve_scenario(session, &scenario)?;
            let loaded = session.load(id)?;
            println!("Loaded {} ({} bodies)", loaded.name, loaded.bodies.len());
            Ok(true)
        }
        Commands::Save => {
            session.save_current();
            println!("Saved {}", session.current.name);
            Ok(true)
        }
        Commands::Delete { scenario } => {
            let id = resolve_scenario(session, &scenario)?;
            let removed = session.delete(id)?;
            println!("Deleted {}", removed.name);
            Ok(true)
        }
        Commands::Import { input } => {
            let text = fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let scenarios = Session::parse_export(&text)
                .with_context(|| format!("parsing {}", input.display()))?;
            let count = session.import(scenarios);
            println!("Imported {} scenario(s)", count);
            Ok(count > 0)
        }
        Commands::Export { output } => {
            let text = session.export_json()?;
            match output {
                Some(path) => {
                    fs::write(&path, text)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!(
                        "Exported {} scenario(s) to {}",
                        session.saved.len(),
                        path.display()
                    );
                }
                None => println!("{}", text),
            }
            Ok(false)
        }
        Commands::Estimate {
            spacing_x,
            spacing_y,
        } => {
            let mut spacing = config.mesh_spacing()?;
            spacing.x = spacing_x.unwrap_or(spacing.x);
            spacing.y = spacing_y.unwrap_or(spacing.y);
            spacing
                .validate("estimation")
                .map_err(anyhow::Error::msg)?;

            let estimate =
                explo_kernel::estimate_scenario(&session.current.bodies, spacing, &config.thresholds()?);
            if json {
                print_json(&estimate)?;
            } else {
                print!("{}", report::estimate(&estimate));
            }
            Ok(false)
        }
        Commands::Plan {
            bodies,
            drill_type,
            save,
        } => {
            let mut params = config.drill_parameters(today())?;
            if let Some(method) = drill_type {
                params.drill_type = method.into();
            }
            let scenario = &session.current;
            if scenario.bodies.is_empty() {
                bail!("scenario '{}' has no bodies to drill", scenario.name);
            }
            let names: Vec<String> = if bodies.is_empty() {
                scenario.bodies.iter().map(|b| b.name.clone()).collect()
            } else {
                bodies
            };

            let plan = explo_kernel::drill_plan(&scenario.bodies, &names, &params, today());
            if plan.drilled_bodies.is_empty() {
                bail!("none of the requested bodies exist in '{}'", scenario.name);
            }
            if json {
                print_json(&plan)?;
            } else {
                print!("{}", report::campaign(&plan.campaign, &params));
            }

            if save {
                session.current.drill_plan = Some(plan);
                session.save_current();
                println!("Saved drill plan with {}", session.current.name);
            }
            Ok(save)
        }
        Commands::Sensitivity {
            body,
            parameter,
            steps,
        } => {
            let id = resolve_body(session, &body)?;
            let Some(body) = session.current.body(id) else {
                bail!("no body {}", id);
            };
            let classification = explo_kernel::classify_mesh(config.mesh_spacing()?, &config.thresholds()?);
            let range = SweepRange {
                low_fraction: config.sensitivity.low_fraction,
                high_fraction: config.sensitivity.high_fraction,
            };
            let steps = steps.unwrap_or(config.sensitivity.steps);
            let parameter = SweepParameter::from(parameter);

            let sweep = explo_kernel::sweep(body, classification, parameter, range, steps);
            if json {
                print_json(&sweep)?;
            } else {
                let (input_unit, output_unit) = match parameter {
                    SweepParameter::Grade => (
                        body.grade_unit.label(),
                        body.grade_unit.metal_unit().label(),
                    ),
                    SweepParameter::Thickness => ("m", "t"),
                };
                print!("{}", report::sweep(&sweep, input_unit, output_unit));
            }
            Ok(false)
        }
        Commands::Geometry { holes } => {
            let bodies = &session.current.bodies;
            let geometry: Vec<_> = bodies.iter().map(explo_kernel::body_geometry).collect();
            let traces: Vec<explo_kernel::BodyHoles> = if holes {
                let params = config.drill_parameters(today())?;
                bodies
                    .iter()
                    .map(|b| explo_kernel::drill_holes(b, &params))
                    .collect()
            } else {
                Vec::new()
            };

            if json {
                let surface = explo_kernel::surface_grid(
                    config.mesh_spacing()?,
                    config.mesh.surface_half_extent,
                );
                print_json(&GeometryOutput {
                    bodies: &geometry,
                    surface: &surface,
                    holes: &traces,
                })?;
            } else {
                print!("{}", report::geometry(&geometry, &traces));
            }
            Ok(false)
        }
    }
}

#[derive(Serialize)]
struct GeometryOutput<'a> {
    bodies: &'a [explo_kernel::BodyGeometry],
    surface: &'a [[explo_kernel::Point3; 2]],
    holes: &'a [explo_kernel::BodyHoles],
}

fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

fn load_session(path: &Path) -> Result<Session> {
    if !path.exists() {
        log::info!("no session at {}, starting a new one", path.display());
        return Ok(Session::new());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading session {}", path.display()))?;
    Session::from_json(&text).with_context(|| format!("parsing session {}", path.display()))
}

fn save_session(path: &Path, session: &Session) -> Result<()> {
    fs::write(path, session.to_json()?)
        .with_context(|| format!("writing session {}", path.display()))?;
    log::debug!("session written to {}", path.display());
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Find a saved scenario by id or, failing that, by unique name.
fn resolve_scenario(session: &Session, key: &str) -> Result<Uuid> {
    if let Ok(id) = Uuid::parse_str(key) {
        return Ok(id);
    }
    let matches: Vec<_> = session.saved.iter().filter(|s| s.name == key).collect();
    match matches.as_slice() {
        [only] => Ok(only.id),
        [] => bail!("no saved scenario named '{}'", key),
        _ => bail!("{} scenarios are named '{}'; use the id", matches.len(), key),
    }
}

/// Find a body of the current scenario by id or by name.
fn resolve_body(session: &Session, key: &str) -> Result<Uuid> {
    if let Ok(id) = Uuid::parse_str(key) {
        return Ok(id);
    }
    match session.current.body_named(key) {
        Some(body) => Ok(body.id),
        None => bail!("no body named '{}' in '{}'", key, session.current.name),
    }
}
