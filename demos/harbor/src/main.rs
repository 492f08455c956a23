//! harbor: in-memory demo of the vehicle_control scan.
//!
//! Populates two worlds with boats and minecarts, some carrying riders, and
//! runs the scan over them.  Two modes:
//!
//! - **simulated** (`--passes N`): a manual clock jumps one scan period per
//!   pass and riders board and leave between passes.  Finishes instantly.
//! - **live** (default): real time, static population.  Type `reload` or
//!   `stop` on stdin.

use std::io::BufRead;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use vc_config::{ConfigHandle, parse_settings};
use vc_core::{Clock, ManualClock, Millis};
use vc_output::{CsvWriter, ScanOutputObserver};
use vc_scan::{AdminCommand, CancelToken, ScanLoop, ScanLoopBuilder, command};
use vc_world::{MemoryHost, MemoryWorld, Populator, Vehicle, World};

// ── Constants ─────────────────────────────────────────────────────────────────

const NAME:           &str      = "harbor";
const WORLDS:         [&str; 2] = ["world", "world_nether"];
const SPAWN_RADIUS:   f64       = 200.0;
const DEFAULT_CONFIG: &str      = include_str!("../harbor.toml");

#[derive(Parser, Debug)]
#[command(author, version, about = "Vehicle timeout scan over an in-memory harbor")]
struct Args {
    /// TOML configuration; the bundled harbor.toml is used if omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for scan_summaries.csv and break_events.csv
    #[arg(long, default_value = "output/harbor")]
    out: PathBuf,

    /// Vehicles spawned per world
    #[arg(long, default_value_t = 200)]
    vehicles: usize,

    /// Seed for population and churn
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Run this many simulated passes instead of scanning in real time
    #[arg(long)]
    passes: Option<u64>,

    /// Per-pass chance that a vehicle's riders change (simulated mode)
    #[arg(long, default_value_t = 0.05)]
    churn: f64,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ConfigHandle::open(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => ConfigHandle::new(parse_settings(DEFAULT_CONFIG).context("bundled harbor.toml")?),
    };

    let mut populator = Populator::new(args.seed);
    let mut host = MemoryHost::new();
    for name in WORLDS {
        let mut world = MemoryWorld::new(name);
        populator.populate(&mut world, args.vehicles, SPAWN_RADIUS);
        host.worlds.push(world);
    }
    info!("spawned {} vehicles in each of {} worlds", args.vehicles, WORLDS.len());

    let writer = CsvWriter::new(&args.out)
        .with_context(|| format!("failed to create output in {}", args.out.display()))?;
    let mut observer = ScanOutputObserver::new(writer);

    let started = Instant::now();
    let passes = match args.passes {
        Some(n) => {
            let clock = ManualClock::new(Millis::ZERO);
            let mut scan = ScanLoopBuilder::new(host, config).clock(clock.clone()).build()?;
            simulate(&mut scan, &clock, &mut populator, n, args.churn, &mut observer);
            observer.finish();
            report(&scan);
            n
        }
        None => {
            let mut scan = ScanLoopBuilder::new(host, config.clone()).build()?;
            let token = CancelToken::new();
            spawn_console(config, token.clone());
            info!("scanning every {} s; type `reload` or `stop`", scan.config.snapshot().scan.period_secs);
            let ran = scan.run(&mut observer, &token);
            report(&scan);
            ran
        }
    };

    if let Some(e) = observer.take_error() {
        warn!("output error: {e}");
    }
    info!("{passes} passes in {:.2?}; output in {}", started.elapsed(), args.out.display());
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Ignore error if already set.
    let _ = fmt().with_env_filter(env_filter).try_init();
}

// ── Simulated mode ────────────────────────────────────────────────────────────

/// Alternate passes and rider churn, advancing the clock by one period each
/// time.  Riders that get off go through the exit handler.
fn simulate(
    scan:      &mut ScanLoop<MemoryHost, ManualClock>,
    clock:     &ManualClock,
    populator: &mut Populator,
    passes:    u64,
    churn:     f64,
    observer:  &mut ScanOutputObserver<CsvWriter>,
) {
    for _ in 0..passes {
        let stats = scan.run_pass(observer);
        info!(
            "t={}: scanned {} tagged {} extended {} cleared {} broken {} vetoed {}",
            clock.now(),
            stats.scanned,
            stats.tagged,
            stats.extended,
            stats.cleared,
            stats.broken,
            stats.vetoed
        );

        for name in WORLDS {
            let exited: Vec<Vehicle> = match scan.host.worlds.iter_mut().find(|w| w.name() == name) {
                Some(world) => {
                    let ids = populator.churn(world, churn);
                    ids.into_iter().filter_map(|id| world.get(id).cloned()).collect()
                }
                None => Vec::new(),
            };
            for vehicle in exited {
                scan.vehicle_exited(name, &vehicle);
            }
        }

        clock.advance_secs(u64::from(scan.config.snapshot().scan.period_secs));
    }
}

// ── Live mode ─────────────────────────────────────────────────────────────────

/// Read admin commands from stdin on a background thread.
fn spawn_console(config: ConfigHandle, token: CancelToken) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            let words: Vec<&str> = line.split_whitespace().collect();
            if words.is_empty() {
                continue;
            }
            match AdminCommand::parse(&words) {
                Some(AdminCommand::Reload) => match command::reload(&config, NAME) {
                    Ok(message) => info!("{message}"),
                    Err(e) => warn!("reload failed: {e}"),
                },
                Some(AdminCommand::Stop) => {
                    info!("stopping after the current pass");
                    token.cancel();
                    break;
                }
                None => println!("{}", AdminCommand::usage(NAME)),
            }
        }
    });
}

// ── Reporting ─────────────────────────────────────────────────────────────────

fn report<C: Clock>(scan: &ScanLoop<MemoryHost, C>) {
    for world in &scan.host.worlds {
        info!(
            "{}: {} vehicles left, {} items dropped",
            world.name(),
            world.len(),
            world.dropped.len()
        );
    }
    info!("{} timers pending", scan.scanner.timers.len());
}
