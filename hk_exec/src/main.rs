//! Main housekeeping executable entry point.
//!
//! # Architecture
//!
//! The general execution methodology consists of:
//!
//!     - Initialise all modules
//!     - Main loop:
//!         - Sensor acquisition
//!         - Telecommand processing and handling
//!         - HK processing:
//!             - Table update
//!             - Limit monitoring
//!         - FDIR assessment
//!         - Archiving
//!         - Report generation
//!
//! # Modules
//!
//! All modules (e.g. `hk`) shall meet the following requirements:
//!     1. Provide a public struct implementing the `util::module::State` trait.
//!

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, info, warn};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};
use color_eyre::{Report, eyre::WrapErr};
use structopt::StructOpt;

// Internal
use hk_lib::{
    data_store::DataStore,
    fdir,
    params::HkExecParams,
    report::{self, ReportScheduler},
    sensor_sim::SensorSim,
    tc_processor,
    tm_sender::TmSender,
};
use util::{
    archive::Archived,
    module::State,
    logger::{logger_init, LevelFilter},
    session::{self, Session},
    script_interpreter::{ScriptInterpreter, PendingTcs},
};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Debug, StructOpt)]
#[structopt(name = "hk_exec", about = "Spacecraft housekeeping telemetry executable")]
struct Opts {
    /// Uplink script to execute, the exec stops at the end of the script
    #[structopt(parse(from_os_str))]
    script: Option<PathBuf>,

    /// Stop after this many seconds, runs until stopped if not given
    #[structopt(long)]
    duration_s: Option<f64>,

    /// Minimum log level, must be at least `info`
    #[structopt(long, default_value = "debug")]
    log_level: LevelFilter,
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {

    color_eyre::install()?;

    let opts = Opts::from_args();

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new(
        "hk_exec",
        "sessions"
    ).wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(opts.log_level, &session)
        .wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Housekeeping Executable\n");
    info!("Session directory: {:?}\n", session.session_root);
    debug!("CLI options: {:?}", opts);

    // ---- LOAD PARAMETERS ----

    let exec_params: HkExecParams = util::params::load(
        "hk_exec.toml"
    ).wrap_err("Could not load exec params")?;

    session.save("params/hk_exec.json", &exec_params);

    info!("Exec parameters loaded");

    // ---- INITIALISE TC SOURCE ----

    let mut script = match opts.script {
        Some(ref path) => {
            info!("Loading script from {:?}", path);

            let si = ScriptInterpreter::new(path)
                .wrap_err("Failed to load script")?;

            info!(
                "Loaded script lasts {:.02} s and contains {} TCs\n",
                si.get_duration(),
                si.get_num_tcs()
            );

            Some(si)
        },
        None => {
            info!("No script provided, no TCs will be executed\n");
            None
        }
    };

    // ---- INITIALISE DATASTORE ----

    info!("Initialising modules...");

    let mut ds = DataStore {
        report_scheduler: ReportScheduler::new(exec_params.report_interval_ms),
        ..DataStore::default()
    };

    // ---- INITIALISE MODULES ----

    ds.hk.init("hk.toml", &session)
        .wrap_err("Failed to initialise HK")?;
    info!("HK init complete");

    let sensor_sim = SensorSim::new(exec_params.sensors.clone());
    info!("SensorSim init complete");

    let mut tm_sender = TmSender::with_archive(&session, exec_params.max_packet_len)
        .wrap_err("Failed to initialise TmSender")?;
    info!("TmSender init complete");

    info!("Module initialisation complete\n");

    // ---- MAIN LOOP ----

    let cycle_period = Duration::from_secs_f64(exec_params.cycle_period_s);

    info!("Begining main loop\n");

    loop {

        // Get cycle start time
        let cycle_start_instant = Instant::now();

        // Clear items that need wiping at the start of the cycle
        ds.cycle_start(session::get_elapsed_seconds());

        // ---- DATA INPUT ----

        ds.hk_input.samples = sensor_sim.sample(ds.sim_time_s, ds.time_ms);

        // ---- TELECOMMAND PROCESSING ----

        if let Some(ref mut si) = script {
            match si.get_pending_tcs() {
                PendingTcs::None => (),
                PendingTcs::Some(tc_vec) => {
                    for tc in tc_vec.iter() {
                        tc_processor::exec(&mut ds, tc);
                    }
                }
                // Exit if end of script reached
                PendingTcs::EndOfScript => {
                    info!("End of TC script reached, stopping");
                    break
                }
            }
        }

        // ---- HK PROCESSING ----

        match ds.hk.proc(&ds.hk_input) {
            Ok(((), r)) => ds.hk_status_rpt = r,
            Err(e) => warn!("Error during HK processing: {}", e)
        };

        // ---- FDIR ----

        fdir::assess(&mut ds);

        // ---- WRITE ARCHIVES ----

        if let Err(e) = ds.hk.write() {
            warn!("Could not write HK archive: {}", e);
        }

        // ---- TELEMETRY ----

        let periodic = ds.report_scheduler.run_periodic(ds.time_ms);

        if periodic || ds.report_requested {
            ds.report_requested = false;

            if let Err(e) = report::generate(&ds, &ds.hk, &mut tm_sender) {
                warn!("Could not send HK report: {}", e);
            }
        }

        // ---- CYCLE MANAGEMENT ----

        if let Some(duration_s) = opts.duration_s {
            if ds.sim_time_s >= duration_s {
                info!("Requested duration of {:.02} s reached, stopping", duration_s);
                break
            }
        }

        let cycle_dur = Instant::now() - cycle_start_instant;

        // Get sleep duration
        match cycle_period.checked_sub(cycle_dur) {
            Some(d) => thread::sleep(d),
            None => warn!(
                "Cycle overran by {:.06} s",
                cycle_dur.as_secs_f64() - cycle_period.as_secs_f64()
            )
        }

        // Increment cycle counter
        ds.num_cycles += 1;
    }

    // ---- SHUTDOWN ----

    info!(
        "Executed {} cycles, sent {} packets",
        ds.num_cycles,
        tm_sender.num_packets()
    );
    debug!(
        "Final HK status: {}",
        serde_json::to_string(ds.hk.report()).wrap_err("Could not serialise HK status")?
    );

    info!("End of execution");

    Ok(())
}
