//! Pizza Stub Loadgen - login-and-order load scenario.
//!
//! Replays a diner session (home, login, menu, franchises, profile, order,
//! verify) under a ramping virtual-user profile. Virtual-user scheduling,
//! ramp-up arithmetic, and metrics are Goose's job; this binary supplies the
//! per-iteration step sequence and the profile defaults.
//!
//! # Usage
//!
//! ```bash
//! # Against a local stub with the built-in profile (15 peak users, 150s)
//! pizza-loadgen
//!
//! # Against a deployed service, overriding the defaults
//! pizza-loadgen --host https://pizza-service.example.com -u50 -r10 -t5m \
//!     --report-file load-test-report.html
//! ```
//!
//! Scenario credentials come from `PIZZA_LOADGEN_EMAIL` /
//! `PIZZA_LOADGEN_PASSWORD` (default: the stub's standard diner).

#![cfg_attr(not(test), forbid(unsafe_code))]

use goose::prelude::*;

mod profile;
mod scenario;

use profile::RampProfile;

#[tokio::main]
async fn main() -> Result<(), GooseError> {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    let ramp = RampProfile::login_and_order();
    let startup_time = ramp.time_to_peak().as_secs().to_string();
    let run_time = ramp.total_duration().as_secs().to_string();

    let _metrics = GooseAttack::initialize()?
        .register_scenario(scenario::login_and_order())
        // Defaults mirror the original staged profile; any goose flag
        // overrides them.
        .set_default(GooseDefault::Host, "http://127.0.0.1:3001")?
        .set_default(GooseDefault::Users, ramp.peak_users())?
        .set_default(GooseDefault::StartupTime, startup_time.as_str())?
        .set_default(GooseDefault::RunTime, run_time.as_str())?
        .execute()
        .await?;

    Ok(())
}
