//! A two sensor altitude simulation.
//!
//! Filters both sensors of a seeded run, fuses them and writes the record and a statistics summary.

use altitude_estimate::estimators::fusion::combine;
use altitude_estimate::record::SimulationReport;
use altitude_estimate::simulation::{Simulation, SimulationConfig};

fn main() -> altitude_estimate::Result<()> {
    let config = SimulationConfig {
        flight_time: 120.,
        ..SimulationConfig::default()
    };
    let simulation = Simulation::new(config)?;
    let outcome = simulation.run_seeded(2024)?;

    println!(
        "Sensor variances P1 {:.4} P2 {:.4}, fused {:.4}",
        outcome.sensor_1.final_variance, outcome.sensor_2.final_variance, outcome.fused_variance
    );

    // Fuse the last estimates by hand
    let last = outcome.record.combined_estimated_y.len() - 1;
    let (y, p) = combine(
        outcome.sensor_1.estimates[last],
        outcome.sensor_1.final_variance,
        outcome.sensor_2.estimates[last],
        outcome.sensor_2.final_variance,
    )?;
    println!("Last fused estimate {:.3} (P {:.4}), truth {:.3}", y, p, outcome.record.signals_y[last]);

    let report = SimulationReport::from_record(&outcome.record)?;
    print!("{}", report.summary(simulation.config()));

    let dir = std::env::temp_dir();
    outcome.record.save_json(dir.join("simulation.json"))?;
    report.write_summary(dir.join("simulation_summary.txt"), simulation.config())?;
    println!("Saved to {}", dir.display());
    Ok(())
}
