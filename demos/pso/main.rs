use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use fastrand::Rng;
use swarmkit::algorithms::particles::TrackingSwarmObserver;
use swarmkit::prelude::*;
use swarmkit::test_functions::Zakharov;

fn main() -> Result<(), Box<dyn Error>> {
    // Create and seed a random number generator
    let rng = Rng::with_seed(0);

    // Create a tracker to record swarm history
    let tracker = TrackingSwarmObserver::build();

    // Minimize the Zakharov function with 20 particles for 100 iterations
    let mut engine: Engine<PSO, SwarmStatus> = Engine::new(PSO::new(rng)).setup(|e| {
        e.configure(|c| {
            c.with_x0([0.8, 1.2])
                .with_bounds([(-10.0, 10.0), (-10.0, 10.0)])
                .with_n_particles(20)
                .with_mode(OptimizeMode::Minimize)
                .with_parameter_names(["x", "y"])
        })
        .with_observer(tracker.clone())
        .with_max_steps(100)
    });

    // Run the particle swarm optimizer
    engine.process(&Zakharov)?;

    println!("{}", engine.result);

    // Export the results to a Python .pkl file to visualize via matplotlib
    let mut writer = BufWriter::new(File::create(Path::new("data.pkl"))?);
    serde_pickle::to_writer(&mut writer, &*tracker.read(), Default::default())?;
    Ok(())
}
