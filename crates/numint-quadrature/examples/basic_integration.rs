//! Basic sampled-data integration example
//!
//! Run with `RUST_LOG=numint_quadrature=debug` to see partition and rule
//! decisions.

use numint_core::{Dataset, ScalarBackend};
use numint_quadrature::{
    compare_methods, AdaptiveIntegrator, IntegrationParameters, Integrator, Rule,
};
use std::f64::consts::PI;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Sampled-Data Integration Examples ===\n");

    let integrator = AdaptiveIntegrator::new(ScalarBackend::new());

    // Example 1: uniform grid, Simpson 1/3 applies to the whole range
    println!("1. y = x^2 on [0, 4], five samples");
    let parabola = Dataset::from_xy(&[0.0, 1.0, 2.0, 3.0, 4.0], &[0.0, 1.0, 4.0, 9.0, 16.0])?;
    let result = integrator.integrate(&parabola)?;
    println!("{result}");
    for line in result.steps()[0].explain() {
        println!("    {line}");
    }

    // Example 2: mixed spacing splits into several partitions
    println!("\n2. y = exp(x) on a grid with three spacing regimes");
    let xs = [0.0, 0.25, 0.5, 0.75, 1.0, 1.5, 2.0, 2.5, 2.6];
    let ys: Vec<f64> = xs.iter().map(|x: &f64| x.exp()).collect();
    let mixed = Dataset::from_xy(&xs, &ys)?;
    let result = integrator.integrate(&mixed)?;
    println!("{result}");
    println!("  Exact: {:.10}", 2.6f64.exp() - 1.0);

    // Example 3: forcing a rule
    println!("\n3. Forced Simpson 3/8 on sin(x), 10 intervals");
    let sine = Dataset::from_fn(f64::sin, 0.0, PI, 10)?;
    let forced = AdaptiveIntegrator::with_parameters(
        ScalarBackend::new(),
        IntegrationParameters::fixed(Rule::Simpson38),
    )?;
    let result = forced.integrate(&sine)?;
    println!("  {} = {:.10} (error <= {:.3e})", result.method_name(), result.value(), result.error_estimate());

    // Example 4: every method side by side
    println!("\n4. Method comparison");
    print!("{}", compare_methods(&sine));

    Ok(())
}
