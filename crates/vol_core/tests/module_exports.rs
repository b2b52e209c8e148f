//! Integration tests for module exports.
//!
//! Verifies that the public modules and types are correctly exported and
//! accessible via absolute paths.

/// Test that solver types are accessible via absolute path.
#[test]
fn test_solvers_module_exports() {
    use vol_core::math::solvers::BrentSolver;
    use vol_core::math::solvers::RootResult;
    use vol_core::math::solvers::SolverConfig;

    let solver = BrentSolver::new(SolverConfig::default());
    let result: RootResult<f64> = solver.find_root(|x| x - 1.0, 0.0, 2.0).unwrap();
    assert!(result.converged);
}

/// Test that error types are accessible both via `types` and `types::error`.
#[test]
fn test_types_module_exports() {
    use vol_core::types::error::SolverError as ViaModule;
    use vol_core::types::SolverError;

    let err = SolverError::NoBracket { a: 0.0, b: 1.0 };
    let via_module: ViaModule = err.clone();
    assert_eq!(err, via_module);
}

/// Test that a search driven through the re-exported surface behaves.
#[test]
fn test_end_to_end_search() {
    use vol_core::math::solvers::{BrentSolver, SolverConfig};
    use vol_core::types::SolverError;

    let solver = BrentSolver::new(SolverConfig::new(1e-12, 1_000));

    // A valid bracket converges
    let result = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
    assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);

    // An invalid bracket errors
    let err = solver.find_root(|x: f64| x * x + 1.0, -1.0, 1.0);
    assert!(matches!(err, Err(SolverError::NoBracket { .. })));
}
