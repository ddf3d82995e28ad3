//! Integration tests for module exports.
//!
//! Verify that all public modules and types are accessible via absolute paths.

/// Finite-difference estimators are accessible via absolute path.
#[test]
fn test_finite_difference_module_exports() {
    use newton_core::math::finite_difference::central_difference;
    use newton_core::math::finite_difference::central_difference_jacobian;
    use newton_core::math::finite_difference::derivative_fn;
    use newton_core::math::finite_difference::DEFAULT_STEP_SIZE;

    let _ = central_difference(|x: f64| x, 0.0, DEFAULT_STEP_SIZE);
    let _ = derivative_fn(|x: f64| x, DEFAULT_STEP_SIZE)(0.0);
    let _ = central_difference_jacobian(|x: &[f64]| x.to_vec(), &[0.0], DEFAULT_STEP_SIZE);
}

/// Solver types are accessible via absolute path.
#[test]
fn test_solvers_module_exports() {
    use newton_core::math::solvers::NewtonRaphsonSolver;
    use newton_core::math::solvers::NewtonSystemSolver;
    use newton_core::math::solvers::ScalarSolution;
    use newton_core::math::solvers::SolverConfig;
    use newton_core::math::solvers::SystemSolution;

    let config: SolverConfig<f64> = SolverConfig::default();
    let scalar = NewtonRaphsonSolver::new(config);
    let system = NewtonSystemSolver::new(SolverConfig::for_systems());

    let s: ScalarSolution<f64> = scalar.solve(|x: f64| x - 1.0, 0.0).unwrap();
    let v: SystemSolution = system.solve(|x: &[f64]| vec![x[0] - 1.0], vec![0.0]).unwrap();
    assert!((s.root - 1.0).abs() < 1e-6);
    assert!((v.root[0] - 1.0).abs() < 1e-6);
}

/// Error and trait re-exports are accessible via absolute path.
#[test]
fn test_types_and_traits_exports() {
    use newton_core::traits::Float;
    use newton_core::types::error::SolverError as FullPath;
    use newton_core::types::SolverError;

    let err: FullPath = SolverError::ZeroDerivative { x: 0.0 };
    assert!(!err.is_convergence_failure());

    fn generic_half<T: Float>(x: T) -> T {
        x / (T::one() + T::one())
    }
    assert_eq!(generic_half(4.0_f64), 2.0);
}

/// Dual number alias is exported when AD mode is enabled.
#[cfg(feature = "num-dual-mode")]
#[test]
fn test_dual_module_exports() {
    use newton_core::types::dual::DualNumber;

    let x = DualNumber::new(2.0, 1.0);
    let y = x * x;
    assert_eq!(y.re, 4.0);
    assert_eq!(y.eps, 4.0);
}
