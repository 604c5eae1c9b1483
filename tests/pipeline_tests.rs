use nalgebra::Point2;
use strainpath::basis;
use strainpath::dataset::{self, BOX_A1_SCALE};
use strainpath::error::StrainError;
use strainpath::geom::{BoxEdges, Configuration};
use strainpath::input;
use strainpath::stages::{Stage, StageSequence};
use strainpath::strain;
use strainpath::tensor::Tensor;

// Tolerance for comparing tensor entries built from measured values.
const TOL: f64 = 1e-9;

fn triangle2(points: [[f64; 2]; 3]) -> Configuration {
    Configuration::Triangle2([
        Point2::new(points[0][0], points[0][1]),
        Point2::new(points[1][0], points[1][1]),
        Point2::new(points[2][0], points[2][1]),
    ])
}

#[test]
fn strain_is_symmetric_for_every_pathway_transition() {
    let analysis = dataset::builtin("pathway").unwrap().analyze().unwrap();
    for transition in &analysis.transitions {
        assert!(
            transition.e.is_symmetric(TOL),
            "E for {} -> {} is not symmetric",
            transition.from,
            transition.to
        );
    }
    assert!(analysis.total.e.is_symmetric(TOL));
}

#[test]
fn identical_configurations_give_identity_and_zero_strain() {
    let config = triangle2([[0.0, 1.0], [0.0, 0.0], [1.0, 0.0]]);
    let sequence = input::pair_sequence(config.clone(), config).unwrap();
    let analysis = sequence.analyze().unwrap();
    assert!(analysis
        .total
        .f
        .abs_diff_eq(&Tensor::identity(2).unwrap(), TOL));
    let n = analysis.total.e.dim();
    for i in 0..n {
        for j in 0..n {
            assert!(analysis.total.e.get(i, j).abs() < TOL);
        }
    }
}

#[test]
fn forward_and_backward_gradients_invert_each_other() {
    let a = basis::build(&triangle2([[0.1, 2.3], [0.4, 0.2], [2.9, 0.7]])).unwrap();
    let b = basis::build(&triangle2([[0.3, 2.9], [0.5, 0.1], [3.4, 1.2]])).unwrap();
    let f_ab = strain::deformation_gradient(&a, &b).unwrap();
    let f_ba = strain::deformation_gradient(&b, &a).unwrap();
    let product = f_ab.mul(&f_ba).unwrap();
    assert!(product.abs_diff_eq(&Tensor::identity(2).unwrap(), TOL));
}

#[test]
fn four_stage_composition_equals_direct_solve() {
    let sequence = dataset::builtin("boxes").unwrap();
    let analysis = sequence.analyze().unwrap();
    assert_eq!(analysis.transitions.len(), 3);

    let first = basis::build(&sequence.stages()[0].configuration).unwrap();
    let last = basis::build(&sequence.stages()[3].configuration).unwrap();
    let direct = strain::deformation_gradient(&first, &last).unwrap();
    assert!(
        analysis.total.f.abs_diff_eq(&direct, TOL),
        "stage-wise composition disagrees with the direct first-to-last solve"
    );
}

#[test]
fn rescaled_box_stage_gives_diagonal_gradient_and_strain() {
    let a1 = Configuration::Box(
        BoxEdges::new(398.0, 409.0, 391.0, 399.0).rescaled(BOX_A1_SCALE),
    );
    let a2 = Configuration::Box(BoxEdges::new(363.0, 353.0, 364.0, 360.0));

    let reference = basis::build(&a1).unwrap();
    assert!((reference.get(0, 0) - 398.5 * BOX_A1_SCALE).abs() < TOL);
    assert!((reference.get(1, 1) - 400.0 * BOX_A1_SCALE).abs() < TOL);

    let deformed = basis::build(&a2).unwrap();
    let f = strain::deformation_gradient(&reference, &deformed).unwrap();
    assert!((f.get(0, 0) - 361.5 / (398.5 * BOX_A1_SCALE)).abs() < TOL);
    assert!((f.get(1, 1) - 358.5 / (400.0 * BOX_A1_SCALE)).abs() < TOL);
    assert_eq!(f.get(0, 1), 0.0);
    assert_eq!(f.get(1, 0), 0.0);

    // A diagonal F gives a diagonal E with exactly zero off-diagonals.
    let e = strain::green_lagrange(&f);
    assert_eq!(e.get(0, 1), 0.0);
    assert_eq!(e.get(1, 0), 0.0);
}

#[test]
fn pure_vertical_stretch_is_exact() {
    let reference = triangle2([[0.0, 1.0], [0.0, 0.0], [1.0, 0.0]]);
    let deformed = triangle2([[0.0, 2.0], [0.0, 0.0], [1.0, 0.0]]);
    let analysis = input::pair_sequence(reference, deformed)
        .unwrap()
        .analyze()
        .unwrap();

    let f = &analysis.total.f;
    assert_eq!(f.get(0, 0), 1.0);
    assert_eq!(f.get(0, 1), 0.0);
    assert_eq!(f.get(1, 0), 0.0);
    assert_eq!(f.get(1, 1), 2.0);

    let e = &analysis.total.e;
    assert_eq!(e.get(0, 0), 0.0);
    assert_eq!(e.get(0, 1), 0.0);
    assert_eq!(e.get(1, 0), 0.0);
    assert_eq!(e.get(1, 1), 1.5);
}

#[test]
fn collinear_reference_points_never_return_a_matrix() {
    let collinear = triangle2([[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]);
    let deformed = triangle2([[0.0, 1.0], [0.0, 0.0], [1.0, 0.0]]);
    let result = input::pair_sequence(collinear, deformed)
        .unwrap()
        .analyze();
    assert!(matches!(
        result,
        Err(StrainError::SingularBasis { .. }) | Err(StrainError::InvalidConfiguration { .. })
    ));
}

#[test]
fn wrong_coordinate_count_stops_before_any_computation() {
    for count in [11, 13] {
        let values = vec![1.0; count];
        let result = input::configurations_from_coords(&values);
        assert!(matches!(
            result,
            Err(StrainError::InputCountMismatch { expected: 12, .. })
        ));
    }
}

#[test]
fn reversed_sequence_gives_the_inverse_deformation() {
    let forward = StageSequence::new(vec![
        Stage::new("A", triangle2([[0.0, 1.0], [0.0, 0.0], [1.0, 0.0]])),
        Stage::new("B", triangle2([[0.0, 2.0], [0.0, 0.0], [1.0, 0.0]])),
        Stage::new("C", triangle2([[0.0, 2.0], [0.0, 0.0], [3.0, 0.0]])),
    ])
    .unwrap();
    let backward = StageSequence::new(vec![
        Stage::new("C", triangle2([[0.0, 2.0], [0.0, 0.0], [3.0, 0.0]])),
        Stage::new("B", triangle2([[0.0, 2.0], [0.0, 0.0], [1.0, 0.0]])),
        Stage::new("A", triangle2([[0.0, 1.0], [0.0, 0.0], [1.0, 0.0]])),
    ])
    .unwrap();

    let f_fwd = forward.analyze().unwrap().total.f;
    let f_bwd = backward.analyze().unwrap().total.f;
    let product = f_fwd.mul(&f_bwd).unwrap();
    assert!(product.abs_diff_eq(&Tensor::identity(2).unwrap(), TOL));
}
