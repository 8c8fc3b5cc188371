use perceptron_rs::{train_epochs, Perceptron};
use rand::prelude::*;

#[test]
fn single_layer_does_not_solve_xor() {
    let mut rng = StdRng::seed_from_u64(0xfeed);
    let mut model = Perceptron::with_rng(2, 1, 0.1, &mut rng).unwrap();

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let targets = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];

    train_epochs(&mut model, &inputs, &targets, 10000).unwrap();

    // XOR is not linearly separable: if all four predictions were within
    // 0.3 of their targets, the sign pattern around 0.5 would constitute
    // a linear separation of XOR. At least one must stay far off.
    let worst = inputs
        .iter()
        .zip(targets.iter())
        .map(|(input, target)| {
            let output = model.predict(input).unwrap();
            (output[0] - target[0]).abs()
        })
        .fold(0.0_f64, f64::max);

    assert!(
        worst > 0.3,
        "a single layer should not reach all four XOR targets (worst error {worst})"
    );
}

#[test]
fn delta_rule_learns_logical_or() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut model = Perceptron::with_rng(2, 1, 0.5, &mut rng).unwrap();

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let targets = vec![vec![0.0], vec![1.0], vec![1.0], vec![1.0]];

    train_epochs(&mut model, &inputs, &targets, 5000).unwrap();

    assert!(model.predict(&[0.0, 0.0]).unwrap()[0] < 0.2);
    assert!(model.predict(&[0.0, 1.0]).unwrap()[0] > 0.8);
    assert!(model.predict(&[1.0, 0.0]).unwrap()[0] > 0.8);
    assert!(model.predict(&[1.0, 1.0]).unwrap()[0] > 0.8);
}

#[test]
fn repeated_training_on_one_example_keeps_moving_the_weights() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut model = Perceptron::with_rng(2, 2, 0.1, &mut rng).unwrap();

    model.train(&[1.0, 0.5], &[1.0, 0.0]).unwrap();
    let after_first = model.weights.clone();
    model.train(&[1.0, 0.5], &[1.0, 0.0]).unwrap();

    assert_ne!(model.weights, after_first);
}

#[test]
fn save_and_load_round_trip_restores_the_model() {
    let mut rng = StdRng::seed_from_u64(99);
    let model = Perceptron::with_rng(3, 2, 0.25, &mut rng).unwrap();

    let path = std::env::temp_dir().join("perceptron_rs_roundtrip.json");
    let path = path.to_str().unwrap();

    model.save_json(path).unwrap();
    let restored = Perceptron::load_json(path).unwrap();
    std::fs::remove_file(path).ok();

    assert_eq!(restored.input_size, model.input_size);
    assert_eq!(restored.output_size, model.output_size);
    assert_eq!(restored.learning_rate, model.learning_rate);
    assert_eq!(restored.weights, model.weights);

    // The restored model predicts identically.
    let input = [0.1, -0.4, 0.9];
    assert_eq!(restored.predict(&input).unwrap(), model.predict(&input).unwrap());
}
