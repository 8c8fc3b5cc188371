use perceptron_rs::{train_epoch, Perceptron};

fn main() {
    let mut model = Perceptron::new(2, 1, 0.1).expect("valid dimensions");

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let targets = vec![
        vec![0.0],
        vec![1.0],
        vec![1.0],
        vec![0.0],
    ];

    let epochs = 10000;

    for epoch in 0..epochs {
        let loss = train_epoch(&mut model, &inputs, &targets).expect("well-formed dataset");
        if epoch % 1000 == 0 {
            println!("Epoch {epoch}: loss = {loss:.6}");
        }
    }

    // XOR is not linearly separable, so a single layer cannot land all
    // four predictions near their targets.
    for input in &inputs {
        let output = model.predict(input).expect("well-formed input");
        println!("Input: {:?} -> Output: {:.4}", input, output[0]);
    }
}
