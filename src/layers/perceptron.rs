use rand::prelude::*;
use serde::{Serialize, Deserialize};

use crate::activation::sigmoid::sigmoid;
use crate::error::PerceptronError;
use crate::math::matrix::Matrix;

/// A single layer of sigmoid units trained online by the delta rule.
///
/// `weights` has shape `(input_size + 1) × output_size`: rows
/// `0..input_size` hold the weight from input feature `i` to output unit
/// `j`, and the final row holds one bias weight per output unit (a weight
/// on an implicit constant input of 1). The shape is an invariant — it is
/// fixed at construction and `train` only overwrites entries.
///
/// `train` takes `&mut self`, so the borrow checker already rules out
/// unsynchronized concurrent updates to one instance. To share a model
/// across threads, either give each thread its own instance or serialize
/// access externally (e.g. a `Mutex`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Perceptron {
    pub input_size: usize,
    pub output_size: usize,
    pub learning_rate: f64,
    pub weights: Matrix,
}

impl Perceptron {
    /// Builds a layer with every weight (bias row included) drawn
    /// uniformly from [-1, 1).
    pub fn new(
        input_size: usize,
        output_size: usize,
        learning_rate: f64,
    ) -> Result<Perceptron, PerceptronError> {
        Perceptron::with_rng(input_size, output_size, learning_rate, &mut rand::thread_rng())
    }

    /// Same as `new`, but initializes from a caller-supplied generator so
    /// tests can seed a `StdRng` for reproducible runs.
    pub fn with_rng<R: Rng>(
        input_size: usize,
        output_size: usize,
        learning_rate: f64,
        rng: &mut R,
    ) -> Result<Perceptron, PerceptronError> {
        if input_size == 0 {
            return Err(PerceptronError::InvalidArgument(
                "input_size must be at least 1".to_string(),
            ));
        }
        if output_size == 0 {
            return Err(PerceptronError::InvalidArgument(
                "output_size must be at least 1".to_string(),
            ));
        }

        Ok(Perceptron {
            input_size,
            output_size,
            learning_rate,
            weights: Matrix::random_with(input_size + 1, output_size, rng),
        })
    }

    /// Forward pass: for each output unit `j`, the weighted sum of the
    /// inputs plus the bias weight, squashed through the sigmoid.
    /// Does not mutate the weights.
    pub fn predict(&self, inputs: &[f64]) -> Result<Vec<f64>, PerceptronError> {
        if inputs.len() != self.input_size {
            return Err(PerceptronError::DimensionMismatch {
                what: "inputs",
                expected: self.input_size,
                got: inputs.len(),
            });
        }

        let outputs = (0..self.output_size)
            .map(|j| {
                let mut sum = 0.0;
                for (i, input) in inputs.iter().enumerate() {
                    sum += input * self.weights.data[i][j];
                }
                // Bias: a weight on an implicit constant input of 1.
                sum += self.weights.data[self.input_size][j];
                sigmoid(sum)
            })
            .collect();

        Ok(outputs)
    }

    /// One online gradient step on a single labeled example.
    ///
    /// Computes `error_j = targets[j] - predicted[j]` and applies the
    /// delta rule in place:
    ///
    /// ```text
    /// w[i][j]          += learning_rate * error_j * inputs[i]
    /// w[input_size][j] += learning_rate * error_j          (bias)
    /// ```
    ///
    /// The rule uses the raw error, without the sigmoid-derivative factor
    /// a full gradient derivation would include; that is the intended
    /// behavior, not an omission. Batching and epoch scheduling are the
    /// caller's concern.
    pub fn train(&mut self, inputs: &[f64], targets: &[f64]) -> Result<(), PerceptronError> {
        if targets.len() != self.output_size {
            return Err(PerceptronError::DimensionMismatch {
                what: "targets",
                expected: self.output_size,
                got: targets.len(),
            });
        }

        let predicted = self.predict(inputs)?;

        for j in 0..self.output_size {
            let error = targets[j] - predicted[j];
            let step = self.learning_rate * error;

            for (i, input) in inputs.iter().enumerate() {
                self.weights.data[i][j] += step * input;
            }
            self.weights.data[self.input_size][j] += step;
        }

        Ok(())
    }

    /// Serializes the model (dimensions, learning rate, weights) to a
    /// pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a model from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<Perceptron> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
