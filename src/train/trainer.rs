use crate::error::PerceptronError;
use crate::layers::perceptron::Perceptron;
use crate::loss::mse::MseLoss;

/// One full pass over the dataset in the given (fixed) order, performing
/// one online update per example. Returns the mean MSE measured on each
/// example *before* its update.
pub fn train_epoch(
    model: &mut Perceptron,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
) -> Result<f64, PerceptronError> {
    check_dataset(inputs, targets)?;

    let mut total_loss = 0.0;

    for (input, target) in inputs.iter().zip(targets.iter()) {
        let predicted = model.predict(input)?;
        total_loss += MseLoss::loss(&predicted, target);
        model.train(input, target)?;
    }

    Ok(total_loss / inputs.len() as f64)
}

/// Runs `epochs` passes over the dataset and returns the mean loss of the
/// last completed epoch. Sample order is the dataset order, every epoch.
pub fn train_epochs(
    model: &mut Perceptron,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    epochs: usize,
) -> Result<f64, PerceptronError> {
    check_dataset(inputs, targets)?;

    let mut last_loss = 0.0;
    for _ in 0..epochs {
        last_loss = train_epoch(model, inputs, targets)?;
    }

    Ok(last_loss)
}

fn check_dataset(inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<(), PerceptronError> {
    if inputs.is_empty() {
        return Err(PerceptronError::InvalidArgument(
            "training set must not be empty".to_string(),
        ));
    }
    if inputs.len() != targets.len() {
        return Err(PerceptronError::InvalidArgument(format!(
            "inputs and targets must have equal length ({} vs {})",
            inputs.len(),
            targets.len()
        )));
    }
    Ok(())
}
