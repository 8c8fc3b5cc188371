// This binary crate is intentionally minimal.
// All perceptron logic lives in the library (src/lib.rs and its modules).
// Run the demo with:
//   cargo run --example xor
fn main() {
    println!("perceptron-rs: a single-layer perceptron trained by online gradient descent.");
    println!("Run `cargo run --example xor` to see why one layer cannot solve XOR.");
}
