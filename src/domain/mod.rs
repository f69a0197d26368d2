// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits describing the dataset:
// the alphabet, a labelled text row, the encoded one-hot
// matrix and per-class weights.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Everything Burn-specific (Dataset, Batcher, tensors) lives
// in Layer 4 and is built on top of these types.

// Ordered character set with O(1) position lookup
pub mod alphabet;

// One (label, text) row from the CSV file
pub mod labeled_text;

// Fixed-shape binary matrix produced by the encoder
pub mod one_hot;

// Inverse-frequency weight for one class
pub mod class_weight;

// Core abstractions (traits) that other layers implement
pub mod traits;
