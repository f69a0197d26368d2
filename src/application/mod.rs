// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflows built from the data and infra layers:
//
//   inspect — load the dataset, report size and class weights
//   encode  — show the one-hot layout of a single sample
//   check   — run every sample through a Burn DataLoader and
//             reject invalid targets
//
// No printing here (that's Layer 1); use cases return plain
// structs that the CLI formats.

pub mod inspect_use_case;

pub mod encode_use_case;

pub mod check_use_case;
