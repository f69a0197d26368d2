// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting file output that doesn't belong to the data
// pipeline itself:
//
//   report.rs — writes the dataset config (JSON) and the
//               per-class weights (CSV) produced by `inspect`,
//               and reads the config back.

/// Dataset config and class-weight report files
pub mod report;
