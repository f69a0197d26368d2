// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from the two input files to tensor batches:
//
//   alphabet.json          train.csv
//        │                     │
//        ▼                     ▼
//   JsonAlphabetLoader     CsvRowLoader ──► Preprocessor
//        │                     │            (join + lowercase)
//        ▼                     ▼
//   OneHotEncoder          labels / texts
//        └─────────┬───────────┘
//                  ▼
//            AgNewsDataset      → implements Burn's Dataset trait
//                  │
//                  ▼
//            CharBatcher        → stacks samples into tensors
//                  │
//                  ▼
//            DataLoader         → owned by the consumer (Burn)

/// Dataset paths and encoding parameters
pub mod config;

/// Reads the JSON alphabet and the CSV rows
pub mod loader;

/// Joins and case-folds text columns
pub mod preprocessor;

/// Reverse-order one-hot character encoding
pub mod encoder;

/// Implements Burn's Dataset trait for encoded samples
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;
