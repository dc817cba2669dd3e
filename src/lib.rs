//! # carsize 🚗📏
//!
//! Score a fixed linear "big car / small car" boundary against labeled 2-D point data.
//!
//! Raw `x,y,class` files are min-max normalized into the unit square, then every point
//! is classified against the line `y = -x + 1` and tallied into a confusion matrix.
//!
//! ## Features
//! - Tolerant ingestion: blank and malformed lines are skipped
//! - Per-axis min-max normalization
//! - Strict-inequality decision rules for raw and normalized coordinates
//! - Confusion matrix with accuracy, precision, recall and F1
//! - Text reports fanned out to any number of sinks, plus gnuplot-ready matrix files
//! - Benchmarkable with [Criterion](https://crates.io/crates/criterion)
//!
//! ## Example
//! ```rust
//! use carsize::{evaluate, normalize, read_points, Rule};
//!
//! let raw = read_points("0,0,0\n10,10,1\n5,5,0\nnot,a,row\n".as_bytes()).unwrap();
//! let cm = evaluate(&normalize(&raw), Rule::Normalized);
//! assert_eq!(cm.total(), 3);
//! println!("Accuracy: {:.4}, F1: {:.4}", cm.accuracy(), cm.f1_score());
//! ```

pub mod classify;
pub mod error;
pub mod evaluate;
pub mod ingest;
pub mod normalize;
pub mod pipeline;
pub mod point;
pub mod report;

pub use classify::Rule;
pub use error::{Error, Result};
pub use evaluate::{ConfusionMatrix, Metrics, evaluate};
pub use ingest::{parse_record, read_dataset, read_points};
pub use normalize::{AxisBounds, Bounds, normalize};
pub use point::{Dataset, Label, Point};
pub use report::{Reporter, format_results, write_dataset, write_matrix_data};
