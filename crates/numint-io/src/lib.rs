//! Input parsing and result export for numint
//!
//! # Example
//!
//! ```rust
//! use numint_io::{export, parse_csv_str, ExportFormat};
//! use numint_quadrature::{AdaptiveIntegrator, Integrator};
//!
//! let dataset = parse_csv_str("x,y\n0,0\n1,1\n2,4\n3,9\n4,16\n").unwrap();
//! let result = AdaptiveIntegrator::default().integrate(&dataset).unwrap();
//!
//! let mut out = Vec::new();
//! export(&mut out, ExportFormat::Json, &dataset, &result).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("\"x_values\""));
//! ```

pub mod error;
pub mod export;
pub mod parser;

pub use error::{Error, Result};
pub use export::{export, text_report, to_json, write_csv, write_json, ExportFormat, Report};
pub use parser::{parse_csv, parse_csv_str, parse_manual_input, read_csv_path};
