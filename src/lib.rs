//! Convert homework CSV files into JavaScript data modules.
//!
//! Every `<dir>/<name>.csv` inside a `312540006_hw*` directory becomes
//! `<dir>/<name>_data.js` holding `const irisData = [...];`.

pub mod config;
pub mod convert;
pub mod data;
pub mod error;
pub mod sample;

pub use config::Config;
pub use convert::convert_all;
pub use error::{ConvertError, Result};
