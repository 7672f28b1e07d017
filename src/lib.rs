pub mod args;
pub mod data;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod util;
