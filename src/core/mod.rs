pub mod etl;
pub mod lookup;
pub mod pipeline;
pub mod reader;
pub mod writer;

pub use crate::domain::model::{LookupResult, RouteReport, RouteRow};
pub use crate::domain::ports::{ConfigProvider, DistanceLookup, Pipeline, Storage};
pub use crate::utils::error::Result;
