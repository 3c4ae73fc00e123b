mod geolocate;
mod pipeline;
mod resolve;
mod summary;
mod urlencode;

pub use geolocate::{
    locate_with_timeout, CachedLocationProvider, DeniedLocationProvider, GeoError,
    LocationProvider, StaticLocationProvider,
};
pub use pipeline::{SearchOutcome, SearchPipeline, SessionContext};
pub use resolve::{resolve, ResolveError};
pub use summary::confirmation_summary;
pub use urlencode::results_query_string;
