pub mod geocode;
pub mod provider;

pub use geocode::ReverseGeocoder;
pub use provider::{
    GeolocationSource, LocationError, LocationOptions, LocationProvider, LocationState,
    UserLocation,
};
