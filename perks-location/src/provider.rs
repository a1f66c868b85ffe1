use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use perks_core::geo::Coordinates;
use serde::Serialize;
use thiserror::Error;
use tokio::time::timeout;

/// Why a location fix could not be produced. The message on each kind is
/// user-facing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Location access denied. Please enable location services to find nearby offers.")]
    PermissionDenied,

    #[error("Location information is unavailable.")]
    PositionUnavailable,

    #[error("Location request timed out.")]
    Timeout,

    #[error("Location is not supported on this device.")]
    Unsupported,

    #[error("An unknown error occurred while getting location.")]
    Unknown,
}

/// A located user, optionally annotated with a resolved place name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub name: Option<String>,
}

impl UserLocation {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Options forwarded to the positioning backend.
#[derive(Debug, Clone, Copy)]
pub struct LocationOptions {
    pub high_accuracy: bool,
    /// How long to wait for the backend before giving up.
    pub timeout: Duration,
    /// A previous fix no older than this is reused without asking the
    /// backend again.
    pub maximum_age: Duration,
}

impl Default for LocationOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::from_secs(300),
        }
    }
}

/// Port over the platform's positioning capability.
#[async_trait]
pub trait GeolocationSource: Send + Sync {
    async fn current_position(&self, high_accuracy: bool) -> Result<Coordinates, LocationError>;
}

/// Acquisition lifecycle as observed by the presentation layer.
///
/// `Failed` is recoverable: re-invoking acquisition moves back through
/// `Loading`. Concurrent acquisitions are independent in-flight requests;
/// no de-duplication is performed.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationState {
    Idle,
    Loading,
    Ready(UserLocation),
    Failed(LocationError),
}

/// Acquires the user's position from a [`GeolocationSource`], enforcing a
/// timeout and reusing a bounded-age cached fix.
pub struct LocationProvider {
    source: Option<Arc<dyn GeolocationSource>>,
    options: LocationOptions,
    last_fix: Mutex<Option<(Instant, Coordinates)>>,
}

impl LocationProvider {
    pub fn new(source: Arc<dyn GeolocationSource>) -> Self {
        Self::with_options(source, LocationOptions::default())
    }

    pub fn with_options(source: Arc<dyn GeolocationSource>, options: LocationOptions) -> Self {
        Self {
            source: Some(source),
            options,
            last_fix: Mutex::new(None),
        }
    }

    /// A provider on a platform without any positioning capability; every
    /// acquisition fails immediately with [`LocationError::Unsupported`].
    pub fn unsupported() -> Self {
        Self {
            source: None,
            options: LocationOptions::default(),
            last_fix: Mutex::new(None),
        }
    }

    /// Obtain the user's coordinates.
    pub async fn current_location(&self) -> Result<Coordinates, LocationError> {
        let source = self.source.as_ref().ok_or(LocationError::Unsupported)?;

        if let Some(fix) = self.cached_fix() {
            tracing::debug!("reusing cached location fix");
            return Ok(fix);
        }

        let position = timeout(
            self.options.timeout,
            source.current_position(self.options.high_accuracy),
        )
        .await
        .map_err(|_| LocationError::Timeout)??;

        let mut last_fix = self.last_fix.lock().unwrap_or_else(|e| e.into_inner());
        *last_fix = Some((Instant::now(), position));
        Ok(position)
    }

    fn cached_fix(&self) -> Option<Coordinates> {
        let last_fix = self.last_fix.lock().unwrap_or_else(|e| e.into_inner());
        match *last_fix {
            Some((at, position)) if at.elapsed() <= self.options.maximum_age => Some(position),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubSource {
        result: Result<Coordinates, LocationError>,
        delay: Duration,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn ok(latitude: f64, longitude: f64) -> Self {
            Self {
                result: Ok(Coordinates::new(latitude, longitude)),
                delay: Duration::ZERO,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(error: LocationError) -> Self {
            Self {
                result: Err(error),
                delay: Duration::ZERO,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl GeolocationSource for StubSource {
        async fn current_position(
            &self,
            _high_accuracy: bool,
        ) -> Result<Coordinates, LocationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn test_successful_acquisition() {
        let provider = LocationProvider::new(Arc::new(StubSource::ok(28.6139, 77.2090)));
        let position = provider.current_location().await.expect("fix");
        assert_eq!(position.latitude, 28.6139);
    }

    #[tokio::test]
    async fn test_permission_denied_maps_through() {
        let provider =
            LocationProvider::new(Arc::new(StubSource::failing(LocationError::PermissionDenied)));
        let err = provider.current_location().await.unwrap_err();
        assert_eq!(err, LocationError::PermissionDenied);
        assert!(err.to_string().contains("Location access denied"));

        // A retry re-invokes the same operation and fails the same way.
        let err = provider.current_location().await.unwrap_err();
        assert_eq!(err, LocationError::PermissionDenied);
    }

    #[tokio::test]
    async fn test_slow_source_times_out() {
        let mut source = StubSource::ok(0.0, 0.0);
        source.delay = Duration::from_millis(100);
        let provider = LocationProvider::with_options(
            Arc::new(source),
            LocationOptions {
                timeout: Duration::from_millis(10),
                ..LocationOptions::default()
            },
        );

        let err = provider.current_location().await.unwrap_err();
        assert_eq!(err, LocationError::Timeout);
    }

    #[tokio::test]
    async fn test_no_capability_is_unsupported() {
        let provider = LocationProvider::unsupported();
        let err = provider.current_location().await.unwrap_err();
        assert_eq!(err, LocationError::Unsupported);
    }

    #[tokio::test]
    async fn test_fresh_fix_is_reused() {
        let source = Arc::new(StubSource::ok(19.0760, 72.8777));
        let provider = LocationProvider::new(source.clone());

        provider.current_location().await.expect("first fix");
        provider.current_location().await.expect("cached fix");
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_acquisition_state_machine() {
        let provider = LocationProvider::new(Arc::new(StubSource::failing(
            LocationError::PositionUnavailable,
        )));

        let mut state = LocationState::Idle;
        state = match state {
            LocationState::Idle | LocationState::Failed(_) => LocationState::Loading,
            other => other,
        };
        assert_eq!(state, LocationState::Loading);

        state = match provider.current_location().await {
            Ok(position) => LocationState::Ready(UserLocation {
                latitude: position.latitude,
                longitude: position.longitude,
                name: None,
            }),
            Err(error) => LocationState::Failed(error),
        };
        assert_eq!(
            state,
            LocationState::Failed(LocationError::PositionUnavailable)
        );

        // Failed is recoverable: the caller may start over.
        state = match state {
            LocationState::Idle | LocationState::Failed(_) => LocationState::Loading,
            other => other,
        };
        assert_eq!(state, LocationState::Loading);
    }

    #[tokio::test]
    async fn test_stale_fix_asks_backend_again() {
        let source = Arc::new(StubSource::ok(19.0760, 72.8777));
        let provider = LocationProvider::with_options(
            source.clone(),
            LocationOptions {
                maximum_age: Duration::ZERO,
                ..LocationOptions::default()
            },
        );

        provider.current_location().await.expect("first fix");
        provider.current_location().await.expect("second fix");
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }
}
