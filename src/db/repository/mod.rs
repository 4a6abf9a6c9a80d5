//! Repository trait definitions.
//!
//! The traits here are the abstract seam between the analytics/service layer
//! and the storage backends. Implementations must be `Send + Sync` to work
//! with async Rust.

use async_trait::async_trait;

pub mod error;
pub mod trips;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use trips::TripRepository;

use crate::api::VesselId;
use crate::models::Vessel;

/// Repository trait for vessel registry operations.
#[async_trait]
pub trait VesselRepository: Send + Sync {
    /// Store a vessel and return its assigned ID.
    ///
    /// The `id` field of the input is ignored; the repository assigns one.
    async fn store_vessel(&self, vessel: &Vessel) -> RepositoryResult<VesselId>;

    /// Fetch a single vessel.
    ///
    /// # Returns
    /// * `Ok(Vessel)` - The vessel with `id` populated
    /// * `Err(RepositoryError::NotFound)` - If no such vessel exists
    async fn fetch_vessel(&self, vessel_id: VesselId) -> RepositoryResult<Vessel>;

    /// List all registered vessels in insertion order.
    async fn list_vessels(&self) -> RepositoryResult<Vec<Vessel>>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}

/// Combined repository interface required by the service layer.
pub trait FullRepository: VesselRepository + TripRepository {}

impl<T: VesselRepository + TripRepository> FullRepository for T {}
