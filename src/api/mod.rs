//! Boundary DTOs consumed by the display layer.

pub mod types;

pub use types::{
    DailyProfileData, ProfilePointData, RecommendationData, SnapshotEntryData, VenueSnapshotData,
};
