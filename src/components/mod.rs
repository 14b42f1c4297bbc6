// UI Components
// Presentational components for activity records

pub mod activity_card;

pub use activity_card::{ActivityCard, ActivityCardSkeleton};
