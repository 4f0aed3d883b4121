pub mod interest_snapshot;
