pub mod record;
pub mod variant;

// re-export for cleaner imports
pub use self::record::MafRecord;
pub use self::variant::Variant;
