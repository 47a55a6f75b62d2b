// Primitive
pub mod pulse;

// Fixed-shape composites (depend on pulse)
pub mod cards;
pub mod chart;

// Repetition and full-page layouts (depend on cards)
pub mod list;
pub mod page;

// Re-exports for convenience
pub use cards::*;
pub use chart::*;
pub use list::*;
pub use page::*;
pub use pulse::*;
