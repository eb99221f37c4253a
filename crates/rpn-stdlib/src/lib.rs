//! Standard libraries for the RPN calculator.
//!
//! Library IDs:
//! - Arithmetic: ARITH_LIB (64)
//! - Transcendentals: TRANSCENDENTALS_LIB (66)

pub mod arith;
pub mod codecs;
pub mod library;
pub mod transcendentals;

pub use arith::{ARITH_LIB, ArithLib};
pub use codecs::parse_number;
pub use library::{
    CommandInfo, CommandKind, ExecuteContext, ExecuteResult, LibId, Library, LibraryRegistry,
};
pub use transcendentals::{TRANSCENDENTALS_LIB, TranscendentalsLib};

/// Register all standard libraries with a registry.
pub fn register_standard_libs(registry: &mut LibraryRegistry) {
    registry.add(TranscendentalsLib);
    registry.add(ArithLib);
}
