//! Domain layer constants
//!
//! Binding priority values shared by the registry and its lookups.
//! Infrastructure-specific constants remain in
//! `cfgreg_infrastructure::constants`.

// ============================================================================
// BINDING PRIORITY CONSTANTS
// ============================================================================

/// Priority for authentication providers
pub const PRIORITY_AUTHENTICATION: i32 = 1000;

/// Priority for authorization providers
pub const PRIORITY_AUTHORIZATION: i32 = 2000;

/// Priority for header decorators
pub const PRIORITY_HEADER_DECORATOR: i32 = 3000;

/// Priority for entity coders (compression, encoding)
pub const PRIORITY_ENTITY_CODER: i32 = 4000;

/// Priority for user-level providers; the fallback when nothing is declared
pub const PRIORITY_USER: i32 = 5000;
