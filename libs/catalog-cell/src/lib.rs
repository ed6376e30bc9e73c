// =====================================================================================
// CATALOG CELL - SERVICES, TESTIMONIALS & SMILE GALLERY
// =====================================================================================

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::*;
pub use router::catalog_routes;
