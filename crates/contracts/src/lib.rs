//! Page enhancement logic for the portfolio site.
//!
//! Everything here is DOM-free so it can be exercised on the host. The
//! `folio-frontend` crate binds it to the live document.

pub mod domain;
pub mod shared;
