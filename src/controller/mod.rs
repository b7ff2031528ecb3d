//! Page-level controllers: one list controller per collection screen,
//! one form controller per open edit panel. Both are generic over the
//! entity type and talk to the gateway trait, never to HTTP directly.

pub mod form;
pub mod list;

pub use form::{FormController, FormMode};
pub use list::{ListController, ListQuery, ListView, LoadState, Signal, SortDirection};
