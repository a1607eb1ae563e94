/// Presentation layer: thin egui glue over the core in `data`, `chart`,
/// `auth` and `state`. Nothing here computes; it renders and forwards
/// interactions to [`AppState`](crate::state::AppState).
pub mod login;
pub mod panels;
pub mod plot;
