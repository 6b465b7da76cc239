//! Domain types shared by the pipeline, the query codec and the HTTP layer.

pub mod record;
pub mod view_state;
