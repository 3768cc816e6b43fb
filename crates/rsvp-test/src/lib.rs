//! RSVP import and suggestion core - integration test support.
//!
//! Re-exports the workspace crates under one path and provides the fixtures
//! shared by the integration tests in `tests/`.

pub mod component {
    pub use rsvp_core::{config, normalize, types};

    pub mod contacts {
        pub use rsvp_contacts::*;
    }

    pub mod catalog {
        pub use rsvp_catalog::*;
    }

    pub mod service {
        pub use rsvp_service::*;
    }
}

pub mod app {
    pub use rsvp_app::*;
}

pub mod fixtures;
