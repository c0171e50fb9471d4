//! WebInvite - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `webinvite_test::` paths.

#![allow(ambiguous_glob_reexports)]

pub mod component {
    pub use webinvite_core::*;
    pub use webinvite_service::*;

    pub mod db {
        pub use webinvite_db::db::*;

        // Depot handlers from app
        pub mod handler {
            pub use webinvite_app::backend_handler::*;
        }
    }

    pub mod model {
        pub use webinvite_db::model::*;
    }

    pub mod storage {
        pub use webinvite_db::storage::*;
    }

    // Config from both core and app
    pub mod config {
        pub use webinvite_app::config::ConfigHandler;
        pub use webinvite_core::config::*;
    }
}

pub mod app {
    pub use webinvite_app::*;

    pub mod api {
        pub use webinvite_app::app::api::*;
    }
}
