//! # Classtrack API
//!
//! A multi-tenant school-management REST API built with Rust and Axum.
//!
//! Administrators register a school account, then manage classes, subjects,
//! teachers, and students under it. Teachers and students log in with their
//! own credentials; attendance and exam results are recorded per student and
//! per subject. Notices and complaints are independent tenant-scoped boards.
//!
//! ## Architecture
//!
//! The codebase follows a modular architecture inspired by NestJS:
//!
//! ```text
//! src/
//! ├── config/           # Configuration modules (server, store, CORS)
//! ├── modules/          # Feature modules
//! │   ├── schools/     # School (tenant) accounts
//! │   ├── classes/     # Class registry
//! │   ├── subjects/    # Subject catalog
//! │   ├── teachers/    # Teacher directory and attendance
//! │   ├── students/    # Student directory, results, attendance
//! │   ├── notices/     # Notice board
//! │   └── complaints/  # Complaint log
//! ├── store/            # Embedded document store
//! └── utils/            # Shared utilities (errors, password hashing)
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Business logic
//! - `model.rs`: Stored documents, DTOs, response views
//! - `router.rs`: Axum router configuration
//!
//! ## Tenancy and cascades
//!
//! Every entity carries a `school_id` scoping it to its owning school.
//! Deleting a school removes everything scoped to it; deleting a class
//! removes its students, subjects, and teachers; deleting a subject clears
//! teacher assignments and scrubs student results and attendance. Cascade
//! steps are sequential single-collection writes, not transactions: a failure
//! mid-cascade leaves the earlier steps committed and surfaces the error.
//!
//! ## Security Considerations
//!
//! - Passwords are hashed with bcrypt and never serialized into responses
//! - Partial updates apply an explicit allow-listed field set per entity
//! - There is no session model; login is a one-shot credential check

pub mod config;
pub mod docs;
pub mod logging;
pub mod modules;
pub mod router;
pub mod state;
pub mod store;
pub mod utils;
pub mod validator;
