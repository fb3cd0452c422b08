//! A portfolio contact form built on a small Model-View-Update (MVU) runtime.
//!
//! The form collects a name, an email address and a message, checks them
//! client-side, and hands valid submissions to a hosted email relay
//! ([`EmailJsRelay`] by default). While the relay call is in flight the
//! submit control is disabled; on success the form is cleared and a
//! confirmation is shown, on failure the input is kept and an inline error
//! is displayed.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use portfolio_contact::config::RelayConfig;
//! use portfolio_contact::contact::{ContactForm, ContactModel, TextRenderer};
//! use portfolio_contact::{EmailJsRelay, MvuRuntime};
//!
//! # async fn start() -> Result<(), Box<dyn std::error::Error>> {
//! let relay = EmailJsRelay::new(RelayConfig::from_env()?)?;
//! let form = ContactForm::new(Arc::new(relay));
//!
//! // Hand effects to your executor, e.g. `tokio::spawn(fut);`
//! let spawner = |_fut: futures::future::BoxFuture<'static, ()>| {};
//!
//! let mut runtime = MvuRuntime::new(
//!     ContactModel::default(),
//!     form,
//!     TextRenderer::new(std::io::stdout()),
//!     spawner,
//! );
//! runtime.run().await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod contact;
pub mod relay;

mod effect;
mod emitter;
mod logic;
mod renderer;
mod runtime;

pub use effect::Effect;
pub use emitter::Emitter;
pub use logic::MvuLogic;
pub use relay::{EmailJsRelay, EmailRelay, RelayError};
pub use renderer::Renderer;
pub use runtime::{MvuRuntime, Spawner};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
#[cfg(any(test, feature = "testing"))]
pub use runtime::{create_test_spawner, QueuedSpawner, TestMvuDriver, TestMvuRuntime};
