//! Ambient access to the update being dispatched.
//!
//! Task-local, not global: the value exists only inside the handler's call
//! tree, so two pollers in one process cannot observe each other's updates.

use std::future::Future;

use crate::types::Update;

tokio::task_local! {
    static CURRENT_UPDATE: Update;
}

/// Run `fut` with `update` installed as the ambient current update.
pub(crate) async fn with_current_update<F>(update: Update, fut: F) -> F::Output
where
    F: Future,
{
    CURRENT_UPDATE.scope(update, fut).await
}

/// The update currently being dispatched.
///
/// `Some` only when called (transitively) from inside a handler invocation;
/// `None` everywhere else.
pub fn current_update() -> Option<Update> {
    CURRENT_UPDATE.try_with(|update| update.clone()).ok()
}
