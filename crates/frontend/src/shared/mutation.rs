//! Common flow of every write made by the stores: resolve the tenant, send,
//! report, and re-read the authoritative collection on success.

use std::future::Future;

use contracts::system::auth::MasterAdminId;

use super::api_utils::ApiError;
use super::notify::Notifier;

/// Run one mutation.
///
/// * no tenant: an error notification, nothing is sent
/// * request fails: the error text is shown and returned
/// * request succeeds: `resync` runs to completion before the success
///   notification, so listeners already hold the fresh collection when the
///   caller resumes
pub async fn run_mutation<T, Req, ReqFut, Resync, ResyncFut>(
    session: Option<MasterAdminId>,
    notifier: &dyn Notifier,
    request: Req,
    resync: Resync,
    success_message: impl FnOnce(&T) -> String,
) -> Result<T, ApiError>
where
    Req: FnOnce(MasterAdminId) -> ReqFut,
    ReqFut: Future<Output = Result<T, ApiError>>,
    Resync: FnOnce() -> ResyncFut,
    ResyncFut: Future<Output = Result<(), ApiError>>,
{
    let Some(admin_id) = session else {
        let err = ApiError::NotAuthenticated;
        notifier.error(&err.to_string());
        return Err(err);
    };

    let value = match request(admin_id).await {
        Ok(value) => value,
        Err(err) => {
            notifier.error(&err.to_string());
            return Err(err);
        }
    };

    if let Err(err) = resync().await {
        log::warn!("Refresh after mutation failed: {}", err);
    }

    notifier.success(&success_message(&value));
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::shared::notify::NotificationLevel;
    use crate::shared::test_support::RecordingNotifier;

    fn admin() -> Option<MasterAdminId> {
        MasterAdminId::new("5")
    }

    #[tokio::test]
    async fn test_missing_session_sends_nothing() {
        let notifier = RecordingNotifier::default();
        let sent = Cell::new(false);

        let result = run_mutation(
            None,
            &notifier,
            |_| async {
                sent.set(true);
                Ok(())
            },
            || async { Ok(()) },
            |_| "done".into(),
        )
        .await;

        assert_eq!(result, Err(ApiError::NotAuthenticated));
        assert!(!sent.get());
        assert_eq!(
            notifier.last(),
            Some((NotificationLevel::Error, "Master Admin not authenticated.".into()))
        );
    }

    #[tokio::test]
    async fn test_rejection_is_reported_without_resync() {
        let notifier = RecordingNotifier::default();
        let resynced = Cell::new(false);

        let result: Result<(), _> = run_mutation(
            admin(),
            &notifier,
            |_| async { Err(ApiError::rejected(400, "Email already registered", "Failed")) },
            || async {
                resynced.set(true);
                Ok(())
            },
            |_| "done".into(),
        )
        .await;

        assert!(result.is_err());
        assert!(!resynced.get());
        assert_eq!(
            notifier.last(),
            Some((NotificationLevel::Error, "Email already registered".into()))
        );
    }

    #[tokio::test]
    async fn test_success_resyncs_before_reporting() {
        let notifier = RecordingNotifier::default();
        let calls = std::cell::RefCell::new(Vec::new());
        let order = &calls;

        let result = run_mutation(
            admin(),
            &notifier,
            |id| async move {
                order.borrow_mut().push("request");
                Ok(id.to_string())
            },
            || async {
                order.borrow_mut().push("resync");
                Err(ApiError::Transport("offline".into()))
            },
            |id| format!("saved for {id}"),
        )
        .await;

        assert_eq!(result.as_deref(), Ok("5"));
        assert_eq!(*calls.borrow(), vec!["request", "resync"]);
        assert_eq!(
            notifier.last(),
            Some((NotificationLevel::Success, "saved for 5".into()))
        );
    }
}
