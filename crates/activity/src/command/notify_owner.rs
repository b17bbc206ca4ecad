use tracing::info;

use greenloop_shared::ports::Notifier;

use crate::repository;

impl<N: Notifier> super::Command<N> {
    /// Ad hoc message from an admin to the activity's owner. No state change.
    pub async fn notify_owner(
        &self,
        activity_id: impl Into<String>,
        admin_id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> greenloop_shared::Result<()> {
        let activity_id = activity_id.into();
        let admin_id = admin_id.into();
        let title = title.into();
        let message = message.into();

        let mut conn = self.pool.acquire().await?;
        let Some(row) = repository::find(&mut conn, &activity_id).await? else {
            greenloop_shared::not_found!("activity");
        };
        drop(conn);

        info!(
            activity_id = %activity_id,
            admin_id = %admin_id,
            user_id = %row.user_id,
            "sending ad hoc activity message"
        );

        self.notify_best_effort(&row.user_id, &title, &message).await;

        Ok(())
    }
}
