use tracing::{debug, warn};

use tuiter_core::{new_id, now_rfc3339};
use tuiter_store::ID_KEY;

use crate::model::{DeleteStatus, Message, NewMessage, Ref};
use crate::service::collections::{Documents, MESSAGES};
use crate::service::TuiterError;

/// Access object for the `messages` collection.
pub struct MessageDao {
    docs: Documents,
}

impl MessageDao {
    pub fn new(docs: Documents) -> Self {
        Self { docs }
    }

    pub async fn user_messages_user(&self, input: NewMessage) -> Result<Message, TuiterError> {
        let message = Message {
            id: new_id(),
            message: input.message,
            from: Ref::Id(input.from),
            to: Ref::Id(input.to),
            sent_on: input.sent_on.unwrap_or_else(now_rfc3339),
        };
        self.docs.insert(MESSAGES, &message.id, &message).await?;
        debug!(mid = %message.id, "message sent");
        Ok(message)
    }

    /// Messages whose sender (`from`) is `uid`.
    pub async fn find_all_messages_sent_by_user(&self, uid: &str) -> Result<Vec<Message>, TuiterError> {
        self.docs.find(MESSAGES, &[("from", uid)]).await
    }

    /// Messages whose recipient (`to`) is `uid`.
    pub async fn find_all_messages_received_by_user(
        &self,
        uid: &str,
    ) -> Result<Vec<Message>, TuiterError> {
        self.docs.find(MESSAGES, &[("to", uid)]).await
    }

    /// Delete a message by id. `uid` is not matched against sender or
    /// recipient, so any user can delete any message.
    pub async fn user_deletes_message(
        &self,
        uid: &str,
        mid: &str,
    ) -> Result<DeleteStatus, TuiterError> {
        let status = self.docs.delete_one(MESSAGES, &[(ID_KEY, mid)]).await?;
        if status.deleted_count > 0 {
            warn!(uid, mid, "message deleted without ownership check");
        }
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{MessageBody, NewMessage};
    use crate::service::testing::{self, test_service};

    fn body(text: &str) -> MessageBody {
        MessageBody {
            message: text.into(),
            sent_on: None,
        }
    }

    #[tokio::test]
    async fn test_sent_and_received() {
        let svc = test_service();
        let a = testing::user(&svc, "a").await;
        let b = testing::user(&svc, "b").await;

        let m = svc
            .messages
            .user_messages_user(NewMessage::new(&a.id, &b.id, body("hi b")))
            .await
            .unwrap();
        assert_eq!(m.from.as_id(), Some(a.id.as_str()));
        assert_eq!(m.to.as_id(), Some(b.id.as_str()));
        assert!(!m.sent_on.is_empty());

        assert_eq!(svc.messages.find_all_messages_sent_by_user(&a.id).await.unwrap(), vec![m.clone()]);
        assert!(svc.messages.find_all_messages_received_by_user(&a.id).await.unwrap().is_empty());
        assert_eq!(svc.messages.find_all_messages_received_by_user(&b.id).await.unwrap(), vec![m]);
    }

    #[tokio::test]
    async fn test_delete_ignores_uid() {
        let svc = test_service();
        let m = svc
            .messages
            .user_messages_user(NewMessage::new("a", "b", body("secret")))
            .await
            .unwrap();

        let status = svc.messages.user_deletes_message("stranger", &m.id).await.unwrap();
        assert_eq!(status.deleted_count, 1);
        let status = svc.messages.user_deletes_message("a", &m.id).await.unwrap();
        assert_eq!(status.deleted_count, 0);
    }

    #[tokio::test]
    async fn test_explicit_sent_on_is_kept() {
        let svc = test_service();
        let input = MessageBody {
            message: "dated".into(),
            sent_on: Some("2026-01-02T03:04:05Z".into()),
        };
        let m = svc
            .messages
            .user_messages_user(NewMessage::new("a", "b", input))
            .await
            .unwrap();
        assert_eq!(m.sent_on, "2026-01-02T03:04:05Z");
    }
}
