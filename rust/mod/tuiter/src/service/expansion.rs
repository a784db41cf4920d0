//! Reference expansion.
//!
//! Relation records store bare ids. Reads that return "populated" documents
//! fetch each referenced entity by id and attach it in place. A reference
//! whose target is gone becomes [`Ref::Dangling`] and serializes as `null`.

use crate::model::{Ref, Tuit, User};
use crate::service::collections::{Documents, TUITS, USERS};
use crate::service::TuiterError;

/// Replace a user id with the stored user.
pub async fn user(docs: &Documents, reference: Ref<User>) -> Result<Ref<User>, TuiterError> {
    let id = match reference {
        Ref::Id(id) => id,
        other => return Ok(other),
    };
    Ok(docs
        .find_by_id::<User>(USERS, &id)
        .await?
        .map_or(Ref::Dangling, |user| Ref::Expanded(Box::new(user))))
}

/// Replace a tuit id with the stored tuit. With `with_author`, the tuit's
/// own `postedBy` is expanded as well.
pub async fn tuit(
    docs: &Documents,
    reference: Ref<Tuit>,
    with_author: bool,
) -> Result<Ref<Tuit>, TuiterError> {
    let id = match reference {
        Ref::Id(id) => id,
        other => return Ok(other),
    };
    let Some(mut tuit) = docs.find_by_id::<Tuit>(TUITS, &id).await? else {
        return Ok(Ref::Dangling);
    };
    if with_author {
        tuit.posted_by = user(docs, tuit.posted_by).await?;
    }
    Ok(Ref::Expanded(Box::new(tuit)))
}
