//! Administrator authorisation for HTTP handlers.
//!
//! A cookie alone is not enough: the user it names must still exist in the
//! store. Sessions naming a vanished user are purged.

use tracing::{error, warn};

use crate::domain::{Error, User};

use super::ApiResult;
use super::session::{AUTHENTICATION_REQUIRED, SessionContext};
use super::state::HttpState;

/// Resolve the administrator behind `session` or fail with `unauthorized`.
pub async fn require_admin(session: &SessionContext, state: &HttpState) -> ApiResult<User> {
    let id = session.require_admin_id()?;
    match state.users.get_user(id).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => {
            warn!(user_id = %id, "session names an unknown user");
            session.end();
            Err(Error::unauthorized(AUTHENTICATION_REQUIRED))
        }
        Err(err) => {
            error!(user_id = %id, error = %err, "user lookup failed during authorisation");
            Err(Error::internal(format!("user lookup failed: {err}")))
        }
    }
}
