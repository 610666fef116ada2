//! Signed-in user capability.

use crate::error::KintaiResult;

/// The identity collaborator, reduced to the only capabilities the
/// attendance client consumes: a stable user id, a display label, and a
/// sign-out action.
///
/// How the user signed in (and how the session is stored) is the
/// implementor's business. A client with no `Identity` in hand is "not
/// ready" and must not attempt any store operation.
pub trait Identity {
    /// Opaque stable identifier of the signed-in user.
    fn id(&self) -> &str;

    /// Human-readable label for greeting the user.
    fn display_label(&self) -> &str;

    /// End the session. Consumes the identity; it is unusable afterwards.
    fn sign_out(self) -> KintaiResult<()>;
}
