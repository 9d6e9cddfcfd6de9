// Sessions and accounts. No credential store: a login or signup opens an
// in-memory session for the submitted profile.

pub mod extract;
pub mod handlers;
pub mod sessions;
pub mod validation;
