pub mod session;

pub use session::{get_session, CurrentSession, MaybeSession};
