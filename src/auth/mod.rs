pub mod session;
pub mod supabase;

pub use session::{AnonymousVerifier, AuthError, Session, SessionVerifier};
pub use supabase::SupabaseVerifier;
