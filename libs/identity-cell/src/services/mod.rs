pub mod credential;
pub mod identity;

pub use credential::CredentialService;
pub use identity::IdentityStore;
