//! Auth-domain scope lists, token models, and user profile claims.

pub mod scope;
pub mod token;
pub mod userinfo;

pub use scope::*;
pub use token::*;
pub use userinfo::*;
